//! On/off state blob.
//!
//! The state value is 41 bytes when Night Light is off and 43 bytes when it
//! is on. Turning it on inserts `10 00` at offset 23 and flips byte 18 from
//! `0x13` to `0x15`; turning it off reverses both. Every transition also
//! bumps the generation counter, otherwise the shell ignores the change.

use crate::codec::generation::{GENERATION_RANGE, bump};
use crate::error::{NightLightError, Result};

/// Length of the blob while Night Light is off.
pub const DISABLED_LEN: usize = 41;
/// Length of the blob while Night Light is on.
pub const ENABLED_LEN: usize = 43;

const FLAG_OFFSET: usize = 18;
const FLAG_DISABLED: u8 = 0x13;
const FLAG_ENABLED: u8 = 0x15;

const MARKER_OFFSET: usize = 23;
const MARKER: [u8; 2] = [0x10, 0x00];

/// `CB\x01\x00`, present once near the start and once in the middle of a
/// well-formed blob.
const LEGACY_MARKER: [u8; 4] = [0x43, 0x42, 0x01, 0x00];

/// How much of the blob to check before trusting it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Validation {
    /// Length and state byte only.
    #[default]
    Lenient,
    /// Additionally require exactly two `43 42 01 00` sequences.
    Strict,
}

/// Decode whether Night Light is enabled.
///
/// # Errors
/// [`NightLightError::Format`] if the length is neither 41 nor 43, or byte 18
/// disagrees with the length.
pub fn decode_enabled(blob: &[u8]) -> Result<bool> {
    let (enabled, expected_flag) = match blob.len() {
        DISABLED_LEN => (false, FLAG_DISABLED),
        ENABLED_LEN => (true, FLAG_ENABLED),
        len => {
            return Err(NightLightError::format(format!(
                "state value is {len} bytes, expected {DISABLED_LEN} or {ENABLED_LEN}"
            )));
        }
    };

    let flag = blob[FLAG_OFFSET];
    if flag != expected_flag {
        return Err(NightLightError::format(format!(
            "byte {FLAG_OFFSET} is {flag:#04x}, expected {expected_flag:#04x} for a {}-byte value",
            blob.len()
        )));
    }

    Ok(enabled)
}

/// Decode the state, applying the requested level of validation.
pub fn validate(blob: &[u8], validation: Validation) -> Result<bool> {
    if validation == Validation::Strict {
        check_legacy_markers(blob)?;
    }
    decode_enabled(blob)
}

fn check_legacy_markers(blob: &[u8]) -> Result<()> {
    let count = blob
        .windows(LEGACY_MARKER.len())
        .filter(|w| *w == LEGACY_MARKER)
        .count();

    match count {
        2 => Ok(()),
        1 => Err(NightLightError::format(
            "sequence 43 42 01 00 appears only once instead of twice; \
             Night Light may never have been used, enable it manually once",
        )),
        n => Err(NightLightError::format(format!(
            "sequence 43 42 01 00 appears {n} times instead of twice"
        ))),
    }
}

/// Produce the blob for the requested state with lenient validation.
///
/// `None` flips the current state. `Some(state)` returns the input unchanged
/// if it is already in that state.
pub fn toggle(blob: &[u8], desired: Option<bool>) -> Result<Vec<u8>> {
    toggle_with(blob, desired, Validation::Lenient)
}

/// Same as [`toggle`] with an explicit [`Validation`] mode.
pub fn toggle_with(blob: &[u8], desired: Option<bool>, validation: Validation) -> Result<Vec<u8>> {
    let enabled = validate(blob, validation)?;
    let target = desired.unwrap_or(!enabled);
    if target == enabled {
        return Ok(blob.to_vec());
    }

    let mut out = if target {
        insert_marker(blob)
    } else {
        remove_marker(blob)?
    };
    bump(&mut out, GENERATION_RANGE);
    Ok(out)
}

fn insert_marker(blob: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(ENABLED_LEN);
    out.extend_from_slice(&blob[..MARKER_OFFSET]);
    out.extend_from_slice(&MARKER);
    out.extend_from_slice(&blob[MARKER_OFFSET..]);
    out[FLAG_OFFSET] = FLAG_ENABLED;
    out
}

fn remove_marker(blob: &[u8]) -> Result<Vec<u8>> {
    let tail = MARKER_OFFSET + MARKER.len();
    if blob[MARKER_OFFSET..tail] != MARKER {
        return Err(NightLightError::format(format!(
            "bytes {MARKER_OFFSET}..{tail} are {:02x?}, expected {MARKER:02x?}",
            &blob[MARKER_OFFSET..tail]
        )));
    }

    let mut out = Vec::with_capacity(DISABLED_LEN);
    out.extend_from_slice(&blob[..MARKER_OFFSET]);
    out.extend_from_slice(&blob[tail..]);
    out[FLAG_OFFSET] = FLAG_DISABLED;
    Ok(out)
}
