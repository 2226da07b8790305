//! Strength (colour temperature) stored in the settings blob.
//!
//! Bytes `0x23` (low) and `0x24` (high) hold the target temperature as
//! `hi * 64 + (lo - 128) / 2` Kelvin. Strength is the user-facing inverse:
//! 0% is 6500K and 100% is 1200K.

use crate::codec::generation::{GENERATION_RANGE, bump};
use crate::error::{NightLightError, Result};

/// Warmest temperature, reached at 100% strength.
pub const MIN_KELVIN: f64 = 1200.0;
/// Neutral temperature, reached at 0% strength.
pub const MAX_KELVIN: f64 = 6500.0;

const TEMP_LO_OFFSET: usize = 0x23;
const TEMP_HI_OFFSET: usize = 0x24;

/// Convert a temperature to strength (0.0-100.0, unrounded).
pub fn kelvin_to_percentage(kelvin: f64) -> f64 {
    100.0 - (kelvin - MIN_KELVIN) / (MAX_KELVIN - MIN_KELVIN) * 100.0
}

/// Convert strength to a temperature. `percent` is clamped to 0-100.
pub fn percentage_to_kelvin(percent: i32) -> f64 {
    let percent = f64::from(percent.clamp(0, 100));
    MAX_KELVIN - percent / 100.0 * (MAX_KELVIN - MIN_KELVIN)
}

/// Split a temperature into its `(lo, hi)` byte pair.
///
/// Expects a temperature within `MIN_KELVIN..=MAX_KELVIN`.
pub fn kelvin_to_bytes(kelvin: f64) -> (u8, u8) {
    let mut hi = (kelvin / 64.0).floor();
    let mut lo = ((kelvin - hi * 64.0) * 2.0 + 128.0).round();
    if lo >= 256.0 {
        hi += 1.0;
        lo -= 128.0;
    }
    (lo as u8, hi as u8)
}

fn check_len(blob: &[u8]) -> Result<()> {
    if blob.len() <= TEMP_HI_OFFSET {
        return Err(NightLightError::format(format!(
            "settings value is {} bytes, need at least {}",
            blob.len(),
            TEMP_HI_OFFSET + 1
        )));
    }
    Ok(())
}

/// Decode the stored temperature in Kelvin.
///
/// # Errors
/// [`NightLightError::Format`] if the blob is too short.
pub fn decode_kelvin(blob: &[u8]) -> Result<f64> {
    check_len(blob)?;
    let lo = f64::from(blob[TEMP_LO_OFFSET]);
    let hi = f64::from(blob[TEMP_HI_OFFSET]);
    Ok(hi * 64.0 + (lo - 128.0) / 2.0)
}

/// Decode the strength percentage (0-100).
///
/// # Errors
/// [`NightLightError::Format`] if the blob is too short or the temperature
/// falls outside 1200-6500K.
pub fn decode_percentage(blob: &[u8]) -> Result<u8> {
    let kelvin = decode_kelvin(blob)?;
    if !(MIN_KELVIN..=MAX_KELVIN).contains(&kelvin) {
        return Err(NightLightError::format(format!(
            "temperature {kelvin}K outside {MIN_KELVIN}-{MAX_KELVIN}K"
        )));
    }
    Ok(kelvin_to_percentage(kelvin).round() as u8)
}

/// Build a copy of `blob` with the strength set to `percent` (clamped to 0-100).
///
/// # Errors
/// [`NightLightError::Format`] if the blob is too short.
pub fn encode_percentage(blob: &[u8], percent: i32) -> Result<Vec<u8>> {
    check_len(blob)?;
    let (lo, hi) = kelvin_to_bytes(percentage_to_kelvin(percent));

    let mut out = blob.to_vec();
    out[TEMP_LO_OFFSET] = lo;
    out[TEMP_HI_OFFSET] = hi;
    bump(&mut out, GENERATION_RANGE);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_blob(kelvin: f64) -> Vec<u8> {
        let mut blob = vec![0u8; 0x30];
        let (lo, hi) = kelvin_to_bytes(kelvin);
        blob[TEMP_LO_OFFSET] = lo;
        blob[TEMP_HI_OFFSET] = hi;
        blob
    }

    #[test]
    fn bytes_for_known_temperatures() {
        assert_eq!(kelvin_to_bytes(6500.0), (200, 101));
        assert_eq!(kelvin_to_bytes(1200.0), (224, 18));
        assert_eq!(kelvin_to_bytes(3850.0), (148, 60));
    }

    #[test]
    fn half_kelvin_resolution() {
        assert_eq!(kelvin_to_bytes(4000.5), (193, 62));
        let blob = settings_blob(4000.5);
        assert_eq!(decode_kelvin(&blob).unwrap(), 4000.5);
    }

    #[test]
    fn rounding_carries_into_high_byte() {
        // 63.9 * 2 + 128 rounds to 256
        let (lo, hi) = kelvin_to_bytes(64.0 * 20.0 + 63.9);
        assert_eq!((lo, hi), (128, 21));
    }

    #[test]
    fn conversion_endpoints() {
        assert_eq!(percentage_to_kelvin(0), MAX_KELVIN);
        assert_eq!(percentage_to_kelvin(100), MIN_KELVIN);
        assert_eq!(percentage_to_kelvin(-20), MAX_KELVIN);
        assert_eq!(percentage_to_kelvin(250), MIN_KELVIN);
        assert_eq!(kelvin_to_percentage(MAX_KELVIN), 0.0);
        assert_eq!(kelvin_to_percentage(MIN_KELVIN), 100.0);
    }

    #[test]
    fn decode_extremes_exact() {
        let blob = settings_blob(6500.0);
        assert_eq!(decode_percentage(&encode_percentage(&blob, 0).unwrap()).unwrap(), 0);
        assert_eq!(decode_percentage(&encode_percentage(&blob, 100).unwrap()).unwrap(), 100);
    }

    #[test]
    fn encode_then_decode_within_one_percent() {
        let blob = settings_blob(4500.0);
        for pct in 0..=100 {
            let encoded = encode_percentage(&blob, pct).unwrap();
            let decoded = i32::from(decode_percentage(&encoded).unwrap());
            assert!((decoded - pct).abs() <= 1, "pct {pct} decoded as {decoded}");
        }
    }

    #[test]
    fn encode_clamps_out_of_range() {
        let blob = settings_blob(4500.0);
        let over = encode_percentage(&blob, 140).unwrap();
        assert_eq!(decode_percentage(&over).unwrap(), 100);
        let under = encode_percentage(&blob, -5).unwrap();
        assert_eq!(decode_percentage(&under).unwrap(), 0);
    }

    #[test]
    fn encode_only_touches_temperature_and_counter() {
        let mut blob = settings_blob(4500.0);
        blob[0x10] = 0xAB;
        blob[0x2F] = 0xCD;
        let out = encode_percentage(&blob, 40).unwrap();
        assert_eq!(out.len(), blob.len());
        assert_eq!(out[10], 1);
        assert_eq!(out[0x10], 0xAB);
        assert_eq!(out[0x2F], 0xCD);
        assert_eq!(out[..10], blob[..10]);
        assert_eq!(out[11..TEMP_LO_OFFSET], blob[11..TEMP_LO_OFFSET]);
    }

    #[test]
    fn short_blob_is_format_error() {
        let blob = vec![0u8; TEMP_HI_OFFSET];
        assert!(matches!(
            decode_percentage(&blob),
            Err(NightLightError::Format { .. })
        ));
        assert!(matches!(
            encode_percentage(&blob, 50),
            Err(NightLightError::Format { .. })
        ));
        // Exactly long enough.
        let blob = settings_blob(6500.0)[..=TEMP_HI_OFFSET].to_vec();
        assert_eq!(decode_percentage(&blob).unwrap(), 0);
    }

    #[test]
    fn out_of_range_temperature_rejected() {
        let blob = vec![0u8; 0x30];
        assert!(decode_percentage(&blob).is_err());

        let mut hot = vec![0u8; 0x30];
        hot[TEMP_LO_OFFSET] = 128;
        hot[TEMP_HI_OFFSET] = 110;
        assert!(decode_percentage(&hot).is_err());
    }
}
