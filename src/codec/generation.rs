//! The change counter embedded in both blobs.

use std::ops::Range;

/// Byte range holding the generation counter in both blobs.
pub const GENERATION_RANGE: Range<usize> = 10..15;

/// Increment the first byte in `range` that isn't `0xFF`.
///
/// Scanning stops after the first increment. A range of all `0xFF` is left
/// untouched; there is no carry into the next byte. The range is clipped to
/// the buffer.
pub fn bump(blob: &mut [u8], range: Range<usize>) {
    let end = range.end.min(blob.len());
    let start = range.start.min(end);
    if let Some(byte) = blob[start..end].iter_mut().find(|b| **b != 0xFF) {
        *byte = byte.wrapping_add(1);
    }
}
