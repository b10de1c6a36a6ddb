//! Fixed-level thresholding.
use crate::image::PixelBuffer;

/// Binary threshold applied per sample: `max_value` where `v > threshold`,
/// 0 elsewhere. Channel layout is preserved.
///
/// Any `threshold` is accepted; below 0 every sample passes, at 255 or above
/// none does.
pub fn threshold_binary(src: &PixelBuffer, threshold: i32, max_value: u8) -> PixelBuffer {
    let mut lut = [0u8; 256];
    for (v, out) in lut.iter_mut().enumerate() {
        if (v as i32) > threshold {
            *out = max_value;
        }
    }
    src.map_rows(src.channels(), |s, d| {
        for (out, &v) in d.iter_mut().zip(s) {
            *out = lut[usize::from(v)];
        }
    })
}
