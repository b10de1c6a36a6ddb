//! Color-space conversions on 8-bit BGR buffers.
//!
//! Numeric conventions match the usual 8-bit vision-library encodings:
//!
//! - Luma: `0.114·B + 0.587·G + 0.299·R` in 14-bit fixed point, rounded.
//! - HSV: `V = max`, `S = 255·(V − min)/V`, `H` in degrees halved so it fits
//!   a byte (`[0, 180)`). Achromatic pixels get `H = 0`, black gets `S = 0`.
use crate::image::{Channels, PixelBuffer};

const GRAY_SHIFT: u32 = 14;
const GRAY_WEIGHT_B: u32 = 1868;
const GRAY_WEIGHT_G: u32 = 9617;
const GRAY_WEIGHT_R: u32 = 4899;

/// Luma of a single BGR pixel.
#[inline]
pub fn bgr_pixel_to_gray(b: u8, g: u8, r: u8) -> u8 {
    let acc = u32::from(b) * GRAY_WEIGHT_B
        + u32::from(g) * GRAY_WEIGHT_G
        + u32::from(r) * GRAY_WEIGHT_R
        + (1 << (GRAY_SHIFT - 1));
    (acc >> GRAY_SHIFT) as u8
}

/// HSV triple of a single BGR pixel, hue halved.
#[inline]
pub fn bgr_pixel_to_hsv(b: u8, g: u8, r: u8) -> [u8; 3] {
    let (b, g, r) = (i32::from(b), i32::from(g), i32::from(r));
    let v = b.max(g).max(r);
    let min = b.min(g).min(r);
    let diff = v - min;

    let s = if v == 0 {
        0
    } else {
        (255.0 * diff as f32 / v as f32).round() as i32
    };

    let h = if diff == 0 {
        0
    } else {
        let sector = if v == r {
            (g - b) as f32
        } else if v == g {
            (b - r + 2 * diff) as f32
        } else {
            (r - g + 4 * diff) as f32
        };
        let h = (30.0 * sector / diff as f32 + 0.5).floor() as i32;
        if h < 0 {
            h + 180
        } else {
            h
        }
    };

    [h as u8, s as u8, v as u8]
}

/// Copy one interleaved 3-channel row, exchanging the first and third sample.
#[inline]
pub fn swap_red_blue_row(src: &[u8], dst: &mut [u8]) {
    for (d, s) in dst.chunks_exact_mut(3).zip(src.chunks_exact(3)) {
        d[0] = s[2];
        d[1] = s[1];
        d[2] = s[0];
    }
}

/// Convert to a single luma channel. Gray input is returned as a copy.
pub fn bgr_to_gray(src: &PixelBuffer) -> PixelBuffer {
    match src.channels() {
        Channels::Gray => src.map_rows(Channels::Gray, |s, d| d.copy_from_slice(s)),
        Channels::Bgr => src.map_rows(Channels::Gray, |s, d| {
            for (out, px) in d.iter_mut().zip(s.chunks_exact(3)) {
                *out = bgr_pixel_to_gray(px[0], px[1], px[2]);
            }
        }),
    }
}

/// Replicate a luma channel into three. Color input is returned as a copy.
pub fn gray_to_bgr(src: &PixelBuffer) -> PixelBuffer {
    match src.channels() {
        Channels::Bgr => src.map_rows(Channels::Bgr, |s, d| d.copy_from_slice(s)),
        Channels::Gray => src.map_rows(Channels::Bgr, |s, d| {
            for (px, &v) in d.chunks_exact_mut(3).zip(s) {
                px.fill(v);
            }
        }),
    }
}

/// Re-encode a BGR buffer as packed HSV. Gray input is promoted first.
pub fn bgr_to_hsv(src: &PixelBuffer) -> PixelBuffer {
    let convert = |s: &[u8], d: &mut [u8]| {
        for (out, px) in d.chunks_exact_mut(3).zip(s.chunks_exact(3)) {
            out.copy_from_slice(&bgr_pixel_to_hsv(px[0], px[1], px[2]));
        }
    };
    match src.channels() {
        Channels::Bgr => src.map_rows(Channels::Bgr, convert),
        Channels::Gray => gray_to_bgr(src).map_rows(Channels::Bgr, convert),
    }
}
