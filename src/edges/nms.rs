//! Non-maximum suppression on gradient magnitude with direction alignment.
//!
//! For each pixel the gradient direction is quantized to one of four
//! axes (0°, 45°, 90°, 135°) and the magnitude is compared with its two
//! neighbors along that axis. Survivors above the low threshold become
//! hysteresis candidates; survivors above the high threshold become seeds.
//!
//! Horizontal and vertical comparisons are strict towards the preceding
//! neighbor and non-strict towards the following one, so a plateau two
//! pixels wide (a sharp step) keeps exactly one pixel. Neighbors outside the
//! image count as zero magnitude, so edges reach the border.
use crate::edges::grad::Grad;
use crate::image::ImageView;

const TAN_22_5_DEG: f32 = 0.41421356237;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Candidate {
    #[default]
    Suppressed,
    Weak,
    Strong,
}

/// Per-pixel classification after suppression, row-major `w × h`.
#[derive(Clone, Debug)]
pub struct CandidateMap {
    pub w: usize,
    pub h: usize,
    pub labels: Vec<Candidate>,
}

impl CandidateMap {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Candidate {
        self.labels[y * self.w + x]
    }
}

/// Classify local maxima of `grad.mag` against the two hysteresis bounds.
///
/// A pixel is a candidate when `mag > low` and a seed when `mag > high`.
pub fn suppress_non_maxima(grad: &Grad, low: f32, high: f32) -> CandidateMap {
    let w = grad.mag.w;
    let h = grad.mag.h;
    let mut labels = vec![Candidate::Suppressed; w * h];

    for y in 0..h {
        let mag_row = grad.mag.row(y);
        let gx_row = grad.gx.row(y);
        let gy_row = grad.gy.row(y);
        let out = &mut labels[y * w..(y + 1) * w];

        for x in 0..w {
            let mag = mag_row[x];
            if mag <= low {
                continue;
            }

            let gx = gx_row[x];
            let gy = gy_row[x];
            let abs_gx = gx.abs();
            let abs_gy = gy.abs();
            let (xi, yi) = (x as isize, y as isize);
            let at = |dx: isize, dy: isize| magnitude_at(grad, xi + dx, yi + dy);

            let is_max = if abs_gy <= abs_gx * TAN_22_5_DEG {
                mag > at(-1, 0) && mag >= at(1, 0)
            } else if abs_gx <= abs_gy * TAN_22_5_DEG {
                mag > at(0, -1) && mag >= at(0, 1)
            } else if (gx >= 0.0) == (gy >= 0.0) {
                // Gradient points along the main diagonal (y grows downwards).
                mag > at(-1, -1) && mag > at(1, 1)
            } else {
                mag > at(1, -1) && mag > at(-1, 1)
            };

            if !is_max {
                continue;
            }

            out[x] = if mag > high {
                Candidate::Strong
            } else {
                Candidate::Weak
            };
        }
    }

    CandidateMap { w, h, labels }
}

/// Gradient magnitude at `(x, y)`, zero outside the image.
#[inline]
fn magnitude_at(grad: &Grad, x: isize, y: isize) -> f32 {
    if x < 0 || y < 0 || x as usize >= grad.mag.w || y as usize >= grad.mag.h {
        0.0
    } else {
        grad.mag.get(x as usize, y as usize)
    }
}
