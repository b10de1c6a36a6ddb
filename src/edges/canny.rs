//! Canny edge detector on a single 8-bit plane.
//!
//! Stages: 3×3 gradients with replicated borders, direction-aligned
//! non-maximum suppression, hysteresis linking. Thresholds are in gray-level
//! units of the chosen gradient norm. When `low > high` the two bounds are
//! exchanged before use.
use super::grad::{image_gradients, GradientKernel, GradientNorm};
use super::hysteresis::trace_edges;
use super::nms::suppress_non_maxima;
use crate::image::ImageU8;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CannyOptions {
    /// Lower hysteresis bound: weaker maxima are discarded.
    pub low: f32,
    /// Upper hysteresis bound: stronger maxima seed edges.
    pub high: f32,
    pub kernel: GradientKernel,
    pub norm: GradientNorm,
}

impl Default for CannyOptions {
    fn default() -> Self {
        Self {
            low: 100.0,
            high: 200.0,
            kernel: GradientKernel::Sobel,
            norm: GradientNorm::L1,
        }
    }
}

impl CannyOptions {
    pub fn with_thresholds(low: f32, high: f32) -> Self {
        Self {
            low,
            high,
            ..Default::default()
        }
    }

    /// Bounds ordered as `(low, high)`.
    pub fn ordered_thresholds(&self) -> (f32, f32) {
        if self.low > self.high {
            (self.high, self.low)
        } else {
            (self.low, self.high)
        }
    }
}

/// Run the detector and return a tightly packed `w × h` mask of 0/255.
pub fn canny(plane: &ImageU8<'_>, opts: &CannyOptions) -> Vec<u8> {
    let (low, high) = opts.ordered_thresholds();
    if opts.low > opts.high {
        debug!(
            "canny: low threshold {} above high {}, swapping",
            opts.low, opts.high
        );
    }

    let l = plane.to_f32();
    let grad = image_gradients(&l, opts.kernel, opts.norm);
    let candidates = suppress_non_maxima(&grad, low, high);
    trace_edges(&candidates)
}
