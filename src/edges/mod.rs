//! Edge processing: image gradients, non-maximum suppression, hysteresis.
//!
//! Building blocks of the Canny detector used by the edge transform:
//!
//! - Gradient computation (Sobel/Scharr) returning `gx`, `gy` and an L1 or L2
//!   magnitude.
//! - Direction-aligned non-maximum suppression classifying local maxima as
//!   weak or strong candidates.
//! - Hysteresis linking producing a binary 0/255 edge mask.
//!
//! Borders are handled by clamping indices (replicate) in the gradient pass;
//! suppression treats magnitudes outside the image as zero.

pub mod canny;
pub mod grad;
pub mod hysteresis;
pub mod nms;

pub use canny::{canny, CannyOptions};
pub use grad::{image_gradients, Grad, GradientKernel, GradientNorm};
pub use hysteresis::{trace_edges, EDGE, NON_EDGE};
pub use nms::{suppress_non_maxima, Candidate, CandidateMap};
