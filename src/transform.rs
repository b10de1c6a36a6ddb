//! Pixel transforms selectable by the caller.
//!
//! Every operation borrows its input, allocates a fresh output and is
//! deterministic. Color inputs are reduced to luma first where the transform
//! is defined on a single channel.
use crate::color;
use crate::edges::{canny, CannyOptions};
use crate::image::{Channels, PixelBuffer};
use crate::threshold::threshold_binary;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Transform to apply, with its parameters.
///
/// `Passthrough` stands in for any kind this crate does not know (an unknown
/// name or JSON tag): it yields an unmodified copy instead of an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransformKind {
    Grayscale,
    HsvRecode,
    Binarize {
        threshold: i32,
    },
    EdgeDetect {
        low: i32,
        high: i32,
    },
    #[serde(other)]
    Passthrough,
}

impl TransformKind {
    pub fn name(&self) -> &'static str {
        match self {
            TransformKind::Grayscale => "grayscale",
            TransformKind::HsvRecode => "hsv_recode",
            TransformKind::Binarize { .. } => "binarize",
            TransformKind::EdgeDetect { .. } => "edge_detect",
            TransformKind::Passthrough => "passthrough",
        }
    }

    /// Resolve a kind by name, taking parameters from the arguments that
    /// apply to it. Unknown names resolve to `Passthrough`.
    pub fn from_name(name: &str, threshold: i32, low: i32, high: i32) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "grayscale" | "gray" => TransformKind::Grayscale,
            "hsv" | "hsv_recode" => TransformKind::HsvRecode,
            "binarize" | "binarization" => TransformKind::Binarize { threshold },
            "edge_detect" | "edges" | "canny" => TransformKind::EdgeDetect { low, high },
            _ => TransformKind::Passthrough,
        }
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformKind::Binarize { threshold } => write!(f, "binarize(threshold={threshold})"),
            TransformKind::EdgeDetect { low, high } => {
                write!(f, "edge_detect(low={low}, high={high})")
            }
            other => f.write_str(other.name()),
        }
    }
}

/// Single-channel luma; gray input is copied.
pub fn grayscale(src: &PixelBuffer) -> PixelBuffer {
    color::bgr_to_gray(src)
}

/// Three-channel HSV re-encoding (hue halved); gray input is replicated
/// to three channels first.
pub fn recode_to_hsv(src: &PixelBuffer) -> PixelBuffer {
    color::bgr_to_hsv(src)
}

/// Luma followed by a binary threshold: 255 where `v > threshold`, else 0.
pub fn binarize(src: &PixelBuffer, threshold: i32) -> PixelBuffer {
    match src.channels() {
        Channels::Gray => threshold_binary(src, threshold, 255),
        Channels::Bgr => threshold_binary(&color::bgr_to_gray(src), threshold, 255),
    }
}

/// Luma followed by Canny with the default Sobel kernel and L1 magnitude.
pub fn detect_edges(src: &PixelBuffer, low: i32, high: i32) -> PixelBuffer {
    detect_edges_with(src, &CannyOptions::with_thresholds(low as f32, high as f32))
}

/// Luma followed by Canny with explicit options.
pub fn detect_edges_with(src: &PixelBuffer, opts: &CannyOptions) -> PixelBuffer {
    match src.plane() {
        Some(plane) => {
            let edges = canny(&plane, opts);
            PixelBuffer::packed(src.width(), src.height(), Channels::Gray, edges)
        }
        None => detect_edges_with(&color::bgr_to_gray(src), opts),
    }
}

/// Dispatch on `kind`.
pub fn apply(src: &PixelBuffer, kind: TransformKind) -> PixelBuffer {
    match kind {
        TransformKind::Grayscale => grayscale(src),
        TransformKind::HsvRecode => recode_to_hsv(src),
        TransformKind::Binarize { threshold } => binarize(src, threshold),
        TransformKind::EdgeDetect { low, high } => detect_edges(src, low, high),
        TransformKind::Passthrough => src.clone(),
    }
}
