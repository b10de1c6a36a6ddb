use serde::Serialize;
use std::fmt;

/// Storage type of a single sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleDepth {
    U8,
    U16,
    F32,
}

impl SampleDepth {
    pub const fn bits(self) -> u32 {
        match self {
            SampleDepth::U8 => 8,
            SampleDepth::U16 => 16,
            SampleDepth::F32 => 32,
        }
    }

    pub const fn bytes(self) -> usize {
        self.bits() as usize / 8
    }
}

impl fmt::Display for SampleDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// Borrowed, untyped description of an interleaved sample buffer.
///
/// Unlike [`PixelBuffer`](super::PixelBuffer) this carries any channel count
/// and depth, so consumers can reject layouts they do not handle.
#[derive(Clone, Copy, Debug)]
pub struct SampleView<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub channels: usize,
    pub depth: SampleDepth,
    pub data: &'a [u8],
}

impl<'a> SampleView<'a> {
    /// Bytes covered by one row of samples, excluding padding.
    #[inline]
    pub fn row_bytes(&self) -> usize {
        self.w * self.channels * self.depth.bytes()
    }

    /// Minimum `data` length implied by the geometry.
    pub fn required_len(&self) -> usize {
        if self.h == 0 {
            0
        } else {
            (self.h - 1) * self.stride + self.row_bytes()
        }
    }

    #[inline]
    pub fn row(&self, y: usize) -> &'a [u8] {
        let start = y * self.stride;
        &self.data[start..start + self.row_bytes()]
    }
}
