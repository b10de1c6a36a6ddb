//! Conversion of pixel buffers into display-ready surfaces.
//!
//! A [`DisplaySurface`] owns a tightly packed copy of the samples, so it stays
//! valid after the source buffer is dropped or modified. Three-channel input
//! is taken to be BGR and is emitted as RGB; HSV-recoded buffers therefore
//! show their H/S/V samples in the blue/green/red slots.
use crate::color::swap_red_blue_row;
use crate::image::{Channels, PixelBuffer, SampleDepth, SampleView};
use image::{DynamicImage, GrayImage, RgbImage};
use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayFormat {
    Gray8,
    Rgb24,
}

impl DisplayFormat {
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            DisplayFormat::Gray8 => 1,
            DisplayFormat::Rgb24 => 3,
        }
    }
}

/// Why a buffer could not be turned into a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnsupportedFormat {
    Layout { channels: usize, depth: SampleDepth },
    Truncated { len: usize, required: usize },
}

impl fmt::Display for UnsupportedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnsupportedFormat::Layout { channels, depth } => write!(
                f,
                "unsupported buffer format: {channels} channel(s) of {depth} samples"
            ),
            UnsupportedFormat::Truncated { len, required } => {
                write!(f, "buffer too short for its geometry ({len} < {required} bytes)")
            }
        }
    }
}

impl std::error::Error for UnsupportedFormat {}

/// Immutable, tightly packed image ready to be painted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplaySurface {
    width: usize,
    height: usize,
    format: DisplayFormat,
    pixels: Vec<u8>,
}

impl DisplaySurface {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn format(&self) -> DisplayFormat {
        self.format
    }

    /// Packed samples, `width * bytes_per_pixel` per row.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> &[u8] {
        let bpp = self.format.bytes_per_pixel();
        let start = (y * self.width + x) * bpp;
        &self.pixels[start..start + bpp]
    }

    /// Surface of a conforming buffer.
    pub fn from_buffer(buffer: &PixelBuffer) -> Result<Self, UnsupportedFormat> {
        to_display_surface(&buffer.as_view())
    }

    /// Hand the samples over as an `image` crate value, e.g. for a texture
    /// upload. `None` when a dimension does not fit in `u32`.
    pub fn into_dynamic_image(self) -> Option<DynamicImage> {
        let width = u32::try_from(self.width).ok()?;
        let height = u32::try_from(self.height).ok()?;
        match self.format {
            DisplayFormat::Gray8 => {
                GrayImage::from_raw(width, height, self.pixels).map(DynamicImage::ImageLuma8)
            }
            DisplayFormat::Rgb24 => {
                RgbImage::from_raw(width, height, self.pixels).map(DynamicImage::ImageRgb8)
            }
        }
    }
}

/// Convert a 1- or 3-channel 8-bit buffer into a display surface.
///
/// One channel maps to [`DisplayFormat::Gray8`]; three channels map to
/// [`DisplayFormat::Rgb24`] with the first and third samples exchanged. Row
/// padding is dropped.
pub fn to_display_surface(view: &SampleView<'_>) -> Result<DisplaySurface, UnsupportedFormat> {
    let format = match (Channels::from_count(view.channels), view.depth) {
        (Some(Channels::Gray), SampleDepth::U8) => DisplayFormat::Gray8,
        (Some(Channels::Bgr), SampleDepth::U8) => DisplayFormat::Rgb24,
        _ => {
            return Err(UnsupportedFormat::Layout {
                channels: view.channels,
                depth: view.depth,
            })
        }
    };
    let required = view.required_len();
    if view.data.len() < required || view.stride < view.row_bytes() {
        return Err(UnsupportedFormat::Truncated {
            len: view.data.len(),
            required,
        });
    }

    let row_len = view.row_bytes();
    let mut pixels = vec![0u8; row_len * view.h];
    if row_len > 0 {
        for (y, dst) in pixels.chunks_exact_mut(row_len).enumerate() {
            let src = view.row(y);
            match format {
                DisplayFormat::Gray8 => dst.copy_from_slice(src),
                DisplayFormat::Rgb24 => swap_red_blue_row(src, dst),
            }
        }
    }

    Ok(DisplaySurface {
        width: view.w,
        height: view.h,
        format,
        pixels,
    })
}
