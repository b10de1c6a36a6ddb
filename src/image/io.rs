//! File I/O at the session boundary.
//!
//! - `load_image`: read a PNG/JPEG/BMP into a BGR (or luma) [`PixelBuffer`].
//! - `save_image`: write a [`PixelBuffer`] back, format chosen by extension.
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! Decoding and encoding are delegated to the `image` crate; this module only
//! maps between its RGB layout and the crate's BGR buffers.
use super::{Channels, ImageView, PixelBuffer};
use crate::color;
use image::{DynamicImage, GrayImage, ImageError, ImageFormat, RgbImage};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Channel layout requested when decoding a file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadMode {
    /// Always three channels (gray files are replicated).
    #[default]
    Color,
    /// Always one luma channel.
    Grayscale,
}

#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: io::Error },
    Decode { path: PathBuf, message: String },
    UnsupportedExtension { path: PathBuf },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "Failed to read {}: {source}", path.display())
            }
            LoadError::Decode { path, message } => {
                write!(f, "Failed to decode {}: {message}", path.display())
            }
            LoadError::UnsupportedExtension { path } => write!(
                f,
                "Unsupported image type {} (expected png, jpg, jpeg or bmp)",
                path.display()
            ),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum SaveError {
    Io { path: PathBuf, source: io::Error },
    Encode { path: PathBuf, message: String },
    UnsupportedExtension { path: PathBuf },
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::Io { path, source } => {
                write!(f, "Failed to write {}: {source}", path.display())
            }
            SaveError::Encode { path, message } => {
                write!(f, "Failed to encode {}: {message}", path.display())
            }
            SaveError::UnsupportedExtension { path } => write!(
                f,
                "Unsupported output type {} (expected png, jpg, jpeg or bmp)",
                path.display()
            ),
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SaveError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

fn supported_format(path: &Path) -> Option<ImageFormat> {
    match ImageFormat::from_path(path).ok()? {
        format @ (ImageFormat::Png | ImageFormat::Jpeg | ImageFormat::Bmp) => Some(format),
        _ => None,
    }
}

/// Load an image from disk into an 8-bit BGR or luma buffer.
pub fn load_image(path: &Path, mode: LoadMode) -> Result<PixelBuffer, LoadError> {
    let format = supported_format(path).ok_or_else(|| LoadError::UnsupportedExtension {
        path: path.to_path_buf(),
    })?;
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let decoded = image::load_from_memory_with_format(&bytes, format).map_err(|e| {
        LoadError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    })?;

    let bgr = rgb_to_buffer(decoded.into_rgb8()).map_err(|e| LoadError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(match mode {
        LoadMode::Color => bgr,
        LoadMode::Grayscale => color::bgr_to_gray(&bgr),
    })
}

fn rgb_to_buffer(rgb: RgbImage) -> Result<PixelBuffer, super::BufferError> {
    let width = rgb.width() as usize;
    let height = rgb.height() as usize;
    let mut data = rgb.into_raw();
    for px in data.chunks_exact_mut(3) {
        px.swap(0, 2);
    }
    PixelBuffer::from_raw(width, height, Channels::Bgr, data)
}

/// Save a buffer to disk; the extension selects PNG, JPEG or BMP encoding.
pub fn save_image(buffer: &PixelBuffer, path: &Path) -> Result<(), SaveError> {
    let format = supported_format(path).ok_or_else(|| SaveError::UnsupportedExtension {
        path: path.to_path_buf(),
    })?;
    ensure_parent_dir(path).map_err(|source| SaveError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let image = to_dynamic_image(buffer).ok_or_else(|| SaveError::Encode {
        path: path.to_path_buf(),
        message: "buffer dimensions exceed encoder limits".to_string(),
    })?;
    image.save_with_format(path, format).map_err(|e| match e {
        ImageError::IoError(source) => SaveError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => SaveError::Encode {
            path: path.to_path_buf(),
            message: other.to_string(),
        },
    })
}

fn to_dynamic_image(buffer: &PixelBuffer) -> Option<DynamicImage> {
    let width = u32::try_from(buffer.width()).ok()?;
    let height = u32::try_from(buffer.height()).ok()?;
    match buffer.channels() {
        Channels::Gray => GrayImage::from_raw(width, height, buffer.to_packed_vec())
            .map(DynamicImage::ImageLuma8),
        Channels::Bgr => {
            let mut data = vec![0u8; buffer.width() * 3 * buffer.height()];
            for (dst, src) in data.chunks_exact_mut(buffer.width() * 3).zip(buffer.rows()) {
                color::swap_red_blue_row(src, dst);
            }
            RgbImage::from_raw(width, height, data).map(DynamicImage::ImageRgb8)
        }
    }
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path).map_err(|e| format!("Failed to create parent of {}: {e}", path.display()))?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
