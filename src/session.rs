//! Explicit image session: the original buffer, the latest processed buffer
//! and the listeners notified whenever a new surface is ready.
//!
//! Every transform re-derives from the original, so applying transforms in
//! sequence never compounds. The session never touches a UI toolkit; the
//! surfaces it emits are plain data.
use crate::display::{DisplaySurface, UnsupportedFormat};
use crate::image::io::{load_image, save_image, LoadError, LoadMode, SaveError};
use crate::image::PixelBuffer;
use crate::transform::{self, TransformKind};
use log::{debug, warn};
use std::fmt;
use std::path::Path;

/// Receives surfaces produced by a [`Session`].
pub trait SessionListener {
    /// A new image was loaded; `surface` shows it unmodified.
    fn on_image_loaded(&mut self, surface: &DisplaySurface);
    /// A transform finished; `surface` shows its result.
    fn on_image_processed(&mut self, surface: &DisplaySurface);
}

#[derive(Debug)]
pub enum SessionError {
    NoImageLoaded,
    NothingToSave,
    Load(LoadError),
    Save(SaveError),
    Display(UnsupportedFormat),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NoImageLoaded => f.write_str("no image loaded"),
            SessionError::NothingToSave => f.write_str("no processed image to save"),
            SessionError::Load(e) => e.fmt(f),
            SessionError::Save(e) => e.fmt(f),
            SessionError::Display(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Load(e) => Some(e),
            SessionError::Save(e) => Some(e),
            SessionError::Display(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LoadError> for SessionError {
    fn from(e: LoadError) -> Self {
        SessionError::Load(e)
    }
}

impl From<SaveError> for SessionError {
    fn from(e: SaveError) -> Self {
        SessionError::Save(e)
    }
}

impl From<UnsupportedFormat> for SessionError {
    fn from(e: UnsupportedFormat) -> Self {
        SessionError::Display(e)
    }
}

#[derive(Default)]
pub struct Session {
    original: Option<PixelBuffer>,
    processed: Option<PixelBuffer>,
    listeners: Vec<Box<dyn SessionListener>>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("original", &self.original.as_ref().map(describe))
            .field("processed", &self.processed.as_ref().map(describe))
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

fn describe(buf: &PixelBuffer) -> String {
    format!("{}x{}x{}", buf.width(), buf.height(), buf.channels().count())
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: Box<dyn SessionListener>) {
        self.listeners.push(listener);
    }

    pub fn original(&self) -> Option<&PixelBuffer> {
        self.original.as_ref()
    }

    pub fn processed(&self) -> Option<&PixelBuffer> {
        self.processed.as_ref()
    }

    /// Decode `path` as a three-channel image and make it the original.
    pub fn load(&mut self, path: &Path) -> Result<DisplaySurface, SessionError> {
        self.load_with(path, LoadMode::Color)
    }

    pub fn load_with(&mut self, path: &Path, mode: LoadMode) -> Result<DisplaySurface, SessionError> {
        let buffer = load_image(path, mode)?;
        debug!(
            "session: loaded {} ({})",
            path.display(),
            describe(&buffer)
        );
        self.open_buffer(buffer)
    }

    /// Make an in-memory buffer the original. The processed buffer starts as
    /// a copy of it. On failure the previous session state is kept.
    pub fn open_buffer(&mut self, buffer: PixelBuffer) -> Result<DisplaySurface, SessionError> {
        let surface = DisplaySurface::from_buffer(&buffer)?;
        self.processed = Some(buffer.clone());
        self.original = Some(buffer);
        for listener in &mut self.listeners {
            listener.on_image_loaded(&surface);
        }
        Ok(surface)
    }

    /// Apply `kind` to the original image, replacing the processed image.
    pub fn apply(&mut self, kind: TransformKind) -> Result<DisplaySurface, SessionError> {
        let original = self.original.as_ref().ok_or(SessionError::NoImageLoaded)?;
        let processed = transform::apply(original, kind);
        let surface = DisplaySurface::from_buffer(&processed)?;
        debug!("session: applied {kind} -> {}", describe(&processed));
        self.processed = Some(processed);
        for listener in &mut self.listeners {
            listener.on_image_processed(&surface);
        }
        Ok(surface)
    }

    /// Write the processed image; the extension picks the encoding.
    pub fn save(&self, path: &Path) -> Result<(), SessionError> {
        let Some(processed) = self.processed.as_ref() else {
            warn!("session: save to {} requested with no image", path.display());
            return Err(SessionError::NothingToSave);
        };
        save_image(processed, path)?;
        debug!("session: saved {}", path.display());
        Ok(())
    }
}
