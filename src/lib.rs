#![doc = include_str!("../README.md")]

pub mod color;
pub mod config;
pub mod diagnostics;
pub mod display;
pub mod edges;
pub mod image;
pub mod session;
pub mod threshold;
pub mod transform;
pub mod viewport;

// --- High-level re-exports -------------------------------------------------

pub use crate::display::{to_display_surface, DisplayFormat, DisplaySurface, UnsupportedFormat};
pub use crate::image::io::{LoadError, LoadMode, SaveError};
pub use crate::image::{Channels, PixelBuffer};
pub use crate::session::{Session, SessionError, SessionListener};
pub use crate::transform::TransformKind;
pub use crate::viewport::{ViewState, ViewportController, ViewportOptions};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use image_workbench::prelude::*;
///
/// let gray = vec![128u8; 4 * 4 * 3];
/// let buf = PixelBuffer::from_raw(4, 4, Channels::Bgr, gray).unwrap();
///
/// let mut session = Session::new();
/// session.open_buffer(buf).unwrap();
/// let surface = session.apply(TransformKind::Binarize { threshold: 100 }).unwrap();
/// assert!(surface.pixels().iter().all(|&v| v == 255));
///
/// let mut view = ViewportController::default();
/// view.zoom_in(nalgebra::Point2::new(2.0, 2.0));
/// assert_eq!(view.zoom_level(), 1);
/// ```
pub mod prelude {
    pub use crate::image::{Channels, PixelBuffer};
    pub use crate::{DisplaySurface, Session, TransformKind, ViewportController};
}
