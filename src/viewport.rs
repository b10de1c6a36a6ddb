//! Zoom and pan model for a scrollable canvas.
//!
//! The view is an axis-aligned similarity `T` mapping content coordinates to
//! view coordinates:
//!
//! ```text
//! | s 0 tx |
//! | 0 s ty |
//! | 0 0  1 |
//! ```
//!
//! Zoom happens in discrete steps clamped to `[zoom_step_min, zoom_step_max]`.
//! Each step scales in content space and then translates so that the content
//! point under the cursor before the step is under it again afterwards.
use log::debug;
use nalgebra::{Matrix3, Point2, Vector2};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportOptions {
    /// Scale multiplier applied per zoom-in step (> 1).
    pub scale_factor: f64,
    pub zoom_step_min: i32,
    pub zoom_step_max: i32,
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self {
            scale_factor: 1.15,
            zoom_step_min: -10,
            zoom_step_max: 10,
        }
    }
}

impl ViewportOptions {
    pub fn validate(&self) -> Result<(), ViewportError> {
        if !(self.scale_factor.is_finite() && self.scale_factor > 1.0) {
            return Err(ViewportError::ScaleFactor(self.scale_factor));
        }
        if self.zoom_step_min > 0 || self.zoom_step_max < 0 {
            return Err(ViewportError::StepRange {
                min: self.zoom_step_min,
                max: self.zoom_step_max,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewportError {
    ScaleFactor(f64),
    StepRange { min: i32, max: i32 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewportError::ScaleFactor(v) => {
                write!(f, "zoom scale factor must be a finite value above 1 (got {v})")
            }
            ViewportError::StepRange { min, max } => {
                write!(f, "zoom step range [{min}, {max}] must contain 0")
            }
        }
    }
}

impl std::error::Error for ViewportError {}

/// Snapshot of the controller for painting or serialization.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub zoom_level: i32,
    pub zoom_factor_per_step: f64,
    pub zoom_step_min: i32,
    pub zoom_step_max: i32,
    pub current_scale: f64,
    /// View-space position of the content origin.
    pub pan_offset: Vector2<f64>,
}

#[derive(Clone, Debug)]
pub struct ViewportController {
    options: ViewportOptions,
    zoom_level: i32,
    transform: Matrix3<f64>,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self {
            options: ViewportOptions::default(),
            zoom_level: 0,
            transform: Matrix3::identity(),
        }
    }
}

impl ViewportController {
    pub fn new(options: ViewportOptions) -> Result<Self, ViewportError> {
        options.validate()?;
        Ok(Self {
            options,
            ..Default::default()
        })
    }

    pub fn options(&self) -> &ViewportOptions {
        &self.options
    }

    pub fn zoom_level(&self) -> i32 {
        self.zoom_level
    }

    pub fn scale(&self) -> f64 {
        self.transform[(0, 0)]
    }

    pub fn pan_offset(&self) -> Vector2<f64> {
        Vector2::new(self.transform[(0, 2)], self.transform[(1, 2)])
    }

    /// Content → view transform.
    pub fn transform(&self) -> Matrix3<f64> {
        self.transform
    }

    pub fn state(&self) -> ViewState {
        ViewState {
            zoom_level: self.zoom_level,
            zoom_factor_per_step: self.options.scale_factor,
            zoom_step_min: self.options.zoom_step_min,
            zoom_step_max: self.options.zoom_step_max,
            current_scale: self.scale(),
            pan_offset: self.pan_offset(),
        }
    }

    pub fn map_to_view(&self, content: Point2<f64>) -> Point2<f64> {
        self.transform.transform_point(&content)
    }

    pub fn map_to_content(&self, view: Point2<f64>) -> Point2<f64> {
        let s = self.scale();
        let t = self.pan_offset();
        Point2::new((view.x - t.x) / s, (view.y - t.y) / s)
    }

    /// Zoom in one step around `cursor` (view coordinates). Returns `false`
    /// when already at the maximum step.
    pub fn zoom_in(&mut self, cursor: Point2<f64>) -> bool {
        if self.zoom_level >= self.options.zoom_step_max {
            debug!("zoom in ignored at level {}", self.zoom_level);
            return false;
        }
        self.zoom_level += 1;
        self.scale_about(cursor, self.options.scale_factor);
        true
    }

    /// Zoom out one step around `cursor`. Returns `false` when already at the
    /// minimum step.
    pub fn zoom_out(&mut self, cursor: Point2<f64>) -> bool {
        if self.zoom_level <= self.options.zoom_step_min {
            debug!("zoom out ignored at level {}", self.zoom_level);
            return false;
        }
        self.zoom_level -= 1;
        self.scale_about(cursor, 1.0 / self.options.scale_factor);
        true
    }

    /// Mouse-wheel style input: positive `delta_y` zooms in, negative zooms
    /// out. A zero delta is ignored instead of counting as a zoom out, unlike
    /// viewers that treat every non-positive wheel step as zooming out.
    pub fn on_wheel(&mut self, delta_y: f64, cursor: Point2<f64>) -> bool {
        if delta_y > 0.0 {
            self.zoom_in(cursor)
        } else if delta_y < 0.0 {
            self.zoom_out(cursor)
        } else {
            false
        }
    }

    /// Shift the content by `delta` view units.
    pub fn pan(&mut self, delta: Vector2<f64>) {
        self.transform = Matrix3::new_translation(&delta) * self.transform;
    }

    pub fn reset(&mut self) {
        self.zoom_level = 0;
        self.transform = Matrix3::identity();
    }

    fn scale_about(&mut self, cursor: Point2<f64>, factor: f64) {
        let before = self.map_to_content(cursor);
        self.transform *= Matrix3::new_nonuniform_scaling(&Vector2::new(factor, factor));
        let after = self.map_to_content(cursor);
        self.transform *= Matrix3::new_translation(&(after - before));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(a: Point2<f64>, b: Point2<f64>) {
        assert!((a - b).norm() < EPS, "{a:?} != {b:?}");
    }

    #[test]
    fn starts_at_identity() {
        let vp = ViewportController::default();
        let state = vp.state();
        assert_eq!(state.zoom_level, 0);
        assert_eq!(state.current_scale, 1.0);
        assert_eq!(state.pan_offset, Vector2::zeros());
        assert_eq!((state.zoom_step_min, state.zoom_step_max), (-10, 10));
    }

    #[test]
    fn zoom_in_clamps_at_max() {
        let mut vp = ViewportController::default();
        let cursor = Point2::new(10.0, 20.0);
        for _ in 0..10 {
            assert!(vp.zoom_in(cursor));
        }
        assert_eq!(vp.zoom_level(), 10);
        let before = vp.transform();
        assert!(!vp.zoom_in(cursor));
        assert_eq!(vp.zoom_level(), 10);
        assert_eq!(vp.transform(), before);
        assert!((vp.scale() - 1.15f64.powi(10)).abs() < 1e-9);
    }

    #[test]
    fn zoom_out_clamps_at_min() {
        let mut vp = ViewportController::default();
        let cursor = Point2::new(0.0, 0.0);
        for _ in 0..10 {
            assert!(vp.zoom_out(cursor));
        }
        assert!(!vp.zoom_out(cursor));
        assert_eq!(vp.zoom_level(), -10);
        assert!((vp.scale() - 1.15f64.powi(-10)).abs() < 1e-9);
    }

    #[test]
    fn cursor_stays_anchored() {
        let mut vp = ViewportController::default();
        vp.pan(Vector2::new(-35.0, 12.5));
        let cursor = Point2::new(123.0, 77.0);
        let anchored = vp.map_to_content(cursor);
        assert!(vp.zoom_in(cursor));
        assert_close(vp.map_to_view(anchored), cursor);
        assert_close(vp.map_to_content(cursor), anchored);

        let other = Point2::new(5.0, 300.0);
        let anchored = vp.map_to_content(other);
        assert!(vp.zoom_out(other));
        assert_close(vp.map_to_view(anchored), other);
    }

    #[test]
    fn pan_accumulates_in_view_units() {
        let mut vp = ViewportController::default();
        vp.zoom_in(Point2::origin());
        vp.pan(Vector2::new(3.0, -4.0));
        vp.pan(Vector2::new(1.0, 1.0));
        assert_eq!(vp.pan_offset(), Vector2::new(4.0, -3.0));
        assert_eq!(vp.zoom_level(), 1);
    }

    #[test]
    fn wheel_direction_selects_zoom() {
        let mut vp = ViewportController::default();
        assert!(vp.on_wheel(120.0, Point2::origin()));
        assert!(vp.on_wheel(-120.0, Point2::origin()));
        assert!(vp.on_wheel(-120.0, Point2::origin()));
        assert!(!vp.on_wheel(0.0, Point2::origin()));
        assert_eq!(vp.zoom_level(), -1);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut vp = ViewportController::default();
        vp.zoom_in(Point2::new(50.0, 50.0));
        vp.pan(Vector2::new(9.0, 9.0));
        vp.reset();
        assert_eq!(vp.zoom_level(), 0);
        assert_eq!(vp.transform(), Matrix3::identity());
    }

    #[test]
    fn invalid_options_are_rejected() {
        let bad_factor = ViewportOptions {
            scale_factor: 1.0,
            ..Default::default()
        };
        assert_eq!(
            ViewportController::new(bad_factor).unwrap_err(),
            ViewportError::ScaleFactor(1.0)
        );
        let bad_range = ViewportOptions {
            zoom_step_min: 2,
            ..Default::default()
        };
        assert!(matches!(
            ViewportController::new(bad_range),
            Err(ViewportError::StepRange { min: 2, max: 10 })
        ));
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let opts: ViewportOptions = serde_json::from_str(r#"{"scale_factor": 1.5}"#).unwrap();
        assert_eq!(opts.scale_factor, 1.5);
        assert_eq!(opts.zoom_step_max, 10);
    }
}
