use image_workbench::{ViewportController, ViewportOptions};
use nalgebra::{Point2, Vector2};

#[test]
fn zoom_steps_clamp_symmetrically() {
    let mut vp = ViewportController::default();
    let cursor = Point2::new(320.0, 240.0);

    for step in 1..=10 {
        assert!(vp.zoom_in(cursor));
        assert_eq!(vp.zoom_level(), step);
    }
    assert!(!vp.zoom_in(cursor), "11th zoom in must be ignored");
    assert_eq!(vp.zoom_level(), 10);

    for _ in 0..20 {
        assert!(vp.zoom_out(cursor));
    }
    assert!(!vp.zoom_out(cursor), "zoom out past the minimum must be ignored");
    assert_eq!(vp.zoom_level(), -10);
    assert!((vp.scale() - 1.15f64.powi(-10)).abs() < 1e-9);
}

#[test]
fn anchor_survives_mixed_interaction() {
    let mut vp = ViewportController::new(ViewportOptions {
        scale_factor: 1.25,
        zoom_step_min: -3,
        zoom_step_max: 5,
    })
    .unwrap();

    let cursors = [
        Point2::new(10.0, 10.0),
        Point2::new(400.0, 90.0),
        Point2::new(-20.0, 310.0),
        Point2::new(250.5, 250.5),
    ];
    for (i, &cursor) in cursors.iter().cycle().take(12).enumerate() {
        if i % 3 == 0 {
            vp.pan(Vector2::new(7.0, -3.0));
        }
        let content = vp.map_to_content(cursor);
        if i % 2 == 0 {
            vp.zoom_in(cursor);
        } else {
            vp.zoom_out(cursor);
        }
        let back = vp.map_to_view(content);
        assert!(
            (back - cursor).norm() < 1e-9,
            "step {i}: {content:?} drifted to {back:?}, expected {cursor:?}"
        );
    }
}

#[test]
fn state_reports_derived_scale() {
    let mut vp = ViewportController::default();
    vp.zoom_in(Point2::new(100.0, 100.0));
    vp.zoom_in(Point2::new(100.0, 100.0));
    let state = vp.state();
    assert_eq!(state.zoom_level, 2);
    assert!((state.current_scale - 1.15 * 1.15).abs() < 1e-12);
    // Anchoring at (100, 100) shifts the origin up-left.
    assert!(state.pan_offset.x < 0.0 && state.pan_offset.y < 0.0);
}
