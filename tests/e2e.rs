mod common;

use common::synthetic_image::{checkerboard_bgr, uniform_bgr};
use image_workbench::{Channels, DisplayFormat, Session, TransformKind};
use std::time::{SystemTime, UNIX_EPOCH};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn mid_gray_binarizes_by_threshold() {
    init_logging();
    let mut session = Session::new();
    session.open_buffer(uniform_bgr(4, 4, [128, 128, 128])).unwrap();

    let bright = session
        .apply(TransformKind::Binarize { threshold: 100 })
        .unwrap();
    assert_eq!(bright.format(), DisplayFormat::Gray8);
    assert_eq!(bright.pixels(), &[255u8; 16][..]);
    let processed = session.processed().expect("processed buffer");
    assert_eq!(processed.channels(), Channels::Gray);

    let dark = session
        .apply(TransformKind::Binarize { threshold: 200 })
        .unwrap();
    assert_eq!(dark.pixels(), &[0u8; 16][..]);
}

#[test]
fn transforms_never_compound() {
    init_logging();
    // Pure blue: luma 29, so binarize(128) of the original is black. Its HSV
    // re-encoding (120, 255, 255) would binarize to white.
    let mut session = Session::new();
    session.open_buffer(uniform_bgr(3, 3, [255, 0, 0])).unwrap();

    let hsv = session.apply(TransformKind::HsvRecode).unwrap();
    assert_eq!(hsv.format(), DisplayFormat::Rgb24);
    // HSV samples land in the display's R/G/B slots reversed, as for BGR.
    assert_eq!(hsv.pixel(0, 0), &[255, 255, 120]);

    let binary = session
        .apply(TransformKind::Binarize { threshold: 128 })
        .unwrap();
    assert!(binary.pixels().iter().all(|&v| v == 0));

    let original = session.original().expect("original kept");
    assert_eq!(original.pixel(1, 1), &[255, 0, 0]);
}

#[test]
fn grayscale_then_binarize_reads_original() {
    init_logging();
    let mut session = Session::new();
    session.open_buffer(uniform_bgr(2, 2, [0, 0, 255])).unwrap();

    let gray = session.apply(TransformKind::Grayscale).unwrap();
    assert_eq!(gray.pixels(), &[76u8; 4][..]);
    let binary = session
        .apply(TransformKind::Binarize { threshold: 75 })
        .unwrap();
    assert_eq!(binary.pixels(), &[255u8; 4][..]);
    assert_eq!(session.original().unwrap().channels(), Channels::Bgr);
}

#[test]
fn edges_of_checkerboard_are_binary() {
    init_logging();
    let mut session = Session::new();
    session.open_buffer(checkerboard_bgr(64, 48, 8)).unwrap();

    let edges = session
        .apply(TransformKind::EdgeDetect { low: 50, high: 150 })
        .unwrap();
    assert_eq!(edges.format(), DisplayFormat::Gray8);
    assert!(edges.pixels().iter().all(|&v| v == 0 || v == 255));
    let count = edges.pixels().iter().filter(|&&v| v == 255).count();
    assert!(count > 64, "expected cell borders, got {count} edge pixels");
}

#[test]
fn unknown_kind_shows_original() {
    init_logging();
    let mut session = Session::new();
    let loaded = session.open_buffer(checkerboard_bgr(8, 8, 2)).unwrap();
    let kind = TransformKind::from_name("emboss", 0, 0, 0);
    let shown = session.apply(kind).unwrap();
    assert_eq!(shown, loaded);
}

#[test]
fn load_apply_save_through_files() {
    init_logging();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let dir = std::env::temp_dir().join(format!("image_workbench_e2e_{}_{nanos}", std::process::id()));
    let input = dir.join("input.png");
    let output = dir.join("out").join("binary.bmp");

    let mut writer = Session::new();
    writer.open_buffer(uniform_bgr(4, 4, [128, 128, 128])).unwrap();
    writer.save(&input).unwrap();

    let mut session = Session::new();
    let loaded = session.load(&input).unwrap();
    assert_eq!(loaded.format(), DisplayFormat::Rgb24);
    assert_eq!((loaded.width(), loaded.height()), (4, 4));

    session
        .apply(TransformKind::Binarize { threshold: 100 })
        .unwrap();
    session.save(&output).unwrap();

    let mut reread = Session::new();
    let surface = reread.load(&output).unwrap();
    assert!(surface.pixels().iter().all(|&v| v == 255));

    let _ = std::fs::remove_dir_all(dir);
}
