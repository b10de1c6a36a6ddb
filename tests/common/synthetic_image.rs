use image_workbench::{Channels, PixelBuffer};

/// Every pixel set to the same BGR triple.
pub fn uniform_bgr(width: usize, height: usize, bgr: [u8; 3]) -> PixelBuffer {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let data = bgr.iter().copied().cycle().take(width * height * 3).collect();
    PixelBuffer::from_raw(width, height, Channels::Bgr, data).expect("valid geometry")
}

/// High-contrast checkerboard in three channels.
pub fn checkerboard_bgr(width: usize, height: usize, cell: usize) -> PixelBuffer {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = vec![0u8; width * height * 3];
    for y in 0..height {
        for x in 0..width {
            let cx = x / cell;
            let cy = y / cell;
            let val = if (cx + cy) & 1 == 0 { 32u8 } else { 220u8 };
            let i = (y * width + x) * 3;
            img[i..i + 3].fill(val);
        }
    }
    PixelBuffer::from_raw(width, height, Channels::Bgr, img).expect("valid geometry")
}
