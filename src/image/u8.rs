//! Borrowed single-channel 8-bit plane.
//!
//! The edge detector works on planes; [`PixelBuffer::plane`] hands one out
//! for luma buffers without copying.
//!
//! [`PixelBuffer::plane`]: super::PixelBuffer::plane
use super::{ImageF32, ImageView};

#[derive(Clone, Copy, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    /// Checked constructor: `None` unless `stride >= w` and `data` covers
    /// every row.
    pub fn new(w: usize, h: usize, stride: usize, data: &'a [u8]) -> Option<Self> {
        let required = if h == 0 { 0 } else { (h - 1) * stride + w };
        (stride >= w && data.len() >= required).then_some(Self { w, h, stride, data })
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }

    /// Widen to floats on the same 0..=255 scale.
    pub fn to_f32(&self) -> ImageF32 {
        let mut out = ImageF32::new(self.w, self.h);
        for (dst, src) in out.data.chunks_exact_mut(self.w.max(1)).zip(self.rows()) {
            for (d, &v) in dst.iter_mut().zip(src) {
                *d = f32::from(v);
            }
        }
        out
    }
}

impl<'a> ImageView for ImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_constructor_validates_geometry() {
        let data = [0u8; 7];
        assert!(ImageU8::new(3, 2, 4, &data).is_some());
        assert!(ImageU8::new(3, 2, 2, &data).is_none());
        assert!(ImageU8::new(4, 2, 4, &data).is_none());
    }

    #[test]
    fn widening_skips_padding() {
        let data = [1u8, 2, 99, 3, 4];
        let plane = ImageU8::new(2, 2, 3, &data).unwrap();
        assert_eq!(plane.get(1, 1), 4);
        assert_eq!(plane.to_f32().data, vec![1.0, 2.0, 3.0, 4.0]);
    }
}
