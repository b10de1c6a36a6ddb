//! Owned interleaved 8-bit pixel buffer (1 or 3 channels) with row stride.
//!
//! Three-channel buffers keep samples in BGR order. Rows may carry padding
//! past `width * channels`; every producer in this crate emits tightly
//! packed rows, but buffers handed in by callers are accepted as long as the
//! stride covers a full row.
use super::{ImageU8, ImageView, ImageViewMut, SampleDepth, SampleView};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Channel layout of a [`PixelBuffer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channels {
    /// One luma sample per pixel.
    Gray,
    /// Three samples per pixel in blue, green, red order.
    Bgr,
}

impl Channels {
    #[inline]
    pub const fn count(self) -> usize {
        match self {
            Channels::Gray => 1,
            Channels::Bgr => 3,
        }
    }

    pub const fn from_count(count: usize) -> Option<Self> {
        match count {
            1 => Some(Channels::Gray),
            3 => Some(Channels::Bgr),
            _ => None,
        }
    }
}

/// Reasons a buffer cannot be constructed from the given geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufferError {
    Empty { width: usize, height: usize },
    StrideTooSmall { stride: usize, minimum: usize },
    DataTooShort { len: usize, required: usize },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::Empty { width, height } => {
                write!(f, "image has no pixels ({width}x{height})")
            }
            BufferError::StrideTooSmall { stride, minimum } => {
                write!(f, "row stride {stride} is shorter than a row ({minimum} bytes)")
            }
            BufferError::DataTooShort { len, required } => {
                write!(f, "pixel data too short ({len} < {required} bytes)")
            }
        }
    }
}

impl std::error::Error for BufferError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    channels: Channels,
    stride: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Zero-filled, tightly packed buffer.
    pub fn new(width: usize, height: usize, channels: Channels) -> Result<Self, BufferError> {
        let stride = width * channels.count();
        Self::from_raw_with_stride(width, height, channels, stride, vec![0; stride * height])
    }

    /// Wrap tightly packed samples (`stride == width * channels`).
    pub fn from_raw(
        width: usize,
        height: usize,
        channels: Channels,
        data: Vec<u8>,
    ) -> Result<Self, BufferError> {
        Self::from_raw_with_stride(width, height, channels, width * channels.count(), data)
    }

    /// Wrap samples whose rows are `stride` bytes apart.
    pub fn from_raw_with_stride(
        width: usize,
        height: usize,
        channels: Channels,
        stride: usize,
        data: Vec<u8>,
    ) -> Result<Self, BufferError> {
        if width == 0 || height == 0 {
            return Err(BufferError::Empty { width, height });
        }
        let row_len = width * channels.count();
        if stride < row_len {
            return Err(BufferError::StrideTooSmall {
                stride,
                minimum: row_len,
            });
        }
        let required = (height - 1) * stride + row_len;
        if data.len() < required {
            return Err(BufferError::DataTooShort {
                len: data.len(),
                required,
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            stride,
            data,
        })
    }

    /// Wrap samples produced in-crate with `stride == width * channels`.
    pub(crate) fn packed(width: usize, height: usize, channels: Channels, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width * height * channels.count());
        Self {
            width,
            height,
            channels,
            stride: width * channels.count(),
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> Channels {
        self.channels
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Raw backing storage, including any row padding.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Samples of the pixel at (x, y).
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> &[u8] {
        let c = self.channels.count();
        let start = y * self.stride + x * c;
        &self.data[start..start + c]
    }

    /// Borrow as a single-channel plane; `None` for color buffers.
    pub fn plane(&self) -> Option<ImageU8<'_>> {
        (self.channels == Channels::Gray).then(|| ImageU8 {
            w: self.width,
            h: self.height,
            stride: self.stride,
            data: &self.data,
        })
    }

    /// Describe the buffer for the display converter.
    pub fn as_view(&self) -> SampleView<'_> {
        SampleView {
            w: self.width,
            h: self.height,
            stride: self.stride,
            channels: self.channels.count(),
            depth: SampleDepth::U8,
            data: &self.data,
        }
    }

    /// Copy of the samples with row padding removed.
    pub fn to_packed_vec(&self) -> Vec<u8> {
        if let Some(slice) = self.as_slice() {
            return slice.to_vec();
        }
        let mut out = Vec::with_capacity(self.width * self.channels.count() * self.height);
        for row in self.rows() {
            out.extend_from_slice(row);
        }
        out
    }

    /// Build a new tightly packed buffer by mapping every source row into an
    /// output row of `channels` layout.
    ///
    /// With the `parallel` feature rows are processed on the rayon pool.
    pub(crate) fn map_rows<F>(&self, channels: Channels, f: F) -> PixelBuffer
    where
        F: Fn(&[u8], &mut [u8]) + Send + Sync,
    {
        let row_len = self.width * channels.count();
        let mut data = vec![0u8; row_len * self.height];

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            data.par_chunks_mut(row_len)
                .enumerate()
                .for_each(|(y, dst)| f(self.row(y), dst));
        }
        #[cfg(not(feature = "parallel"))]
        {
            for (y, dst) in data.chunks_mut(row_len).enumerate() {
                f(self.row(y), dst);
            }
        }

        PixelBuffer::packed(self.width, self.height, channels, data)
    }
}

impl ImageView for PixelBuffer {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn channels(&self) -> usize {
        self.channels.count()
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.width * self.channels.count()]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        let len = self.width * self.channels.count() * self.height;
        self.is_contiguous().then_some(&self.data[..len])
    }
}

impl ImageViewMut for PixelBuffer {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.stride;
        let end = start + self.width * self.channels.count();
        &mut self.data[start..end]
    }

    fn as_mut_slice(&mut self) -> Option<&mut [u8]> {
        let len = self.width * self.channels.count() * self.height;
        if self.is_contiguous() {
            Some(&mut self.data[..len])
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_sized_buffers() {
        assert_eq!(
            PixelBuffer::new(0, 4, Channels::Gray),
            Err(BufferError::Empty {
                width: 0,
                height: 4
            })
        );
    }

    #[test]
    fn rejects_stride_shorter_than_row() {
        let err = PixelBuffer::from_raw_with_stride(4, 2, Channels::Bgr, 10, vec![0; 24])
            .unwrap_err();
        assert_eq!(
            err,
            BufferError::StrideTooSmall {
                stride: 10,
                minimum: 12
            }
        );
    }

    #[test]
    fn last_row_does_not_need_padding() {
        // 2 rows of 3 gray pixels, stride 5: 5 + 3 bytes are enough.
        let data = vec![1, 2, 3, 9, 9, 4, 5, 6];
        let buf = PixelBuffer::from_raw_with_stride(3, 2, Channels::Gray, 5, data)
            .expect("valid geometry");
        assert_eq!(buf.row(1), &[4, 5, 6]);
        assert!(buf.as_slice().is_none());
        assert_eq!(buf.to_packed_vec(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn pixel_returns_all_channels() {
        let buf = PixelBuffer::from_raw(2, 1, Channels::Bgr, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(buf.pixel(1, 0), &[4, 5, 6]);
        assert!(buf.plane().is_none());
    }

    #[test]
    fn row_mut_leaves_padding_alone() {
        let data = vec![1, 2, 0xEE, 3, 4];
        let mut buf = PixelBuffer::from_raw_with_stride(2, 2, Channels::Gray, 3, data).unwrap();
        buf.row_mut(1).fill(7);
        assert_eq!(buf.data(), &[1, 2, 0xEE, 7, 7]);
        assert!(buf.as_mut_slice().is_none());
    }

    #[test]
    fn map_rows_skips_source_padding() {
        let data = vec![1, 2, 0, 0, 3, 4, 0, 0];
        let buf = PixelBuffer::from_raw_with_stride(2, 2, Channels::Gray, 4, data).unwrap();
        let doubled = buf.map_rows(Channels::Gray, |src, dst| {
            for (d, &s) in dst.iter_mut().zip(src) {
                *d = s * 2;
            }
        });
        assert_eq!(doubled.stride(), 2);
        assert_eq!(doubled.data(), &[2, 4, 6, 8]);
    }
}
