pub mod buffer;
pub mod f32;
pub mod io;
pub mod sample;
pub mod traits;
pub mod u8;

pub use self::buffer::{BufferError, Channels, PixelBuffer};
pub use self::f32::ImageF32;
pub use self::sample::{SampleDepth, SampleView};
pub use self::traits::{ImageView, ImageViewMut, Rows};
pub use self::u8::ImageU8;
