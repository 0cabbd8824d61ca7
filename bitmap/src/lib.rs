mod bitmap_image;
mod bitmap_reader;
mod bitmap_writer;
pub mod constants;
mod errors;
pub mod structures;

pub use crate::bitmap_image::BitmapImage;
pub use crate::bitmap_reader::BitmapReader;
pub use crate::bitmap_writer::BitmapWriter;
pub use crate::errors::{DecodeError, EncodeError};
pub use crate::structures::BitmapMeta;
