#[macro_use]
extern crate serde_derive;

mod canvas;
mod errors;
mod line;
mod render;

pub use crate::canvas::{is_dark, Canvas, Pixel, BLACK, WHITE};
pub use crate::errors::CanvasError;
pub use crate::line::{BresenhamLine, LineSegment};
pub use crate::render::Rows;
pub use image::{Rgb, RgbImage};
