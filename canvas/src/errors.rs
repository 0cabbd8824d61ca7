use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CanvasError {
    #[error("invalid canvas dimensions {width}x{height}")]
    InvalidDimensions { width: u64, height: u64 },

    #[error("coordinate ({x}, {y}) lies outside the {width}x{height} canvas")]
    OutOfBoundsCoordinate {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
}
