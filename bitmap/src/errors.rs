use std::io;

use canvas::CanvasError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("could not read bitmap: {0}")]
    IoFailure(#[from] io::Error),

    #[error("could not decode bitmap headers: {0}")]
    HeaderFailure(#[from] bincode::error::DecodeError),

    #[error("not a bitmap (magic tag {0:02x?})")]
    BadMagic([u8; 2]),

    #[error("info header is {0} bytes, expected at least 40")]
    InvalidHeaderSize(u32),

    #[error("invalid bitmap dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error(
        "unsupported bitmap encoding ({bits_per_pixel} bits per pixel, compression {compression}), only uncompressed 24-bit is supported"
    )]
    UnsupportedEncoding { bits_per_pixel: u16, compression: u32 },

    #[error("pixel payload is truncated: expected {expected} bytes, found {available}")]
    TruncatedPayload { expected: u64, available: u64 },

    #[error(transparent)]
    Canvas(#[from] CanvasError),
}

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("could not write bitmap: {0}")]
    IoFailure(#[from] io::Error),

    #[error("could not encode bitmap headers: {0}")]
    HeaderFailure(#[from] bincode::error::EncodeError),

    #[error("headers describe a {width}x{height} image but the canvas is {canvas_width}x{canvas_height}")]
    DimensionMismatch {
        width: u32,
        height: u32,
        canvas_width: u32,
        canvas_height: u32,
    },
}
