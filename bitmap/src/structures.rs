use bincode::{Decode, Encode};
use canvas::CanvasError;

use crate::{
    constants::{
        row_stride, BITS_PER_PIXEL, COMPRESSION_NONE, DEFAULT_PIXELS_PER_METER, INFO_HEADER_SIZE,
        MAGIC, PAYLOAD_OFFSET, PLANES,
    },
    errors::DecodeError,
};

/// The 14-byte file header.
#[derive(Encode, Decode, PartialEq, Eq, Debug, Clone, Copy)]
pub struct FileHeader {
    pub magic: [u8; 2],
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    pub payload_offset: u32,
}

/// The 40-byte info header. The sign of `height` is the row order hint.
#[derive(Encode, Decode, PartialEq, Eq, Debug, Clone, Copy)]
pub struct InfoHeader {
    pub header_size: u32,
    pub width: i32,
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub image_size: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

/// Both headers as read from a file. Fields the codec does not interpret are
/// written back unchanged.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct BitmapMeta {
    pub file_header: FileHeader,
    pub info_header: InfoHeader,
}

impl BitmapMeta {
    /// Headers for a fresh uncompressed 24-bit image with the payload directly
    /// after the headers.
    pub fn for_dimensions(width: u32, height: u32) -> Result<Self, CanvasError> {
        let invalid = || CanvasError::InvalidDimensions {
            width: width.into(),
            height: height.into(),
        };

        if width == 0 || height == 0 {
            return Err(invalid());
        }

        let signed_width = i32::try_from(width).map_err(|_| invalid())?;
        let signed_height = i32::try_from(height).map_err(|_| invalid())?;
        let image_size = (row_stride(width) as u64)
            .checked_mul(height as u64)
            .and_then(|size| u32::try_from(size).ok())
            .ok_or_else(invalid)?;
        let file_size = image_size.checked_add(PAYLOAD_OFFSET).ok_or_else(invalid)?;

        Ok(Self {
            file_header: FileHeader {
                magic: MAGIC,
                file_size,
                reserved1: 0,
                reserved2: 0,
                payload_offset: PAYLOAD_OFFSET,
            },
            info_header: InfoHeader {
                header_size: INFO_HEADER_SIZE,
                width: signed_width,
                height: signed_height,
                planes: PLANES,
                bits_per_pixel: BITS_PER_PIXEL,
                compression: COMPRESSION_NONE,
                image_size,
                x_pixels_per_meter: DEFAULT_PIXELS_PER_METER,
                y_pixels_per_meter: DEFAULT_PIXELS_PER_METER,
                colors_used: 0,
                colors_important: 0,
            },
        })
    }

    /// Checks that the headers describe an image this codec can decode and
    /// returns its `(width, height)` in pixels.
    pub fn validate(&self) -> Result<(u32, u32), DecodeError> {
        if self.file_header.magic != MAGIC {
            return Err(DecodeError::BadMagic(self.file_header.magic));
        }

        let info = &self.info_header;

        if info.header_size < INFO_HEADER_SIZE {
            return Err(DecodeError::InvalidHeaderSize(info.header_size));
        }

        if info.width <= 0 || info.height == 0 {
            return Err(DecodeError::InvalidDimensions {
                width: info.width,
                height: info.height,
            });
        }

        if info.bits_per_pixel != BITS_PER_PIXEL || info.compression != COMPRESSION_NONE {
            return Err(DecodeError::UnsupportedEncoding {
                bits_per_pixel: info.bits_per_pixel,
                compression: info.compression,
            });
        }

        Ok(self.dimensions())
    }

    /// `(width, height)` with the height's row order sign dropped.
    pub fn dimensions(&self) -> (u32, u32) {
        (
            self.info_header.width.unsigned_abs(),
            self.info_header.height.unsigned_abs(),
        )
    }

    /// A negative height marks rows stored top to bottom.
    pub fn is_top_down(&self) -> bool {
        self.info_header.height < 0
    }

    pub fn payload_offset(&self) -> u64 {
        self.file_header.payload_offset.into()
    }
}
