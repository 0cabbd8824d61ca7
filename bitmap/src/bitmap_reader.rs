use std::io::{Read, Seek, SeekFrom};

use canvas::{Canvas, Pixel, Rgb};
use log::{debug, warn};

use crate::{
    bitmap_image::BitmapImage,
    constants::{row_stride, BINCODE_CONFIG, BYTES_PER_PIXEL},
    errors::DecodeError,
    structures::{BitmapMeta, FileHeader, InfoHeader},
};

/// Decodes an uncompressed 24-bit bitmap.
///
/// Headers are read and validated by [`BitmapReader::new`]; pixel data is only
/// read by [`BitmapReader::read_canvas`].
pub struct BitmapReader<R: Read + Seek> {
    reader: R,
    pub meta: BitmapMeta,
}

impl<R: Read + Seek> BitmapReader<R> {
    pub fn new(mut reader: R) -> Result<Self, DecodeError> {
        let file_header: FileHeader = bincode::decode_from_std_read(&mut reader, BINCODE_CONFIG)?;
        let info_header: InfoHeader = bincode::decode_from_std_read(&mut reader, BINCODE_CONFIG)?;

        let meta = BitmapMeta {
            file_header,
            info_header,
        };
        let (width, height) = meta.validate()?;

        debug!(
            "bitmap headers: {}x{}, payload at offset {}",
            width,
            height,
            meta.payload_offset()
        );

        if meta.is_top_down() {
            warn!("row order hint is top-down; rows are still read bottom-up");
        }

        Ok(Self { reader, meta })
    }

    /// Reads the pixel payload. The first stored row becomes canvas row
    /// `height - 1` and the last stored row becomes row `0`.
    pub fn read_canvas(&mut self) -> Result<Canvas, DecodeError> {
        let (width, height) = self.meta.validate()?;
        let stride = row_stride(width);
        let offset = self.meta.payload_offset();

        // Measure before allocating so a lying header can't request a huge canvas
        let expected = stride as u64 * height as u64;
        let end = self.reader.seek(SeekFrom::End(0))?;
        let available = end.saturating_sub(offset);
        if available < expected {
            return Err(DecodeError::TruncatedPayload {
                expected,
                available,
            });
        }

        self.reader.seek(SeekFrom::Start(offset))?;

        let mut canvas = Canvas::new(width, height)?;
        let mut row = vec![0u8; stride];

        for i in 0..height {
            self.reader.read_exact(&mut row)?;
            let y = height - 1 - i;

            // Samples are stored blue, green, red; padding after them is skipped
            for (x, bgr) in row
                .chunks_exact(BYTES_PER_PIXEL)
                .take(width as usize)
                .enumerate()
            {
                let pixel: Pixel = Rgb([bgr[2], bgr[1], bgr[0]]);
                canvas.set_pixel(x as u32, y, pixel)?;
            }
        }

        Ok(canvas)
    }

    pub fn into_bitmap(mut self) -> Result<BitmapImage, DecodeError> {
        let canvas = self.read_canvas()?;

        Ok(BitmapImage::from_decoded(self.meta, canvas))
    }
}
