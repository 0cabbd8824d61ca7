use std::io::Write;

use canvas::Canvas;
use log::{debug, warn};

use crate::{
    constants::{row_stride, BINCODE_CONFIG, PAYLOAD_OFFSET},
    errors::EncodeError,
    structures::BitmapMeta,
};

/// Encodes a canvas as an uncompressed 24-bit bitmap.
pub struct BitmapWriter<W: Write> {
    dest: W,
}

impl<W: Write> BitmapWriter<W> {
    pub fn new(dest: W) -> Self {
        Self { dest }
    }

    /// Writes both headers exactly as given, followed immediately by the pixel
    /// payload. Canvas row `height - 1` is stored first, row `0` last.
    pub fn write(&mut self, meta: &BitmapMeta, canvas: &Canvas) -> Result<(), EncodeError> {
        let (width, height) = meta.dimensions();
        if (width, height) != (canvas.width(), canvas.height()) {
            return Err(EncodeError::DimensionMismatch {
                width,
                height,
                canvas_width: canvas.width(),
                canvas_height: canvas.height(),
            });
        }

        if meta.file_header.payload_offset != PAYLOAD_OFFSET {
            warn!(
                "header records payload offset {} but the payload is written at {}",
                meta.file_header.payload_offset, PAYLOAD_OFFSET
            );
        }

        bincode::encode_into_std_write(meta.file_header, &mut self.dest, BINCODE_CONFIG)?;
        bincode::encode_into_std_write(meta.info_header, &mut self.dest, BINCODE_CONFIG)?;

        let stride = row_stride(width);
        let image = canvas.as_image();
        let mut row = Vec::with_capacity(stride);

        for y in (0..height).rev() {
            row.clear();
            for x in 0..width {
                let [r, g, b] = image.get_pixel(x, y).0;
                row.extend_from_slice(&[b, g, r]);
            }
            row.resize(stride, 0);

            self.dest.write_all(&row)?;
        }

        self.dest.flush()?;

        debug!(
            "wrote {}x{} bitmap, {} payload bytes",
            width,
            height,
            stride * height as usize
        );

        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.dest
    }
}
