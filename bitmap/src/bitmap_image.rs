use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Seek, Write},
    path::Path,
};

use canvas::{Canvas, CanvasError};

use crate::{
    bitmap_reader::BitmapReader,
    bitmap_writer::BitmapWriter,
    errors::{DecodeError, EncodeError},
    structures::BitmapMeta,
};

/// A decoded bitmap: its headers plus the pixel grid they describe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapImage {
    meta: BitmapMeta,
    canvas: Canvas,
}

impl BitmapImage {
    /// A black image with freshly built headers.
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        let meta = BitmapMeta::for_dimensions(width, height)?;
        let canvas = Canvas::new(width, height)?;

        Ok(Self { meta, canvas })
    }

    pub(crate) fn from_decoded(meta: BitmapMeta, canvas: Canvas) -> Self {
        Self { meta, canvas }
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DecodeError> {
        let file = File::open(path)?;

        Self::decode(BufReader::new(file))
    }

    pub fn decode<R: Read + Seek>(reader: R) -> Result<Self, DecodeError> {
        BitmapReader::new(reader)?.into_bitmap()
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), EncodeError> {
        let file = File::create(path)?;

        self.encode(BufWriter::new(file))
    }

    pub fn encode<W: Write>(&self, dest: W) -> Result<(), EncodeError> {
        BitmapWriter::new(dest).write(&self.meta, &self.canvas)
    }

    pub fn meta(&self) -> &BitmapMeta {
        &self.meta
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    pub fn into_parts(self) -> (BitmapMeta, Canvas) {
        (self.meta, self.canvas)
    }
}
