use bincode::config::{Configuration, Fixint, LittleEndian, NoLimit};

// Headers are packed fixed-width little-endian fields, which is exactly bincode's legacy layout
pub const BINCODE_CONFIG: Configuration<LittleEndian, Fixint, NoLimit> = bincode::config::legacy();

pub const MAGIC: [u8; 2] = *b"BM";

pub const FILE_HEADER_SIZE: u32 = 14;
pub const INFO_HEADER_SIZE: u32 = 40;
pub const PAYLOAD_OFFSET: u32 = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

pub const PLANES: u16 = 1;
pub const BITS_PER_PIXEL: u16 = 24;
pub const BYTES_PER_PIXEL: usize = 3;
/// `BI_RGB`
pub const COMPRESSION_NONE: u32 = 0;

/// 72 DPI
pub const DEFAULT_PIXELS_PER_METER: i32 = 2835;

/// Filler bytes after each row so that rows are 4-byte aligned.
pub fn row_padding(width: u32) -> usize {
    (4 - (BYTES_PER_PIXEL * width as usize) % 4) % 4
}

/// Bytes per stored row including padding.
pub fn row_stride(width: u32) -> usize {
    BYTES_PER_PIXEL * width as usize + row_padding(width)
}
