#![allow(dead_code)]

use rand::{rngs::StdRng, Rng};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn stride(width: u32) -> usize {
    let row = 3 * width as usize;
    (row + 3) / 4 * 4
}

/// Header fields a test may want to vary.
pub struct Header {
    pub magic: [u8; 2],
    pub width: i32,
    pub height: i32,
    pub bits_per_pixel: u16,
    pub compression: u32,
    /// Bytes between the end of the headers and the payload
    pub gap: usize,
}

impl Header {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            magic: *b"BM",
            width,
            height,
            bits_per_pixel: 24,
            compression: 0,
            gap: 0,
        }
    }
}

/// Builds bitmap bytes field by field.
pub fn bitmap_file(header: &Header, payload: &[u8]) -> Vec<u8> {
    let offset = 54 + header.gap as u32;
    let mut bytes = Vec::new();

    bytes.extend_from_slice(&header.magic);
    bytes.extend_from_slice(&(offset + payload.len() as u32).to_le_bytes());
    bytes.extend_from_slice(&0u16.to_le_bytes());
    bytes.extend_from_slice(&0u16.to_le_bytes());
    bytes.extend_from_slice(&offset.to_le_bytes());

    bytes.extend_from_slice(&40u32.to_le_bytes());
    bytes.extend_from_slice(&header.width.to_le_bytes());
    bytes.extend_from_slice(&header.height.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&header.bits_per_pixel.to_le_bytes());
    bytes.extend_from_slice(&header.compression.to_le_bytes());
    bytes.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    bytes.extend_from_slice(&3780i32.to_le_bytes());
    bytes.extend_from_slice(&3780i32.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());

    bytes.resize(bytes.len() + header.gap, 0xAA);
    bytes.extend_from_slice(payload);

    bytes
}

/// Random BGR samples with zeroed row padding.
pub fn random_payload(rng: &mut StdRng, width: u32, height: u32) -> Vec<u8> {
    let mut payload = Vec::new();

    for _ in 0..height {
        let mut row: Vec<u8> = (0..3 * width).map(|_| rng.gen()).collect();
        row.resize(stride(width), 0);
        payload.extend_from_slice(&row);
    }

    payload
}
