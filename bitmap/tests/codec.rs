mod common;

use std::io::Cursor;

use bitmap::{BitmapImage, BitmapReader, BitmapWriter, DecodeError, EncodeError};
use canvas::{Canvas, Rgb, BLACK, WHITE};
use common::{bitmap_file, init_logging, random_payload, stride, Header};
use rand::{rngs::StdRng, SeedableRng};

fn decode(bytes: &[u8]) -> Result<BitmapImage, DecodeError> {
    BitmapImage::decode(Cursor::new(bytes))
}

fn encode(bitmap: &BitmapImage) -> Vec<u8> {
    let mut out = Vec::new();
    bitmap.encode(&mut out).unwrap();
    out
}

#[test]
fn round_trip_reproduces_file() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(1);

    for width in 1..=9 {
        for height in [1, 2, 3, 7] {
            let payload = random_payload(&mut rng, width, height);
            let bytes = bitmap_file(&Header::new(width as i32, height as i32), &payload);

            let bitmap = decode(&bytes).unwrap();
            assert_eq!(bitmap.canvas().width(), width);
            assert_eq!(bitmap.canvas().height(), height);

            assert_eq!(encode(&bitmap), bytes, "{}x{}", width, height);
        }
    }
}

#[test]
fn payload_gap_is_dropped_on_save() {
    let mut rng = StdRng::seed_from_u64(2);
    let payload = random_payload(&mut rng, 5, 4);
    let mut header = Header::new(5, 4);
    header.gap = 10;
    let bytes = bitmap_file(&header, &payload);

    let out = encode(&decode(&bytes).unwrap());

    // Headers are kept verbatim, including the recorded offset
    assert_eq!(&out[..54], &bytes[..54]);
    assert_eq!(&out[54..], payload.as_slice());
}

#[test]
fn rows_are_stored_bottom_up_in_bgr() {
    // Two rows of two pixels, 2 bytes padding each
    let payload = [
        1, 2, 3, 4, 5, 6, 0, 0, //
        7, 8, 9, 10, 11, 12, 0, 0,
    ];
    let bitmap = decode(&bitmap_file(&Header::new(2, 2), &payload)).unwrap();
    let canvas = bitmap.canvas();

    // The first stored row lands on canvas row height - 1
    assert_eq!(canvas.pixel(0, 1), Some(&Rgb([3, 2, 1])));
    assert_eq!(canvas.pixel(1, 1), Some(&Rgb([6, 5, 4])));
    assert_eq!(canvas.pixel(0, 0), Some(&Rgb([9, 8, 7])));
    assert_eq!(canvas.pixel(1, 0), Some(&Rgb([12, 11, 10])));
}

#[test]
fn padding_bytes_are_skipped_and_rewritten_as_zero() {
    let payload = [
        0, 0, 0, 0xEE, //
        255, 255, 255, 0xEE, //
        0, 0, 255, 0xEE,
    ];
    let bytes = bitmap_file(&Header::new(1, 3), &payload);
    let bitmap = decode(&bytes).unwrap();

    assert_eq!(bitmap.canvas().pixel(0, 2), Some(&BLACK));
    assert_eq!(bitmap.canvas().pixel(0, 1), Some(&WHITE));
    assert_eq!(bitmap.canvas().pixel(0, 0), Some(&Rgb([255, 0, 0])));

    let out = encode(&bitmap);
    assert_eq!(&out[54..], &[0, 0, 0, 0, 255, 255, 255, 0, 0, 0, 255, 0]);
}

#[test]
fn negative_height_keeps_sign_and_bottom_up_order() {
    let payload = [
        0, 0, 0, 0, //
        9, 9, 9, 0,
    ];
    let bytes = bitmap_file(&Header::new(1, -2), &payload);
    let bitmap = decode(&bytes).unwrap();

    assert!(bitmap.meta().is_top_down());
    assert_eq!(bitmap.canvas().height(), 2);
    assert_eq!(bitmap.canvas().pixel(0, 1), Some(&BLACK));
    assert_eq!(bitmap.canvas().pixel(0, 0), Some(&Rgb([9, 9, 9])));
    assert_eq!(encode(&bitmap), bytes);
}

#[test]
fn drawn_line_lands_in_payload() {
    let bytes = bitmap_file(&Header::new(4, 2), &[0; 24]);
    let mut bitmap = decode(&bytes).unwrap();

    bitmap.canvas_mut().draw_line(0, 0, 3, 0).unwrap();
    assert_eq!(bitmap.canvas().to_string(), "1111\n0000\n");

    let out = encode(&bitmap);
    // Canvas row 1 is stored first and stays black, row 0 is now white
    assert_eq!(&out[54..66], &[0; 12]);
    assert_eq!(&out[66..78], &[255; 12]);
}

#[test]
fn rejects_unsupported_files() {
    let mut header = Header::new(2, 2);
    header.bits_per_pixel = 32;
    assert!(matches!(
        decode(&bitmap_file(&header, &[0; 16])),
        Err(DecodeError::UnsupportedEncoding {
            bits_per_pixel: 32,
            ..
        })
    ));

    let mut header = Header::new(2, 2);
    header.compression = 1;
    assert!(matches!(
        decode(&bitmap_file(&header, &[0; 16])),
        Err(DecodeError::UnsupportedEncoding { compression: 1, .. })
    ));

    assert!(matches!(
        decode(&bitmap_file(&Header::new(0, 2), &[])),
        Err(DecodeError::InvalidDimensions { .. })
    ));

    let mut header = Header::new(2, 2);
    header.magic = *b"PK";
    assert!(matches!(
        decode(&bitmap_file(&header, &[0; 16])),
        Err(DecodeError::BadMagic(_))
    ));
}

#[test]
fn rejects_truncated_input() {
    let bytes = bitmap_file(&Header::new(3, 3), &[0; 36]);

    assert!(matches!(
        decode(&bytes[..bytes.len() - 1]),
        Err(DecodeError::TruncatedPayload {
            expected: 36,
            available: 35
        })
    ));
    assert!(matches!(
        decode(&bytes[..20]),
        Err(DecodeError::HeaderFailure(_))
    ));

    // A huge header must not trigger an allocation
    let bytes = bitmap_file(&Header::new(i32::MAX, i32::MAX), &[0; 4]);
    assert!(matches!(
        decode(&bytes),
        Err(DecodeError::TruncatedPayload { .. })
    ));
}

#[test]
fn reader_exposes_headers_before_pixels() {
    let bytes = bitmap_file(&Header::new(6, 1), &[0; 20]);
    let mut reader = BitmapReader::new(Cursor::new(&bytes)).unwrap();

    assert_eq!(reader.meta.dimensions(), (6, 1));
    assert_eq!(reader.meta.info_header.x_pixels_per_meter, 3780);

    let canvas = reader.read_canvas().unwrap();
    assert_eq!(canvas.width(), 6);
}

#[test]
fn writer_rejects_mismatched_canvas() {
    let bitmap = BitmapImage::new(3, 3).unwrap();
    let canvas = Canvas::new(4, 3).unwrap();

    let mut writer = BitmapWriter::new(Vec::new());
    assert!(matches!(
        writer.write(bitmap.meta(), &canvas),
        Err(EncodeError::DimensionMismatch {
            width: 3,
            canvas_width: 4,
            ..
        })
    ));
    assert!(writer.into_inner().is_empty());
}

#[test]
fn fresh_image_is_readable_by_image_crate() {
    let mut bitmap = BitmapImage::new(5, 3).unwrap();
    bitmap.canvas_mut().set_pixel(1, 2, Rgb([200, 100, 50])).unwrap();
    bitmap.canvas_mut().draw_line(0, 0, 4, 0).unwrap();

    let out = encode(&bitmap);
    assert_eq!(out.len(), 54 + 3 * stride(5));

    let decoded = image::load_from_memory_with_format(&out, image::ImageFormat::Bmp)
        .unwrap()
        .to_rgb8();

    // Canvas rows are stored top row last, which is how the image crate orders them too
    for y in 0..3 {
        for x in 0..5 {
            assert_eq!(
                decoded.get_pixel(x, y),
                bitmap.canvas().pixel(x, y).unwrap(),
                "({}, {})",
                x,
                y
            );
        }
    }

    assert_eq!(decode(&out).unwrap(), bitmap);
}
