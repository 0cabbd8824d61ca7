use image::{Rgb, RgbImage};

use crate::errors::CanvasError;

pub type Pixel = Rgb<u8>;

pub const BLACK: Pixel = Rgb([0, 0, 0]);
pub const WHITE: Pixel = Rgb([255, 255, 255]);

/// A pixel is dark when all three channels are zero.
pub fn is_dark(pixel: &Pixel) -> bool {
    pixel.0 == [0, 0, 0]
}

/// A 24-bit pixel grid addressed by `(x, y)`, stored row-major.
///
/// Row `0` is the visual bottom of the picture: rendering walks rows from
/// `height - 1` down to `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    pub(crate) image: RgbImage,
}

impl Canvas {
    /// Allocates a canvas with every pixel black.
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        Self::check_dimensions(width, height)?;

        Ok(Self {
            image: RgbImage::new(width, height),
        })
    }

    /// Wraps an existing image buffer.
    pub fn from_image(image: RgbImage) -> Result<Self, CanvasError> {
        Self::check_dimensions(image.width(), image.height())?;

        Ok(Self { image })
    }

    fn check_dimensions(width: u32, height: u32) -> Result<(), CanvasError> {
        let invalid = CanvasError::InvalidDimensions {
            width: width.into(),
            height: height.into(),
        };

        if width == 0 || height == 0 {
            return Err(invalid);
        }

        // RgbImage panics if the sample count overflows usize
        match (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(3))
        {
            Some(_) => Ok(()),
            None => Err(invalid),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<&Pixel> {
        if x < self.width() && y < self.height() {
            Some(self.image.get_pixel(x, y))
        } else {
            None
        }
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Pixel) -> Result<(), CanvasError> {
        if x >= self.width() || y >= self.height() {
            return Err(self.out_of_bounds(x as i64, y as i64));
        }

        self.image.put_pixel(x, y, pixel);
        Ok(())
    }

    pub fn fill(&mut self, pixel: Pixel) {
        for p in self.image.pixels_mut() {
            *p = pixel;
        }
    }

    pub fn as_image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    pub(crate) fn out_of_bounds(&self, x: i64, y: i64) -> CanvasError {
        CanvasError::OutOfBoundsCoordinate {
            x: x.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
            y: y.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
            width: self.width(),
            height: self.height(),
        }
    }
}
