use std::fmt;

use crate::canvas::{is_dark, Canvas};

const DARK: char = '1';
const LIGHT: char = '0';

/// Text rows of a canvas, top row (`y = height - 1`) first. Each row ends in `\n`.
#[derive(Clone)]
pub struct Rows<'a> {
    canvas: &'a Canvas,
    // Number of rows still to emit; the next row is `remaining - 1`
    remaining: u32,
}

impl<'a> Iterator for Rows<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        let y = self.remaining;

        let mut row = String::with_capacity(self.canvas.width() as usize + 1);
        for x in 0..self.canvas.width() {
            let pixel = self.canvas.as_image().get_pixel(x, y);
            row.push(if is_dark(pixel) { DARK } else { LIGHT });
        }
        row.push('\n');

        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining as usize, Some(self.remaining as usize))
    }
}

impl<'a> ExactSizeIterator for Rows<'a> {}

impl Canvas {
    /// Renders the canvas as a silhouette: `1` for dark pixels, `0` otherwise.
    pub fn render(&self) -> Rows<'_> {
        Rows {
            canvas: self,
            remaining: self.height(),
        }
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.render() {
            f.write_str(&row)?;
        }

        Ok(())
    }
}
