use std::{collections::HashSet, fmt, str::FromStr};

use log::trace;

use crate::{
    canvas::{is_dark, Canvas, BLACK, WHITE},
    errors::CanvasError,
};

/// A straight segment between two inclusive endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LineSegment {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl LineSegment {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Cells visited by integer Bresenham stepping, both endpoints included.
    pub fn points(&self) -> BresenhamLine {
        BresenhamLine::new(self)
    }
}

impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.x1, self.y1, self.x2, self.y2)
    }
}

/// Accepts `x1,y1,x2,y2` as well as whitespace separated integers.
impl FromStr for LineSegment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<i32>()
                    .map_err(|err| format!("invalid coordinate {:?}: {}", part, err))
            })
            .collect::<Result<Vec<_>, _>>()?;

        match values[..] {
            [x1, y1, x2, y2] => Ok(Self::new(x1, y1, x2, y2)),
            _ => Err(format!(
                "expected 4 coordinates (x1 y1 x2 y2), got {}",
                values.len()
            )),
        }
    }
}

pub struct BresenhamLine {
    x: i64,
    y: i64,
    x2: i64,
    y2: i64,
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    err: i64,
    done: bool,
}

impl BresenhamLine {
    fn new(segment: &LineSegment) -> Self {
        let (x1, y1) = (segment.x1 as i64, segment.y1 as i64);
        let (x2, y2) = (segment.x2 as i64, segment.y2 as i64);
        let dx = (x2 - x1).abs();
        let dy = (y2 - y1).abs();

        Self {
            x: x1,
            y: y1,
            x2,
            y2,
            dx,
            dy,
            sx: if x1 < x2 { 1 } else { -1 },
            sy: if y1 < y2 { 1 } else { -1 },
            err: dx - dy,
            done: false,
        }
    }
}

impl Iterator for BresenhamLine {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        // Every step stays inside the endpoints' bounding box, so it fits in i32
        let point = (self.x as i32, self.y as i32);

        if self.x == self.x2 && self.y == self.y2 {
            self.done = true;
        } else {
            let e2 = 2 * self.err;
            if e2 > -self.dy {
                self.err -= self.dy;
                self.x += self.sx;
            }
            if e2 < self.dx {
                self.err += self.dx;
                self.y += self.sy;
            }
        }

        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }

        // Each step advances the major axis by exactly one
        let remaining = (self.x2 - self.x).abs().max((self.y2 - self.y).abs()) as usize + 1;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BresenhamLine {}

impl Canvas {
    /// Fails with `OutOfBoundsCoordinate` unless every cell of `segment` lies on
    /// the canvas. Checking both endpoints is enough: Bresenham never leaves the
    /// bounding box of its endpoints.
    pub fn check_segment(&self, segment: &LineSegment) -> Result<(), CanvasError> {
        for (x, y) in [(segment.x1, segment.y1), (segment.x2, segment.y2)] {
            if !self.contains(x, y) {
                return Err(self.out_of_bounds(x as i64, y as i64));
            }
        }

        Ok(())
    }

    /// Toggle-paints the segment from `(x1, y1)` to `(x2, y2)`.
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<(), CanvasError> {
        self.draw_segment(&LineSegment::new(x1, y1, x2, y2))
    }

    /// Flips every cell the segment passes through: dark cells become white,
    /// everything else becomes black. A cell is flipped at most once per call.
    ///
    /// The canvas is left untouched if any part of the segment is off-canvas.
    pub fn draw_segment(&mut self, segment: &LineSegment) -> Result<(), CanvasError> {
        self.check_segment(segment)?;

        let points = segment.points();
        let mut visited = HashSet::with_capacity(points.len());

        for (x, y) in points {
            let (x, y) = (x as u32, y as u32);

            if !visited.insert((x, y)) {
                continue;
            }

            let pixel = self.image.get_pixel_mut(x, y);
            *pixel = if is_dark(pixel) { WHITE } else { BLACK };
        }

        trace!("toggled {} cells along {}", visited.len(), segment);

        Ok(())
    }
}
