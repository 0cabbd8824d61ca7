use std::{
    io::{BufRead, Write},
    path::Path,
};

use anyhow::{bail, Context, Result};
use bitmap::BitmapImage;
use canvas::{Canvas, LineSegment};
use log::{info, warn};

fn write_canvas<W: Write>(out: &mut W, canvas: &Canvas) -> Result<()> {
    for row in canvas.render() {
        out.write_all(row.as_bytes())?;
    }

    Ok(())
}

fn open(in_file: &Path) -> Result<BitmapImage> {
    BitmapImage::open(in_file).with_context(|| format!("could not open {}", in_file.display()))
}

fn save(bitmap: &BitmapImage, out_file: &Path) -> Result<()> {
    bitmap
        .save(out_file)
        .with_context(|| format!("could not save {}", out_file.display()))?;
    info!("saved {}", out_file.display());

    Ok(())
}

pub fn show<W: Write>(in_file: &Path, out: &mut W) -> Result<()> {
    let bitmap = open(in_file)?;

    write_canvas(out, bitmap.canvas())
}

/// Segments are all checked against the canvas before the first one is drawn.
pub fn draw<W: Write>(
    in_file: &Path,
    out_file: &Path,
    lines: &[LineSegment],
    out: &mut W,
) -> Result<()> {
    let mut bitmap = open(in_file)?;

    writeln!(out, "Original image:")?;
    write_canvas(out, bitmap.canvas())?;

    for segment in lines {
        bitmap
            .canvas()
            .check_segment(segment)
            .with_context(|| format!("cannot draw {}", segment))?;
    }

    for segment in lines {
        bitmap.canvas_mut().draw_segment(segment)?;
    }
    info!("drew {} segments", lines.len());

    writeln!(out, "Modified image:")?;
    write_canvas(out, bitmap.canvas())?;

    save(&bitmap, out_file)
}

pub fn create(out_file: &Path, width: u32, height: u32) -> Result<()> {
    let bitmap = BitmapImage::new(width, height)?;

    save(&bitmap, out_file)
}

/// Reads segments from a CSV file with `x1,y1,x2,y2` headers.
pub fn read_lines_file<P: AsRef<Path>>(path: P) -> Result<Vec<LineSegment>> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("could not open {}", path.display()))?;

    reader
        .deserialize()
        .collect::<Result<Vec<LineSegment>, _>>()
        .with_context(|| format!("could not read segments from {}", path.display()))
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, message: &str) -> Result<String> {
    write!(out, "{}", message)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("unexpected end of input");
    }

    Ok(line.trim().to_string())
}

/// Prompt-driven session: input file, `lines` segments, output file.
///
/// An input file that can't be decoded ends the session without further
/// prompts. Invalid or off-canvas segments are asked for again.
pub fn interactive<R: BufRead, W: Write>(input: &mut R, out: &mut W, lines: usize) -> Result<()> {
    let in_file = prompt(input, out, "Enter input BMP file name: ")?;

    let mut bitmap = match BitmapImage::open(&in_file) {
        Ok(bitmap) => bitmap,
        Err(err) => {
            warn!("could not open {}: {}", in_file, err);
            writeln!(out, "Error: could not open input file: {}", err)?;
            return Ok(());
        }
    };

    writeln!(out, "Original image:")?;
    write_canvas(out, bitmap.canvas())?;

    for n in 1..=lines {
        loop {
            let message = format!("Enter coordinates for line {} (x1 y1 x2 y2): ", n);
            let segment = match prompt(input, out, &message)?.parse::<LineSegment>() {
                Ok(segment) => segment,
                Err(err) => {
                    writeln!(out, "{}", err)?;
                    continue;
                }
            };

            match bitmap.canvas_mut().draw_segment(&segment) {
                Ok(()) => break,
                Err(err) => writeln!(out, "{}", err)?,
            }
        }
    }

    writeln!(out, "Modified image:")?;
    write_canvas(out, bitmap.canvas())?;

    let out_file = prompt(input, out, "Enter output BMP file name: ")?;
    save(&bitmap, Path::new(&out_file))
}
