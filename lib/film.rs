use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::FilmError;
use crate::Color;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PpmFormat {
    /// P3
    Ascii,
    /// P6
    #[default]
    Binary,
}

/// Linear RGB image. Row 0 is the top of the picture.
#[derive(Debug, Clone, PartialEq)]
pub struct Film {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl Film {
    pub fn new(width: u32, height: u32) -> Film {
        Film { width, height, pixels: vec![Color::ZERO; width as usize * height as usize] }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn save_ppm(&self, path: impl AsRef<Path>, format: PpmFormat) -> Result<(), FilmError> {
        let path = path.as_ref();
        let mut w = BufWriter::new(File::create(path)?);
        self.write_ppm(&mut w, format)?;
        w.flush()?;

        log::info!("saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }

    pub fn write_ppm<W: Write>(&self, w: &mut W, format: PpmFormat) -> Result<(), FilmError> {
        if self.pixels.len() != self.width as usize * self.height as usize {
            return Err(FilmError::SizeMismatch {
                film_width: self.width,
                film_height: self.height,
                pixels: self.pixels.len(),
            });
        }

        let magic = match format {
            PpmFormat::Ascii => "P3",
            PpmFormat::Binary => "P6",
        };
        writeln!(w, "{}", magic)?;
        writeln!(w, "{} {}", self.width, self.height)?;
        writeln!(w, "255")?;

        match format {
            PpmFormat::Ascii => {
                for color in &self.pixels {
                    let [r, g, b] = to_bytes(*color);
                    writeln!(w, "{} {} {}", r, g, b)?;
                }
            }
            PpmFormat::Binary => {
                let bytes: Vec<u8> = self.pixels.iter().flat_map(|c| to_bytes(*c)).collect();
                w.write_all(&bytes)?;
            }
        }

        Ok(())
    }
}

// linear, clamped to [0, 1], no gamma
pub fn to_bytes(color: Color) -> [u8; 3] {
    let c = color.clamp(Color::ZERO, Color::ONE) * 255.0;
    [c.x.round() as u8, c.y.round() as u8, c.z.round() as u8]
}
