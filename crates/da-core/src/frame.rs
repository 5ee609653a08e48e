use std::io::{self, Write};

use crate::error::CoreError;

/// Buffer de luminance, un octet par pixel, row-major.
///
/// # Example
/// ```
/// use da_core::frame::LumaFrame;
/// let fb = LumaFrame::new(10, 4);
/// assert_eq!(fb.data.len(), 40);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LumaFrame {
    /// Intensités [0, 255], row-major.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl LumaFrame {
    /// Crée un buffer noir aux dimensions données.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Crée un buffer uniforme.
    ///
    /// # Example
    /// ```
    /// use da_core::frame::LumaFrame;
    /// let fb = LumaFrame::filled(3, 2, 255);
    /// assert!(fb.data.iter().all(|&p| p == 255));
    /// ```
    #[must_use]
    pub fn filled(width: u32, height: u32, value: u8) -> Self {
        Self {
            data: vec![value; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Wrap decoded samples.
    ///
    /// # Errors
    /// Returns an error if a dimension is zero or `data` does not hold exactly
    /// `width * height` samples.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self, CoreError> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidDimensions { width, height });
        }
        if data.len() != width as usize * height as usize {
            return Err(CoreError::BufferSize {
                width,
                height,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Intensité au pixel (x, y).
    #[inline(always)]
    #[must_use]
    pub fn sample(&self, x: u32, y: u32) -> u8 {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.data
            .get(y as usize * self.width as usize + x as usize)
            .copied()
            .unwrap_or(0)
    }
}

/// Grille de sortie ASCII, row-major.
///
/// # Example
/// ```
/// use da_core::frame::AsciiGrid;
/// let mut grid = AsciiGrid::new(3, 2);
/// grid.set(0, 0, '@');
/// assert_eq!(grid.row_string(0), "@  ");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AsciiGrid {
    /// Flat array of glyphs, row-major.
    pub cells: Vec<char>,
    /// Width in characters.
    pub width: u32,
    /// Height in characters.
    pub height: u32,
}

impl AsciiGrid {
    /// Crée une grille remplie d'espaces.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            cells: vec![' '; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Set a glyph at position (x, y).
    #[inline(always)]
    pub fn set(&mut self, x: u32, y: u32, ch: char) {
        self.cells[y as usize * self.width as usize + x as usize] = ch;
    }

    /// Get the glyph at position (x, y).
    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> char {
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Glyphs of row `y`, left to right.
    #[must_use]
    pub fn row(&self, y: u32) -> &[char] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.cells[start..start + w]
    }

    /// Row `y` as an owned string.
    #[must_use]
    pub fn row_string(&self, y: u32) -> String {
        self.row(y).iter().collect()
    }

    /// Iterate rows top to bottom.
    ///
    /// # Example
    /// ```
    /// use da_core::frame::AsciiGrid;
    /// let grid = AsciiGrid::new(4, 3);
    /// assert_eq!(grid.rows().count(), 3);
    /// ```
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.height).map(|y| self.row_string(y))
    }

    /// Write every row followed by a newline.
    ///
    /// # Errors
    /// Propagates write errors from `out`.
    pub fn write_rows<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for row in self.rows() {
            writeln!(out, "{row}")?;
        }
        Ok(())
    }
}
