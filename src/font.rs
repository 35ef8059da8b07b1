//! # Bitmap font tables
//!
//! Fonts are immutable tables in the layout of the Adafruit GFX fonts: one shared bit-packed
//! monochrome bitmap, and per glyph its size, offsets, advance and the byte offset of its first
//! row in the bitmap. The bits of a glyph run row-major, most significant bit first, and rows
//! are not padded, so a row may start in the middle of a byte.
//!
//! Glyph offsets are relative to the pen position on the baseline: a glyph with `y_offset = -7`
//! and `height = 7` sits directly on the baseline.

use crate::error::Error;

/// first printable ASCII code, the space
pub const FIRST_PRINTABLE: u8 = 0x20;
/// last printable ASCII code, the tilde
pub const LAST_PRINTABLE: u8 = 0x7e;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    /// byte offset of the first row in `BitmapFont::bitmap`
    pub bitmap_offset: u16,
    pub width: u8,
    pub height: u8,
    /// how far the pen moves after this glyph
    pub x_advance: u8,
    /// from the pen position to the left edge
    pub x_offset: i8,
    /// from the baseline to the top edge
    pub y_offset: i8,
}

impl Glyph {
    /// Is the pixel at (col, row) of this glyph set?
    pub fn bit(&self, bitmap: &[u8], col: u8, row: u8) -> bool {
        let index = row as usize * self.width as usize + col as usize;
        let byte = bitmap[self.bitmap_offset as usize + index / 8];
        byte & (0x80 >> (index % 8)) != 0
    }

    /// bytes of the bitmap this glyph uses
    fn bitmap_len(&self) -> usize {
        (self.width as usize * self.height as usize + 7) / 8
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BitmapFont {
    pub bitmap: &'static [u8],
    /// glyphs for `first..=last`
    pub glyphs: &'static [Glyph],
    pub first: u8,
    pub last: u8,
    /// distance between two baselines, 0 if the font does not define one
    pub y_advance: u8,
}

impl BitmapFont {
    /// Check that the table covers the whole printable ASCII range and that every glyph's
    /// bits lie inside the bitmap.
    pub fn validate(&self) -> Result<(), Error> {
        if self.first > FIRST_PRINTABLE || self.last < LAST_PRINTABLE || self.last < self.first {
            return Err(Error::UnsupportedFont);
        }
        if self.glyphs.len() != (self.last - self.first) as usize + 1 {
            return Err(Error::UnsupportedFont);
        }
        let fits = |g: &Glyph| g.bitmap_offset as usize + g.bitmap_len() <= self.bitmap.len();
        if !self.glyphs.iter().all(fits) {
            return Err(Error::UnsupportedFont);
        }
        Ok(())
    }

    /// Glyph of a printable character, `OutOfRange` for anything else.
    pub fn glyph(&self, code: u8) -> Result<&Glyph, Error> {
        if !(FIRST_PRINTABLE..=LAST_PRINTABLE).contains(&code) {
            return Err(Error::OutOfRange(code));
        }
        // tables that skip validation may start above the space
        code.checked_sub(self.first)
            .and_then(|index| self.glyphs.get(index as usize))
            .ok_or(Error::OutOfRange(code))
    }

    /// Default distance between baselines.
    ///
    /// Uses `y_advance` when the font has one, otherwise the space glyph's advance scaled to
    /// the usual 2:1 cell ratio of bitmap fonts.
    pub fn line_height(&self) -> i32 {
        if self.y_advance > 0 {
            return self.y_advance as i32;
        }
        match self.glyph(b' ') {
            Ok(space) => space.x_advance as i32 * 2,
            Err(_) => 0,
        }
    }
}
