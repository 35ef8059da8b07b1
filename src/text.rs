//! # Bitmap font rendering
//!
//! The cursor is the pen position on the text baseline. A glyph is drawn as its whole
//! `width x height` cell: set bits in the draw color, clear bits in the background color, so
//! text can be written over old text without clearing first.
//!
//! A newline moves the cursor back to the left margin, which is the x of the last
//! `move_cursor()`, and one line height down.

use core::fmt;

use log::trace;

use crate::{canvas::Canvas, error::Error, font::BitmapFont, sink::PixelSink};

/// Inclusive pixel box, relative to the pen position the text starts at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextArea {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl TextArea {
    pub fn width(&self) -> i32 {
        self.x2 - self.x1 + 1
    }

    pub fn height(&self) -> i32 {
        self.y2 - self.y1 + 1
    }

    fn include(area: Option<TextArea>, x1: i32, y1: i32, x2: i32, y2: i32) -> TextArea {
        match area {
            None => TextArea { x1, y1, x2, y2 },
            Some(a) => TextArea {
                x1: a.x1.min(x1),
                y1: a.y1.min(y1),
                x2: a.x2.max(x2),
                y2: a.y2.max(y2),
            },
        }
    }
}

impl<S: PixelSink> Canvas<S> {
    /// Install a font. Tables that do not cover the printable ASCII range are rejected.
    pub fn set_font(&mut self, font: &'static BitmapFont) -> Result<(), Error> {
        font.validate()?;
        self.font = Some(font);
        Ok(())
    }

    pub fn font(&self) -> Option<&'static BitmapFont> {
        self.font
    }

    /// Move the pen to `(x, y)`, `y` being the baseline. `x` becomes the left margin.
    pub fn move_cursor(&mut self, x: i32, y: i32) {
        self.cursor_x = x;
        self.cursor_y = y;
        self.margin_x = x;
    }

    pub fn cursor(&self) -> (i32, i32) {
        (self.cursor_x, self.cursor_y)
    }

    /// Override the distance between baselines; `None` goes back to the font's.
    pub fn set_line_height(&mut self, line_height: Option<i32>) {
        self.line_height = line_height;
    }

    pub fn line_height(&self) -> i32 {
        match (self.line_height, self.font) {
            (Some(height), _) => height,
            (None, Some(font)) => font.line_height(),
            (None, None) => 0,
        }
    }

    /// extra pixels between two glyphs
    pub fn set_letter_spacing(&mut self, spacing: i32) {
        self.letter_spacing = spacing;
    }

    /// Break lines before a glyph that would cross the right screen edge.
    pub fn set_line_wrapping(&mut self, wrap: bool) {
        self.line_wrapping = wrap;
    }

    fn new_line(&mut self) {
        self.cursor_x = self.margin_x;
        self.cursor_y += self.line_height();
    }

    /// Draw one character at the cursor and advance it.
    ///
    /// Only `\n` and the printable ASCII range are accepted; anything else is `OutOfRange`
    /// and leaves the canvas untouched.
    pub fn write_char(&mut self, code: u8) -> Result<(), Error> {
        if code == b'\n' {
            self.new_line();
            return Ok(());
        }
        let font = self.font.ok_or(Error::UnsupportedFont)?;
        let glyph = font.glyph(code)?;

        let left = self.cursor_x + glyph.x_offset as i32;
        if self.line_wrapping
            && self.cursor_x != self.margin_x
            && left + glyph.width as i32 > self.sink.screen_width()
        {
            trace!("wrapping before {:#04x} at x={}", code, self.cursor_x);
            self.new_line();
        }

        let x0 = self.cursor_x + glyph.x_offset as i32;
        let y0 = self.cursor_y + glyph.y_offset as i32;
        let (fg, bg) = (self.color, self.background);
        for row in 0..glyph.height {
            for col in 0..glyph.width {
                let color = if glyph.bit(font.bitmap, col, row) { fg } else { bg };
                self.sink.write_pixel(x0 + col as i32, y0 + row as i32, color);
            }
        }

        self.cursor_x += glyph.x_advance as i32 + self.letter_spacing;
        Ok(())
    }

    /// Draw a string byte by byte, stopping at the first character that can't be drawn.
    pub fn write(&mut self, text: &str) -> Result<(), Error> {
        text.bytes().try_for_each(|code| self.write_char(code))
    }

    /// Measure the pixels `write(text)` would touch with the pen at (0, 0), ignoring line
    /// wrapping. `None` if nothing would be drawn.
    pub fn get_text_area(&self, text: &str) -> Result<Option<TextArea>, Error> {
        let font = self.font.ok_or(Error::UnsupportedFont)?;
        let (mut pen_x, mut pen_y) = (0, 0);
        let mut area = None;

        for code in text.bytes() {
            if code == b'\n' {
                pen_x = 0;
                pen_y += self.line_height();
                continue;
            }
            let glyph = font.glyph(code)?;
            if glyph.width > 0 && glyph.height > 0 {
                let x1 = pen_x + glyph.x_offset as i32;
                let y1 = pen_y + glyph.y_offset as i32;
                area = Some(TextArea::include(
                    area,
                    x1,
                    y1,
                    x1 + glyph.width as i32 - 1,
                    y1 + glyph.height as i32 - 1,
                ));
            }
            pen_x += glyph.x_advance as i32 + self.letter_spacing;
        }
        Ok(area)
    }
}

impl<S: PixelSink> fmt::Write for Canvas<S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Canvas::write(self, s).map_err(|_| fmt::Error)
    }
}
