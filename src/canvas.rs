//! # Drawing state on top of a `PixelSink`
//!
//! `Canvas` holds what the drawing calls need besides coordinates: draw color, background color
//! and the text state (cursor, font, line height, letter spacing). The shape primitives live in
//! `raster`, the text functions in `text`; both only use the three `PixelSink` methods, so a
//! canvas works the same on a `Display` and on a plain in-memory buffer.

use crate::{color::named, color::Rgb565, font::BitmapFont, sink::PixelSink};

/// How a stroke wider than one pixel is placed relative to the nominal outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthType {
    /// the stroke lies inside the nominal outline, which is its outermost pixel
    Inner,
    /// the stroke lies outside, starting one pixel beyond the nominal outline
    Outer,
    /// the stroke straddles the nominal outline
    Center,
}

impl WidthType {
    /// Outermost radius (or rectangle offset) of a `width` pixel stroke around `nominal`.
    /// The stroke covers `start, start - 1, ..., start - (width - 1)`.
    pub fn start(self, nominal: i64, width: i64) -> i64 {
        match self {
            WidthType::Inner => nominal,
            WidthType::Outer => nominal + width,
            WidthType::Center => nominal + width / 2,
        }
    }
}

pub struct Canvas<S> {
    pub(crate) sink: S,
    pub(crate) color: Rgb565,
    pub(crate) background: Rgb565,
    pub(crate) cursor_x: i32,
    pub(crate) cursor_y: i32,
    /// x the cursor returns to on a line break
    pub(crate) margin_x: i32,
    pub(crate) font: Option<&'static BitmapFont>,
    /// explicitly set line height, otherwise the font decides
    pub(crate) line_height: Option<i32>,
    pub(crate) letter_spacing: i32,
    pub(crate) line_wrapping: bool,
}

impl<S: PixelSink> Canvas<S> {
    /// White on black, no font, cursor at (0, 0).
    pub fn new(sink: S) -> Canvas<S> {
        Canvas {
            sink,
            color: named::WHITE,
            background: named::BLACK,
            cursor_x: 0,
            cursor_y: 0,
            margin_x: 0,
            font: None,
            line_height: None,
            letter_spacing: 0,
            line_wrapping: false,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_inner(self) -> S {
        self.sink
    }

    pub fn set_color(&mut self, color: Rgb565) {
        self.color = color;
    }

    pub fn color(&self) -> Rgb565 {
        self.color
    }

    pub fn set_background_color(&mut self, color: Rgb565) {
        self.background = color;
    }

    pub fn background_color(&self) -> Rgb565 {
        self.background
    }

    pub fn width(&self) -> i32 {
        self.sink.screen_width()
    }

    pub fn height(&self) -> i32 {
        self.sink.screen_height()
    }

    /// Plot one point in the draw color, rounded to the nearest pixel.
    pub fn pixel(&mut self, x: f64, y: f64) {
        let color = self.color;
        self.sink.write_pixel(round(x), round(y), color);
    }

    #[inline]
    pub(crate) fn plot(&mut self, x: i32, y: i32) {
        let color = self.color;
        self.sink.write_pixel(x, y, color);
    }
}

#[inline]
pub(crate) fn round(v: f64) -> i32 {
    v.round() as i32
}
