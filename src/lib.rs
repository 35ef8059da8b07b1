//! # Driver and drawing engine for ILI9341 driven TFT displays
//!
//! The ILI9341 is addressed as a grid of 16 bit pixels, but the serial bus is slow and only
//! efficient when pixels are sent in rectangular bursts. This crate therefore keeps the whole
//! screen in memory, cut into fixed size tiles, and only sends the tiles that changed.
//!
//! The typical workflow is:
//!  - create a transport (`transport::Ili9341Spi`) and run its `init()` script
//!  - hand it to `Display::new()`, which spawns the flush worker
//!  - wrap the display in a `Canvas` and draw lines, circles, arcs and text
//!  - call `present()` (non blocking) or `flush()` (waits for the bus) to update the screen
//!
//! The rasterizer and font renderer only need the small `PixelSink` trait, so they can be used
//! against any in-memory buffer as well.

pub mod arc;
pub mod canvas;
pub mod color;
pub mod display;
pub mod dummypins;
pub mod error;
pub mod flush;
pub mod font;
pub mod fonts;
pub mod instructions;
pub mod raster;
pub mod sink;
pub mod text;
pub mod tiles;
pub mod transport;

#[cfg(feature = "graphics")]
pub mod drawtarget;

/// width of the ILI9341 panel in its native (portrait) orientation
pub const NATIVE_WIDTH: u16 = 240;
/// height of the ILI9341 panel in its native (portrait) orientation
pub const NATIVE_HEIGHT: u16 = 320;

/// bytes sent over the wire per pixel (RGB565)
pub const BYTES_PER_PIXEL: usize = 2;

/// default tile width, 10 tiles across a landscape screen
pub const TILE_WIDTH: u16 = 32;
/// default tile height, 10 tiles down a landscape screen
pub const TILE_HEIGHT: u16 = 24;

pub use crate::{
    canvas::{Canvas, WidthType},
    color::Rgb565,
    display::{Config, Display},
    error::{Error, FlushError},
    font::{BitmapFont, Glyph},
    instructions::Rotation,
    sink::PixelSink,
    text::TextArea,
    transport::Transport,
};
