//! # RGB565 color model
//!
//! The ILI9341 is configured for 16 bits per pixel: 5 bits red, 6 bits green and 5 bits blue,
//! packed into one big-endian `u16` on the wire.
//!
//! Colors are always created from a wider 8 bits per channel value through `Rgb565::from_rgb`,
//! so every packed value in the crate went through the same truncation.

/// Packed 16 bit color as understood by the display controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb565(u16);

impl Rgb565 {
    /// Convert 8 bit per channel red, green and blue into the packed 5/6/5 format.
    ///
    /// The lowest bits of every channel are dropped (3 for red and blue, 2 for green).
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Rgb565 {
        Rgb565(((r as u16 & 0xf8) << 8) | ((g as u16 & 0xfc) << 3) | (b as u16 >> 3))
    }

    /// Convert a 24 bit `0xRRGGBB` value, the notation used by most color tables.
    pub const fn from_rgb888(rgb: u32) -> Rgb565 {
        Rgb565::from_rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// the packed value
    pub const fn into_inner(self) -> u16 {
        self.0
    }

    /// the two bytes as they are sent to the display, most significant byte first
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    /// red channel, 0..32
    pub const fn r(self) -> u8 {
        (self.0 >> 11) as u8
    }

    /// green channel, 0..64
    pub const fn g(self) -> u8 {
        ((self.0 >> 5) & 0x3f) as u8
    }

    /// blue channel, 0..32
    pub const fn b(self) -> u8 {
        (self.0 & 0x1f) as u8
    }
}

impl From<(u8, u8, u8)> for Rgb565 {
    fn from((r, g, b): (u8, u8, u8)) -> Rgb565 {
        Rgb565::from_rgb(r, g, b)
    }
}

/// Named colors, converted at compile time.
pub mod named {
    use super::Rgb565;

    pub const BLACK: Rgb565 = Rgb565::from_rgb888(0x000000);
    pub const WHITE: Rgb565 = Rgb565::from_rgb888(0xFFFFFF);
    pub const RED: Rgb565 = Rgb565::from_rgb888(0xFF0000);
    pub const GREEN: Rgb565 = Rgb565::from_rgb888(0x00FF00);
    pub const BLUE: Rgb565 = Rgb565::from_rgb888(0x0000FF);
    pub const YELLOW: Rgb565 = Rgb565::from_rgb888(0xFFFF00);
    pub const CYAN: Rgb565 = Rgb565::from_rgb888(0x00FFFF);
    pub const MAGENTA: Rgb565 = Rgb565::from_rgb888(0xFF00FF);
    pub const ORANGE: Rgb565 = Rgb565::from_rgb888(0xFFA500);
    pub const GOLD: Rgb565 = Rgb565::from_rgb888(0xFFD700);
    pub const CRIMSON: Rgb565 = Rgb565::from_rgb888(0xDC143C);
    pub const DARKRED: Rgb565 = Rgb565::from_rgb888(0x8B0000);
    pub const FORESTGREEN: Rgb565 = Rgb565::from_rgb888(0x228B22);
    pub const DARKGREEN: Rgb565 = Rgb565::from_rgb888(0x006400);
    pub const MEDIUMSPRINGGREEN: Rgb565 = Rgb565::from_rgb888(0x00FA9A);
    pub const NAVY: Rgb565 = Rgb565::from_rgb888(0x000080);
    pub const DARKBLUE: Rgb565 = Rgb565::from_rgb888(0x00008B);
    pub const ROYALBLUE: Rgb565 = Rgb565::from_rgb888(0x4169E1);
    pub const LIGHTBLUE: Rgb565 = Rgb565::from_rgb888(0xADD8E6);
    pub const SILVER: Rgb565 = Rgb565::from_rgb888(0xC0C0C0);
    pub const GRAY: Rgb565 = Rgb565::from_rgb888(0x808080);
}
