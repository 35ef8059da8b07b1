//! The pixel capability the rasterizer and font renderer draw on.

use crate::color::Rgb565;

/// Anything that can store single pixels and knows its size.
///
/// Writes outside `0..screen_width()` x `0..screen_height()` must be ignored, shapes are
/// allowed to run off screen.
pub trait PixelSink {
    fn write_pixel(&mut self, x: i32, y: i32, color: Rgb565);
    fn screen_width(&self) -> i32;
    fn screen_height(&self) -> i32;
}

impl<S: PixelSink + ?Sized> PixelSink for &mut S {
    fn write_pixel(&mut self, x: i32, y: i32, color: Rgb565) {
        (**self).write_pixel(x, y, color)
    }

    fn screen_width(&self) -> i32 {
        (**self).screen_width()
    }

    fn screen_height(&self) -> i32 {
        (**self).screen_height()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::{BTreeMap, BTreeSet};

    /// In-memory sink remembering the last color of every pixel written.
    pub struct RecordingSink {
        pub width: i32,
        pub height: i32,
        pub pixels: BTreeMap<(i32, i32), Rgb565>,
    }

    impl RecordingSink {
        pub fn new(width: i32, height: i32) -> RecordingSink {
            RecordingSink { width, height, pixels: BTreeMap::new() }
        }

        /// coordinates of all written pixels
        pub fn points(&self) -> BTreeSet<(i32, i32)> {
            self.pixels.keys().copied().collect()
        }

        /// coordinates written with `color`
        pub fn points_of(&self, color: Rgb565) -> BTreeSet<(i32, i32)> {
            self.pixels.iter().filter(|(_, c)| **c == color).map(|(p, _)| *p).collect()
        }
    }

    impl PixelSink for RecordingSink {
        fn write_pixel(&mut self, x: i32, y: i32, color: Rgb565) {
            if (0..self.width).contains(&x) && (0..self.height).contains(&y) {
                self.pixels.insert((x, y), color);
            }
        }

        fn screen_width(&self) -> i32 {
            self.width
        }

        fn screen_height(&self) -> i32 {
            self.height
        }
    }
}
