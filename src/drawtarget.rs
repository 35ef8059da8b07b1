use core::convert::Infallible;

use embedded_graphics_core::{pixelcolor::Rgb565 as EgRgb565, prelude::*};

use crate::{color::Rgb565, display::Display, transport::Transport};

impl From<EgRgb565> for Rgb565 {
    fn from(color: EgRgb565) -> Rgb565 {
        // channels are 5/6/5 bits wide, scale them back to 8 bits
        Rgb565::from_rgb(color.r() << 3, color.g() << 2, color.b() << 3)
    }
}

impl<T> DrawTarget for Display<T>
where
    T: Transport + Send + 'static,
    T::Error: Send + 'static,
{
    type Error = Infallible;
    type Color = EgRgb565;

    /// Only touches the framebuffer, call `present()` or `flush()` to send it.
    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            self.write_pixel(coord.x, coord.y, color.into());
        }
        Ok(())
    }

    fn clear(&mut self, color: EgRgb565) -> Result<(), Self::Error> {
        self.fill(color.into());
        Ok(())
    }
}

impl<T> OriginDimensions for Display<T>
where
    T: Transport + Send + 'static,
    T::Error: Send + 'static,
{
    fn size(&self) -> Size {
        Size::new(self.config().width.into(), self.config().height.into())
    }
}
