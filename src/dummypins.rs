//! # Stand-ins for control lines and timers the board doesn't have
//!
//! Many ILI9341 breakouts tie the reset line to the MCU reset or hard-wire the backlight.
//! `Ili9341Spi` still wants an `OutputPin` for reset, so hand it a `DummyOutputPin`; the
//! software reset of the init script does the rest.

use core::convert::Infallible;

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::OutputPin;

/// An `OutputPin` that is not connected to anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct DummyOutputPin;

impl OutputPin for DummyOutputPin {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// A delay that returns immediately.
///
/// For simulated panels and tests, where nothing has to settle.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl DelayMs<u16> for NoDelay {
    fn delay_ms(&mut self, _ms: u16) {}
}
