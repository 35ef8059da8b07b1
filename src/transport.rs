//! # Transport between the tiles and the display controller
//!
//! The flush worker only needs two operations: select an inclusive pixel rectangle as the
//! address window, then stream raw RGB565 bytes into it in row-major order. `Transport` is that
//! contract; `Ili9341Spi` implements it on top of an `embedded_hal` SPI bus plus the D/C and
//! reset lines, and also owns the init script.

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::spi::Write as SpiWrite;
use embedded_hal::digital::v2::OutputPin;
use log::{debug, info};

use crate::instructions::prelude::*;

/// largest single SPI write, linux spidev refuses anything above its buffer size (4096)
const MAX_TRANSFER: usize = 4096;

/// Bus access used by the flush worker.
///
/// `set_window` and `stream` are always called as a pair, once per flushed tile.
pub trait Transport {
    type Error;

    /// select the inclusive rectangle `x_start..=x_end`, `y_start..=y_end` as write target
    fn set_window(
        &mut self,
        x_start: u16,
        y_start: u16,
        x_end: u16,
        y_end: u16,
    ) -> Result<(), Self::Error>;

    /// write packed color bytes into the current window, row by row
    fn stream(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

#[derive(Debug)]
pub enum SpiBackendError<PinErr, SpiErr> {
    Pin(PinErr),
    Spi(SpiErr),
}

/// ILI9341 on a 4-wire SPI bus: SPI data, D/C (data = high, command = low) and reset.
///
/// Chip select is expected to be handled by the SPI implementation (spidev does this).
#[derive(Debug)]
pub struct Ili9341Spi<SPI, DC, RST> {
    spi: SPI,
    dc: DC,
    rst: RST,
}

impl<SPI, DC, RST, PinErr, SpiErr> Ili9341Spi<SPI, DC, RST>
where
    SPI: SpiWrite<u8, Error = SpiErr>,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
{
    pub fn new(spi: SPI, dc: DC, rst: RST) -> Ili9341Spi<SPI, DC, RST> {
        Ili9341Spi { spi, dc, rst }
    }

    /// Hardware reset the controller and send the init script.
    ///
    /// This has to happen once before the transport is handed to `Display::new()`, the
    /// controller is in an undefined state after power on.
    pub fn init<DELAY>(
        &mut self,
        delay: &mut DELAY,
        rotation: Rotation,
    ) -> Result<(), SpiBackendError<PinErr, SpiErr>>
    where
        DELAY: DelayMs<u16>,
    {
        // reset is active low, the data sheet wants at least 10us low and 5ms before commands
        self.rst.set_high().map_err(SpiBackendError::Pin)?;
        delay.delay_ms(5);
        self.rst.set_low().map_err(SpiBackendError::Pin)?;
        delay.delay_ms(20);
        self.rst.set_high().map_err(SpiBackendError::Pin)?;
        delay.delay_ms(150);

        for instruction in init_sequence(rotation).iter() {
            self.write_instruction(*instruction)?;
            let settle = instruction.settle_ms();
            if settle > 0 {
                delay.delay_ms(settle);
            }
        }
        info!("ILI9341 initialized, rotation {:?}", rotation);
        Ok(())
    }

    /// Send one instruction: command byte with D/C low, parameters with D/C high.
    pub fn write_instruction(
        &mut self,
        instruction: Instruction,
    ) -> Result<(), SpiBackendError<PinErr, SpiErr>> {
        debug!("command {:#04x}", instruction.opcode());
        self.dc.set_low().map_err(SpiBackendError::Pin)?;
        self.spi.write(&[instruction.opcode()]).map_err(SpiBackendError::Spi)?;

        let params = instruction.params();
        if !params.as_slice().is_empty() {
            self.write_data(params.as_slice())?;
        }
        Ok(())
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), SpiBackendError<PinErr, SpiErr>> {
        self.dc.set_high().map_err(SpiBackendError::Pin)?;
        for chunk in data.chunks(MAX_TRANSFER) {
            self.spi.write(chunk).map_err(SpiBackendError::Spi)?;
        }
        Ok(())
    }

    /// give back the bus and pins
    pub fn release(self) -> (SPI, DC, RST) {
        (self.spi, self.dc, self.rst)
    }
}

impl<SPI, DC, RST, PinErr, SpiErr> Transport for Ili9341Spi<SPI, DC, RST>
where
    SPI: SpiWrite<u8, Error = SpiErr>,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
{
    type Error = SpiBackendError<PinErr, SpiErr>;

    fn set_window(
        &mut self,
        x_start: u16,
        y_start: u16,
        x_end: u16,
        y_end: u16,
    ) -> Result<(), Self::Error> {
        self.write_instruction(ColumnAddressSet { start: x_start, end: x_end })?;
        self.write_instruction(PageAddressSet { start: y_start, end: y_end })?;
        self.write_instruction(MemoryWrite)
    }

    fn stream(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.write_data(bytes)
    }
}
