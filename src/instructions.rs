//! # Module defining the instruction set of the ILI9341
//!
//! Only the subset of the (large) command set that this driver uses is implemented. Every
//! instruction is an enum variant carrying its parameters, `opcode()` gives the command byte
//! which is sent with D/C low, `params()` the parameter bytes which follow with D/C high.
//! The names follow the data sheet:
//! <https://cdn-shop.adafruit.com/datasheets/ILI9341.pdf>
//!
//! ## Memory access control (MADCTL)
//! The controller always scans its frame memory the same way, the MADCTL register decides how
//! column/page addresses map onto it. Swapping rows and columns (MV) turns the 240x320 portrait
//! panel into a 320x240 landscape one, mirroring (MX/MY) turns it upside down. The BGR bit is set
//! because the common modules have their color filter in blue-green-red order.
//!
//! ## Init script
//! `init_sequence()` is the fixed script sent after a hardware reset. It has no algorithmic
//! content: reset, power and VCOM levels, orientation, 16 bit pixel format, frame rate, gamma
//! curve, and finally sleep out and display on.

use crate::{NATIVE_HEIGHT, NATIVE_WIDTH};

const MADCTL_MY: u8 = 0b1000_0000;
const MADCTL_MX: u8 = 0b0100_0000;
const MADCTL_MV: u8 = 0b0010_0000;
const MADCTL_BGR: u8 = 0b0000_1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Orientation of the screen, clockwise from the native portrait orientation.
pub enum Rotation {
    /// portrait, 240x320
    Deg0,
    /// landscape, 320x240
    #[default]
    Deg90,
    /// portrait, upside down
    Deg180,
    /// landscape, upside down
    Deg270,
}

impl Rotation {
    /// MADCTL value selecting this orientation
    pub fn madctl(self) -> u8 {
        match self {
            Rotation::Deg0 => MADCTL_MX | MADCTL_BGR,
            Rotation::Deg90 => MADCTL_MV | MADCTL_BGR,
            Rotation::Deg180 => MADCTL_MY | MADCTL_BGR,
            Rotation::Deg270 => MADCTL_MX | MADCTL_MY | MADCTL_MV | MADCTL_BGR,
        }
    }

    /// (width, height) of the screen in this orientation
    pub fn size(self) -> (u16, u16) {
        match self {
            Rotation::Deg0 | Rotation::Deg180 => (NATIVE_WIDTH, NATIVE_HEIGHT),
            Rotation::Deg90 | Rotation::Deg270 => (NATIVE_HEIGHT, NATIVE_WIDTH),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
/// Pixel format of the RGB and MCU interface (COLMOD).
pub enum PixelFormat {
    /// 16 bits per pixel, RGB565
    Bits16 = 0x55,
    /// 18 bits per pixel, sent as three bytes
    Bits18 = 0x66,
}

/// ILI9341 instructions used by this driver, see data sheet chapter 8
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// no operation
    // translates to: 0x00
    Nop,

    /// software reset, needs 5ms before the next command (120ms when sleeping)
    // translates to: 0x01
    SoftwareReset,

    /// leave sleep mode, needs 120ms before the next command
    // translates to: 0x11
    SleepOut,

    /// enter sleep mode
    // translates to: 0x10
    SleepIn,

    /// stop showing the frame memory
    // translates to: 0x28
    DisplayOff,

    /// show the frame memory
    // translates to: 0x29
    DisplayOn,

    /// select one of the four gamma curves (1, 2, 4 or 8)
    // translates to: 0x26
    GammaSet(u8),

    /// first and last column (inclusive) of the address window
    // translates to: 0x2a SC[15:8] SC[7:0] EC[15:8] EC[7:0]
    ColumnAddressSet { start: u16, end: u16 },

    /// first and last page (row, inclusive) of the address window
    // translates to: 0x2b SP[15:8] SP[7:0] EP[15:8] EP[7:0]
    PageAddressSet { start: u16, end: u16 },

    /// start writing pixel data into the address window
    // translates to: 0x2c
    MemoryWrite,

    /// scan direction of the frame memory
    // translates to: 0x36
    MemoryAccessControl(Rotation),

    /// bits per pixel of the interface
    // translates to: 0x3a
    PixelFormatSet(PixelFormat),

    /// division ratio and frame rate in normal mode
    // translates to: 0xb1
    FrameRateControl { division: u8, rtna: u8 },

    /// GVDD level
    // translates to: 0xc0
    PowerControl1(u8),

    /// step up factor
    // translates to: 0xc1
    PowerControl2(u8),

    /// VCOMH and VCOML voltage
    // translates to: 0xc5
    VcomControl1 { vmh: u8, vml: u8 },

    /// VCOM offset
    // translates to: 0xc7
    VcomControl2(u8),
}

use Instruction::*;

/// up to four parameter bytes of an instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    bytes: [u8; 4],
    len: usize,
}

impl Params {
    fn new(bytes: &[u8]) -> Params {
        let mut p = Params { bytes: [0; 4], len: bytes.len() };
        p.bytes[..bytes.len()].copy_from_slice(bytes);
        p
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl Instruction {
    /// The command byte, sent with D/C low
    pub fn opcode(self) -> u8 {
        match self {
            Nop => 0x00,
            SoftwareReset => 0x01,
            SleepIn => 0x10,
            SleepOut => 0x11,
            GammaSet(_) => 0x26,
            DisplayOff => 0x28,
            DisplayOn => 0x29,
            ColumnAddressSet { .. } => 0x2a,
            PageAddressSet { .. } => 0x2b,
            MemoryWrite => 0x2c,
            MemoryAccessControl(_) => 0x36,
            PixelFormatSet(_) => 0x3a,
            FrameRateControl { .. } => 0xb1,
            PowerControl1(_) => 0xc0,
            PowerControl2(_) => 0xc1,
            VcomControl1 { .. } => 0xc5,
            VcomControl2(_) => 0xc7,
        }
    }

    /// The parameter bytes following the command, sent with D/C high
    pub fn params(self) -> Params {
        match self {
            Nop | SoftwareReset | SleepIn | SleepOut | DisplayOff | DisplayOn | MemoryWrite => {
                Params::new(&[])
            }
            GammaSet(curve) => Params::new(&[curve]),
            ColumnAddressSet { start, end } | PageAddressSet { start, end } => {
                let [s1, s0] = start.to_be_bytes();
                let [e1, e0] = end.to_be_bytes();
                Params::new(&[s1, s0, e1, e0])
            }
            MemoryAccessControl(rotation) => Params::new(&[rotation.madctl()]),
            PixelFormatSet(format) => Params::new(&[format as u8]),
            FrameRateControl { division, rtna } => Params::new(&[division, rtna]),
            PowerControl1(level) | PowerControl2(level) | VcomControl2(level) => {
                Params::new(&[level])
            }
            VcomControl1 { vmh, vml } => Params::new(&[vmh, vml]),
        }
    }

    /// milliseconds the controller needs before it accepts the next command
    pub fn settle_ms(self) -> u16 {
        match self {
            SoftwareReset | SleepOut | SleepIn => 120,
            DisplayOn => 20,
            _ => 0,
        }
    }
}

/// The fixed init script sent after a hardware reset.
pub fn init_sequence(rotation: Rotation) -> [Instruction; 12] {
    [
        SoftwareReset,
        DisplayOff,
        PowerControl1(0x23),
        PowerControl2(0x10),
        VcomControl1 { vmh: 0x3e, vml: 0x28 },
        VcomControl2(0x86),
        MemoryAccessControl(rotation),
        PixelFormatSet(PixelFormat::Bits16),
        FrameRateControl { division: 0x00, rtna: 0x18 },
        GammaSet(0x01),
        SleepOut,
        DisplayOn,
    ]
}

/// A prelude for convenience, it pulls all enums into scope.
pub mod prelude {
    pub use super::{
        init_sequence,
        Instruction, Instruction::*,
        PixelFormat,
        Rotation,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_set_is_big_endian_inclusive() {
        let caset = ColumnAddressSet { start: 0x0010, end: 0x013f };
        assert_eq!(caset.opcode(), 0x2a);
        assert_eq!(caset.params().as_slice(), &[0x00, 0x10, 0x01, 0x3f]);
        assert_eq!(PageAddressSet { start: 1, end: 2 }.opcode(), 0x2b);
    }

    #[test]
    fn landscape_swaps_rows_and_columns() {
        assert_eq!(Rotation::Deg90.size(), (320, 240));
        assert_eq!(Rotation::Deg180.size(), (240, 320));
        assert_ne!(Rotation::Deg90.madctl() & MADCTL_MV, 0);
        assert_eq!(Rotation::Deg0.madctl() & MADCTL_MV, 0);
    }

    #[test]
    fn init_sequence_ends_awake() {
        let script = init_sequence(Rotation::Deg90);
        assert_eq!(script[0], SoftwareReset);
        assert_eq!(script[script.len() - 2], SleepOut);
        assert_eq!(script[script.len() - 1], DisplayOn);
        assert!(script.contains(&PixelFormatSet(PixelFormat::Bits16)));
    }
}
