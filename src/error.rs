//! Error types of the driver.
//!
//! Drawing errors never touch the framebuffer, bus errors are reported by the flush pipeline
//! and leave the affected tile dirty so the next `present()` sends it again.

use core::fmt;

/// Errors returned by the font renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// character code outside the printable range `0x20..=0x7e`
    OutOfRange(u8),
    /// the font table can not be used to render the printable ASCII range
    UnsupportedFont,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfRange(code) => write!(f, "character code {:#04x} out of range", code),
            Error::UnsupportedFont => f.write_str("font format is not supported"),
        }
    }
}

impl std::error::Error for Error {}

/// Errors reported by `Display::present()` and `Display::flush()`.
#[derive(Debug)]
pub enum FlushError<E> {
    /// the transport failed while sending tile `tile`
    Transport { tile: usize, source: E },
    /// the flush worker is gone (it panicked or the transport was dropped)
    WorkerStopped,
}

impl<E> FlushError<E> {
    pub(crate) fn transport(tile: usize) -> impl FnOnce(E) -> FlushError<E> {
        move |source| FlushError::Transport { tile, source }
    }

    /// index of the tile that failed, if any
    pub fn tile(&self) -> Option<usize> {
        match self {
            FlushError::Transport { tile, .. } => Some(*tile),
            FlushError::WorkerStopped => None,
        }
    }
}

impl<E: fmt::Debug> fmt::Display for FlushError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlushError::Transport { tile, source } => {
                write!(f, "transport failed while flushing tile {}: {:?}", tile, source)
            }
            FlushError::WorkerStopped => f.write_str("flush worker is not running"),
        }
    }
}

impl<E: fmt::Debug> std::error::Error for FlushError<E> {}
