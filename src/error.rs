//! Error types for the OLED driver.

use core::fmt;

/// Errors that can occur during controller operations.
///
/// Generic over the transport error so bus failures keep their original
/// detail. Characters without a glyph are not an error: the rasterizer
/// skips them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OledError<E> {
    /// The bus did not complete a transaction. The operation was aborted at
    /// that point and the controller state is undefined until the next
    /// successful [`OledDriver::initialize()`](crate::OledDriver::initialize).
    Transport(E),
    /// An operation was attempted before
    /// [`OledDriver::initialize()`](crate::OledDriver::initialize) succeeded.
    NotInitialized,
}

// Allow ergonomic `?` propagation from raw transport errors.
impl<E> From<E> for OledError<E> {
    fn from(error: E) -> Self {
        OledError::Transport(error)
    }
}

impl<E: fmt::Debug> fmt::Display for OledError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OledError::Transport(e) => {
                write!(f, "SSD1306 bus write failed, re-initialize the panel: {:?}", e)
            }
            OledError::NotInitialized => {
                write!(f, "SSD1306 command refused: initialize() has not completed")
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for OledError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            OledError::Transport(e) => {
                defmt::write!(f, "SSD1306 bus write failed, re-initialize the panel: {}", e)
            }
            OledError::NotInitialized => {
                defmt::write!(f, "SSD1306 command refused: initialize() has not completed")
            }
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
