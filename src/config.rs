//! Display geometry, bus constants and runtime configuration.
//!
//! The panel geometry is fixed at compile time: every buffer in this crate
//! is sized from [`WIDTH`] and [`HEIGHT`]. The bus-facing values are grouped
//! in [`DriverConfig`] so callers can override them at construction time,
//! and [`Banner`] carries the caller-supplied text and position.

use embedded_graphics::geometry::Point;

// ── Panel geometry ───────────────────────────────────────────────────────

/// Display width in pixels.
pub const WIDTH: usize = 128;

/// Display height in pixels.
pub const HEIGHT: usize = 64;

/// Number of 8-row hardware pages.
pub const PAGES: usize = HEIGHT / 8;

/// Size of the packed 1 bpp frame buffer in bytes.
pub const BUFFER_LEN: usize = WIDTH * HEIGHT / 8;

// ── Bus defaults ─────────────────────────────────────────────────────────

/// 7-bit I2C address of the controller.
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// I2C clock in Hz (standard mode).
pub const BUS_FREQUENCY_HZ: u32 = 100_000;

/// Wait between power-up and the first initialisation command.
pub const POWER_ON_DELAY_MS: u32 = 100;

// ── DriverConfig ─────────────────────────────────────────────────────────

/// Bus-facing driver configuration.
///
/// [`DriverConfig::default()`] reproduces the reference hardware setup
/// (address `0x3C`, 100 kHz, 100 ms power-on delay).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriverConfig {
    /// 7-bit I2C device address. Default: `0x3C`.
    pub address: u8,
    /// Bus clock in Hz, applied by whoever configures the peripheral.
    /// Default: 100 000.
    pub bus_frequency_hz: u32,
    /// Stabilisation delay before the first init command. Default: 100.
    pub power_on_delay_ms: u32,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            bus_frequency_hz: BUS_FREQUENCY_HZ,
            power_on_delay_ms: POWER_ON_DELAY_MS,
        }
    }
}

// ── Banner ───────────────────────────────────────────────────────────────

/// Text and top-left position of a one-shot banner render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banner<'a> {
    /// Text to draw. Only ASCII letters produce pixels.
    pub text: &'a str,
    /// Top-left corner of the first glyph.
    pub origin: Point,
}

impl<'a> Banner<'a> {
    /// Construct a banner at `origin`.
    pub const fn new(text: &'a str, origin: Point) -> Self {
        Self { text, origin }
    }
}

impl Default for Banner<'static> {
    fn default() -> Self {
        Self::new("Noe Mendoza R", Point::new(0, 16))
    }
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_constants() {
        assert_eq!(PAGES, 8);
        assert_eq!(BUFFER_LEN, 1024);
    }

    #[test]
    fn default_config_values() {
        let c = DriverConfig::default();
        assert_eq!(c.address, 0x3C);
        assert_eq!(c.bus_frequency_hz, 100_000);
        assert_eq!(c.power_on_delay_ms, 100);
    }

    #[test]
    fn config_override_keeps_other_fields() {
        let c = DriverConfig {
            address: 0x3D,
            ..DriverConfig::default()
        };
        assert_eq!(c.address, 0x3D);
        assert_eq!(c.power_on_delay_ms, POWER_ON_DELAY_MS);
    }

    #[test]
    fn default_banner() {
        let b = Banner::default();
        assert_eq!(b.text, "Noe Mendoza R");
        assert_eq!(b.origin, Point::new(0, 16));
    }
}
