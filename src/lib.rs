//! Blocking SSD1306 (128×64) OLED driver with a page-packed framebuffer.
//!
//! This crate provides [`OledDriver`], which programs the controller and
//! streams frames over any [`BusTransport`], a caller-owned [`Framebuffer`]
//! laid out in the controller's native page order, and [`draw_text`],
//! which renders ASCII letters with a fixed 5×8 font.
//!
//! # Quick Start
//!
//! ```ignore
//! use embedded_graphics::geometry::Point;
//! use oled_text::{draw_text, Framebuffer, I2cTransport, OledDriver, DEFAULT_ADDRESS};
//!
//! let mut oled = OledDriver::new(I2cTransport::new(i2c, DEFAULT_ADDRESS));
//! oled.initialize(&mut delay)?;
//!
//! let mut fb = Framebuffer::new();
//! draw_text(&mut fb, "Hello", Point::new(0, 16));
//! oled.present(&fb)?;
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`** — structured logging via [`defmt`](https://docs.rs/defmt)
//!   and `defmt::Format` on public types.

#![no_std]

pub mod banner;
pub mod commands;
pub mod config;
pub mod driver;
pub mod error;
pub mod framebuffer;
pub mod glyph;
pub mod raster;
pub mod transport;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use banner::show_banner;
pub use config::{
    Banner, DriverConfig, BUFFER_LEN, BUS_FREQUENCY_HZ, DEFAULT_ADDRESS, HEIGHT, PAGES, WIDTH,
};
pub use driver::{ControllerState, OledDriver};
pub use error::OledError;
pub use framebuffer::Framebuffer;
pub use glyph::{lookup, Glyph};
pub use raster::{draw_char, draw_text, CHAR_PITCH};
pub use transport::{BusTransport, I2cTransport, InterfaceTransport};
