//! Bus transport capability and its implementations.
//!
//! The controller protocol only needs two framed operations: a single
//! command byte and a display-RAM payload. [`BusTransport`] captures that
//! seam; the implementations here cover a raw `embedded-hal` I2C bus, any
//! `display-interface` bus, and a host-side recorder.

use display_interface::{DataFormat, DisplayError, WriteOnlyDataCommand};
use embedded_hal::i2c::{I2c, Operation};
use heapless::Vec;

use crate::commands::{CONTROL_COMMAND, CONTROL_DATA};
use crate::config::WIDTH;

/// Blocking command/data transport to the display controller.
///
/// Each call is one complete bus transaction. Calls are issued in the exact
/// order the protocol requires and must not be reordered or batched.
pub trait BusTransport {
    /// Transport-level failure.
    type Error;

    /// Send one command byte (framed with the `0x00` control prefix).
    fn write_command(&mut self, command: u8) -> Result<(), Self::Error>;

    /// Send a display-RAM payload (framed with the `0x40` control prefix).
    fn write_data(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}

// ── I2C ──────────────────────────────────────────────────────────────────

/// SSD1306 framing over a blocking `embedded-hal` I2C bus.
pub struct I2cTransport<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cTransport<I2C>
where
    I2C: I2c,
{
    /// Create a transport for the device at `address`.
    ///
    /// # Arguments
    /// * `i2c` — I2C peripheral (takes ownership for exclusive access).
    /// * `address` — 7-bit I2C device address (typically `0x3C` or `0x3D`).
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// The configured 7-bit device address.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give back the I2C peripheral.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> BusTransport for I2cTransport<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn write_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.i2c.write(self.address, &[CONTROL_COMMAND, command])
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        // Adjacent writes go out as one frame without a repeated start, so
        // the payload needs no staging buffer.
        self.i2c.transaction(
            self.address,
            &mut [Operation::Write(&[CONTROL_DATA]), Operation::Write(data)],
        )
    }
}

// ── display-interface ────────────────────────────────────────────────────

/// Adapter for any `display-interface` bus (I2C, SPI, parallel).
///
/// The interface applies its own command/data framing.
pub struct InterfaceTransport<DI> {
    interface: DI,
}

impl<DI> InterfaceTransport<DI>
where
    DI: WriteOnlyDataCommand,
{
    /// Wrap a display interface.
    pub fn new(interface: DI) -> Self {
        Self { interface }
    }

    /// Give back the wrapped interface.
    pub fn release(self) -> DI {
        self.interface
    }
}

impl<DI> BusTransport for InterfaceTransport<DI>
where
    DI: WriteOnlyDataCommand,
{
    type Error = DisplayError;

    fn write_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.interface.send_commands(DataFormat::U8(&[command]))
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.interface.send_data(DataFormat::U8(data))
    }
}

// ── Recording transport ──────────────────────────────────────────────────

/// One captured bus transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transaction {
    /// A single command byte.
    Command(u8),
    /// A display-RAM payload of at most one page.
    Data(Vec<u8, WIDTH>),
}

/// Failures reported by [`RecordingTransport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RecordError {
    /// The log already holds `N` transactions.
    LogFull,
    /// A data payload was longer than one page.
    PayloadTooLong,
    /// Failure requested through [`RecordingTransport::failing_at()`].
    Injected,
}

/// Transport that captures the transaction log instead of driving hardware.
///
/// Holds up to `N` transactions without allocating. Used to produce golden
/// command streams on the host and to exercise failure paths.
///
/// ```
/// use oled_text::OledDriver;
/// use oled_text::transport::{RecordingTransport, Transaction};
/// # struct NoDelay;
/// # impl embedded_hal::delay::DelayNs for NoDelay { fn delay_ns(&mut self, _ns: u32) {} }
///
/// let mut driver = OledDriver::new(RecordingTransport::<64>::new());
/// driver.initialize(&mut NoDelay).unwrap();
/// assert_eq!(driver.transport().log()[0], Transaction::Command(0xAE));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingTransport<const N: usize> {
    log: Vec<Transaction, N>,
    attempts: usize,
    fail_at: Option<usize>,
}

impl<const N: usize> RecordingTransport<N> {
    /// An empty recorder that accepts every transaction.
    pub const fn new() -> Self {
        Self {
            log: Vec::new(),
            attempts: 0,
            fail_at: None,
        }
    }

    /// A recorder whose transaction number `index` (0-based, counting every
    /// attempt) fails with [`RecordError::Injected`].
    pub const fn failing_at(index: usize) -> Self {
        Self {
            log: Vec::new(),
            attempts: 0,
            fail_at: Some(index),
        }
    }

    /// Transactions that completed, in issue order.
    pub fn log(&self) -> &[Transaction] {
        &self.log
    }

    /// Number of transactions attempted, including failed ones.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Command bytes in issue order, skipping data transactions.
    pub fn commands(&self) -> impl Iterator<Item = u8> + '_ {
        self.log.iter().filter_map(|t| match t {
            Transaction::Command(c) => Some(*c),
            Transaction::Data(_) => None,
        })
    }

    /// Forget everything recorded so far. The failure index is kept.
    pub fn clear(&mut self) {
        self.log.clear();
        self.attempts = 0;
    }

    fn record(&mut self, transaction: Transaction) -> Result<(), RecordError> {
        let index = self.attempts;
        self.attempts += 1;
        if self.fail_at == Some(index) {
            return Err(RecordError::Injected);
        }
        self.log.push(transaction).map_err(|_| RecordError::LogFull)
    }
}

impl<const N: usize> BusTransport for RecordingTransport<N> {
    type Error = RecordError;

    fn write_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.record(Transaction::Command(command))
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        let payload = Vec::from_slice(data).map_err(|_| RecordError::PayloadTooLong)?;
        self.record(Transaction::Data(payload))
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
