//! SSD1306 controller protocol over a [`BusTransport`].
//!
//! [`OledDriver`] owns the transport and tracks the controller lifecycle:
//! construction without bus traffic, explicit blocking initialisation, and
//! full-frame page transfers from a caller-owned [`Framebuffer`].

use embedded_hal::delay::DelayNs;

use crate::commands::{self, INIT_SEQUENCE};
use crate::config::DriverConfig;
use crate::error::OledError;
use crate::framebuffer::Framebuffer;
use crate::transport::BusTransport;

/// Controller lifecycle as seen by the driver.
///
/// `Uninitialized → Initializing → Ready → (Updating ↔ Ready)`. A failed
/// initialisation falls back to `Uninitialized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControllerState {
    /// No init sequence has completed.
    Uninitialized,
    /// The init sequence is being streamed.
    Initializing,
    /// Idle and accepting updates.
    Ready,
    /// A frame is being streamed.
    Updating,
}

/// Blocking driver for an SSD1306 128×64 OLED controller.
///
/// # Lifecycle
///
/// 1. [`OledDriver::new()`] — constructs the driver without any bus traffic.
/// 2. [`OledDriver::initialize()`] — sends the power-up command sequence.
/// 3. Draw into a [`Framebuffer`] with [`draw_text`](crate::draw_text).
/// 4. [`OledDriver::present()`] — transfers the frame buffer to hardware.
///
/// The driver never refreshes on its own: call `present()` whenever the
/// frame buffer changes.
///
/// # Example
///
/// ```no_run
/// use embedded_graphics::geometry::Point;
/// use oled_text::{draw_text, Framebuffer, I2cTransport, OledDriver, DEFAULT_ADDRESS};
///
/// # fn example(
/// #     i2c: impl embedded_hal::i2c::I2c,
/// #     delay: &mut impl embedded_hal::delay::DelayNs,
/// # ) {
/// let mut oled = OledDriver::new(I2cTransport::new(i2c, DEFAULT_ADDRESS));
/// oled.initialize(delay).unwrap();
///
/// let mut fb = Framebuffer::new();
/// draw_text(&mut fb, "Hello", Point::new(0, 16));
/// oled.present(&fb).unwrap();
/// # }
/// ```
pub struct OledDriver<T> {
    transport: T,
    state: ControllerState,
    power_on_delay_ms: u32,
}

impl<T> OledDriver<T>
where
    T: BusTransport,
{
    /// Construct an uninitialised driver with the default configuration.
    ///
    /// No bus traffic is generated. You **must** call
    /// [`initialize()`](Self::initialize) before presenting frames.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, &DriverConfig::default())
    }

    /// Construct an uninitialised driver using `config` for timing.
    ///
    /// The bus address and clock in `config` are applied by whoever builds
    /// the transport.
    pub fn with_config(transport: T, config: &DriverConfig) -> Self {
        Self {
            transport,
            state: ControllerState::Uninitialized,
            power_on_delay_ms: config.power_on_delay_ms,
        }
    }

    /// Power up the controller.
    ///
    /// Waits the power-on delay, then issues every byte of
    /// [`INIT_SEQUENCE`] as its own command transaction. May be called again
    /// to re-run the whole sequence, e.g. after a transport failure.
    ///
    /// # Errors
    ///
    /// Returns [`OledError::Transport`] on the first failed transaction. No
    /// further commands are sent and the driver is left `Uninitialized`.
    pub fn initialize(&mut self, delay: &mut impl DelayNs) -> Result<(), OledError<T::Error>> {
        self.state = ControllerState::Initializing;

        #[cfg(feature = "defmt")]
        defmt::debug!("OLED power-on delay {} ms", self.power_on_delay_ms);

        delay.delay_ms(self.power_on_delay_ms);

        for &command in INIT_SEQUENCE.iter() {
            if let Err(e) = self.transport.write_command(command) {
                #[cfg(feature = "defmt")]
                defmt::error!("OLED init aborted at command {=u8:#x}", command);
                self.state = ControllerState::Uninitialized;
                return Err(OledError::Transport(e));
            }
        }

        self.state = ControllerState::Ready;

        #[cfg(feature = "defmt")]
        defmt::info!("OLED initialised");

        Ok(())
    }

    /// Transfer the whole frame buffer to the display.
    ///
    /// For each page in ascending order: select the page, reset the column
    /// pointer to 0, then send the page's bytes as one data transaction.
    ///
    /// # Errors
    ///
    /// Returns [`OledError::NotInitialized`] (without bus traffic) if
    /// [`initialize()`](Self::initialize) has not succeeded, or
    /// [`OledError::Transport`] on the first failed transaction, after which
    /// nothing else is sent. The next `present()` rewrites every page.
    pub fn present(&mut self, fb: &Framebuffer) -> Result<(), OledError<T::Error>> {
        self.ensure_ready()?;
        self.state = ControllerState::Updating;

        let result = self.write_pages(fb);
        self.state = ControllerState::Ready;

        #[cfg(feature = "defmt")]
        if result.is_err() {
            defmt::error!("OLED frame transfer aborted");
        }

        result.map_err(OledError::Transport)
    }

    fn write_pages(&mut self, fb: &Framebuffer) -> Result<(), T::Error> {
        for (page, bytes) in fb.pages() {
            for command in commands::page_address(page as u8) {
                self.transport.write_command(command)?;
            }
            self.transport.write_data(bytes)?;
        }
        Ok(())
    }

    /// Set display contrast (0–255).
    ///
    /// # Errors
    ///
    /// [`OledError::NotInitialized`] before initialisation, otherwise any
    /// transport failure.
    pub fn set_contrast(&mut self, level: u8) -> Result<(), OledError<T::Error>> {
        self.ensure_ready()?;
        self.transport.write_command(commands::SET_CONTRAST)?;
        self.transport.write_command(level)?;
        Ok(())
    }

    /// Turn the panel on or off. RAM contents are retained while off.
    ///
    /// # Errors
    ///
    /// [`OledError::NotInitialized`] before initialisation, otherwise any
    /// transport failure.
    pub fn set_display_on(&mut self, on: bool) -> Result<(), OledError<T::Error>> {
        self.ensure_ready()?;
        let command = if on {
            commands::DISPLAY_ON
        } else {
            commands::DISPLAY_OFF
        };
        self.transport.write_command(command)?;
        Ok(())
    }

    /// Invert display colors.
    ///
    /// # Errors
    ///
    /// [`OledError::NotInitialized`] before initialisation, otherwise any
    /// transport failure.
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), OledError<T::Error>> {
        self.ensure_ready()?;
        let command = if inverted {
            commands::SET_INVERSE
        } else {
            commands::SET_NORMAL
        };
        self.transport.write_command(command)?;
        Ok(())
    }

    fn ensure_ready(&self) -> Result<(), OledError<T::Error>> {
        if self.state == ControllerState::Ready {
            Ok(())
        } else {
            Err(OledError::NotInitialized)
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Check whether the controller has been successfully initialised.
    ///
    /// No bus traffic is generated.
    pub fn is_ready(&self) -> bool {
        self.state == ControllerState::Ready
    }

    /// Borrow the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Consume the driver and give back the transport.
    pub fn release(self) -> T {
        self.transport
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
