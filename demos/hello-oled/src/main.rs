//! Banner example
//!
//! Standalone hardware demonstration: brings up the SSD1306 over a blocking
//! I2C bus, renders one line of text, pushes it to the panel and then idles
//! forever. The display keeps showing the last frame; nothing is redrawn.
//!
//! # Wiring
//!
//! | Signal    | Pico Pin | Notes                     |
//! |-----------|----------|---------------------------|
//! | I2C0 SDA  | GP4      | internal pull-up enabled  |
//! | I2C0 SCL  | GP5      | internal pull-up enabled  |
//! | OLED VCC  | 3V3      |                           |
//! | OLED GND  | GND      |                           |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::i2c::{self, I2c};
use embassy_time::{Delay, Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use oled_text::{show_banner, Banner, DriverConfig, Framebuffer, I2cTransport, OledDriver};

// ---------------------------------------------------------------------------
// Hardware pin assignments — change here for hardware revisions
// I2C bus is used exclusively by the OLED display in this example
// ---------------------------------------------------------------------------
// I2C_SDA → GP4  (p.PIN_4)
// I2C_SCL → GP5  (p.PIN_5)
// ---------------------------------------------------------------------------

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("Banner example starting");

    let config = DriverConfig::default();

    // --- I2C bus (GP4 = SDA, GP5 = SCL), blocking, standard mode ---
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = config.bus_frequency_hz;
    i2c_config.sda_pullup = true;
    i2c_config.scl_pullup = true;
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c_config);

    let mut oled = OledDriver::with_config(I2cTransport::new(i2c, config.address), &config);
    let mut fb = Framebuffer::new();

    match show_banner(&mut oled, &mut fb, &Banner::default(), &mut Delay) {
        Ok(()) => info!("Banner on screen"),
        Err(e) => error!("Banner failed: {}", e),
    }

    // Nothing left to do; the panel holds the frame on its own.
    loop {
        Timer::after(Duration::from_secs(60)).await;
    }
}
