//! One-shot banner rendering.
//!
//! [`show_banner`] is the whole job of the reference firmware: bring the
//! controller up, render a single line of text, and push it to the panel.
//! What happens afterwards (idling, sleeping, re-rendering) belongs to the
//! host program.

use embedded_hal::delay::DelayNs;

use crate::config::Banner;
use crate::driver::OledDriver;
use crate::error::OledError;
use crate::framebuffer::Framebuffer;
use crate::raster::draw_text;
use crate::transport::BusTransport;

/// Initialise the display and show `banner`.
///
/// # Control flow
///
/// 1. Run the controller init sequence (includes the power-on delay).
/// 2. Clear `fb` (no bus traffic).
/// 3. Draw `banner.text` at `banner.origin` (no bus traffic).
/// 4. Transfer the frame to the panel.
///
/// `fb` keeps the rendered frame afterwards, so the caller can add to it
/// and present again.
///
/// # Errors
///
/// Returns the first [`OledError`] from steps 1 or 4. A failure in step 1
/// skips the rest; the caller may retry the whole call.
pub fn show_banner<T>(
    driver: &mut OledDriver<T>,
    fb: &mut Framebuffer,
    banner: &Banner<'_>,
    delay: &mut impl DelayNs,
) -> Result<(), OledError<T::Error>>
where
    T: BusTransport,
{
    // ── Step 1: controller power-up ──────────────────────────────────
    driver.initialize(delay)?;

    // ── Steps 2–3: render (no I/O) ───────────────────────────────────
    fb.clear();
    draw_text(fb, banner.text, banner.origin);

    #[cfg(feature = "defmt")]
    defmt::debug!(
        "Banner rendered at ({}, {})",
        banner.origin.x,
        banner.origin.y
    );

    // ── Step 4: flush to hardware ────────────────────────────────────
    driver.present(fb)?;

    #[cfg(feature = "defmt")]
    defmt::info!("Banner shown");

    Ok(())
}

// ── Tests ────────────────────────────────────────────────────────────────
