//! Page-packed 1 bpp frame buffer.
//!
//! The vertical axis is split into [`PAGES`] strips of eight rows, matching
//! the controller's page addressing. Pixel `(x, y)` lives in byte
//! `x + (y / 8) * WIDTH`, bit `y % 8`. Writes only ever set bits, so
//! overlapping glyphs accumulate.

use embedded_graphics::geometry::Point;

use crate::config::{BUFFER_LEN, HEIGHT, PAGES, WIDTH};

/// In-memory copy of the display contents.
///
/// Owned by the caller and passed explicitly to the rasterizer and to
/// [`OledDriver::present()`](crate::OledDriver::present).
#[derive(Clone, PartialEq, Eq)]
pub struct Framebuffer {
    buffer: [u8; BUFFER_LEN],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    /// Create a zeroed frame buffer.
    pub const fn new() -> Self {
        Self {
            buffer: [0; BUFFER_LEN],
        }
    }

    /// Set every pixel off.
    pub fn clear(&mut self) {
        self.buffer.fill(0);
    }

    /// Byte index and bit mask for `point`, or `None` if off-screen.
    fn locate(point: Point) -> Option<(usize, u8)> {
        let x = usize::try_from(point.x).ok().filter(|&x| x < WIDTH)?;
        let y = usize::try_from(point.y).ok().filter(|&y| y < HEIGHT)?;
        Some((x + (y / 8) * WIDTH, 1 << (y % 8)))
    }

    /// Light the pixel at `point`.
    ///
    /// Off-screen points (including negative coordinates) are ignored.
    pub fn set_pixel(&mut self, point: Point) {
        if let Some((index, mask)) = Self::locate(point) {
            self.buffer[index] |= mask;
        }
    }

    /// Whether the pixel at `point` is lit. Off-screen points read as unlit.
    pub fn is_set(&self, point: Point) -> bool {
        Self::locate(point).is_some_and(|(index, mask)| self.buffer[index] & mask != 0)
    }

    /// The `WIDTH` bytes of one hardware page, left to right.
    ///
    /// Returns `None` if `page >= PAGES`.
    pub fn page(&self, page: usize) -> Option<&[u8]> {
        if page < PAGES {
            Some(&self.buffer[page * WIDTH..(page + 1) * WIDTH])
        } else {
            None
        }
    }

    /// Iterate over `(page_index, page_bytes)` in ascending page order.
    pub fn pages(&self) -> impl Iterator<Item = (usize, &[u8])> {
        self.buffer.chunks_exact(WIDTH).enumerate()
    }

    /// The whole packed buffer.
    pub fn as_bytes(&self) -> &[u8; BUFFER_LEN] {
        &self.buffer
    }

    /// Returns `true` if no pixel is lit.
    pub fn is_blank(&self) -> bool {
        self.buffer.iter().all(|&b| b == 0)
    }
}

impl core::fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let lit = self.buffer.iter().map(|b| b.count_ones()).sum::<u32>();
        f.debug_struct("Framebuffer")
            .field("width", &WIDTH)
            .field("height", &HEIGHT)
            .field("lit_pixels", &lit)
            .finish()
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
