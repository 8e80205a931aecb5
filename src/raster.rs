//! Glyph rasterization into a [`Framebuffer`].
//!
//! Rendering is total: unsupported characters and off-screen pixels are
//! skipped, so neither function can fail or panic.

use embedded_graphics::geometry::Point;

use crate::config::WIDTH;
use crate::framebuffer::Framebuffer;
use crate::glyph::{self, GLYPH_HEIGHT, GLYPH_WIDTH};

/// Horizontal advance per character: glyph width plus a one-column gap.
pub const CHAR_PITCH: i32 = GLYPH_WIDTH as i32 + 1;

/// Cursor column at which [`draw_text`] stops laying out characters.
pub const TEXT_LIMIT_X: i32 = WIDTH as i32 - CHAR_PITCH;

/// Draw one character with its top-left corner at `origin`.
///
/// Characters without a glyph leave the buffer untouched.
pub fn draw_char(fb: &mut Framebuffer, c: char, origin: Point) {
    let Some(glyph) = glyph::lookup(c) else {
        return;
    };

    for (i, &column) in glyph.columns().iter().enumerate() {
        // A saturated coordinate is always off-screen, so set_pixel drops it.
        let x = origin.x.saturating_add(i as i32);
        for j in 0..GLYPH_HEIGHT {
            if column & (1 << j) != 0 {
                let y = origin.y.saturating_add(j as i32);
                fb.set_pixel(Point::new(x, y));
            }
        }
    }
}

/// Draw `text` on a single line starting at `origin`.
///
/// The cursor advances by [`CHAR_PITCH`] after every character, including
/// unsupported ones. Layout stops once the advanced cursor reaches
/// [`TEXT_LIMIT_X`]; the rest of the string is dropped. There is no
/// wrapping onto another line.
pub fn draw_text(fb: &mut Framebuffer, text: &str, origin: Point) {
    let mut cursor = origin;

    for c in text.chars() {
        draw_char(fb, c, cursor);
        cursor.x = cursor.x.saturating_add(CHAR_PITCH);
        if cursor.x >= TEXT_LIMIT_X {
            break;
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
