//! 5×8 bitmap font covering `A`–`Z` and `a`–`z`.
//!
//! Each glyph is five column bytes; bit `j` of column `i` lights pixel
//! `(i, j)` with row 0 at the top. The patterns are fixed: rendered output
//! is compared byte for byte against reference captures.

/// Glyph width in columns.
pub const GLYPH_WIDTH: usize = 5;

/// Glyph height in rows.
pub const GLYPH_HEIGHT: usize = 8;

/// Number of glyphs in the table (26 upper + 26 lower case).
pub const GLYPH_COUNT: usize = 52;

/// A single fixed-width character bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph([u8; GLYPH_WIDTH]);

impl Glyph {
    const fn new(columns: [u8; GLYPH_WIDTH]) -> Self {
        Self(columns)
    }

    /// Column bytes, left to right.
    pub const fn columns(&self) -> &[u8; GLYPH_WIDTH] {
        &self.0
    }

    /// Whether pixel (`column`, `row`) is lit. Out-of-range cells are unlit.
    pub fn is_lit(&self, column: usize, row: usize) -> bool {
        row < GLYPH_HEIGHT
            && self
                .0
                .get(column)
                .is_some_and(|&bits| bits & (1 << row) != 0)
    }
}

/// Glyph table: `A`–`Z` at 0..26, `a`–`z` at 26..52.
pub static GLYPHS: [Glyph; GLYPH_COUNT] = [
    Glyph::new([0x7E, 0x09, 0x09, 0x09, 0x7E]), // A
    Glyph::new([0x7F, 0x49, 0x49, 0x49, 0x36]), // B
    Glyph::new([0x3E, 0x41, 0x41, 0x41, 0x22]), // C
    Glyph::new([0x7F, 0x41, 0x41, 0x41, 0x3E]), // D
    Glyph::new([0x7F, 0x49, 0x49, 0x49, 0x41]), // E
    Glyph::new([0x7F, 0x09, 0x09, 0x09, 0x01]), // F
    Glyph::new([0x3E, 0x41, 0x49, 0x49, 0x2E]), // G
    Glyph::new([0x7F, 0x08, 0x08, 0x08, 0x7F]), // H
    Glyph::new([0x41, 0x41, 0x7F, 0x41, 0x41]), // I
    Glyph::new([0x20, 0x40, 0x40, 0x40, 0x3F]), // J
    Glyph::new([0x7F, 0x08, 0x14, 0x22, 0x41]), // K
    Glyph::new([0x7F, 0x40, 0x40, 0x40, 0x40]), // L
    Glyph::new([0x7F, 0x02, 0x04, 0x02, 0x7F]), // M
    Glyph::new([0x7F, 0x02, 0x04, 0x08, 0x7F]), // N
    Glyph::new([0x3E, 0x41, 0x41, 0x41, 0x3E]), // O
    Glyph::new([0x7F, 0x09, 0x09, 0x09, 0x06]), // P
    Glyph::new([0x3E, 0x41, 0x49, 0x49, 0x3E]), // Q
    Glyph::new([0x7F, 0x09, 0x19, 0x29, 0x46]), // R
    Glyph::new([0x46, 0x49, 0x49, 0x49, 0x31]), // S
    Glyph::new([0x01, 0x01, 0x7F, 0x01, 0x01]), // T
    Glyph::new([0x3F, 0x40, 0x40, 0x40, 0x3F]), // U
    Glyph::new([0x1F, 0x20, 0x40, 0x20, 0x1F]), // V
    Glyph::new([0x3F, 0x40, 0x30, 0x40, 0x3F]), // W
    Glyph::new([0x63, 0x14, 0x08, 0x14, 0x63]), // X
    Glyph::new([0x31, 0x40, 0x40, 0x40, 0x31]), // Y
    Glyph::new([0x71, 0x49, 0x45, 0x43, 0x71]), // Z
    Glyph::new([0x3C, 0x4A, 0x4A, 0x4A, 0x30]), // a
    Glyph::new([0x7F, 0x44, 0x44, 0x44, 0x38]), // b
    Glyph::new([0x38, 0x44, 0x44, 0x44, 0x28]), // c
    Glyph::new([0x38, 0x44, 0x44, 0x44, 0x7F]), // d
    Glyph::new([0x38, 0x54, 0x54, 0x54, 0x18]), // e
    Glyph::new([0x04, 0x7E, 0x05, 0x01, 0x02]), // f
    Glyph::new([0x18, 0xA4, 0xA4, 0xA4, 0x7C]), // g
    Glyph::new([0x7F, 0x08, 0x08, 0x08, 0x70]), // h
    Glyph::new([0x00, 0x44, 0x7D, 0x40, 0x00]), // i
    Glyph::new([0x40, 0x80, 0x80, 0x7A, 0x00]), // j
    Glyph::new([0x7F, 0x10, 0x28, 0x44, 0x00]), // k
    Glyph::new([0x41, 0x7F, 0x40, 0x00, 0x00]), // l
    Glyph::new([0x7C, 0x04, 0x78, 0x04, 0x78]), // m
    Glyph::new([0x7C, 0x08, 0x04, 0x04, 0x78]), // n
    Glyph::new([0x38, 0x44, 0x44, 0x44, 0x38]), // o
    Glyph::new([0xFC, 0x18, 0x24, 0x24, 0x18]), // p
    Glyph::new([0x18, 0x24, 0x24, 0x18, 0xFC]), // q
    Glyph::new([0x7C, 0x08, 0x04, 0x04, 0x08]), // r
    Glyph::new([0x48, 0x54, 0x54, 0x54, 0x20]), // s
    Glyph::new([0x04, 0x3F, 0x44, 0x40, 0x20]), // t
    Glyph::new([0x3C, 0x40, 0x40, 0x20, 0x7C]), // u
    Glyph::new([0x1C, 0x20, 0x40, 0x20, 0x1C]), // v
    Glyph::new([0x3C, 0x40, 0x30, 0x40, 0x3C]), // w
    Glyph::new([0x44, 0x28, 0x10, 0x28, 0x44]), // x
    Glyph::new([0x0C, 0x50, 0x50, 0x50, 0x3C]), // y
    Glyph::new([0x44, 0x64, 0x54, 0x4C, 0x44]), // z
];

/// Look up the bitmap for `c`.
///
/// Returns `None` for anything that is not an ASCII letter.
pub fn lookup(c: char) -> Option<Glyph> {
    let index = match c {
        'A'..='Z' => c as usize - 'A' as usize,
        'a'..='z' => c as usize - 'a' as usize + 26,
        _ => return None,
    };
    GLYPHS.get(index).copied()
}

// ── Tests ────────────────────────────────────────────────────────────────
