//! SSD1306 command bytes and the fixed command streams built from them.
//!
//! Multi-byte commands are sent as consecutive single-byte command
//! transactions: the opcode first, then each parameter byte.

// ---------------------------------------------------------------------------
// Control prefixes
// ---------------------------------------------------------------------------

/// Control byte preceding a command byte on the bus.
pub const CONTROL_COMMAND: u8 = 0x00;

/// Control byte preceding a display-RAM payload on the bus.
pub const CONTROL_DATA: u8 = 0x40;

// ---------------------------------------------------------------------------
// Fundamental commands
// ---------------------------------------------------------------------------

/// Set contrast; followed by the level byte.
pub const SET_CONTRAST: u8 = 0x81;

/// Display follows RAM contents.
pub const DISPLAY_FOLLOW_RAM: u8 = 0xA4;

/// Normal (non-inverted) display.
pub const SET_NORMAL: u8 = 0xA6;

/// Inverted display.
pub const SET_INVERSE: u8 = 0xA7;

/// Panel off (sleep).
pub const DISPLAY_OFF: u8 = 0xAE;

/// Panel on.
pub const DISPLAY_ON: u8 = 0xAF;

// ---------------------------------------------------------------------------
// Addressing
// ---------------------------------------------------------------------------

/// Set memory addressing mode; followed by the mode byte.
pub const SET_MEMORY_MODE: u8 = 0x20;

/// Horizontal addressing mode parameter for [`SET_MEMORY_MODE`].
pub const MEMORY_MODE_HORIZONTAL: u8 = 0x00;

/// Lower nibble of the column start address (page addressing mode).
pub const SET_LOW_COLUMN: u8 = 0x00;

/// Upper nibble of the column start address (page addressing mode).
pub const SET_HIGH_COLUMN: u8 = 0x10;

/// Page start address; OR the page index into the low three bits.
pub const SET_PAGE_ADDR: u8 = 0xB0;

// ---------------------------------------------------------------------------
// Hardware configuration
// ---------------------------------------------------------------------------

/// Display start line 0.
pub const SET_START_LINE: u8 = 0x40;

/// Segment remap: column 127 mapped to SEG0.
pub const SET_SEG_REMAP: u8 = 0xA1;

/// Multiplex ratio; followed by `rows - 1`.
pub const SET_MUX_RATIO: u8 = 0xA8;

/// COM output scan direction, remapped (bottom to top).
pub const SET_COM_SCAN_DEC: u8 = 0xC8;

/// Vertical display offset; followed by the offset byte.
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;

/// COM pins hardware configuration; followed by the config byte.
pub const SET_COM_PINS: u8 = 0xDA;

// ---------------------------------------------------------------------------
// Timing and driving
// ---------------------------------------------------------------------------

/// Clock divide ratio / oscillator frequency; followed by the setting.
pub const SET_CLOCK_DIV: u8 = 0xD5;

/// Pre-charge period; followed by the phase lengths.
pub const SET_PRECHARGE: u8 = 0xD9;

/// VCOMH deselect level; followed by the level byte.
pub const SET_VCOM_DETECT: u8 = 0xDB;

/// Charge pump setting; followed by enable / disable.
pub const SET_CHARGE_PUMP: u8 = 0x8D;

/// Charge pump enable parameter for [`SET_CHARGE_PUMP`].
pub const CHARGE_PUMP_ENABLE: u8 = 0x14;

// ---------------------------------------------------------------------------
// Command streams
// ---------------------------------------------------------------------------

/// Power-up sequence for a 128×64 panel with the internal charge pump.
///
/// Order and parameter bytes must not change: the panel stays dark or
/// garbled otherwise.
pub const INIT_SEQUENCE: [u8; 28] = [
    DISPLAY_OFF,
    SET_MEMORY_MODE,
    MEMORY_MODE_HORIZONTAL,
    SET_PAGE_ADDR,
    SET_COM_SCAN_DEC,
    SET_LOW_COLUMN,
    SET_HIGH_COLUMN,
    SET_START_LINE,
    SET_CONTRAST,
    0xFF,
    SET_SEG_REMAP,
    SET_NORMAL,
    SET_MUX_RATIO,
    0x3F, // 1/64 duty
    DISPLAY_FOLLOW_RAM,
    SET_DISPLAY_OFFSET,
    0x00,
    SET_CLOCK_DIV,
    0xF0,
    SET_PRECHARGE,
    0x22,
    SET_COM_PINS,
    0x12,
    SET_VCOM_DETECT,
    0x20,
    SET_CHARGE_PUMP,
    CHARGE_PUMP_ENABLE,
    DISPLAY_ON,
];

/// Commands positioning the RAM pointer at column 0 of `page`.
///
/// Only the low three bits of `page` are significant to the controller.
pub const fn page_address(page: u8) -> [u8; 3] {
    [SET_PAGE_ADDR | (page & 0x07), SET_LOW_COLUMN, SET_HIGH_COLUMN]
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_sequence_bytes() {
        assert_eq!(
            INIT_SEQUENCE,
            [
                0xAE, 0x20, 0x00, 0xB0, 0xC8, 0x00, 0x10, 0x40, 0x81, 0xFF, 0xA1, 0xA6, 0xA8,
                0x3F, 0xA4, 0xD3, 0x00, 0xD5, 0xF0, 0xD9, 0x22, 0xDA, 0x12, 0xDB, 0x20, 0x8D,
                0x14, 0xAF,
            ]
        );
    }

    #[test]
    fn page_address_commands() {
        assert_eq!(page_address(0), [0xB0, 0x00, 0x10]);
        assert_eq!(page_address(7), [0xB7, 0x00, 0x10]);
    }
}
