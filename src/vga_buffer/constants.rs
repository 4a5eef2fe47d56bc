// src/vga_buffer/constants.rs

//! Constants for VGA text buffer operations

/// VGA text buffer physical memory address
pub const VGA_BUFFER_ADDR: usize = 0xb8000;

/// Screen dimensions
pub const VGA_WIDTH: usize = 80;
pub const VGA_HEIGHT: usize = 25;

/// Index of the bottom row, where newlines start scrolling
pub const LAST_ROW: usize = VGA_HEIGHT - 1;

/// Total number of character cells on screen
pub const CELL_COUNT: usize = VGA_WIDTH * VGA_HEIGHT;

/// Bytes per character (1 byte glyph + 1 byte color attribute)
pub const BYTES_PER_CHAR: usize = 2;

/// Glyph used for cleared cells
pub const BLANK_GLYPH: u8 = b' ';

/// ASCII character range for printable characters
pub const PRINTABLE_ASCII_START: u8 = 0x20;
pub const PRINTABLE_ASCII_END: u8 = 0x7e;

/// Replacement character for non-printable characters (■)
pub const REPLACEMENT_CHAR: u8 = 0xfe;

/// Raw cell value written by the accessibility probe (space, light gray on black)
pub const PROBE_PATTERN: u16 = 0x0720;
