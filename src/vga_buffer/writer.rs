// src/vga_buffer/writer.rs

//! Text console over a VGA cell buffer.
//!
//! The console tracks a cursor and an active color and renders bytes into
//! any [`VgaBufferAccess`] backend. Wrapping is deferred: after the last
//! column is written the cursor rests one past the edge, and the row only
//! advances when the next byte arrives.

use super::backend::VgaBufferAccess;
use super::cell::{CellIndex, CellRange, ScreenChar};
use super::color::{ColorCode, VgaColor};
use super::constants::{
    LAST_ROW, PRINTABLE_ASCII_END, PRINTABLE_ASCII_START, REPLACEMENT_CHAR, VGA_HEIGHT, VGA_WIDTH,
};
use crate::errors::VgaError;
use core::ffi::CStr;
use core::fmt;

/// Rows 1..=24, moved up by one on scroll
const SCROLL_SOURCE: CellRange = match CellRange::rows(1, LAST_ROW) {
    Some(range) => range,
    None => panic!("scroll source outside the grid"),
};

const BOTTOM_ROW: CellRange = match CellRange::row(LAST_ROW) {
    Some(range) => range,
    None => panic!("bottom row outside the grid"),
};

const ORIGIN: CellIndex = match CellIndex::new(0) {
    Some(index) => index,
    None => panic!("empty grid"),
};

/// Cursor position in the grid
///
/// `row` is always below [`VGA_HEIGHT`]; `col` may equal [`VGA_WIDTH`]
/// after a row has been filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Top-left corner
    pub const fn origin() -> Self {
        Self { row: 0, col: 0 }
    }

    /// Whether the next byte has to wrap before it can be written
    const fn is_past_row_end(&self) -> bool {
        self.col >= VGA_WIDTH
    }
}

/// Console settings fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Initial active color
    pub color: ColorCode,
    /// Background of cleared cells; their foreground nibble is always 0
    pub blank_background: VgaColor,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            color: ColorCode::DEFAULT,
            blank_background: VgaColor::Black,
        }
    }
}

/// A writer that renders bytes into an underlying cell buffer.
#[derive(Debug)]
pub struct TextConsole<B: VgaBufferAccess> {
    cursor: Position,
    color: ColorCode,
    blank: ScreenChar,
    buffer: B,
}

impl<B: VgaBufferAccess> TextConsole<B> {
    /// Console with the cursor at the origin, writing white on black
    pub fn new(buffer: B) -> Self {
        Self::with_config(buffer, ConsoleConfig::default())
    }

    pub fn with_config(buffer: B, config: ConsoleConfig) -> Self {
        Self {
            cursor: Position::origin(),
            color: config.color,
            blank: ScreenChar::blank(ColorCode::blank(config.blank_background)),
            buffer,
        }
    }

    /// Fill the whole screen with blank cells.
    ///
    /// Neither the cursor nor the active color change.
    pub fn clear(&mut self) {
        self.buffer.fill(CellRange::all(), self.blank);
    }

    /// Set the active color for subsequent writes.
    pub fn set_color(&mut self, fg: VgaColor, bg: VgaColor) {
        self.color = ColorCode::new(fg, bg);
    }

    /// Set the active color from an already packed attribute.
    pub fn set_color_code(&mut self, color: ColorCode) {
        self.color = color;
    }

    pub fn color(&self) -> ColorCode {
        self.color
    }

    pub fn position(&self) -> Position {
        self.cursor
    }

    /// Move the cursor.
    ///
    /// `col` may be [`VGA_WIDTH`], which defers a wrap to the next write.
    ///
    /// # Errors
    ///
    /// Returns [`VgaError::InvalidPosition`] outside the grid.
    pub fn set_position(&mut self, row: usize, col: usize) -> Result<(), VgaError> {
        if row >= VGA_HEIGHT || col > VGA_WIDTH {
            return Err(VgaError::InvalidPosition);
        }
        self.cursor = Position { row, col };
        Ok(())
    }

    /// Read back one cell
    pub fn cell(&self, row: usize, col: usize) -> Option<ScreenChar> {
        CellIndex::from_row_col(row, col).map(|index| self.buffer.read_cell(index))
    }

    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    /// Check that the backing memory takes writes, leaving its contents intact.
    ///
    /// # Errors
    ///
    /// Returns [`VgaError::BufferNotAccessible`] if a test write does not
    /// read back.
    pub fn probe(&mut self) -> Result<(), VgaError> {
        self.buffer.probe(ORIGIN)
    }

    /// Write a single byte at the cursor.
    ///
    /// `b'\n'` moves to the start of the next line without writing a cell.
    pub fn write_byte(&mut self, byte: u8) {
        if byte == b'\n' {
            self.new_line();
            return;
        }

        if self.cursor.is_past_row_end() {
            self.new_line();
        }

        let Some(index) = CellIndex::from_row_col(self.cursor.row, self.cursor.col) else {
            return;
        };
        self.buffer.write_cell(index, ScreenChar::new(byte, self.color));
        self.cursor.col += 1;
    }

    /// Write bytes up to, not including, the first NUL.
    ///
    /// A slice without a NUL is written in full.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes.iter().take_while(|&&byte| byte != 0) {
            self.write_byte(byte);
        }
    }

    /// Write a null-terminated string.
    pub fn write_cstr(&mut self, s: &CStr) {
        self.write_bytes(s.to_bytes());
    }

    /// Write with `color`, then restore the previous active color.
    pub fn write_colored(&mut self, bytes: &[u8], color: ColorCode) {
        self.with_color(color, |console| console.write_bytes(bytes));
    }

    /// [`write_text`](Self::write_text) in a temporary color
    pub fn write_text_colored(&mut self, s: &str, color: ColorCode) {
        self.with_color(color, |console| console.write_text(s));
    }

    fn with_color(&mut self, color: ColorCode, f: impl FnOnce(&mut Self)) {
        let previous = core::mem::replace(&mut self.color, color);
        f(self);
        self.color = previous;
    }

    /// Write UTF-8 text, replacing anything the code page can't show.
    pub fn write_text(&mut self, s: &str) {
        for byte in s.bytes() {
            self.write_byte(Self::displayable(byte));
        }
    }

    const fn displayable(byte: u8) -> u8 {
        match byte {
            PRINTABLE_ASCII_START..=PRINTABLE_ASCII_END | b'\n' => byte,
            _ => REPLACEMENT_CHAR,
        }
    }

    fn new_line(&mut self) {
        self.cursor.col = 0;
        if self.cursor.row < LAST_ROW {
            self.cursor.row += 1;
            return;
        }
        self.scroll_up();
    }

    /// Shift every row up by one and blank the bottom row
    fn scroll_up(&mut self) {
        self.buffer.copy_cells(SCROLL_SOURCE, ORIGIN);
        self.buffer.fill(BOTTOM_ROW, self.blank);
    }
}

impl<B: VgaBufferAccess> fmt::Write for TextConsole<B> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_text(s);
        Ok(())
    }
}
