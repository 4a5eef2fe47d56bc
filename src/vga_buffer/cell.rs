// src/vga_buffer/cell.rs

//! Screen cells and validated buffer indices
//!
//! Every access to the character grid goes through [`CellIndex`] or
//! [`CellRange`]. Both can only be constructed inside the grid, so the
//! backends never see an out-of-bounds offset.

use super::color::ColorCode;
use super::constants::{BLANK_GLYPH, BYTES_PER_CHAR, CELL_COUNT, VGA_HEIGHT, VGA_WIDTH};

/// One character position: glyph byte followed by attribute byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct ScreenChar {
    pub glyph: u8,
    pub color: ColorCode,
}

const _: () = assert!(core::mem::size_of::<ScreenChar>() == BYTES_PER_CHAR);

impl ScreenChar {
    pub const fn new(glyph: u8, color: ColorCode) -> Self {
        Self { glyph, color }
    }

    /// A cleared cell with the given blank attribute
    pub const fn blank(color: ColorCode) -> Self {
        Self::new(BLANK_GLYPH, color)
    }

    /// Encode as the little-endian word the hardware stores
    pub const fn to_u16(self) -> u16 {
        (self.color.as_u8() as u16) << 8 | self.glyph as u16
    }

    /// Decode a word read back from the buffer
    pub const fn from_u16(raw: u16) -> Self {
        Self {
            glyph: (raw & 0xff) as u8,
            color: ColorCode::from_u8((raw >> 8) as u8),
        }
    }
}

/// A validated index into the VGA buffer
///
/// This type guarantees that the index is within bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CellIndex(usize);

impl CellIndex {
    /// Returns None if index is out of bounds
    pub const fn new(index: usize) -> Option<Self> {
        if index < CELL_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Create from row and column with validation
    pub const fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < VGA_HEIGHT && col < VGA_WIDTH {
            Some(Self(row * VGA_WIDTH + col))
        } else {
            None
        }
    }

    /// Get the raw index value
    pub const fn get(self) -> usize {
        self.0
    }
}

/// A validated, non-empty run of consecutive cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    start: CellIndex,
    len: usize,
}

impl CellRange {
    /// Returns None if the range is empty or would exceed buffer bounds
    pub const fn new(start: usize, len: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }

        match start.checked_add(len) {
            Some(end) if end <= CELL_COUNT => match CellIndex::new(start) {
                Some(start) => Some(Self { start, len }),
                None => None,
            },
            _ => None,
        }
    }

    /// Range covering one full row
    pub const fn row(row: usize) -> Option<Self> {
        if row >= VGA_HEIGHT {
            return None;
        }
        Self::new(row * VGA_WIDTH, VGA_WIDTH)
    }

    /// Range covering `count` full rows starting at `first`
    pub const fn rows(first: usize, count: usize) -> Option<Self> {
        match first.checked_add(count) {
            Some(end) if end <= VGA_HEIGHT => Self::new(first * VGA_WIDTH, count * VGA_WIDTH),
            _ => None,
        }
    }

    /// The whole screen
    pub const fn all() -> Self {
        Self {
            start: CellIndex(0),
            len: CELL_COUNT,
        }
    }

    pub const fn start(&self) -> CellIndex {
        self.start
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always false; empty ranges cannot be constructed
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// End index (exclusive)
    pub const fn end(&self) -> usize {
        self.start.0 + self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vga_buffer::color::VgaColor;

    #[test]
    fn test_cell_index_creation() {
        assert!(CellIndex::new(0).is_some());
        assert!(CellIndex::new(CELL_COUNT - 1).is_some());
        assert!(CellIndex::new(CELL_COUNT).is_none());
    }

    #[test]
    fn test_cell_index_from_row_col() {
        assert_eq!(CellIndex::from_row_col(0, 0).unwrap().get(), 0);
        assert_eq!(CellIndex::from_row_col(1, 0).unwrap().get(), VGA_WIDTH);
        assert_eq!(CellIndex::from_row_col(1, 2).unwrap().get(), VGA_WIDTH + 2);
        assert_eq!(
            CellIndex::from_row_col(VGA_HEIGHT - 1, VGA_WIDTH - 1).unwrap().get(),
            CELL_COUNT - 1
        );

        assert!(CellIndex::from_row_col(VGA_HEIGHT, 0).is_none());
        assert!(CellIndex::from_row_col(0, VGA_WIDTH).is_none());
    }

    #[test]
    fn test_cell_range_creation() {
        let range = CellRange::new(0, 10).unwrap();
        assert_eq!(range.len(), 10);
        assert_eq!(range.end(), 10);

        assert!(CellRange::new(CELL_COUNT - 5, 10).is_none());
        assert!(CellRange::new(0, 0).is_none());
        assert!(CellRange::new(usize::MAX, 2).is_none());
    }

    #[test]
    fn test_cell_range_rows() {
        let range = CellRange::row(1).unwrap();
        assert_eq!(range.start().get(), VGA_WIDTH);
        assert_eq!(range.len(), VGA_WIDTH);
        assert!(CellRange::row(VGA_HEIGHT).is_none());

        let body = CellRange::rows(1, VGA_HEIGHT - 1).unwrap();
        assert_eq!(body.start().get(), VGA_WIDTH);
        assert_eq!(body.len(), CELL_COUNT - VGA_WIDTH);
        assert_eq!(body.end(), CELL_COUNT);
        assert!(CellRange::rows(1, VGA_HEIGHT).is_none());
    }

    #[test]
    fn test_screen_char_word_layout() {
        let cell = ScreenChar::new(b'A', ColorCode::new(VgaColor::Yellow, VgaColor::Blue));
        assert_eq!(cell.to_u16(), 0x1E41);
        assert_eq!(ScreenChar::from_u16(0x1E41), cell);
        assert_eq!(core::mem::size_of::<ScreenChar>(), 2);
    }
}
