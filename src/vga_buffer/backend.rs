// src/vga_buffer/backend.rs

//! Low-level VGA buffer access abstractions.
//!
//! This module introduces the [`VgaBufferAccess`] trait so that the console
//! can target any backing storage, from the classic text-mode buffer at
//! `0xB8000` to an in-memory grid for testing. Indices arrive already
//! validated, so none of these operations can fail.

use super::cell::{CellIndex, CellRange, ScreenChar};
use super::constants::{CELL_COUNT, PROBE_PATTERN, VGA_WIDTH};
use crate::errors::VgaError;
use core::ptr::NonNull;

/// Abstraction over the VGA character buffer memory.
pub trait VgaBufferAccess {
    /// Read the cell at `index`.
    fn read_cell(&self, index: CellIndex) -> ScreenChar;

    /// Write `cell` at `index`.
    fn write_cell(&mut self, index: CellIndex, cell: ScreenChar);

    /// Copy the cells of `src` into the region beginning at `dst`.
    ///
    /// Overlapping regions are handled like `memmove`. Cells that would land
    /// past the end of the buffer are not copied.
    fn copy_cells(&mut self, src: CellRange, dst: CellIndex);

    /// Fill every cell of `range` with `cell`.
    fn fill(&mut self, range: CellRange, cell: ScreenChar) {
        for offset in 0..range.len() {
            if let Some(index) = CellIndex::new(range.start().get() + offset) {
                self.write_cell(index, cell);
            }
        }
    }

    /// Verify the buffer is backed by writable memory.
    ///
    /// Writes a test pattern to one cell, reads it back and restores the
    /// original contents.
    ///
    /// # Errors
    ///
    /// Returns [`VgaError::BufferNotAccessible`] if the readback differs.
    fn probe(&mut self, index: CellIndex) -> Result<(), VgaError> {
        let original = self.read_cell(index);
        let pattern = ScreenChar::from_u16(PROBE_PATTERN);

        self.write_cell(index, pattern);
        let readback = self.read_cell(index);
        self.write_cell(index, original);

        if readback == pattern {
            Ok(())
        } else {
            Err(VgaError::BufferNotAccessible)
        }
    }
}

/// Number of cells of `src` that fit when copied to `dst`
#[inline]
fn clamped_len(src: CellRange, dst: CellIndex) -> usize {
    src.len().min(CELL_COUNT - dst.get())
}

/// Concrete backend that talks to the memory-mapped text-mode buffer.
#[derive(Debug)]
pub struct TextModeBuffer {
    ptr: NonNull<ScreenChar>,
}

impl TextModeBuffer {
    /// Construct a backend over the buffer mapped at virtual address `addr`.
    ///
    /// Returns `None` for a null address.
    ///
    /// # Safety
    ///
    /// `addr` must point at the VGA text buffer (at least [`CELL_COUNT`]
    /// cells), mapped writable for the rest of the program, and no other
    /// `TextModeBuffer` or reference may alias it.
    pub unsafe fn from_virt_addr(addr: usize) -> Option<Self> {
        NonNull::new(addr as *mut ScreenChar).map(|ptr| Self { ptr })
    }

    #[inline]
    fn cell_ptr(&self, index: CellIndex) -> *mut ScreenChar {
        // SAFETY: CellIndex is always < CELL_COUNT and the mapping covers
        // CELL_COUNT cells (constructor contract).
        unsafe { self.ptr.as_ptr().add(index.get()) }
    }
}

// SAFETY: the buffer is exclusively owned by this value (constructor
// contract); moving it to another context moves that ownership.
unsafe impl Send for TextModeBuffer {}

impl VgaBufferAccess for TextModeBuffer {
    fn read_cell(&self, index: CellIndex) -> ScreenChar {
        // SAFETY: in-bounds pointer into mapped device memory.
        unsafe { core::ptr::read_volatile(self.cell_ptr(index)) }
    }

    fn write_cell(&mut self, index: CellIndex, cell: ScreenChar) {
        // SAFETY: in-bounds pointer into mapped device memory.
        unsafe {
            core::ptr::write_volatile(self.cell_ptr(index), cell);
        }
        core::sync::atomic::compiler_fence(core::sync::atomic::Ordering::SeqCst);
    }

    fn copy_cells(&mut self, src: CellRange, dst: CellIndex) {
        let count = clamped_len(src, dst);
        let mut step = |offset: usize| {
            let from = CellIndex::new(src.start().get() + offset);
            let to = CellIndex::new(dst.get() + offset);
            if let (Some(from), Some(to)) = (from, to) {
                let cell = self.read_cell(from);
                self.write_cell(to, cell);
            }
        };
        // Cell-wise volatile copy; walk away from the destination so an
        // overlapping source is read before it is overwritten.
        if dst <= src.start() {
            (0..count).for_each(&mut step);
        } else {
            (0..count).rev().for_each(&mut step);
        }
    }
}

/// Grid backed by regular memory, used on hosts without a VGA buffer and in
/// tests.
#[derive(Debug, Clone)]
pub struct MemoryBuffer {
    cells: [ScreenChar; CELL_COUNT],
}

impl MemoryBuffer {
    /// Create a zero-filled grid, as fresh video memory reads
    pub const fn new() -> Self {
        Self {
            cells: [ScreenChar::from_u16(0); CELL_COUNT],
        }
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[ScreenChar] {
        &self.cells
    }

    /// The cells of one row, or `None` past the last row
    pub fn row(&self, row: usize) -> Option<&[ScreenChar]> {
        let range = CellRange::row(row)?;
        self.cells.get(range.start().get()..range.end())
    }

    /// Glyphs of one row
    pub fn row_glyphs(&self, row: usize) -> Option<[u8; VGA_WIDTH]> {
        let cells = self.row(row)?;
        let mut glyphs = [0u8; VGA_WIDTH];
        for (glyph, cell) in glyphs.iter_mut().zip(cells) {
            *glyph = cell.glyph;
        }
        Some(glyphs)
    }
}

impl Default for MemoryBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl VgaBufferAccess for MemoryBuffer {
    fn read_cell(&self, index: CellIndex) -> ScreenChar {
        self.cells[index.get()]
    }

    fn write_cell(&mut self, index: CellIndex, cell: ScreenChar) {
        self.cells[index.get()] = cell;
    }

    fn copy_cells(&mut self, src: CellRange, dst: CellIndex) {
        let count = clamped_len(src, dst);
        let start = src.start().get();
        self.cells.copy_within(start..start + count, dst.get());
    }

    fn fill(&mut self, range: CellRange, cell: ScreenChar) {
        self.cells[range.start().get()..range.end()].fill(cell);
    }
}
