// src/vga_buffer/mod.rs

//! VGA text mode driver with interrupt-safe Mutex protection
//!
//! This module provides VGA text buffer access with the following features:
//! - 16-color support (VGA standard palette)
//! - Line wrapping deferred to the next write, auto-scrolling at the bottom
//! - Interrupt-safe locking (prevents deadlock in interrupt handlers)
//! - fmt::Write trait implementation for print!/println! macros
//! - Bounds-checked cell access through validated indices
//!
//! # Architecture
//!
//! The VGA text buffer is located at physical address 0xB8000 and holds
//! 80x25 cells. Each cell occupies 2 bytes:
//! - Byte 0: code page 437 glyph
//! - Byte 1: color attribute (4 bits background | 4 bits foreground)
//!
//! [`TextConsole`] is an ordinary value generic over its storage. The boot
//! console below is the single process-wide instance, created by [`init`]
//! over the mapped hardware buffer.

mod backend;
mod cell;
mod color;
pub mod constants;
mod writer;

pub use backend::{MemoryBuffer, TextModeBuffer, VgaBufferAccess};
pub use cell::{CellIndex, CellRange, ScreenChar};
pub use color::{ColorCode, VgaColor};
pub use writer::{ConsoleConfig, Position, TextConsole};

pub use crate::errors::VgaError;
use constants::VGA_BUFFER_ADDR;
use core::fmt;
use spin::{Mutex, Once};

/// Console over the hardware buffer
pub type BootConsole = TextConsole<TextModeBuffer>;

/// Global boot console
///
/// # Locking Order
///
/// To prevent deadlocks, acquire `SERIAL1` before this lock if both are
/// needed.
static CONSOLE: Once<Mutex<BootConsole>> = Once::new();

/// Virtual address of the text buffer given where physical memory is mapped
///
/// `None` if the buffer would lie past the end of the address space.
pub fn buffer_virt_addr(phys_mem_offset: u64) -> Option<usize> {
    usize::try_from(phys_mem_offset)
        .ok()?
        .checked_add(VGA_BUFFER_ADDR)
}

/// Create the boot console over the hardware buffer, probe and clear it.
///
/// # Errors
///
/// - [`VgaError::BufferNotAccessible`] if the offset puts the buffer outside
///   the address space, the address is null, or the probe write does not
///   read back
///
/// # Safety
///
/// All of physical memory must be mapped at `phys_mem_offset`, writable,
/// for the rest of the program, and nothing else may access the text buffer
/// through that mapping.
pub unsafe fn init(phys_mem_offset: u64) -> Result<(), VgaError> {
    if CONSOLE.is_completed() {
        return Ok(());
    }

    let addr = buffer_virt_addr(phys_mem_offset).ok_or(VgaError::BufferNotAccessible)?;
    // SAFETY: forwarded from the caller's contract.
    let buffer = unsafe { TextModeBuffer::from_virt_addr(addr) }
        .ok_or(VgaError::BufferNotAccessible)?;
    let mut console = TextConsole::new(buffer);
    console.probe()?;
    console.clear();

    CONSOLE.call_once(|| Mutex::new(console));
    crate::debug!("vga: console at {:#x}", addr);
    Ok(())
}

/// Check whether the boot console exists
pub fn is_initialized() -> bool {
    CONSOLE.is_completed()
}

/// Execute a function with the boot console, protected from interrupts
///
/// # Errors
///
/// Returns [`VgaError::NotInitialized`] before [`init`] has succeeded.
pub fn with_console<F, R>(f: F) -> Result<R, VgaError>
where
    F: FnOnce(&mut BootConsole) -> R,
{
    let console = CONSOLE.get().ok_or(VgaError::NotInitialized)?;
    Ok(crate::sync::without_interrupts(|| f(&mut console.lock())))
}

/// Like [`with_console`], but gives up instead of spinning on a held lock
///
/// Returns `Ok(None)` when the console is busy. Meant for the panic path,
/// where the interrupted code may own the lock.
///
/// # Errors
///
/// Returns [`VgaError::NotInitialized`] before [`init`] has succeeded.
pub fn try_with_console<F, R>(f: F) -> Result<Option<R>, VgaError>
where
    F: FnOnce(&mut BootConsole) -> R,
{
    let console = CONSOLE.get().ok_or(VgaError::NotInitialized)?;
    Ok(crate::sync::without_interrupts(|| {
        console.try_lock().map(|mut guard| f(&mut guard))
    }))
}

/// Clear the screen
pub fn clear() -> Result<(), VgaError> {
    with_console(|console| console.clear())
}

/// Set the text color
pub fn set_color(fg: VgaColor, bg: VgaColor) -> Result<(), VgaError> {
    with_console(|console| console.set_color(fg, bg))
}

/// Print colored text, restoring the previous color afterwards
pub fn print_colored(s: &str, color: ColorCode) -> Result<(), VgaError> {
    with_console(|console| console.write_text_colored(s, color))
}

/// Print function called by macros
#[doc(hidden)]
pub fn _print(args: fmt::Arguments) {
    // Nothing to draw on before init; output is dropped like an
    // unplugged monitor.
    let _ = with_console(|console| {
        use core::fmt::Write;
        let _ = console.write_fmt(args);
    });
}

/// Global print! macro
#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => ({
        $crate::vga_buffer::_print(format_args!($($arg)*))
    });
}

/// Global println! macro
#[macro_export]
macro_rules! println {
    () => ($crate::print!("\n"));
    ($fmt:expr) => ($crate::print!(concat!($fmt, "\n")));
    ($fmt:expr, $($arg:tt)*) => ($crate::print!(concat!($fmt, "\n"), $($arg)*));
}
