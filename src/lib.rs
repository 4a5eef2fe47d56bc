// src/lib.rs
//! Early-boot VGA text console
//!
//! Renders text straight into the memory-mapped 80x25 VGA text buffer before
//! any other display stack exists, with serial logging alongside.
//!
//! The console itself ([`vga_buffer::TextConsole`]) is a plain value over a
//! [`vga_buffer::VgaBufferAccess`] backend, so it runs unchanged against an
//! in-memory grid on the host.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_debug_implementations)]

pub mod arch;
pub mod constants;
pub mod errors;
pub mod init;
pub mod logging;
pub mod qemu;
pub mod serial;
pub mod sync;
pub mod vga_buffer;

#[cfg(target_arch = "x86_64")]
pub use qemu::exit_qemu;
pub use qemu::QemuExitCode;

/// Halt loop
#[cfg(target_arch = "x86_64")]
#[inline]
pub fn hlt_loop() -> ! {
    use crate::arch::{ArchCpu, Cpu};

    loop {
        ArchCpu::halt();
    }
}
