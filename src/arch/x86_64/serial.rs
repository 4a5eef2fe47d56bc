// src/arch/x86_64/serial.rs

use crate::constants::SERIAL_IO_PORT;
use crate::serial::backend::{Register, SerialHardware};
use x86_64::instructions::port::Port;

/// x86 specific implementation backed by port I/O instructions.
#[derive(Debug)]
pub struct PortIoBackend {
    base: u16,
}

impl PortIoBackend {
    /// Create a new backend backed by the standard COM1 base address.
    pub const fn new() -> Self {
        Self::with_base(SERIAL_IO_PORT)
    }

    /// Create a backend using a custom I/O base address.
    pub const fn with_base(base: u16) -> Self {
        Self { base }
    }

    #[inline]
    fn port(&self, register: Register) -> Port<u8> {
        Port::new(self.base + register.offset())
    }
}

impl Default for PortIoBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SerialHardware for PortIoBackend {
    #[inline]
    fn write(&mut self, register: Register, value: u8) {
        // SAFETY: UART registers of the configured port; callers serialize
        // access through the SERIAL1 mutex.
        unsafe { self.port(register).write(value) }
    }

    #[inline]
    fn read(&mut self, register: Register) -> u8 {
        // SAFETY: as for `write`; UART register reads have no side effects
        // beyond the data register, which is only read by the driver.
        unsafe { self.port(register).read() }
    }
}
