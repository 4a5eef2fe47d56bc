// src/serial/backend.rs

//! Hardware abstraction for the serial driver.
//!
//! Register access sits behind a lightweight trait so the UART logic can be
//! exercised on the host against a recording stub.

use super::constants::register_offset;

/// Registers that the UART driver interacts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    Data,
    InterruptEnable,
    FifoControl,
    LineControl,
    ModemControl,
    LineStatus,
    ModemStatus,
    Scratch,
}

impl Register {
    /// Offset from the port base
    pub const fn offset(self) -> u16 {
        match self {
            Register::Data => register_offset::DATA,
            Register::InterruptEnable => register_offset::INTERRUPT_ENABLE,
            Register::FifoControl => register_offset::FIFO_CONTROL,
            Register::LineControl => register_offset::LINE_CONTROL,
            Register::ModemControl => register_offset::MODEM_CONTROL,
            Register::LineStatus => register_offset::LINE_STATUS,
            Register::ModemStatus => register_offset::MODEM_STATUS,
            Register::Scratch => register_offset::SCRATCH,
        }
    }
}

/// Minimal abstraction over UART register access.
pub trait SerialHardware {
    /// Write a value to a UART register.
    fn write(&mut self, register: Register, value: u8);
    /// Read the current value of a UART register.
    fn read(&mut self, register: Register) -> u8;
}

#[cfg(target_arch = "x86_64")]
pub use crate::arch::x86_64::serial::PortIoBackend;

#[cfg(target_arch = "x86_64")]
pub type DefaultBackend = PortIoBackend;
