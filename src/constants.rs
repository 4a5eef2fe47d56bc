// src/constants.rs

//! Hardware addresses and tuning values outside the VGA buffer itself.
//!
//! VGA geometry lives in `vga_buffer::constants`.

/// COM1 base I/O port
pub const SERIAL_IO_PORT: u16 = 0x3F8;

/// Divisor latch value for 38400 baud (115200 / 3)
pub const BAUD_RATE_DIVISOR: u16 = 3;

/// Line control: divisor latch access bit
pub const DLAB_ENABLE: u8 = 0x80;

/// Line control: 8 data bits, no parity, one stop bit
pub const CONFIG_8N1: u8 = 0x03;

/// FIFO control: enable, clear both queues, 14-byte threshold
pub const FIFO_ENABLE_CLEAR: u8 = 0xC7;

/// Modem control: DTR, RTS and OUT2 (IRQ enable)
pub const MODEM_CTRL_ENABLE_IRQ_RTS_DSR: u8 = 0x0B;

/// Line status: transmit holding register empty
pub const LSR_TRANSMIT_EMPTY: u8 = 0x20;

/// Scratch register presence-test patterns
pub const SCRATCH_TEST_PRIMARY: u8 = 0x55;
pub const SCRATCH_TEST_SECONDARY: u8 = 0xAA;

/// Line status polls before a byte is given up
pub const TIMEOUT_ITERATIONS: u32 = 100_000;

/// QEMU `isa-debug-exit` device port
pub const QEMU_EXIT_PORT: u16 = 0xF4;
