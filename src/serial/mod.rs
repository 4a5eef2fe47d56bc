// src/serial/mod.rs

//! Serial port driver (COM1) for debugging output
//!
//! Provides UART communication on COM1 (0x3F8) with:
//! - 38400 baud rate
//! - 8 data bits, no parity, 1 stop bit (8N1)
//! - FIFO buffer support
//! - Transmit-ready polling with a bounded spin
//!
//! Output written before [`init`] succeeds is dropped, so the log macros are
//! safe to call at any point during boot.

pub mod backend;
pub(crate) mod constants;

use crate::constants::*;
use crate::errors::SerialError;
use backend::{Register, SerialHardware};
use core::fmt;
use core::sync::atomic::{AtomicBool, Ordering};

/// Serial port state tracking
static SERIAL_INITIALIZED: AtomicBool = AtomicBool::new(false);
static SERIAL_PORT_AVAILABLE: AtomicBool = AtomicBool::new(false);

/// 16550-compatible UART over some register backend
#[derive(Debug)]
pub struct SerialPort<H: SerialHardware> {
    hw: H,
}

impl<H: SerialHardware> SerialPort<H> {
    pub const fn new(hw: H) -> Self {
        Self { hw }
    }

    /// Detect the UART through its scratch register.
    ///
    /// Missing hardware floats the bus and reads back 0xFF, so two
    /// complementary patterns must both survive a round trip.
    pub fn is_present(&mut self) -> bool {
        [SCRATCH_TEST_PRIMARY, SCRATCH_TEST_SECONDARY]
            .into_iter()
            .all(|pattern| {
                self.hw.write(Register::Scratch, pattern);
                self.hw.read(Register::Scratch) == pattern
            })
    }

    /// Program baud rate, framing, FIFO and modem control.
    pub fn configure(&mut self) {
        let [divisor_low, divisor_high] = BAUD_RATE_DIVISOR.to_le_bytes();

        self.hw.write(Register::InterruptEnable, 0x00);
        self.hw.write(Register::LineControl, DLAB_ENABLE);
        self.hw.write(Register::Data, divisor_low);
        self.hw.write(Register::InterruptEnable, divisor_high);
        self.hw.write(Register::LineControl, CONFIG_8N1);
        self.hw.write(Register::FifoControl, FIFO_ENABLE_CLEAR);
        self.hw.write(Register::ModemControl, MODEM_CTRL_ENABLE_IRQ_RTS_DSR);
    }

    /// Wait for the transmitter and send one byte.
    ///
    /// # Errors
    ///
    /// Returns [`SerialError::Timeout`] if the holding register never empties.
    pub fn send(&mut self, byte: u8) -> Result<(), SerialError> {
        for _ in 0..TIMEOUT_ITERATIONS {
            if self.hw.read(Register::LineStatus) & LSR_TRANSMIT_EMPTY != 0 {
                self.hw.write(Register::Data, byte);
                return Ok(());
            }
            core::hint::spin_loop();
        }
        Err(SerialError::Timeout)
    }

    pub fn hardware(&self) -> &H {
        &self.hw
    }
}

impl<H: SerialHardware> fmt::Write for SerialPort<H> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            self.send(byte).map_err(|_| fmt::Error)?;
        }
        Ok(())
    }
}

#[cfg(target_arch = "x86_64")]
lazy_static::lazy_static! {
    /// Global COM1 port
    ///
    /// # Locking Order
    ///
    /// Acquire before the console lock if both are needed.
    pub static ref SERIAL1: spin::Mutex<SerialPort<backend::DefaultBackend>> =
        spin::Mutex::new(SerialPort::new(backend::DefaultBackend::new()));
}

/// Detect and configure COM1.
///
/// # Errors
///
/// - [`SerialError::AlreadyInitialized`] on a second call
/// - [`SerialError::PortNotPresent`] when the scratch test fails
#[cfg(target_arch = "x86_64")]
pub fn init() -> Result<(), SerialError> {
    if SERIAL_INITIALIZED.swap(true, Ordering::AcqRel) {
        return Err(SerialError::AlreadyInitialized);
    }

    let present = crate::sync::without_interrupts(|| {
        let mut port = SERIAL1.lock();
        if port.is_present() {
            port.configure();
            true
        } else {
            false
        }
    });

    if !present {
        SERIAL_INITIALIZED.store(false, Ordering::Release);
        return Err(SerialError::PortNotPresent);
    }

    SERIAL_PORT_AVAILABLE.store(true, Ordering::Release);
    Ok(())
}

/// There is no COM1 off x86; report it missing.
#[cfg(not(target_arch = "x86_64"))]
pub fn init() -> Result<(), SerialError> {
    if SERIAL_INITIALIZED.swap(true, Ordering::AcqRel) {
        return Err(SerialError::AlreadyInitialized);
    }
    SERIAL_INITIALIZED.store(false, Ordering::Release);
    Err(SerialError::PortNotPresent)
}

/// Whether [`init`] found and configured the port
pub fn is_available() -> bool {
    SERIAL_PORT_AVAILABLE.load(Ordering::Acquire)
}

/// Print function called by macros
#[doc(hidden)]
pub fn _print(args: fmt::Arguments) {
    if !is_available() {
        return;
    }

    #[cfg(target_arch = "x86_64")]
    crate::sync::without_interrupts(|| {
        use core::fmt::Write;
        // NOTE: a stalled UART must not take the kernel down with it
        let _ = SERIAL1.lock().write_fmt(args);
    });

    #[cfg(not(target_arch = "x86_64"))]
    let _ = args;
}

/// Prints to the host through the serial interface.
#[macro_export]
macro_rules! serial_print {
    ($($arg:tt)*) => {
        $crate::serial::_print(format_args!($($arg)*))
    };
}

/// Prints to the host through the serial interface, appending a newline.
#[macro_export]
macro_rules! serial_println {
    () => ($crate::serial_print!("\n"));
    ($fmt:expr) => ($crate::serial_print!(concat!($fmt, "\n")));
    ($fmt:expr, $($arg:tt)*) => ($crate::serial_print!(concat!($fmt, "\n"), $($arg)*));
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;

    /// Records register traffic; optionally behaves like a missing chip
    #[derive(Default)]
    struct RecordingBackend {
        writes: Vec<(Register, u8)>,
        scratch: u8,
        absent: bool,
        busy: bool,
    }

    impl SerialHardware for RecordingBackend {
        fn write(&mut self, register: Register, value: u8) {
            if register == Register::Scratch {
                self.scratch = value;
            }
            self.writes.push((register, value));
        }

        fn read(&mut self, register: Register) -> u8 {
            match register {
                _ if self.absent => 0xFF,
                Register::Scratch => self.scratch,
                Register::LineStatus if self.busy => 0x00,
                Register::LineStatus => LSR_TRANSMIT_EMPTY,
                _ => 0,
            }
        }
    }

    fn data_bytes(port: &SerialPort<RecordingBackend>) -> Vec<u8> {
        port.hardware()
            .writes
            .iter()
            .filter(|(reg, _)| *reg == Register::Data)
            .map(|&(_, value)| value)
            .collect()
    }

    #[test]
    fn test_presence_detection() {
        let mut port = SerialPort::new(RecordingBackend::default());
        assert!(port.is_present());

        let mut missing = SerialPort::new(RecordingBackend {
            absent: true,
            ..Default::default()
        });
        assert!(!missing.is_present());
    }

    #[test]
    fn test_configure_sequence() {
        let mut port = SerialPort::new(RecordingBackend::default());
        port.configure();
        assert_eq!(
            port.hardware().writes,
            vec![
                (Register::InterruptEnable, 0x00),
                (Register::LineControl, DLAB_ENABLE),
                (Register::Data, 3),
                (Register::InterruptEnable, 0),
                (Register::LineControl, CONFIG_8N1),
                (Register::FifoControl, FIFO_ENABLE_CLEAR),
                (Register::ModemControl, MODEM_CTRL_ENABLE_IRQ_RTS_DSR),
            ]
        );
    }

    #[test]
    fn test_fmt_write_sends_bytes() {
        let mut port = SerialPort::new(RecordingBackend::default());
        write!(port, "ok {}", 1).unwrap();
        assert_eq!(data_bytes(&port), b"ok 1".to_vec());
    }

    #[test]
    fn test_send_times_out_when_busy() {
        let mut port = SerialPort::new(RecordingBackend {
            busy: true,
            ..Default::default()
        });
        assert_eq!(port.send(b'x'), Err(SerialError::Timeout));
        assert!(data_bytes(&port).is_empty());
    }

    #[test]
    fn test_register_offsets() {
        assert_eq!(Register::Data.offset(), 0);
        assert_eq!(Register::LineStatus.offset(), 5);
        assert_eq!(SERIAL_IO_PORT + Register::Scratch.offset(), 0x3FF);
    }

    #[test]
    fn test_print_before_init_is_dropped() {
        assert!(!is_available());
        crate::serial_println!("dropped {}", 1);
    }
}
