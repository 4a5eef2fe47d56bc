// src/init.rs

//! Boot sequence for the early console
//!
//! - Atomic state machine for initialization phases
//! - Serial first, so console bring-up can be logged
//! - A missing serial port is logged and skipped; a dead VGA buffer fails
//!   the boot

use crate::errors::{InitError, KernelError, SerialError};
use crate::{serial, vga_buffer};
use core::sync::atomic::{AtomicU8, Ordering};

/// Initialization phases with explicit state machine
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitPhase {
    NotStarted = 0,
    SerialInit = 1,
    ConsoleInit = 2,
    Complete = 3,
    Failed = 255,
}

impl InitPhase {
    /// Check if this phase can transition to the next phase
    const fn can_transition_to(self, next: Self) -> bool {
        if matches!(next, Self::Failed) {
            return !matches!(self, Self::Failed);
        }

        matches!(self.next(), Some(expected) if (expected as u8) == (next as u8))
    }

    const fn next(self) -> Option<Self> {
        match self {
            Self::NotStarted => Some(Self::SerialInit),
            Self::SerialInit => Some(Self::ConsoleInit),
            Self::ConsoleInit => Some(Self::Complete),
            Self::Complete | Self::Failed => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::SerialInit => "Serial Init",
            Self::ConsoleInit => "Console Init",
            Self::Complete => "Complete",
            Self::Failed => "Failed",
        }
    }
}

impl From<u8> for InitPhase {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::SerialInit,
            2 => Self::ConsoleInit,
            3 => Self::Complete,
            255 => Self::Failed,
            _ => Self::NotStarted,
        }
    }
}

static CURRENT_PHASE: AtomicU8 = AtomicU8::new(InitPhase::NotStarted as u8);

/// Current phase
pub fn current_phase() -> InitPhase {
    InitPhase::from(CURRENT_PHASE.load(Ordering::Acquire))
}

/// Get a human-readable status string for the current initialization phase
pub fn status_string() -> &'static str {
    current_phase().as_str()
}

/// Advance the global phase, rejecting out-of-order transitions
fn advance(next: InitPhase) -> Result<(), InitError> {
    let current = current_phase();
    if !current.can_transition_to(next) {
        return Err(InitError::AlreadyInitialized);
    }
    CURRENT_PHASE
        .compare_exchange(current as u8, next as u8, Ordering::AcqRel, Ordering::Acquire)
        .map(|_| ())
        .map_err(|_| InitError::AlreadyInitialized)
}

/// Bring up serial logging and the boot console.
///
/// # Errors
///
/// - [`InitError::AlreadyInitialized`] on a second call
/// - [`InitError::VgaFailed`] if the text buffer does not respond
///
/// # Safety
///
/// Same contract as [`vga_buffer::init`]: all of physical memory mapped
/// writable at `phys_mem_offset`.
pub unsafe fn initialize_all(phys_mem_offset: u64) -> Result<(), KernelError> {
    advance(InitPhase::SerialInit)?;
    serial_outcome(serial::init()).map_err(fail)?;

    advance(InitPhase::ConsoleInit)?;
    // SAFETY: forwarded from the caller's contract.
    if let Err(err) = unsafe { vga_buffer::init(phys_mem_offset) } {
        crate::error!("vga: {}", err);
        return Err(fail(InitError::VgaFailed(err)));
    }
    crate::info!("vga: console ready");

    advance(InitPhase::Complete)?;
    Ok(())
}

/// Only a broken port stops the boot; a missing or already configured one
/// does not.
fn serial_outcome(result: Result<(), SerialError>) -> Result<(), InitError> {
    match result {
        Ok(()) => {
            crate::info!("serial: COM1 ready");
            Ok(())
        }
        Err(SerialError::AlreadyInitialized) => {
            crate::debug!("serial: COM1 configured earlier");
            Ok(())
        }
        Err(SerialError::PortNotPresent) => Ok(()),
        Err(err) => Err(InitError::SerialFailed(err)),
    }
}

fn fail(err: InitError) -> KernelError {
    CURRENT_PHASE.store(InitPhase::Failed as u8, Ordering::Release);
    err.into()
}
