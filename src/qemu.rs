//! Utilities for interacting with QEMU test infrastructure.

#[cfg(target_arch = "x86_64")]
use crate::arch::{qemu_exit, ArchCpu, Cpu};

/// Exit codes understood by QEMU's ISA debug exit device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum QemuExitCode {
    /// Signal that the run completed successfully.
    Success = 0x10,
    /// Signal that a check failed.
    Failed = 0x11,
}

/// Write the exit code to QEMU's debug exit port and halt the CPU.
#[cfg(target_arch = "x86_64")]
#[inline]
pub fn exit_qemu(code: QemuExitCode) -> ! {
    qemu_exit(code as u32);

    loop {
        ArchCpu::halt();
    }
}
