// src/arch/x86_64/qemu.rs

use crate::constants::QEMU_EXIT_PORT;
use x86_64::instructions::port::Port;

/// Write the exit code to QEMU's debug exit port.
pub fn exit_qemu(code: u32) {
    // SAFETY: the isa-debug-exit port only terminates the emulator; on real
    // hardware the write goes to an unused port.
    unsafe {
        let mut port = Port::<u32>::new(QEMU_EXIT_PORT);
        port.write(code);
    }
}
