//! Boot entry for the VGA console kernel
//!
//! Brings up serial logging and the text console, prints a banner and checks
//! that the console reads back what it drew.

#![no_std]
#![no_main]
#![deny(unsafe_op_in_unsafe_fn)]

use bootloader_api::config::Mapping;
use bootloader_api::{entry_point, BootInfo, BootloaderConfig};
use core::panic::PanicInfo;
use vga_console::arch::{ArchCpu, Cpu};
use vga_console::errors::ErrorContext;
use vga_console::vga_buffer::constants::{VGA_HEIGHT, VGA_WIDTH};
use vga_console::vga_buffer::{self, ColorCode, ScreenChar};
use vga_console::{hlt_loop, init, println, serial_println};

/// Bootloader configuration.
pub static BOOTLOADER_CONFIG: BootloaderConfig = {
    let mut config = BootloaderConfig::new_default();
    // The text buffer is reached through the physical memory mapping
    config.mappings.physical_memory = Some(Mapping::Dynamic);
    config
};

entry_point!(kernel_main, config = &BOOTLOADER_CONFIG);

fn kernel_main(boot_info: &'static mut BootInfo) -> ! {
    let Some(phys_mem_offset) = boot_info.physical_memory_offset.into_option() else {
        vga_console::error!("boot: physical memory is not mapped");
        halt();
    };

    // SAFETY: the bootloader maps all physical memory at this offset for the
    // lifetime of the kernel, and nothing else touches the text buffer.
    if let Err(err) = unsafe { init::initialize_all(phys_mem_offset) } {
        vga_console::error!("boot: {} ({})", err, err.context());
        halt();
    }

    print_banner();

    if self_check() {
        vga_console::info!("boot: console self-check passed");
        finish(true)
    } else {
        vga_console::error!("boot: console self-check failed");
        finish(false)
    }
}

fn print_banner() {
    let _ = vga_buffer::print_colored("VGA console ready\n", ColorCode::success());
    println!(
        "{} x {} cells, phase: {}",
        VGA_WIDTH,
        VGA_HEIGHT,
        init::status_string()
    );
    let _ = vga_buffer::print_colored("Hello from the boot console\n", ColorCode::info());
}

/// Draw a marker at the cursor and read it back from video memory
fn self_check() -> bool {
    vga_buffer::with_console(|console| {
        console.write_byte(b'#');
        // The cursor sits just past the marker, even when it wrapped
        let at = console.position();
        let expected = ScreenChar::new(b'#', console.color());
        let drawn = console.cell(at.row, at.col - 1) == Some(expected);
        console.write_byte(b'\n');
        drawn
    })
    .unwrap_or(false)
}

#[cfg(feature = "qemu-exit")]
fn finish(passed: bool) -> ! {
    use vga_console::{exit_qemu, QemuExitCode};

    exit_qemu(if passed {
        QemuExitCode::Success
    } else {
        QemuExitCode::Failed
    })
}

#[cfg(not(feature = "qemu-exit"))]
fn finish(_passed: bool) -> ! {
    hlt_loop()
}

/// Boot could not complete
fn halt() -> ! {
    finish(false)
}

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    ArchCpu::disable_interrupts();

    serial_println!("[KERNEL PANIC] {}", info);
    let _ = vga_buffer::try_with_console(|console| {
        use core::fmt::Write;

        console.set_color_code(ColorCode::panic());
        let _ = writeln!(console, "\n[KERNEL PANIC] {}", info);
    });

    hlt_loop()
}
