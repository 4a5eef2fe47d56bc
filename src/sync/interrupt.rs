//! Interrupt controller abstraction.

/// A trait for running code with CPU interrupts masked.
///
/// This trait abstracts over the hardware-specific details of enabling and
/// disabling interrupts.
pub trait InterruptController {
    /// Run `f` with interrupts disabled, restoring the previous state afterwards.
    fn without_interrupts<F, R>(f: F) -> R
    where
        F: FnOnce() -> R;
}

/// An implementation of `InterruptController` for bare-metal x86_64.
#[cfg(target_arch = "x86_64")]
#[derive(Debug)]
pub struct X64InterruptController;

#[cfg(target_arch = "x86_64")]
impl InterruptController for X64InterruptController {
    fn without_interrupts<F, R>(f: F) -> R
    where
        F: FnOnce() -> R,
    {
        x86_64::instructions::interrupts::without_interrupts(f)
    }
}

/// Hosted builds run in user mode, where `cli` faults; there is nothing to mask.
#[derive(Debug)]
pub struct HostedInterruptController;

impl InterruptController for HostedInterruptController {
    fn without_interrupts<F, R>(f: F) -> R
    where
        F: FnOnce() -> R,
    {
        f()
    }
}

#[cfg(all(target_arch = "x86_64", target_os = "none"))]
pub type ArchInterrupts = X64InterruptController;

#[cfg(not(all(target_arch = "x86_64", target_os = "none")))]
pub type ArchInterrupts = HostedInterruptController;

/// Run `f` with interrupts masked on the current CPU.
#[inline]
pub fn without_interrupts<F, R>(f: F) -> R
where
    F: FnOnce() -> R,
{
    ArchInterrupts::without_interrupts(f)
}
