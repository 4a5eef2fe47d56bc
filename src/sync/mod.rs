// src/sync/mod.rs

//! Synchronization helpers
//!
//! # Lock Ordering
//!
//! To prevent deadlocks, always acquire locks in this order:
//! 1. `SERIAL1`
//! 2. `CONSOLE`
//!
//! Both are only ever taken inside [`without_interrupts`], so an interrupt
//! handler that logs cannot spin on a lock held by the code it interrupted.

pub mod interrupt;

pub use interrupt::without_interrupts;
