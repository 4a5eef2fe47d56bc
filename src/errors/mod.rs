// src/errors/mod.rs

//! Error types shared by the console, serial and boot code.

pub mod unified;

pub use unified::{ErrorContext, InitError, KernelError, SerialError, VgaError};
