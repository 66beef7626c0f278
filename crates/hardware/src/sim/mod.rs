//! Simulation utilities and program loading.
//!
//! Provides the text loader that turns an `.ls8` program listing into the
//! byte image handed to [`Cpu::load`](crate::core::Cpu::load).

pub mod loader;
