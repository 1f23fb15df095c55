//! WebAssembly bindings for the cpu6502 emulator.
//!
//! This module provides JavaScript-callable interfaces to the 6502 CPU,
//! enabling browser-based execution of 6502 machine code.

pub mod api;

pub use api::Emulator6502;
