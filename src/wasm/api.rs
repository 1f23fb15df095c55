//! WASM API for the 6502 emulator.
//!
//! Provides JavaScript-callable interfaces for loading programs, stepping the
//! CPU, raising interrupts and inspecting registers and memory.

use crate::{Clock, CpuConfig, FlatMemory, MemoryBus, SystemClock, CPU};
use std::time::Duration;
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<crate::ExecutionError> for JsError {
    fn from(err: crate::ExecutionError) -> Self {
        JsError::new(&err.to_string())
    }
}

/// 6502 machine with 64KB of flat RAM, driven from JavaScript.
#[wasm_bindgen]
pub struct Emulator6502 {
    cpu: CPU<FlatMemory, SystemClock>,
    program_start: u16,
}

#[wasm_bindgen]
impl Emulator6502 {
    /// Create a new emulator. Execution starts at `$0200`.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Emulator6502 {
            cpu: CPU::new(FlatMemory::new(), SystemClock::new()),
            program_start: crate::config::DEFAULT_START,
        }
    }

    /// Execute a single instruction and return its cycle count
    pub fn step(&mut self) -> Result<u32, JsError> {
        Ok(self.cpu.execute()? as u32)
    }

    /// Execute whole instructions until at least `cycles` cycles have elapsed
    pub fn run_for_cycles(&mut self, cycles: u32) -> Result<u32, JsError> {
        let budget = cycles as u64;
        let mut elapsed = 0;
        while elapsed < budget {
            elapsed += self.cpu.execute()?;
        }
        Ok(elapsed as u32)
    }

    /// Reset registers and the cycle counter; memory is kept
    pub fn reset(&mut self) -> Result<(), JsError> {
        let config = CpuConfig::default().with_start(crate::StartAddress::Fixed(self.program_start));
        self.cpu.clock_mut().reset();
        self.cpu.config = config;
        self.cpu.reset()?;
        Ok(())
    }

    /// Pace execution at `hz` cycles per second; 0 runs unpaced
    pub fn set_speed(&mut self, hz: u32) {
        let per_cycle = if hz == 0 {
            Duration::ZERO
        } else {
            Duration::from_nanos(1_000_000_000 / hz as u64)
        };
        self.cpu.clock_mut().set_pacing(per_cycle);
    }

    /// Drive the IRQ input
    pub fn irq(&mut self, active: bool) {
        self.cpu.irq(active);
    }

    /// Signal an NMI edge
    pub fn nmi(&mut self) {
        self.cpu.nmi();
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.cycles() as f64 // Convert u64 to f64 for JavaScript
    }

    /// One-line register dump, same format as the trace log
    pub fn registers(&self) -> String {
        self.cpu.registers().to_string()
    }

    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    pub fn read_memory(&self, addr: u16) -> Result<u8, JsError> {
        Ok(self.cpu.memory().read(addr).map_err(crate::ExecutionError::from)?)
    }

    pub fn write_memory(&mut self, addr: u16, value: u8) -> Result<(), JsError> {
        self.cpu
            .memory_mut()
            .write(addr, value)
            .map_err(crate::ExecutionError::from)?;
        Ok(())
    }

    /// Copy of one 256-byte page as a typed array
    pub fn get_memory_page(&self, page: u8) -> js_sys::Uint8Array {
        let start = (page as usize) << 8;
        js_sys::Uint8Array::from(&self.cpu.memory().as_slice()[start..start + 0x100])
    }

    /// Load a program and point PC at it
    pub fn load_program(&mut self, program: &[u8], start_addr: u16) -> Result<(), JsError> {
        self.cpu
            .memory_mut()
            .load_image(program, start_addr)
            .map_err(crate::ExecutionError::from)?;
        self.cpu.set_pc(start_addr);
        self.program_start = start_addr;
        Ok(())
    }

    #[wasm_bindgen(getter)]
    pub fn program_start(&self) -> u16 {
        self.program_start
    }
}

impl Default for Emulator6502 {
    fn default() -> Self {
        Self::new()
    }
}
