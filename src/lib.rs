//! # 6502 CPU Emulator Core
//!
//! A cycle-accurate NMOS 6502 interpreter built from three pieces:
//!
//! - a **clock** that counts cycles and can pace them against wall-clock time,
//! - a **memory bus** trait over the 16-bit address space,
//! - the **CPU core**, which executes the 151 documented opcodes through a
//!   256-entry table of addressing mode, base cycles and handler.
//!
//! Every bus access and every internal cycle ticks the clock exactly once, so
//! cycle counts come from the access pattern of each instruction, page-crossing
//! and branch penalties included.
//!
//! ## Quick Start
//!
//! ```rust
//! use cpu6502::{CPU, FlatMemory, MemoryBus, SystemClock};
//!
//! // LDA #$42; STA $10; JMP $0204
//! let program = [0xA9, 0x42, 0x85, 0x10, 0x4C, 0x04, 0x02];
//!
//! let mut memory = FlatMemory::new();
//! memory.load_image(&program, 0x0200).unwrap();
//!
//! let mut cpu = CPU::new(memory, SystemClock::new());
//! let trap = cpu.run_until_trap().unwrap();
//!
//! assert_eq!(trap, 0x0204);
//! assert_eq!(cpu.memory().read(0x0010), Ok(0x42));
//! assert_eq!(cpu.cycles(), 2 + 3 + 3);
//! ```
//!
//! ## Modules
//!
//! - `cpu` - CPU state, execution loop and interrupt handling
//! - `clock` - Cycle counter and pacing
//! - `memory` - MemoryBus trait and the flat RAM implementation
//! - `opcodes` - Opcode metadata table
//! - `addressing` - Addressing modes and their resolvers
//! - `config` - Reset and variant settings
//! - `status` - Status register bit layout
//!
//! ## Logging
//!
//! The crate logs through the `log` facade: every executed instruction at
//! `trace`, reset and interrupt entries at `debug`, the end of a `run` at
//! `info` and undocumented opcodes at `warn`. Install any logger to see them.

pub mod addressing;
pub mod clock;
pub mod config;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod status;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::AddressingMode;
pub use clock::{Clock, SystemClock};
pub use config::{CpuConfig, IllegalOpcodePolicy, StartAddress};
pub use cpu::{Registers, RunSummary, CPU, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR, STACK_PAGE};
pub use memory::{BusError, FlatMemory, ImageError, MemoryBus, ADDRESS_SPACE};
pub use opcodes::{Mnemonic, OpcodeMetadata, OPCODE_TABLE};

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// An undocumented opcode was fetched under `IllegalOpcodePolicy::Halt`.
    #[error("illegal opcode ${opcode:02X} at ${address:04X}")]
    IllegalOpcode { opcode: u8, address: u16 },

    /// A bus access failed; the instruction was abandoned mid-way.
    #[error("bus fault: {0}")]
    Bus(#[from] BusError),
}
