//! Fuzz target for CPU execution.
//!
//! Builds an arbitrary register state, memory contents and interrupt inputs,
//! then executes a few instructions looking for panics and broken timing
//! invariants.

#![no_main]

use arbitrary::Arbitrary;
use cpu6502::{
    CpuConfig, FlatMemory, IllegalOpcodePolicy, MemoryBus, SystemClock, CPU, OPCODE_TABLE,
};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    /// Packed NV-BDIZC status byte
    status: u8,
    irq: bool,
    nmi: bool,
    decimal_mode: bool,
    halt_on_illegal: bool,
}

/// Memory region for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instructions + operands)
    program: [u8; 16],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// Interrupt and reset vectors at $FFFA-$FFFF
    vectors: [u8; 6],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    /// Size of the bus; small buses exercise the out-of-range path
    small_bus: bool,
}

fuzz_target!(|input: FuzzInput| {
    let size = if input.small_bus { 0x0400 } else { 0x1_0000 };
    let mut memory = FlatMemory::with_size(size);

    let _ = memory.load_image(&input.memory.zero_page, 0x0000);
    let _ = memory.load_image(&input.memory.stack_page, 0x0100);
    let _ = memory.load_image(&input.memory.program, 0x0200);
    let _ = memory.load_image(&input.memory.vectors, 0xFFFA);

    let policy = if input.cpu_state.halt_on_illegal {
        IllegalOpcodePolicy::Halt
    } else {
        IllegalOpcodePolicy::Nop
    };
    let config = CpuConfig::default()
        .with_decimal_mode(input.cpu_state.decimal_mode)
        .with_illegal_opcodes(policy);
    let mut cpu = match CPU::with_config(memory, SystemClock::new(), config) {
        Ok(cpu) => cpu,
        Err(_) => return,
    };

    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);
    cpu.irq(input.cpu_state.irq);
    if input.cpu_state.nmi {
        cpu.nmi();
    }

    for _ in 0..8 {
        let pc = cpu.pc();
        let opcode = cpu.memory().read(pc).unwrap_or(0);
        let before = cpu.cycles();

        // Errors are expected (small bus, halt policy); panics are not
        let Ok(cycles) = cpu.execute() else {
            break;
        };

        assert_eq!(cpu.cycles() - before, cycles);
        assert!(cycles >= 2 && cycles <= 7, "opcode ${:02X} took {}", opcode, cycles);
        assert_eq!(cpu.status() & 0x30, 0x20);

        if cycles != 7 {
            let metadata = OPCODE_TABLE[opcode as usize];
            assert!(cycles >= metadata.base_cycles as u64);
        }
    }
});
