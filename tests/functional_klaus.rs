//! Klaus Dormann's 6502 Functional Test
//!
//! This module integrates the comprehensive functional test suite from
//! https://github.com/Klaus2m5/6502_65C02_functional_tests
//!
//! The test validates all valid opcodes and addressing modes of the NMOS 6502
//! CPU, decimal mode included.
//!
//! ## How the Test Works
//!
//! 1. Load the 64KB binary image into memory (includes code and data)
//! 2. Start at the entry point ($0400)
//! 3. Execute until an instruction jumps to itself
//! 4. Check that the trap address is the success address ($3469)
//!
//! Any other trap address identifies the failing test in the assembler
//! listing. The binary is not shipped with the crate; place it at
//! `tests/fixtures/6502_functional_test.bin` before running with `--ignored`.
//! A missing binary fails the test.

use std::path::Path;

use cpu6502::{CpuConfig, FlatMemory, MemoryBus, StartAddress, SystemClock, CPU};

/// Success address - where PC ends up when all tests pass
const SUCCESS_ADDRESS: u16 = 0x3469;

/// Entry point for the functional test
const ENTRY_POINT: u16 = 0x0400;

const FIXTURE: &str = "tests/fixtures/6502_functional_test.bin";

#[test]
#[ignore = "slow functional test - run with --ignored, needs tests/fixtures/6502_functional_test.bin"]
fn klaus_6502_functional_test() {
    assert!(
        Path::new(FIXTURE).exists(),
        "functional test binary not found at {}",
        FIXTURE
    );

    let memory = FlatMemory::from_file(FIXTURE, 0x0000).unwrap();
    let config = CpuConfig::default().with_start(StartAddress::Fixed(ENTRY_POINT));
    let mut cpu = CPU::with_config(memory, SystemClock::new(), config).unwrap();

    let trap = cpu.run_until_trap().unwrap();

    if trap != SUCCESS_ADDRESS {
        eprintln!("Final state: {}", cpu.registers());
        eprintln!("Memory around trap:");
        for addr in trap.saturating_sub(5)..=trap.saturating_add(5) {
            let byte = cpu.memory().read(addr).unwrap_or(0);
            let marker = if addr == trap { " <-- PC" } else { "" };
            eprintln!("  ${:04X}: ${:02X}{}", addr, byte, marker);
        }
    }

    assert_eq!(
        trap, SUCCESS_ADDRESS,
        "functional test trapped at ${:04X} after {} cycles",
        trap,
        cpu.cycles()
    );
}
