//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump, absolute (3 cycles) or indirect (5 cycles)
//! - JSR: Jump to Subroutine (6 cycles)
//! - RTS: Return from Subroutine (6 cycles)
//! - RTI: Return from Interrupt (6 cycles)
//! - BRK: Force Interrupt (7 cycles)
//! - NOP: No Operation (2 cycles), also used for undocumented opcodes
//!
//! JSR pushes the address of its own last byte rather than the address of the
//! next instruction; RTS adds one after pulling. RTI pulls the exact address.

use crate::cpu::Interrupt;
use crate::{Clock, ExecutionError, MemoryBus, CPU};

/// Executes the JMP (Jump) instruction.
///
/// The resolver has already produced the target, including the NMOS
/// page-wrap quirk of `JMP ($xxFF)`.
pub(crate) fn execute_jmp<B: MemoryBus, C: Clock>(cpu: &mut CPU<B, C>) -> Result<(), ExecutionError> {
    cpu.pc = cpu.effective_address;
    Ok(())
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// # Stack Effect
///
/// Pushes PC-1 (address of the JSR's high operand byte), high byte first.
pub(crate) fn execute_jsr<B: MemoryBus, C: Clock>(cpu: &mut CPU<B, C>) -> Result<(), ExecutionError> {
    cpu.idle();

    let [lo, hi] = cpu.pc.wrapping_sub(1).to_le_bytes();
    cpu.push(hi)?;
    cpu.push(lo)?;

    cpu.pc = cpu.effective_address;
    Ok(())
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pulls the return address low byte first, then increments it.
pub(crate) fn execute_rts<B: MemoryBus, C: Clock>(cpu: &mut CPU<B, C>) -> Result<(), ExecutionError> {
    cpu.idle();
    let lo = cpu.pull()?;
    let hi = cpu.pull()?;
    cpu.idle();

    cpu.pc = u16::from_le_bytes([lo, hi]).wrapping_add(1);
    Ok(())
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls the status byte (B and bit 5 discarded), then the return address.
/// Unlike RTS, the address is used as pulled.
pub(crate) fn execute_rti<B: MemoryBus, C: Clock>(cpu: &mut CPU<B, C>) -> Result<(), ExecutionError> {
    cpu.idle();
    let status = cpu.pull()?;
    cpu.set_status(status);

    let lo = cpu.pull()?;
    let hi = cpu.pull()?;
    cpu.pc = u16::from_le_bytes([lo, hi]);
    Ok(())
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// BRK is one byte but behaves as two: the byte after the opcode is a padding
/// byte, so the pushed return address is the BRK address + 2.
///
/// Flags affected:
/// - B: Set in the pushed status byte only
/// - I: Set to 1
pub(crate) fn execute_brk<B: MemoryBus, C: Clock>(cpu: &mut CPU<B, C>) -> Result<(), ExecutionError> {
    cpu.pc = cpu.pc.wrapping_add(1);
    cpu.interrupt(Interrupt::Brk)
}

/// Executes NOP. Undocumented opcodes land here as well.
pub(crate) fn execute_nop<B: MemoryBus, C: Clock>(_cpu: &mut CPU<B, C>) -> Result<(), ExecutionError> {
    Ok(())
}
