//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each has an accumulator form (2 cycles) and read-modify-write memory forms
//! (5-7 cycles). The bit shifted out lands in C; Z and N follow the result.

use crate::{AddressingMode, Clock, ExecutionError, MemoryBus, CPU};

/// Applies `op` to A or to the operand in memory, then sets Z and N.
fn shift<B, C, F>(cpu: &mut CPU<B, C>, mode: AddressingMode, op: F) -> Result<(), ExecutionError>
where
    B: MemoryBus,
    C: Clock,
    F: Fn(&mut CPU<B, C>, u8) -> u8,
{
    let result = if mode == AddressingMode::Accumulator {
        let value = cpu.a;
        let result = op(cpu, value);
        cpu.a = result;
        result
    } else {
        cpu.modify(op)?
    };

    cpu.set_zn(result);
    Ok(())
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// # Flag Behavior
///
/// - Carry (C): Old bit 7
/// - Zero (Z): Set if result = 0
/// - Negative (N): Bit 7 of result
pub(crate) fn execute_asl<B: MemoryBus, C: Clock>(
    cpu: &mut CPU<B, C>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    shift(cpu, mode, |cpu, value| {
        cpu.flag_c = (value & 0x80) != 0;
        value << 1
    })
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 7 of the result is always 0, so N is always cleared.
pub(crate) fn execute_lsr<B: MemoryBus, C: Clock>(
    cpu: &mut CPU<B, C>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    shift(cpu, mode, |cpu, value| {
        cpu.flag_c = (value & 0x01) != 0;
        value >> 1
    })
}

/// Executes the ROL (Rotate Left) instruction.
///
/// The old carry enters bit 0; old bit 7 becomes the new carry.
pub(crate) fn execute_rol<B: MemoryBus, C: Clock>(
    cpu: &mut CPU<B, C>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    shift(cpu, mode, |cpu, value| {
        let carry_in = cpu.flag_c as u8;
        cpu.flag_c = (value & 0x80) != 0;
        (value << 1) | carry_in
    })
}

/// Executes the ROR (Rotate Right) instruction.
///
/// The old carry enters bit 7; old bit 0 becomes the new carry.
pub(crate) fn execute_ror<B: MemoryBus, C: Clock>(
    cpu: &mut CPU<B, C>,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    shift(cpu, mode, |cpu, value| {
        let carry_in = (cpu.flag_c as u8) << 7;
        cpu.flag_c = (value & 0x01) != 0;
        (value >> 1) | carry_in
    })
}
