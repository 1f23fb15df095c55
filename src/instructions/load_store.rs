//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//! - STA: Store Accumulator
//! - STX: Store X Register
//! - STY: Store Y Register
//!
//! Loads pay the page-crossing cycle only when the index add carries. Stores in
//! an indexed mode always pay it.

use crate::{Clock, ExecutionError, MemoryBus, CPU};

/// Executes the LDA (Load Accumulator) instruction.
///
/// Loads a byte of memory into the accumulator, setting the zero and negative
/// flags as appropriate.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
/// - Other flags: Not affected
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU, with the effective address resolved
pub(crate) fn execute_lda<B: MemoryBus, C: Clock>(cpu: &mut CPU<B, C>) -> Result<(), ExecutionError> {
    let value = cpu.load()?;
    cpu.a = value;
    cpu.set_zn(value);
    Ok(())
}

/// Executes the LDX (Load X Register) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if X = 0
/// - Negative (N): Set if bit 7 of X is set
pub(crate) fn execute_ldx<B: MemoryBus, C: Clock>(cpu: &mut CPU<B, C>) -> Result<(), ExecutionError> {
    let value = cpu.load()?;
    cpu.x = value;
    cpu.set_zn(value);
    Ok(())
}

/// Executes the LDY (Load Y Register) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if Y = 0
/// - Negative (N): Set if bit 7 of Y is set
pub(crate) fn execute_ldy<B: MemoryBus, C: Clock>(cpu: &mut CPU<B, C>) -> Result<(), ExecutionError> {
    let value = cpu.load()?;
    cpu.y = value;
    cpu.set_zn(value);
    Ok(())
}

/// Executes the STA (Store Accumulator) instruction.
///
/// Stores the accumulator at the effective address. No flags are affected.
pub(crate) fn execute_sta<B: MemoryBus, C: Clock>(cpu: &mut CPU<B, C>) -> Result<(), ExecutionError> {
    cpu.store(cpu.a)
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<B: MemoryBus, C: Clock>(cpu: &mut CPU<B, C>) -> Result<(), ExecutionError> {
    cpu.store(cpu.x)
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<B: MemoryBus, C: Clock>(cpu: &mut CPU<B, C>) -> Result<(), ExecutionError> {
    cpu.store(cpu.y)
}
