//! # Branch Instructions
//!
//! This module implements the conditional branches:
//! - BCC / BCS: carry clear / set
//! - BEQ / BNE: zero set / clear
//! - BMI / BPL: negative set / clear
//! - BVC / BVS: overflow clear / set
//!
//! The relative resolver has already fetched the offset and computed the
//! target. A branch costs 2 cycles when not taken, 3 when taken, and 4 when the
//! target is on a different page than the instruction that follows the branch.

use crate::{Clock, ExecutionError, MemoryBus, CPU};

/// Takes the branch to `effective_address` when `taken` holds.
fn branch<B: MemoryBus, C: Clock>(
    cpu: &mut CPU<B, C>,
    taken: bool,
) -> Result<(), ExecutionError> {
    if !taken {
        return Ok(());
    }

    cpu.idle();

    let target = cpu.effective_address;
    if (target & 0xFF00) != (cpu.pc & 0xFF00) {
        cpu.page_crossed = true;
        cpu.idle();
    }

    cpu.pc = target;
    Ok(())
}

/// Executes BCC (Branch if Carry Clear).
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU, target in `effective_address`
pub(crate) fn execute_bcc<B: MemoryBus, C: Clock>(
    cpu: &mut CPU<B, C>,
) -> Result<(), ExecutionError> {
    let taken = !cpu.flag_c;
    branch(cpu, taken)
}

/// Executes BCS (Branch if Carry Set).
pub(crate) fn execute_bcs<B: MemoryBus, C: Clock>(
    cpu: &mut CPU<B, C>,
) -> Result<(), ExecutionError> {
    let taken = cpu.flag_c;
    branch(cpu, taken)
}

/// Executes BEQ (Branch if Equal, Z set).
pub(crate) fn execute_beq<B: MemoryBus, C: Clock>(
    cpu: &mut CPU<B, C>,
) -> Result<(), ExecutionError> {
    let taken = cpu.flag_z;
    branch(cpu, taken)
}

/// Executes BNE (Branch if Not Equal, Z clear).
pub(crate) fn execute_bne<B: MemoryBus, C: Clock>(
    cpu: &mut CPU<B, C>,
) -> Result<(), ExecutionError> {
    let taken = !cpu.flag_z;
    branch(cpu, taken)
}

/// Executes BMI (Branch if Minus).
pub(crate) fn execute_bmi<B: MemoryBus, C: Clock>(
    cpu: &mut CPU<B, C>,
) -> Result<(), ExecutionError> {
    let taken = cpu.flag_n;
    branch(cpu, taken)
}

/// Executes BPL (Branch if Plus).
pub(crate) fn execute_bpl<B: MemoryBus, C: Clock>(
    cpu: &mut CPU<B, C>,
) -> Result<(), ExecutionError> {
    let taken = !cpu.flag_n;
    branch(cpu, taken)
}

/// Executes BVC (Branch if Overflow Clear).
pub(crate) fn execute_bvc<B: MemoryBus, C: Clock>(
    cpu: &mut CPU<B, C>,
) -> Result<(), ExecutionError> {
    let taken = !cpu.flag_v;
    branch(cpu, taken)
}

/// Executes BVS (Branch if Overflow Set).
pub(crate) fn execute_bvs<B: MemoryBus, C: Clock>(
    cpu: &mut CPU<B, C>,
) -> Result<(), ExecutionError> {
    let taken = cpu.flag_v;
    branch(cpu, taken)
}
