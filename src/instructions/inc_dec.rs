//! # Increment and Decrement Instructions
//!
//! - INC, DEC: read-modify-write on memory (5-7 cycles)
//! - INX, INY, DEX, DEY: register forms (2 cycles)
//!
//! All wrap at 8 bits and update Z and N from the result. Carry and overflow
//! are never affected.

use crate::{Clock, ExecutionError, MemoryBus, CPU};

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<B: MemoryBus, C: Clock>(cpu: &mut CPU<B, C>) -> Result<(), ExecutionError> {
    let result = cpu.modify(|_, value| value.wrapping_add(1))?;
    cpu.set_zn(result);
    Ok(())
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<B: MemoryBus, C: Clock>(cpu: &mut CPU<B, C>) -> Result<(), ExecutionError> {
    let result = cpu.modify(|_, value| value.wrapping_sub(1))?;
    cpu.set_zn(result);
    Ok(())
}

pub(crate) fn execute_inx<B: MemoryBus, C: Clock>(cpu: &mut CPU<B, C>) -> Result<(), ExecutionError> {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.set_zn(cpu.x);
    Ok(())
}

pub(crate) fn execute_iny<B: MemoryBus, C: Clock>(cpu: &mut CPU<B, C>) -> Result<(), ExecutionError> {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.set_zn(cpu.y);
    Ok(())
}

pub(crate) fn execute_dex<B: MemoryBus, C: Clock>(cpu: &mut CPU<B, C>) -> Result<(), ExecutionError> {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.set_zn(cpu.x);
    Ok(())
}

pub(crate) fn execute_dey<B: MemoryBus, C: Clock>(cpu: &mut CPU<B, C>) -> Result<(), ExecutionError> {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.set_zn(cpu.y);
    Ok(())
}
