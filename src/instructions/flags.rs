//! # Flag Instructions
//!
//! Set and clear operations on individual status flags: CLC, SEC, CLI, SEI,
//! CLD, SED and CLV. All are implied-mode, 2 cycles, and touch only their flag.

use crate::{Clock, ExecutionError, MemoryBus, CPU};

pub(crate) fn execute_clc<B: MemoryBus, C: Clock>(cpu: &mut CPU<B, C>) -> Result<(), ExecutionError> {
    cpu.flag_c = false;
    Ok(())
}

pub(crate) fn execute_sec<B: MemoryBus, C: Clock>(cpu: &mut CPU<B, C>) -> Result<(), ExecutionError> {
    cpu.flag_c = true;
    Ok(())
}

/// Clears I. An IRQ held active is taken before the next instruction.
pub(crate) fn execute_cli<B: MemoryBus, C: Clock>(cpu: &mut CPU<B, C>) -> Result<(), ExecutionError> {
    cpu.flag_i = false;
    Ok(())
}

pub(crate) fn execute_sei<B: MemoryBus, C: Clock>(cpu: &mut CPU<B, C>) -> Result<(), ExecutionError> {
    cpu.flag_i = true;
    Ok(())
}

pub(crate) fn execute_cld<B: MemoryBus, C: Clock>(cpu: &mut CPU<B, C>) -> Result<(), ExecutionError> {
    cpu.flag_d = false;
    Ok(())
}

pub(crate) fn execute_sed<B: MemoryBus, C: Clock>(cpu: &mut CPU<B, C>) -> Result<(), ExecutionError> {
    cpu.flag_d = true;
    Ok(())
}

/// Clears V. There is no matching "set overflow" instruction.
pub(crate) fn execute_clv<B: MemoryBus, C: Clock>(cpu: &mut CPU<B, C>) -> Result<(), ExecutionError> {
    cpu.flag_v = false;
    Ok(())
}
