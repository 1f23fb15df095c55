//! # Stack Instructions
//!
//! This module implements stack operations:
//! - PHA: Push Accumulator (3 cycles)
//! - PHP: Push Processor Status (3 cycles)
//! - PLA: Pull Accumulator (4 cycles)
//! - PLP: Pull Processor Status (4 cycles)
//!
//! The stack lives at $0100-$01FF. A push writes to $0100+S and then decrements
//! S; a pull increments S and then reads. Pulls spend one internal cycle
//! incrementing S before the read.

use crate::status;
use crate::{Clock, ExecutionError, MemoryBus, CPU};

/// Executes the PHA (Push Accumulator) instruction.
pub(crate) fn execute_pha<B: MemoryBus, C: Clock>(cpu: &mut CPU<B, C>) -> Result<(), ExecutionError> {
    cpu.push(cpu.a)
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed copy always has the B flag (bit 4) and the unused bit (bit 5)
/// set. The live status register is not modified.
pub(crate) fn execute_php<B: MemoryBus, C: Clock>(cpu: &mut CPU<B, C>) -> Result<(), ExecutionError> {
    let value = cpu.status() | status::BREAK | status::UNUSED;
    cpu.push(value)
}

/// Executes the PLA (Pull Accumulator) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if the pulled value is 0
/// - Negative (N): Set if bit 7 of the pulled value is set
pub(crate) fn execute_pla<B: MemoryBus, C: Clock>(cpu: &mut CPU<B, C>) -> Result<(), ExecutionError> {
    cpu.idle();
    let value = cpu.pull()?;
    cpu.a = value;
    cpu.set_zn(value);
    Ok(())
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// Restores N, V, D, I, Z and C from the pulled byte. Bits 4 and 5 have no
/// storage in the register and are discarded.
pub(crate) fn execute_plp<B: MemoryBus, C: Clock>(cpu: &mut CPU<B, C>) -> Result<(), ExecutionError> {
    cpu.idle();
    let value = cpu.pull()?;
    cpu.set_status(value);
    Ok(())
}
