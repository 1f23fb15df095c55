//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: bitwise logic into A
//! - BIT: Bit test
//! - CMP, CPX, CPY: Compare register with memory
//!
//! ADC and SBC honour the D flag with NMOS decimal semantics when the CPU is
//! configured with `decimal_mode`. In decimal mode the N, V and Z flags follow
//! the NMOS part: they are derived from intermediate binary values, so they
//! are only meaningful for valid BCD operands.

use crate::{Clock, ExecutionError, MemoryBus, CPU};

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the operand plus the carry flag to the accumulator.
///
/// # Flag Behavior
///
/// - Carry (C): Set if the unsigned sum exceeds 255 (99 in decimal mode)
/// - Zero (Z): Set if the result is 0
/// - Overflow (V): Set if both operands share a sign that the result lacks
/// - Negative (N): Bit 7 of the result
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU, with the effective address resolved
pub(crate) fn execute_adc<B: MemoryBus, C: Clock>(cpu: &mut CPU<B, C>) -> Result<(), ExecutionError> {
    let value = cpu.load()?;

    if cpu.flag_d && cpu.config.decimal_mode {
        add_decimal(cpu, value);
    } else {
        add_binary(cpu, value);
    }

    Ok(())
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Computes A - M - (1 - C). The carry acts as an inverted borrow: it is set
/// when no borrow was needed.
///
/// # Flag Behavior
///
/// - Carry (C): Set if A >= M + borrow (unsigned)
/// - Zero (Z): Set if the result is 0
/// - Overflow (V): Set on signed overflow
/// - Negative (N): Bit 7 of the result
pub(crate) fn execute_sbc<B: MemoryBus, C: Clock>(cpu: &mut CPU<B, C>) -> Result<(), ExecutionError> {
    let value = cpu.load()?;

    if cpu.flag_d && cpu.config.decimal_mode {
        subtract_decimal(cpu, value);
    } else {
        // A - M - borrow == A + !M + carry
        add_binary(cpu, !value);
    }

    Ok(())
}

fn add_binary<B: MemoryBus, C: Clock>(cpu: &mut CPU<B, C>, value: u8) {
    let a = cpu.a;
    let sum = a as u16 + value as u16 + cpu.flag_c as u16;
    let result = sum as u8;

    cpu.flag_c = sum > 0xFF;
    cpu.flag_v = ((a ^ result) & (value ^ result) & 0x80) != 0;
    cpu.set_zn(result);
    cpu.a = result;
}

fn add_decimal<B: MemoryBus, C: Clock>(cpu: &mut CPU<B, C>, value: u8) {
    let a = cpu.a;
    let carry = cpu.flag_c as u16;

    let mut low = (a as u16 & 0x0F) + (value as u16 & 0x0F) + carry;
    if low >= 0x0A {
        low = ((low + 0x06) & 0x0F) + 0x10;
    }

    let mut sum = (a as u16 & 0xF0) + (value as u16 & 0xF0) + low;

    // N and V come from the sum before the high nibble is adjusted, Z from
    // the plain binary sum.
    let binary = a.wrapping_add(value).wrapping_add(carry as u8);
    cpu.flag_z = binary == 0;
    cpu.flag_n = (sum & 0x80) != 0;
    cpu.flag_v = ((a as u16 ^ sum) & (value as u16 ^ sum) & 0x80) != 0;

    if sum >= 0xA0 {
        sum += 0x60;
    }

    cpu.flag_c = sum >= 0x100;
    cpu.a = sum as u8;
}

fn subtract_decimal<B: MemoryBus, C: Clock>(cpu: &mut CPU<B, C>, value: u8) {
    let a = cpu.a;
    let borrow = 1 - cpu.flag_c as i16;

    // Flags follow the binary subtraction.
    add_binary(cpu, !value);

    let low = (a as i16 & 0x0F) - (value as i16 & 0x0F) - borrow;
    let mut result = a as i16 - value as i16 - borrow;
    if result < 0 {
        result -= 0x60;
    }
    if low < 0 {
        result -= 0x06;
    }

    cpu.a = result as u8;
}

/// Executes the AND (Logical AND) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if the result is 0
/// - Negative (N): Bit 7 of the result
pub(crate) fn execute_and<B: MemoryBus, C: Clock>(cpu: &mut CPU<B, C>) -> Result<(), ExecutionError> {
    let value = cpu.load()?;
    cpu.a &= value;
    cpu.set_zn(cpu.a);
    Ok(())
}

/// Executes the ORA (Logical Inclusive OR) instruction.
pub(crate) fn execute_ora<B: MemoryBus, C: Clock>(cpu: &mut CPU<B, C>) -> Result<(), ExecutionError> {
    let value = cpu.load()?;
    cpu.a |= value;
    cpu.set_zn(cpu.a);
    Ok(())
}

/// Executes the EOR (Exclusive OR) instruction.
pub(crate) fn execute_eor<B: MemoryBus, C: Clock>(cpu: &mut CPU<B, C>) -> Result<(), ExecutionError> {
    let value = cpu.load()?;
    cpu.a ^= value;
    cpu.set_zn(cpu.a);
    Ok(())
}

/// Executes the BIT (Bit Test) instruction.
///
/// The accumulator is not modified.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A & M = 0
/// - Overflow (V): Bit 6 of M
/// - Negative (N): Bit 7 of M
pub(crate) fn execute_bit<B: MemoryBus, C: Clock>(cpu: &mut CPU<B, C>) -> Result<(), ExecutionError> {
    let value = cpu.load()?;
    cpu.flag_z = (cpu.a & value) == 0;
    cpu.flag_v = (value & 0x40) != 0;
    cpu.flag_n = (value & 0x80) != 0;
    Ok(())
}

/// Sets C, Z and N as if `register - value` had been computed.
fn compare<B: MemoryBus, C: Clock>(cpu: &mut CPU<B, C>, register: u8, value: u8) {
    cpu.flag_c = register >= value;
    cpu.set_zn(register.wrapping_sub(value));
}

/// Executes the CMP (Compare Accumulator) instruction.
///
/// # Flag Behavior
///
/// - Carry (C): Set if A >= M (unsigned)
/// - Zero (Z): Set if A = M
/// - Negative (N): Bit 7 of A - M
pub(crate) fn execute_cmp<B: MemoryBus, C: Clock>(cpu: &mut CPU<B, C>) -> Result<(), ExecutionError> {
    let value = cpu.load()?;
    let register = cpu.a;
    compare(cpu, register, value);
    Ok(())
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<B: MemoryBus, C: Clock>(cpu: &mut CPU<B, C>) -> Result<(), ExecutionError> {
    let value = cpu.load()?;
    let register = cpu.x;
    compare(cpu, register, value);
    Ok(())
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<B: MemoryBus, C: Clock>(cpu: &mut CPU<B, C>) -> Result<(), ExecutionError> {
    let value = cpu.load()?;
    let register = cpu.y;
    compare(cpu, register, value);
    Ok(())
}
