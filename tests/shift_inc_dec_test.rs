//! Tests for shifts, rotates, increments and decrements.
//!
//! Tests cover:
//! - Accumulator and memory forms of ASL/LSR/ROL/ROR
//! - Carry in and out of rotates
//! - INC/DEC on memory and the register forms, including 8-bit wrap

use cpu6502::{FlatMemory, MemoryBus, SystemClock, CPU};

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory, SystemClock> {
    let mut memory = FlatMemory::new();
    memory.load_image(program, 0x0200).unwrap();
    CPU::new(memory, SystemClock::new())
}

// ========== Shifts ==========

#[test]
fn test_asl_accumulator() {
    // ASL A
    let mut cpu = setup_cpu(&[0x0A]);
    cpu.set_a(0x81);

    let cycles = cpu.execute().unwrap();

    assert_eq!(cpu.a(), 0x02);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x0201);
    assert_eq!(cycles, 2);
}

#[test]
fn test_asl_zero_page() {
    // ASL $10
    let mut cpu = setup_cpu(&[0x06, 0x10]);
    cpu.memory_mut().write(0x0010, 0x40).unwrap();

    let cycles = cpu.execute().unwrap();

    assert_eq!(cpu.memory().read(0x0010), Ok(0x80));
    assert!(cpu.flag_n());
    assert!(!cpu.flag_c());
    assert_eq!(cycles, 5);
}

#[test]
fn test_lsr_accumulator_to_zero() {
    // LSR A
    let mut cpu = setup_cpu(&[0x4A]);
    cpu.set_a(0x01);
    cpu.set_flag_n(true);

    cpu.execute().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_rol_carry_into_bit_zero() {
    // ROL A
    let mut cpu = setup_cpu(&[0x2A]);
    cpu.set_a(0x80);
    cpu.set_flag_c(true);

    cpu.execute().unwrap();

    assert_eq!(cpu.a(), 0x01);
    assert!(cpu.flag_c());
}

#[test]
fn test_ror_carry_into_bit_seven() {
    // ROR A
    let mut cpu = setup_cpu(&[0x6A]);
    cpu.set_a(0x02);
    cpu.set_flag_c(true);

    cpu.execute().unwrap();

    assert_eq!(cpu.a(), 0x81);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_ror_absolute_x() {
    // ROR $1000,X always takes 7 cycles
    let mut cpu = setup_cpu(&[0x7E, 0x00, 0x10]);
    cpu.set_x(0x01);
    cpu.memory_mut().write(0x1001, 0x03).unwrap();

    let cycles = cpu.execute().unwrap();

    assert_eq!(cpu.memory().read(0x1001), Ok(0x01));
    assert!(cpu.flag_c());
    assert_eq!(cycles, 7);
}

// ========== Increment / Decrement ==========

#[test]
fn test_inc_zero_page_wraps() {
    // INC $10
    let mut cpu = setup_cpu(&[0xE6, 0x10]);
    cpu.memory_mut().write(0x0010, 0xFF).unwrap();

    let cycles = cpu.execute().unwrap();

    assert_eq!(cpu.memory().read(0x0010), Ok(0x00));
    assert!(cpu.flag_z());
    assert_eq!(cycles, 5);
}

#[test]
fn test_dec_absolute() {
    // DEC $2000
    let mut cpu = setup_cpu(&[0xCE, 0x00, 0x20]);
    cpu.memory_mut().write(0x2000, 0x00).unwrap();
    cpu.set_flag_c(true);

    let cycles = cpu.execute().unwrap();

    assert_eq!(cpu.memory().read(0x2000), Ok(0xFF));
    assert!(cpu.flag_n());
    assert!(cpu.flag_c());
    assert_eq!(cycles, 6);
}

#[test]
fn test_inx_wraps() {
    // INX
    let mut cpu = setup_cpu(&[0xE8]);
    cpu.set_x(0xFF);

    let cycles = cpu.execute().unwrap();

    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());
    assert_eq!(cycles, 2);
}

#[test]
fn test_iny() {
    let mut cpu = setup_cpu(&[0xC8]);
    cpu.set_y(0x7F);

    cpu.execute().unwrap();

    assert_eq!(cpu.y(), 0x80);
    assert!(cpu.flag_n());
}

#[test]
fn test_dex_to_zero() {
    let mut cpu = setup_cpu(&[0xCA]);
    cpu.set_x(0x01);

    cpu.execute().unwrap();

    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_dey_wraps() {
    let mut cpu = setup_cpu(&[0x88]);

    cpu.execute().unwrap();

    assert_eq!(cpu.y(), 0xFF);
    assert!(cpu.flag_n());
}
