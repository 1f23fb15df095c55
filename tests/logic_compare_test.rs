//! Tests for the bitwise and compare instructions: AND, ORA, EOR, BIT, CMP,
//! CPX and CPY.

use cpu6502::{FlatMemory, MemoryBus, SystemClock, CPU};

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory, SystemClock> {
    let mut memory = FlatMemory::new();
    memory.load_image(program, 0x0200).unwrap();
    CPU::new(memory, SystemClock::new())
}

// ========== AND / ORA / EOR ==========

#[test]
fn test_and_immediate() {
    // AND #$0F
    let mut cpu = setup_cpu(&[0x29, 0x0F]);
    cpu.set_a(0xF3);

    let cycles = cpu.execute().unwrap();

    assert_eq!(cpu.a(), 0x03);
    assert!(!cpu.flag_z());
    assert_eq!(cycles, 2);
}

#[test]
fn test_and_to_zero() {
    let mut cpu = setup_cpu(&[0x29, 0x0F]);
    cpu.set_a(0xF0);

    cpu.execute().unwrap();

    assert!(cpu.flag_z());
}

#[test]
fn test_ora_sets_negative() {
    // ORA #$80
    let mut cpu = setup_cpu(&[0x09, 0x80]);
    cpu.set_a(0x01);

    cpu.execute().unwrap();

    assert_eq!(cpu.a(), 0x81);
    assert!(cpu.flag_n());
}

#[test]
fn test_eor_self_cancels() {
    // EOR $10
    let mut cpu = setup_cpu(&[0x45, 0x10]);
    cpu.memory_mut().write(0x0010, 0xA5).unwrap();
    cpu.set_a(0xA5);

    let cycles = cpu.execute().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert_eq!(cycles, 3);
}

// ========== BIT ==========

#[test]
fn test_bit_copies_bits_7_and_6() {
    // BIT $10
    let mut cpu = setup_cpu(&[0x24, 0x10]);
    cpu.memory_mut().write(0x0010, 0xC0).unwrap();
    cpu.set_a(0xFF);

    cpu.execute().unwrap();

    assert!(cpu.flag_n());
    assert!(cpu.flag_v());
    assert!(!cpu.flag_z());
    assert_eq!(cpu.a(), 0xFF);
}

#[test]
fn test_bit_zero_from_and() {
    // BIT $1000
    let mut cpu = setup_cpu(&[0x2C, 0x00, 0x10]);
    cpu.memory_mut().write(0x1000, 0x0F).unwrap();
    cpu.set_a(0xF0);
    cpu.set_flag_n(true);
    cpu.set_flag_v(true);

    let cycles = cpu.execute().unwrap();

    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
    assert!(!cpu.flag_v());
    assert_eq!(cycles, 4);
}

// ========== Compare ==========

#[test]
fn test_cmp_equal() {
    // CMP #$40
    let mut cpu = setup_cpu(&[0xC9, 0x40]);
    cpu.set_a(0x40);

    cpu.execute().unwrap();

    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
}

#[test]
fn test_cmp_less_than() {
    let mut cpu = setup_cpu(&[0xC9, 0x41]);
    cpu.set_a(0x40);

    cpu.execute().unwrap();

    assert!(!cpu.flag_z());
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_cmp_greater_than_unsigned() {
    let mut cpu = setup_cpu(&[0xC9, 0x01]);
    cpu.set_a(0xFF);

    cpu.execute().unwrap();

    assert!(cpu.flag_c());
    assert!(cpu.flag_n());
    assert_eq!(cpu.a(), 0xFF);
}

#[test]
fn test_cpx_zero_page() {
    // CPX $20
    let mut cpu = setup_cpu(&[0xE4, 0x20]);
    cpu.memory_mut().write(0x0020, 0x10).unwrap();
    cpu.set_x(0x10);

    let cycles = cpu.execute().unwrap();

    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
    assert_eq!(cycles, 3);
}

#[test]
fn test_cpy_absolute() {
    // CPY $1234
    let mut cpu = setup_cpu(&[0xCC, 0x34, 0x12]);
    cpu.memory_mut().write(0x1234, 0x05).unwrap();
    cpu.set_y(0x03);

    let cycles = cpu.execute().unwrap();

    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
    assert_eq!(cycles, 4);
}
