//! Tests for PHA, PHP, PLA and PLP.
//!
//! Tests cover:
//! - Push/pull ordering and stack pointer movement
//! - B and reserved bits forced to 1 in the PHP copy
//! - PLP discarding bits 4 and 5
//! - Stack pointer wrap inside page one

use cpu6502::{FlatMemory, MemoryBus, SystemClock, CPU};

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory, SystemClock> {
    let mut memory = FlatMemory::new();
    memory.load_image(program, 0x0200).unwrap();
    CPU::new(memory, SystemClock::new())
}

// ========== PHA / PLA ==========

#[test]
fn test_pha_writes_then_decrements() {
    let mut cpu = setup_cpu(&[0x48]);
    cpu.set_a(0x42);

    let cycles = cpu.execute().unwrap();

    assert_eq!(cpu.memory().read(0x01FF), Ok(0x42));
    assert_eq!(cpu.sp(), 0xFE);
    assert_eq!(cycles, 3);
}

#[test]
fn test_pha_pla_round_trip() {
    // PHA; LDA #$00; PLA
    let mut cpu = setup_cpu(&[0x48, 0xA9, 0x00, 0x68]);
    cpu.set_a(0x9C);

    cpu.execute().unwrap();
    cpu.execute().unwrap();
    assert_eq!(cpu.a(), 0x00);

    let cycles = cpu.execute().unwrap();

    assert_eq!(cpu.a(), 0x9C);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
    assert_eq!(cpu.sp(), 0xFF);
    assert_eq!(cycles, 4);
}

#[test]
fn test_stack_pointer_wraps_on_push() {
    let mut cpu = setup_cpu(&[0x48]);
    cpu.set_sp(0x00);
    cpu.set_a(0x5A);

    cpu.execute().unwrap();

    assert_eq!(cpu.memory().read(0x0100), Ok(0x5A));
    assert_eq!(cpu.sp(), 0xFF);
}

#[test]
fn test_stack_pointer_wraps_on_pull() {
    let mut cpu = setup_cpu(&[0x68]);
    cpu.memory_mut().write(0x0100, 0x33).unwrap();

    cpu.execute().unwrap();

    assert_eq!(cpu.sp(), 0x00);
    assert_eq!(cpu.a(), 0x33);
}

// ========== PHP / PLP ==========

#[test]
fn test_php_forces_break_and_reserved_bits() {
    let mut cpu = setup_cpu(&[0x08]);
    cpu.set_flag_c(true);
    cpu.set_flag_n(true);

    let cycles = cpu.execute().unwrap();

    assert_eq!(cpu.memory().read(0x01FF), Ok(0xB1));
    assert_eq!(cpu.status(), 0xA1);
    assert_eq!(cycles, 3);
}

#[test]
fn test_plp_discards_bits_four_and_five() {
    let mut cpu = setup_cpu(&[0x28]);
    cpu.memory_mut().write(0x01FF, 0xFF).unwrap();
    cpu.set_sp(0xFE);

    let cycles = cpu.execute().unwrap();

    assert!(cpu.flag_n());
    assert!(cpu.flag_v());
    assert!(cpu.flag_d());
    assert!(cpu.flag_i());
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
    assert_eq!(cpu.status(), 0xEF);
    assert_eq!(cycles, 4);
}

#[test]
fn test_php_plp_round_trip() {
    // PHP; CLC; CLD; PLP
    let mut cpu = setup_cpu(&[0x08, 0x18, 0xD8, 0x28]);
    cpu.set_flag_c(true);
    cpu.set_flag_d(true);
    cpu.set_flag_v(true);
    let before = cpu.status();

    for _ in 0..4 {
        cpu.execute().unwrap();
    }

    assert_eq!(cpu.status(), before);
    assert_eq!(cpu.sp(), 0xFF);
}
