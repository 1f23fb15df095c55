//! Tests for BRK, RTI and the hardware interrupt inputs.
//!
//! Tests cover:
//! - BRK stack frame (PC+2, status with B set) and vector fetch
//! - RTI restoring status and PC exactly
//! - IRQ masked by I, level-triggered re-entry, IRQ raised by the bus
//! - NMI ignoring I and being edge-latched
//! - Reset keeping the IRQ line level

use cpu6502::{
    BusError, FlatMemory, MemoryBus, SystemClock, CPU, IRQ_VECTOR, NMI_VECTOR,
};

const HANDLER: u16 = 0x3000;
const NMI_HANDLER: u16 = 0x3800;

/// Creates a CPU with `program` at $0200 and both interrupt vectors set.
fn setup_cpu(program: &[u8]) -> CPU<FlatMemory, SystemClock> {
    let mut memory = FlatMemory::new();
    memory.load_image(program, 0x0200).unwrap();
    memory.load_image(&HANDLER.to_le_bytes(), IRQ_VECTOR).unwrap();
    memory.load_image(&NMI_HANDLER.to_le_bytes(), NMI_VECTOR).unwrap();
    CPU::new(memory, SystemClock::new())
}

// ========== BRK ==========

#[test]
fn test_brk_stack_frame() {
    let mut cpu = setup_cpu(&[0x00, 0xFF]);
    cpu.set_flag_c(true);

    let cycles = cpu.execute().unwrap();

    assert_eq!(cycles, 7);
    assert_eq!(cpu.pc(), HANDLER);
    assert_eq!(cpu.sp(), 0xFC);
    assert!(cpu.flag_i());
    // Return address skips the signature byte
    assert_eq!(cpu.memory().read(0x01FF), Ok(0x02));
    assert_eq!(cpu.memory().read(0x01FE), Ok(0x02));
    // Status copy has B and the reserved bit set
    assert_eq!(cpu.memory().read(0x01FD), Ok(0x31));
}

#[test]
fn test_brk_rti_round_trip() {
    let mut cpu = setup_cpu(&[0x00, 0xFF, 0xEA]);
    cpu.memory_mut().write(HANDLER, 0x40).unwrap(); // RTI
    cpu.set_flag_z(true);

    cpu.execute().unwrap();
    let cycles = cpu.execute().unwrap();

    assert_eq!(cycles, 6);
    assert_eq!(cpu.pc(), 0x0202);
    assert_eq!(cpu.sp(), 0xFF);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_i());
}

// ========== RTI ==========

#[test]
fn test_rti_uses_pulled_address_without_increment() {
    let mut cpu = setup_cpu(&[0x40]);
    cpu.memory_mut().load_image(&[0xC3, 0x34, 0x12], 0x01FD).unwrap();
    cpu.set_sp(0xFC);

    cpu.execute().unwrap();

    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.status(), 0xE3);
    assert_eq!(cpu.sp(), 0xFF);
}

// ========== IRQ ==========

#[test]
fn test_irq_taken_when_enabled() {
    let mut cpu = setup_cpu(&[0xEA]);
    cpu.irq(true);

    let cycles = cpu.execute().unwrap();

    assert_eq!(cycles, 7);
    assert_eq!(cpu.pc(), HANDLER);
    assert!(cpu.flag_i());
    // Interrupted instruction address is pushed as-is
    assert_eq!(cpu.memory().read(0x01FF), Ok(0x02));
    assert_eq!(cpu.memory().read(0x01FE), Ok(0x00));
    // B clear in the status copy
    assert_eq!(cpu.memory().read(0x01FD), Ok(0x20));
}

#[test]
fn test_irq_masked_by_interrupt_disable() {
    let mut cpu = setup_cpu(&[0xEA]);
    cpu.set_flag_i(true);
    cpu.irq(true);

    let cycles = cpu.execute().unwrap();

    assert_eq!(cycles, 2);
    assert_eq!(cpu.pc(), 0x0201);
}

#[test]
fn test_irq_is_level_triggered() {
    // Handler: CLI; ... the line is still held, so the IRQ fires again
    let mut cpu = setup_cpu(&[0xEA]);
    cpu.memory_mut().write(HANDLER, 0x58).unwrap();
    cpu.irq(true);

    cpu.execute().unwrap();
    cpu.execute().unwrap(); // CLI
    cpu.execute().unwrap();

    assert_eq!(cpu.pc(), HANDLER);
    assert_eq!(cpu.sp(), 0xF9);

    cpu.irq(false);
    assert!(!cpu.irq_line());
}

#[test]
fn test_irq_line_held_across_reset() {
    let mut cpu = setup_cpu(&[0xEA]);
    cpu.irq(true);
    cpu.nmi();

    cpu.reset().unwrap();

    assert!(cpu.irq_line());
    // The latched NMI is gone; the held IRQ is taken on the next instruction
    let cycles = cpu.execute().unwrap();
    assert_eq!(cycles, 7);
    assert_eq!(cpu.pc(), HANDLER);
}

/// Flat memory with a device that holds IRQ active.
struct IrqMemory {
    inner: FlatMemory,
    asserted: bool,
}

impl MemoryBus for IrqMemory {
    fn reset(&mut self) {
        self.inner.reset();
    }

    fn read(&self, addr: u16) -> Result<u8, BusError> {
        self.inner.read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) -> Result<(), BusError> {
        // Writing to $D000 acknowledges the device
        if addr == 0xD000 {
            self.asserted = false;
        }
        self.inner.write(addr, value)
    }

    fn load_image(&mut self, image: &[u8], origin: u16) -> Result<(), BusError> {
        self.inner.load_image(image, origin)
    }

    fn irq_active(&self) -> bool {
        self.asserted
    }
}

#[test]
fn test_irq_from_memory_mapped_device() {
    let mut inner = FlatMemory::new();
    inner.load_image(&[0xEA], 0x0200).unwrap();
    inner.load_image(&HANDLER.to_le_bytes(), IRQ_VECTOR).unwrap();
    // Handler: STA $D000; RTI
    inner.load_image(&[0x8D, 0x00, 0xD0, 0x40], HANDLER).unwrap();
    let memory = IrqMemory {
        inner,
        asserted: true,
    };
    let mut cpu = CPU::new(memory, SystemClock::new());

    cpu.execute().unwrap();
    assert_eq!(cpu.pc(), HANDLER);

    cpu.execute().unwrap();
    cpu.execute().unwrap();
    assert_eq!(cpu.pc(), 0x0200);

    // Acknowledged: the NOP now runs
    cpu.execute().unwrap();
    assert_eq!(cpu.pc(), 0x0201);
}

// ========== NMI ==========

#[test]
fn test_nmi_ignores_interrupt_disable() {
    let mut cpu = setup_cpu(&[0xEA]);
    cpu.set_flag_i(true);
    cpu.nmi();

    let cycles = cpu.execute().unwrap();

    assert_eq!(cycles, 7);
    assert_eq!(cpu.pc(), NMI_HANDLER);
    assert_eq!(cpu.memory().read(0x01FD), Ok(0x24));
}

#[test]
fn test_nmi_is_edge_latched() {
    let mut cpu = setup_cpu(&[0xEA]);
    cpu.memory_mut().write(NMI_HANDLER, 0xEA).unwrap();
    cpu.nmi();

    cpu.execute().unwrap();
    let cycles = cpu.execute().unwrap();

    assert_eq!(cycles, 2);
    assert_eq!(cpu.pc(), NMI_HANDLER + 1);
}

#[test]
fn test_nmi_has_priority_over_irq() {
    let mut cpu = setup_cpu(&[0xEA]);
    cpu.irq(true);
    cpu.nmi();

    cpu.execute().unwrap();

    assert_eq!(cpu.pc(), NMI_HANDLER);
}
