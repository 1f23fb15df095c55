//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: N, V, D, I, Z, C (individual bool fields)
//! - **Addressing scratch**: effective address, data latch and the pending
//!   page-cross conditions, valid for one instruction only
//!
//! ## Timing Model
//!
//! Every cycle is either one bus access or one internal cycle, and each ticks
//! the clock exactly once. Cycle counts therefore fall out of the access
//! sequence of each instruction instead of being added from the opcode table.
//!
//! ## Execution Model
//!
//! - `execute()`: Execute one instruction (or one interrupt entry sequence)
//! - `run()`: Execute until a stop predicate holds
//! - `run_until_trap()`: Execute until an instruction jumps to itself

use std::fmt;

use crate::clock::Clock;
use crate::config::{CpuConfig, IllegalOpcodePolicy, StartAddress};
use crate::instructions;
use crate::memory::MemoryBus;
use crate::opcodes::{Mnemonic, OPCODE_TABLE};
use crate::status;
use crate::ExecutionError;

/// NMI vector (low byte; high byte follows).
pub const NMI_VECTOR: u16 = 0xFFFA;
/// RESET vector (low byte; high byte follows).
pub const RESET_VECTOR: u16 = 0xFFFC;
/// IRQ/BRK vector (low byte; high byte follows).
pub const IRQ_VECTOR: u16 = 0xFFFE;
/// Base address of the hardware stack.
pub const STACK_PAGE: u16 = 0x0100;

/// Source of an interrupt entry sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Interrupt {
    Brk,
    Irq,
    Nmi,
}

impl Interrupt {
    fn vector(self) -> u16 {
        match self {
            Interrupt::Brk | Interrupt::Irq => IRQ_VECTOR,
            Interrupt::Nmi => NMI_VECTOR,
        }
    }
}

/// Snapshot of the programmer-visible registers.
///
/// The `Display` form is the trace line format used by the `log` output:
///
/// ```
/// use cpu6502::Registers;
///
/// let regs = Registers { a: 0x01, x: 0x02, y: 0x03, pc: 0x0200, sp: 0xFF, status: 0x21 };
/// assert_eq!(
///     regs.to_string(),
///     "PC:$0200 A:$01 X:$02 Y:$03 SP:$FF P:$21 [--1----C]"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub pc: u16,
    pub sp: u8,
    pub status: u8,
}

impl fmt::Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PC:${:04X} A:${:02X} X:${:02X} Y:${:02X} SP:${:02X} P:${:02X} [{}]",
            self.pc,
            self.a,
            self.x,
            self.y,
            self.sp,
            self.status,
            status::describe(self.status)
        )
    }
}

/// Totals reported by `run`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Instructions (and interrupt entries) executed.
    pub instructions: u64,
    /// Cycles consumed by them.
    pub cycles: u64,
}

/// 6502 CPU state and execution context.
///
/// The CPU owns its memory bus and its clock; both are generic so any storage
/// backend or timing source can be plugged in.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus, SystemClock};
///
/// let mut memory = FlatMemory::new();
/// memory.load_image(&[0xA9, 0x80], 0x0200).unwrap(); // LDA #$80
///
/// let mut cpu = CPU::new(memory, SystemClock::new());
/// assert_eq!(cpu.pc(), 0x0200);
///
/// let cycles = cpu.execute().unwrap();
/// assert_eq!(cycles, 2);
/// assert_eq!(cpu.a(), 0x80);
/// assert!(cpu.flag_n());
/// ```
pub struct CPU<B: MemoryBus, C: Clock> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    /// Negative flag (set if bit 7 of result is 1)
    pub(crate) flag_n: bool,

    /// Overflow flag (set on signed overflow)
    pub(crate) flag_v: bool,

    /// Decimal mode flag (enables BCD arithmetic)
    pub(crate) flag_d: bool,

    /// Interrupt disable flag (blocks IRQ when set)
    pub(crate) flag_i: bool,

    /// Zero flag (set if result is zero)
    pub(crate) flag_z: bool,

    /// Carry flag (set on unsigned overflow/underflow)
    pub(crate) flag_c: bool,

    /// Effective address computed by the current instruction's resolver
    pub(crate) effective_address: u16,

    /// Last byte moved over the data bus by a handler
    pub(crate) data: u8,

    /// The index add of the current instruction carried into the high byte
    pub(crate) page_crossed: bool,

    /// The current instruction uses an indexed mode with a fixup cycle
    pub(crate) index_penalty: bool,

    /// Level of the external IRQ input
    irq_line: bool,

    /// Latched falling edge of the NMI input
    nmi_pending: bool,

    pub(crate) config: CpuConfig,

    pub(crate) memory: B,

    pub(crate) clock: C,
}

impl<B: MemoryBus, C: Clock> CPU<B, C> {
    /// Creates a CPU with the default configuration and resets it.
    ///
    /// Execution starts at `$0200` with S = `$FF` and all flags clear.
    pub fn new(memory: B, clock: C) -> Self {
        let config = CpuConfig::default();
        let mut cpu = Self::unstarted(memory, clock, config);
        if let StartAddress::Fixed(start) = config.start {
            cpu.power_on(start);
        }
        cpu
    }

    /// Creates a CPU with `config` and resets it.
    ///
    /// # Errors
    ///
    /// Fails if the configuration reads the RESET vector and the bus does not
    /// cover `$FFFC/$FFFD`.
    pub fn with_config(memory: B, clock: C, config: CpuConfig) -> Result<Self, ExecutionError> {
        let mut cpu = Self::unstarted(memory, clock, config);
        cpu.reset()?;
        Ok(cpu)
    }

    fn unstarted(memory: B, clock: C, config: CpuConfig) -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            sp: 0,
            flag_n: false,
            flag_v: false,
            flag_d: false,
            flag_i: false,
            flag_z: false,
            flag_c: false,
            effective_address: 0,
            data: 0,
            page_crossed: false,
            index_penalty: false,
            irq_line: false,
            nmi_pending: false,
            config,
            memory,
            clock,
        }
    }

    /// Puts the registers into their power-on state.
    ///
    /// A, X and Y are zeroed, S is set from the configuration and every flag is
    /// cleared. With `StartAddress::ResetVector` the PC is read from
    /// `$FFFC/$FFFD` and the interrupt-disable flag is set. A latched NMI is
    /// discarded; the IRQ line keeps the level last set through `irq()`. The
    /// bus and clock are left alone; reset them through `memory_mut()` /
    /// `clock_mut()`.
    pub fn reset(&mut self) -> Result<(), ExecutionError> {
        match self.config.start {
            StartAddress::Fixed(start) => self.power_on(start),
            StartAddress::ResetVector => {
                let lo = self.memory.read(RESET_VECTOR)?;
                let hi = self.memory.read(RESET_VECTOR + 1)?;
                self.power_on(u16::from_le_bytes([lo, hi]));
                self.flag_i = true;
            }
        }

        log::debug!("reset: {}", self.registers());
        Ok(())
    }

    fn power_on(&mut self, start: u16) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.pc = start;
        self.sp = self.config.stack_pointer;
        self.flag_n = false;
        self.flag_v = false;
        self.flag_d = false;
        self.flag_i = false;
        self.flag_z = false;
        self.flag_c = false;
        self.effective_address = 0;
        self.data = 0;
        self.page_crossed = false;
        self.index_penalty = false;
        self.nmi_pending = false;
    }

    /// Executes one instruction and returns the cycles it consumed.
    ///
    /// Before fetching, the interrupt inputs are sampled: a latched NMI, or an
    /// active IRQ while the I flag is clear, runs the 7-cycle interrupt entry
    /// sequence instead of an instruction.
    ///
    /// # Errors
    ///
    /// - `ExecutionError::Bus` if an access falls outside the bus
    /// - `ExecutionError::IllegalOpcode` for undocumented opcodes under
    ///   `IllegalOpcodePolicy::Halt`
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory, MemoryBus, SystemClock};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load_image(&[0x69, 0x01], 0x0200).unwrap(); // ADC #$01
    ///
    /// let mut cpu = CPU::new(mem, SystemClock::new());
    /// cpu.set_a(0xFF);
    /// cpu.execute().unwrap();
    ///
    /// assert_eq!(cpu.a(), 0x00);
    /// assert!(cpu.flag_c());
    /// assert!(cpu.flag_z());
    /// assert!(!cpu.flag_v());
    /// ```
    pub fn execute(&mut self) -> Result<u64, ExecutionError> {
        let start = self.clock.cycle_count();

        self.effective_address = 0;
        self.data = 0;
        self.page_crossed = false;
        self.index_penalty = false;

        if self.nmi_pending {
            self.nmi_pending = false;
            self.interrupt(Interrupt::Nmi)?;
            return Ok(self.clock.cycle_count() - start);
        }

        if !self.flag_i && (self.irq_line || self.memory.irq_active()) {
            self.interrupt(Interrupt::Irq)?;
            return Ok(self.clock.cycle_count() - start);
        }

        let address = self.pc;
        let opcode = self.fetch()?;
        let metadata = OPCODE_TABLE[opcode as usize];

        log::trace!(
            "{:04X}  {:02X}  {}  {}",
            address,
            opcode,
            metadata.mnemonic,
            self.registers()
        );

        if metadata.mnemonic == Mnemonic::Illegal {
            match self.config.illegal_opcodes {
                IllegalOpcodePolicy::Nop => {
                    log::warn!("illegal opcode ${:02X} at ${:04X} treated as NOP", opcode, address);
                }
                IllegalOpcodePolicy::Halt => {
                    self.pc = address;
                    return Err(ExecutionError::IllegalOpcode { opcode, address });
                }
            }
        }

        self.resolve(metadata.addressing_mode)?;
        instructions::execute(self, metadata.mnemonic, metadata.addressing_mode)?;

        Ok(self.clock.cycle_count() - start)
    }

    /// Executes instructions until `stop` returns true.
    ///
    /// The predicate is evaluated after every instruction, so at least one
    /// instruction always runs. An unreachable predicate never returns.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory, MemoryBus, SystemClock};
    ///
    /// let mut mem = FlatMemory::new();
    /// // LDX #$05; DEX; BNE -3
    /// mem.load_image(&[0xA2, 0x05, 0xCA, 0xD0, 0xFD], 0x0200).unwrap();
    ///
    /// let mut cpu = CPU::new(mem, SystemClock::new());
    /// let summary = cpu.run(|cpu| cpu.pc() == 0x0205).unwrap();
    ///
    /// assert_eq!(cpu.x(), 0);
    /// assert_eq!(summary.instructions, 11);
    /// ```
    pub fn run<F>(&mut self, mut stop: F) -> Result<RunSummary, ExecutionError>
    where
        F: FnMut(&Self) -> bool,
    {
        let mut summary = RunSummary::default();

        loop {
            summary.cycles += self.execute()?;
            summary.instructions += 1;

            if stop(self) {
                log::info!(
                    "run stopped after {} instructions, {} cycles: {}",
                    summary.instructions,
                    summary.cycles,
                    self.registers()
                );
                return Ok(summary);
            }
        }
    }

    /// Executes until an instruction leaves PC where it started (`JMP *`,
    /// `BNE *`, ...) and returns that address.
    ///
    /// Conformance ROMs signal both success and failure with such traps.
    pub fn run_until_trap(&mut self) -> Result<u16, ExecutionError> {
        loop {
            let before = self.pc;
            self.execute()?;
            if self.pc == before {
                log::info!("trapped at ${:04X} after {} cycles", before, self.cycles());
                return Ok(before);
            }
        }
    }

    /// Drives the IRQ input. The line is level-sensitive: while it is held
    /// active and I is clear, every `execute()` enters the IRQ handler.
    pub fn irq(&mut self, active: bool) {
        self.irq_line = active;
    }

    /// Signals a falling edge on the NMI input. Serviced by the next `execute()`.
    pub fn nmi(&mut self) {
        self.nmi_pending = true;
    }

    /// Runs the interrupt entry sequence shared by BRK, IRQ and NMI.
    pub(crate) fn interrupt(&mut self, kind: Interrupt) -> Result<(), ExecutionError> {
        if kind != Interrupt::Brk {
            // Two cycles spent on the discarded opcode fetch.
            self.idle();
            self.idle();
        }

        log::debug!("{:?} entry from ${:04X}", kind, self.pc);

        let [lo, hi] = self.pc.to_le_bytes();
        self.push(hi)?;
        self.push(lo)?;

        let pushed = match kind {
            Interrupt::Brk => self.status() | status::BREAK,
            Interrupt::Irq | Interrupt::Nmi => self.status() & !status::BREAK,
        };
        self.push(pushed)?;
        self.flag_i = true;

        let vector = kind.vector();
        let lo = self.read(vector)?;
        let hi = self.read(vector.wrapping_add(1))?;
        self.pc = u16::from_le_bytes([lo, hi]);

        Ok(())
    }

    // ========== Bus Cycles ==========

    /// One bus read cycle.
    pub(crate) fn read(&mut self, address: u16) -> Result<u8, ExecutionError> {
        let value = self.memory.read(address)?;
        self.clock.tick();
        Ok(value)
    }

    /// One bus write cycle.
    pub(crate) fn write(&mut self, address: u16, value: u8) -> Result<(), ExecutionError> {
        self.memory.write(address, value)?;
        self.clock.tick();
        Ok(())
    }

    /// One internal cycle without a bus access.
    pub(crate) fn idle(&mut self) {
        self.clock.tick();
    }

    /// Reads the byte at PC and advances PC.
    pub(crate) fn fetch(&mut self) -> Result<u8, ExecutionError> {
        let value = self.read(self.pc)?;
        self.pc = self.pc.wrapping_add(1);
        Ok(value)
    }

    /// Reads a little-endian word at PC and advances PC past it.
    pub(crate) fn fetch_word(&mut self) -> Result<u16, ExecutionError> {
        let lo = self.fetch()?;
        let hi = self.fetch()?;
        Ok(u16::from_le_bytes([lo, hi]))
    }

    /// Writes to `$0100 + S`, then decrements S.
    pub(crate) fn push(&mut self, value: u8) -> Result<(), ExecutionError> {
        self.write(STACK_PAGE | self.sp as u16, value)?;
        self.sp = self.sp.wrapping_sub(1);
        Ok(())
    }

    /// Increments S, then reads from `$0100 + S`.
    pub(crate) fn pull(&mut self) -> Result<u8, ExecutionError> {
        self.sp = self.sp.wrapping_add(1);
        self.read(STACK_PAGE | self.sp as u16)
    }

    /// Reads the operand of a read instruction, paying the page-cross cycle
    /// only when the index add carried.
    pub(crate) fn load(&mut self) -> Result<u8, ExecutionError> {
        if self.page_crossed {
            self.idle();
        }
        self.data = self.read(self.effective_address)?;
        Ok(self.data)
    }

    /// Writes the operand of a write instruction. Indexed modes always pay the
    /// fixup cycle, whether or not the index add carried.
    pub(crate) fn store(&mut self, value: u8) -> Result<(), ExecutionError> {
        if self.index_penalty {
            self.idle();
        }
        self.data = value;
        self.write(self.effective_address, value)
    }

    /// Read-modify-write sequence: read, one modify cycle, write back.
    pub(crate) fn modify<F>(&mut self, op: F) -> Result<u8, ExecutionError>
    where
        F: FnOnce(&mut Self, u8) -> u8,
    {
        if self.index_penalty {
            self.idle();
        }
        let value = self.read(self.effective_address)?;
        self.idle();
        let result = op(self, value);
        self.data = result;
        self.write(self.effective_address, result)?;
        Ok(result)
    }

    /// Sets Z and N from `value`.
    pub(crate) fn set_zn(&mut self, value: u8) {
        self.flag_z = value == 0;
        self.flag_n = (value & 0x80) != 0;
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register as a packed byte.
    ///
    /// Bit layout (NV-BDIZC):
    /// - Bit 7: N (Negative)
    /// - Bit 6: V (Overflow)
    /// - Bit 5: (unused, always 1)
    /// - Bit 4: B (Break, always 0 here; only set in pushed copies)
    /// - Bit 3: D (Decimal)
    /// - Bit 2: I (Interrupt Disable)
    /// - Bit 1: Z (Zero)
    /// - Bit 0: C (Carry)
    pub fn status(&self) -> u8 {
        let mut p = status::UNUSED;

        if self.flag_n {
            p |= status::NEGATIVE;
        }
        if self.flag_v {
            p |= status::OVERFLOW;
        }
        if self.flag_d {
            p |= status::DECIMAL;
        }
        if self.flag_i {
            p |= status::IRQ_DISABLE;
        }
        if self.flag_z {
            p |= status::ZERO;
        }
        if self.flag_c {
            p |= status::CARRY;
        }

        p
    }

    /// Returns a copy of all programmer-visible registers.
    pub fn registers(&self) -> Registers {
        Registers {
            a: self.a,
            x: self.x,
            y: self.y,
            pc: self.pc,
            sp: self.sp,
            status: self.status(),
        }
    }

    /// Effective address computed by the most recent instruction.
    pub fn effective_address(&self) -> u16 {
        self.effective_address
    }

    /// Total cycles counted by the clock since its last reset.
    pub fn cycles(&self) -> u64 {
        self.clock.cycle_count()
    }

    /// Active configuration.
    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    /// Whether the IRQ input is currently held active.
    pub fn irq_line(&self) -> bool {
        self.irq_line
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.flag_n
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.flag_v
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.flag_d
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.flag_i
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flag_z
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flag_c
    }

    // ========== Setters (drivers and tests, between instructions) ==========

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Unpacks a status byte into the flags. Bits 4 and 5 are ignored.
    pub fn set_status(&mut self, value: u8) {
        self.flag_n = value & status::NEGATIVE != 0;
        self.flag_v = value & status::OVERFLOW != 0;
        self.flag_d = value & status::DECIMAL != 0;
        self.flag_i = value & status::IRQ_DISABLE != 0;
        self.flag_z = value & status::ZERO != 0;
        self.flag_c = value & status::CARRY != 0;
    }

    pub fn set_flag_n(&mut self, value: bool) {
        self.flag_n = value;
    }

    pub fn set_flag_v(&mut self, value: bool) {
        self.flag_v = value;
    }

    pub fn set_flag_d(&mut self, value: bool) {
        self.flag_d = value;
    }

    pub fn set_flag_i(&mut self, value: bool) {
        self.flag_i = value;
    }

    pub fn set_flag_z(&mut self, value: bool) {
        self.flag_z = value;
    }

    pub fn set_flag_c(&mut self, value: bool) {
        self.flag_c = value;
    }

    // ========== Collaborators ==========

    /// Shared access to the memory bus.
    pub fn memory(&self) -> &B {
        &self.memory
    }

    /// Mutable access to the memory bus, e.g. to load a program.
    pub fn memory_mut(&mut self) -> &mut B {
        &mut self.memory
    }

    /// Shared access to the clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Mutable access to the clock, e.g. to change pacing.
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Consumes the CPU and hands back its bus and clock.
    pub fn into_parts(self) -> (B, C) {
        (self.memory, self.clock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BusError, FlatMemory, SystemClock};

    fn cpu_with(program: &[u8]) -> CPU<FlatMemory, SystemClock> {
        let mut mem = FlatMemory::new();
        mem.load_image(program, 0x0200).unwrap();
        CPU::new(mem, SystemClock::new())
    }

    #[test]
    fn test_cpu_initialization() {
        let cpu = cpu_with(&[]);

        assert_eq!(cpu.pc(), 0x0200);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.x(), 0x00);
        assert_eq!(cpu.y(), 0x00);
        assert_eq!(cpu.cycles(), 0);
        assert_eq!(cpu.status(), status::UNUSED);
    }

    #[test]
    fn test_status_register_round_trip() {
        let mut cpu = cpu_with(&[]);

        cpu.set_status(0xFF);

        // B never sticks, bit 5 always reads 1
        assert_eq!(cpu.status(), 0xEF);

        cpu.set_status(0x00);
        assert_eq!(cpu.status(), 0x20);
    }

    #[test]
    fn test_scratch_cleared_between_instructions() {
        // LDA $12FF,X crossing a page; then NOP
        let mut cpu = cpu_with(&[0xBD, 0xFF, 0x12, 0xEA]);
        cpu.set_x(0x01);

        cpu.execute().unwrap();
        assert!(cpu.page_crossed);
        assert_eq!(cpu.effective_address(), 0x1300);

        cpu.execute().unwrap();
        assert!(!cpu.page_crossed);
        assert!(!cpu.index_penalty);
        assert_eq!(cpu.effective_address(), 0x0000);
    }

    #[test]
    fn test_push_pull_ordering() {
        let mut cpu = cpu_with(&[]);

        cpu.push(0xAB).unwrap();
        assert_eq!(cpu.sp(), 0xFE);
        assert_eq!(cpu.memory().read(0x01FF), Ok(0xAB));

        assert_eq!(cpu.pull().unwrap(), 0xAB);
        assert_eq!(cpu.sp(), 0xFF);
    }

    #[test]
    fn test_stack_pointer_wraps() {
        let mut cpu = cpu_with(&[]);
        cpu.set_sp(0x00);

        cpu.push(0x11).unwrap();
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.memory().read(0x0100), Ok(0x11));
    }

    #[test]
    fn test_bus_fault_aborts_instruction() {
        let mem = FlatMemory::with_size(0x0300);
        let mut cpu = CPU::new(mem, SystemClock::new());
        cpu.memory_mut().load_image(&[0xAD, 0x00, 0x80], 0x0200).unwrap(); // LDA $8000

        let err = cpu.execute().unwrap_err();

        assert_eq!(
            err,
            ExecutionError::Bus(BusError::AddressOutOfRange {
                address: 0x8000,
                size: 0x0300
            })
        );
    }

    #[test]
    fn test_reset_from_vector_sets_interrupt_disable() {
        let mut mem = FlatMemory::new();
        mem.load_image(&[0x00, 0x80], RESET_VECTOR).unwrap();

        let cpu = CPU::with_config(mem, SystemClock::new(), CpuConfig::hardware_reset()).unwrap();

        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.sp(), 0xFD);
        assert!(cpu.flag_i());
    }
}
