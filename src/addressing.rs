//! # Addressing Modes
//!
//! This module defines the 13 addressing modes of the 6502 and the resolvers
//! that turn an instruction's operand bytes into an effective address.
//!
//! Resolvers run right after the opcode fetch. Each one consumes exactly the
//! bus and filler cycles the hardware spends on address calculation; the
//! operation handler then performs the data access itself. Indexed modes that
//! can carry into the high address byte record two pending conditions on the
//! CPU for the handler to settle:
//!
//! - `page_crossed`: the index add actually carried. Read instructions pay one
//!   extra cycle only in this case.
//! - `index_penalty`: the mode is one of `AbsoluteX`, `AbsoluteY`, `IndirectY`.
//!   Write and read-modify-write instructions always pay the extra cycle.

use crate::clock::Clock;
use crate::memory::MemoryBus;
use crate::{ExecutionError, CPU};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions, relative to the next instruction.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

impl<B: MemoryBus, C: Clock> CPU<B, C> {
    /// Runs the resolver for `mode`, leaving the result in `effective_address`.
    pub(crate) fn resolve(&mut self, mode: AddressingMode) -> Result<(), ExecutionError> {
        match mode {
            AddressingMode::Implicit | AddressingMode::Accumulator => {
                // The hardware reads the next byte and discards it.
                self.idle();
            }
            AddressingMode::Immediate => {
                self.effective_address = self.pc;
                self.pc = self.pc.wrapping_add(1);
            }
            AddressingMode::ZeroPage => {
                self.effective_address = self.fetch()? as u16;
            }
            AddressingMode::ZeroPageX => self.zero_page_indexed(self.x)?,
            AddressingMode::ZeroPageY => self.zero_page_indexed(self.y)?,
            AddressingMode::Relative => {
                let offset = self.fetch()? as i8;
                self.data = offset as u8;
                self.effective_address = self.pc.wrapping_add(offset as u16);
            }
            AddressingMode::Absolute => {
                self.effective_address = self.fetch_word()?;
            }
            AddressingMode::AbsoluteX => {
                let base = self.fetch_word()?;
                self.index(base, self.x);
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch_word()?;
                self.index(base, self.y);
            }
            AddressingMode::Indirect => {
                let pointer = self.fetch_word()?;
                let lo = self.read(pointer)?;
                // NMOS quirk: the high byte never carries into the next page.
                let hi_addr = (pointer & 0xFF00) | (pointer.wrapping_add(1) & 0x00FF);
                let hi = self.read(hi_addr)?;
                self.effective_address = u16::from_le_bytes([lo, hi]);
            }
            AddressingMode::IndirectX => {
                let pointer = self.fetch()?;
                self.idle();
                let pointer = pointer.wrapping_add(self.x);
                self.effective_address = self.read_zero_page_word(pointer)?;
            }
            AddressingMode::IndirectY => {
                let pointer = self.fetch()?;
                let base = self.read_zero_page_word(pointer)?;
                self.index(base, self.y);
            }
        }

        Ok(())
    }

    fn zero_page_indexed(&mut self, index: u8) -> Result<(), ExecutionError> {
        let base = self.fetch()?;
        self.idle();
        self.effective_address = base.wrapping_add(index) as u16;
        Ok(())
    }

    /// Adds an index to a 16-bit base and records the page-cross conditions.
    fn index(&mut self, base: u16, index: u8) {
        let address = base.wrapping_add(index as u16);
        self.page_crossed = (base & 0xFF00) != (address & 0xFF00);
        self.index_penalty = true;
        self.effective_address = address;
    }

    /// Reads a little-endian pointer from zero page, wrapping at `$FF`.
    fn read_zero_page_word(&mut self, pointer: u8) -> Result<u16, ExecutionError> {
        let lo = self.read(pointer as u16)?;
        let hi = self.read(pointer.wrapping_add(1) as u16)?;
        Ok(u16::from_le_bytes([lo, hi]))
    }
}
