//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all 6502 instructions, organized by category.
//! Each instruction is a standalone function taking the CPU after the addressing
//! resolver has run; the handler performs the data access cycles itself.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::{AddressingMode, Clock, ExecutionError, MemoryBus, Mnemonic, CPU};

/// Runs the handler for `mnemonic`. The resolver for `mode` must already have run.
pub(crate) fn execute<B: MemoryBus, C: Clock>(
    cpu: &mut CPU<B, C>,
    mnemonic: Mnemonic,
    mode: AddressingMode,
) -> Result<(), ExecutionError> {
    match mnemonic {
        Mnemonic::Adc => alu::execute_adc(cpu),
        Mnemonic::And => alu::execute_and(cpu),
        Mnemonic::Asl => shifts::execute_asl(cpu, mode),
        Mnemonic::Bcc => branches::execute_bcc(cpu),
        Mnemonic::Bcs => branches::execute_bcs(cpu),
        Mnemonic::Beq => branches::execute_beq(cpu),
        Mnemonic::Bmi => branches::execute_bmi(cpu),
        Mnemonic::Bne => branches::execute_bne(cpu),
        Mnemonic::Bpl => branches::execute_bpl(cpu),
        Mnemonic::Bvc => branches::execute_bvc(cpu),
        Mnemonic::Bvs => branches::execute_bvs(cpu),
        Mnemonic::Bit => alu::execute_bit(cpu),
        Mnemonic::Brk => control::execute_brk(cpu),
        Mnemonic::Clc => flags::execute_clc(cpu),
        Mnemonic::Cld => flags::execute_cld(cpu),
        Mnemonic::Cli => flags::execute_cli(cpu),
        Mnemonic::Clv => flags::execute_clv(cpu),
        Mnemonic::Cmp => alu::execute_cmp(cpu),
        Mnemonic::Cpx => alu::execute_cpx(cpu),
        Mnemonic::Cpy => alu::execute_cpy(cpu),
        Mnemonic::Dec => inc_dec::execute_dec(cpu),
        Mnemonic::Dex => inc_dec::execute_dex(cpu),
        Mnemonic::Dey => inc_dec::execute_dey(cpu),
        Mnemonic::Eor => alu::execute_eor(cpu),
        Mnemonic::Inc => inc_dec::execute_inc(cpu),
        Mnemonic::Inx => inc_dec::execute_inx(cpu),
        Mnemonic::Iny => inc_dec::execute_iny(cpu),
        Mnemonic::Jmp => control::execute_jmp(cpu),
        Mnemonic::Jsr => control::execute_jsr(cpu),
        Mnemonic::Lda => load_store::execute_lda(cpu),
        Mnemonic::Ldx => load_store::execute_ldx(cpu),
        Mnemonic::Ldy => load_store::execute_ldy(cpu),
        Mnemonic::Lsr => shifts::execute_lsr(cpu, mode),
        Mnemonic::Nop | Mnemonic::Illegal => control::execute_nop(cpu),
        Mnemonic::Ora => alu::execute_ora(cpu),
        Mnemonic::Pha => stack::execute_pha(cpu),
        Mnemonic::Php => stack::execute_php(cpu),
        Mnemonic::Pla => stack::execute_pla(cpu),
        Mnemonic::Plp => stack::execute_plp(cpu),
        Mnemonic::Rol => shifts::execute_rol(cpu, mode),
        Mnemonic::Ror => shifts::execute_ror(cpu, mode),
        Mnemonic::Rti => control::execute_rti(cpu),
        Mnemonic::Rts => control::execute_rts(cpu),
        Mnemonic::Sbc => alu::execute_sbc(cpu),
        Mnemonic::Sec => flags::execute_sec(cpu),
        Mnemonic::Sed => flags::execute_sed(cpu),
        Mnemonic::Sei => flags::execute_sei(cpu),
        Mnemonic::Sta => load_store::execute_sta(cpu),
        Mnemonic::Stx => load_store::execute_stx(cpu),
        Mnemonic::Sty => load_store::execute_sty(cpu),
        Mnemonic::Tax => transfer::execute_tax(cpu),
        Mnemonic::Tay => transfer::execute_tay(cpu),
        Mnemonic::Tsx => transfer::execute_tsx(cpu),
        Mnemonic::Txa => transfer::execute_txa(cpu),
        Mnemonic::Txs => transfer::execute_txs(cpu),
        Mnemonic::Tya => transfer::execute_tya(cpu),
    }
}
