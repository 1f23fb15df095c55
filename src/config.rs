//! # CPU Configuration
//!
//! `CpuConfig` captures the handful of power-on and variant choices that real
//! systems built around the 6502 disagree on. The defaults model a bare test
//! bench: execution starts at a fixed address, the stack is empty and decimal
//! arithmetic behaves like the NMOS part.

/// Where `reset()` points the program counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartAddress {
    /// Start at a fixed address without touching the bus.
    Fixed(u16),

    /// Load PC from the RESET vector at `$FFFC/$FFFD` and set the
    /// interrupt-disable flag, as the hardware reset sequence does.
    ResetVector,
}

/// What `execute()` does with an opcode that is not part of the documented set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IllegalOpcodePolicy {
    /// Treat it as a one-byte, two-cycle no-op.
    #[default]
    Nop,

    /// Lock up: return `ExecutionError::IllegalOpcode` and leave PC on the opcode.
    Halt,
}

/// Power-on and variant settings for a `CPU`.
///
/// # Examples
///
/// ```
/// use cpu6502::{CpuConfig, IllegalOpcodePolicy, StartAddress};
///
/// // A Ricoh 2A03 style core booting through the reset vector
/// let config = CpuConfig::hardware_reset()
///     .with_decimal_mode(false)
///     .with_illegal_opcodes(IllegalOpcodePolicy::Halt);
///
/// assert_eq!(config.start, StartAddress::ResetVector);
/// assert_eq!(config.stack_pointer, 0xFD);
/// assert!(!config.decimal_mode);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuConfig {
    /// Program counter source on reset.
    pub start: StartAddress,

    /// Stack pointer value after reset.
    pub stack_pointer: u8,

    /// Whether ADC/SBC honour the D flag with BCD arithmetic.
    pub decimal_mode: bool,

    /// Handling of undocumented opcodes.
    pub illegal_opcodes: IllegalOpcodePolicy,
}

/// Default start address used by test benches.
pub const DEFAULT_START: u16 = 0x0200;

impl CpuConfig {
    /// Settings matching the hardware reset sequence: PC from the RESET vector,
    /// S = `$FD`, interrupts disabled.
    pub fn hardware_reset() -> Self {
        Self {
            start: StartAddress::ResetVector,
            stack_pointer: 0xFD,
            ..Self::default()
        }
    }

    pub fn with_start(mut self, start: StartAddress) -> Self {
        self.start = start;
        self
    }

    pub fn with_stack_pointer(mut self, stack_pointer: u8) -> Self {
        self.stack_pointer = stack_pointer;
        self
    }

    pub fn with_decimal_mode(mut self, enabled: bool) -> Self {
        self.decimal_mode = enabled;
        self
    }

    pub fn with_illegal_opcodes(mut self, policy: IllegalOpcodePolicy) -> Self {
        self.illegal_opcodes = policy;
        self
    }
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            start: StartAddress::Fixed(DEFAULT_START),
            stack_pointer: 0xFF,
            decimal_mode: true,
            illegal_opcodes: IllegalOpcodePolicy::Nop,
        }
    }
}
