//! Bit masks of the packed processor status byte (`NV1BDIZC`).
//!
//! The CPU keeps its flags as individual booleans; these masks define how they
//! are packed when the status register is pushed, pulled or inspected.

/// Bit 0: Carry.
pub const CARRY: u8 = 0b0000_0001;
/// Bit 1: Zero.
pub const ZERO: u8 = 0b0000_0010;
/// Bit 2: Interrupt disable.
pub const IRQ_DISABLE: u8 = 0b0000_0100;
/// Bit 3: Decimal mode.
pub const DECIMAL: u8 = 0b0000_1000;
/// Bit 4: Break. Only exists in status bytes pushed by PHP and BRK.
pub const BREAK: u8 = 0b0001_0000;
/// Bit 5: Unused, always reads as 1.
pub const UNUSED: u8 = 0b0010_0000;
/// Bit 6: Overflow.
pub const OVERFLOW: u8 = 0b0100_0000;
/// Bit 7: Negative.
pub const NEGATIVE: u8 = 0b1000_0000;

/// Renders a status byte as `NV-BDIZC` with `-` for clear bits.
///
/// ```
/// use cpu6502::status;
///
/// assert_eq!(status::describe(0b1010_0011), "N-1---ZC");
/// ```
pub fn describe(status: u8) -> String {
    const NAMES: [char; 8] = ['N', 'V', '1', 'B', 'D', 'I', 'Z', 'C'];

    NAMES
        .iter()
        .enumerate()
        .map(|(i, &name)| {
            if status & (0x80 >> i) != 0 {
                name
            } else {
                '-'
            }
        })
        .collect()
}
