//! Instruction Decoder.
//!
//! This module turns program text and raw words into [`Instruction`] values. It performs:
//! 1. **Text Validation:** A line must be exactly 32 `0`/`1` characters, MSB first.
//! 2. **Shape Matching:** The opcode (and, where shared, the function or rt field) selects the kind.
//! 3. **Field Extraction:** Register indices and the unsigned 16-bit immediate.
//!
//! Any bit pattern that matches no shape is rejected with [`SimError::InvalidEncoding`].

use crate::common::constants::ENCODING_WIDTH;
use crate::common::error::{SimError, SimResult};
use crate::isa::instruction::{Instruction, InstructionBits, InstructionKind};
use crate::isa::opcodes;

/// Decodes one line of program text.
///
/// Leading and trailing whitespace is ignored.
///
/// # Arguments
///
/// * `text` - A 32-character string of `0` and `1`, most significant bit first.
///
/// # Returns
///
/// The decoded instruction, or [`SimError::InvalidEncoding`] carrying the
/// trimmed text when the line is malformed or matches no known shape.
pub fn decode_line(text: &str) -> SimResult<Instruction> {
    let bits = text.trim();
    let invalid = || SimError::InvalidEncoding(bits.to_string());

    if bits.len() != ENCODING_WIDTH || !bits.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(invalid());
    }
    let word = u32::from_str_radix(bits, 2).map_err(|_| invalid())?;
    decode_word(word).ok_or_else(invalid)
}

/// Decodes a 32-bit instruction word.
///
/// # Arguments
///
/// * `word` - The raw instruction encoding.
///
/// # Returns
///
/// `Some(instruction)` for a recognized shape, `None` otherwise.
pub fn decode_word(word: u32) -> Option<Instruction> {
    if word == 0 {
        return Some(Instruction::nop());
    }

    let kind = match word.opcode() {
        opcodes::OP_LOAD => InstructionKind::Load,
        opcodes::OP_STORE => InstructionKind::Store,
        opcodes::OP_SPECIAL if word.funct() == opcodes::FUNCT_ADD => InstructionKind::Add,
        opcodes::OP_REGIMM if word.rt() as u32 == opcodes::RT_BEQZ => {
            InstructionKind::BranchIfZero
        }
        _ => return None,
    };

    Some(match kind {
        InstructionKind::Load => Instruction::load(word.rt(), word.imm(), word.rs()),
        InstructionKind::Store => Instruction::store(word.imm(), word.rs(), word.rt()),
        InstructionKind::Add => Instruction::add(word.rd(), word.rs(), word.rt()),
        InstructionKind::BranchIfZero => Instruction::beqz(word.rs(), word.imm()),
        InstructionKind::NoOp => Instruction::nop(),
    })
}
