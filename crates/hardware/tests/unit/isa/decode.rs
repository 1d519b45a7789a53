//! Instruction Decode Tests.
//!
//! Verifies `decode_line` and `decode_word` for every recognized shape and
//! the rejection of everything else.

use pipesim_core::SimError;
use pipesim_core::isa::instruction::InstructionBits;
use pipesim_core::isa::{Instruction, InstructionKind, decode_line, decode_word};
use rstest::rstest;

// ══════════════════════════════════════════════════════════
// 1. Recognized shapes
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::load("10000000001000110000000000000000", Instruction::load(3, 0, 1))]
#[case::load_offset("10000000010001010000000000001100", Instruction::load(5, 12, 2))]
#[case::store("10100000001000100000000000000100", Instruction::store(4, 1, 2))]
#[case::add("00000000001000100001100000100000", Instruction::add(3, 1, 2))]
#[case::beqz("00000100001000100000000000001000", Instruction::beqz(1, 8))]
#[case::nop("00000000000000000000000000000000", Instruction::nop())]
fn decodes_line(#[case] line: &str, #[case] expected: Instruction) {
    assert_eq!(decode_line(line).unwrap(), expected);
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let inst = decode_line("  00000000001000100001100000100000\r\n").unwrap();
    assert_eq!(inst, Instruction::add(3, 1, 2));
}

#[test]
fn add_ignores_shift_amount_bits() {
    // shamt field (bits 10..6) set to 00101
    let inst = decode_line("00000000001000100001100101100000").unwrap();
    assert_eq!(inst, Instruction::add(3, 1, 2));
}

#[test]
fn immediate_is_unsigned() {
    let inst = decode_line("10000000001000111111111111111111").unwrap();
    assert_eq!(inst.kind, InstructionKind::Load);
    assert_eq!(inst.imm, 65535);
}

// ══════════════════════════════════════════════════════════
// 2. Rejected input
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::empty("")]
#[case::short("1000000000100011000000000000000")]
#[case::long("100000000010001100000000000000000")]
#[case::non_binary("1000000000100011000000000000000a")]
#[case::unknown_opcode("11111100001000110000000000000000")]
#[case::special_non_add("00000000001000100001100000100010")]
#[case::regimm_non_beqz("00000100001000110000000000001000")]
fn rejects_line(#[case] line: &str) {
    assert!(matches!(
        decode_line(line),
        Err(SimError::InvalidEncoding(_))
    ));
}

#[test]
fn non_zero_special_with_zero_function_is_not_nop() {
    // opcode 000000 and funct 000000 but rs = 1: neither add nor nop
    assert_eq!(decode_word(0x0020_0000), None);
}

// ══════════════════════════════════════════════════════════
// 3. Word-level decoding
// ══════════════════════════════════════════════════════════

#[test]
fn encode_produces_decodable_words() {
    let word = Instruction::beqz(7, 40).encode();
    assert_eq!(word.opcode(), 0b000001);
    assert_eq!(word.rt(), 0b00010);
    assert_eq!(decode_word(word), Some(Instruction::beqz(7, 40)));
}
