//! Instruction Decode Properties.
//!
//! Verifies that `decode()` accepts exactly the thirteen LS-8 opcodes and that
//! the `AABCDDDD` fields of each agree with its semantics.

use ls8_core::Trap;
use ls8_core::isa::decode::decode;
use ls8_core::isa::instruction::{AluOp, InstructionBits, Opcode};
use ls8_core::isa::opcodes;
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case(opcodes::HLT, Opcode::Halt, 0)]
#[case(opcodes::RET, Opcode::Return, 0)]
#[case(opcodes::PUSH, Opcode::Push, 1)]
#[case(opcodes::POP, Opcode::Pop, 1)]
#[case(opcodes::PRN, Opcode::PrintRegister, 1)]
#[case(opcodes::CALL, Opcode::Call, 1)]
#[case(opcodes::JMP, Opcode::Jump, 1)]
#[case(opcodes::JEQ, Opcode::JumpIfEqual, 1)]
#[case(opcodes::JNE, Opcode::JumpIfNotEqual, 1)]
#[case(opcodes::LDI, Opcode::LoadImmediate, 2)]
#[case(opcodes::ADD, Opcode::Add, 2)]
#[case(opcodes::MUL, Opcode::Multiply, 2)]
#[case(opcodes::CMP, Opcode::Compare, 2)]
fn test_decode_known_opcodes(#[case] byte: u8, #[case] expected: Opcode, #[case] operands: u8) {
    let op = decode(byte, 0).unwrap();
    assert_eq!(op, expected);
    assert_eq!(op.byte(), byte);
    assert_eq!(op.operand_count(), operands);
    assert_eq!(op.length(), 1 + operands as usize);
}

#[test]
fn test_sets_pc_bit_matches_control_transfer() {
    for op in Opcode::ALL {
        let transfers = matches!(
            op,
            Opcode::Call
                | Opcode::Return
                | Opcode::Jump
                | Opcode::JumpIfEqual
                | Opcode::JumpIfNotEqual
        );
        assert_eq!(op.sets_pc(), transfers, "{op}");
    }
}

#[test]
fn test_alu_bit_and_tags() {
    assert_eq!(Opcode::Add.alu_op(), Some(AluOp::Add));
    assert_eq!(Opcode::Multiply.alu_op(), Some(AluOp::Mul));
    assert_eq!(Opcode::Compare.alu_op(), Some(AluOp::Cmp));
    assert_eq!(Opcode::LoadImmediate.alu_op(), None);
    assert!(opcodes::ADD.is_alu());
    assert!(!opcodes::PRN.is_alu());
    assert_eq!(opcodes::CMP.identifier(), AluOp::Cmp.tag());
}

#[test]
fn test_alu_tags_round_trip_through_identifier() {
    for tag in 0..=0x0D {
        assert_eq!(AluOp::from_tag(tag).unwrap().tag(), tag);
    }
    assert_eq!(AluOp::from_tag(0x0E), None);
    assert_eq!(AluOp::from_tag(0x0F), None);
}

#[test]
fn test_decode_reports_pc_of_illegal_byte() {
    match decode(0xFF, 0x2A) {
        Err(Trap::IllegalInstruction { opcode, pc }) => {
            assert_eq!(opcode, 0xFF);
            assert_eq!(pc, 0x2A);
        }
        other => panic!("expected illegal instruction, got {other:?}"),
    }
}

#[test]
fn test_zero_byte_is_illegal() {
    assert!(decode(0x00, 0).is_err());
}

#[test]
fn test_try_from_matches_decode() {
    assert_eq!(Opcode::try_from(0x82), Ok(Opcode::LoadImmediate));
    assert_eq!(Opcode::try_from(0xA1), Err(0xA1));
}

#[test]
fn test_mnemonics() {
    assert_eq!(Opcode::LoadImmediate.to_string(), "LDI");
    assert_eq!(Opcode::JumpIfNotEqual.to_string(), "JNE");
}

proptest! {
    #[test]
    fn prop_decode_accepts_only_known_opcodes(byte in any::<u8>()) {
        let known = Opcode::ALL.iter().any(|op| op.byte() == byte);
        match decode(byte, 0) {
            Ok(op) => {
                prop_assert!(known);
                prop_assert_eq!(op.byte(), byte);
            }
            Err(_) => prop_assert!(!known),
        }
    }

    #[test]
    fn prop_operand_count_is_top_two_bits(byte in any::<u8>()) {
        prop_assert_eq!(byte.operand_count(), byte >> 6);
        prop_assert!(byte.operand_count() <= 3);
    }
}
