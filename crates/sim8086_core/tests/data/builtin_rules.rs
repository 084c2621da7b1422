// Generated by sim8086 --emit_table. Do not edit.
use sim8086_core::{
    mnemonic::Mnemonic,
    rule::{ByteDecoding, Condition, DecodingRule, Part, PartKind},
};

#[rustfmt::skip]
pub static RULES: &[DecodingRule] = &[
    DecodingRule {
        mnemonic: Mnemonic::MOV,
        bytes: [
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Literal, mask: 0b00111111, shift: 2, literal: Some(0b100010) }),
                    Some(Part { kind: PartKind::D, mask: 0b00000001, shift: 1, literal: None }),
                    Some(Part { kind: PartKind::W, mask: 0b00000001, shift: 0, literal: None }),
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Mod, mask: 0b00000011, shift: 6, literal: None }),
                    Some(Part { kind: PartKind::Reg, mask: 0b00000111, shift: 3, literal: None }),
                    Some(Part { kind: PartKind::Rm, mask: 0b00000111, shift: 0, literal: None }),
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::DispLo, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::DispHi, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            None,
            None,
        ],
    },
    DecodingRule {
        mnemonic: Mnemonic::MOV,
        bytes: [
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Literal, mask: 0b01111111, shift: 1, literal: Some(0b1100011) }),
                    Some(Part { kind: PartKind::W, mask: 0b00000001, shift: 0, literal: None }),
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Mod, mask: 0b00000011, shift: 6, literal: None }),
                    Some(Part { kind: PartKind::Literal, mask: 0b00000111, shift: 3, literal: Some(0b0) }),
                    Some(Part { kind: PartKind::Rm, mask: 0b00000111, shift: 0, literal: None }),
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::DispLo, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::DispHi, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Data, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Data, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: Some(Condition { clauses: [Some((PartKind::W, 1)), None] }),
            }),
        ],
    },
    DecodingRule {
        mnemonic: Mnemonic::MOV,
        bytes: [
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Literal, mask: 0b00001111, shift: 4, literal: Some(0b1011) }),
                    Some(Part { kind: PartKind::W, mask: 0b00000001, shift: 3, literal: None }),
                    Some(Part { kind: PartKind::Reg, mask: 0b00000111, shift: 0, literal: None }),
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Data, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Data, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: Some(Condition { clauses: [Some((PartKind::W, 1)), None] }),
            }),
            None,
            None,
            None,
        ],
    },
    DecodingRule {
        mnemonic: Mnemonic::MOV,
        bytes: [
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Literal, mask: 0b00111111, shift: 2, literal: Some(0b101000) }),
                    Some(Part { kind: PartKind::D, mask: 0b00000001, shift: 1, literal: None }),
                    Some(Part { kind: PartKind::W, mask: 0b00000001, shift: 0, literal: None }),
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::DispLo, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::DispHi, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            None,
            None,
            None,
        ],
    },
    DecodingRule {
        mnemonic: Mnemonic::ADD,
        bytes: [
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Literal, mask: 0b00111111, shift: 2, literal: Some(0b0) }),
                    Some(Part { kind: PartKind::D, mask: 0b00000001, shift: 1, literal: None }),
                    Some(Part { kind: PartKind::W, mask: 0b00000001, shift: 0, literal: None }),
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Mod, mask: 0b00000011, shift: 6, literal: None }),
                    Some(Part { kind: PartKind::Reg, mask: 0b00000111, shift: 3, literal: None }),
                    Some(Part { kind: PartKind::Rm, mask: 0b00000111, shift: 0, literal: None }),
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::DispLo, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::DispHi, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            None,
            None,
        ],
    },
    DecodingRule {
        mnemonic: Mnemonic::ADD,
        bytes: [
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Literal, mask: 0b00111111, shift: 2, literal: Some(0b100000) }),
                    Some(Part { kind: PartKind::S, mask: 0b00000001, shift: 1, literal: None }),
                    Some(Part { kind: PartKind::W, mask: 0b00000001, shift: 0, literal: None }),
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Mod, mask: 0b00000011, shift: 6, literal: None }),
                    Some(Part { kind: PartKind::Literal, mask: 0b00000111, shift: 3, literal: Some(0b0) }),
                    Some(Part { kind: PartKind::Rm, mask: 0b00000111, shift: 0, literal: None }),
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::DispLo, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::DispHi, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Data, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Data, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: Some(Condition { clauses: [Some((PartKind::S, 0)), Some((PartKind::W, 1))] }),
            }),
        ],
    },
    DecodingRule {
        mnemonic: Mnemonic::ADD,
        bytes: [
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Literal, mask: 0b01111111, shift: 1, literal: Some(0b10) }),
                    Some(Part { kind: PartKind::W, mask: 0b00000001, shift: 0, literal: None }),
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Data, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Data, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: Some(Condition { clauses: [Some((PartKind::W, 1)), None] }),
            }),
            None,
            None,
            None,
        ],
    },
    DecodingRule {
        mnemonic: Mnemonic::SUB,
        bytes: [
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Literal, mask: 0b00111111, shift: 2, literal: Some(0b1010) }),
                    Some(Part { kind: PartKind::D, mask: 0b00000001, shift: 1, literal: None }),
                    Some(Part { kind: PartKind::W, mask: 0b00000001, shift: 0, literal: None }),
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Mod, mask: 0b00000011, shift: 6, literal: None }),
                    Some(Part { kind: PartKind::Reg, mask: 0b00000111, shift: 3, literal: None }),
                    Some(Part { kind: PartKind::Rm, mask: 0b00000111, shift: 0, literal: None }),
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::DispLo, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::DispHi, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            None,
            None,
        ],
    },
    DecodingRule {
        mnemonic: Mnemonic::SUB,
        bytes: [
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Literal, mask: 0b00111111, shift: 2, literal: Some(0b100000) }),
                    Some(Part { kind: PartKind::S, mask: 0b00000001, shift: 1, literal: None }),
                    Some(Part { kind: PartKind::W, mask: 0b00000001, shift: 0, literal: None }),
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Mod, mask: 0b00000011, shift: 6, literal: None }),
                    Some(Part { kind: PartKind::Literal, mask: 0b00000111, shift: 3, literal: Some(0b101) }),
                    Some(Part { kind: PartKind::Rm, mask: 0b00000111, shift: 0, literal: None }),
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::DispLo, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::DispHi, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Data, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Data, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: Some(Condition { clauses: [Some((PartKind::S, 0)), Some((PartKind::W, 1))] }),
            }),
        ],
    },
    DecodingRule {
        mnemonic: Mnemonic::SUB,
        bytes: [
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Literal, mask: 0b01111111, shift: 1, literal: Some(0b10110) }),
                    Some(Part { kind: PartKind::W, mask: 0b00000001, shift: 0, literal: None }),
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Data, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Data, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: Some(Condition { clauses: [Some((PartKind::W, 1)), None] }),
            }),
            None,
            None,
            None,
        ],
    },
    DecodingRule {
        mnemonic: Mnemonic::CMP,
        bytes: [
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Literal, mask: 0b00111111, shift: 2, literal: Some(0b1110) }),
                    Some(Part { kind: PartKind::D, mask: 0b00000001, shift: 1, literal: None }),
                    Some(Part { kind: PartKind::W, mask: 0b00000001, shift: 0, literal: None }),
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Mod, mask: 0b00000011, shift: 6, literal: None }),
                    Some(Part { kind: PartKind::Reg, mask: 0b00000111, shift: 3, literal: None }),
                    Some(Part { kind: PartKind::Rm, mask: 0b00000111, shift: 0, literal: None }),
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::DispLo, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::DispHi, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            None,
            None,
        ],
    },
    DecodingRule {
        mnemonic: Mnemonic::CMP,
        bytes: [
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Literal, mask: 0b00111111, shift: 2, literal: Some(0b100000) }),
                    Some(Part { kind: PartKind::S, mask: 0b00000001, shift: 1, literal: None }),
                    Some(Part { kind: PartKind::W, mask: 0b00000001, shift: 0, literal: None }),
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Mod, mask: 0b00000011, shift: 6, literal: None }),
                    Some(Part { kind: PartKind::Literal, mask: 0b00000111, shift: 3, literal: Some(0b111) }),
                    Some(Part { kind: PartKind::Rm, mask: 0b00000111, shift: 0, literal: None }),
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::DispLo, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::DispHi, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Data, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Data, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: Some(Condition { clauses: [Some((PartKind::S, 0)), Some((PartKind::W, 1))] }),
            }),
        ],
    },
    DecodingRule {
        mnemonic: Mnemonic::CMP,
        bytes: [
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Literal, mask: 0b01111111, shift: 1, literal: Some(0b11110) }),
                    Some(Part { kind: PartKind::W, mask: 0b00000001, shift: 0, literal: None }),
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Data, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Data, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: Some(Condition { clauses: [Some((PartKind::W, 1)), None] }),
            }),
            None,
            None,
            None,
        ],
    },
    DecodingRule {
        mnemonic: Mnemonic::JE,
        bytes: [
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Literal, mask: 0b11111111, shift: 0, literal: Some(0b1110100) }),
                    None,
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Data, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            None,
            None,
            None,
            None,
        ],
    },
    DecodingRule {
        mnemonic: Mnemonic::JL,
        bytes: [
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Literal, mask: 0b11111111, shift: 0, literal: Some(0b1111100) }),
                    None,
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Data, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            None,
            None,
            None,
            None,
        ],
    },
    DecodingRule {
        mnemonic: Mnemonic::JLE,
        bytes: [
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Literal, mask: 0b11111111, shift: 0, literal: Some(0b1111110) }),
                    None,
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Data, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            None,
            None,
            None,
            None,
        ],
    },
    DecodingRule {
        mnemonic: Mnemonic::JB,
        bytes: [
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Literal, mask: 0b11111111, shift: 0, literal: Some(0b1110010) }),
                    None,
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Data, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            None,
            None,
            None,
            None,
        ],
    },
    DecodingRule {
        mnemonic: Mnemonic::JBE,
        bytes: [
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Literal, mask: 0b11111111, shift: 0, literal: Some(0b1110110) }),
                    None,
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Data, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            None,
            None,
            None,
            None,
        ],
    },
    DecodingRule {
        mnemonic: Mnemonic::JP,
        bytes: [
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Literal, mask: 0b11111111, shift: 0, literal: Some(0b1111010) }),
                    None,
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Data, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            None,
            None,
            None,
            None,
        ],
    },
    DecodingRule {
        mnemonic: Mnemonic::JO,
        bytes: [
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Literal, mask: 0b11111111, shift: 0, literal: Some(0b1110000) }),
                    None,
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Data, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            None,
            None,
            None,
            None,
        ],
    },
    DecodingRule {
        mnemonic: Mnemonic::JS,
        bytes: [
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Literal, mask: 0b11111111, shift: 0, literal: Some(0b1111000) }),
                    None,
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Data, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            None,
            None,
            None,
            None,
        ],
    },
    DecodingRule {
        mnemonic: Mnemonic::JNE,
        bytes: [
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Literal, mask: 0b11111111, shift: 0, literal: Some(0b1110101) }),
                    None,
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Data, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            None,
            None,
            None,
            None,
        ],
    },
    DecodingRule {
        mnemonic: Mnemonic::JNL,
        bytes: [
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Literal, mask: 0b11111111, shift: 0, literal: Some(0b1111101) }),
                    None,
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Data, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            None,
            None,
            None,
            None,
        ],
    },
    DecodingRule {
        mnemonic: Mnemonic::JG,
        bytes: [
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Literal, mask: 0b11111111, shift: 0, literal: Some(0b1111111) }),
                    None,
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Data, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            None,
            None,
            None,
            None,
        ],
    },
    DecodingRule {
        mnemonic: Mnemonic::JNB,
        bytes: [
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Literal, mask: 0b11111111, shift: 0, literal: Some(0b1110011) }),
                    None,
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Data, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            None,
            None,
            None,
            None,
        ],
    },
    DecodingRule {
        mnemonic: Mnemonic::JA,
        bytes: [
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Literal, mask: 0b11111111, shift: 0, literal: Some(0b1110111) }),
                    None,
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Data, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            None,
            None,
            None,
            None,
        ],
    },
    DecodingRule {
        mnemonic: Mnemonic::JNP,
        bytes: [
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Literal, mask: 0b11111111, shift: 0, literal: Some(0b1111011) }),
                    None,
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Data, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            None,
            None,
            None,
            None,
        ],
    },
    DecodingRule {
        mnemonic: Mnemonic::JNO,
        bytes: [
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Literal, mask: 0b11111111, shift: 0, literal: Some(0b1110001) }),
                    None,
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Data, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            None,
            None,
            None,
            None,
        ],
    },
    DecodingRule {
        mnemonic: Mnemonic::JNS,
        bytes: [
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Literal, mask: 0b11111111, shift: 0, literal: Some(0b1111001) }),
                    None,
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Data, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            None,
            None,
            None,
            None,
        ],
    },
    DecodingRule {
        mnemonic: Mnemonic::LOOP,
        bytes: [
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Literal, mask: 0b11111111, shift: 0, literal: Some(0b11100010) }),
                    None,
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Data, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            None,
            None,
            None,
            None,
        ],
    },
    DecodingRule {
        mnemonic: Mnemonic::LOOPZ,
        bytes: [
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Literal, mask: 0b11111111, shift: 0, literal: Some(0b11100001) }),
                    None,
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Data, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            None,
            None,
            None,
            None,
        ],
    },
    DecodingRule {
        mnemonic: Mnemonic::LOOPNZ,
        bytes: [
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Literal, mask: 0b11111111, shift: 0, literal: Some(0b11100000) }),
                    None,
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Data, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            None,
            None,
            None,
            None,
        ],
    },
    DecodingRule {
        mnemonic: Mnemonic::JCXZ,
        bytes: [
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Literal, mask: 0b11111111, shift: 0, literal: Some(0b11100011) }),
                    None,
                    None,
                ],
                condition: None,
            }),
            Some(ByteDecoding {
                parts: [
                    Some(Part { kind: PartKind::Data, mask: 0b11111111, shift: 0, literal: None }),
                    None,
                    None,
                ],
                condition: None,
            }),
            None,
            None,
            None,
            None,
        ],
    },
];
