/*
    sim8086

    Copyright 2022-2025 Daniel Balsom

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the “Software”),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.

    ---------------------------------------------------------------------------


    sim8086_core::decode.rs

    Rule-driven instruction decoding.

    The decoder operates on implementors of ByteQueue. The lead byte selects
    the candidate rules from the RuleTable; each candidate is tried in table
    order until one decodes without a literal mismatch. A candidate walks its
    byte templates, skipping conditional and displacement bytes that are not
    present, and records every named field into a per-instruction field
    table. Operands are then resolved from the recorded fields.

*/

use crate::{
    addressing::{displacement_len, register, EffectiveAddress},
    bytequeue::{ByteQueue, SliceQueue},
    error::DecodeError,
    instruction::{Instruction, Operand, OperandSize},
    mnemonic::Mnemonic,
    rule::{DecodingRule, PartKind, PART_KIND_COUNT},
    table::RuleTable,
};

/// Named field values decoded so far for one instruction.
#[derive(Default)]
struct FieldTable {
    fields: [Option<u8>; PART_KIND_COUNT],
    disp: [Option<u8>; 2],
    data: [Option<u8>; 2],
}

impl FieldTable {
    #[inline(always)]
    fn get(&self, kind: PartKind) -> Option<u8> {
        self.fields[kind as usize]
    }

    #[inline(always)]
    fn set(&mut self, kind: PartKind, value: u8) {
        self.fields[kind as usize] = Some(value);
    }

    fn push_data(&mut self, value: u8) -> bool {
        match self.data.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(value);
                true
            }
            None => false,
        }
    }

    /// Whether a displacement byte of the given kind follows, based on the Mod
    /// and R/M fields. Without a Mod field the displacement is unconditional.
    fn wants_displacement(&self, kind: PartKind) -> bool {
        let Some(b_mod) = self.get(PartKind::Mod)
        else {
            return true;
        };
        let len = displacement_len(b_mod, self.get(PartKind::Rm).unwrap_or(0));
        match kind {
            PartKind::DispLo => len >= 1,
            PartKind::DispHi => len >= 2,
            _ => false,
        }
    }

    fn has_displacement(&self) -> bool {
        self.disp[0].is_some()
    }

    /// An 8-bit displacement is sign-extended, a 16-bit one is little-endian.
    fn displacement(&self) -> i16 {
        Self::widen(self.disp).unwrap_or(0)
    }

    fn immediate(&self) -> Option<i16> {
        Self::widen(self.data)
    }

    fn data_len(&self) -> usize {
        self.data.iter().flatten().count()
    }

    fn widen(bytes: [Option<u8>; 2]) -> Option<i16> {
        match bytes {
            [Some(lo), Some(hi)] => Some(i16::from_le_bytes([lo, hi])),
            [Some(lo), None] => Some(lo as i8 as i16),
            _ => None,
        }
    }
}

pub struct Decoder<'a> {
    table: &'a RuleTable,
}

impl<'a> Decoder<'a> {
    pub fn new(table: &'a RuleTable) -> Self {
        Self { table }
    }

    /// Decode one instruction from the current position of `bytes`, returning
    /// the instruction and the number of bytes it occupies. On error the queue
    /// is left at its starting position.
    pub fn decode(&self, bytes: &mut impl ByteQueue) -> Result<(Instruction, usize), DecodeError> {
        let start = bytes.tell();
        let lead = bytes.q_peek_u8().ok_or(DecodeError::TruncatedInput { consumed: 0 })?;

        // Report the first literal mismatch if no candidate matches.
        let mut mismatch = None;

        for rule in self.table.candidates(lead) {
            match Self::decode_rule(rule, bytes, start) {
                Ok(instruction) => {
                    let size = bytes.tell() - start;
                    log::trace!("{:04X}: {} ({} bytes)", start, instruction, size);
                    return Ok((instruction, size));
                }
                Err(e @ DecodeError::LiteralMismatch { .. }) => {
                    log::trace!("{:04X}: {} rule rejected: {}", start, rule.mnemonic, e);
                    bytes.seek(start);
                    mismatch.get_or_insert(e);
                }
                Err(e) => {
                    bytes.seek(start);
                    return Err(e);
                }
            }
        }

        Err(mismatch.unwrap_or(DecodeError::UnmatchedOpcode(lead)))
    }

    fn decode_rule(rule: &DecodingRule, bytes: &mut impl ByteQueue, start: usize) -> Result<Instruction, DecodeError> {
        let mnemonic = rule.mnemonic;
        let mut fields = FieldTable::default();

        for (byte_idx, slot) in rule.bytes.iter().enumerate() {
            let Some(template) = slot
            else {
                continue;
            };

            if let Some(condition) = &template.condition {
                if !condition.holds(|kind| fields.get(kind)) {
                    continue;
                }
            }
            if let Some(disp) = template.parts().find(|p| p.kind.is_displacement()) {
                if !fields.wants_displacement(disp.kind) {
                    continue;
                }
            }

            let raw = bytes.q_read_u8().ok_or(DecodeError::TruncatedInput {
                consumed: bytes.tell() - start,
            })?;

            for part in template.parts() {
                let value = part.extract(raw);
                match part.kind {
                    PartKind::Literal => {
                        let expected = part.literal.unwrap_or(0);
                        if value != expected {
                            return Err(DecodeError::LiteralMismatch {
                                mnemonic,
                                byte: byte_idx,
                                expected,
                                found: value,
                            });
                        }
                    }
                    PartKind::DispLo => fields.disp[0] = Some(value),
                    PartKind::DispHi => fields.disp[1] = Some(value),
                    PartKind::Data => {
                        if !fields.push_data(value) {
                            return Err(DecodeError::InvalidFieldCombination {
                                mnemonic,
                                reason: "more than two data bytes",
                            });
                        }
                    }
                    kind => fields.set(kind, value),
                }
            }

            // A sign-extended byte immediate into a byte operand does not exist.
            if fields.get(PartKind::S) == Some(1) && fields.get(PartKind::W) == Some(0) {
                return Err(DecodeError::InvalidFieldCombination {
                    mnemonic,
                    reason: "s=1 requires w=1",
                });
            }
        }

        Self::resolve_operands(mnemonic, &fields)
    }

    fn resolve_operands(mnemonic: Mnemonic, fields: &FieldTable) -> Result<Instruction, DecodeError> {
        let invalid = |reason: &'static str| DecodeError::InvalidFieldCombination { mnemonic, reason };

        if mnemonic.is_relative_jump() {
            let displacement = fields.data[0].ok_or(invalid("relative jump has no displacement byte"))?;
            return Ok(Instruction::jump(mnemonic, displacement as i8));
        }

        let w = fields.get(PartKind::W).ok_or(invalid("no w field to select the operand width"))?;
        let direction = fields.get(PartKind::D).unwrap_or(0);
        let immediate = fields.immediate().map(|value| {
            if mnemonic.has_short_immediate() && fields.data_len() == 2 && i8::try_from(value).is_ok() {
                Operand::StrictImmediate(value)
            }
            else {
                Operand::Immediate(value, OperandSize::from(w))
            }
        });

        let rm = match (fields.get(PartKind::Mod), fields.get(PartKind::Rm)) {
            (Some(b_mod), Some(b_rm)) => Some(match EffectiveAddress::from_modrm(b_mod, b_rm, fields.displacement()) {
                Some(ea) => Operand::Memory(ea),
                None => Operand::Register(register(b_rm, w)),
            }),
            _ => None,
        };
        let reg = fields.get(PartKind::Reg).map(|b_reg| Operand::Register(register(b_reg, w)));
        let accumulator = Operand::Register(register(0, w));

        let (dst, src) = match (rm, reg, immediate) {
            (Some(rm), Some(reg), None) => {
                if direction == 1 {
                    (reg, rm)
                }
                else {
                    (rm, reg)
                }
            }
            (Some(rm), None, Some(imm)) => (rm, imm),
            (None, Some(reg), Some(imm)) => (reg, imm),
            (None, None, Some(imm)) => (accumulator, imm),
            (None, None, None) if fields.has_displacement() => {
                let memory = Operand::Memory(EffectiveAddress::direct(fields.displacement() as u16));
                if direction == 1 {
                    (memory, accumulator)
                }
                else {
                    (accumulator, memory)
                }
            }
            _ => return Err(invalid("fields do not describe a supported operand form")),
        };

        Ok(Instruction::new(mnemonic, dst, src))
    }
}

/// Decode one instruction from the start of `bytes`.
pub fn decode(bytes: &[u8], table: &RuleTable) -> Result<(Instruction, usize), DecodeError> {
    Decoder::new(table).decode(&mut SliceQueue::new(bytes))
}
