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

    sim8086_core::rule.rs

    Decoding rule templates. A DecodingRule describes one encoding form of an
    instruction as a fixed array of byte templates, each of which partitions
    its 8 bits into literal and named-field parts.

    Rules are plain const-constructible data so that tablegen can emit them
    as a static table.

*/

use crate::mnemonic::Mnemonic;

pub const MAX_RULE_BYTES: usize = 6;
pub const MAX_BYTE_PARTS: usize = 3;
pub const MAX_CONDITION_CLAUSES: usize = 2;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PartKind {
    Literal,
    Mod,
    Reg,
    Rm,
    D,
    W,
    S,
    DispLo,
    DispHi,
    Data,
}

pub const PART_KIND_COUNT: usize = 10;

impl PartKind {
    /// Width in bits of a named part. Literals take the width of their token.
    pub fn named_width(&self) -> Option<u8> {
        match self {
            PartKind::Literal => None,
            PartKind::Mod => Some(2),
            PartKind::Reg | PartKind::Rm => Some(3),
            PartKind::D | PartKind::W | PartKind::S => Some(1),
            PartKind::DispLo | PartKind::DispHi | PartKind::Data => Some(8),
        }
    }

    pub fn from_token(token: &str) -> Option<PartKind> {
        match token {
            "mod" => Some(PartKind::Mod),
            "reg" => Some(PartKind::Reg),
            "rm" => Some(PartKind::Rm),
            "d" => Some(PartKind::D),
            "w" => Some(PartKind::W),
            "s" => Some(PartKind::S),
            "disp-lo" => Some(PartKind::DispLo),
            "disp-hi" => Some(PartKind::DispHi),
            "data" => Some(PartKind::Data),
            _ => None,
        }
    }

    /// Single-valued fields that may be tested by a [Condition].
    pub fn is_field(&self) -> bool {
        matches!(
            self,
            PartKind::Mod | PartKind::Reg | PartKind::Rm | PartKind::D | PartKind::W | PartKind::S
        )
    }

    /// Whole-byte payloads, the only parts a byte condition may be attached to.
    pub fn is_payload(&self) -> bool {
        matches!(self, PartKind::DispLo | PartKind::DispHi | PartKind::Data)
    }

    pub fn is_displacement(&self) -> bool {
        matches!(self, PartKind::DispLo | PartKind::DispHi)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Part {
    pub kind: PartKind,
    pub mask: u8,
    /// Bit position of the field's low bit within the byte.
    pub shift: u8,
    /// Expected value of a [PartKind::Literal] part.
    pub literal: Option<u8>,
}

impl Part {
    #[inline(always)]
    pub fn extract(&self, byte: u8) -> u8 {
        (byte >> self.shift) & self.mask
    }

    #[inline(always)]
    pub fn width(&self) -> u32 {
        self.mask.count_ones()
    }

    /// The part's mask in position within the byte.
    #[inline(always)]
    pub fn byte_mask(&self) -> u8 {
        self.mask << self.shift
    }
}

/// A conjunction of `field = value` clauses, evaluated against fields decoded from
/// earlier bytes of the same instruction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Condition {
    pub clauses: [Option<(PartKind, u8)>; MAX_CONDITION_CLAUSES],
}

impl Condition {
    /// A clause on a field that was never decoded does not hold.
    pub fn holds(&self, field: impl Fn(PartKind) -> Option<u8>) -> bool {
        self.clauses
            .iter()
            .flatten()
            .all(|(kind, value)| field(*kind) == Some(*value))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ByteDecoding {
    pub parts: [Option<Part>; MAX_BYTE_PARTS],
    pub condition: Option<Condition>,
}

impl ByteDecoding {
    pub fn parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter().flatten()
    }

    /// Combined (mask, value) of every literal part in this byte.
    pub fn literal_signature(&self) -> (u8, u8) {
        self.parts()
            .filter(|p| p.kind == PartKind::Literal)
            .fold((0, 0), |(mask, value), p| {
                (mask | p.byte_mask(), value | (p.literal.unwrap_or(0) << p.shift))
            })
    }

    pub fn matches_literals(&self, byte: u8) -> bool {
        let (mask, value) = self.literal_signature();
        byte & mask == value
    }

    /// True if the byte is the low or high half of a displacement.
    pub fn is_displacement(&self) -> bool {
        self.parts().any(|p| p.kind.is_displacement())
    }

    pub fn has_kind(&self, kind: PartKind) -> bool {
        self.parts().any(|p| p.kind == kind)
    }

    /// Check that the parts partition all 8 bits from the top down.
    pub fn check_partition(&self) -> Result<(), String> {
        let mut remaining: u32 = 8;
        let mut seen_empty = false;
        for slot in self.parts.iter() {
            match slot {
                None => seen_empty = true,
                Some(_) if seen_empty => return Err("gap between parts".to_string()),
                Some(part) => {
                    let width = part.width();
                    if width == 0 || part.mask != ((1u16 << width) - 1) as u8 {
                        return Err(format!("mask {:#010b} is not contiguous from bit 0", part.mask));
                    }
                    if width > remaining {
                        return Err(format!("part {:?} overflows the byte", part.kind));
                    }
                    remaining -= width;
                    if part.shift as u32 != remaining {
                        return Err(format!(
                            "part {:?} has shift {}, expected {}",
                            part.kind, part.shift, remaining
                        ));
                    }
                    match (part.kind, part.literal) {
                        (PartKind::Literal, Some(l)) if l & !part.mask == 0 => {}
                        (PartKind::Literal, _) => return Err("literal does not fit its mask".to_string()),
                        (_, Some(_)) => return Err(format!("named part {:?} carries a literal", part.kind)),
                        _ => {}
                    }
                }
            }
        }
        if remaining != 0 {
            return Err(format!("{} bits left unassigned", remaining));
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DecodingRule {
    pub mnemonic: Mnemonic,
    pub bytes: [Option<ByteDecoding>; MAX_RULE_BYTES],
}

impl DecodingRule {
    pub fn bytes(&self) -> impl Iterator<Item = &ByteDecoding> {
        self.bytes.iter().flatten()
    }

    /// The byte template matched against the lead byte of an instruction.
    pub fn lead(&self) -> Option<&ByteDecoding> {
        self.bytes().next()
    }

    pub fn matches_lead(&self, byte: u8) -> bool {
        self.lead().map(|b| b.matches_literals(byte)).unwrap_or(false)
    }

    /// Literal signatures of the leading bytes that are always present at a fixed
    /// offset: every byte up to the first conditional or displacement byte.
    pub fn fixed_prefix(&self) -> Vec<(u8, u8)> {
        self.bytes()
            .take_while(|b| b.condition.is_none() && !b.is_displacement())
            .map(|b| b.literal_signature())
            .collect()
    }

    /// True if some input could satisfy the fixed literal prefixes of both rules.
    pub fn overlaps(&self, other: &DecodingRule) -> bool {
        self.fixed_prefix()
            .iter()
            .zip(other.fixed_prefix().iter())
            .all(|((mask_a, value_a), (mask_b, value_b))| (value_a ^ value_b) & mask_a & mask_b == 0)
    }
}
