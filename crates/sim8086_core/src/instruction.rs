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


    sim8086_core::instruction.rs

    Decoded instruction representation and its NASM-compatible text form.

*/

use std::fmt::{Display, Formatter, Result as fmtResult};

use crate::{
    addressing::{EffectiveAddress, Register},
    mnemonic::Mnemonic,
};

/// Encoded size of every relative jump and loop. Jump targets are printed
/// relative to the start of the instruction, so this is added back to the
/// encoded displacement.
pub const JUMP_INSTRUCTION_SIZE: i16 = 2;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OperandSize {
    Operand8,
    Operand16,
}

impl OperandSize {
    pub fn keyword(&self) -> &'static str {
        match self {
            OperandSize::Operand8 => "byte",
            OperandSize::Operand16 => "word",
        }
    }
}

impl From<u8> for OperandSize {
    /// Size selected by a W field value.
    fn from(w: u8) -> Self {
        if w & 0x01 == 1 {
            OperandSize::Operand16
        }
        else {
            OperandSize::Operand8
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operand {
    NoOperand,
    Register(Register),
    Immediate(i16, OperandSize),
    /// A word immediate encoded in two bytes although it fits the sign-extended
    /// byte form. Printed with `strict word` so it reassembles to the same length.
    StrictImmediate(i16),
    Memory(EffectiveAddress),
}

impl Display for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmtResult {
        match self {
            Operand::NoOperand => Ok(()),
            Operand::Register(reg) => write!(f, "{}", reg),
            Operand::Immediate(value, _) => write!(f, "{}", value),
            Operand::StrictImmediate(value) => write!(f, "strict word {}", value),
            Operand::Memory(ea) => write!(f, "{}", ea),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    pub mnemonic: Mnemonic,
    pub dst: Operand,
    pub src: Operand,
    /// Signed displacement of a relative jump, from the end of the instruction.
    pub jump: Option<i8>,
}

impl Instruction {
    pub fn new(mnemonic: Mnemonic, dst: Operand, src: Operand) -> Self {
        Self {
            mnemonic,
            dst,
            src,
            jump: None,
        }
    }

    pub fn jump(mnemonic: Mnemonic, displacement: i8) -> Self {
        Self {
            mnemonic,
            dst: Operand::NoOperand,
            src: Operand::NoOperand,
            jump: Some(displacement),
        }
    }

    /// Jump target relative to the start of the instruction.
    pub fn jump_offset(&self) -> Option<i16> {
        self.jump.map(|d| d as i16 + JUMP_INSTRUCTION_SIZE)
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmtResult {
        if let Some(offset) = self.jump_offset() {
            return match offset {
                0 => write!(f, "{} $+0", self.mnemonic),
                o if o > 0 => write!(f, "{} $+{}+0", self.mnemonic, o),
                o => write!(f, "{} ${}+0", self.mnemonic, o),
            };
        }

        match (&self.dst, &self.src) {
            // A memory destination with an immediate source has no register to imply
            // the operand size, so it has to be spelled out.
            (Operand::Memory(ea), Operand::Immediate(value, size)) => {
                if self.mnemonic == Mnemonic::MOV {
                    write!(f, "{} {}, {} {}", self.mnemonic, ea, size.keyword(), value)
                }
                else {
                    write!(f, "{} {} {}, {}", self.mnemonic, size.keyword(), ea, value)
                }
            }
            (Operand::Memory(ea), imm @ Operand::StrictImmediate(_)) => {
                write!(f, "{} {} {}, {}", self.mnemonic, OperandSize::Operand16.keyword(), ea, imm)
            }
            (Operand::NoOperand, _) => write!(f, "{}", self.mnemonic),
            (dst, Operand::NoOperand) => write!(f, "{} {}", self.mnemonic, dst),
            (dst, src) => write!(f, "{} {}, {}", self.mnemonic, dst, src),
        }
    }
}
