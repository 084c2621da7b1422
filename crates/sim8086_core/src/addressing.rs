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

    sim8086_core::addressing.rs

    Register and effective address lookup tables. These reproduce the 8086
    ModR/M semantics and are fixed constants.

*/

use std::{fmt, fmt::Display};

use strum_macros::{Display as StrumDisplay, IntoStaticStr};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, StrumDisplay, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Register {
    AL,
    CL,
    DL,
    BL,
    AH,
    CH,
    DH,
    BH,
    AX,
    CX,
    DX,
    BX,
    SP,
    BP,
    SI,
    DI,
}

/// Effective address forms, selected by the Mod and R/M fields.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EacForm {
    /// `[disp16]`, no base register.
    Direct,
    Base,
    TwoBases,
    BaseDisp,
    TwoBasesDisp,
}

/// Register selected by a 3-bit REG or R/M field, indexed by `[field][w]`.
pub const REGISTER_TABLE: [[Register; 2]; 8] = [
    [Register::AL, Register::AX],
    [Register::CL, Register::CX],
    [Register::DL, Register::DX],
    [Register::BL, Register::BX],
    [Register::AH, Register::SP],
    [Register::CH, Register::BP],
    [Register::DH, Register::SI],
    [Register::BH, Register::DI],
];

/// Base registers of the effective address selected by R/M.
pub const EAC_BASE_TABLE: [[Option<Register>; 2]; 8] = [
    [Some(Register::BX), Some(Register::SI)],
    [Some(Register::BX), Some(Register::DI)],
    [Some(Register::BP), Some(Register::SI)],
    [Some(Register::BP), Some(Register::DI)],
    [Some(Register::SI), None],
    [Some(Register::DI), None],
    [Some(Register::BP), None],
    [Some(Register::BX), None],
];

/// Effective address form, indexed by `[rm][mod]` for the three memory modes.
/// Mod 0b11 is register mode and has no entry.
pub const EAC_FORM_TABLE: [[EacForm; 3]; 8] = [
    [EacForm::TwoBases, EacForm::TwoBasesDisp, EacForm::TwoBasesDisp],
    [EacForm::TwoBases, EacForm::TwoBasesDisp, EacForm::TwoBasesDisp],
    [EacForm::TwoBases, EacForm::TwoBasesDisp, EacForm::TwoBasesDisp],
    [EacForm::TwoBases, EacForm::TwoBasesDisp, EacForm::TwoBasesDisp],
    [EacForm::Base, EacForm::BaseDisp, EacForm::BaseDisp],
    [EacForm::Base, EacForm::BaseDisp, EacForm::BaseDisp],
    [EacForm::Direct, EacForm::BaseDisp, EacForm::BaseDisp],
    [EacForm::Base, EacForm::BaseDisp, EacForm::BaseDisp],
];

pub const MOD_REGISTER: u8 = 0b11;
const RM_DIRECT: u8 = 0b110;

#[inline(always)]
pub fn register(field: u8, w: u8) -> Register {
    REGISTER_TABLE[(field & 0x07) as usize][(w & 0x01) as usize]
}

/// Number of displacement bytes following a ModR/M byte with the given Mod and R/M fields.
/// Mod 0b00 with R/M 0b110 is promoted to a 16-bit direct address.
pub fn displacement_len(b_mod: u8, b_rm: u8) -> usize {
    match (b_mod & 0x03, b_rm & 0x07) {
        (0b00, RM_DIRECT) => 2,
        (0b00, _) => 0,
        (0b01, _) => 1,
        (0b10, _) => 2,
        _ => 0,
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EffectiveAddress {
    pub form: EacForm,
    pub bases: [Option<Register>; 2],
    /// Signed displacement, or the absolute address for [EacForm::Direct].
    pub displacement: i16,
}

impl EffectiveAddress {
    /// Resolve a memory-mode Mod/R/M pair. Returns None for register mode.
    pub fn from_modrm(b_mod: u8, b_rm: u8, displacement: i16) -> Option<Self> {
        if b_mod & 0x03 == MOD_REGISTER {
            return None;
        }
        let rm = (b_rm & 0x07) as usize;
        let form = EAC_FORM_TABLE[rm][(b_mod & 0x03) as usize];
        let bases = match form {
            EacForm::Direct => [None, None],
            _ => EAC_BASE_TABLE[rm],
        };
        Some(Self {
            form,
            bases,
            displacement,
        })
    }

    pub fn direct(address: u16) -> Self {
        Self {
            form: EacForm::Direct,
            bases: [None, None],
            displacement: address as i16,
        }
    }
}

struct WithSign(i16);

impl Display for WithSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => Ok(()),
            d if d < 0 => write!(f, " - {}", (d as i32).abs()),
            d => write!(f, " + {}", d),
        }
    }
}

impl Display for EffectiveAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base = |i: usize| self.bases[i].map(<&'static str>::from).unwrap_or("?");
        match self.form {
            EacForm::Direct => write!(f, "[{}]", self.displacement as u16),
            EacForm::Base => write!(f, "[{}]", base(0)),
            EacForm::TwoBases => write!(f, "[{} + {}]", base(0), base(1)),
            EacForm::BaseDisp => write!(f, "[{}{}]", base(0), WithSign(self.displacement)),
            EacForm::TwoBasesDisp => {
                write!(f, "[{} + {}{}]", base(0), base(1), WithSign(self.displacement))
            }
        }
    }
}
