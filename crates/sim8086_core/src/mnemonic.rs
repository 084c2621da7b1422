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

    sim8086_core::mnemonic.rs

    Instruction mnemonics known to the grammar, and the name table used to
    resolve them.

*/

use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Instruction names. Grammar files spell them in any case (conventionally
/// upper case); they are always rendered lower case.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Mnemonic {
    MOV,
    ADD,
    SUB,
    CMP,
    JE,
    JL,
    JLE,
    JB,
    JBE,
    JP,
    JO,
    JS,
    JNE,
    JNZ,
    JNL,
    JG,
    JNB,
    JA,
    JNP,
    JNO,
    JNS,
    LOOP,
    LOOPZ,
    LOOPNZ,
    JCXZ,
}

impl Mnemonic {
    /// Conditional jumps and the loop family all take a single signed 8-bit
    /// displacement relative to the end of the instruction.
    pub fn is_relative_jump(&self) -> bool {
        use Mnemonic::*;
        matches!(
            self,
            JE | JL
                | JLE
                | JB
                | JBE
                | JP
                | JO
                | JS
                | JNE
                | JNZ
                | JNL
                | JG
                | JNB
                | JA
                | JNP
                | JNO
                | JNS
                | LOOP
                | LOOPZ
                | LOOPNZ
                | JCXZ
        )
    }

    /// Mnemonics with a sign-extended imm8 encoding for word operands, which an
    /// assembler prefers whenever the value fits in a byte.
    pub fn has_short_immediate(&self) -> bool {
        matches!(self, Mnemonic::ADD | Mnemonic::SUB | Mnemonic::CMP)
    }
}

/// Resolve a mnemonic by name, as it appears in the first segment of a grammar line.
pub fn mnemonic_from_str(name: &str) -> Option<Mnemonic> {
    name.parse::<Mnemonic>().ok()
}
