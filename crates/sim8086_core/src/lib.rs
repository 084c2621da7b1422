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


    sim8086_core::lib.rs

    A table-driven 8086 disassembler. Instruction encodings are described
    by a small bitfield grammar, compiled into a RuleTable, and matched
    against machine code to produce NASM-compatible assembler text.

*/

pub mod addressing;
pub mod bytequeue;
pub mod decode;
pub mod disassembler;
pub mod error;
pub mod grammar;
pub mod instruction;
pub mod mnemonic;
pub mod printer;
pub mod rule;
pub mod table;
pub mod tablegen;

pub use decode::{decode, Decoder};
pub use disassembler::{disassemble, Disassembler, Disassembly};
pub use error::{DecodeError, GrammarError, StreamError, TableError};
pub use instruction::{Instruction, Operand};
pub use table::{MatchStrategy, RuleTable};
