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

    sim8086_core::error.rs

    Error types for grammar compilation, rule table construction and
    instruction decoding.

*/

use thiserror::Error;

use crate::mnemonic::Mnemonic;

/// Errors produced while compiling a single grammar line.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum GrammarError {
    #[error("Invalid rule: {0}")]
    InvalidRule(String),
    #[error("Unknown mnemonic: '{0}'")]
    UnknownMnemonic(String),
    #[error("Token '{token}' needs {width} bits but only {remaining} remain in byte {byte}")]
    BitOverflow {
        token: String,
        byte: usize,
        width: usize,
        remaining: usize,
    },
    #[error("Unsupported condition '{token}': {reason}")]
    UnsupportedCondition { token: String, reason: String },
    #[error("All bytes of the rule are empty")]
    AllBytesEmpty,
    #[error("Unknown token: '{0}'")]
    UnknownToken(String),
    #[error("Byte {byte} leaves {remaining} bits unassigned")]
    IncompleteByte { byte: usize, remaining: usize },
}

/// Errors produced while building a [crate::table::RuleTable].
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum TableError {
    #[error("Failed to compile grammar line {line}: '{text}': {source}")]
    Grammar {
        line: usize,
        text: String,
        #[source]
        source: GrammarError,
    },
    #[error("Rule {index} ({mnemonic}) byte {byte} is malformed: {reason}")]
    MalformedRule {
        index: usize,
        mnemonic: Mnemonic,
        byte: usize,
        reason: String,
    },
    #[error("Rules {first} ({first_mnemonic}) and {second} ({second_mnemonic}) can match the same input")]
    AmbiguousRules {
        first: usize,
        first_mnemonic: Mnemonic,
        second: usize,
        second_mnemonic: Mnemonic,
    },
}

/// Errors produced while decoding a single instruction.
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum DecodeError {
    #[error("No rule matches opcode {0:#04X}")]
    UnmatchedOpcode(u8),
    #[error("{mnemonic} expected literal {expected:#b} in byte {byte} but found {found:#b}")]
    LiteralMismatch {
        mnemonic: Mnemonic,
        byte: usize,
        expected: u8,
        found: u8,
    },
    #[error("Unexpected end of input after {consumed} byte(s) of instruction")]
    TruncatedInput { consumed: usize },
    #[error("Invalid field combination for {mnemonic}: {reason}")]
    InvalidFieldCombination { mnemonic: Mnemonic, reason: &'static str },
}

/// A decode error positioned within a byte stream.
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
#[error("Decode error at offset {offset:#06X}: {source}")]
pub struct StreamError {
    pub offset: usize,
    #[source]
    pub source: DecodeError,
}
