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


    sim8086_core::printer.rs

    Accumulates the assembler listing for a sequence of instructions.

*/

use std::fmt::Write;

use crate::instruction::Instruction;

pub const HEADER: &str = "bits 16";

pub struct Printer {
    out: String,
    count: usize,
}

impl Printer {
    pub fn new() -> Self {
        let mut out = String::with_capacity(256);
        out.push_str(HEADER);
        out.push('\n');
        Self { out, count: 0 }
    }

    /// Append an instruction on its own line.
    pub fn print(&mut self, instruction: &Instruction) {
        self.out.push('\n');
        // Writing into a String cannot fail.
        let _ = write!(self.out, "{}", instruction);
        self.count += 1;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn finish(self) -> String {
        self.out
    }
}
