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


    sim8086_core::disassembler.rs

    Stream disassembly. Decodes instructions back to back from an offset,
    stopping at the end of input or at the first decode error. There is no
    resynchronization after an error.

*/

use std::iter::FusedIterator;

use crate::{
    bytequeue::{ByteQueue, SliceQueue},
    decode::Decoder,
    error::StreamError,
    instruction::Instruction,
    printer::Printer,
    table::RuleTable,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DecodedInstruction {
    pub offset: usize,
    pub instruction: Instruction,
    pub size: usize,
}

/// The result of disassembling a byte stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Disassembly {
    /// Listing text produced up to the end of input or the first error.
    pub text: String,
    pub instructions: usize,
    /// Bytes consumed by successfully decoded instructions.
    pub consumed: usize,
    pub error: Option<StreamError>,
}

impl Disassembly {
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

pub struct Disassembler<'a> {
    decoder: Decoder<'a>,
}

impl<'a> Disassembler<'a> {
    pub fn new(table: &'a RuleTable) -> Self {
        Self {
            decoder: Decoder::new(table),
        }
    }

    pub fn disassemble(&self, bytes: &[u8]) -> Disassembly {
        self.disassemble_from(bytes, 0)
    }

    pub fn disassemble_from(&self, bytes: &[u8], offset: usize) -> Disassembly {
        let mut printer = Printer::new();
        let mut consumed = 0;
        let mut error = None;

        for decoded in self.instructions(bytes, offset) {
            match decoded {
                Ok(d) => {
                    printer.print(&d.instruction);
                    consumed += d.size;
                }
                Err(e) => {
                    log::warn!("Disassembly stopped: {}", e);
                    error = Some(e);
                }
            }
        }

        log::debug!(
            "Disassembled {} instructions ({} bytes) from offset {:#06X}",
            printer.count(),
            consumed,
            offset
        );

        Disassembly {
            instructions: printer.count(),
            text: printer.finish(),
            consumed,
            error,
        }
    }

    /// Iterate over the instructions of `bytes` starting at `offset`. The
    /// iterator yields at most one error, after which it is exhausted.
    pub fn instructions<'b>(&'b self, bytes: &'b [u8], offset: usize) -> Instructions<'a, 'b> {
        let mut queue = SliceQueue::new(bytes);
        queue.seek(offset);
        Instructions {
            decoder: &self.decoder,
            queue,
            done: false,
        }
    }
}

pub struct Instructions<'a, 'b> {
    decoder: &'b Decoder<'a>,
    queue: SliceQueue<'b>,
    done: bool,
}

impl Iterator for Instructions<'_, '_> {
    type Item = Result<DecodedInstruction, StreamError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.queue.remaining() == 0 {
            return None;
        }

        let offset = self.queue.tell();
        match self.decoder.decode(&mut self.queue) {
            Ok((instruction, size)) => Some(Ok(DecodedInstruction {
                offset,
                instruction,
                size,
            })),
            Err(source) => {
                self.done = true;
                Some(Err(StreamError { offset, source }))
            }
        }
    }
}

impl FusedIterator for Instructions<'_, '_> {}

/// Disassemble a complete byte stream with the given table.
pub fn disassemble(bytes: &[u8], table: &RuleTable) -> Disassembly {
    Disassembler::new(table).disassemble(bytes)
}
