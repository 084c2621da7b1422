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


    sim8086_core::tablegen.rs

    Renders a RuleTable as Rust source for a static rule table, so that a
    grammar can be compiled ahead of time and loaded with
    RuleTable::from_rules.

*/

use std::fmt::Write;

use crate::{
    rule::{ByteDecoding, Condition, Part},
    table::RuleTable,
};

pub const GENERATED_HEADER: &str = "// Generated by sim8086 --emit_table. Do not edit.\n";

fn part_source(part: &Option<Part>) -> String {
    match part {
        Some(p) => {
            let literal = match p.literal {
                Some(l) => format!("Some({:#b})", l),
                None => "None".to_string(),
            };
            format!(
                "Some(Part {{ kind: PartKind::{:?}, mask: {:#010b}, shift: {}, literal: {} }})",
                p.kind, p.mask, p.shift, literal
            )
        }
        None => "None".to_string(),
    }
}

fn condition_source(condition: &Option<Condition>) -> String {
    match condition {
        Some(c) => {
            let clauses: Vec<String> = c
                .clauses
                .iter()
                .map(|clause| match clause {
                    Some((kind, value)) => format!("Some((PartKind::{:?}, {}))", kind, value),
                    None => "None".to_string(),
                })
                .collect();
            format!("Some(Condition {{ clauses: [{}] }})", clauses.join(", "))
        }
        None => "None".to_string(),
    }
}

fn byte_source(out: &mut String, byte: &Option<ByteDecoding>) {
    match byte {
        Some(b) => {
            out.push_str("            Some(ByteDecoding {\n                parts: [\n");
            for part in b.parts.iter() {
                let _ = writeln!(out, "                    {},", part_source(part));
            }
            let _ = writeln!(out, "                ],\n                condition: {},", condition_source(&b.condition));
            out.push_str("            }),\n");
        }
        None => out.push_str("            None,\n"),
    }
}

/// Generate Rust source declaring `pub static RULES: &[DecodingRule]` with the
/// rules of `table`, in table order.
pub fn generate_source(table: &RuleTable) -> String {
    let mut out = String::from(GENERATED_HEADER);
    out.push_str("use sim8086_core::{\n");
    out.push_str("    mnemonic::Mnemonic,\n");
    out.push_str("    rule::{ByteDecoding, Condition, DecodingRule, Part, PartKind},\n");
    out.push_str("};\n\n");
    out.push_str("#[rustfmt::skip]\n");
    out.push_str("pub static RULES: &[DecodingRule] = &[\n");

    for rule in table.rules() {
        let _ = writeln!(out, "    DecodingRule {{\n        mnemonic: Mnemonic::{:?},\n        bytes: [", rule.mnemonic);
        for byte in rule.bytes.iter() {
            byte_source(&mut out, byte);
        }
        out.push_str("        ],\n    },\n");
    }

    out.push_str("];\n");
    log::debug!("Generated static table source for {} rules", table.len());
    out
}
