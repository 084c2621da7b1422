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

    sim8086_core::grammar.rs

    Compiler for the bitfield grammar. Each rule line has the form

        MNEMONIC | <byte 1 tokens> | <byte 2 tokens> | ...

    where each byte is described left to right (most significant bit first)
    by binary literals such as `100010` and named fields:

        mod (2 bits), reg, rm (3 bits), d, w, s (1 bit),
        disp-lo, disp-hi, data (8 bits)

    A payload token (data, disp-lo, disp-hi) may be followed by a condition
    such as `(w=1)` or `(s=0,w=1)`, in which case the byte is only present
    when the condition holds for fields decoded earlier in the instruction.

    Lines starting with ';' are comments.

*/

use crate::{
    error::{GrammarError, TableError},
    mnemonic::mnemonic_from_str,
    rule::{
        ByteDecoding,
        Condition,
        DecodingRule,
        Part,
        PartKind,
        MAX_BYTE_PARTS,
        MAX_CONDITION_CLAUSES,
        MAX_RULE_BYTES,
    },
};

pub const COMMENT_PREFIX: char = ';';
pub const SEGMENT_SEPARATOR: char = '|';

fn is_binary(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c == '0' || c == '1')
}

fn unsupported(token: &str, reason: impl Into<String>) -> GrammarError {
    GrammarError::UnsupportedCondition {
        token: token.to_string(),
        reason: reason.into(),
    }
}

/// Compile a single grammar line into a [DecodingRule].
pub fn compile_rule(line: &str) -> Result<DecodingRule, GrammarError> {
    let segments: Vec<&str> = line.split(SEGMENT_SEPARATOR).map(str::trim).collect();

    if segments.len() < 2 {
        return Err(GrammarError::InvalidRule(format!(
            "expected a mnemonic followed by at least one byte, found {} segment(s)",
            segments.len()
        )));
    }
    if segments.len() - 1 > MAX_RULE_BYTES {
        return Err(GrammarError::InvalidRule(format!(
            "{} bytes specified, at most {} are supported",
            segments.len() - 1,
            MAX_RULE_BYTES
        )));
    }

    let mnemonic = mnemonic_from_str(segments[0]).ok_or_else(|| GrammarError::UnknownMnemonic(segments[0].to_string()))?;

    let mut bytes: [Option<ByteDecoding>; MAX_RULE_BYTES] = [None; MAX_RULE_BYTES];
    // Fields available to conditions: everything declared by preceding bytes.
    let mut declared: Vec<PartKind> = Vec::new();

    for (idx, segment) in segments[1..].iter().enumerate() {
        let byte = compile_byte(idx, segment, &declared)?;
        if let Some(b) = &byte {
            declared.extend(b.parts().map(|p| p.kind));
        }
        bytes[idx] = byte;
    }

    let lead = match bytes.iter().flatten().next() {
        Some(lead) => lead,
        None => return Err(GrammarError::AllBytesEmpty),
    };
    if !lead.has_kind(PartKind::Literal) {
        return Err(GrammarError::InvalidRule(
            "the first byte must contain an opcode literal".to_string(),
        ));
    }

    Ok(DecodingRule { mnemonic, bytes })
}

fn compile_byte(idx: usize, segment: &str, declared: &[PartKind]) -> Result<Option<ByteDecoding>, GrammarError> {
    let mut parts: [Option<Part>; MAX_BYTE_PARTS] = [None; MAX_BYTE_PARTS];
    let mut part_ct = 0;
    let mut remaining: usize = 8;
    let mut condition = None;

    let mut tokens = segment.split_whitespace().peekable();
    while let Some(token) = tokens.next() {
        if token.starts_with('(') {
            return Err(GrammarError::InvalidRule(format!(
                "condition '{}' must follow data, disp-lo or disp-hi",
                token
            )));
        }

        let (kind, width, literal) = if let Some(kind) = PartKind::from_token(token) {
            let width = kind.named_width().unwrap_or(0) as usize;
            (kind, width, None)
        }
        else if is_binary(token) {
            if token.len() > 8 {
                return Err(GrammarError::BitOverflow {
                    token: token.to_string(),
                    byte: idx,
                    width: token.len(),
                    remaining,
                });
            }
            let literal = u8::from_str_radix(token, 2).map_err(|_| GrammarError::UnknownToken(token.to_string()))?;
            (PartKind::Literal, token.len(), Some(literal))
        }
        else {
            return Err(GrammarError::UnknownToken(token.to_string()));
        };

        if width > remaining {
            return Err(GrammarError::BitOverflow {
                token: token.to_string(),
                byte: idx,
                width,
                remaining,
            });
        }
        if part_ct == MAX_BYTE_PARTS {
            return Err(GrammarError::InvalidRule(format!(
                "byte {} has more than {} parts",
                idx, MAX_BYTE_PARTS
            )));
        }

        remaining -= width;
        parts[part_ct] = Some(Part {
            kind,
            mask: ((1u16 << width) - 1) as u8,
            shift: remaining as u8,
            literal,
        });
        part_ct += 1;

        if kind.is_payload() {
            if let Some(next) = tokens.peek() {
                if next.starts_with('(') {
                    condition = Some(parse_condition(next, declared)?);
                    tokens.next();
                }
            }
        }
    }

    if part_ct == 0 {
        return Ok(None);
    }
    if remaining != 0 {
        return Err(GrammarError::IncompleteByte { byte: idx, remaining });
    }

    Ok(Some(ByteDecoding { parts, condition }))
}

fn parse_condition(token: &str, declared: &[PartKind]) -> Result<Condition, GrammarError> {
    let inner = token
        .strip_prefix('(')
        .and_then(|t| t.strip_suffix(')'))
        .ok_or_else(|| unsupported(token, "expected '(field=value)'"))?;

    let mut clauses = [None; MAX_CONDITION_CLAUSES];
    for (i, clause) in inner.split(',').enumerate() {
        if i >= MAX_CONDITION_CLAUSES {
            return Err(unsupported(
                token,
                format!("at most {} clauses are supported", MAX_CONDITION_CLAUSES),
            ));
        }
        let (name, value) = clause
            .split_once('=')
            .ok_or_else(|| unsupported(token, "expected field=value"))?;
        let (name, value) = (name.trim(), value.trim());

        let kind = PartKind::from_token(name)
            .filter(PartKind::is_field)
            .ok_or_else(|| unsupported(token, format!("'{}' is not a testable field", name)))?;
        let width = kind.named_width().unwrap_or(0) as usize;

        if !is_binary(value) || value.len() > width {
            return Err(unsupported(
                token,
                format!("'{}' is not a {}-bit binary value", value, width),
            ));
        }
        if !declared.contains(&kind) {
            return Err(unsupported(
                token,
                format!("field '{}' is not decoded before this byte", name),
            ));
        }
        let value = u8::from_str_radix(value, 2).map_err(|_| unsupported(token, "bad value"))?;
        clauses[i] = Some((kind, value));
    }

    Ok(Condition { clauses })
}

/// Compile every rule line of a grammar source. The first line that fails to compile
/// aborts compilation; its line number and text are reported with the error.
pub fn compile_grammar(source: &str) -> Result<Vec<DecodingRule>, TableError> {
    let mut rules = Vec::new();

    for (line_no, raw_line) in source.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            continue;
        }

        let rule = compile_rule(line).map_err(|source| TableError::Grammar {
            line: line_no + 1,
            text: line.to_string(),
            source,
        })?;
        log::trace!("line {}: compiled {} rule", line_no + 1, rule.mnemonic);
        rules.push(rule);
    }

    Ok(rules)
}
