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

    sim8086_core::table.rs

    The rule table: an ordered, immutable list of decoding rules and the
    strategy used to find the candidates for a lead byte.

    The built-in table is compiled once from the grammar embedded in the
    crate and shared for the life of the program.

*/

use std::slice;

use lazy_static::lazy_static;
use serde::Deserialize;
use strum_macros::{Display, EnumIter, EnumString};

use crate::{
    error::TableError,
    grammar::compile_grammar,
    rule::{DecodingRule, PartKind},
};

pub const BUILTIN_GRAMMAR: &str = include_str!("../grammar/sim8086.grammar");

lazy_static! {
    static ref BUILTIN_TABLE: Result<RuleTable, TableError> = {
        let table = RuleTable::from_grammar(BUILTIN_GRAMMAR, MatchStrategy::default());
        match &table {
            Ok(table) => log::debug!("Compiled built-in rule table: {} rules", table.len()),
            Err(e) => log::error!("Failed to compile built-in rule table: {}", e),
        }
        table
    };
}

/// How the decoder finds the rules that may match a lead byte. Both strategies
/// visit candidates in table order and so always produce the same result.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize, Display, EnumIter, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MatchStrategy {
    /// Scan every rule in order.
    #[default]
    Linear,
    /// Look up precomputed candidate lists for each of the 256 lead byte values.
    LeadByteIndex,
}

#[derive(Clone, Debug)]
pub struct RuleTable {
    rules: Vec<DecodingRule>,
    strategy: MatchStrategy,
    lead_index: Vec<Vec<usize>>,
}

impl RuleTable {
    /// Build a table from already compiled rules. Every rule is validated, and
    /// any two rules that could match the same input are rejected.
    pub fn new(rules: Vec<DecodingRule>, strategy: MatchStrategy) -> Result<Self, TableError> {
        for (index, rule) in rules.iter().enumerate() {
            Self::validate_rule(index, rule)?;
        }

        for (first, rule_a) in rules.iter().enumerate() {
            for (second, rule_b) in rules.iter().enumerate().skip(first + 1) {
                if rule_a.overlaps(rule_b) {
                    return Err(TableError::AmbiguousRules {
                        first,
                        first_mnemonic: rule_a.mnemonic,
                        second,
                        second_mnemonic: rule_b.mnemonic,
                    });
                }
            }
        }

        let lead_index = Self::build_lead_index(&rules);
        log::debug!("Built rule table: {} rules, strategy: {}", rules.len(), strategy);
        Ok(Self {
            rules,
            strategy,
            lead_index,
        })
    }

    pub fn from_rules(rules: &[DecodingRule], strategy: MatchStrategy) -> Result<Self, TableError> {
        Self::new(rules.to_vec(), strategy)
    }

    pub fn from_grammar(source: &str, strategy: MatchStrategy) -> Result<Self, TableError> {
        let rules = compile_grammar(source)?;
        Self::new(rules, strategy)
    }

    /// The table compiled from the built-in grammar, using [MatchStrategy::Linear].
    pub fn builtin() -> Result<&'static RuleTable, TableError> {
        BUILTIN_TABLE.as_ref().map_err(Clone::clone)
    }

    pub fn with_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    pub fn rules(&self) -> &[DecodingRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules whose lead byte literals match `lead`, in table order.
    pub fn candidates(&self, lead: u8) -> Candidates<'_> {
        let iter = match self.strategy {
            MatchStrategy::Linear => CandidateIter::Linear(self.rules.iter()),
            MatchStrategy::LeadByteIndex => CandidateIter::Indexed(self.lead_index[lead as usize].iter()),
        };
        Candidates {
            rules: &self.rules,
            lead,
            iter,
        }
    }

    fn validate_rule(index: usize, rule: &DecodingRule) -> Result<(), TableError> {
        let malformed = |byte: usize, reason: String| TableError::MalformedRule {
            index,
            mnemonic: rule.mnemonic,
            byte,
            reason,
        };

        let mut seen_byte = false;
        for (byte_idx, slot) in rule.bytes.iter().enumerate() {
            let Some(byte) = slot
            else {
                continue;
            };
            byte.check_partition().map_err(|reason| malformed(byte_idx, reason))?;

            if !seen_byte && !byte.has_kind(PartKind::Literal) {
                return Err(malformed(byte_idx, "lead byte has no opcode literal".to_string()));
            }
            if !seen_byte && byte.condition.is_some() {
                return Err(malformed(byte_idx, "lead byte cannot be conditional".to_string()));
            }
            seen_byte = true;
        }

        if !seen_byte {
            return Err(malformed(0, "rule has no bytes".to_string()));
        }
        Ok(())
    }

    fn build_lead_index(rules: &[DecodingRule]) -> Vec<Vec<usize>> {
        (0..=u8::MAX)
            .map(|lead| {
                rules
                    .iter()
                    .enumerate()
                    .filter(|(_, rule)| rule.matches_lead(lead))
                    .map(|(i, _)| i)
                    .collect()
            })
            .collect()
    }
}

enum CandidateIter<'a> {
    Linear(slice::Iter<'a, DecodingRule>),
    Indexed(slice::Iter<'a, usize>),
}

pub struct Candidates<'a> {
    rules: &'a [DecodingRule],
    lead: u8,
    iter: CandidateIter<'a>,
}

impl<'a> Iterator for Candidates<'a> {
    type Item = &'a DecodingRule;

    fn next(&mut self) -> Option<Self::Item> {
        let rules = self.rules;
        let lead = self.lead;
        match &mut self.iter {
            CandidateIter::Linear(iter) => iter.find(|rule| rule.matches_lead(lead)),
            CandidateIter::Indexed(iter) => iter.next().map(|&i| &rules[i]),
        }
    }
}
