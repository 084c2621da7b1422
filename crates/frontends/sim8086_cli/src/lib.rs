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

    --------------------------------------------------------------------------
*/

//! sim8086 command line front-end main library component.

#![forbid(unsafe_code)]

use std::{fs, path::PathBuf};

use anyhow::{anyhow, Context};

use sim8086_config::{ConfigFileParams, DEFAULT_CONFIG_FILE};
use sim8086_core::{tablegen, Disassembler, RuleTable, StreamError};

/// How a run ended when no fatal error occurred.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Complete,
    /// Disassembly stopped early; the partial listing was still written.
    Stopped(StreamError),
}

/// Build the rule table selected by the configuration: a grammar file if one is
/// given, otherwise the built-in table.
pub fn load_table(config: &ConfigFileParams) -> Result<RuleTable, anyhow::Error> {
    let strategy = config.disassembler.strategy;
    let table = match &config.disassembler.grammar {
        Some(path) => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("Couldn't read grammar file {}", path.display()))?;
            RuleTable::from_grammar(&source, strategy)
                .with_context(|| format!("Couldn't compile grammar file {}", path.display()))?
        }
        None => RuleTable::builtin()?.clone().with_strategy(strategy),
    };
    log::debug!("Using rule table with {} rules, strategy: {}", table.len(), table.strategy());
    Ok(table)
}

fn write_output(target: Option<&PathBuf>, text: &str) -> Result<(), anyhow::Error> {
    match target {
        Some(path) => {
            fs::write(path, format!("{}\n", text))
                .with_context(|| format!("Couldn't write output file {}", path.display()))?;
            log::debug!("Wrote {} bytes to {}", text.len() + 1, path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}

/// Perform the action selected by the configuration.
pub fn execute(config: &ConfigFileParams) -> Result<Outcome, anyhow::Error> {
    let table = load_table(config)?;
    let output = config.output.file.as_ref();

    if config.output.emit_table {
        write_output(output, &tablegen::generate_source(&table))?;
        return Ok(Outcome::Complete);
    }

    let input = config
        .disassembler
        .input
        .as_ref()
        .ok_or_else(|| anyhow!("No input file specified"))?;
    let bytes = fs::read(input).with_context(|| format!("Couldn't read input file {}", input.display()))?;
    log::debug!("Read {} bytes from {}", bytes.len(), input.display());

    let result = Disassembler::new(&table).disassemble(&bytes);
    write_output(output, &result.text)?;

    Ok(match result.error {
        Some(e) => Outcome::Stopped(e),
        None => Outcome::Complete,
    })
}

pub fn run() {
    env_logger::init();

    let config = match sim8086_config::read_config_file(DEFAULT_CONFIG_FILE) {
        Ok(config) => config,
        Err(e) => match e.downcast_ref::<std::io::Error>() {
            Some(e) if e.kind() == std::io::ErrorKind::NotFound => {
                eprintln!("Configuration file not found! Check the path given with --config_file.");
                std::process::exit(1);
            }
            Some(e) => {
                eprintln!("Unknown IO error reading configuration file:\n{}", e);
                std::process::exit(1);
            }
            None => {
                eprintln!(
                    "Failed to parse configuration file. There may be a typo or otherwise invalid toml:\n{}",
                    e
                );
                std::process::exit(1);
            }
        },
    };

    match execute(&config) {
        Ok(Outcome::Complete) => {}
        Ok(Outcome::Stopped(e)) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
