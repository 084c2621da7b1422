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

//! The `sim8086_config` crate parses sim8086's optional TOML configuration file
//! and overlays command line arguments on top of the configuration file settings.
//! Command line arguments always take priority over the configuration file.
//!
//! Features:
//! - `use_bpaf`: Enable BPAF support for command line argument parsing.

use std::path::{Path, PathBuf};

use cfg_if::cfg_if;
use serde_derive::Deserialize;
use sim8086_core::MatchStrategy;

cfg_if! {
    if #[cfg(feature = "use_bpaf")] {
        mod bpaf_config;
        pub use bpaf_config::{cli_args, CmdLineArgs};
    }
    else {
        /// Without bpaf there is no command line; every field stays unset.
        #[derive(Debug, Default)]
        pub struct CmdLineArgs {
            pub config_file: Option<PathBuf>,
            pub grammar: Option<PathBuf>,
            pub strategy: Option<MatchStrategy>,
            pub emit_table: bool,
            pub output: Option<PathBuf>,
            pub input: Option<PathBuf>,
        }
    }
}

pub const DEFAULT_CONFIG_FILE: &str = "sim8086.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Disassembler {
    /// Grammar file to compile instead of the built-in rule table.
    pub grammar: Option<PathBuf>,
    pub strategy: MatchStrategy,
    /// Binary to disassemble.
    pub input: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Output {
    /// Write output here instead of stdout.
    pub file: Option<PathBuf>,
    /// Emit the rule table as Rust source instead of disassembling.
    pub emit_table: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFileParams {
    pub disassembler: Disassembler,
    pub output: Output,
}

impl ConfigFileParams {
    pub fn overlay(&mut self, shell_args: CmdLineArgs) {
        if let Some(grammar) = shell_args.grammar {
            self.disassembler.grammar = Some(grammar);
        }
        if let Some(strategy) = shell_args.strategy {
            self.disassembler.strategy = strategy;
        }
        if let Some(input) = shell_args.input {
            self.disassembler.input = Some(input);
        }
        if let Some(file) = shell_args.output {
            self.output.file = Some(file);
        }

        self.output.emit_table |= shell_args.emit_table;
    }
}

pub fn read_config(toml_string: impl AsRef<str>, shell_args: CmdLineArgs) -> Result<ConfigFileParams, anyhow::Error> {
    let mut toml_args: ConfigFileParams = toml::from_str(toml_string.as_ref())?;

    // Command line arguments override config file arguments
    toml_args.overlay(shell_args);

    Ok(toml_args)
}

/// Read the configuration for the given command line. A config file named on the
/// command line must exist; the default config file is optional.
pub fn load_config<P>(default_path: P, shell_args: CmdLineArgs) -> Result<ConfigFileParams, anyhow::Error>
where
    P: AsRef<Path>,
{
    let toml_string = if let Some(configfile_path) = shell_args.config_file.as_ref() {
        log::debug!("Reading config file {}", configfile_path.display());
        std::fs::read_to_string(configfile_path)?
    }
    else if default_path.as_ref().exists() {
        log::debug!("Reading config file {}", default_path.as_ref().display());
        std::fs::read_to_string(default_path)?
    }
    else {
        log::debug!("No config file found, using defaults");
        String::new()
    };

    read_config(toml_string, shell_args)
}

/// Read the command line, then the TOML configuration it selects, and overlay
/// the command line on top.
pub fn read_config_file<P>(default_path: P) -> Result<ConfigFileParams, anyhow::Error>
where
    P: AsRef<Path>,
{
    let shell_args: CmdLineArgs;

    cfg_if! {
        if #[cfg(feature = "use_bpaf")] {
            log::debug!("Reading command line arguments...");
            shell_args = cli_args().run();
        } else {
            log::debug!("Argument reading disabled...");
            shell_args = CmdLineArgs::default();
        }
    }

    load_config(default_path, shell_args)
}
