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

    sim8086_config::bpaf_config

    Command line arguments, parsed with bpaf.
*/

use std::path::PathBuf;

use bpaf::Bpaf;
use sim8086_core::MatchStrategy;

#[derive(Bpaf)]
#[bpaf(options, version, generate(cli_args))]
#[derive(Debug, Default)]
pub struct CmdLineArgs {
    #[bpaf(long("config_file"), long("configfile"))]
    pub config_file: Option<PathBuf>,

    /// Compile this grammar file instead of using the built-in rule table
    #[bpaf(long)]
    pub grammar: Option<PathBuf>,

    /// Rule matching strategy: linear or lead_byte_index
    #[bpaf(long)]
    pub strategy: Option<MatchStrategy>,

    /// Print the rule table as Rust source instead of disassembling
    #[bpaf(long("emit_table"), long("emittable"), switch)]
    pub emit_table: bool,

    #[bpaf(short('o'), long)]
    pub output: Option<PathBuf>,

    /// Binary file to disassemble
    #[bpaf(positional("FILE"))]
    pub input: Option<PathBuf>,
}
