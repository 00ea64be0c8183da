// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Command implementations.

mod syntax;
mod tools;

pub use syntax::{cmd_lex, cmd_parse};
pub use tools::{cmd_explain, cmd_fmt};

use std::fs;
use std::process;

use sea_diagnostics::formatter::DiagnosticFormatter;
use sea_diagnostics::Diagnostic;

use crate::output;

/// Read a source file or exit with a message.
fn read_source(path: &str) -> String {
    match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}: reading {}: {}", output::error_label(), output::file_path(path), e);
            process::exit(1);
        }
    }
}

/// Print diagnostics for `path` to stderr.
fn show_diagnostics(source: &str, path: &str, diagnostics: &[Diagnostic]) {
    let formatter = DiagnosticFormatter::new(source).with_file_name(path);
    for diagnostic in diagnostics {
        eprintln!("{}", formatter.format(diagnostic));
    }
}
