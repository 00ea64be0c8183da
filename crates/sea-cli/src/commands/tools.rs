// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Developer tool commands: fmt, explain.

use std::process;

use colored::Colorize;
use sea_diagnostics::codes::ErrorCodeRegistry;
use sea_diagnostics::ToDiagnostic;
use sea_fmt::FormatError;

use super::{read_source, show_diagnostics};
use crate::output;

/// Print the formatted file. With `check_only`, print nothing on stdout and
/// exit 1 when formatting would change the file.
pub fn cmd_fmt(path: &str, check_only: bool) {
    let source = read_source(path);

    let formatted = match sea_fmt::format_source(&source) {
        Ok(out) => out,
        Err(FormatError::Syntax(errors)) => {
            let diagnostics: Vec<_> = errors.iter().map(|e| e.to_diagnostic()).collect();
            show_diagnostics(&source, path, &diagnostics);
            eprintln!("{}", output::banner_fail("Format", diagnostics.len()));
            process::exit(1);
        }
    };

    if !check_only {
        print!("{}", formatted);
        return;
    }

    if formatted == source {
        println!("{} {}", output::status_pass(), output::file_path(path));
    } else {
        println!("{} {} (would reformat)", output::status_fail(), output::file_path(path));
        process::exit(1);
    }
}

pub fn cmd_explain(code: &str) {
    let registry = ErrorCodeRegistry::default();
    let code = code.to_ascii_uppercase();

    let Some(info) = registry.get(&code) else {
        eprintln!("{}: unknown error code `{}`", output::error_label(), code);
        eprintln!();
        eprintln!("Known codes:");
        for info in registry.all() {
            eprintln!("  {}  {}", info.code, info.title);
        }
        process::exit(1);
    };

    println!("{}[{}]: {}", "error".red().bold(), info.code.red().bold(), info.title.bold());
    println!();
    println!("  Category: {}", info.category);
    println!();
    println!("  {}", info.explanation);
    println!();
    println!("  Run `sea parse <file>` to see this error in context.");
}
