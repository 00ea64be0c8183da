// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Help text for CLI commands.

use crate::output;

pub fn print_usage() {
    println!(
        "{} {} - front end for the Sea language",
        output::title("Sea"),
        output::version(env!("CARGO_PKG_VERSION"))
    );
    println!();
    println!(
        "{}: {} {} {}",
        output::section_header("Usage"),
        output::command("sea"),
        output::arg("<command>"),
        output::arg("[args]")
    );
    println!();
    println!("{}", output::section_header("Commands:"));
    println!("  {} {}        Print tokens and comments", output::command("lex"), output::arg("<file>"));
    println!("  {} {}      Parse a file and print its tree", output::command("parse"), output::arg("<file>"));
    println!("  {} {}        Print the file in canonical layout", output::command("fmt"), output::arg("<file>"));
    println!("  {} {}   Explain an error code", output::command("explain"), output::arg("<code>"));
    println!("  {}               Show this help", output::command("help"));
    println!("  {}            Show version", output::command("version"));
    println!();
    println!("{}", output::section_header("Options:"));
    println!("  {}  Output for parse: human (default) or json", output::arg("--format <fmt>"));
    println!("  {}         With fmt: exit 1 if the file is not formatted", output::arg("--check"));
    println!("  {}      Disable colored output", output::arg("--no-color"));
    println!();
    println!("A bare {} argument is parsed, as with {}.", output::arg("<file.sea>"), output::command("sea parse"));
    println!("Set {} (for example {}) for debug logs.", output::arg("RUST_LOG"), output::arg("sea_parser=trace"));
}

pub fn print_command_usage(command: &str) {
    let args = match command {
        "parse" => "<file> [--format human|json]",
        "fmt" => "<file> [--check]",
        "explain" => "<code>",
        _ => "<file>",
    };
    eprintln!(
        "{}: {} {} {}",
        output::section_header("Usage"),
        output::command("sea"),
        output::command(command),
        output::arg(args)
    );
}
