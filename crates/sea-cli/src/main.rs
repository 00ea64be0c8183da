// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Sea CLI: lex, parse and format Sea source files.

mod commands;
mod help;
mod output;

use std::env;
use std::process;

use help::{print_command_usage, print_usage};

/// Output format for commands that support machine-readable output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Human,
    Json,
}

/// Flags shared by all commands.
#[derive(Debug, Default)]
struct Options {
    format: Format,
    check: bool,
    no_color: bool,
}

fn main() {
    let (positional, opts) = match parse_args(env::args().skip(1)) {
        Ok(parsed) => parsed,
        Err(msg) => {
            output::init(false);
            eprintln!("{}: {}", output::error_label(), msg);
            process::exit(2);
        }
    };
    output::init(opts.no_color);
    init_tracing();

    let Some(command) = positional.first() else {
        print_usage();
        return;
    };
    let arg = positional.get(1).map(String::as_str);

    match command.as_str() {
        "lex" => commands::cmd_lex(require(arg, "lex")),
        "parse" => commands::cmd_parse(require(arg, "parse"), opts.format),
        "fmt" => commands::cmd_fmt(require(arg, "fmt"), opts.check),
        "explain" => commands::cmd_explain(require(arg, "explain")),
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => println!("sea {}", env!("CARGO_PKG_VERSION")),
        other if other.ends_with(".sea") => commands::cmd_parse(other, opts.format),
        other => {
            eprintln!("{}: unknown command `{}`", output::error_label(), other);
            eprintln!();
            print_usage();
            process::exit(2);
        }
    }
}

fn require<'a>(arg: Option<&'a str>, command: &str) -> &'a str {
    match arg {
        Some(a) => a,
        None => {
            print_command_usage(command);
            process::exit(2);
        }
    }
}

/// Split arguments into positionals and flags. Flags may appear anywhere.
fn parse_args(args: impl IntoIterator<Item = String>) -> Result<(Vec<String>, Options), String> {
    let mut positional = Vec::new();
    let mut opts = Options::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--check" => opts.check = true,
            "--no-color" => opts.no_color = true,
            "--format" => {
                let value = args.next().ok_or("--format needs a value (human or json)")?;
                opts.format = parse_format(&value)?;
            }
            s if s.starts_with("--format=") => {
                opts.format = parse_format(&s["--format=".len()..])?;
            }
            // Long help and version are accepted as commands.
            "--help" | "--version" => positional.push(arg),
            s if s.starts_with("--") => return Err(format!("unknown option `{}`", s)),
            _ => positional.push(arg),
        }
    }
    Ok((positional, opts))
}

fn parse_format(value: &str) -> Result<Format, String> {
    match value {
        "human" => Ok(Format::Human),
        "json" => Ok(Format::Json),
        other => Err(format!("unknown format `{}` (expected human or json)", other)),
    }
}

/// Install a log subscriber when `RUST_LOG` is set, e.g.
/// `RUST_LOG=sea_parser=trace sea parse main.sea`. Logs go to stderr.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<(Vec<String>, Options), String> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn flags_anywhere() {
        let (pos, opts) = args(&["--no-color", "parse", "a.sea", "--format", "json"]).unwrap();
        assert_eq!(pos, ["parse", "a.sea"]);
        assert!(opts.no_color);
        assert_eq!(opts.format, Format::Json);

        let (_, opts) = args(&["fmt", "--check", "a.sea"]).unwrap();
        assert!(opts.check);

        let (_, opts) = args(&["parse", "--format=human", "a.sea"]).unwrap();
        assert_eq!(opts.format, Format::Human);
    }

    #[test]
    fn bad_flags() {
        assert!(args(&["parse", "--format"]).is_err());
        assert!(args(&["parse", "--format", "xml"]).is_err());
        assert!(args(&["--frobnicate"]).is_err());
    }
}
