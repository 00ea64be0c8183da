// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Front-end commands: lex, parse.

use std::process;

use sea_ast::token::TokenKind;
use sea_ast::LineMap;
use sea_diagnostics::json::{to_json_report, to_json_string};
use sea_diagnostics::ToDiagnostic;

use super::{read_source, show_diagnostics};
use crate::{output, Format};

pub fn cmd_lex(path: &str) {
    let source = read_source(path);
    let result = sea_lexer::Lexer::new(&source).tokenize();

    for tok in &result.tokens {
        if tok.kind == TokenKind::Eof {
            continue;
        }
        println!("{:>4}:{:<3} {:?}", tok.pos.line, tok.pos.column, tok.kind);
    }
    let line_map = LineMap::new(&source);
    for comment in &result.comments {
        let pos = line_map.position(comment.span.start);
        println!("{:>4}:{:<3} Comment({:?})", pos.line, pos.column, comment.text);
    }

    if result.is_ok() {
        println!("\n{}", output::banner_ok("Lex"));
        return;
    }

    let diagnostics: Vec<_> = result.errors.iter().map(|e| e.to_diagnostic()).collect();
    show_diagnostics(&source, path, &diagnostics);
    eprintln!("{}", output::banner_fail("Lex", diagnostics.len()));
    process::exit(1);
}

pub fn cmd_parse(path: &str, format: Format) {
    let source = read_source(path);
    let result = sea_parser::parse_source(&source);
    let diagnostics: Vec<_> = result.errors.iter().map(|e| e.to_diagnostic()).collect();
    let phase = if result.errors.iter().any(|e| e.is_lex_error()) { "lex" } else { "parse" };

    match format {
        Format::Json if diagnostics.is_empty() => match serde_json::to_string_pretty(&result.file) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("{}: serializing tree: {}", output::error_label(), e);
                process::exit(1);
            }
        },
        Format::Json => {
            println!("{}", to_json_string(&to_json_report(&diagnostics, &source, path, phase)));
        }
        Format::Human if diagnostics.is_empty() => {
            print!("{}", sea_fmt::dump::dump_file(&result.file));
            println!("\n{}", output::banner_ok("Parse"));
        }
        Format::Human => {
            show_diagnostics(&source, path, &diagnostics);
            eprintln!("{}", output::banner_fail("Parse", diagnostics.len()));
        }
    }

    if !diagnostics.is_empty() {
        process::exit(1);
    }
}
