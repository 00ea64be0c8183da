// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Parser for the Sea language.
//!
//! Transforms a token stream into a syntax tree. [`parse_source`] runs the
//! lexer and parser together and merges their errors.

mod error;
mod hints;
mod parser;

pub use error::{ParseError, ParseErrorKind};
pub use parser::{ParseResult, Parser};

use sea_ast::SourceFile;
use sea_lexer::Lexer;

/// Lex and parse `source`.
///
/// A fatal lexer error (an unterminated literal) aborts the file: the result
/// holds an empty tree and only the lexer errors. Otherwise lexer and parser
/// errors are merged in source order.
pub fn parse_source(source: &str) -> ParseResult {
    let lexed = Lexer::new(source).tokenize();
    let fatal = lexed.has_fatal();
    let mut errors: Vec<ParseError> = lexed.errors.into_iter().map(ParseError::from).collect();

    if fatal {
        return ParseResult { file: SourceFile::empty(source.len()), errors };
    }

    let parsed = Parser::new(lexed.tokens).parse();
    errors.extend(parsed.errors);
    errors.sort_by_key(|e| e.span.start);

    ParseResult { file: parsed.file, errors }
}

#[cfg(test)]
mod tests;
