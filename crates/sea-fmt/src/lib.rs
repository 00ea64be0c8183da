// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Pretty printer for Sea source.
//!
//! [`format_source`] produces the canonical layout of a file. The output
//! parses back to the same tree; [`dump::dump_file`] gives a span-free form
//! to compare trees with.

mod comment;
mod config;
pub mod dump;
pub mod explicit;
mod printer;

pub use config::FormatConfig;

use sea_ast::token::Comment;
use sea_ast::SourceFile;
use sea_parser::{ParseError, Parser};

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// The source did not lex or parse cleanly; nothing is rewritten.
    #[error("cannot format source with {} syntax error(s)", .0.len())]
    Syntax(Vec<ParseError>),
}

/// Format Sea source code with default configuration.
pub fn format_source(source: &str) -> Result<String, FormatError> {
    format_source_with_config(source, &FormatConfig::default())
}

/// Format Sea source code with custom configuration.
pub fn format_source_with_config(source: &str, config: &FormatConfig) -> Result<String, FormatError> {
    let lex_result = sea_lexer::Lexer::new(source).tokenize();
    if !lex_result.is_ok() {
        return Err(FormatError::Syntax(lex_result.errors.into_iter().map(ParseError::from).collect()));
    }

    let parse_result = Parser::new(lex_result.tokens).parse();
    if !parse_result.is_ok() {
        return Err(FormatError::Syntax(parse_result.errors));
    }

    Ok(format_file(&parse_result.file, &lex_result.comments, config))
}

/// Print a parsed file. `comments` are the lexer's trivia for the same
/// source; each is placed before the item or statement that follows it.
pub fn format_file(file: &SourceFile, comments: &[Comment], config: &FormatConfig) -> String {
    let mut p = printer::Printer::new(comment::CommentList::new(comments.to_vec()), config);
    p.format_file(file);
    p.finish()
}
