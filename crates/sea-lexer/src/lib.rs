// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Lexer for the Sea language.
//!
//! Tokenizes source code into a stream of tokens for the parser. Comments
//! are collected on the side as trivia.

mod lexer;

pub use lexer::{LexError, LexErrorKind, LexResult, Lexer, LiteralKind};
