// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! The parser implementation using precedence climbing for expressions.
//!
//! One `Parser` walks a token vector produced by `sea_lexer`. Items,
//! statements, expressions and types live in their own files; this module
//! holds token navigation and error recovery.

mod expr;
mod item;
mod stmt;
mod types;

use sea_ast::token::{Token, TokenKind};
use sea_ast::{NodeId, Position, SourceFile, Span};
use tracing::debug;

use crate::error::ParseError;

/// Maximum number of errors to collect before stopping.
const MAX_ERRORS: usize = 20;

/// The parser for Sea source code.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    /// Collected errors during parsing
    errors: Vec<ParseError>,
    /// Counter for generating unique NodeIds
    next_node_id: u32,
}

impl Parser {
    /// Create a parser over `tokens`. A missing trailing `Eof` is added.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map_or(true, |t| t.kind != TokenKind::Eof) {
            let end = tokens.last().map_or(0, |t| t.span.end);
            let pos = tokens.last().map(|t| t.pos).unwrap_or_default();
            tokens.push(Token {
                kind: TokenKind::Eof,
                span: Span::new(end, end),
                pos: Position { offset: end, ..pos },
            });
        }
        Self { tokens, pos: 0, errors: Vec::new(), next_node_id: 0 }
    }

    fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next_node_id);
        self.next_node_id += 1;
        id
    }

    /// Record error, return if should continue.
    fn record_error(&mut self, error: ParseError) -> bool {
        self.errors.push(error);
        self.errors.len() < MAX_ERRORS
    }

    // =========================================================================
    // Token Navigation
    // =========================================================================

    fn current(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    /// Kind of the token `n` places past the current one. Lookahead is at
    /// most three tokens: the current one and two more.
    fn peek(&self, n: usize) -> &TokenKind {
        debug_assert!(n <= 2);
        self.tokens.get(self.pos + n).map(|t| &t.kind).unwrap_or(&TokenKind::Eof)
    }

    fn at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    fn advance(&mut self) -> &Token {
        let at = self.pos.min(self.tokens.len() - 1);
        if !self.at_end() {
            self.pos += 1;
        }
        &self.tokens[at]
    }

    fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(self.current_kind()) == std::mem::discriminant(kind)
    }

    fn match_token(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: &TokenKind) -> Result<&Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error_here(kind.display_name()))
        }
    }

    /// Expect an opening delimiter and return its span.
    fn expect_open(&mut self, kind: &TokenKind) -> Result<Span, ParseError> {
        Ok(self.expect(kind)?.span)
    }

    /// Expect the delimiter closing the one at `opener`.
    fn expect_close(&mut self, kind: &TokenKind, opener: Span) -> Result<(), ParseError> {
        if self.match_token(kind) {
            Ok(())
        } else {
            Err(self.error_here(kind.display_name()).with_opener(opener))
        }
    }

    fn expect_ident(&mut self) -> Result<String, ParseError> {
        match self.current_kind() {
            TokenKind::Ident(name) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            _ => Err(self.error_here("a name")),
        }
    }

    /// True if the current token is the identifier `word` (`in`, `to`).
    fn check_contextual(&self, word: &str) -> bool {
        matches!(self.current_kind(), TokenKind::Ident(name) if name == word)
    }

    fn expect_contextual(&mut self, word: &str) -> Result<(), ParseError> {
        if self.check_contextual(word) {
            self.advance();
            Ok(())
        } else {
            Err(self.error_here(&format!("'{}'", word)))
        }
    }

    /// "Expected X" error at the current token.
    fn error_here(&self, expected: &str) -> ParseError {
        ParseError::expected(expected, self.current_kind(), self.current().span)
    }

    fn start(&self) -> usize {
        self.current().span.start
    }

    /// End offset of the last consumed token.
    fn prev_end(&self) -> usize {
        match self.pos.checked_sub(1) {
            Some(i) => self.tokens[i].span.end,
            None => self.current().span.start,
        }
    }

    fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.prev_end().max(start))
    }

    // =========================================================================
    // Top-Level Parsing
    // =========================================================================

    /// Parse the whole token stream into a file.
    pub fn parse(&mut self) -> ParseResult {
        let mut items = Vec::new();

        while !self.at_end() {
            let before = self.pos;
            match self.parse_item() {
                Ok(item) => items.push(item),
                Err(e) => {
                    if !self.record_error(e) {
                        break;
                    }
                    if self.pos == before {
                        self.advance();
                    }
                    self.synchronize();
                }
            }
        }

        let end = self.current().span.end;
        debug!(items = items.len(), errors = self.errors.len(), "parsed file");

        ParseResult {
            file: SourceFile { items, span: Span::new(0, end) },
            errors: std::mem::take(&mut self.errors),
        }
    }

    /// Skip to the next item keyword at brace depth 0.
    fn synchronize(&mut self) {
        let from = self.start();
        let mut brace_depth = 0usize;

        while !self.at_end() {
            match self.current_kind() {
                TokenKind::LBrace => brace_depth += 1,
                TokenKind::RBrace => brace_depth = brace_depth.saturating_sub(1),
                kind if brace_depth == 0 && Self::starts_top_level(kind) => break,
                _ => {}
            }
            self.advance();
        }

        debug!(from, to = self.start(), "resynchronized at item boundary");
    }

    fn starts_top_level(kind: &TokenKind) -> bool {
        kind.starts_item() || matches!(kind, TokenKind::RawBlock(_) | TokenKind::Raw)
    }

    // =========================================================================
    // Block Recovery
    // =========================================================================

    /// Skip to the next statement boundary inside a block: a statement
    /// keyword, a raw block, or the `}` closing the current block.
    fn synchronize_in_block(&mut self, failed_at: usize) {
        if self.pos == failed_at && !self.at_block_boundary() {
            self.advance();
        }

        let from = self.start();
        let mut depth = 0usize;
        while !self.at_end() {
            match self.current_kind() {
                TokenKind::LBrace => depth += 1,
                TokenKind::RBrace if depth == 0 => break,
                TokenKind::RBrace => depth -= 1,
                TokenKind::Ret
                | TokenKind::If
                | TokenKind::Switch
                | TokenKind::For
                | TokenKind::RawBlock(_)
                    if depth == 0 =>
                {
                    break
                }
                kind if kind.starts_item() => break,
                _ => {}
            }
            self.advance();
        }

        debug!(from, to = self.start(), "resynchronized at statement boundary");
    }

    /// A closing brace, or a keyword that only starts a top-level item.
    fn at_block_boundary(&self) -> bool {
        self.check(&TokenKind::RBrace) || self.current_kind().starts_item() || self.at_end()
    }

    /// Skip to the closing brace of a block.
    fn skip_to_closing_brace(&mut self) {
        let mut depth = 1;
        while !self.at_end() && depth > 0 {
            match self.current_kind() {
                TokenKind::LBrace => depth += 1,
                TokenKind::RBrace => depth -= 1,
                _ => {}
            }
            if depth > 0 {
                self.advance();
            }
        }
    }
}

/// Result of parsing: the file plus any errors found.
#[derive(Debug)]
pub struct ParseResult {
    pub file: SourceFile,
    pub errors: Vec<ParseError>,
}

impl ParseResult {
    /// Returns true if parsing completed without errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}
