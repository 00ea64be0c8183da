// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! The lexer implementation using logos.

use std::fmt;
use std::ops::Range;

use logos::Logos;
use sea_ast::token::{Comment, CommentKind, Token, TokenKind};
use sea_ast::{LineMap, Span};
use tracing::debug;

/// Raw token type for logos - literal contents and keywords are sorted out
/// in a second pass.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    // === Comments (trivia) ===
    #[regex(r"//[^\n]*")]
    LineComment,

    // Non-nesting: the first `*/` closes the comment.
    #[token("/*", block_comment)]
    BlockComment,

    // === Literals ===
    #[token("\"", string_body)]
    String,

    #[token("c\"", string_body)]
    CString,

    #[token("`", char_body)]
    Char,

    // Decimal must be tried before the integer form so `1.5` stays one token
    #[regex(r"[0-9][0-9_]*\.[0-9_]+")]
    Decimal,

    #[regex(r"[0-9][0-9_]*")]
    Integer,

    // === Identifiers and keywords ===
    #[regex(r"[a-zA-Z_$][a-zA-Z_$0-9]*")]
    Word,

    // === Operators (longer first) ===
    #[token("==")]
    EqEq,
    #[token("!=")]
    BangEq,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("->")]
    Arrow,

    #[token("^")]
    Caret,
    #[token(".")]
    Dot,
    #[token("=")]
    Eq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("#")]
    Hash,

    // === Delimiters ===
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(";")]
    Semi,
}

/// Consume a block comment body up to and including the first `*/`.
fn block_comment(lexer: &mut logos::Lexer<RawToken>) -> bool {
    match lexer.remainder().find("*/") {
        Some(end) => {
            lexer.bump(end + 2);
            true
        }
        None => false, // Unterminated - reported by the caller
    }
}

/// Consume up to the closing delimiter on the same line.
fn quoted(lexer: &mut logos::Lexer<RawToken>, close: char) -> bool {
    for (i, ch) in lexer.remainder().char_indices() {
        if ch == close {
            lexer.bump(i + ch.len_utf8());
            return true;
        }
        if ch == '\n' {
            return false;
        }
    }
    false
}

fn string_body(lexer: &mut logos::Lexer<RawToken>) -> bool {
    quoted(lexer, '"')
}

fn char_body(lexer: &mut logos::Lexer<RawToken>) -> bool {
    quoted(lexer, '`')
}

/// Outcome of looking for a raw block after the `raw` keyword.
#[derive(Debug, PartialEq)]
enum RawScan {
    /// No `[` follows; `raw` is a plain keyword.
    NotRaw,
    Unterminated,
    /// `consumed` bytes after `raw` belong to the block; `content` is the
    /// range between the outer brackets, relative to the same start.
    Block { consumed: usize, content: Range<usize> },
}

/// Scan `rest` (the text right after `raw`) for a bracket-balanced block.
fn scan_raw_block(rest: &str) -> RawScan {
    let body = rest.trim_start();
    let lead = rest.len() - body.len();
    if !body.starts_with('[') {
        return RawScan::NotRaw;
    }

    let mut depth = 0usize;
    for (i, ch) in body.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return RawScan::Block {
                        consumed: lead + i + 1,
                        content: lead + 1..lead + i,
                    };
                }
            }
            _ => {}
        }
    }
    RawScan::Unterminated
}

/// Maximum number of recoverable errors recorded per file.
const MAX_ERRORS: usize = 20;

/// The lexer for Sea source code.
///
/// Tokens are produced on demand through [`Lexer::next_token`], with one
/// token of lookahead via [`Lexer::peek_token`]. Comments never reach the
/// token stream; they are kept in [`Lexer::comments`].
pub struct Lexer<'a> {
    source: &'a str,
    inner: logos::Lexer<'a, RawToken>,
    line_map: LineMap,
    peeked: Option<Result<Token, LexError>>,
    comments: Vec<Comment>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            inner: RawToken::lexer(source),
            line_map: LineMap::new(source),
            peeked: None,
            comments: Vec::new(),
        }
    }

    /// Next significant token. At the end of input an `Eof` token is
    /// returned, repeatedly.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        match self.peeked.take() {
            Some(next) => next,
            None => self.lex_next(),
        }
    }

    /// Look at the next token without consuming it.
    pub fn peek_token(&mut self) -> Result<&Token, &LexError> {
        let next = match self.peeked.take() {
            Some(next) => next,
            None => self.lex_next(),
        };
        self.peeked.insert(next).as_ref()
    }

    /// Comments seen so far, in source order.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Tokenize the entire source, collecting multiple errors.
    ///
    /// Lexing stops at the first fatal error; the token list always ends
    /// with `Eof`. Past `MAX_ERRORS` recoverable errors are dropped but the
    /// whole source is still tokenized.
    pub fn tokenize(&mut self) -> LexResult {
        let mut tokens = Vec::new();
        let mut errors: Vec<LexError> = Vec::new();

        loop {
            match self.next_token() {
                Ok(token) => {
                    let at_end = token.kind == TokenKind::Eof;
                    tokens.push(token);
                    if at_end {
                        break;
                    }
                }
                Err(e) if e.is_fatal() => {
                    errors.push(e);
                    let end = self.source.len();
                    tokens.push(self.token(TokenKind::Eof, Span::new(end, end)));
                    break;
                }
                Err(e) => {
                    if errors.len() < MAX_ERRORS {
                        errors.push(e);
                    }
                }
            }
        }

        debug!(
            tokens = tokens.len(),
            comments = self.comments.len(),
            errors = errors.len(),
            "lexed source"
        );

        LexResult {
            tokens,
            comments: std::mem::take(&mut self.comments),
            errors,
        }
    }

    fn token(&self, kind: TokenKind, span: Span) -> Token {
        Token { kind, span, pos: self.line_map.position(span.start) }
    }

    fn lex_next(&mut self) -> Result<Token, LexError> {
        loop {
            let Some(result) = self.inner.next() else {
                let end = self.source.len();
                return Ok(self.token(TokenKind::Eof, Span::new(end, end)));
            };

            let range = self.inner.span();
            let span = Span::new(range.start, range.end);
            let slice = self.inner.slice();

            let raw = match result {
                Ok(raw) => raw,
                Err(()) => return Err(self.classify_error(span)),
            };

            let kind = match raw {
                RawToken::LineComment => {
                    self.push_comment(CommentKind::Line, slice, span);
                    continue;
                }
                RawToken::BlockComment => {
                    self.push_comment(CommentKind::Block, slice, span);
                    continue;
                }

                // Literals - strip the delimiters
                RawToken::String => TokenKind::String(slice[1..slice.len() - 1].to_string()),
                RawToken::CString => TokenKind::CString(slice[2..slice.len() - 1].to_string()),
                RawToken::Char => TokenKind::Char(slice[1..slice.len() - 1].to_string()),
                RawToken::Decimal | RawToken::Integer => TokenKind::Number(slice.to_string()),

                RawToken::Word => match TokenKind::keyword(slice) {
                    Some(TokenKind::Raw) => return self.raw_block(span),
                    Some(keyword) => keyword,
                    None => TokenKind::Ident(slice.to_string()),
                },

                // Operators
                RawToken::EqEq => TokenKind::EqEq,
                RawToken::BangEq => TokenKind::BangEq,
                RawToken::LtEq => TokenKind::LtEq,
                RawToken::GtEq => TokenKind::GtEq,
                RawToken::Arrow => TokenKind::Arrow,
                RawToken::Caret => TokenKind::Caret,
                RawToken::Dot => TokenKind::Dot,
                RawToken::Eq => TokenKind::Eq,
                RawToken::Lt => TokenKind::Lt,
                RawToken::Gt => TokenKind::Gt,
                RawToken::Plus => TokenKind::Plus,
                RawToken::Minus => TokenKind::Minus,
                RawToken::Star => TokenKind::Star,
                RawToken::Slash => TokenKind::Slash,
                RawToken::Percent => TokenKind::Percent,
                RawToken::Hash => TokenKind::Hash,

                // Delimiters
                RawToken::LParen => TokenKind::LParen,
                RawToken::RParen => TokenKind::RParen,
                RawToken::LBrace => TokenKind::LBrace,
                RawToken::RBrace => TokenKind::RBrace,
                RawToken::LBracket => TokenKind::LBracket,
                RawToken::RBracket => TokenKind::RBracket,
                RawToken::Comma => TokenKind::Comma,
                RawToken::Colon => TokenKind::Colon,
                RawToken::Semi => TokenKind::Semi,
            };

            return Ok(self.token(kind, span));
        }
    }

    /// `raw` was just lexed at `keyword`; take the bracketed block after it.
    fn raw_block(&mut self, keyword: Span) -> Result<Token, LexError> {
        let rest = self.inner.remainder();
        match scan_raw_block(rest) {
            RawScan::NotRaw => Ok(self.token(TokenKind::Raw, keyword)),
            RawScan::Unterminated => Err(LexError::unterminated(LiteralKind::RawBlock, keyword)),
            RawScan::Block { consumed, content } => {
                let text = rest[content].to_string();
                self.inner.bump(consumed);
                let span = Span::new(keyword.start, self.inner.span().end);
                Ok(self.token(TokenKind::RawBlock(text), span))
            }
        }
    }

    fn push_comment(&mut self, kind: CommentKind, text: &str, span: Span) {
        self.comments.push(Comment { kind, text: text.to_string(), span });
    }

    /// Work out why logos rejected the input at `span`.
    fn classify_error(&self, span: Span) -> LexError {
        let rest = &self.source[span.start..];
        let literal = if rest.starts_with("/*") {
            Some(LiteralKind::BlockComment)
        } else if rest.starts_with("c\"") {
            Some(LiteralKind::CString)
        } else if rest.starts_with('"') {
            Some(LiteralKind::String)
        } else if rest.starts_with('`') {
            Some(LiteralKind::Char)
        } else {
            None
        };

        match literal {
            Some(kind) => {
                let opening = Span::new(span.start, span.start + kind.opening().len());
                LexError::unterminated(kind, opening)
            }
            None => {
                let ch = rest.chars().next().unwrap_or('?');
                LexError::unexpected_char(ch, span.start)
            }
        }
    }
}

/// Result of lexing: tokens, comments, plus any errors found.
#[derive(Debug)]
pub struct LexResult {
    pub tokens: Vec<Token>,
    pub comments: Vec<Comment>,
    pub errors: Vec<LexError>,
}

impl LexResult {
    /// Returns true if lexing completed without errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns true if an error makes the token stream unusable.
    pub fn has_fatal(&self) -> bool {
        self.errors.iter().any(LexError::is_fatal)
    }
}

/// What kind of delimited literal was left open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    String,
    CString,
    Char,
    BlockComment,
    RawBlock,
}

impl LiteralKind {
    fn opening(self) -> &'static str {
        match self {
            LiteralKind::String => "\"",
            LiteralKind::CString => "c\"",
            LiteralKind::Char => "`",
            LiteralKind::BlockComment => "/*",
            LiteralKind::RawBlock => "raw [",
        }
    }

    fn closing(self) -> &'static str {
        match self {
            LiteralKind::String | LiteralKind::CString => "\"",
            LiteralKind::Char => "`",
            LiteralKind::BlockComment => "*/",
            LiteralKind::RawBlock => "]",
        }
    }
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LiteralKind::String => "string literal",
            LiteralKind::CString => "c-string literal",
            LiteralKind::Char => "character literal",
            LiteralKind::BlockComment => "block comment",
            LiteralKind::RawBlock => "raw block",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexErrorKind {
    #[error("unterminated {0}")]
    UnterminatedLiteral(LiteralKind),
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),
}

/// A lexer error with location and friendly message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    /// For unterminated literals, the opening delimiter.
    pub span: Span,
    pub hint: Option<String>,
}

impl LexError {
    /// Unterminated literals leave no safe point to resume from.
    pub fn is_fatal(&self) -> bool {
        matches!(self.kind, LexErrorKind::UnterminatedLiteral(_))
    }

    fn unexpected_char(ch: char, pos: usize) -> Self {
        let hint = match ch {
            '!' => Some("use 'not' for negation, '!=' for inequality".to_string()),
            '&' => Some("use 'and', or 'ref' to take an address".to_string()),
            '|' => Some("use 'or'".to_string()),
            '\'' => Some("character literals use backticks, like `a`".to_string()),
            _ => None,
        };
        Self {
            kind: LexErrorKind::UnexpectedCharacter(ch),
            span: Span::new(pos, pos + ch.len_utf8()),
            hint,
        }
    }

    fn unterminated(kind: LiteralKind, opening: Span) -> Self {
        let hint = match kind {
            LiteralKind::String | LiteralKind::CString | LiteralKind::Char => {
                format!("add a closing '{}' on the same line", kind.closing())
            }
            _ => format!("add a closing '{}'", kind.closing()),
        };
        Self {
            kind: LexErrorKind::UnterminatedLiteral(kind),
            span: opening,
            hint: Some(hint),
        }
    }
}
