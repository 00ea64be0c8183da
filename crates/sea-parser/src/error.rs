// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Parse errors.

use sea_ast::token::TokenKind;
use sea_ast::Span;
use sea_lexer::{LexError, LexErrorKind};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },

    #[error("expected {expected}, found end of file")]
    UnexpectedEndOfInput { expected: String },

    /// Reserved for grammar defects. The lookahead rules never produce it.
    #[error("ambiguous construct: {0}")]
    AmbiguousConstruct(String),

    /// A lexer error, carried so both phases report through one list.
    #[error(transparent)]
    Lex(#[from] LexErrorKind),
}

/// A parser error with location and friendly message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    pub hint: Option<String>,
    /// The delimiter left open, when a closing one was expected.
    pub opened_at: Option<Span>,
}

impl ParseError {
    pub(crate) fn expected(expected: &str, found: &TokenKind, span: Span) -> Self {
        let kind = match found {
            TokenKind::Eof => ParseErrorKind::UnexpectedEndOfInput { expected: expected.to_string() },
            _ => ParseErrorKind::UnexpectedToken {
                expected: expected.to_string(),
                found: found.display_name().to_string(),
            },
        };
        let hint = crate::hints::for_expected(expected, found).map(String::from);
        Self { kind, span, hint, opened_at: None }
    }

    pub(crate) fn with_opener(mut self, opener: Span) -> Self {
        self.opened_at = Some(opener);
        self
    }

    /// `raw [ ]` with nothing between the brackets.
    pub(crate) fn empty_raw(span: Span) -> Self {
        Self {
            kind: ParseErrorKind::UnexpectedToken {
                expected: "raw content".to_string(),
                found: "']'".to_string(),
            },
            span,
            hint: Some("a raw block needs some content between '[' and ']'".to_string()),
            opened_at: None,
        }
    }

    /// True when the error came from the lexer.
    pub fn is_lex_error(&self) -> bool {
        matches!(self.kind, ParseErrorKind::Lex(_))
    }
}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        Self { kind: ParseErrorKind::Lex(e.kind), span: e.span, hint: e.hint, opened_at: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eof_becomes_end_of_input() {
        let e = ParseError::expected("')'", &TokenKind::Eof, Span::new(3, 3));
        assert_eq!(e.kind, ParseErrorKind::UnexpectedEndOfInput { expected: "')'".into() });
        assert_eq!(e.to_string(), "expected ')', found end of file");
        assert!(e.hint.is_some());
    }

    #[test]
    fn found_uses_display_name() {
        let e = ParseError::expected("a name", &TokenKind::Number("1".into()), Span::new(0, 1));
        assert_eq!(e.to_string(), "expected a name, found a number");
        assert_eq!(e.hint.as_deref(), Some("names can't start with a number"));
    }
}
