// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Conversions from front-end error types to `Diagnostic`.

use sea_lexer::{LexError, LexErrorKind};
use sea_parser::{ParseError, ParseErrorKind};

use crate::{Diagnostic, ToDiagnostic};

// ============================================================================
// Lex Errors
// ============================================================================

impl ToDiagnostic for LexError {
    fn to_diagnostic(&self) -> Diagnostic {
        lex_diagnostic(&self.kind, self.span, self.hint.as_deref())
    }
}

fn lex_diagnostic(kind: &LexErrorKind, span: sea_ast::Span, hint: Option<&str>) -> Diagnostic {
    let diag = match kind {
        LexErrorKind::UnexpectedCharacter(_) => Diagnostic::error(kind.to_string())
            .with_code("E0001")
            .with_primary(span, "no token starts with this character"),
        LexErrorKind::UnterminatedLiteral(literal) => Diagnostic::error(kind.to_string())
            .with_code("E0002")
            .with_primary(span, format!("{} starts here", literal))
            .with_note("the rest of the file was not checked"),
    };
    with_hint(diag, hint)
}

// ============================================================================
// Parse Errors
// ============================================================================

impl ToDiagnostic for ParseError {
    fn to_diagnostic(&self) -> Diagnostic {
        let hint = self.hint.as_deref();
        let diag = match &self.kind {
            ParseErrorKind::Lex(kind) => lex_diagnostic(kind, self.span, hint),

            ParseErrorKind::UnexpectedToken { expected, .. } => with_hint(
                Diagnostic::error(self.kind.to_string())
                    .with_code("E0100")
                    .with_primary(self.span, format!("expected {}", expected)),
                hint,
            ),

            ParseErrorKind::UnexpectedEndOfInput { expected } => with_hint(
                Diagnostic::error(self.kind.to_string())
                    .with_code("E0101")
                    .with_primary(self.span, format!("expected {}", expected)),
                hint,
            ),

            ParseErrorKind::AmbiguousConstruct(_) => with_hint(
                Diagnostic::error(self.kind.to_string())
                    .with_code("E0102")
                    .with_primary(self.span, "more than one reading"),
                hint,
            ),
        };
        match self.opened_at {
            Some(opener) => diag.with_secondary(opener, "unclosed delimiter"),
            None => diag,
        }
    }
}

fn with_hint(diag: Diagnostic, hint: Option<&str>) -> Diagnostic {
    match hint {
        Some(h) => diag.with_help(h),
        None => diag,
    }
}
