// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Unified diagnostics for the Sea front end.
//!
//! Lexer and parser errors are converted into [`Diagnostic`] values through
//! [`ToDiagnostic`], then rendered either for a terminal
//! ([`formatter::DiagnosticFormatter`]) or as a JSON report
//! ([`json::to_json_report`]).

pub mod codes;
pub mod convert;
pub mod formatter;
pub mod json;

use sea_ast::Span;
use serde::Serialize;

// ============================================================================
// Core Types
// ============================================================================

/// A diagnostic message with source locations.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: Option<ErrorCode>,
    pub message: String,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
    pub help: Option<Help>,
}

/// A labeled span of source code.
#[derive(Debug, Clone, Serialize)]
pub struct Label {
    pub span: Span,
    pub style: LabelStyle,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    /// The main location, underlined with `^`.
    Primary,
    /// Related context, underlined with `-`.
    Secondary,
}

/// Diagnostic severity. The front end only reports errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
}

/// A stable code such as `E0100`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorCode(pub String);

#[derive(Debug, Clone, Serialize)]
pub struct Help {
    pub message: String,
}

// ============================================================================
// Builder API
// ============================================================================

impl Diagnostic {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code: None,
            message: message.into(),
            labels: Vec::new(),
            notes: Vec::new(),
            help: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(ErrorCode(code.into()));
        self
    }

    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }

    pub fn with_primary(self, span: Span, message: impl Into<String>) -> Self {
        self.with_label(Label {
            span,
            style: LabelStyle::Primary,
            message: Some(message.into()),
        })
    }

    pub fn with_secondary(self, span: Span, message: impl Into<String>) -> Self {
        self.with_label(Label {
            span,
            style: LabelStyle::Secondary,
            message: Some(message.into()),
        })
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_help(mut self, message: impl Into<String>) -> Self {
        self.help = Some(Help { message: message.into() });
        self
    }

    /// The span of the first primary label, falling back to the first label.
    pub fn primary_span(&self) -> Option<Span> {
        self.labels
            .iter()
            .find(|l| l.style == LabelStyle::Primary)
            .or(self.labels.first())
            .map(|l| l.span)
    }
}

/// Conversion into a [`Diagnostic`], implemented by every front-end error.
pub trait ToDiagnostic {
    fn to_diagnostic(&self) -> Diagnostic;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_parts() {
        let d = Diagnostic::error("expected ')', found '}'")
            .with_code("E0100")
            .with_secondary(Span::new(3, 4), "opened here")
            .with_primary(Span::new(9, 10), "expected ')'")
            .with_note("parameters are separated by commas");
        assert_eq!(d.severity, Severity::Error);
        assert_eq!(d.code, Some(ErrorCode("E0100".into())));
        assert_eq!(d.labels.len(), 2);
        assert_eq!(d.primary_span(), Some(Span::new(9, 10)));
        assert_eq!(d.notes.len(), 1);
    }

    #[test]
    fn no_labels_means_no_primary_span() {
        assert_eq!(Diagnostic::error("x").primary_span(), None);
    }
}
