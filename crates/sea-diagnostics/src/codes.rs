// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Error code registry.
//!
//! Maps codes (E0001, E0100, ...) to titles and categories. Used by
//! `sea explain <code>` and the JSON report.

use std::collections::BTreeMap;

/// Registry of all known error codes.
pub struct ErrorCodeRegistry {
    codes: BTreeMap<&'static str, ErrorCodeInfo>,
}

pub struct ErrorCodeInfo {
    pub code: &'static str,
    pub title: &'static str,
    pub category: ErrorCategory,
    /// Longer text printed by `sea explain`.
    pub explanation: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lexical,
    Syntax,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Lexical => write!(f, "Lexical"),
            ErrorCategory::Syntax => write!(f, "Syntax"),
        }
    }
}

macro_rules! register_codes {
    ($($code:literal => ($title:literal, $cat:expr, $text:literal)),* $(,)?) => {{
        let mut map = BTreeMap::new();
        $(
            map.insert($code, ErrorCodeInfo {
                code: $code,
                title: $title,
                category: $cat,
                explanation: $text,
            });
        )*
        map
    }};
}

impl Default for ErrorCodeRegistry {
    fn default() -> Self {
        use ErrorCategory::*;

        Self {
            codes: register_codes! {
                // Lexer errors (E00xx)
                "E0001" => ("unexpected character", Lexical,
                    "A character appeared that cannot start any token. The lexer skips it \
                     and keeps going, so later errors in the file are still reported."),
                "E0002" => ("unterminated literal", Lexical,
                    "A string, c-string, character literal, block comment or raw block was \
                     opened but never closed. Quoted literals must close on the same line. \
                     The rest of the file cannot be tokenized, so nothing else is checked."),

                // Parser errors (E01xx)
                "E0100" => ("unexpected token", Syntax,
                    "The parser expected one kind of token and found another. The \
                     statement or item containing it is dropped and parsing resumes at \
                     the next statement or top-level keyword."),
                "E0101" => ("unexpected end of input", Syntax,
                    "The file ended in the middle of an item, usually because a '}', ')' \
                     or ']' is missing."),
                "E0102" => ("ambiguous construct", Syntax,
                    "The grammar allowed two readings of the same tokens. Current parsers \
                     resolve every such case with fixed lookahead rules, so this code is \
                     reserved and not emitted."),
            },
        }
    }
}

impl ErrorCodeRegistry {
    pub fn get(&self, code: &str) -> Option<&ErrorCodeInfo> {
        self.codes.get(code)
    }

    /// Every registered code, in code order.
    pub fn all(&self) -> impl Iterator<Item = &ErrorCodeInfo> {
        self.codes.values()
    }
}
