// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Error hints - suggestions for fixing common mistakes.
//!
//! Kept separate from the main parser to avoid clutter.

use sea_ast::token::TokenKind;

/// Get a hint for an "expected X" error based on context.
pub fn for_expected(expected: &str, found: &TokenKind) -> Option<&'static str> {
    match (expected, found) {
        // Colon hints
        ("':'", TokenKind::Ident(_)) => Some("parameters and fields are written name: Type"),
        ("':'", _) => Some("syntax: name: Type"),

        // Block hints
        ("a block", TokenKind::Colon) => Some("the return type goes before the body: fun f(): T { ... }"),
        ("a block", _) => Some("blocks are '{ ... }' or '-> statement'"),
        ("'}'", TokenKind::Eof) => Some("every '{' needs a matching '}'"),
        ("'}'", _) => None,

        // Parentheses hints
        ("'('", _) => Some("argument and parameter lists are wrapped in '(' ')'"),
        ("')'", TokenKind::Eof) => Some("add ')' to close the parenthesis"),
        ("')'", TokenKind::Ident(_)) => Some("separate entries with ','"),
        ("')'", _) => None,

        // Bracket hints
        ("'['", _) => Some("raw code is written raw [ ... ]"),
        ("']'", TokenKind::Eof) => Some("add ']' to close the bracket"),
        ("']'", _) => None,

        ("'='", TokenKind::Colon) => Some("a binding has at most one type: let x: T = value"),
        ("'='", _) => Some("bindings need a value: let x = value"),

        // Expression hints
        ("expression", TokenKind::Eq) => Some("put the value after '='"),
        ("expression", TokenKind::RBrace) => Some("statement is incomplete"),
        ("expression", TokenKind::Ret) => Some("'ret' starts a statement and cannot be used as a value"),
        ("expression", _) => Some("try a value, variable, or function call"),

        // Name/identifier hints
        ("a name", TokenKind::Number(_)) => Some("names can't start with a number"),
        ("'to'", _) => Some("range loops are written: for i in start to end"),
        ("a name", t) if TokenKind::keyword(t.display_name().trim_matches('\'')).is_some() => {
            Some("reserved words can't be used as names")
        }
        ("a name", _) => Some("names start with a letter, '_' or '$'"),

        // Type hints
        ("type", TokenKind::Number(_)) => Some("array sizes go after the type: i32[4]"),
        ("type", _) => Some("try a type like 'i32', '^u8', 'T[4]' or 'fun(i32): i32'"),

        // Item hints
        (s, _) if s.starts_with("an item") => {
            Some("files contain use, fun, rec, def, tag, pragma, raw and # items")
        }

        // Switch arms
        ("'case'", _) => Some("switch arms are written [fall] case value { ... }"),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_used_as_name() {
        assert_eq!(
            for_expected("a name", &TokenKind::Ret),
            Some("reserved words can't be used as names")
        );
        assert_eq!(
            for_expected("a name", &TokenKind::Comma),
            Some("names start with a letter, '_' or '$'")
        );
    }

    #[test]
    fn missing_close_paren() {
        assert!(for_expected("')'", &TokenKind::Eof).is_some());
        assert!(for_expected("')'", &TokenKind::Semi).is_none());
    }
}
