// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Token definitions for the lexer.

use crate::{Position, Span};

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub pos: Position,
}

/// The kind of token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals (text as written, delimiters stripped)
    Number(String),
    String(String),
    CString(String),
    Char(String),
    Bool(bool),
    /// Contents of `raw [ ... ]`, between the outer brackets.
    RawBlock(String),

    // Identifier
    Ident(String),

    // Keywords
    Use,
    Fun,
    Rec,
    Def,
    Tag,
    Pragma,
    Raw,
    Ret,
    If,
    Else,
    Switch,
    Case,
    Fall,
    For,
    New,
    Var,
    Let,
    Not,
    Ref,
    And,
    Or,
    As,

    // Operators
    Caret,
    Dot,
    Eq,
    EqEq,
    BangEq,
    LtEq,
    GtEq,
    Lt,
    Gt,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Arrow,
    Hash,

    // Delimiters
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Colon,
    Semi,

    // Special
    Eof,
}

impl TokenKind {
    /// Look up a reserved word. Returns `None` for plain identifiers.
    pub fn keyword(word: &str) -> Option<TokenKind> {
        Some(match word {
            "use" => TokenKind::Use,
            "fun" => TokenKind::Fun,
            "rec" => TokenKind::Rec,
            "def" => TokenKind::Def,
            "tag" => TokenKind::Tag,
            "pragma" => TokenKind::Pragma,
            "raw" => TokenKind::Raw,
            "ret" => TokenKind::Ret,
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "switch" => TokenKind::Switch,
            "case" => TokenKind::Case,
            "fall" => TokenKind::Fall,
            "for" => TokenKind::For,
            "new" => TokenKind::New,
            "var" => TokenKind::Var,
            "let" => TokenKind::Let,
            "not" => TokenKind::Not,
            "ref" => TokenKind::Ref,
            "and" => TokenKind::And,
            "or" => TokenKind::Or,
            "as" => TokenKind::As,
            "true" => TokenKind::Bool(true),
            "false" => TokenKind::Bool(false),
            _ => return None,
        })
    }

    /// True for the keywords that can only start a top-level item.
    pub fn starts_item(&self) -> bool {
        matches!(
            self,
            TokenKind::Use
                | TokenKind::Fun
                | TokenKind::Rec
                | TokenKind::Def
                | TokenKind::Tag
                | TokenKind::Pragma
                | TokenKind::Hash
        )
    }

    /// Returns a human-readable name for this token kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            // Literals
            TokenKind::Number(_) => "a number",
            TokenKind::String(_) => "a string",
            TokenKind::CString(_) => "a c-string",
            TokenKind::Char(_) => "a character",
            TokenKind::Bool(_) => "'true' or 'false'",
            TokenKind::RawBlock(_) => "a raw block",

            // Identifier
            TokenKind::Ident(_) => "a name",

            // Keywords
            TokenKind::Use => "'use'",
            TokenKind::Fun => "'fun'",
            TokenKind::Rec => "'rec'",
            TokenKind::Def => "'def'",
            TokenKind::Tag => "'tag'",
            TokenKind::Pragma => "'pragma'",
            TokenKind::Raw => "'raw'",
            TokenKind::Ret => "'ret'",
            TokenKind::If => "'if'",
            TokenKind::Else => "'else'",
            TokenKind::Switch => "'switch'",
            TokenKind::Case => "'case'",
            TokenKind::Fall => "'fall'",
            TokenKind::For => "'for'",
            TokenKind::New => "'new'",
            TokenKind::Var => "'var'",
            TokenKind::Let => "'let'",
            TokenKind::Not => "'not'",
            TokenKind::Ref => "'ref'",
            TokenKind::And => "'and'",
            TokenKind::Or => "'or'",
            TokenKind::As => "'as'",

            // Operators
            TokenKind::Caret => "'^'",
            TokenKind::Dot => "'.'",
            TokenKind::Eq => "'='",
            TokenKind::EqEq => "'=='",
            TokenKind::BangEq => "'!='",
            TokenKind::LtEq => "'<='",
            TokenKind::GtEq => "'>='",
            TokenKind::Lt => "'<'",
            TokenKind::Gt => "'>'",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::Percent => "'%'",
            TokenKind::Arrow => "'->'",
            TokenKind::Hash => "'#'",

            // Delimiters
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::Comma => "','",
            TokenKind::Colon => "':'",
            TokenKind::Semi => "';'",

            // Special
            TokenKind::Eof => "end of file",
        }
    }
}

/// A comment collected as trivia next to the token stream.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comment {
    pub kind: CommentKind,
    /// Full text including the `//` or `/* */` delimiters.
    pub text: String,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommentKind {
    Line,
    Block,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_words() {
        assert_eq!(TokenKind::keyword("fun"), Some(TokenKind::Fun));
        assert_eq!(TokenKind::keyword("false"), Some(TokenKind::Bool(false)));
        assert_eq!(TokenKind::keyword("funny"), None);
        // contextual, recognized by the parser inside `for` headers
        assert_eq!(TokenKind::keyword("in"), None);
        assert_eq!(TokenKind::keyword("to"), None);
    }

    #[test]
    fn item_starters() {
        assert!(TokenKind::Fun.starts_item());
        assert!(TokenKind::Hash.starts_item());
        assert!(!TokenKind::Ret.starts_item());
        assert!(!TokenKind::Raw.starts_item());
    }
}
