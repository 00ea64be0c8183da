// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Type annotations.

use sea_ast::token::TokenKind;
use sea_ast::ty::{Type, TypeKind};

use super::Parser;
use crate::error::ParseError;

impl Parser {
    /// `'^'* (name ('[' number? ']')* | fun '(' type* ')' (':' type)?)`
    pub fn parse_type(&mut self) -> Result<Type, ParseError> {
        let start = self.start();

        let mut pointer_depth = 0;
        while self.match_token(&TokenKind::Caret) {
            pointer_depth += 1;
        }

        let kind = if self.match_token(&TokenKind::Fun) {
            let opener = self.expect_open(&TokenKind::LParen)?;
            let mut params = Vec::new();
            while !self.check(&TokenKind::RParen) && !self.at_end() {
                params.push(self.parse_type()?);
            }
            self.expect_close(&TokenKind::RParen, opener)?;

            let ret = if self.match_token(&TokenKind::Colon) {
                Some(Box::new(self.parse_type()?))
            } else {
                None
            };
            TypeKind::Function { params, ret }
        } else {
            let name = match self.current_kind() {
                TokenKind::Ident(name) => name.clone(),
                _ => return Err(self.error_here("type")),
            };
            self.advance();

            let mut dims = Vec::new();
            while let Some(dim) = self.array_dim() {
                dims.push(dim);
            }
            TypeKind::Named { name, dims }
        };

        Ok(Type { pointer_depth, kind, span: self.span_from(start) })
    }

    /// Consume `[]` or `[N]`. Anything else after `[` is left alone, so
    /// `x as T[i]` still indexes.
    fn array_dim(&mut self) -> Option<Option<String>> {
        if !self.check(&TokenKind::LBracket) {
            return None;
        }
        let dim = match (self.peek(1), self.peek(2)) {
            (TokenKind::RBracket, _) => None,
            (TokenKind::Number(n), TokenKind::RBracket) => Some(n.clone()),
            _ => return None,
        };

        self.advance();
        if dim.is_some() {
            self.advance();
        }
        self.advance();
        Some(dim)
    }
}
