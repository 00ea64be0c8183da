// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Expressions.
//!
//! Binary operators use precedence climbing over the table in
//! `sea_ast::expr::BinaryOp`. Level `L` maps to binding powers
//! `(2L+1, 2L+2)` when left associative and `(2L+2, 2L+1)` when right
//! associative; member access and casts sit on `POSTFIX_LEVEL`.

use sea_ast::expr::{Assoc, BinaryOp, Binding, Expr, ExprKind, UnaryOp, POSTFIX_LEVEL};
use sea_ast::token::TokenKind;
use sea_ast::Span;

use super::Parser;
use crate::error::ParseError;

/// Binding powers for a precedence level.
fn level_bp(level: u8, assoc: Assoc) -> (u8, u8) {
    match assoc {
        Assoc::Left => (2 * level + 1, 2 * level + 2),
        Assoc::Right => (2 * level + 2, 2 * level + 1),
    }
}

/// Infix forms that are not plain binary operators.
enum Infix {
    Binary(BinaryOp),
    Member,
    Cast,
}

impl Parser {
    pub fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_expr_bp(0)
    }

    fn parse_expr_bp(&mut self, min_bp: u8) -> Result<Expr, ParseError> {
        let start = self.start();
        let mut lhs = self.parse_unary()?;

        while let Some(infix) = self.infix() {
            let (l_bp, r_bp) = match &infix {
                Infix::Binary(op) => level_bp(op.precedence(), op.associativity()),
                Infix::Member | Infix::Cast => level_bp(POSTFIX_LEVEL, Assoc::Right),
            };
            if l_bp < min_bp {
                break;
            }
            self.advance();

            let kind = match infix {
                Infix::Binary(op) => {
                    let rhs = self.parse_expr_bp(r_bp)?;
                    ExprKind::Binary { op, left: Box::new(lhs), right: Box::new(rhs) }
                }
                Infix::Member => {
                    let member = self.parse_expr_bp(r_bp)?;
                    ExprKind::Member { object: Box::new(lhs), member: Box::new(member) }
                }
                Infix::Cast => {
                    let ty = self.parse_type()?;
                    let cast = ExprKind::Cast { expr: Box::new(lhs), ty };
                    // `x as T[i]` indexes the cast result
                    let cast = Expr { id: self.next_id(), kind: cast, span: self.span_from(start) };
                    lhs = self.parse_postfix(cast)?;
                    continue;
                }
            };
            lhs = Expr { id: self.next_id(), kind, span: self.span_from(start) };
        }

        Ok(lhs)
    }

    fn infix(&self) -> Option<Infix> {
        let op = match self.current_kind() {
            TokenKind::Dot => return Some(Infix::Member),
            TokenKind::As => return Some(Infix::Cast),
            TokenKind::Star => BinaryOp::Mul,
            TokenKind::Slash => BinaryOp::Div,
            TokenKind::Percent => BinaryOp::Mod,
            TokenKind::Plus => BinaryOp::Add,
            TokenKind::Minus => BinaryOp::Sub,
            TokenKind::And => BinaryOp::And,
            TokenKind::Or => BinaryOp::Or,
            TokenKind::EqEq => BinaryOp::Eq,
            TokenKind::BangEq => BinaryOp::Ne,
            TokenKind::LtEq => BinaryOp::Le,
            TokenKind::Gt => BinaryOp::Gt,
            TokenKind::GtEq => BinaryOp::Ge,
            TokenKind::Lt => BinaryOp::Lt,
            TokenKind::Eq => BinaryOp::Assign,
            _ => return None,
        };
        Some(Infix::Binary(op))
    }

    /// Prefix operators wrap the operand after its postfix operators, so
    /// `-x^` is `-(x^)`.
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let start = self.start();
        let op = match self.current_kind() {
            TokenKind::Minus => UnaryOp::Neg,
            TokenKind::Not => UnaryOp::Not,
            TokenKind::Ref => UnaryOp::Ref,
            _ => {
                let primary = self.parse_primary()?;
                return self.parse_postfix(primary);
            }
        };
        self.advance();

        let operand = self.parse_unary()?;
        Ok(Expr {
            id: self.next_id(),
            kind: ExprKind::Unary { op, operand: Box::new(operand) },
            span: self.span_from(start),
        })
    }

    /// Postfix `^` and `[index]`, applied left to right.
    fn parse_postfix(&mut self, mut expr: Expr) -> Result<Expr, ParseError> {
        let start = expr.span.start;
        loop {
            let kind = match self.current_kind() {
                TokenKind::Caret => {
                    self.advance();
                    ExprKind::Unary { op: UnaryOp::Deref, operand: Box::new(expr) }
                }
                TokenKind::LBracket => {
                    let opener = self.advance().span;
                    let index = self.parse_expr()?;
                    self.expect_close(&TokenKind::RBracket, opener)?;
                    ExprKind::Index { object: Box::new(expr), index: Box::new(index) }
                }
                _ => return Ok(expr),
            };
            expr = Expr { id: self.next_id(), kind, span: self.span_from(start) };
        }
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let start = self.start();

        let kind = match self.current_kind().clone() {
            TokenKind::LParen => {
                let opener = self.advance().span;
                let inner = self.parse_expr()?;
                self.expect_close(&TokenKind::RParen, opener)?;
                ExprKind::Group(Box::new(inner))
            }
            TokenKind::Number(n) => {
                self.advance();
                ExprKind::Number(n)
            }
            TokenKind::String(s) => {
                self.advance();
                ExprKind::String(s)
            }
            TokenKind::CString(s) => {
                self.advance();
                ExprKind::CString(s)
            }
            TokenKind::Char(c) => {
                self.advance();
                ExprKind::Char(c)
            }
            TokenKind::Bool(b) => {
                self.advance();
                ExprKind::Bool(b)
            }
            TokenKind::Ident(name) => {
                self.advance();
                // Only an identifier directly followed by `(` is a call.
                if self.check(&TokenKind::LParen) {
                    let args = self.parse_args()?;
                    ExprKind::Invoke { name, args }
                } else {
                    ExprKind::Ident(name)
                }
            }
            TokenKind::New => {
                self.advance();
                let name = self.expect_ident()?;
                let args = self.parse_args()?;
                ExprKind::New { name, args }
            }
            TokenKind::LBracket => {
                let opener = self.advance().span;
                let items = self.parse_comma_list(&TokenKind::RBracket, opener)?;
                ExprKind::List(items)
            }
            TokenKind::Var => ExprKind::VarBind(self.parse_binding()?),
            TokenKind::Let => ExprKind::LetBind(self.parse_binding()?),
            _ => return Err(self.error_here("expression")),
        };

        Ok(Expr { id: self.next_id(), kind, span: self.span_from(start) })
    }

    /// `var|let name [: type] = expr`. The initializer is a full expression.
    fn parse_binding(&mut self) -> Result<Binding, ParseError> {
        self.advance();
        let name = self.expect_ident()?;
        let ty = if self.match_token(&TokenKind::Colon) {
            Some(self.parse_type()?)
        } else {
            None
        };
        self.expect(&TokenKind::Eq)?;
        let init = self.parse_expr()?;
        Ok(Binding { name, ty, init: Box::new(init) })
    }

    /// `( expr, ... )`
    pub(super) fn parse_args(&mut self) -> Result<Vec<Expr>, ParseError> {
        let opener = self.expect_open(&TokenKind::LParen)?;
        self.parse_comma_list(&TokenKind::RParen, opener)
    }

    /// Comma-separated expressions up to and including the `close` matching
    /// `opener`.
    fn parse_comma_list(&mut self, close: &TokenKind, opener: Span) -> Result<Vec<Expr>, ParseError> {
        let mut items = Vec::new();
        if !self.check(close) {
            loop {
                items.push(self.parse_expr()?);
                if !self.match_token(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect_close(close, opener)?;
        Ok(items)
    }
}
