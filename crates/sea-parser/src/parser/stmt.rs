// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Statements and blocks.

use sea_ast::stmt::{Block, BlockKind, ElseBranch, ForKind, ForStmt, IfStmt, Stmt, StmtKind, SwitchCase};
use sea_ast::token::TokenKind;
use sea_ast::Span;
use tracing::trace;

use super::Parser;
use crate::error::ParseError;

impl Parser {
    /// Parse a block: `{ stmt* }` or `-> stmt`.
    pub fn parse_block(&mut self) -> Result<Block, ParseError> {
        let start = self.start();

        if self.match_token(&TokenKind::Arrow) {
            let stmt = self.parse_stmt()?;
            return Ok(Block { kind: BlockKind::Arrow(Box::new(stmt)), span: self.span_from(start) });
        }

        let opener = self.current().span;
        if !self.match_token(&TokenKind::LBrace) {
            return Err(self.error_here("a block"));
        }
        let stmts = self.parse_block_body(opener)?;
        Ok(Block { kind: BlockKind::Braced(stmts), span: self.span_from(start) })
    }

    /// Statements up to and including the `}` matching `opener`, with error
    /// recovery.
    fn parse_block_body(&mut self, opener: Span) -> Result<Vec<Stmt>, ParseError> {
        let mut stmts = Vec::new();

        while !self.at_block_boundary() {
            let before = self.pos;
            match self.parse_stmt() {
                Ok(stmt) => stmts.push(stmt),
                Err(e) => {
                    // Record error but stay within the block
                    if !self.record_error(e) {
                        self.skip_to_closing_brace();
                        break;
                    }
                    self.synchronize_in_block(before);
                }
            }
        }

        self.expect_close(&TokenKind::RBrace, opener)?;
        Ok(stmts)
    }

    /// Parse a statement.
    pub fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.start();
        trace!(token = ?self.current_kind(), at = start, "parsing statement");

        let kind = match self.current_kind() {
            TokenKind::Ret => {
                self.advance();
                StmtKind::Ret(self.parse_expr()?)
            }
            TokenKind::If => StmtKind::If(self.parse_if()?),
            TokenKind::Switch => self.parse_switch()?,
            TokenKind::For => StmtKind::For(self.parse_for()?),
            TokenKind::RawBlock(_) | TokenKind::Raw => StmtKind::Raw(self.parse_raw()?),
            _ => StmtKind::Expr(self.parse_expr()?),
        };

        Ok(Stmt { id: self.next_id(), kind, span: self.span_from(start) })
    }

    /// `if expr block [else (if | block)]`. The `else` binds to the
    /// innermost `if`, since an inner arrow body is parsed first.
    fn parse_if(&mut self) -> Result<IfStmt, ParseError> {
        let start = self.start();
        self.expect(&TokenKind::If)?;
        let cond = self.parse_expr()?;
        let then_block = self.parse_block()?;

        let else_branch = if self.match_token(&TokenKind::Else) {
            if self.check(&TokenKind::If) {
                Some(ElseBranch::If(Box::new(self.parse_if()?)))
            } else {
                Some(ElseBranch::Block(self.parse_block()?))
            }
        } else {
            None
        };

        Ok(IfStmt { cond, then_block, else_branch, span: self.span_from(start) })
    }

    /// `switch expr { (fall? case expr block)* }`
    fn parse_switch(&mut self) -> Result<StmtKind, ParseError> {
        self.expect(&TokenKind::Switch)?;
        let scrutinee = self.parse_expr()?;
        let opener = self.expect_open(&TokenKind::LBrace)?;

        let mut cases = Vec::new();
        while !self.check(&TokenKind::RBrace) && !self.at_end() {
            let start = self.start();
            let fallthrough = self.match_token(&TokenKind::Fall);
            self.expect(&TokenKind::Case)?;
            let pattern = self.parse_expr()?;
            let body = self.parse_block()?;
            cases.push(SwitchCase { fallthrough, pattern, body, span: self.span_from(start) });
        }
        self.expect_close(&TokenKind::RBrace, opener)?;

        Ok(StmtKind::Switch { scrutinee, cases })
    }

    /// The three `for` forms, picked with at most two tokens of lookahead:
    /// `name in a to b`, `init; cond; step`, or a single condition.
    fn parse_for(&mut self) -> Result<ForStmt, ParseError> {
        self.expect(&TokenKind::For)?;

        let is_range = matches!(self.current_kind(), TokenKind::Ident(_))
            && matches!(self.peek(1), TokenKind::Ident(word) if word == "in");

        let kind = if is_range {
            let binding = self.expect_ident()?;
            self.expect_contextual("in")?;
            let from = self.parse_expr()?;
            self.expect_contextual("to")?;
            let to = self.parse_expr()?;
            ForKind::Range { binding, from, to }
        } else {
            let first = self.parse_expr()?;
            if self.match_token(&TokenKind::Semi) {
                let cond = self.parse_expr()?;
                self.expect(&TokenKind::Semi)?;
                let step = self.parse_expr()?;
                ForKind::CStyle { init: first, cond, step }
            } else {
                ForKind::Cond(first)
            }
        };

        let body = self.parse_block()?;
        Ok(ForStmt { kind, body })
    }

    /// A raw block, in statement or item position. The content must not be
    /// empty.
    pub(super) fn parse_raw(&mut self) -> Result<String, ParseError> {
        let token = self.advance().clone();
        match token.kind {
            TokenKind::RawBlock(content) if content.trim().is_empty() => {
                Err(ParseError::empty_raw(Span::new(token.span.end - 1, token.span.end)))
            }
            TokenKind::RawBlock(content) => Ok(content),
            // `raw` not followed by `[`
            _ => Err(self.error_here("'['")),
        }
    }
}
