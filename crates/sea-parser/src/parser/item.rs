// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Top-level items.

use sea_ast::item::{
    DefItem, Definition, DefinitionList, FunItem, Hashtag, Item, ItemKind, PragmaItem, RecItem,
    TagItem, TagRecItem, TagRecVariant, UseItem,
};
use sea_ast::token::TokenKind;
use tracing::trace;

use super::Parser;
use crate::error::ParseError;

impl Parser {
    pub(super) fn parse_item(&mut self) -> Result<Item, ParseError> {
        let start = self.start();
        trace!(token = ?self.current_kind(), at = start, "parsing item");

        let kind = match self.current_kind() {
            TokenKind::Use => self.parse_use()?,
            TokenKind::Fun => self.parse_fun()?,
            TokenKind::Rec => self.parse_rec()?,
            TokenKind::Def => self.parse_def()?,
            TokenKind::Tag => self.parse_tag()?,
            TokenKind::Pragma => self.parse_pragma()?,
            TokenKind::Hash => self.parse_hashtag()?,
            TokenKind::RawBlock(_) | TokenKind::Raw => ItemKind::Raw(self.parse_raw()?),
            _ => return Err(self.error_here("an item (use, fun, rec, def, tag, pragma, raw, #)")),
        };

        Ok(Item { id: self.next_id(), kind, span: self.span_from(start) })
    }

    /// `use a/b/c [x y]`
    fn parse_use(&mut self) -> Result<ItemKind, ParseError> {
        self.expect(&TokenKind::Use)?;

        let mut path = vec![self.expect_ident()?];
        while self.match_token(&TokenKind::Slash) {
            path.push(self.expect_ident()?);
        }

        let imports = if self.check(&TokenKind::LBracket) {
            let opener = self.advance().span;
            let mut names = Vec::new();
            while !self.check(&TokenKind::RBracket) && !self.at_end() {
                names.push(self.expect_ident()?);
                self.match_token(&TokenKind::Comma);
            }
            self.expect_close(&TokenKind::RBracket, opener)?;
            Some(names)
        } else {
            None
        };

        Ok(ItemKind::Use(UseItem { path, imports }))
    }

    /// `fun name (defs) [: type] block`
    fn parse_fun(&mut self) -> Result<ItemKind, ParseError> {
        self.expect(&TokenKind::Fun)?;
        let name = self.expect_ident()?;
        let params = self.parse_definition_list()?;
        let ret_ty = if self.match_token(&TokenKind::Colon) {
            Some(self.parse_type()?)
        } else {
            None
        };
        let body = self.parse_block()?;

        Ok(ItemKind::Fun(FunItem { name, params, ret_ty, body }))
    }

    fn parse_rec(&mut self) -> Result<ItemKind, ParseError> {
        self.expect(&TokenKind::Rec)?;
        let name = self.expect_ident()?;
        let fields = self.parse_definition_list()?;
        Ok(ItemKind::Rec(RecItem { name, fields }))
    }

    fn parse_def(&mut self) -> Result<ItemKind, ParseError> {
        self.expect(&TokenKind::Def)?;
        let name = self.expect_ident()?;
        self.expect(&TokenKind::Eq)?;
        let ty = self.parse_type()?;
        Ok(ItemKind::Def(DefItem { name, ty }))
    }

    /// `tag name (A, B C)` or `tag rec name (A (x: i32) B)`. Commas between
    /// variants are optional in both forms.
    fn parse_tag(&mut self) -> Result<ItemKind, ParseError> {
        self.expect(&TokenKind::Tag)?;
        let is_rec = self.match_token(&TokenKind::Rec);
        let name = self.expect_ident()?;
        let opener = self.expect_open(&TokenKind::LParen)?;

        if !is_rec {
            let mut variants = Vec::new();
            while !self.check(&TokenKind::RParen) && !self.at_end() {
                variants.push(self.expect_ident()?);
                self.match_token(&TokenKind::Comma);
            }
            self.expect_close(&TokenKind::RParen, opener)?;
            return Ok(ItemKind::Tag(TagItem { name, variants }));
        }

        let mut variants = Vec::new();
        while !self.check(&TokenKind::RParen) && !self.at_end() {
            let start = self.start();
            let variant = self.expect_ident()?;
            let payload = if self.check(&TokenKind::LParen) {
                Some(self.parse_definition_list()?)
            } else {
                None
            };
            variants.push(TagRecVariant { name: variant, payload, span: self.span_from(start) });
            self.match_token(&TokenKind::Comma);
        }
        self.expect_close(&TokenKind::RParen, opener)?;

        Ok(ItemKind::TagRec(TagRecItem { name, variants }))
    }

    /// `pragma name (expr, ...)`
    fn parse_pragma(&mut self) -> Result<ItemKind, ParseError> {
        self.expect(&TokenKind::Pragma)?;
        let name = self.expect_ident()?;
        let args = self.parse_args()?;
        Ok(ItemKind::Pragma(PragmaItem { name, args }))
    }

    /// `#name` or `#(a, b)`
    fn parse_hashtag(&mut self) -> Result<ItemKind, ParseError> {
        self.expect(&TokenKind::Hash)?;

        if !self.check(&TokenKind::LParen) {
            let name = self.expect_ident()?;
            return Ok(ItemKind::Hashtag(Hashtag { names: vec![name], grouped: false }));
        }

        let opener = self.advance().span;
        let mut names = Vec::new();
        while !self.check(&TokenKind::RParen) && !self.at_end() {
            names.push(self.expect_ident()?);
            self.match_token(&TokenKind::Comma);
        }
        self.expect_close(&TokenKind::RParen, opener)?;

        Ok(ItemKind::Hashtag(Hashtag { names, grouped: true }))
    }

    /// `( name: type, ... )`, commas required between entries.
    pub(super) fn parse_definition_list(&mut self) -> Result<DefinitionList, ParseError> {
        let start = self.start();
        let opener = self.expect_open(&TokenKind::LParen)?;

        let mut entries = Vec::new();
        if !self.check(&TokenKind::RParen) {
            loop {
                let def_start = self.start();
                let name = self.expect_ident()?;
                self.expect(&TokenKind::Colon)?;
                let ty = self.parse_type()?;
                entries.push(Definition { name, ty, span: self.span_from(def_start) });

                if !self.match_token(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect_close(&TokenKind::RParen, opener)?;

        Ok(DefinitionList { entries, span: self.span_from(start) })
    }
}
