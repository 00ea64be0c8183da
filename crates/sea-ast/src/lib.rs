// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Syntax tree types for the Sea language.
//!
//! This crate defines the tokens and tree nodes shared between the lexer,
//! parser, formatter, and diagnostics.

pub mod span;
pub mod token;
pub mod ty;
pub mod expr;
pub mod stmt;
pub mod item;

pub use span::{LineMap, Position, Span};

/// Unique identifier for tree nodes.
///
/// Assigned in creation order by the parser; opaque to everyone else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u32);

impl NodeId {
    pub const DUMMY: NodeId = NodeId(u32::MAX);
}

/// The root of a parsed file.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceFile {
    pub items: Vec<item::Item>,
    pub span: Span,
}

impl SourceFile {
    pub fn empty(len: usize) -> Self {
        Self { items: Vec::new(), span: Span::new(0, len) }
    }
}
