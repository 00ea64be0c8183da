// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Top-level item nodes.

use crate::expr::Expr;
use crate::stmt::Block;
use crate::ty::Type;
use crate::{NodeId, Span};

/// A top-level item.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: NodeId,
    pub kind: ItemKind,
    pub span: Span,
}

/// The kind of item.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Module import
    Use(UseItem),
    /// Function
    Fun(FunItem),
    /// Record
    Rec(RecItem),
    /// Type alias
    Def(DefItem),
    /// Sum type with bare variants
    Tag(TagItem),
    /// Sum type whose variants may carry a payload
    TagRec(TagRecItem),
    /// Compiler directive
    Pragma(PragmaItem),
    /// `raw [ ... ]` at file scope
    Raw(String),
    /// `#name` or `#(a, b)` annotation marker
    Hashtag(Hashtag),
}

/// `use std/io [print read]`
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UseItem {
    /// Path segments separated by `/`.
    pub path: Vec<String>,
    /// The bracketed import list, if present. May be empty.
    pub imports: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunItem {
    pub name: String,
    pub params: DefinitionList,
    pub ret_ty: Option<Type>,
    pub body: Block,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecItem {
    pub name: String,
    pub fields: DefinitionList,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefItem {
    pub name: String,
    pub ty: Type,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagItem {
    pub name: String,
    pub variants: Vec<String>,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagRecItem {
    pub name: String,
    pub variants: Vec<TagRecVariant>,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagRecVariant {
    pub name: String,
    pub payload: Option<DefinitionList>,
    pub span: Span,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PragmaItem {
    pub name: String,
    pub args: Vec<Expr>,
}

/// Annotation marker.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hashtag {
    pub names: Vec<String>,
    /// Written as `#(a, b)` rather than `#a`.
    pub grouped: bool,
}

/// Ordered `(name: Type, ...)` list used by parameters, record fields and
/// tag-record payloads.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefinitionList {
    pub entries: Vec<Definition>,
    pub span: Span,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Definition {
    pub name: String,
    pub ty: Type,
    pub span: Span,
}

impl DefinitionList {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|d| d.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ItemKind {
    /// Short name of the item kind for listings and logs.
    pub fn describe(&self) -> &'static str {
        match self {
            ItemKind::Use(_) => "use",
            ItemKind::Fun(_) => "fun",
            ItemKind::Rec(_) => "rec",
            ItemKind::Def(_) => "def",
            ItemKind::Tag(_) => "tag",
            ItemKind::TagRec(_) => "tag rec",
            ItemKind::Pragma(_) => "pragma",
            ItemKind::Raw(_) => "raw",
            ItemKind::Hashtag(_) => "hashtag",
        }
    }
}
