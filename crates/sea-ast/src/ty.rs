// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Type expression nodes.

use crate::Span;

/// A type annotation: `^^name[4][]` or `fun(a b): c`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Type {
    /// Number of leading `^`.
    pub pointer_depth: u32,
    pub kind: TypeKind,
    pub span: Span,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeKind {
    /// Named type with array dimensions; `None` is an open dimension `[]`.
    Named {
        name: String,
        dims: Vec<Option<String>>,
    },
    /// Function type. Parameter types are not comma separated.
    Function {
        params: Vec<Type>,
        ret: Option<Box<Type>>,
    },
}

impl Type {
    pub fn named(name: impl Into<String>, span: Span) -> Self {
        Self {
            pointer_depth: 0,
            kind: TypeKind::Named { name: name.into(), dims: Vec::new() },
            span,
        }
    }
}
