// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Statement nodes.

use crate::expr::Expr;
use crate::{NodeId, Span};

/// A statement in the tree.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stmt {
    pub id: NodeId,
    pub kind: StmtKind,
    pub span: Span,
}

/// The kind of statement.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StmtKind {
    /// `ret expr`
    Ret(Expr),
    /// `if cond block [else ...]`
    If(IfStmt),
    /// `switch expr { [fall] case expr block ... }`
    Switch {
        scrutinee: Expr,
        cases: Vec<SwitchCase>,
    },
    /// One of the three `for` forms
    For(ForStmt),
    /// Expression statement
    Expr(Expr),
    /// `raw [ ... ]`
    Raw(String),
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IfStmt {
    pub cond: Expr,
    pub then_block: Block,
    pub else_branch: Option<ElseBranch>,
    pub span: Span,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElseBranch {
    /// `else if ...`
    If(Box<IfStmt>),
    /// `else { ... }` or `else -> stmt`
    Block(Block),
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwitchCase {
    /// Marked with `fall`: control continues into the next case.
    pub fallthrough: bool,
    pub pattern: Expr,
    pub body: Block,
    pub span: Span,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForStmt {
    pub kind: ForKind,
    pub body: Block,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ForKind {
    /// `for init; cond; step`
    CStyle {
        init: Expr,
        cond: Expr,
        step: Expr,
    },
    /// `for i in from to to`
    Range {
        binding: String,
        from: Expr,
        to: Expr,
    },
    /// `for cond`
    Cond(Expr),
}

/// A statement body. The two forms are interchangeable wherever a block is
/// expected.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Block {
    pub kind: BlockKind,
    pub span: Span,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockKind {
    /// `{ stmt* }`
    Braced(Vec<Stmt>),
    /// `-> stmt`
    Arrow(Box<Stmt>),
}

impl Block {
    pub fn stmts(&self) -> &[Stmt] {
        match &self.kind {
            BlockKind::Braced(stmts) => stmts,
            BlockKind::Arrow(stmt) => std::slice::from_ref(stmt.as_ref()),
        }
    }

    pub fn is_arrow(&self) -> bool {
        matches!(self.kind, BlockKind::Arrow(_))
    }
}
