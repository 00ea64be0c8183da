// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Expression nodes and the operator precedence table.

use crate::ty::Type;
use crate::{NodeId, Span};

/// An expression in the tree.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Expr {
    pub id: NodeId,
    pub kind: ExprKind,
    pub span: Span,
}

/// The kind of expression.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExprKind {
    /// Parenthesized expression, kept so printing reproduces the grouping.
    Group(Box<Expr>),
    /// Number literal, digits as written
    Number(String),
    /// String literal `"..."`
    String(String),
    /// C string literal `c"..."`
    CString(String),
    /// Character literal `` `...` ``
    Char(String),
    /// `true` / `false`
    Bool(bool),
    /// Identifier
    Ident(String),
    /// Construction `new Name(args)`
    New {
        name: String,
        args: Vec<Expr>,
    },
    /// Call `name(args)`. Only a bare identifier can be invoked.
    Invoke {
        name: String,
        args: Vec<Expr>,
    },
    /// List literal `[a, b]`
    List(Vec<Expr>),
    /// `var name: T = init`
    VarBind(Binding),
    /// `let name: T = init`
    LetBind(Binding),
    /// Prefix `-x`, `not x`, `ref x` or postfix `x^`
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    /// Binary operation, including assignment
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Postfix index `object[index]`
    Index {
        object: Box<Expr>,
        index: Box<Expr>,
    },
    /// Member access `object.member`. The member side is a full expression
    /// (right associative), so `a.b.c` nests as `a.(b.c)`.
    Member {
        object: Box<Expr>,
        member: Box<Expr>,
    },
    /// Cast `expr as Type`
    Cast {
        expr: Box<Expr>,
        ty: Type,
    },
}

/// The shared shape of `var` and `let` bindings.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Binding {
    pub name: String,
    pub ty: Option<Type>,
    pub init: Box<Expr>,
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnaryOp {
    /// Negation (-)
    Neg,
    /// Logical not (`not`)
    Not,
    /// Address-of (`ref`)
    Ref,
    /// Dereference (postfix `^`)
    Deref,
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Not => "not",
            UnaryOp::Ref => "ref",
            UnaryOp::Deref => "^",
        }
    }

    pub fn is_postfix(self) -> bool {
        matches!(self, UnaryOp::Deref)
    }
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOp {
    // Arithmetic
    Mul,
    Div,
    Mod,
    Add,
    Sub,
    // Logical
    And,
    Or,
    // Comparison
    Eq,
    Ne,
    Le,
    Gt,
    Ge,
    Lt,
    // Assignment
    Assign,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Right,
}

/// Binding level of member access and casts, above every `BinaryOp`.
pub const POSTFIX_LEVEL: u8 = 7;

impl BinaryOp {
    /// Precedence level, higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => 6,
            BinaryOp::Add | BinaryOp::Sub => 5,
            BinaryOp::And | BinaryOp::Or => 4,
            BinaryOp::Eq | BinaryOp::Ne => 3,
            BinaryOp::Le => 2,
            BinaryOp::Gt | BinaryOp::Ge | BinaryOp::Lt => 1,
            BinaryOp::Assign => 0,
        }
    }

    pub fn associativity(self) -> Assoc {
        match self {
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Assign => Assoc::Right,
            _ => Assoc::Left,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::And => "and",
            BinaryOp::Or => "or",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
            BinaryOp::Lt => "<",
            BinaryOp::Assign => "=",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_levels() {
        assert!(BinaryOp::Mul.precedence() > BinaryOp::Add.precedence());
        assert!(BinaryOp::Add.precedence() > BinaryOp::And.precedence());
        assert!(BinaryOp::Ne.precedence() > BinaryOp::Le.precedence());
        assert!(BinaryOp::Le.precedence() > BinaryOp::Lt.precedence());
        assert_eq!(BinaryOp::Assign.precedence(), 0);
        assert!(POSTFIX_LEVEL > BinaryOp::Mod.precedence());
    }

    #[test]
    fn table_associativity() {
        assert_eq!(BinaryOp::Sub.associativity(), Assoc::Right);
        assert_eq!(BinaryOp::Assign.associativity(), Assoc::Right);
        assert_eq!(BinaryOp::Div.associativity(), Assoc::Left);
        assert_eq!(BinaryOp::Or.associativity(), Assoc::Left);
    }
}
