// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Grammar tests. Expressions are compared through a fully parenthesized
//! rendering so grouping is visible in the assertions.

mod item;

use sea_ast::expr::{Expr, ExprKind};
use sea_ast::item::{FunItem, Item, ItemKind};
use sea_ast::stmt::{Stmt, StmtKind};
use sea_ast::ty::{Type, TypeKind};

use crate::{parse_source, ParseResult};

fn parse(src: &str) -> ParseResult {
    let result = parse_source(src);
    assert!(result.is_ok(), "Parse errors in {:?}: {:?}", src, result.errors);
    result
}

fn items(src: &str) -> Vec<Item> {
    parse(src).file.items
}

fn fun(item: &Item) -> &FunItem {
    match &item.kind {
        ItemKind::Fun(f) => f,
        other => panic!("Expected fun, got {}", other.describe()),
    }
}

/// Statements of `fun t() { <body> }`.
fn body(stmts: &str) -> Vec<Stmt> {
    let items = items(&format!("fun t() {{ {} }}", stmts));
    fun(&items[0]).body.stmts().to_vec()
}

/// The single expression statement in `src`.
fn expr(src: &str) -> Expr {
    let stmts = body(src);
    assert_eq!(stmts.len(), 1, "expected one statement in {:?}", src);
    match &stmts[0].kind {
        StmtKind::Expr(e) => e.clone(),
        other => panic!("Expected expression statement, got {:?}", other),
    }
}

fn render(src: &str) -> String {
    show(&expr(src))
}

fn show(e: &Expr) -> String {
    match &e.kind {
        ExprKind::Group(inner) => format!("(group {})", show(inner)),
        ExprKind::Number(n) => n.clone(),
        ExprKind::String(s) => format!("\"{}\"", s),
        ExprKind::CString(s) => format!("c\"{}\"", s),
        ExprKind::Char(c) => format!("`{}`", c),
        ExprKind::Bool(b) => b.to_string(),
        ExprKind::Ident(name) => name.clone(),
        ExprKind::New { name, args } => format!("new {}({})", name, list(args)),
        ExprKind::Invoke { name, args } => format!("{}({})", name, list(args)),
        ExprKind::List(items) => format!("[{}]", list(items)),
        ExprKind::VarBind(b) | ExprKind::LetBind(b) => {
            let word = if matches!(e.kind, ExprKind::VarBind(_)) { "var" } else { "let" };
            match &b.ty {
                Some(ty) => format!("({} {}: {} = {})", word, b.name, show_type(ty), show(&b.init)),
                None => format!("({} {} = {})", word, b.name, show(&b.init)),
            }
        }
        ExprKind::Unary { op, operand } if op.is_postfix() => {
            format!("({}{})", show(operand), op.symbol())
        }
        ExprKind::Unary { op, operand } => {
            let sep = if op.symbol().len() > 1 { " " } else { "" };
            format!("({}{}{})", op.symbol(), sep, show(operand))
        }
        ExprKind::Binary { op, left, right } => {
            format!("({} {} {})", show(left), op.symbol(), show(right))
        }
        ExprKind::Index { object, index } => format!("({}[{}])", show(object), show(index)),
        ExprKind::Member { object, member } => format!("({} . {})", show(object), show(member)),
        ExprKind::Cast { expr, ty } => format!("({} as {})", show(expr), show_type(ty)),
    }
}

fn list(exprs: &[Expr]) -> String {
    exprs.iter().map(show).collect::<Vec<_>>().join(", ")
}

fn show_type(ty: &Type) -> String {
    let mut out = "^".repeat(ty.pointer_depth as usize);
    match &ty.kind {
        TypeKind::Named { name, dims } => {
            out.push_str(name);
            for dim in dims {
                out.push_str(&format!("[{}]", dim.as_deref().unwrap_or("")));
            }
        }
        TypeKind::Function { params, ret } => {
            let params: Vec<_> = params.iter().map(show_type).collect();
            out.push_str(&format!("fun({})", params.join(" ")));
            if let Some(ret) = ret {
                out.push_str(&format!(": {}", show_type(ret)));
            }
        }
    }
    out
}
