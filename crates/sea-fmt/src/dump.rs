// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Span-free s-expression dump of a tree.
//!
//! Two trees with equal dumps have the same shape, node kinds, names and
//! literal text. Spans and node ids are left out, so the dump of a
//! reformatted file can be compared with the dump of the original.

use sea_ast::expr::{Binding, Expr, ExprKind, UnaryOp};
use sea_ast::item::{DefinitionList, Item, ItemKind};
use sea_ast::stmt::{Block, BlockKind, ElseBranch, ForKind, IfStmt, Stmt, StmtKind};
use sea_ast::SourceFile;

use crate::explicit;

/// Dump every item, one per line.
pub fn dump_file(file: &SourceFile) -> String {
    let mut out = String::new();
    for item in &file.items {
        out.push_str(&dump_item(item));
        out.push('\n');
    }
    out
}

pub fn dump_item(item: &Item) -> String {
    match &item.kind {
        ItemKind::Use(u) => {
            let mut s = format!("(use ({})", u.path.join(" "));
            if let Some(imports) = &u.imports {
                s.push_str(&format!(" (imports{})", prefixed(imports.iter().cloned())));
            }
            s.push(')');
            s
        }
        ItemKind::Fun(f) => {
            let ret = f.ret_ty.as_ref().map(|t| format!(" (ret {})", explicit::ty(t))).unwrap_or_default();
            format!("(fun {} {}{} {})", f.name, definitions(&f.params), ret, block(&f.body))
        }
        ItemKind::Rec(r) => format!("(rec {} {})", r.name, definitions(&r.fields)),
        ItemKind::Def(d) => format!("(def {} {})", d.name, explicit::ty(&d.ty)),
        ItemKind::Tag(t) => format!("(tag {}{})", t.name, prefixed(t.variants.iter().cloned())),
        ItemKind::TagRec(t) => {
            let variants = t.variants.iter().map(|v| match &v.payload {
                Some(payload) => format!("({} {})", v.name, definitions(payload)),
                None => v.name.clone(),
            });
            format!("(tag-rec {}{})", t.name, prefixed(variants))
        }
        ItemKind::Pragma(p) => format!("(pragma {}{})", p.name, prefixed(p.args.iter().map(expr))),
        ItemKind::Raw(content) => format!("(raw {:?})", content),
        ItemKind::Hashtag(h) => {
            let head = if h.grouped { "hashtag-group" } else { "hashtag" };
            format!("({}{})", head, prefixed(h.names.iter().cloned()))
        }
    }
}

pub fn stmt(stmt: &Stmt) -> String {
    match &stmt.kind {
        StmtKind::Ret(e) => format!("(ret {})", expr(e)),
        StmtKind::If(i) => if_stmt(i),
        StmtKind::Switch { scrutinee, cases } => {
            let cases = cases.iter().map(|c| {
                let head = if c.fallthrough { "fall-case" } else { "case" };
                format!("({} {} {})", head, expr(&c.pattern), block(&c.body))
            });
            format!("(switch {}{})", expr(scrutinee), prefixed(cases))
        }
        StmtKind::For(f) => {
            let header = match &f.kind {
                ForKind::Range { binding, from, to } => {
                    format!("for-range {} {} {}", binding, expr(from), expr(to))
                }
                ForKind::CStyle { init, cond, step } => {
                    format!("for-c {} {} {}", expr(init), expr(cond), expr(step))
                }
                ForKind::Cond(cond) => format!("for {}", expr(cond)),
            };
            format!("({} {})", header, block(&f.body))
        }
        StmtKind::Expr(e) => expr(e),
        StmtKind::Raw(content) => format!("(raw {:?})", content),
    }
}

fn if_stmt(i: &IfStmt) -> String {
    let else_part = match &i.else_branch {
        Some(ElseBranch::If(nested)) => format!(" (else {})", if_stmt(nested)),
        Some(ElseBranch::Block(b)) => format!(" (else {})", block(b)),
        None => String::new(),
    };
    format!("(if {} {}{})", expr(&i.cond), block(&i.then_block), else_part)
}

fn block(block: &Block) -> String {
    match &block.kind {
        BlockKind::Braced(stmts) => format!("(block{})", prefixed(stmts.iter().map(stmt))),
        BlockKind::Arrow(s) => format!("(arrow {})", stmt(s)),
    }
}

pub fn expr(expr: &Expr) -> String {
    match &expr.kind {
        ExprKind::Group(inner) => format!("(group {})", self::expr(inner)),
        ExprKind::Number(n) => n.clone(),
        ExprKind::String(s) => format!("{:?}", s),
        ExprKind::CString(s) => format!("c{:?}", s),
        ExprKind::Char(c) => format!("`{}`", c),
        ExprKind::Bool(b) => b.to_string(),
        ExprKind::Ident(name) => name.clone(),
        ExprKind::New { name, args } => format!("(new {}{})", name, prefixed(args.iter().map(self::expr))),
        ExprKind::Invoke { name, args } => format!("(call {}{})", name, prefixed(args.iter().map(self::expr))),
        ExprKind::List(items) => format!("(list{})", prefixed(items.iter().map(self::expr))),
        ExprKind::VarBind(b) => binding("var", b),
        ExprKind::LetBind(b) => binding("let", b),
        ExprKind::Unary { op, operand } => {
            let name = match op {
                UnaryOp::Neg => "neg",
                UnaryOp::Not => "not",
                UnaryOp::Ref => "ref",
                UnaryOp::Deref => "deref",
            };
            format!("({} {})", name, self::expr(operand))
        }
        ExprKind::Binary { op, left, right } => {
            format!("({} {} {})", op.symbol(), self::expr(left), self::expr(right))
        }
        ExprKind::Index { object, index } => {
            format!("(index {} {})", self::expr(object), self::expr(index))
        }
        ExprKind::Member { object, member } => {
            format!("(. {} {})", self::expr(object), self::expr(member))
        }
        ExprKind::Cast { expr, ty } => format!("(as {} {})", self::expr(expr), explicit::ty(ty)),
    }
}

fn binding(word: &str, b: &Binding) -> String {
    let ty = b.ty.as_ref().map(|t| format!(" {}", explicit::ty(t))).unwrap_or_default();
    format!("({} {}{} {})", word, b.name, ty, expr(&b.init))
}

fn definitions(list: &DefinitionList) -> String {
    let entries = list.entries.iter().map(|d| format!("({} {})", d.name, explicit::ty(&d.ty)));
    format!("(defs{})", prefixed(entries))
}

/// Each part preceded by a space.
fn prefixed(parts: impl IntoIterator<Item = String>) -> String {
    parts.into_iter().map(|p| format!(" {}", p)).collect()
}
