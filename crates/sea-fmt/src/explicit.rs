// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Fully parenthesized rendering.
//!
//! Every compound expression is wrapped in parentheses, which makes the
//! grouping chosen by the parser visible: `a + b * c` renders as
//! `(a + (b * c))`.

use sea_ast::expr::{Binding, Expr, ExprKind};
use sea_ast::ty::{Type, TypeKind};

/// Render `expr` with explicit parentheses around every operator.
pub fn expr(expr: &Expr) -> String {
    match &expr.kind {
        // The written parentheses are subsumed by the explicit ones.
        ExprKind::Group(inner) => self::expr(inner),
        ExprKind::Number(n) => n.clone(),
        ExprKind::String(s) => format!("\"{}\"", s),
        ExprKind::CString(s) => format!("c\"{}\"", s),
        ExprKind::Char(c) => format!("`{}`", c),
        ExprKind::Bool(b) => b.to_string(),
        ExprKind::Ident(name) => name.clone(),
        ExprKind::New { name, args } => format!("new {}({})", name, list(args)),
        ExprKind::Invoke { name, args } => format!("{}({})", name, list(args)),
        ExprKind::List(items) => format!("[{}]", list(items)),
        ExprKind::VarBind(b) => binding("var", b),
        ExprKind::LetBind(b) => binding("let", b),
        ExprKind::Unary { op, operand } if op.is_postfix() => {
            format!("({}{})", self::expr(operand), op.symbol())
        }
        ExprKind::Unary { op, operand } => {
            let sep = if op.symbol().chars().all(char::is_alphabetic) { " " } else { "" };
            format!("({}{}{})", op.symbol(), sep, self::expr(operand))
        }
        ExprKind::Binary { op, left, right } => {
            format!("({} {} {})", self::expr(left), op.symbol(), self::expr(right))
        }
        ExprKind::Index { object, index } => {
            format!("({}[{}])", self::expr(object), self::expr(index))
        }
        ExprKind::Member { object, member } => {
            format!("({}.{})", self::expr(object), self::expr(member))
        }
        ExprKind::Cast { expr, ty } => format!("({} as {})", self::expr(expr), self::ty(ty)),
    }
}

/// Render a type annotation. Types carry no precedence, so this is also
/// their canonical form.
pub fn ty(ty: &Type) -> String {
    let mut out = "^".repeat(ty.pointer_depth as usize);
    match &ty.kind {
        TypeKind::Named { name, dims } => {
            out.push_str(name);
            for dim in dims {
                out.push('[');
                out.push_str(dim.as_deref().unwrap_or(""));
                out.push(']');
            }
        }
        TypeKind::Function { params, ret } => {
            let params: Vec<_> = params.iter().map(self::ty).collect();
            out.push_str("fun(");
            out.push_str(&params.join(" "));
            out.push(')');
            if let Some(ret) = ret {
                out.push_str(": ");
                out.push_str(&self::ty(ret));
            }
        }
    }
    out
}

fn binding(word: &str, b: &Binding) -> String {
    match &b.ty {
        Some(ty) => format!("({} {}: {} = {})", word, b.name, self::ty(ty), self::expr(&b.init)),
        None => format!("({} {} = {})", word, b.name, self::expr(&b.init)),
    }
}

fn list(exprs: &[Expr]) -> String {
    exprs.iter().map(self::expr).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn explicit(src: &str) -> String {
        let result = sea_parser::parse_source(&format!("fun t() -> {}", src));
        assert!(result.is_ok(), "{:?}", result.errors);
        let sea_ast::item::ItemKind::Fun(f) = &result.file.items[0].kind else {
            panic!("Expected fun");
        };
        match &f.body.stmts()[0].kind {
            sea_ast::stmt::StmtKind::Expr(e) => expr(e),
            other => panic!("Expected expression, got {:?}", other),
        }
    }

    #[test]
    fn shows_precedence() {
        assert_eq!(explicit("a + b * c"), "(a + (b * c))");
        assert_eq!(explicit("a * b * c"), "((a * b) * c)");
        assert_eq!(explicit("a - b - c"), "(a - (b - c))");
        assert_eq!(explicit("(a - b) - c"), "((a - b) - c)");
    }

    #[test]
    fn shows_unary_and_postfix() {
        assert_eq!(explicit("not -x^ == y"), "((not (-(x^))) == y)");
        assert_eq!(explicit("ref p.q[1]"), "((ref p).(q[1]))");
    }

    #[test]
    fn shows_bindings_and_casts() {
        assert_eq!(explicit("x = let y: ^^u8[2] = f(1)"), "(x = (let y: ^^u8[2] = f(1)))");
        assert_eq!(explicit("n as fun(i32): bool"), "(n as fun(i32): bool)");
    }
}
