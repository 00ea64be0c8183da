// SPDX-License-Identifier: (MIT OR Apache-2.0)

use sea_ast::expr::*;
use sea_ast::item::*;
use sea_ast::stmt::*;
use sea_ast::SourceFile;

use crate::comment::CommentList;
use crate::config::FormatConfig;
use crate::explicit;

pub struct Printer<'a> {
    output: String,
    indent: usize,
    comments: CommentList,
    config: &'a FormatConfig,
}

impl<'a> Printer<'a> {
    pub fn new(comments: CommentList, config: &'a FormatConfig) -> Self {
        Self {
            output: String::new(),
            indent: 0,
            comments,
            config,
        }
    }

    pub fn finish(mut self) -> String {
        // Emit any remaining comments
        let rest = self.comments.take_rest();
        if !rest.is_empty() && !self.output.is_empty() {
            self.emit_blank_line();
        }
        for c in rest {
            self.output.push_str(&c.text);
            self.output.push('\n');
        }
        if !self.output.is_empty() && !self.output.ends_with('\n') {
            self.output.push('\n');
        }
        self.output
    }

    // --- Helpers ---

    fn emit(&mut self, s: &str) {
        self.output.push_str(s);
    }

    fn emit_newline(&mut self) {
        self.output.push('\n');
    }

    fn emit_indent(&mut self) {
        let spaces = self.indent * self.config.indent_width;
        for _ in 0..spaces {
            self.output.push(' ');
        }
    }

    fn emit_blank_line(&mut self) {
        if self.output.ends_with("\n\n") {
            return;
        }
        if !self.output.ends_with('\n') {
            self.output.push('\n');
        }
        self.output.push('\n');
    }

    /// Current column, in bytes from the start of the line.
    fn column(&self) -> usize {
        self.output.len() - self.output.rfind('\n').map_or(0, |i| i + 1)
    }

    /// Emit comments that start before `pos`, each on its own line at the
    /// current indentation. Must be called at the start of a line.
    fn emit_comments_before(&mut self, pos: usize) -> usize {
        let comments = self.comments.take_before(pos);
        for c in &comments {
            self.emit_indent();
            self.emit(&c.text);
            self.emit_newline();
        }
        comments.len()
    }

    fn has_comment_before(&self, pos: usize) -> bool {
        self.comments.peek_next().map_or(false, |c| c.span.start < pos)
    }

    /// Single-line rendering of `expr`, used to measure before wrapping.
    fn flat(&self, expr: &Expr) -> String {
        let config = FormatConfig { max_line_width: usize::MAX, ..*self.config };
        let mut p = Printer::new(CommentList::default(), &config);
        p.format_expr(expr);
        p.output
    }

    // --- File ---

    pub fn format_file(&mut self, file: &SourceFile) {
        let mut prev: Option<&ItemKind> = None;

        for item in &file.items {
            if let Some(prev) = prev {
                // Imports stay together and a hashtag sits right above its item
                let tight = matches!((prev, &item.kind), (ItemKind::Use(_), ItemKind::Use(_)))
                    || matches!(prev, ItemKind::Hashtag(_));
                if !tight {
                    self.emit_blank_line();
                }
            }

            self.emit_comments_before(item.span.start);
            self.format_item(item);
            self.emit_newline();

            prev = Some(&item.kind);
        }
    }

    // --- Items ---

    fn format_item(&mut self, item: &Item) {
        match &item.kind {
            ItemKind::Use(u) => {
                self.emit("use ");
                self.emit(&u.path.join("/"));
                if let Some(imports) = &u.imports {
                    self.emit(" [");
                    self.emit(&imports.join(" "));
                    self.emit("]");
                }
            }
            ItemKind::Fun(f) => {
                self.emit("fun ");
                self.emit(&f.name);
                self.format_definitions(&f.params);
                if let Some(ty) = &f.ret_ty {
                    self.emit(": ");
                    self.emit(&explicit::ty(ty));
                }
                self.emit(" ");
                self.format_block(&f.body);
            }
            ItemKind::Rec(r) => {
                self.emit("rec ");
                self.emit(&r.name);
                self.format_definitions(&r.fields);
            }
            ItemKind::Def(d) => {
                self.emit("def ");
                self.emit(&d.name);
                self.emit(" = ");
                self.emit(&explicit::ty(&d.ty));
            }
            ItemKind::Tag(t) => {
                self.emit("tag ");
                self.emit(&t.name);
                self.emit("(");
                self.emit(&t.variants.join(", "));
                self.emit(")");
            }
            ItemKind::TagRec(t) => {
                self.emit("tag rec ");
                self.emit(&t.name);
                self.emit("(");
                for (i, variant) in t.variants.iter().enumerate() {
                    if i > 0 {
                        self.emit(", ");
                    }
                    self.emit(&variant.name);
                    if let Some(payload) = &variant.payload {
                        self.format_definitions(payload);
                    }
                }
                self.emit(")");
            }
            ItemKind::Pragma(p) => {
                self.emit("pragma ");
                self.emit(&p.name);
                self.format_list(&p.args, "(", ")");
            }
            ItemKind::Raw(content) => self.format_raw(content),
            ItemKind::Hashtag(h) => {
                self.emit("#");
                if h.grouped {
                    self.emit("(");
                    self.emit(&h.names.join(", "));
                    self.emit(")");
                } else {
                    self.emit(&h.names.join(""));
                }
            }
        }
    }

    fn format_definitions(&mut self, list: &DefinitionList) {
        self.emit("(");
        for (i, def) in list.entries.iter().enumerate() {
            if i > 0 {
                self.emit(", ");
            }
            self.emit(&def.name);
            self.emit(": ");
            self.emit(&explicit::ty(&def.ty));
        }
        self.emit(")");
    }

    fn format_raw(&mut self, content: &str) {
        self.emit("raw [");
        self.emit(content);
        self.emit("]");
    }

    // --- Statements ---

    fn format_block(&mut self, block: &Block) {
        match &block.kind {
            BlockKind::Arrow(stmt) => {
                self.emit("-> ");
                self.format_stmt(stmt);
            }
            BlockKind::Braced(stmts) if stmts.is_empty() && !self.has_comment_before(block.span.end) => {
                self.emit("{}");
            }
            BlockKind::Braced(stmts) => {
                self.emit("{");
                self.emit_newline();
                self.indent += 1;
                self.format_stmts(stmts);
                // Comments after the last statement stay inside the block
                self.emit_comments_before(block.span.end);
                self.indent -= 1;
                self.emit_indent();
                self.emit("}");
            }
        }
    }

    fn format_stmts(&mut self, stmts: &[Stmt]) {
        for stmt in stmts {
            self.emit_comments_before(stmt.span.start);
            self.emit_indent();
            self.format_stmt(stmt);
            self.emit_newline();
        }
    }

    fn format_stmt(&mut self, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::Ret(value) => {
                self.emit("ret ");
                self.format_expr(value);
            }
            StmtKind::If(i) => self.format_if(i),
            StmtKind::Switch { scrutinee, cases } => {
                self.emit("switch ");
                self.format_expr(scrutinee);
                if cases.is_empty() {
                    self.emit(" {}");
                    return;
                }
                self.emit(" {");
                self.emit_newline();
                self.indent += 1;
                for case in cases {
                    self.emit_comments_before(case.span.start);
                    self.emit_indent();
                    if case.fallthrough {
                        self.emit("fall ");
                    }
                    self.emit("case ");
                    self.format_expr(&case.pattern);
                    self.emit(" ");
                    self.format_block(&case.body);
                    self.emit_newline();
                }
                self.indent -= 1;
                self.emit_indent();
                self.emit("}");
            }
            StmtKind::For(f) => {
                self.emit("for ");
                match &f.kind {
                    ForKind::Range { binding, from, to } => {
                        self.emit(binding);
                        self.emit(" in ");
                        self.format_expr(from);
                        self.emit(" to ");
                        self.format_expr(to);
                    }
                    ForKind::CStyle { init, cond, step } => {
                        self.format_expr(init);
                        self.emit("; ");
                        self.format_expr(cond);
                        self.emit("; ");
                        self.format_expr(step);
                    }
                    ForKind::Cond(cond) => self.format_expr(cond),
                }
                self.emit(" ");
                self.format_block(&f.body);
            }
            StmtKind::Expr(expr) => self.format_expr(expr),
            StmtKind::Raw(content) => self.format_raw(content),
        }
    }

    fn format_if(&mut self, stmt: &IfStmt) {
        self.emit("if ");
        self.format_expr(&stmt.cond);
        self.emit(" ");
        self.format_block(&stmt.then_block);

        match &stmt.else_branch {
            Some(ElseBranch::If(nested)) => {
                self.emit(" else ");
                self.format_if(nested);
            }
            Some(ElseBranch::Block(block)) => {
                self.emit(" else ");
                self.format_block(block);
            }
            None => {}
        }
    }

    // --- Expressions ---

    /// Print an expression as parsed. Grouping comes only from `Group`
    /// nodes, so a parsed tree prints back to the same token sequence.
    fn format_expr(&mut self, expr: &Expr) {
        match &expr.kind {
            ExprKind::Group(inner) => {
                self.emit("(");
                self.format_expr(inner);
                self.emit(")");
            }
            ExprKind::Number(n) => self.emit(n),
            ExprKind::String(s) => {
                self.emit("\"");
                self.emit(s);
                self.emit("\"");
            }
            ExprKind::CString(s) => {
                self.emit("c\"");
                self.emit(s);
                self.emit("\"");
            }
            ExprKind::Char(c) => {
                self.emit("`");
                self.emit(c);
                self.emit("`");
            }
            ExprKind::Bool(b) => self.emit(if *b { "true" } else { "false" }),
            ExprKind::Ident(name) => self.emit(name),
            ExprKind::New { name, args } => {
                self.emit("new ");
                self.emit(name);
                self.format_list(args, "(", ")");
            }
            ExprKind::Invoke { name, args } => {
                self.emit(name);
                self.format_list(args, "(", ")");
            }
            ExprKind::List(items) => self.format_list(items, "[", "]"),
            ExprKind::VarBind(b) => self.format_binding("var", b),
            ExprKind::LetBind(b) => self.format_binding("let", b),
            ExprKind::Unary { op, operand } if op.is_postfix() => {
                self.format_expr(operand);
                self.emit(op.symbol());
            }
            ExprKind::Unary { op, operand } => {
                self.emit(op.symbol());
                if matches!(op, UnaryOp::Not | UnaryOp::Ref) {
                    self.emit(" ");
                }
                self.format_expr(operand);
            }
            ExprKind::Binary { op, left, right } => {
                self.format_expr(left);
                self.emit(" ");
                self.emit(op.symbol());
                self.emit(" ");
                self.format_expr(right);
            }
            ExprKind::Index { object, index } => {
                self.format_expr(object);
                self.emit("[");
                self.format_expr(index);
                self.emit("]");
            }
            ExprKind::Member { object, member } => {
                // `1 .5` and `-1 .5` must not lex as a decimal
                let ends_in_digit = self.flat(object).ends_with(|c: char| c.is_ascii_digit());
                self.format_expr(object);
                if ends_in_digit {
                    self.emit(" ");
                }
                self.emit(".");
                self.format_expr(member);
            }
            ExprKind::Cast { expr, ty } => {
                self.format_expr(expr);
                self.emit(" as ");
                self.emit(&explicit::ty(ty));
            }
        }
    }

    fn format_binding(&mut self, word: &str, b: &Binding) {
        self.emit(word);
        self.emit(" ");
        self.emit(&b.name);
        if let Some(ty) = &b.ty {
            self.emit(": ");
            self.emit(&explicit::ty(ty));
        }
        self.emit(" = ");
        self.format_expr(&b.init);
    }

    /// Comma-separated list between `open` and `close`. Wraps one entry per
    /// line when the flat form would pass `max_line_width`.
    fn format_list(&mut self, exprs: &[Expr], open: &str, close: &str) {
        let flat: Vec<String> = exprs.iter().map(|e| self.flat(e)).collect();
        let width = open.len()
            + close.len()
            + flat.iter().map(String::len).sum::<usize>()
            + 2 * flat.len().saturating_sub(1);

        if exprs.len() < 2 || self.column().saturating_add(width) <= self.config.max_line_width {
            self.emit(open);
            self.emit(&flat.join(", "));
            self.emit(close);
            return;
        }

        self.emit(open);
        self.emit_newline();
        self.indent += 1;
        for (i, expr) in exprs.iter().enumerate() {
            self.emit_indent();
            self.format_expr(expr);
            if i + 1 < exprs.len() {
                self.emit(",");
            }
            self.emit_newline();
        }
        self.indent -= 1;
        self.emit_indent();
        self.emit(close);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{format_source, format_source_with_config, FormatConfig};

    fn fmt(src: &str) -> String {
        match format_source(src) {
            Ok(out) => out,
            Err(e) => panic!("format failed: {e}"),
        }
    }

    #[test]
    fn canonical_layout() {
        let src = "use std/io [print]\nuse core\nfun main ( argc : i32 , argv : ^^u8 ) : i32 {\nvar x = 1 ret x+2*3 }\nrec P(x: i32)";
        let expected = "\
use std/io [print]
use core

fun main(argc: i32, argv: ^^u8): i32 {
    var x = 1
    ret x + 2 * 3
}

rec P(x: i32)
";
        assert_eq!(fmt(src), expected);
    }

    #[test]
    fn control_flow() {
        let src = "fun f() { if a -> ret 1 else if b { ret 2 } else { for i in 0 to n { g(i) } } switch x { case 1 {} fall case 2 -> y } }";
        let expected = "\
fun f() {
    if a -> ret 1 else if b {
        ret 2
    } else {
        for i in 0 to n {
            g(i)
        }
    }
    switch x {
        case 1 {}
        fall case 2 -> y
    }
}
";
        assert_eq!(fmt(src), expected);
    }

    #[test]
    fn hashtag_sits_on_item() {
        let src = "#inline fun f() -> ret 1 tag C(A B) tag rec S(A(x: i32) B) #(a,b) pragma p()";
        let expected = "\
#inline
fun f() -> ret 1

tag C(A, B)

tag rec S(A(x: i32), B)

#(a, b)
pragma p()
";
        assert_eq!(fmt(src), expected);
    }

    #[test]
    fn comments_are_kept() {
        let src = "// header\nfun f() {\n  // before ret\n  ret 1 // trailing\n}\n// footer\n";
        let expected = "\
// header
fun f() {
    // before ret
    ret 1
    // trailing
}

// footer
";
        assert_eq!(fmt(src), expected);
    }

    #[test]
    fn long_argument_lists_wrap() {
        let config = FormatConfig { indent_width: 2, max_line_width: 20 };
        let out = format_source_with_config("fun f() -> call(alpha, beta, [gamma, delta])", &config)
            .unwrap_or_default();
        let expected = "\
fun f() -> call(
  alpha,
  beta,
  [gamma, delta]
)
";
        assert_eq!(out, expected);
    }

    #[test]
    fn groups_and_operators_survive() {
        assert_eq!(fmt("fun f() -> x = -(a - b)^ as ^T . y"), "fun f() -> x = -(a - b)^ as ^T.y\n");
        assert_eq!(fmt("fun f() -> not ref a"), "fun f() -> not ref a\n");
    }

    #[test]
    fn member_after_trailing_digit_keeps_its_space() {
        assert_eq!(fmt("fun f() -> x = 1 . 5"), "fun f() -> x = 1 .5\n");
        assert_eq!(fmt("fun f() -> x = -1 . 5"), "fun f() -> x = -1 .5\n");
        assert_eq!(fmt("fun f() -> x = not 1 . 5"), "fun f() -> x = not 1 .5\n");
        assert_eq!(fmt("fun f() -> x = -a . 5"), "fun f() -> x = -a.5\n");
    }

    #[test]
    fn raw_is_verbatim() {
        assert_eq!(fmt("raw [ int  x[2]; ]"), "raw [ int  x[2]; ]\n");
    }

    #[test]
    fn empty_file() {
        assert_eq!(fmt(""), "");
        assert_eq!(fmt("// only\n"), "// only\n");
    }
}
