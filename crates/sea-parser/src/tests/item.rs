// SPDX-License-Identifier: (MIT OR Apache-2.0)

use std::collections::HashSet;

use super::*;

#[test]
fn use_with_path_and_imports() {
    let items = items("use std/io [print, read]\nuse core\nuse a/b []");

    let ItemKind::Use(first) = &items[0].kind else {
        panic!("Expected use");
    };
    assert_eq!(first.path, vec!["std", "io"]);
    assert_eq!(first.imports, Some(vec!["print".to_string(), "read".to_string()]));

    let ItemKind::Use(second) = &items[1].kind else {
        panic!("Expected use");
    };
    assert_eq!(second.path, vec!["core"]);
    assert!(second.imports.is_none());

    let ItemKind::Use(third) = &items[2].kind else {
        panic!("Expected use");
    };
    assert_eq!(third.imports, Some(Vec::new()));
}

#[test]
fn use_imports_without_commas() {
    let items = items("use std/io [print read]");
    let ItemKind::Use(u) = &items[0].kind else {
        panic!("Expected use");
    };
    assert_eq!(u.imports.as_deref(), Some(&["print".to_string(), "read".to_string()][..]));
}

#[test]
fn fun_signature() {
    let items = items("fun copy(dst: ^u8, src: ^^u8, n: usize[4][]): fun(i32): ^T { ret dst }");
    let f = fun(&items[0]);
    assert_eq!(f.name, "copy");
    assert_eq!(f.params.names().collect::<Vec<_>>(), vec!["dst", "src", "n"]);

    let types: Vec<_> = f.params.entries.iter().map(|d| show_type(&d.ty)).collect();
    assert_eq!(types, vec!["^u8", "^^u8", "usize[4][]"]);
    assert_eq!(f.ret_ty.as_ref().map(show_type).as_deref(), Some("fun(i32): ^T"));
}

#[test]
fn fun_without_params_or_return_type() {
    let items = items("fun main() {}");
    let f = fun(&items[0]);
    assert!(f.params.is_empty());
    assert!(f.ret_ty.is_none());
    assert!(f.body.stmts().is_empty());
}

#[test]
fn rec_and_def() {
    let items = items("rec Point(x: i32, y: i32)\ndef Callback = ^fun(^Point)");

    let ItemKind::Rec(rec) = &items[0].kind else {
        panic!("Expected rec");
    };
    assert_eq!(rec.name, "Point");
    assert_eq!(rec.fields.len(), 2);

    let ItemKind::Def(def) = &items[1].kind else {
        panic!("Expected def");
    };
    assert_eq!(def.name, "Callback");
    assert_eq!(show_type(&def.ty), "^fun(^Point)");
}

#[test]
fn tag_commas_are_optional() {
    let items = items("tag Color (Red, Green Blue,)");
    let ItemKind::Tag(tag) = &items[0].kind else {
        panic!("Expected tag");
    };
    assert_eq!(tag.name, "Color");
    assert_eq!(tag.variants, vec!["Red", "Green", "Blue"]);
}

#[test]
fn tag_rec_payloads() {
    let items = items("tag rec Shape (Circle (r: f32) Square(side: f32), Empty)");
    let ItemKind::TagRec(tag) = &items[0].kind else {
        panic!("Expected tag rec");
    };
    assert_eq!(tag.name, "Shape");
    let names: Vec<_> = tag.variants.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["Circle", "Square", "Empty"]);
    assert_eq!(tag.variants[0].payload.as_ref().map(|p| p.len()), Some(1));
    assert!(tag.variants[2].payload.is_none());
}

#[test]
fn pragma_arguments() {
    let items = items("pragma link(\"m\", 1 + 2)\npragma noop()");
    let ItemKind::Pragma(p) = &items[0].kind else {
        panic!("Expected pragma");
    };
    assert_eq!(p.name, "link");
    assert_eq!(list(&p.args), "\"m\", (1 + 2)");

    let ItemKind::Pragma(p) = &items[1].kind else {
        panic!("Expected pragma");
    };
    assert!(p.args.is_empty());
}

#[test]
fn hashtags() {
    let items = items("#inline\n#(hot, cold)\nfun f() {}");
    let ItemKind::Hashtag(single) = &items[0].kind else {
        panic!("Expected hashtag");
    };
    assert_eq!(single.names, vec!["inline"]);
    assert!(!single.grouped);

    let ItemKind::Hashtag(group) = &items[1].kind else {
        panic!("Expected hashtag");
    };
    assert_eq!(group.names, vec!["hot", "cold"]);
    assert!(group.grouped);
    assert!(matches!(items[2].kind, ItemKind::Fun(_)));
}

#[test]
fn top_level_raw() {
    let items = items("raw [#include <stdio.h>\nint x[4];]");
    let ItemKind::Raw(content) = &items[0].kind else {
        panic!("Expected raw item");
    };
    assert_eq!(content, "#include <stdio.h>\nint x[4];");
}

#[test]
fn item_spans_and_ids() {
    let src = "use a\nfun f() -> ret 1";
    let result = parse(src);
    let items = &result.file.items;
    assert_eq!(items[0].span, sea_ast::Span::new(0, 5));
    assert_eq!(items[1].span, sea_ast::Span::new(6, src.len()));
    assert_eq!(result.file.span.end, src.len());

    let mut seen = HashSet::new();
    for item in items {
        assert!(seen.insert(item.id), "duplicate id {:?}", item.id);
    }
}

#[test]
fn empty_source() {
    let result = parse("// nothing here\n");
    assert!(result.file.items.is_empty());
}
