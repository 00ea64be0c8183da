// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Formatting must not change the tree: for every program P,
//! dump(parse(format(P))) == dump(parse(P)).

use pretty_assertions::assert_eq;
use sea_fmt::dump::dump_file;
use sea_fmt::{format_source, format_source_with_config, FormatConfig};
use sea_parser::parse_source;

const PROGRAMS: &[&str] = &[
    "",
    "use std/io [print read]\nuse core/mem\nuse a/b []",
    "fun main(argc: i32, argv: ^^u8): i32 { ret 0 }",
    "fun f() -> ret a + b * c - d - e",
    "fun f() { x = let y = 1 a.b.c = -x^ as ^u8[4] }",
    "fun f() { if a -> if b {1} else {2} }",
    "fun f() { if a { b } else if c -> d else { e } }",
    "fun f() { for i in 0 to 10 {} for var i = 0; i < n; i = i + 1 -> g(i) for running { step() } }",
    "fun f() { switch x { case 1 { a } fall case 2 -> b case 3 {} } }",
    "rec Point(x: i32, y: i32)\ndef Cb = ^fun(^Point i32): bool\ndef M = f32[4][4][]",
    "tag Color(Red Green, Blue)\ntag rec Shape(Circle(r: f32) Square(side: f32), Empty)",
    "pragma link(\"m\", c\"x\", `a`, 1_000.5, true)\n#inline\n#(hot, cold)\nfun g() {}",
    "raw [ #include <stdio.h> ]\nfun f() { raw [ asm [ nop ] ] ret 1 }",
    "fun f() { p = new Point(1, 2) xs = [1, [2, 3], []] ys[0][1] = not ref a and b or c }",
    "fun f() { ret (a + b) * (c - (d)) }",
    "fun f() { x = -1 . 5 y = not 1 . 5 z = ref 2 . 0 . 7 w = 1 . x }",
    "fun f() { v = a == b != c <= d > e >= f < g }",
    "fun f() { x = y as T[i] z = q as fun(i32): i32 }",
    "// leading\nfun f() { // inside\n ret 1 /* after */ }\n/* tail */",
    "fun f(): i32 -> ret in + to",
    "fun f() { big(alpha_alpha_alpha, beta_beta_beta_beta, gamma_gamma_gamma_gamma, [delta_delta_delta, epsilon_epsilon_epsilon]) }",
];

fn dump(src: &str) -> String {
    let result = parse_source(src);
    assert!(result.is_ok(), "Parse errors in {:?}: {:?}", src, result.errors);
    dump_file(&result.file)
}

fn format(src: &str) -> String {
    match format_source(src) {
        Ok(out) => out,
        Err(e) => panic!("format failed for {:?}: {}", src, e),
    }
}

#[test]
fn formatting_preserves_the_tree() {
    for src in PROGRAMS {
        let formatted = format(src);
        assert_eq!(dump(&formatted), dump(src), "source: {:?}\nformatted:\n{}", src, formatted);
    }
}

#[test]
fn formatting_is_idempotent() {
    for src in PROGRAMS {
        let once = format(src);
        assert_eq!(format(&once), once, "source: {:?}", src);
    }
}

#[test]
fn narrow_width_still_round_trips() {
    let config = FormatConfig { indent_width: 1, max_line_width: 10 };
    for src in PROGRAMS {
        let formatted = match format_source_with_config(src, &config) {
            Ok(out) => out,
            Err(e) => panic!("format failed for {:?}: {}", src, e),
        };
        assert_eq!(dump(&formatted), dump(src), "source: {:?}", src);
    }
}

#[test]
fn comments_survive_formatting() {
    let out = format("// leading\nfun f() { // inside\n ret 1 /* after */ }\n/* tail */");
    for text in ["// leading", "// inside", "/* after */", "/* tail */"] {
        assert!(out.contains(text), "missing {text} in:\n{out}");
    }
}

#[test]
fn syntax_errors_are_reported() {
    assert!(format_source("fun (").is_err());
    assert!(format_source("fun f() { ret \"open }").is_err());
    assert!(format_source("fun f() -> a ! b").is_err());
}
