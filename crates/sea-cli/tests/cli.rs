// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Integration tests for the `sea` binary. Each test runs the built
//! executable on a fixture and checks exit status and output.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

fn sea(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sea"))
        .arg("--no-color")
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run sea")
}

fn sea_on(command: &str, fixture_name: &str, extra: &[&str]) -> Output {
    let path = fixture(fixture_name);
    let path = path.to_str().expect("fixture path is not UTF-8");
    let mut args = vec![command, path];
    args.extend_from_slice(extra);
    sea(&args)
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn parse_valid_file_prints_tree() {
    let out = sea_on("parse", "valid.sea", &[]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let text = stdout(&out);
    assert!(text.contains("(use (std io) (imports print))"), "{text}");
    assert!(text.contains("(rec Point (defs (x i32) (y i32)))"), "{text}");
    assert!(text.contains("(fun main (defs) (ret i32)"), "{text}");
    assert!(text.contains("Parse OK"), "{text}");
}

#[test]
fn bare_file_argument_means_parse() {
    let path = fixture("valid.sea");
    let out = sea(&[path.to_str().unwrap()]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), stdout(&sea_on("parse", "valid.sea", &[])));
}

#[test]
fn parse_errors_are_reported_with_location() {
    let out = sea_on("parse", "broken.sea", &[]);
    assert_eq!(out.status.code(), Some(1));
    let err = stderr(&out);
    assert!(err.contains("error[E0100]: expected a name, found a number"), "{err}");
    assert!(err.contains("broken.sea:3:5"), "{err}");
    assert!(err.contains("= help: names can't start with a number"), "{err}");
    assert!(err.contains("Parse FAILED: 1 error"), "{err}");
}

#[test]
fn json_report_for_errors() {
    let out = sea_on("parse", "broken.sea", &["--format", "json"]);
    assert_eq!(out.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_str(&stdout(&out)).expect("invalid JSON");
    assert_eq!(report["success"], false);
    assert_eq!(report["phase"], "parse");
    assert_eq!(report["error_count"], 1);
    let location = &report["diagnostics"][0]["location"];
    assert_eq!(location["line"], 3);
    assert_eq!(location["column"], 5);
    assert_eq!(location["source_line"], "fun 1bad() { ret 2 }");
}

#[test]
fn json_tree_for_valid_file() {
    let out = sea_on("parse", "valid.sea", &["--format=json"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let tree: serde_json::Value = serde_json::from_str(&stdout(&out)).expect("invalid JSON");
    assert_eq!(tree["items"].as_array().map(Vec::len), Some(4));
}

#[test]
fn lex_prints_tokens_and_comments() {
    let out = sea_on("lex", "valid.sea", &[]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let text = stdout(&out);
    assert!(text.contains("Use"), "{text}");
    assert!(text.contains("Ident(\"Point\")"), "{text}");
    assert!(text.contains("Comment(\"// Sample program.\")"), "{text}");
    assert!(text.contains("Lex OK"), "{text}");
}

#[test]
fn unterminated_literal_is_fatal() {
    let out = sea_on("parse", "unterminated.sea", &[]);
    assert_eq!(out.status.code(), Some(1));
    let err = stderr(&out);
    assert!(err.contains("error[E0002]: unterminated string literal"), "{err}");
    assert!(err.contains("unterminated.sea:2:11"), "{err}");
    assert!(err.contains("= note: the rest of the file was not checked"), "{err}");
}

#[test]
fn stray_character_in_lex() {
    let out = sea_on("lex", "stray.sea", &[]);
    assert_eq!(out.status.code(), Some(1));
    let err = stderr(&out);
    assert!(err.contains("error[E0001]: unexpected character '!'"), "{err}");
    assert!(err.contains("Lex FAILED: 1 error"), "{err}");
}

#[test]
fn fmt_output_passes_check() {
    let out = sea_on("fmt", "valid.sea", &[]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let formatted = stdout(&out);
    assert!(formatted.contains("    var p = new Point(3, 4)\n"), "{formatted}");

    let tmp = std::env::temp_dir().join(format!("sea_fmt_check_{}.sea", std::process::id()));
    std::fs::write(&tmp, &formatted).expect("write temp file");
    let check = sea(&["fmt", tmp.to_str().unwrap(), "--check"]);
    let _ = std::fs::remove_file(&tmp);
    assert!(check.status.success(), "stdout: {}", stdout(&check));
}

#[test]
fn fmt_check_flags_unformatted_file() {
    let out = sea_on("fmt", "valid.sea", &["--check"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).contains("would reformat"));
}

#[test]
fn fmt_refuses_broken_file() {
    let out = sea_on("fmt", "broken.sea", &[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).contains("Format FAILED"));
}

#[test]
fn explain_known_and_unknown_codes() {
    let out = sea(&["explain", "E0100"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("error[E0100]: unexpected token"), "{text}");
    assert!(text.contains("Category: Syntax"), "{text}");

    let out = sea(&["explain", "e0002"]);
    assert!(stdout(&out).contains("unterminated literal"));

    let out = sea(&["explain", "E9999"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("E0101"));
}

#[test]
fn help_version_and_usage_errors() {
    assert!(stdout(&sea(&["help"])).contains("Usage"));
    assert!(stdout(&sea(&[])).contains("Usage"));
    assert_eq!(
        stdout(&sea(&["version"])).trim(),
        format!("sea {}", env!("CARGO_PKG_VERSION"))
    );

    assert_eq!(sea(&["frobnicate"]).status.code(), Some(2));
    assert_eq!(sea(&["parse"]).status.code(), Some(2));
    assert_eq!(sea(&["parse", "--format", "xml", "a.sea"]).status.code(), Some(2));
}

#[test]
fn missing_file() {
    let out = sea(&["parse", "does/not/exist.sea"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("reading"));
}
