use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::PathBuf;
use std::process::Command;

fn workspace_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir.parent().unwrap().parent().unwrap().to_path_buf()
}

fn ibe() -> Command {
    let mut cmd = Command::cargo_bin("ibe").unwrap();
    cmd.env_remove("IBE_STRICT").env_remove("RUST_LOG");
    cmd
}

fn demo(name: &str) -> PathBuf {
    workspace_root().join("demos").join(name)
}

#[test]
fn accepts_basic_demo() {
    ibe()
        .arg(demo("basic.ibe"))
        .assert()
        .success()
        .stdout(predicate::str::contains("basic.ibe").and(predicate::str::contains("ok")));
}

#[test]
fn accepts_arithmetic_demo() {
    ibe().arg(demo("arithmetic.ibe")).assert().success();
}

#[test]
fn reports_unclosed_declarations() {
    ibe()
        .arg(demo("missing_semicolon.ibe"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Syntax error"))
        .stderr(predicate::str::contains("Expected ';', found keyword 'Begin'"))
        .stderr(predicate::str::contains("line 2, column 1"));
}

#[test]
fn reports_unbalanced_parentheses() {
    ibe()
        .arg(demo("unbalanced.ibe"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Expected ')', found delimiter ';'"))
        .stderr(predicate::str::contains("line 3, column 16"));
}

#[test]
fn lex_error_is_nonzero() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let bad_path = tmp_dir.path().join("bad.ibe");
    std::fs::write(&bad_path, "Integer x;\nBegin x = 1; End\n").unwrap();

    ibe()
        .arg(bad_path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Lex error"))
        .stderr(predicate::str::contains("Unexpected character '='"));
}

#[test]
fn trailing_tokens_only_fail_in_strict_mode() {
    ibe().arg(demo("trailing.ibe")).assert().success();

    ibe()
        .arg("--strict")
        .arg(demo("trailing.ibe"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Expected end of input, found identifier 'a'"));

    ibe()
        .env("IBE_STRICT", "1")
        .arg(demo("trailing.ibe"))
        .assert()
        .code(1);
}

#[test]
fn validates_json_token_file() {
    ibe()
        .arg("--tokens")
        .arg(demo("basic.tokens.json"))
        .assert()
        .success();
}

#[test]
fn json_output_describes_violation() {
    let output = ibe()
        .arg("--json")
        .arg(demo("unbalanced.ibe"))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["status"], "rejected");
    assert_eq!(doc["expected"], "')'");
    assert_eq!(doc["found"]["kind"], "Delim");
    assert_eq!(doc["found"]["text"], ";");
    assert_eq!(doc["found"]["line"], 3);
}

#[test]
fn json_output_for_accepted_file() {
    let output = ibe()
        .arg("--json")
        .arg(demo("basic.ibe"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["status"], "accepted");
}

#[test]
fn malformed_token_file_is_usage_error() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = tmp_dir.path().join("tokens.json");
    std::fs::write(&path, r#"[{"kind": "Bogus", "text": "x"}]"#).unwrap();

    ibe()
        .arg("--tokens")
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid token file"));
}

#[test]
fn missing_file_is_usage_error() {
    ibe()
        .arg(workspace_root().join("demos/does-not-exist.ibe"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn json_output_for_lex_error() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let bad_path = tmp_dir.path().join("bad.ibe");
    std::fs::write(&bad_path, "Integer x;\nBegin x = 1; End\n").unwrap();

    let output = ibe().arg("--json").arg(&bad_path).output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["status"], "lex-error");
    assert_eq!(doc["message"], "Unexpected character '='");
    assert_eq!(doc["line"], 2);
    assert_eq!(doc["col"], 9);
}
