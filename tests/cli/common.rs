//! Cross-cutting CLI tests (help, version, error handling)

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help() {
    cargo_bin_cmd!("paml2html")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("paml2html converts PAML"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("paml2html")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_arguments_shows_usage() {
    cargo_bin_cmd!("paml2html")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_missing_destination_argument() {
    cargo_bin_cmd!("paml2html")
        .arg("only_source.paml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DESTINATION_FILE"));
}

#[test]
fn test_missing_source_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    cargo_bin_cmd!("paml2html")
        .arg(dir.path().join("missing.paml"))
        .arg(dir.path().join("out.html"))
        .assert()
        .failure();
}

#[test]
fn test_invalid_indent_value() {
    let dir = tempfile::tempdir().unwrap();
    cargo_bin_cmd!("paml2html")
        .arg(dir.path().join("in.paml"))
        .arg(dir.path().join("out.html"))
        .args(["--indent", "two"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
