//! End-to-end conversions through the binary

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;

#[test]
fn test_convert_creates_destination() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("in.paml");
    let destination = dir.path().join("out.html");
    fs::write(&source, "# Header 1\n").unwrap();

    cargo_bin_cmd!("paml2html")
        .arg(&source)
        .arg(&destination)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&destination).unwrap(),
        "<h1>Header 1</h1>"
    );
}

#[test]
fn test_convert_appends_to_existing_destination() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("in.paml");
    let destination = dir.path().join("out.html");
    fs::write(&source, "# Header 1\n").unwrap();
    fs::write(&destination, "<p>existing</p>").unwrap();

    cargo_bin_cmd!("paml2html")
        .arg(&source)
        .arg(&destination)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&destination).unwrap(),
        "<p>existing</p><h1>Header 1</h1>"
    );
}

#[test]
fn test_indent_flag_pretty_prints() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("in.paml");
    let destination = dir.path().join("out.html");
    fs::write(&source, "- a\n- b\n").unwrap();

    cargo_bin_cmd!("paml2html")
        .arg(&source)
        .arg(&destination)
        .args(["--indent", "2"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&destination).unwrap(),
        "<ul>\n  <li>a</li>\n  <li>b</li>\n</ul>"
    );
}

#[test]
fn test_empty_source_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("in.paml");
    let destination = dir.path().join("out.html");
    fs::write(&source, "").unwrap();

    cargo_bin_cmd!("paml2html")
        .arg(&source)
        .arg(&destination)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&destination).unwrap(), "");
}
