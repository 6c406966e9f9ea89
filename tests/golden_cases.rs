//! Golden test cases for the converter.
//!
//! Each test case is a directory under `tests/cases/` containing:
//! - `input.paml` - source document
//! - `expected.html` - expected HTML fragment
//!
//! Run with `UPDATE_EXPECTED=1 cargo test` to regenerate expected outputs.

use std::fs;
use std::path::Path;

fn run_golden_case(case_name: &str) {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("cases")
        .join(case_name);

    let input = fs::read_to_string(dir.join("input.paml")).unwrap();
    let output = paml2html::convert(&input);

    let expected_path = dir.join("expected.html");
    if std::env::var_os("UPDATE_EXPECTED").is_some() {
        fs::write(&expected_path, &output).unwrap();
        return;
    }

    let expected = fs::read_to_string(&expected_path).unwrap();
    similar_asserts::assert_eq!(
        expected,
        output,
        "golden case {} did not match expected output",
        case_name
    );
}

#[test]
fn golden_empty() {
    run_golden_case("empty");
}

#[test]
fn golden_mixed_document() {
    run_golden_case("mixed_document");
}

#[test]
fn golden_code_and_raw() {
    run_golden_case("code_and_raw");
}
