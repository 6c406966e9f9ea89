use similar_asserts::assert_eq;

/// Converts `input` and compares the fragment byte for byte.
pub fn assert_html(input: &str, expected: &str) {
    assert_eq!(crate::convert(input), expected, "input:\n{input}");
}
