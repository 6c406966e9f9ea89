//! CLI integration tests for paml2html.
//!
//! These tests execute the compiled binary and verify argument handling,
//! exit codes, and file I/O.

mod common;
mod convert;
