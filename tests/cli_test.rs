// Copyright (c) 2025 tst_words Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the `tst_words` binary.
//! Runs the built executable against a temporary word list and checks the
//! printed result and the exit status of each command.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

fn word_list() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "car\ncart\n\n").unwrap();
    file
}

fn tst_words(words: &Path, args: &[&str], exact_default: Option<&str>) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_tst_words"));
    command
        .arg("--words")
        .arg(words)
        .args(args)
        .env_remove("TST__SEARCH__EXACT")
        .env("RUST_LOG", "error");
    if let Some(value) = exact_default {
        command.env("TST__SEARCH__EXACT", value);
    }
    command.output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

#[test]
fn test_search_hit_exits_zero() {
    let file = word_list();
    let output = tst_words(file.path(), &["search", "cart", "--exact"], None);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "true");
}

#[test]
fn test_search_miss_exits_one() {
    let file = word_list();
    let output = tst_words(file.path(), &["search", "dog"], None);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "false");
}

#[test]
fn test_search_defaults_to_prefix_match() {
    let file = word_list();
    let output = tst_words(file.path(), &["search", "ca"], None);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "true");
}

#[test]
fn test_configured_exact_default() {
    let file = word_list();
    let output = tst_words(file.path(), &["search", "ca"], Some("true"));

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "false");
}

#[test]
fn test_prefix_flag_overrides_configured_exact() {
    let file = word_list();
    let output = tst_words(file.path(), &["search", "ca", "--prefix"], Some("true"));

    assert!(output.status.success());
    assert_eq!(stdout(&output), "true");
}

#[test]
fn test_search_completions() {
    let file = word_list();
    let output = tst_words(file.path(), &["search", "car", "--completions"], None);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "car\ncart");
}

#[test]
fn test_verify_passes_on_loaded_list() {
    let file = word_list();
    let output = tst_words(file.path(), &["verify"], None);

    assert!(output.status.success());
    // "", "car", "cart"; prefixes "c" and "ca"
    assert_eq!(stdout(&output), "ok: 3 words, 2 prefixes");
}

#[test]
fn test_list_json() {
    let file = word_list();
    let output = tst_words(file.path(), &["list", "--json"], None);

    assert!(output.status.success());
    let words: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(words, vec!["", "car", "cart"]);
}

#[test]
fn test_missing_word_list_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = tst_words(&dir.path().join("absent.txt"), &["load"], None);

    assert_eq!(output.status.code(), Some(1));
}
