//! File-based tests for the word list reader and verifier.

use proptest::prelude::*;

use crate::config::{TrimMode, WordsConfig};
use crate::data_structures::TernarySearchTree;
use crate::tests::{word_list_strategy, TestFixture};
use crate::wordlist::{verify_membership, LoadSummary, WordListError, WordListReader};

/// Test loading a word list file into a tree.
#[test]
fn test_load_path_into_tree() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .write_word_list("insert_words.txt", &["bat", "bath", "bats", "ball", "bat"])
        .unwrap();

    let mut tree = TernarySearchTree::new();
    let summary = WordListReader::default()
        .load_path_into(&path, &mut tree)
        .unwrap();

    assert_eq!(
        summary,
        LoadSummary {
            words: 5,
            inserted: 4,
            duplicates: 1
        }
    );
    assert_eq!(tree.all_strings(), vec!["ball", "bat", "bath", "bats"]);
}

/// Test that the configured path is used.
#[test]
fn test_read_configured_path() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .write_file("words.txt", "  Alpha  \r\nbeta\n\n")
        .unwrap();

    let reader = WordListReader::new(WordsConfig {
        path: Some(path),
        trim: TrimMode::Both,
        skip_blank_lines: true,
        lowercase: true,
        max_word_length: None,
    });
    assert_eq!(reader.read_configured().unwrap(), vec!["alpha", "beta"]);
}

/// Test that a missing file reports its path.
#[test]
fn test_missing_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.temp_dir.path().join("absent.txt");

    match WordListReader::default().read_path(&path) {
        Err(WordListError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected an I/O error, got {other:?}"),
    }
}

/// Test the audit on a tree built from a file, the way the word list tool runs it.
#[test]
fn test_verify_loaded_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .write_word_list("insert_words.txt", &["car", "cart", "care", "dog", "do", ""])
        .unwrap();

    let reader = WordListReader::default();
    let words = reader.read_path(&path).unwrap();
    let mut tree = TernarySearchTree::new();
    WordListReader::insert_all(&mut tree, &words);

    let report = verify_membership(&tree, &words);
    assert!(report.is_ok(), "{:?}", report.failures);
    assert_eq!(report.words_checked, 6);
    // "c", "ca" and "d"
    assert_eq!(report.prefixes_checked, 3);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    // Property: any list written to disk loads into a tree that passes the audit
    #[test]
    fn prop_loaded_lists_verify(words in word_list_strategy()) {
        let fixture = TestFixture::new().unwrap();
        let path = fixture.write_word_list("words.txt", &words).unwrap();

        let reader = WordListReader::default();
        let loaded = reader.read_path(&path).unwrap();
        prop_assert_eq!(&loaded, &words);

        let mut tree = TernarySearchTree::new();
        WordListReader::insert_all(&mut tree, &loaded);
        let report = verify_membership(&tree, &loaded);
        prop_assert!(report.is_ok(), "{:?}", report.failures);
    }
}
