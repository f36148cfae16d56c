// Unit tests for tokenization and stopword handling.
//
// Tests the normalizer's punctuation policy (replace, never delete), Unicode
// coverage, and the stopword set constructors.

use std::io::Write;

use jokestats::text::stopwords::StopWords;
use jokestats::text::tokenizer::{is_alphabetic_term, normalize, tokenize};

// ============================================================
// tokenize — punctuation and casing
// ============================================================

#[test]
fn contraction_becomes_two_tokens() {
    assert_eq!(
        tokenize("Wouldn't you know it!"),
        vec!["wouldn", "t", "you", "know", "it"]
    );
}

#[test]
fn hyphen_splits_words() {
    assert_eq!(tokenize("knock-knock"), vec!["knock", "knock"]);
}

#[test]
fn unicode_punctuation_is_replaced() {
    // curly quotes, em dash, inverted question mark, ellipsis character
    assert_eq!(
        tokenize("“Hola” — ¿qué pasa…"),
        vec!["hola", "qué", "pasa"]
    );
}

#[test]
fn punctuation_between_words_never_merges_them() {
    assert_eq!(tokenize("end.Start"), vec!["end", "start"]);
}

#[test]
fn empty_and_punctuation_only_text() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("?!... --").is_empty());
}

#[test]
fn newlines_and_tabs_are_whitespace() {
    assert_eq!(tokenize("Q:\tWhy?\nA: Because."), vec!["q", "why", "a", "because"]);
}

#[test]
fn normalize_does_not_trim() {
    assert_eq!(normalize("Hi!"), "hi ");
}

// ============================================================
// is_alphabetic_term
// ============================================================

#[test]
fn alphabetic_terms() {
    assert!(is_alphabetic_term("chicken"));
    assert!(is_alphabetic_term("naïve"));
    assert!(!is_alphabetic_term("2nd"));
    assert!(!is_alphabetic_term("$5"));
    assert!(!is_alphabetic_term(""));
}

#[test]
fn letter_like_symbols_and_numerals_are_not_alphabetic() {
    // circled letters (So), enclosed letters (So), Roman numerals (Nl)
    assert!(!is_alphabetic_term("ⓐⓑ"));
    assert!(!is_alphabetic_term("🅰"));
    assert!(!is_alphabetic_term("ⅻ"));
    // modifier and other letters (Lm, Lo) still count
    assert!(is_alphabetic_term("ʰ"));
    assert!(is_alphabetic_term("日本"));
}

// ============================================================
// StopWords
// ============================================================

#[test]
fn stopwords_from_words_contains_lowercased() {
    let sw = StopWords::from_words(["Wouldn", "T"]);
    assert!(sw.contains("wouldn"));
    assert!(sw.contains("t"));
    assert!(!sw.contains("dog"));
}

#[test]
fn stopwords_from_file_skips_comments_and_blanks() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# custom list").unwrap();
    writeln!(file, "the").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "  And  ").unwrap();

    let sw = StopWords::from_file(file.path()).unwrap();
    assert_eq!(sw.len(), 2);
    assert!(sw.contains("the"));
    assert!(sw.contains("and"));
}

#[test]
fn stopwords_from_missing_file_fails() {
    assert!(StopWords::from_file(std::path::Path::new("/nonexistent/stopwords.txt")).is_err());
}

#[test]
fn english_list_is_not_empty() {
    let sw = StopWords::english();
    assert!(!sw.is_empty());
    assert!(sw.contains("the"));
}
