// Tokenizer — lowercase, punctuation-to-space, whitespace split.
//
// Punctuation is replaced with a space rather than deleted, so contractions
// split apart: "wouldn't" becomes "wouldn" and "t". Fragments like "wouldn"
// are on the English stopword list, which is why this matters for the
// category scorer downstream.

use std::sync::LazyLock;

use regex::Regex;

/// Any run of characters from the Unicode "Punctuation" general category
/// (Pc, Pd, Ps, Pe, Pi, Pf, Po).
static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{P}+").expect("punctuation pattern is valid"));

/// Letters only (Lu, Ll, Lt, Lm, Lo). Narrower than the Alphabetic property,
/// which also admits circled letters (So) and Roman numerals (Nl).
static LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{L}+$").expect("letter pattern is valid"));

/// Lowercase `text` and replace every run of punctuation with a single space.
///
/// The result is a derived view; callers keep the original text untouched.
pub fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();
    PUNCTUATION.replace_all(&lower, " ").into_owned()
}

/// Normalize `text` and split it on whitespace runs.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// True when `term` is non-empty and made only of Unicode letters.
///
/// Digits, symbols (`$`, `+`, emoji, `ⓐ`), letter-numbers (`ⅻ`) and mixed
/// tokens like "mp3" fail.
pub fn is_alphabetic_term(term: &str) -> bool {
    LETTERS.is_match(term)
}
