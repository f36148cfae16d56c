// Stopword set — common words excluded from category term rankings.
//
// The default list comes from the `stop-words` crate. A custom list can be
// loaded from a plain text file (one word per line) when the built-in list
// is too aggressive or too lenient for a corpus.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use stop_words::{get, LANGUAGE};

/// A static, lowercased set of words to ignore when ranking terms.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// The built-in English stopword list.
    pub fn english() -> Self {
        let words: Vec<String> = get(LANGUAGE::English);
        Self::from_words(words)
    }

    /// Build a stopword set from arbitrary words. Words are lowercased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Load a stopword list from a file with one word per line.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read stopword list {}", path.display()))?;
        Ok(Self::from_words(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        ))
    }

    pub fn contains(&self, term: &str) -> bool {
        self.words.contains(term)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
