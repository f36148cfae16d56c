// Document — one joke plus its precomputed term frequencies.
//
// `content` is stored verbatim because the exporter renders it as-is; the
// lowercased, punctuation-stripped view exists only inside `word_counts`.

use std::collections::HashMap;

use super::record::{JokeRecord, RecordError, ValidRecord};
use crate::text::tokenizer;

/// Name used for jokes that carry no category at all.
pub const UNCATEGORIZED: &str = "";

#[derive(Debug, Clone)]
pub struct Document {
    id: String,
    title: String,
    content: String,
    /// Ordered, duplicate-free. `[""]` for an uncategorized joke.
    categories: Vec<String>,
    upvotes: i64,
    downvotes: i64,
    word_counts: HashMap<String, u32>,
}

impl Document {
    /// Validate a raw record and build a document from it.
    pub fn from_record(record: JokeRecord) -> Result<Self, RecordError> {
        Ok(Self::from_valid(record.validate()?))
    }

    pub fn from_valid(record: ValidRecord) -> Self {
        let categories = parse_categories(record.categories.as_deref());
        let word_counts = count_terms(&record.content);

        Self {
            id: record.id,
            title: record.title,
            content: record.content,
            categories,
            upvotes: record.upvotes,
            downvotes: record.downvotes,
            word_counts,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// The raw joke text, exactly as it was supplied.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn upvotes(&self) -> i64 {
        self.upvotes
    }

    pub fn downvotes(&self) -> i64 {
        self.downvotes
    }

    /// Net vote score. Not used by any of the term statistics.
    pub fn score(&self) -> i64 {
        self.upvotes.saturating_sub(self.downvotes)
    }

    pub fn word_counts(&self) -> &HashMap<String, u32> {
        &self.word_counts
    }

    /// Occurrences of `term` (already lowercased) in this document.
    pub fn count(&self, term: &str) -> u32 {
        self.word_counts.get(term).copied().unwrap_or(0)
    }

    pub fn in_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    pub fn is_uncategorized(&self) -> bool {
        self.in_category(UNCATEGORIZED)
    }
}

/// Split a raw comma-separated category string.
///
/// `None` means uncategorized. Names are kept exactly as split (no trimming),
/// but a name repeated within one record is only kept once.
fn parse_categories(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return vec![UNCATEGORIZED.to_string()];
    };

    let mut categories: Vec<String> = Vec::new();
    for name in raw.split(',') {
        if !categories.iter().any(|c| c == name) {
            categories.push(name.to_string());
        }
    }
    categories
}

fn count_terms(content: &str) -> HashMap<String, u32> {
    let mut counts = HashMap::new();
    for token in tokenizer::tokenize(content) {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}
