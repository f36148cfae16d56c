// Category scorer — the terms that characterize each joke category.
//
// For a category, every member document contributes sqrt(count) for each
// term it contains, so one joke repeating a word ten times cannot drown out
// ten jokes using it once. That aggregate is multiplied by the corpus-wide
// IDF, which pushes down words common to every kind of joke.
//
// Candidates are limited to purely alphabetic tokens that are not stopwords.
// Ties on the combined score are broken by ascending term so results are
// reproducible.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Serialize;
use tracing::debug;

use super::idf::IdfEngine;
use crate::corpus::collection::Corpus;
use crate::corpus::document::UNCATEGORIZED;
use crate::text::stopwords::StopWords;
use crate::text::tokenizer::is_alphabetic_term;

/// How many terms to report per category when the caller doesn't say.
pub const DEFAULT_TOP_N: usize = 10;

/// A term with its combined (dampened frequency × IDF) score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredTerm {
    pub term: String,
    pub score: f64,
}

pub struct CategoryScorer<'a> {
    corpus: &'a Corpus,
    stop_words: &'a StopWords,
    idf: IdfEngine<'a>,
}

impl<'a> CategoryScorer<'a> {
    pub fn new(corpus: &'a Corpus, stop_words: &'a StopWords) -> Self {
        Self {
            corpus,
            stop_words,
            idf: IdfEngine::new(corpus),
        }
    }

    /// The IDF engine backing this scorer. Its cache fills as categories
    /// are scored and is shared by every later call.
    pub fn idf(&self) -> &IdfEngine<'a> {
        &self.idf
    }

    /// Up to `n` highest-scoring terms for `category`, best first.
    pub fn top_terms(&self, category: &str, n: usize) -> Vec<String> {
        self.top_scored_terms(category, n)
            .into_iter()
            .map(|scored| scored.term)
            .collect()
    }

    /// Like [`top_terms`](Self::top_terms) but keeps each term's score.
    ///
    /// The uncategorized category and categories with no documents yield an
    /// empty list. Fewer than `n` terms come back when the category has
    /// fewer candidates; the list is never padded.
    pub fn top_scored_terms(&self, category: &str, n: usize) -> Vec<ScoredTerm> {
        if category == UNCATEGORIZED || n == 0 {
            return Vec::new();
        }

        debug!(category, "Scoring category");

        let mut candidates: HashSet<&str> = HashSet::new();
        let mut aggregate: HashMap<&str, f64> = HashMap::new();

        for doc in self.corpus.documents_in_category(category) {
            for (term, &count) in doc.word_counts() {
                let term = term.as_str();
                if is_alphabetic_term(term) && !self.stop_words.contains(term) {
                    candidates.insert(term);
                }
                *aggregate.entry(term).or_insert(0.0) += f64::from(count).sqrt();
            }
        }

        let mut scored: Vec<ScoredTerm> = candidates
            .into_iter()
            .map(|term| ScoredTerm {
                term: term.to_string(),
                score: aggregate.get(term).copied().unwrap_or(0.0) * self.idf.idf(term),
            })
            .collect();

        scored.sort_by(compare_scored);
        scored.truncate(n);

        debug!(
            category,
            terms = scored.len(),
            top_term = scored.first().map(|s| s.term.as_str()).unwrap_or(""),
            "Scored category"
        );

        scored
    }

    /// Top terms for every category in the corpus except the uncategorized one.
    pub fn all_top_terms(&self, n: usize) -> BTreeMap<String, Vec<String>> {
        self.corpus
            .categories()
            .filter(|category| *category != UNCATEGORIZED)
            .map(|category| (category.to_string(), self.top_terms(category, n)))
            .collect()
    }
}

/// Higher score first, then ascending term.
fn compare_scored(a: &ScoredTerm, b: &ScoredTerm) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.term.cmp(&b.term))
}
