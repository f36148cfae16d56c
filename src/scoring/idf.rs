// Inverse document frequency over the whole corpus, memoized per term.
//
// Categories only decide which documents contribute term frequency; the IDF
// denominator is always the full corpus. The cache is never invalidated
// because the corpus is immutable once built.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::corpus::collection::Corpus;

/// IDF calculator with an explicit, append-only cache.
///
/// Single-threaded: the cache sits behind a `RefCell`, so the engine is not
/// `Sync`. Share it across threads only after swapping in a lock.
pub struct IdfEngine<'a> {
    corpus: &'a Corpus,
    cache: RefCell<HashMap<String, f64>>,
}

impl<'a> IdfEngine<'a> {
    pub fn new(corpus: &'a Corpus) -> Self {
        Self {
            corpus,
            cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn corpus(&self) -> &'a Corpus {
        self.corpus
    }

    /// `ln(N / matches)` where `matches` counts documents containing the
    /// lowercased term. A term found nowhere scores 0.0, as does a term found
    /// in every document.
    pub fn idf(&self, term: &str) -> f64 {
        let term = term.to_lowercase();
        if let Some(&cached) = self.cache.borrow().get(&term) {
            return cached;
        }

        let matches = self
            .corpus
            .documents()
            .iter()
            .filter(|doc| doc.count(&term) > 0)
            .count();

        let idf = if matches == 0 {
            0.0
        } else {
            (self.corpus.len() as f64 / matches as f64).ln()
        };

        self.cache.borrow_mut().insert(term, idf);
        idf
    }

    /// Number of distinct terms computed so far.
    pub fn cached_terms(&self) -> usize {
        self.cache.borrow().len()
    }
}
