// Corpus — the immutable collection of documents.
//
// Built once from input records and read-only afterwards. The category →
// document-count index is derived at construction so the scorers and the
// exporter never rescan for it.

use std::collections::BTreeMap;

use tracing::info;

use super::document::Document;
use super::record::{JokeRecord, RecordError};

#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
    category_counts: BTreeMap<String, usize>,
}

impl Corpus {
    /// Validate and materialize every record.
    ///
    /// The source is consumed exactly once. The first invalid record aborts
    /// construction and is reported with its position in the source.
    pub fn from_records<I>(records: I) -> Result<Self, RecordError>
    where
        I: IntoIterator<Item = JokeRecord>,
    {
        let documents = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                Document::from_record(record).map_err(|e| RecordError::AtIndex {
                    index,
                    source: Box::new(e),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_documents(documents))
    }

    pub fn from_documents(documents: Vec<Document>) -> Self {
        let category_counts = count_categories(&documents);

        info!(
            documents = documents.len(),
            categories = category_counts.len(),
            "Built joke corpus"
        );

        Self {
            documents,
            category_counts,
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Documents tagged with `category`, in corpus order.
    ///
    /// The iterator is lazy and `Clone`, so it can be restarted by cloning
    /// it or calling this again; each pass re-filters the corpus.
    pub fn documents_in_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a Document> + Clone + 'a {
        self.documents
            .iter()
            .filter(move |doc| doc.in_category(category))
    }

    /// Category name → number of documents carrying it, ordered by name.
    /// Includes the uncategorized (`""`) entry when any such joke exists.
    pub fn category_counts(&self) -> &BTreeMap<String, usize> {
        &self.category_counts
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.category_counts.keys().map(String::as_str)
    }
}

fn count_categories(documents: &[Document]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for doc in documents {
        // categories are de-duplicated per document, so this counts documents
        for category in doc.categories() {
            *counts.entry(category.clone()).or_insert(0) += 1;
        }
    }
    counts
}
