// Corpus — typed input records, documents with precomputed term counts,
// and the immutable collection the scorers query.

pub mod collection;
pub mod document;
pub mod loader;
pub mod record;
