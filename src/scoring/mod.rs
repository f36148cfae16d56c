// Term scoring — corpus-wide IDF and per-category top-term selection.

pub mod category;
pub mod idf;
