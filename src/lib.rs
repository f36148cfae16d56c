// jokestats: term statistics for a categorized joke corpus
//
// This is the library root. Data flows leaf-first: text → corpus → scoring,
// with output reading raw documents straight from the corpus.

pub mod config;
pub mod corpus;
pub mod output;
pub mod scoring;
pub mod text;
