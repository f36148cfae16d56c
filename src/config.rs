use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::scoring::category::DEFAULT_TOP_N;
use crate::text::stopwords::StopWords;

/// Default directory for `jokestats export`.
pub const DEFAULT_EXPORT_DIR: &str = "./jokes_by_category";

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. CLI flags
/// override anything set here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Joke records file, JSON array or JSON Lines (JOKESTATS_INPUT)
    pub input: Option<PathBuf>,
    /// Terms reported per category (JOKESTATS_TOP_N, default 10)
    pub top_n: usize,
    /// Destination for category exports (JOKESTATS_EXPORT_DIR)
    pub export_dir: PathBuf,
    /// Custom stopword list, one word per line (JOKESTATS_STOPWORDS).
    /// The built-in English list is used when unset.
    pub stopwords_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let top_n = match env::var("JOKESTATS_TOP_N") {
            Ok(raw) => raw.trim().parse().map_err(|_| {
                anyhow::anyhow!("JOKESTATS_TOP_N must be a whole number, got {raw:?}")
            })?,
            Err(_) => DEFAULT_TOP_N,
        };

        Ok(Self {
            input: env::var("JOKESTATS_INPUT").ok().map(PathBuf::from),
            top_n,
            export_dir: env::var("JOKESTATS_EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_EXPORT_DIR)),
            stopwords_path: env::var("JOKESTATS_STOPWORDS").ok().map(PathBuf::from),
        })
    }

    /// The records file to read. Call this before any command that needs
    /// the corpus.
    pub fn require_input(&self) -> Result<&PathBuf> {
        match &self.input {
            Some(path) => Ok(path),
            None => anyhow::bail!(
                "No joke records file given. Pass --input <PATH> or set JOKESTATS_INPUT\n\
                 in your environment or .env file."
            ),
        }
    }

    /// The configured stopword list, or the built-in English one.
    pub fn stop_words(&self) -> Result<StopWords> {
        match &self.stopwords_path {
            Some(path) => StopWords::from_file(path),
            None => Ok(StopWords::english()),
        }
    }
}
