// Category export — one plain-text file per category.
//
// Each file starts with the category's document count, then a blank line,
// then the raw content of every joke in the category separated by a "~~~~"
// line. Jokes with several categories appear in several files.
//
// The destination check happens before anything is written: an existing
// directory is either replaced (overwrite) or left untouched (error).

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::corpus::collection::Corpus;
use crate::corpus::document::UNCATEGORIZED;

/// Separator placed between jokes in a category file.
pub const JOKE_SEPARATOR: &str = "\n\n~~~~\n\n";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("{0}: directory already exists")]
    DestinationExists(PathBuf),

    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExportOptions {
    /// Replace the destination directory if it already exists.
    pub overwrite: bool,
    /// Leave out the file for jokes without a category.
    pub skip_uncategorized: bool,
}

#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub directory: PathBuf,
    pub files: Vec<PathBuf>,
}

/// File name for a category: spaces and slashes become underscores.
///
/// The uncategorized category maps to `.txt`.
pub fn category_filename(category: &str) -> String {
    format!("{}.txt", category.replace([' ', '/'], "_"))
}

/// The full text written for `category`.
pub fn render_category(corpus: &Corpus, category: &str) -> String {
    let count = corpus.category_counts().get(category).copied().unwrap_or(0);
    let jokes: Vec<&str> = corpus
        .documents_in_category(category)
        .map(|doc| doc.content())
        .collect();

    format!("{count}\n\n{}", jokes.join(JOKE_SEPARATOR))
}

/// Write every category of `corpus` into `directory`.
pub fn export_categories(
    corpus: &Corpus,
    directory: &Path,
    options: ExportOptions,
) -> Result<ExportSummary, ExportError> {
    prepare_directory(directory, options.overwrite)?;

    let mut files: Vec<PathBuf> = Vec::new();
    for category in corpus.categories() {
        if options.skip_uncategorized && category == UNCATEGORIZED {
            continue;
        }

        let path = directory.join(category_filename(category));
        // "a b" and "a/b" share a file name; the later category replaces it
        let collides = files.contains(&path);
        if collides {
            warn!(
                category,
                file = %path.display(),
                "Category file name collides with an earlier category, overwriting"
            );
        }
        std::fs::write(&path, render_category(corpus, category)).map_err(|source| {
            ExportError::Io {
                path: path.clone(),
                source,
            }
        })?;
        if !collides {
            files.push(path);
        }
    }

    info!(
        directory = %directory.display(),
        files = files.len(),
        "Finished writing category files"
    );

    Ok(ExportSummary {
        directory: directory.to_path_buf(),
        files,
    })
}

fn prepare_directory(directory: &Path, overwrite: bool) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io {
        path: directory.to_path_buf(),
        source,
    };

    if directory.exists() {
        if !overwrite {
            return Err(ExportError::DestinationExists(directory.to_path_buf()));
        }
        warn!(directory = %directory.display(), "Directory exists, overwriting");
        std::fs::remove_dir_all(directory).map_err(io_err)?;
    }

    std::fs::create_dir_all(directory).map_err(io_err)
}
