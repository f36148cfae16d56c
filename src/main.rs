use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use jokestats::config::Config;
use jokestats::corpus::collection::Corpus;
use jokestats::corpus::document::UNCATEGORIZED;
use jokestats::corpus::loader;
use jokestats::output::{export, terminal};
use jokestats::scoring::category::CategoryScorer;
use jokestats::scoring::idf::IdfEngine;

/// jokestats: what makes each kind of joke distinctive.
///
/// Ranks the words that characterize every joke category using
/// square-root-dampened term frequency weighted by corpus-wide IDF, and
/// exports the jokes of each category to plain text files.
#[derive(Parser)]
#[command(name = "jokestats", version, about)]
struct Cli {
    /// Joke records file (JSON array or JSON Lines). Overrides JOKESTATS_INPUT.
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every category with its number of jokes
    Categories,

    /// Show the most distinctive terms per category
    Terms {
        /// Only score this category (default: all categories)
        #[arg(long)]
        category: Option<String>,

        /// Terms per category (default: JOKESTATS_TOP_N or 10)
        #[arg(short = 'n', long)]
        top: Option<usize>,

        /// Print a JSON object of category -> terms instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the inverse document frequency of one or more terms
    Idf {
        /// Terms to look up (case-insensitive)
        #[arg(required = true)]
        terms: Vec<String>,
    },

    /// List the jokes in a category
    Jokes {
        /// Category name (omit for uncategorized jokes)
        category: Option<String>,
    },

    /// Write one text file per category
    Export {
        /// Destination directory (default: JOKESTATS_EXPORT_DIR or ./jokes_by_category)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Replace the destination directory if it exists
        #[arg(long)]
        overwrite: bool,

        /// Don't write a file for uncategorized jokes
        #[arg(long)]
        skip_uncategorized: bool,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("jokestats=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(input) = cli.input {
        config.input = Some(input);
    }

    let corpus = load_corpus(&config)?;

    match cli.command {
        Commands::Categories => {
            terminal::display_category_counts(corpus.category_counts());
        }

        Commands::Terms {
            category,
            top,
            json,
        } => {
            let n = top.unwrap_or(config.top_n);
            let stop_words = config.stop_words()?;
            let scorer = CategoryScorer::new(&corpus, &stop_words);

            match category {
                Some(category) => {
                    let terms = scorer.top_scored_terms(&category, n);
                    if json {
                        let mut out = BTreeMap::new();
                        out.insert(
                            category.as_str(),
                            terms.iter().map(|t| t.term.as_str()).collect::<Vec<_>>(),
                        );
                        println!("{}", serde_json::to_string_pretty(&out)?);
                    } else {
                        let count = corpus.category_counts().get(&category).copied().unwrap_or(0);
                        terminal::display_top_terms(&category, count, &terms);
                    }
                }
                None if json => {
                    let all = scorer.all_top_terms(n);
                    println!("{}", serde_json::to_string_pretty(&all)?);
                }
                None => {
                    let categories: Vec<(&str, usize)> = corpus
                        .category_counts()
                        .iter()
                        .filter(|(c, _)| c.as_str() != UNCATEGORIZED)
                        .map(|(c, count)| (c.as_str(), *count))
                        .collect();

                    let pb = ProgressBar::new(categories.len() as u64);
                    pb.set_style(
                        ProgressStyle::default_bar()
                            .template("  Scoring [{bar:30}] {pos}/{len} ({eta})")
                            .context("Invalid progress bar template")?,
                    );

                    let mut results = Vec::with_capacity(categories.len());
                    for (category, count) in categories {
                        results.push((category, count, scorer.top_scored_terms(category, n)));
                        pb.inc(1);
                    }
                    pb.finish_and_clear();

                    for (category, count, terms) in &results {
                        terminal::display_top_terms(category, *count, terms);
                    }
                    info!(
                        categories = results.len(),
                        idf_terms = scorer.idf().cached_terms(),
                        "Scored all categories"
                    );
                }
            }
        }

        Commands::Idf { terms } => {
            let engine = IdfEngine::new(&corpus);
            let values: Vec<(String, f64)> = terms
                .into_iter()
                .map(|term| {
                    let idf = engine.idf(&term);
                    (term.to_lowercase(), idf)
                })
                .collect();
            terminal::display_idf(&values);
        }

        Commands::Jokes { category } => {
            terminal::display_jokes(&corpus, category.as_deref().unwrap_or(UNCATEGORIZED));
        }

        Commands::Export {
            dir,
            overwrite,
            skip_uncategorized,
        } => {
            let directory = dir.unwrap_or_else(|| config.export_dir.clone());
            let options = export::ExportOptions {
                overwrite,
                skip_uncategorized,
            };
            let summary = export::export_categories(&corpus, &directory, options)
                .with_context(|| format!("Export to {} failed", directory.display()))?;
            println!(
                "{}",
                format!(
                    "Wrote {} category files to {}",
                    summary.files.len(),
                    summary.directory.display()
                )
                .bold()
            );
        }
    }

    Ok(())
}

fn load_corpus(config: &Config) -> Result<Corpus> {
    let path = config.require_input()?;
    let records = loader::load_records(path)?;
    Corpus::from_records(records)
        .with_context(|| format!("Invalid joke record in {}", path.display()))
}
