// Colored terminal output for category counts, top terms and joke listings.

use std::collections::BTreeMap;

use colored::Colorize;

use super::truncate_chars;
use crate::corpus::collection::Corpus;
use crate::scoring::category::ScoredTerm;

/// Label shown in place of the empty category name.
const UNCATEGORIZED_LABEL: &str = "(uncategorized)";

fn label(category: &str) -> &str {
    if category.is_empty() {
        UNCATEGORIZED_LABEL
    } else {
        category
    }
}

/// Display the category → document count table.
pub fn display_category_counts(counts: &BTreeMap<String, usize>) {
    if counts.is_empty() {
        println!("No categories found — the corpus is empty.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Categories ({}) ===", counts.len()).bold()
    );
    println!();

    for (category, count) in counts {
        let name = label(category);
        let name = if category.is_empty() {
            name.dimmed()
        } else {
            name.bold()
        };
        println!("  {:<40} {:>6}", name, count);
    }
    println!();
}

/// Display one category's ranked terms with their scores.
pub fn display_top_terms(category: &str, document_count: usize, terms: &[ScoredTerm]) {
    println!(
        "\n{} {}",
        label(category).bold(),
        format!("({document_count} jokes)").dimmed()
    );

    if terms.is_empty() {
        println!("  {}", "no qualifying terms".dimmed());
        return;
    }

    for (i, scored) in terms.iter().enumerate() {
        println!(
            "  {:>2}. {:<24} {}",
            i + 1,
            scored.term.bright_green(),
            format!("{:.3}", scored.score).dimmed()
        );
    }
}

/// Display the IDF of each queried term.
pub fn display_idf(values: &[(String, f64)]) {
    for (term, idf) in values {
        let value = format!("{idf:.4}");
        let value = if *idf == 0.0 {
            value.dimmed()
        } else {
            value.bright_yellow()
        };
        println!("  {:<24} {}", term, value);
    }
}

/// List the jokes in a category: id, net score and a short preview.
pub fn display_jokes(corpus: &Corpus, category: &str) {
    let jokes: Vec<_> = corpus.documents_in_category(category).collect();
    if jokes.is_empty() {
        println!("No jokes in category \"{}\".", label(category));
        return;
    }

    println!(
        "\n{}",
        format!("=== {} ({} jokes) ===", label(category), jokes.len()).bold()
    );
    println!();

    for doc in jokes {
        let score = doc.score();
        let score_str = format!("{score:+}");
        let score_str = if score > 0 {
            score_str.bright_green()
        } else if score < 0 {
            score_str.bright_red()
        } else {
            score_str.dimmed()
        };

        println!(
            "  {:<26} {:>6}  {}",
            doc.id().dimmed(),
            score_str,
            truncate_chars(doc.title(), 60).bold()
        );
        println!(
            "      {}",
            truncate_chars(&doc.content().replace('\n', " "), 100)
        );
    }
    println!();
}
