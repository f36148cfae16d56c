// Unit tests for documents and the corpus.
//
// Tests category parsing, the raw-content invariant, precomputed word counts,
// the category index and the restartable category iterator.

use jokestats::corpus::collection::Corpus;
use jokestats::corpus::document::Document;
use jokestats::corpus::record::{JokeRecord, RecordError};

fn joke(id: &str, content: &str, categories: Option<&str>) -> JokeRecord {
    JokeRecord::new(id, &format!("title {id}"), content, categories)
}

fn sample_corpus() -> Corpus {
    Corpus::from_records(vec![
        joke("1", "Why did the chicken cross the road?", Some("Animals,Classic")),
        joke("2", "A horse walks into a bar.", Some("Animals,Bar")),
        joke("3", "Knock knock. Who's there?", Some("Knock Knock")),
        joke("4", "I told a joke once.", None),
    ])
    .unwrap()
}

// ============================================================
// Document
// ============================================================

#[test]
fn content_is_stored_verbatim() {
    let doc = Document::from_record(joke("1", "Wouldn't you KNOW it!", Some("Puns"))).unwrap();
    assert_eq!(doc.content(), "Wouldn't you KNOW it!");
}

#[test]
fn word_counts_use_normalized_view() {
    let doc = Document::from_record(joke("1", "Dog, dog... DOG! cat", None)).unwrap();
    assert_eq!(doc.count("dog"), 3);
    assert_eq!(doc.count("cat"), 1);
    assert_eq!(doc.count("DOG"), 0, "lookups expect lowercased terms");
    assert_eq!(doc.word_counts().len(), 2);
}

#[test]
fn null_categories_mean_uncategorized() {
    let doc = Document::from_record(joke("1", "text", None)).unwrap();
    assert_eq!(doc.categories(), &[String::new()]);
    assert!(doc.is_uncategorized());
}

#[test]
fn category_names_are_not_trimmed() {
    let doc = Document::from_record(joke("1", "text", Some("Animals, Puns"))).unwrap();
    assert!(doc.in_category("Animals"));
    assert!(doc.in_category(" Puns"));
    assert!(!doc.in_category("Puns"));
}

#[test]
fn vote_score_is_net() {
    let mut record = joke("1", "text", None);
    record.upvotes = Some(10);
    record.downvotes = Some(3);
    let doc = Document::from_record(record).unwrap();
    assert_eq!(doc.score(), 7);
    assert_eq!(doc.upvotes(), 10);
    assert_eq!(doc.downvotes(), 3);
}

#[test]
fn vote_score_saturates() {
    let mut record = joke("1", "text", None);
    record.upvotes = Some(i64::MIN);
    record.downvotes = Some(1);
    let doc = Document::from_record(record).unwrap();
    assert_eq!(doc.score(), i64::MIN);
}

#[test]
fn null_votes_in_json_load_as_zero() {
    let record: JokeRecord = serde_json::from_str(
        r#"{"_id": "1", "title": "t", "content": "c", "upvotes": null, "downvotes": null}"#,
    )
    .unwrap();
    let doc = Document::from_record(record).unwrap();
    assert_eq!(doc.upvotes(), 0);
    assert_eq!(doc.score(), 0);
}

#[test]
fn missing_title_is_invalid() {
    let mut record = joke("1", "text", None);
    record.title = None;
    assert_eq!(
        Document::from_record(record).unwrap_err(),
        RecordError::MissingField("title")
    );
}

// ============================================================
// Corpus
// ============================================================

#[test]
fn category_counts_include_uncategorized() {
    let corpus = sample_corpus();
    let counts = corpus.category_counts();
    assert_eq!(counts["Animals"], 2);
    assert_eq!(counts["Classic"], 1);
    assert_eq!(counts["Bar"], 1);
    assert_eq!(counts["Knock Knock"], 1);
    assert_eq!(counts[""], 1);
    assert_eq!(counts.len(), 5);
}

#[test]
fn every_category_key_has_a_member() {
    let corpus = sample_corpus();
    for (category, count) in corpus.category_counts() {
        assert_eq!(corpus.documents_in_category(category).count(), *count);
        assert!(*count > 0);
    }
}

#[test]
fn repeated_category_counts_document_once() {
    let corpus = Corpus::from_records(vec![joke("1", "text", Some("Puns,Puns"))]).unwrap();
    assert_eq!(corpus.category_counts()["Puns"], 1);
}

#[test]
fn documents_in_category_is_restartable() {
    let corpus = sample_corpus();
    let animals = corpus.documents_in_category("Animals");

    let first: Vec<&str> = animals.clone().map(|d| d.id()).collect();
    let second: Vec<&str> = animals.map(|d| d.id()).collect();
    assert_eq!(first, vec!["1", "2"]);
    assert_eq!(first, second);

    // and a fresh call sees the same members
    assert_eq!(corpus.documents_in_category("Animals").count(), 2);
}

#[test]
fn unknown_category_is_empty() {
    let corpus = sample_corpus();
    assert_eq!(corpus.documents_in_category("Dad Jokes").count(), 0);
}

#[test]
fn invalid_record_reports_index() {
    let mut bad = joke("2", "text", None);
    bad.content = None;
    let err = Corpus::from_records(vec![joke("1", "ok", None), bad]).unwrap_err();
    assert_eq!(
        err,
        RecordError::AtIndex {
            index: 1,
            source: Box::new(RecordError::MissingField("content")),
        }
    );
}

#[test]
fn single_pass_source_is_materialized() {
    let records = (0..3).map(|i| joke(&i.to_string(), "text", Some("A")));
    let corpus = Corpus::from_records(records).unwrap();
    assert_eq!(corpus.len(), 3);
    assert_eq!(corpus.documents_in_category("A").count(), 3);
    assert_eq!(corpus.documents_in_category("A").count(), 3);
}

#[test]
fn empty_corpus() {
    let corpus = Corpus::from_records(Vec::new()).unwrap();
    assert!(corpus.is_empty());
    assert!(corpus.category_counts().is_empty());
}
