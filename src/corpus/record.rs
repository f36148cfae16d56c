// Input records — the shape of a joke as exported from the source database.
//
// Records arrive as loosely-typed JSON. Everything is optional at the serde
// level so a malformed record produces a named `RecordError` instead of an
// opaque parse failure; `validate` enforces which fields are required.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while turning raw records into documents.
#[derive(Error, Debug, PartialEq)]
pub enum RecordError {
    #[error("invalid record: missing required field `{0}`")]
    MissingField(&'static str),

    #[error("invalid record at index {index}: {source}")]
    AtIndex {
        index: usize,
        #[source]
        source: Box<RecordError>,
    },
}

/// A raw joke record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JokeRecord {
    /// Opaque identifier. Usually a string, but database exports sometimes
    /// emit an object like `{"$oid": "..."}`, so any JSON value is accepted.
    #[serde(rename = "_id", default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    /// Comma-separated category names, or null for an uncategorized joke.
    #[serde(default)]
    pub categories: Option<String>,
    /// Vote counts; missing or null means 0.
    #[serde(default)]
    pub upvotes: Option<i64>,
    #[serde(default)]
    pub downvotes: Option<i64>,
}

/// A record whose required fields have been checked.
#[derive(Debug, Clone)]
pub struct ValidRecord {
    pub id: String,
    pub title: String,
    pub content: String,
    pub categories: Option<String>,
    pub upvotes: i64,
    pub downvotes: i64,
}

impl JokeRecord {
    /// Convenience constructor for records built in code rather than parsed.
    pub fn new(id: &str, title: &str, content: &str, categories: Option<&str>) -> Self {
        Self {
            id: Some(serde_json::Value::String(id.to_string())),
            title: Some(title.to_string()),
            content: Some(content.to_string()),
            categories: categories.map(str::to_string),
            upvotes: None,
            downvotes: None,
        }
    }

    /// Check required fields and flatten the identifier to a string.
    pub fn validate(self) -> Result<ValidRecord, RecordError> {
        let id = match self.id {
            None | Some(serde_json::Value::Null) => return Err(RecordError::MissingField("_id")),
            Some(serde_json::Value::String(s)) => s,
            // mongoexport ObjectId: {"$oid": "abc"} → "abc"
            Some(serde_json::Value::Object(map)) => {
                let oid = map.get("$oid").and_then(|v| v.as_str()).map(str::to_string);
                oid.unwrap_or_else(|| serde_json::Value::Object(map).to_string())
            }
            Some(other) => other.to_string(),
        };
        let title = self.title.ok_or(RecordError::MissingField("title"))?;
        let content = self.content.ok_or(RecordError::MissingField("content"))?;

        Ok(ValidRecord {
            id,
            title,
            content,
            categories: self.categories,
            upvotes: self.upvotes.unwrap_or(0),
            downvotes: self.downvotes.unwrap_or(0),
        })
    }
}
