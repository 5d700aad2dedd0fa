//! Raw document representation and entity mapping.
//!
//! The backend stores schemaless field maps; this module is the
//! boundary where those maps become typed `Post` values. Mapping is
//! tolerant: a missing or unreadable field falls back to its default
//! instead of failing the whole snapshot.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use corkboard_core::domain::{Post, PostDraft};

pub(crate) const FIELD_TITLE: &str = "title";
pub(crate) const FIELD_CONTENT: &str = "content";
pub(crate) const FIELD_AUTHOR: &str = "author";
pub(crate) const FIELD_AUTHOR_ID: &str = "authorId";
pub(crate) const FIELD_TIMESTAMP: &str = "timestamp";

/// One stored record: an opaque id plus a schemaless field map.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: String,
    pub fields: Map<String, Value>,
}

impl Document {
    /// Build the stored representation of a new post. Timestamps are
    /// kept as RFC 3339 strings.
    pub fn from_draft(id: String, draft: PostDraft, timestamp: DateTime<Utc>) -> Self {
        let mut fields = Map::new();
        fields.insert(FIELD_TITLE.to_owned(), Value::String(draft.title));
        fields.insert(FIELD_CONTENT.to_owned(), Value::String(draft.content));
        fields.insert(FIELD_AUTHOR.to_owned(), Value::String(draft.author));
        fields.insert(FIELD_AUTHOR_ID.to_owned(), Value::String(draft.author_id));
        fields.insert(
            FIELD_TIMESTAMP.to_owned(),
            Value::String(timestamp.to_rfc3339()),
        );
        Self { id, fields }
    }

    /// Materialize the typed entity from the stored fields.
    pub fn to_post(&self) -> Post {
        Post {
            id: self.id.clone(),
            title: string_field(&self.fields, FIELD_TITLE),
            content: string_field(&self.fields, FIELD_CONTENT),
            author: string_field(&self.fields, FIELD_AUTHOR),
            author_id: string_field(&self.fields, FIELD_AUTHOR_ID),
            timestamp: timestamp_field(&self.fields),
        }
    }
}

fn string_field(fields: &Map<String, Value>, key: &str) -> String {
    fields
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

fn timestamp_field(fields: &Map<String, Value>) -> Option<DateTime<Utc>> {
    let raw = fields.get(FIELD_TIMESTAMP)?.as_str()?;
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}
