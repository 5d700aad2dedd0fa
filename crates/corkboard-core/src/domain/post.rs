use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - one record in the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Opaque identifier assigned by the store at creation, immutable
    /// thereafter.
    pub id: String,
    pub title: String,
    /// Free text; newlines are preserved for display.
    pub content: String,
    /// Display-name snapshot taken at creation time. Never re-derived
    /// from the author's current profile.
    pub author: String,
    /// Uid of the creating user. Used only to gate edit/delete
    /// affordances.
    pub author_id: String,
    /// Store-assigned creation time and the sole sort key. `None` when
    /// the stored value is absent or unreadable.
    pub timestamp: Option<DateTime<Utc>>,
}

/// Create-side shape of a post. The store assigns `id` and `timestamp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub author: String,
    pub author_id: String,
}
