//! Create-post form controller.

use corkboard_core::domain::{CurrentUser, PostDraft};
use corkboard_core::ports::PostStore;

/// Message shown when validation rejects the form.
pub(crate) const VALIDATION_MESSAGE: &str = "Please fill in all fields";

/// Local state for the create-post panel: two text fields, a
/// submission flag, and an inline error message.
#[derive(Debug, Default)]
pub struct CreatePostForm {
    title: String,
    content: String,
    is_submitting: bool,
    error: Option<String>,
}

impl CreatePostForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Field edits are ignored while a submission is in flight.
    pub fn set_title(&mut self, title: impl Into<String>) {
        if !self.is_submitting {
            self.title = title.into();
        }
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        if !self.is_submitting {
            self.content = content.into();
        }
    }

    /// Validate and create. Whitespace-only fields never reach the
    /// store. Returns true when the post was created and the fields
    /// were cleared; the feed picks the new post up from the next
    /// snapshot, nothing is applied optimistically.
    pub async fn submit(&mut self, store: &dyn PostStore, user: &CurrentUser) -> bool {
        if self.title.trim().is_empty() || self.content.trim().is_empty() {
            self.error = Some(VALIDATION_MESSAGE.to_owned());
            return false;
        }

        self.is_submitting = true;
        self.error = None;

        let draft = PostDraft {
            title: self.title.clone(),
            content: self.content.clone(),
            author: user.author_name(),
            author_id: user.uid.clone(),
        };

        let created = match store.create(draft).await {
            Ok(id) => {
                tracing::debug!(post_id = %id, "Post created from form");
                self.title.clear();
                self.content.clear();
                true
            }
            Err(err) => {
                self.error = Some(format!("Failed to create post: {err}"));
                false
            }
        };

        self.is_submitting = false;
        created
    }
}
