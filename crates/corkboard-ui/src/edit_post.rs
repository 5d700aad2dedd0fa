//! Edit-post form controller.

use corkboard_core::domain::Post;
use corkboard_core::ports::PostStore;

use crate::create_post::VALIDATION_MESSAGE;

/// Form bound to an existing post. Same validation and submission
/// contract as the create form, but produces an update and reports
/// success to its owner instead of clearing its fields.
#[derive(Debug)]
pub struct EditPostForm {
    post_id: String,
    title: String,
    content: String,
    is_submitting: bool,
    error: Option<String>,
}

impl EditPostForm {
    /// Seed the form from the post being edited.
    pub fn for_post(post: &Post) -> Self {
        Self {
            post_id: post.id.clone(),
            title: post.title.clone(),
            content: post.content.clone(),
            is_submitting: false,
            error: None,
        }
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

    /// Validate and save. Returns true when the update went through;
    /// the owner is expected to leave edit mode on success.
    pub async fn submit(&mut self, store: &dyn PostStore) -> bool {
        if self.title.trim().is_empty() || self.content.trim().is_empty() {
            self.error = Some(VALIDATION_MESSAGE.to_owned());
            return false;
        }

        self.is_submitting = true;
        self.error = None;

        let saved = match store.update(&self.post_id, &self.title, &self.content).await {
            Ok(()) => {
                tracing::debug!(post_id = %self.post_id, "Post updated from form");
                true
            }
            Err(err) => {
                self.error = Some(format!("Failed to update post: {err}"));
                false
            }
        };

        self.is_submitting = false;
        saved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingStore, StoreCall, post_by};

    #[test]
    fn form_is_seeded_from_the_post() {
        let post = post_by("u1");
        let form = EditPostForm::for_post(&post);

        assert_eq!(form.title(), post.title);
        assert_eq!(form.content(), post.content);
        assert_eq!(form.error(), None);
    }

    #[tokio::test]
    async fn whitespace_only_fields_never_reach_the_store() {
        let store = RecordingStore::default();
        let mut form = EditPostForm::for_post(&post_by("u1"));
        form.set_content("  \n ");

        assert!(!form.submit(&store).await);

        assert_eq!(form.error(), Some(VALIDATION_MESSAGE));
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn submit_updates_only_the_bound_post() {
        let store = RecordingStore::default();
        let post = post_by("u1");
        let mut form = EditPostForm::for_post(&post);
        form.set_title("Edited");
        form.set_content("Edited content");

        assert!(form.submit(&store).await);

        assert_eq!(
            store.calls(),
            vec![StoreCall::Update {
                id: post.id,
                title: "Edited".to_owned(),
                content: "Edited content".to_owned(),
            }]
        );
        // Fields stay put; the owner closes the editor instead.
        assert_eq!(form.title(), "Edited");
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn failed_update_sets_the_error() {
        let store = RecordingStore::failing();
        let mut form = EditPostForm::for_post(&post_by("u1"));

        assert!(!form.submit(&store).await);

        assert!(form.error().is_some_and(|e| e.starts_with("Failed to update post")));
        assert!(!form.is_submitting());
    }
}
