//! Post card presenter.

use chrono::{DateTime, Utc};

use corkboard_core::domain::{CurrentUser, Post};
use corkboard_core::ports::PostStore;

use crate::edit_post::EditPostForm;

/// Presenter state for a single post in the feed: the post itself plus
/// an optional open editor.
#[derive(Debug)]
pub struct PostCard {
    post: Post,
    editor: Option<EditPostForm>,
}

impl PostCard {
    pub fn new(post: Post) -> Self {
        Self { post, editor: None }
    }

    pub fn post(&self) -> &Post {
        &self.post
    }

    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    pub fn editor(&self) -> Option<&EditPostForm> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut EditPostForm> {
        self.editor.as_mut()
    }

    /// Whether the viewer authored this post. A signed-out viewer never
    /// is, and sees no edit/delete affordances.
    pub fn is_author(&self, viewer: Option<&CurrentUser>) -> bool {
        viewer.is_some_and(|user| user.uid == self.post.author_id)
    }

    /// Swap the card into edit mode, seeding the editor from the post.
    pub fn begin_edit(&mut self) {
        self.editor = Some(EditPostForm::for_post(&self.post));
    }

    pub fn cancel_edit(&mut self) {
        self.editor = None;
    }

    /// Submit the open editor and leave edit mode on success. A failed
    /// save keeps the editor open with its error message.
    pub async fn save_edit(&mut self, store: &dyn PostStore) -> bool {
        let Some(editor) = self.editor.as_mut() else {
            return false;
        };
        if editor.submit(store).await {
            self.editor = None;
            true
        } else {
            false
        }
    }

    /// Run the confirmation prompt that precedes a delete. Declining is
    /// a no-op, not an error; there is no undo after confirming.
    pub fn confirm_delete<F>(&self, prompt: F) -> bool
    where
        F: FnOnce(&Post) -> bool,
    {
        prompt(&self.post)
    }
}

/// Human-readable creation time. An absent or malformed stored value
/// renders a fixed fallback instead of failing the card.
pub fn format_timestamp(timestamp: Option<DateTime<Utc>>) -> String {
    match timestamp {
        Some(ts) => ts.format("%Y-%m-%d %H:%M").to_string(),
        None => "Unknown date".to_owned(),
    }
}
