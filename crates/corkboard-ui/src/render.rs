//! Plain-text rendering of the feed surface.
//!
//! Stands in for the presentation layer: affordance gating and the
//! fallback texts live here so they can be asserted without a UI
//! framework.

use corkboard_core::domain::CurrentUser;

use crate::create_post::CreatePostForm;
use crate::edit_post::EditPostForm;
use crate::post_card::{self, PostCard};

/// The create panel. Renders nothing at all for signed-out visitors.
pub fn create_panel(form: &CreatePostForm, viewer: Option<&CurrentUser>) -> Option<String> {
    viewer?;

    let mut out = String::from("== Create New Post ==\n");
    if let Some(error) = form.error() {
        out.push_str("! ");
        out.push_str(error);
        out.push('\n');
    }
    out.push_str("Title: ");
    out.push_str(form.title());
    out.push('\n');
    out.push_str("Content: ");
    out.push_str(form.content());
    out.push('\n');
    out.push_str(if form.is_submitting() {
        "[Posting...]\n"
    } else {
        "[Post]\n"
    });
    Some(out)
}

/// One card: title, author line, body, and the edit/delete row when the
/// viewer is the author. A card in edit mode renders its editor
/// instead of the read view.
pub fn card(card: &PostCard, viewer: Option<&CurrentUser>) -> String {
    if let Some(editor) = card.editor() {
        return edit_panel(editor);
    }

    let post = card.post();
    let mut out = String::new();
    out.push_str("## ");
    out.push_str(&post.title);
    out.push('\n');
    out.push_str(&post.author);
    out.push_str(" | ");
    out.push_str(&post_card::format_timestamp(post.timestamp));
    out.push('\n');
    out.push_str(&post.content);
    out.push('\n');
    if card.is_author(viewer) {
        out.push_str("[Edit] [Delete]\n");
    }
    out
}

fn edit_panel(form: &EditPostForm) -> String {
    let mut out = String::from("== Edit Post ==\n");
    if let Some(error) = form.error() {
        out.push_str("! ");
        out.push_str(error);
        out.push('\n');
    }
    out.push_str("Title: ");
    out.push_str(form.title());
    out.push('\n');
    out.push_str("Content: ");
    out.push_str(form.content());
    out.push('\n');
    out.push_str(if form.is_submitting() {
        "[Saving...] [Cancel]\n"
    } else {
        "[Save] [Cancel]\n"
    });
    out
}

/// The whole feed, newest first.
pub fn feed(cards: &[PostCard], viewer: Option<&CurrentUser>) -> String {
    if cards.is_empty() {
        return "No posts yet. Be the first to post!\n".to_owned();
    }

    cards
        .iter()
        .map(|c| card(c, viewer))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingStore, post_by, signed_in_user};

    #[test]
    fn signed_out_visitors_get_no_create_panel() {
        let form = CreatePostForm::new();

        assert!(create_panel(&form, None).is_none());
        assert!(create_panel(&form, Some(&signed_in_user())).is_some());
    }

    #[tokio::test]
    async fn create_panel_shows_the_inline_error() {
        let store = RecordingStore::default();
        let mut form = CreatePostForm::new();
        form.set_title("Hello");

        let panel = create_panel(&form, Some(&signed_in_user())).unwrap();
        assert!(!panel.contains('!'));
        assert!(panel.contains("Title: Hello"));

        form.submit(&store, &signed_in_user()).await;
        let panel = create_panel(&form, Some(&signed_in_user())).unwrap();
        assert!(panel.contains("! Please fill in all fields"));
    }

    #[test]
    fn affordances_render_only_for_the_author() {
        let viewer = signed_in_user(); // uid "u1"
        let own = PostCard::new(post_by("u1"));
        let foreign = PostCard::new(post_by("u2"));

        assert!(card(&own, Some(&viewer)).contains("[Edit] [Delete]"));
        assert!(!card(&foreign, Some(&viewer)).contains("[Edit]"));
        assert!(!card(&own, None).contains("[Edit]"));
    }

    #[test]
    fn a_card_in_edit_mode_renders_its_editor() {
        let viewer = signed_in_user();
        let mut editing = PostCard::new(post_by("u1"));
        editing.begin_edit();

        let rendered = card(&editing, Some(&viewer));
        assert!(rendered.contains("== Edit Post =="));
        assert!(rendered.contains("Title: A title"));
        assert!(rendered.contains("[Save] [Cancel]"));
        assert!(!rendered.contains("[Edit] [Delete]"));

        editing.cancel_edit();
        let rendered = card(&editing, Some(&viewer));
        assert!(!rendered.contains("== Edit Post =="));
        assert!(rendered.contains("[Edit] [Delete]"));
    }

    #[test]
    fn missing_timestamp_renders_the_fallback() {
        let mut post = post_by("u1");
        post.timestamp = None;

        assert!(card(&PostCard::new(post), None).contains("Unknown date"));
    }

    #[test]
    fn signed_out_feed_is_read_only() {
        let cards: Vec<PostCard> = ["u1", "u2", "u3"]
            .into_iter()
            .map(|uid| PostCard::new(post_by(uid)))
            .collect();

        let rendered = feed(&cards, None);

        assert_eq!(rendered.matches("## ").count(), 3);
        assert!(!rendered.contains("[Edit]"));
        assert!(!rendered.contains("[Delete]"));
    }

    #[test]
    fn empty_feed_renders_the_placeholder() {
        assert_eq!(feed(&[], None), "No posts yet. Be the first to post!\n");
    }
}
