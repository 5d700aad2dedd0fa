//! # Corkboard UI
//!
//! The feed page as plain state machines: form controllers, the post
//! card presenter, and the feed view-model. No rendering framework is
//! assumed; `render` produces plain text for headless surfaces and
//! tests.

pub mod create_post;
pub mod edit_post;
pub mod feed;
pub mod post_card;
pub mod render;

#[cfg(test)]
mod testing;

pub use create_post::CreatePostForm;
pub use edit_post::EditPostForm;
pub use feed::{AlertSink, Feed, LogAlerts};
pub use post_card::PostCard;
