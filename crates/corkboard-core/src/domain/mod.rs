//! Domain entities - the core business objects.

mod identity;

mod post;

pub use identity::CurrentUser;
pub use post::{Post, PostDraft};
