use serde::{Deserialize, Serialize};

/// Identity resolved from the authentication provider for the current
/// session.
///
/// Threaded explicitly into every component that needs it; there is no
/// ambient user context. Absence of a value means signed out, which
/// gates every write affordance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub uid: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
}

impl CurrentUser {
    /// Display name stamped on a new post: display name, else email,
    /// else a literal "Anonymous".
    pub fn author_name(&self) -> String {
        self.display_name
            .clone()
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| "Anonymous".to_owned())
    }
}
