//! Demo configuration loaded from environment variables.

use std::env;

use corkboard_core::domain::CurrentUser;

/// Demo session configuration.
///
/// `USER_UID` selects the signed-in identity; leaving it unset runs the
/// session signed out. `USER_DISPLAY_NAME` and `USER_EMAIL` feed the
/// author-name fallback chain.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub user: Option<CurrentUser>,
    pub json_logs: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let user = env::var("USER_UID").ok().map(|uid| CurrentUser {
            uid,
            display_name: env::var("USER_DISPLAY_NAME").ok(),
            email: env::var("USER_EMAIL").ok(),
        });

        Self {
            user,
            json_logs: env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
        }
    }
}
