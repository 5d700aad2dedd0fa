//! Feed view-model.
//!
//! Owns the single live query behind the feed page. Every delivered
//! snapshot replaces the whole list; nothing is diffed or patched.

use std::sync::{Arc, Mutex};

use corkboard_core::domain::Post;
use corkboard_core::error::StoreError;
use corkboard_core::ports::{PostStore, Subscription};

/// Destination for blocking user-facing failure notices.
pub trait AlertSink: Send + Sync {
    fn alert(&self, message: &str);
}

/// Alert sink for headless surfaces: the notice goes to the log.
pub struct LogAlerts;

impl AlertSink for LogAlerts {
    fn alert(&self, message: &str) {
        tracing::error!(notice = %message, "User alert");
    }
}

/// The feed page's view-model.
pub struct Feed {
    store: Arc<dyn PostStore>,
    alerts: Arc<dyn AlertSink>,
    posts: Arc<Mutex<Vec<Post>>>,
    subscription: Option<Subscription>,
}

impl Feed {
    pub fn new(store: Arc<dyn PostStore>, alerts: Arc<dyn AlertSink>) -> Self {
        Self {
            store,
            alerts,
            posts: Arc::new(Mutex::new(Vec::new())),
            subscription: None,
        }
    }

    /// Open the live query. Attaching twice is a no-op; the feed holds
    /// at most one subscription, cancelled by `detach` or on drop.
    pub async fn attach(&mut self) -> Result<(), StoreError> {
        if self.subscription.is_some() {
            return Ok(());
        }

        let posts = Arc::clone(&self.posts);
        let subscription = self
            .store
            .subscribe_all(Box::new(move |snapshot| {
                let posts = Arc::clone(&posts);
                Box::pin(async move {
                    if let Ok(mut list) = posts.lock() {
                        *list = snapshot;
                    }
                })
            }))
            .await?;

        self.subscription = Some(subscription);
        tracing::debug!("Feed attached");
        Ok(())
    }

    /// Cancel the live query. Later snapshots are not observed.
    pub fn detach(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.cancel();
            tracing::debug!("Feed detached");
        }
    }

    /// Current feed contents, newest first.
    pub fn posts(&self) -> Vec<Post> {
        self.posts.lock().map(|list| list.clone()).unwrap_or_default()
    }

    /// Delete a post. Failure raises one alert and nothing else; the
    /// list self-corrects on the next snapshot.
    pub async fn delete_post(&self, id: &str) {
        if let Err(err) = self.store.delete(id).await {
            tracing::warn!(post_id = %id, error = %err, "Delete failed");
            self.alerts.alert("Failed to delete post");
        }
    }
}
