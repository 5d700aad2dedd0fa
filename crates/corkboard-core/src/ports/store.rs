//! Post store port - abstraction over the document backend.

use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{Post, PostDraft};
use crate::error::StoreError;

/// Handler invoked with the complete materialized feed, newest first,
/// on every change. Snapshots are never deltas.
pub type SnapshotHandler =
    Box<dyn Fn(Vec<Post>) -> Pin<Box<dyn Future<Output = ()> + Send>> + Send + Sync>;

/// Post store trait - the four operations the client performs against
/// the backing collection.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Add a new post. The store assigns the id and the creation
    /// timestamp; no validation happens here.
    async fn create(&self, draft: PostDraft) -> Result<String, StoreError>;

    /// Overwrite the title and content of an existing post. Never
    /// touches author, author id, or timestamp. Fails when the target
    /// does not exist.
    async fn update(&self, id: &str, title: &str, content: &str) -> Result<(), StoreError>;

    /// Remove a post permanently. Deleting an id that no longer exists
    /// is treated as success.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;

    /// Open a live query over the whole collection, ordered by
    /// timestamp descending. The handler receives the complete current
    /// list on attach and after every insert, update, or delete;
    /// invocations never overlap.
    async fn subscribe_all(&self, handler: SnapshotHandler) -> Result<Subscription, StoreError>;
}

/// Cancellation handle for a live query.
///
/// Cancelling is idempotent and also runs on drop. Once `cancel`
/// returns, no further snapshot is delivered to the handler.
pub struct Subscription {
    canceller: Mutex<Option<Box<dyn FnOnce() + Send>>>,
}

impl Subscription {
    pub fn new(canceller: impl FnOnce() + Send + 'static) -> Self {
        Self {
            canceller: Mutex::new(Some(Box::new(canceller))),
        }
    }

    /// Stop the live query. Safe to call any number of times.
    pub fn cancel(&self) {
        let canceller = self.canceller.lock().ok().and_then(|mut slot| slot.take());
        if let Some(cancel) = canceller {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}
