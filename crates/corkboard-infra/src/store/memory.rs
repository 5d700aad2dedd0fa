//! In-memory post store.
//!
//! Emulates the hosted document backend within a single process: a map
//! of raw documents plus a broadcast channel that fans the full sorted
//! snapshot out to every live query after each mutation.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use tokio::sync::{RwLock, broadcast, oneshot};
use uuid::Uuid;

use corkboard_core::domain::{Post, PostDraft};
use corkboard_core::error::StoreError;
use corkboard_core::ports::{PostStore, SnapshotHandler, Subscription};

use super::document::{Document, FIELD_CONTENT, FIELD_TITLE};

const SNAPSHOT_BUFFER: usize = 64;

/// In-process post collection with live queries.
pub struct MemoryPostStore {
    documents: Arc<RwLock<HashMap<String, Document>>>,
    snapshots: broadcast::Sender<Vec<Post>>,
    fail_writes: AtomicBool,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        let (snapshots, _) = broadcast::channel(SNAPSHOT_BUFFER);
        Self {
            documents: Arc::new(RwLock::new(HashMap::new())),
            snapshots,
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Make every subsequent write fail, to exercise error paths.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_writable(&self) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Write("backend unavailable".to_owned()));
        }
        Ok(())
    }

    /// Full materialized feed, newest first. Records without a usable
    /// timestamp sort last.
    async fn snapshot(&self) -> Vec<Post> {
        let documents = self.documents.read().await;
        let mut posts: Vec<Post> = documents.values().map(Document::to_post).collect();
        posts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        posts
    }

    async fn publish(&self) {
        let snapshot = self.snapshot().await;
        // Ignore send errors (no live queries).
        let _ = self.snapshots.send(snapshot);
    }
}

impl Default for MemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn create(&self, draft: PostDraft) -> Result<String, StoreError> {
        self.check_writable()?;

        let id = Uuid::new_v4().to_string();
        let document = Document::from_draft(id.clone(), draft, Utc::now());
        self.documents.write().await.insert(id.clone(), document);

        tracing::debug!(post_id = %id, "Post created");
        self.publish().await;
        Ok(id)
    }

    async fn update(&self, id: &str, title: &str, content: &str) -> Result<(), StoreError> {
        self.check_writable()?;

        {
            let mut documents = self.documents.write().await;
            let document = documents
                .get_mut(id)
                .ok_or_else(|| StoreError::Write(format!("no document with id {id}")))?;
            document
                .fields
                .insert(FIELD_TITLE.to_owned(), Value::String(title.to_owned()));
            document
                .fields
                .insert(FIELD_CONTENT.to_owned(), Value::String(content.to_owned()));
        }

        tracing::debug!(post_id = %id, "Post updated");
        self.publish().await;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.check_writable()?;

        let removed = self.documents.write().await.remove(id).is_some();
        if removed {
            tracing::debug!(post_id = %id, "Post deleted");
            self.publish().await;
        } else {
            // Deleting an id that no longer exists is a success.
            tracing::debug!(post_id = %id, "Delete of missing post ignored");
        }
        Ok(())
    }

    async fn subscribe_all(&self, handler: SnapshotHandler) -> Result<Subscription, StoreError> {
        let mut changes = self.snapshots.subscribe();
        let initial = self.snapshot().await;
        let (cancel_tx, mut cancel_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            // A cancel that lands before the first delivery suppresses
            // even the initial snapshot.
            tokio::select! {
                biased;

                _ = &mut cancel_rx => {
                    tracing::debug!("Live query stopped");
                    return;
                }
                () = handler(initial) => {}
            }

            loop {
                tokio::select! {
                    biased;

                    _ = &mut cancel_rx => break,
                    received = changes.recv() => match received {
                        Ok(snapshot) => handler(snapshot).await,
                        Err(broadcast::error::RecvError::Lagged(count)) => {
                            tracing::warn!(lagged = count, "Live query fell behind; stale snapshots skipped");
                        }
                        Err(broadcast::error::RecvError::Closed) => break,
                    },
                }
            }

            tracing::debug!("Live query stopped");
        });

        Ok(Subscription::new(move || {
            let _ = cancel_tx.send(());
        }))
    }
}
