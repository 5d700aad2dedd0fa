//! Test doubles shared by the controller tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;

use corkboard_core::domain::{CurrentUser, Post, PostDraft};
use corkboard_core::error::StoreError;
use corkboard_core::ports::{PostStore, SnapshotHandler, Subscription};

/// Calls observed by the recording store.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    Create(PostDraft),
    Update {
        id: String,
        title: String,
        content: String,
    },
    Delete(String),
}

/// Store double that records every call and optionally fails writes.
#[derive(Default)]
pub struct RecordingStore {
    calls: Mutex<Vec<StoreCall>>,
    fail_writes: AtomicBool,
}

impl RecordingStore {
    pub fn failing() -> Self {
        let store = Self::default();
        store.fail_writes.store(true, Ordering::SeqCst);
        store
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Write("backend unavailable".to_owned()));
        }
        Ok(())
    }

    fn record(&self, call: StoreCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl PostStore for RecordingStore {
    async fn create(&self, draft: PostDraft) -> Result<String, StoreError> {
        self.check()?;
        self.record(StoreCall::Create(draft));
        Ok("post-1".to_owned())
    }

    async fn update(&self, id: &str, title: &str, content: &str) -> Result<(), StoreError> {
        self.check()?;
        self.record(StoreCall::Update {
            id: id.to_owned(),
            title: title.to_owned(),
            content: content.to_owned(),
        });
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.check()?;
        self.record(StoreCall::Delete(id.to_owned()));
        Ok(())
    }

    async fn subscribe_all(&self, _handler: SnapshotHandler) -> Result<Subscription, StoreError> {
        Ok(Subscription::new(|| {}))
    }
}

pub fn signed_in_user() -> CurrentUser {
    CurrentUser {
        uid: "u1".to_owned(),
        display_name: Some("Ada".to_owned()),
        email: Some("ada@example.com".to_owned()),
    }
}

pub fn post_by(author_id: &str) -> Post {
    Post {
        id: format!("post-{author_id}"),
        title: "A title".to_owned(),
        content: "Some content\nwith a second line".to_owned(),
        author: "Someone".to_owned(),
        author_id: author_id.to_owned(),
        timestamp: Some(Utc::now()),
    }
}
