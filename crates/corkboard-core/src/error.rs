//! Store-level error types.

use thiserror::Error;

/// Failures surfaced by the document store.
///
/// Connectivity, permission, and backend errors all collapse into these
/// two kinds carrying a human-readable message. Callers convert them to
/// display strings at the UI boundary; nothing retries.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("write failed: {0}")]
    Write(String),

    #[error("read failed: {0}")]
    Read(String),
}
