//! # Corkboard Core
//!
//! The domain layer of the corkboard posting client.
//! This crate contains the entities and port definitions with zero
//! infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::StoreError;
