//! # Corkboard Infrastructure
//!
//! Concrete implementations of the ports defined in `corkboard-core`.
//! The only adapter today is an in-process document store that emulates
//! the hosted backend's observable contract: add/update/delete by id
//! plus full-snapshot live queries.

pub mod store;

pub use store::MemoryPostStore;
