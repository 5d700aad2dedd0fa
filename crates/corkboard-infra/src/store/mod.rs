//! Document store adapters.

mod document;
mod memory;

pub use document::Document;
pub use memory::MemoryPostStore;
