//! Storage backends

mod memory;
mod traits;

pub use memory::InMemoryStore;
pub use traits::{ClientStorage, StorageResult};
