//! Sample storage backends.

mod memory;

pub use memory::InMemorySampleStore;
