//! Settings store adapters

mod memory;

pub use memory::InMemorySettingsStore;
