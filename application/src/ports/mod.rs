//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod addon_catalog;
pub mod settings_script;
pub mod settings_store;
