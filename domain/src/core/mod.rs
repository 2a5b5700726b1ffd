//! Core domain concepts shared across all subdomains.
//!
//! - [`error::SettingsError`]: validation and store errors

pub mod error;
