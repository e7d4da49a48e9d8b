//! Policy configuration for langcheck.
//!
//! This module defines the `PolicyConfig` loaded from
//! `language-policy.config.json` in the invocation directory. Loading is
//! tolerant: a missing file means an empty baseline, and an unreadable or
//! malformed file degrades to an empty baseline with a warning.

mod baseline;
mod model;
mod operations;
pub mod types;


// Re-export public API
pub use baseline::Baseline;
pub use model::{DEFAULT_CONFIG_FILE, PolicyConfig};
pub use types::FrontMatterParser;
