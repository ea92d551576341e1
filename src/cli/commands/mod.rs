//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific
//! CLI command. Commands that take a field list fall back to the configured
//! default fields when none are given.

pub mod build;
pub mod completions;
pub mod config;
pub mod filter;
pub mod normalize;
pub mod sql;

use crate::core::config::Config;

// Re-export argument types for use in mod.rs
pub use build::BuildArgs;
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use filter::FilterArgs;
pub use normalize::NormalizeArgs;
pub use sql::SqlArgs;

/// Fields given on the command line, or the configured defaults
pub fn resolve_fields(fields: &[String], config: &Config) -> Vec<String> {
    if fields.is_empty() {
        config.search.default_fields.clone()
    } else {
        fields.to_vec()
    }
}
