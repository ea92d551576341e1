//! Core domain logic (front-end agnostic)
//!
//! This module contains all logic that is independent of the command-line
//! front end.
//!
//! # Architecture
//!
//! - **search**: Tokenizer, query builder, expression tree and adapters
//! - **records**: JSON / JSON Lines record loading
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **xdg**: XDG directory handling

pub mod config;
pub mod error;
pub mod records;
pub mod search;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{Result, TermsiftError};
