//! termsift - free-text search query normalizing and filter building
//!
//! Turns a raw search box string into normalized terms and then into a
//! boolean filter expression: one OR group per term across the searched
//! fields, with the groups ANDed together.
//!
//! # Architecture
//!
//! - **core**: Domain logic
//!   - search (tokenizer, builder, expression, in-memory and SQL adapters)
//!   - records (record loading for the in-memory adapter)
//!   - config, error, xdg
//!
//! - **cli**: clap adapter (depends on core)
//!
//! # Example
//!
//! ```
//! use termsift::core::search::{build_search_query, normalize_query};
//!
//! assert_eq!(normalize_query("HELLO \"big   world\""), vec!["hello", "big world"]);
//!
//! let query = build_search_query("red car", &["title", "brand__title"]).unwrap();
//! assert_eq!(query.terms(), vec!["red", "car"]);
//! ```

// Core domain logic
pub mod core;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{Result, TermsiftError};
pub use core::search::{
    build_search_query, normalize_query, QueryExpression, SearchQueryBuilder, Term,
};
