//! Shared types, error model, and configuration for the poetry corpus collector.
//!
//! This crate is the foundation depended on by the other workspace crates.
//! It provides:
//! - [`CorpusError`], the unified error type
//! - Domain types ([`PoemRecord`], [`Corpus`])
//! - Runtime configuration ([`CollectConfig`])

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{CollectConfig, DEFAULT_OUTPUT_DIR, DEFAULT_SAMPLE_SIZE};
pub use error::{CorpusError, Result};
pub use types::{Corpus, PoemRecord};
