//! Collection pipeline for the poetry corpus collector.
//!
//! This crate turns a directory of poem JSON files into newline-joined
//! training text: glob → parse → flatten → sample → write.

pub mod collector;
pub mod progress;
pub mod sampler;
