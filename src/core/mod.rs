//! Core domain logic for the pulp indexer.
//!
//! Protocol-agnostic: nothing in this module knows about the CLI.
//! The pipeline is normalize → chunk → accumulate, driven by
//! [`builder::IndexBuilder`] over the [`pdf::DocumentReader`]
//! capability.

pub mod builder;
pub mod chunker;
pub mod config;
pub mod error;
pub mod normalize;
pub mod pdf;
pub mod types;
