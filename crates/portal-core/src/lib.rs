//! Portal Core: shared types, traits, errors, and utilities.
//!
//! This crate provides the foundational types used across all portal crates.
//! It has no internal portal dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`traits`]: Configuration abstraction
//! - [`util`]: Formatting and validation helpers

pub mod error;
pub mod traits;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use traits::ConfigProvider;
