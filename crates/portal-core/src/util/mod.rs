//! Formatting and validation helpers shared by portal views.
//!
//! # Modules
//!
//! - [`colors`]: Tag colors for HTTP methods, statuses, and names
//! - [`numbers`]: Thousands separators, file sizes, currency
//! - [`strings`]: Truncation and case conversion
//! - [`time`]: Timestamp formatting and relative times
//! - [`validation`]: Email, phone, URL, and password checks

pub mod colors;
pub mod numbers;
pub mod strings;
pub mod time;
pub mod validation;
