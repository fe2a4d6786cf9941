//! neatdate library
//!
//! Finds a calendar date embedded in free text, typically a filename.
//! This library provides functionality to:
//! - Look up English month names and abbreviations
//! - Match a catalog of named date patterns in priority order
//! - Resolve relative terms ("yesterday", "last month") against a reference instant
//! - Reformat the resolved date with a strftime-style format
//! - Suggest date-prefixed filenames
//!
//! # Example
//!
//! ```
//! use neatdate::date::Date;
//!
//! let date = Date::new("a file with a date 2020-11-01", None);
//!
//! assert_eq!(date.found_string.as_deref(), Some("2020-11-01"));
//! assert_eq!(date.reformatted_date().as_deref(), Some("2020-11-01"));
//! ```

pub mod error;
pub mod month;
pub mod pattern;
pub mod date;
pub mod settings;
pub mod rename;

// Re-export commonly used items
pub use error::{Error, Result};
pub use date::Date;
pub use pattern::{DateMatch, DatePattern};
pub use settings::Settings;
