//! Error types for the neatdate library
//!
//! Date matching itself never fails: a string without a recognizable date is
//! simply "no match". These errors cover the host-side operations around it
//! (rule lookup by name, output formats, reference dates, files).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the neatdate library
#[derive(Error, Debug)]
pub enum Error {
    /// No rule with this name exists in the catalog
    #[error("Unknown date pattern: {0}")]
    UnknownPattern(String),

    /// Output format contains a directive chrono does not understand
    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),

    /// Reference date could not be parsed
    #[error("Invalid reference date: {0}")]
    InvalidReference(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Invalid glob pattern
    #[error("Invalid glob pattern: {0}")]
    InvalidGlob(String),

    /// No files matched pattern
    #[error("No files found matching pattern: {0}")]
    NoFilesMatched(String),
}
