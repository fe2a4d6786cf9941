//! Resolver settings
//!
//! A `Settings` value is built once (CLI flag, environment, or default) and
//! handed to each [`Date`](crate::date::Date) by reference. Nothing mutates it
//! afterwards, so resolvers running on different threads never see each
//! other's configuration.

use chrono::format::{Item, StrftimeItems};

use crate::error::{Error, Result};

/// Default output format for reformatted dates
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Environment variable consulted by the CLI for the output format
pub const DATE_FORMAT_ENV: &str = "NEATDATE_DATE_FORMAT";

/// Output settings for resolved dates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// strftime-style format for `reformatted_date`; empty disables reformatting
    pub date_format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl Settings {
    /// Settings with a specific output format
    pub fn with_date_format(date_format: impl Into<String>) -> Self {
        Self {
            date_format: date_format.into(),
        }
    }

    /// Whether reformatting is switched off
    pub fn reformatting_disabled(&self) -> bool {
        self.date_format.is_empty()
    }

    /// Check that the format only uses directives chrono understands
    ///
    /// An empty format is valid: it just disables reformatting.
    pub fn validate(&self) -> Result<()> {
        if is_valid_format(&self.date_format) {
            Ok(())
        } else {
            Err(Error::InvalidDateFormat(self.date_format.clone()))
        }
    }
}

/// True when every directive in `format` parses
pub(crate) fn is_valid_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}
