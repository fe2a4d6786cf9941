//! Date resolution
//!
//! [`Date`] runs the pattern catalog over one string and records what it
//! found. It is a plain value: built once, never mutated.

use std::fmt::Write;
use std::ops::Range;

use chrono::format::StrftimeItems;
use chrono::{DateTime, NaiveDate, Utc};

use crate::pattern::{self, DateMatch, DatePattern};
use crate::settings::{self, Settings};

/// A date resolved from a string
///
/// # Example
///
/// ```
/// use neatdate::date::Date;
/// use neatdate::settings::Settings;
///
/// let settings = Settings::with_date_format("%Y, %b %d");
/// let date = Date::with_settings("January 13,2020", None, &settings);
///
/// assert_eq!(date.found_string.as_deref(), Some("January 13,2020"));
/// assert_eq!(date.reformatted_date().as_deref(), Some("2020, Jan 13"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Date {
    /// Input string, verbatim
    pub original_string: String,
    /// Substring the winning pattern matched, if any
    pub found_string: Option<String>,
    /// Byte range of `found_string` within `original_string`
    pub found_range: Option<Range<usize>>,
    /// Resolved calendar date
    pub date: Option<NaiveDate>,
    /// Reference instant supplied by the caller
    pub ctime: Option<DateTime<Utc>>,
    /// Pattern that produced `found_string`
    pub pattern: Option<DatePattern>,
    date_format: String,
}

impl Date {
    /// Resolve a string with the default settings
    pub fn new(string: &str, ctime: Option<DateTime<Utc>>) -> Self {
        Self::with_settings(string, ctime, &Settings::default())
    }

    /// Resolve a string
    ///
    /// Patterns are tried in priority order and the first match wins. With
    /// no match, the date falls back to the calendar day of `ctime` (and
    /// `found_string` stays empty, since nothing was found in the text).
    pub fn with_settings(string: &str, ctime: Option<DateTime<Utc>>, settings: &Settings) -> Self {
        let reference = ctime.map(|instant| instant.date_naive());

        match pattern::find_first(string, reference) {
            Some((pattern, found)) => {
                tracing::debug!(
                    input = string,
                    pattern = pattern.name(),
                    found = found.found_string.as_str(),
                    date = %found.date,
                    "date found"
                );
                Self::from_match(string, Some((pattern, found)), ctime, settings)
            }
            None => {
                let mut resolved = Self::from_match(string, None, ctime, settings);
                if let Some(date) = reference {
                    tracing::debug!(input = string, %date, "no date in text, using reference");
                    resolved.date = Some(date);
                }
                resolved
            }
        }
    }

    /// Resolve a string with a single named pattern instead of the whole catalog
    ///
    /// No fallback to `ctime` happens here: if the pattern does not match,
    /// `date` is `None`.
    pub fn with_pattern(
        string: &str,
        pattern: DatePattern,
        ctime: Option<DateTime<Utc>>,
        settings: &Settings,
    ) -> Self {
        let found = pattern.find(string, ctime.map(|instant| instant.date_naive()));
        Self::from_match(string, found.map(|m| (pattern, m)), ctime, settings)
    }

    fn from_match(
        string: &str,
        found: Option<(DatePattern, DateMatch)>,
        ctime: Option<DateTime<Utc>>,
        settings: &Settings,
    ) -> Self {
        let (pattern, found) = found.unzip();

        Self {
            original_string: string.to_string(),
            date: found.as_ref().map(|m| m.date),
            found_range: found.as_ref().map(|m| m.range.clone()),
            found_string: found.map(|m| m.found_string),
            ctime,
            pattern,
            date_format: settings.date_format.clone(),
        }
    }

    /// Whether a pattern matched text in the string
    pub fn is_found(&self) -> bool {
        self.found_string.is_some()
    }

    /// The resolved date rendered with the configured output format
    ///
    /// `None` when there is no date or the format is empty.
    pub fn reformatted_date(&self) -> Option<String> {
        reformat(&self.date?, &self.date_format)
    }
}

/// Render a date with a strftime-style format
///
/// Returns `None` for an empty format, and for a format chrono cannot parse.
pub fn reformat(date: &NaiveDate, format: &str) -> Option<String> {
    if format.is_empty() {
        return None;
    }
    if !settings::is_valid_format(format) {
        tracing::warn!(format, "ignoring invalid date format");
        return None;
    }

    let mut rendered = String::new();
    write!(rendered, "{}", date.format_with_items(StrftimeItems::new(format))).ok()?;
    Some(rendered)
}
