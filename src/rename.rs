//! Date-prefixed filenames
//!
//! Moves the date found in a filename to the front, rendered with the
//! configured format: `notes 2020-11-01 draft.txt` becomes
//! `2020-11-01-notes draft.txt`. Nothing here touches the filesystem except
//! reading timestamps.

use std::path::Path;

use chrono::{DateTime, Utc};

use crate::date::Date;
use crate::error::{Error, Result};
use crate::settings::Settings;

/// Characters treated as word separators in a filename
const SEPARATORS: &[char] = &['-', '_', '.', ' '];

/// Creation time of a file, or its modification time where creation time
/// is not available
pub fn file_timestamp(path: &Path) -> Result<DateTime<Utc>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let metadata = std::fs::metadata(path)?;
    let time = metadata.created().or_else(|_| metadata.modified())?;
    Ok(DateTime::<Utc>::from(time))
}

/// Suggest a new filename with the date moved to the front
///
/// The date comes from the file stem when one is found there, otherwise
/// from `reference`. Returns `None` when there is no date at all or
/// reformatting is disabled.
pub fn suggest_name(path: &Path, reference: Option<DateTime<Utc>>, settings: &Settings) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    let date = Date::with_settings(stem, reference, settings);
    let prefix = date.reformatted_date()?;

    // Cut out the exact span that matched, not an earlier look-alike
    let mut remainder = stem.to_string();
    if let Some(range) = date.found_range.clone() {
        remainder.replace_range(range, "");
    }
    let remainder = tidy_separators(&remainder);

    let mut name = if remainder.is_empty() {
        prefix
    } else {
        format!("{}-{}", prefix, remainder)
    };

    if let Some(extension) = path.extension().and_then(|e| e.to_str()) {
        name.push('.');
        name.push_str(extension);
    }

    Some(name)
}

/// Suggest a new name for a file on disk, using its timestamp as reference
pub fn suggest_for_file(path: &Path, settings: &Settings) -> Result<Option<String>> {
    let timestamp = file_timestamp(path)?;
    Ok(suggest_name(path, Some(timestamp), settings))
}

/// Collapse each run of separators to its first character and trim the ends
fn tidy_separators(text: &str) -> String {
    let mut tidy = String::with_capacity(text.len());
    let mut previous_was_separator = false;

    for c in text.chars() {
        let is_separator = SEPARATORS.contains(&c);
        if !(is_separator && previous_was_separator) {
            tidy.push(c);
        }
        previous_was_separator = is_separator;
    }

    tidy.trim_matches(SEPARATORS).to_string()
}
