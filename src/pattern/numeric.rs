//! Ambiguous numeric dates
//!
//! A run like `60425` or `6/4/25` has no fixed field widths. The caller picks
//! the field order; this module enumerates the possible widths for that order
//! and keeps the first split that is a real calendar date.

use chrono::NaiveDate;

/// Order in which day, month and year appear in the text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOrder {
    /// European: day, month, year
    DayMonthYear,
    /// US: month, day, year
    MonthDayYear,
    /// Japanese: year, month, day
    YearMonthDay,
}

/// Width of each field in a candidate split, in text order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Split {
    first: usize,
    second: usize,
    third: usize,
}

impl FieldOrder {
    /// Assign three textual fields to (year, month, day)
    fn arrange<'a>(&self, first: &'a str, second: &'a str, third: &'a str) -> (&'a str, &'a str, &'a str) {
        match self {
            FieldOrder::DayMonthYear => (third, second, first),
            FieldOrder::MonthDayYear => (third, first, second),
            FieldOrder::YearMonthDay => (first, second, third),
        }
    }

    fn year_first(&self) -> bool {
        matches!(self, FieldOrder::YearMonthDay)
    }

    /// Candidate widths for a bare digit run, most specific first
    ///
    /// Four-digit years are tried before two-digit ones, and zero-padded
    /// day/month fields before single digits.
    fn splits(&self, len: usize) -> Vec<Split> {
        let mut splits = Vec::new();
        for year in [4, 2] {
            for leading in [2, 1] {
                let Some(trailing) = len.checked_sub(year + leading) else {
                    continue;
                };
                if !(1..=2).contains(&trailing) {
                    continue;
                }
                let split = if self.year_first() {
                    Split { first: year, second: leading, third: trailing }
                } else {
                    Split { first: leading, second: trailing, third: year }
                };
                splits.push(split);
            }
        }
        splits
    }
}

/// Resolve three separated fields (`6/4/25`, `2025 06 04`) in the given order
pub fn resolve_fields(order: FieldOrder, first: &str, second: &str, third: &str) -> Option<NaiveDate> {
    let (year, month, day) = order.arrange(first, second, third);
    build_date(year, month, day)
}

/// Resolve an unseparated digit run (`60425`, `20250604`) in the given order
///
/// Tries every plausible field split and returns the first valid date.
pub fn resolve_run(order: FieldOrder, digits: &str) -> Option<NaiveDate> {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    order.splits(digits.len()).into_iter().find_map(|split| {
        let first = &digits[..split.first];
        let second = &digits[split.first..split.first + split.second];
        let third = &digits[split.first + split.second..];
        let date = resolve_fields(order, first, second, third);
        if date.is_none() {
            tracing::trace!(digits, first, second, third, "rejected split");
        }
        date
    })
}

/// Interpret a year field: four digits in 1900..=2099, or two digits as 20yy
pub fn parse_year(field: &str) -> Option<i32> {
    let value: i32 = field.parse().ok()?;
    match field.len() {
        4 if (1900..=2099).contains(&value) => Some(value),
        2 => Some(2000 + value),
        _ => None,
    }
}

/// Build a date from textual fields, rejecting impossible values
fn build_date(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    if !(1..=2).contains(&month.len()) || !(1..=2).contains(&day.len()) {
        return None;
    }
    let year = parse_year(year)?;
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
