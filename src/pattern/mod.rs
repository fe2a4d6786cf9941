//! Date pattern catalog
//!
//! Each [`DatePattern`] variant is one named recognizer. [`DatePattern::ALL`]
//! lists them in priority order: when a string satisfies several rules, the
//! earliest one in that list wins.

pub mod numeric;
pub mod scan;

use std::fmt;
use std::ops::Range;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{Datelike, Days, NaiveDate};
use regex::{Captures, Match, Regex};

use crate::error::{Error, Result};
use crate::month;
use numeric::FieldOrder;
use scan::BoundedMatches;

const YEAR: &str = r"(?:19|20)\d{2}";
const MONTH_NUM: &str = r"0[1-9]|1[0-2]";
const DAY_NUM: &str = r"0[1-9]|[12]\d|3[01]";
const NUM_SEP: &str = r"[-_/. ]?";
const MONTH_NAME: &str = r"jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?";
const WORD_SEP: &str = r"[-_/., ]*";
const ORDINAL: &str = r"(?:st|nd|rd|th)?";

/// Compiled regex for every pattern, indexed by discriminant
static REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    DatePattern::ALL
        .iter()
        .map(|pattern| Regex::new(&pattern.source()).expect("date pattern regex is valid"))
        .collect()
});

/// A date found in a string: the calendar date plus the text it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateMatch {
    /// Resolved calendar date
    pub date: NaiveDate,
    /// Matched substring, verbatim from the input
    pub found_string: String,
    /// Byte range of `found_string` within the input
    pub range: Range<usize>,
}

impl DateMatch {
    fn new(date: NaiveDate, found: Match<'_>) -> Self {
        Self {
            date,
            found_string: found.as_str().to_string(),
            range: found.range(),
        }
    }
}

/// Named date recognizers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatePattern {
    /// `2022-12-31`, `2022_12_31`, `20221231`
    YyyyMmDd,
    /// `2022-31-12`
    YyyyDdMm,
    /// `12-31-2022`, `12312022`
    MmDdYyyy,
    /// `31-12-2022`, `31122022`
    DdMmYyyy,
    /// `1231`, year taken from the reference date
    MmDd,
    /// `3112`, year taken from the reference date
    DdMm,
    /// `March 1st, 2019`, `Oct222019`
    MonthDdYyyy,
    /// `22nd June, 2019`
    DdMonthYyyy,
    /// `sept 4th`, year taken from the reference date
    MonthDd,
    /// `December, 2019`, first of the month
    MonthYyyy,
    /// `2019 December`, first of the month
    YyyyMonth,
    /// Day before month, variable field widths: `6/4/25`, `60425`
    EuAmbiguous,
    /// Month before day, variable field widths
    UsAmbiguous,
    /// Year, month, day with a two- or four-digit year: `25/6/4`
    JpAmbiguous,
    /// `today`, `todays`, `today's`
    Today,
    /// `tomorrow`, `tomorrow's`
    Tomorrow,
    /// `yesterday`, `yesterday's`
    Yesterday,
    /// `last week`, `last_week`, `last.week's`
    LastWeek,
    /// `last month`, first day of the month before the reference month
    LastMonth,
}

impl DatePattern {
    /// Every pattern, in priority order
    pub const ALL: [DatePattern; 19] = [
        DatePattern::YyyyMmDd,
        DatePattern::YyyyDdMm,
        DatePattern::MmDdYyyy,
        DatePattern::DdMmYyyy,
        DatePattern::MmDd,
        DatePattern::DdMm,
        DatePattern::MonthDdYyyy,
        DatePattern::DdMonthYyyy,
        DatePattern::MonthDd,
        DatePattern::MonthYyyy,
        DatePattern::YyyyMonth,
        DatePattern::EuAmbiguous,
        DatePattern::UsAmbiguous,
        DatePattern::JpAmbiguous,
        DatePattern::Today,
        DatePattern::Tomorrow,
        DatePattern::Yesterday,
        DatePattern::LastWeek,
        DatePattern::LastMonth,
    ];

    /// Stable name of the pattern
    pub fn name(&self) -> &'static str {
        match self {
            DatePattern::YyyyMmDd => "yyyy_mm_dd",
            DatePattern::YyyyDdMm => "yyyy_dd_mm",
            DatePattern::MmDdYyyy => "mmddyyyy",
            DatePattern::DdMmYyyy => "ddmmyyyy",
            DatePattern::MmDd => "mm_dd",
            DatePattern::DdMm => "dd_mm",
            DatePattern::MonthDdYyyy => "month_dd_yyyy",
            DatePattern::DdMonthYyyy => "dd_month_yyyy",
            DatePattern::MonthDd => "month_dd",
            DatePattern::MonthYyyy => "month_yyyy",
            DatePattern::YyyyMonth => "yyyy_month",
            DatePattern::EuAmbiguous => "eu_ambiguous",
            DatePattern::UsAmbiguous => "us_ambiguous",
            DatePattern::JpAmbiguous => "jp_ambiguous",
            DatePattern::Today => "today",
            DatePattern::Tomorrow => "tomorrow",
            DatePattern::Yesterday => "yesterday",
            DatePattern::LastWeek => "last_week",
            DatePattern::LastMonth => "last_month",
        }
    }

    /// Whether the pattern can only resolve against a reference date
    pub fn needs_reference(&self) -> bool {
        matches!(
            self,
            DatePattern::MmDd
                | DatePattern::DdMm
                | DatePattern::MonthDd
                | DatePattern::Today
                | DatePattern::Tomorrow
                | DatePattern::Yesterday
                | DatePattern::LastWeek
                | DatePattern::LastMonth
        )
    }

    /// Pattern text opens with a month name
    fn starts_with_month_name(&self) -> bool {
        matches!(
            self,
            DatePattern::MonthDdYyyy | DatePattern::MonthDd | DatePattern::MonthYyyy
        )
    }

    /// Pattern text closes with a month name
    fn ends_with_month_name(&self) -> bool {
        matches!(self, DatePattern::YyyyMonth)
    }

    /// Field order for the ambiguous digit-run patterns
    fn field_order(&self) -> Option<FieldOrder> {
        match self {
            DatePattern::EuAmbiguous => Some(FieldOrder::DayMonthYear),
            DatePattern::UsAmbiguous => Some(FieldOrder::MonthDayYear),
            DatePattern::JpAmbiguous => Some(FieldOrder::YearMonthDay),
            _ => None,
        }
    }

    /// Regex source for this pattern
    fn source(&self) -> String {
        let body = match self {
            DatePattern::YyyyMmDd => format!(
                "(?P<year>{YEAR}){NUM_SEP}(?P<month>{MONTH_NUM}){NUM_SEP}(?P<day>{DAY_NUM})"
            ),
            DatePattern::YyyyDdMm => format!(
                "(?P<year>{YEAR}){NUM_SEP}(?P<day>{DAY_NUM}){NUM_SEP}(?P<month>{MONTH_NUM})"
            ),
            DatePattern::MmDdYyyy => format!(
                "(?P<month>{MONTH_NUM}){NUM_SEP}(?P<day>{DAY_NUM}){NUM_SEP}(?P<year>{YEAR})"
            ),
            DatePattern::DdMmYyyy => format!(
                "(?P<day>{DAY_NUM}){NUM_SEP}(?P<month>{MONTH_NUM}){NUM_SEP}(?P<year>{YEAR})"
            ),
            DatePattern::MmDd => format!("(?P<month>{MONTH_NUM})(?P<day>{DAY_NUM})"),
            DatePattern::DdMm => format!("(?P<day>{DAY_NUM})(?P<month>{MONTH_NUM})"),
            DatePattern::MonthDdYyyy => format!(
                r"(?P<month>{MONTH_NAME}){WORD_SEP}(?P<day>\d{{1,2}}){ORDINAL}{WORD_SEP}(?P<year>{YEAR})"
            ),
            DatePattern::DdMonthYyyy => format!(
                r"(?P<day>\d{{1,2}}){ORDINAL}{WORD_SEP}(?P<month>{MONTH_NAME}){WORD_SEP}(?P<year>{YEAR})"
            ),
            DatePattern::MonthDd => {
                format!(r"(?P<month>{MONTH_NAME}){WORD_SEP}(?P<day>\d{{1,2}}){ORDINAL}")
            }
            DatePattern::MonthYyyy => {
                format!("(?P<month>{MONTH_NAME}){WORD_SEP}(?P<year>{YEAR})")
            }
            DatePattern::YyyyMonth => {
                format!("(?P<year>{YEAR}){WORD_SEP}(?P<month>{MONTH_NAME})")
            }
            DatePattern::EuAmbiguous | DatePattern::UsAmbiguous | DatePattern::JpAmbiguous => {
                r"(?P<first>\d{1,4})[-_/. ](?P<second>\d{1,2})[-_/. ](?P<third>\d{1,4})|(?P<run>\d{4,8})"
                    .to_string()
            }
            DatePattern::Today => "todays?(?:'s)?".to_string(),
            DatePattern::Tomorrow => "tomorrow(?:'s)?".to_string(),
            DatePattern::Yesterday => "yesterday(?:'s)?".to_string(),
            DatePattern::LastWeek => "last[-_. ]?week(?:'s)?".to_string(),
            DatePattern::LastMonth => "last[-_. ]?month(?:'s)?".to_string(),
        };
        format!("(?i){body}")
    }

    fn regex(&self) -> &'static Regex {
        &REGEXES[*self as usize]
    }

    /// Find the first date this pattern recognizes in `text`
    ///
    /// `reference` stands in for "now": it anchors relative terms and supplies
    /// the year for year-less patterns. Without it those patterns never match.
    ///
    /// Scanning policy depends on the pattern:
    ///
    /// - `eu_ambiguous`, `us_ambiguous` and `jp_ambiguous` keep scanning past
    ///   candidates with no valid field split, and return the first one that
    ///   decomposes into a real date.
    /// - Every other pattern looks at its first bounded match only. If that
    ///   match is not a real date (`march 42nd`), the result is `None` even
    ///   when a valid date appears later in the text.
    ///
    /// A match never touches a neighbouring digit, and a month name at either
    /// end of a match never continues a word (`Kumar` is not `mar`).
    pub fn find(&self, text: &str, reference: Option<NaiveDate>) -> Option<DateMatch> {
        if self.needs_reference() && reference.is_none() {
            return None;
        }

        let mut candidates = BoundedMatches::new(self.regex(), text)
            .with_letter_before(self.starts_with_month_name())
            .with_letter_after(self.ends_with_month_name());

        // Ambiguous digit runs scan on, everything else stops at the first candidate
        if self.field_order().is_some() {
            return candidates.find_map(|caps| {
                let date = self.resolve(&caps, reference);
                if date.is_none() {
                    tracing::trace!(pattern = self.name(), candidate = &caps[0], "no valid split");
                }
                date.and_then(|date| Some(DateMatch::new(date, caps.get(0)?)))
            });
        }

        let caps = candidates.next()?;
        let date = self.resolve(&caps, reference);
        if date.is_none() {
            tracing::trace!(pattern = self.name(), candidate = &caps[0], "invalid calendar date");
        }
        let whole = caps.get(0)?;
        date.map(|date| DateMatch::new(date, whole))
    }

    /// Turn a raw match into a calendar date
    fn resolve(&self, caps: &Captures, reference: Option<NaiveDate>) -> Option<NaiveDate> {
        match self {
            DatePattern::YyyyMmDd
            | DatePattern::YyyyDdMm
            | DatePattern::MmDdYyyy
            | DatePattern::DdMmYyyy => {
                NaiveDate::from_ymd_opt(year(caps)?, number(caps, "month")?, number(caps, "day")?)
            }
            DatePattern::MmDd | DatePattern::DdMm => {
                NaiveDate::from_ymd_opt(reference?.year(), number(caps, "month")?, number(caps, "day")?)
            }
            DatePattern::MonthDdYyyy | DatePattern::DdMonthYyyy => {
                NaiveDate::from_ymd_opt(year(caps)?, month_name(caps)?, number(caps, "day")?)
            }
            DatePattern::MonthDd => {
                NaiveDate::from_ymd_opt(reference?.year(), month_name(caps)?, number(caps, "day")?)
            }
            DatePattern::MonthYyyy | DatePattern::YyyyMonth => {
                NaiveDate::from_ymd_opt(year(caps)?, month_name(caps)?, 1)
            }
            DatePattern::EuAmbiguous | DatePattern::UsAmbiguous | DatePattern::JpAmbiguous => {
                let order = self.field_order()?;
                match caps.name("run") {
                    Some(run) => numeric::resolve_run(order, run.as_str()),
                    None => numeric::resolve_fields(
                        order,
                        caps.name("first")?.as_str(),
                        caps.name("second")?.as_str(),
                        caps.name("third")?.as_str(),
                    ),
                }
            }
            DatePattern::Today => reference,
            DatePattern::Tomorrow => reference?.succ_opt(),
            DatePattern::Yesterday => reference?.pred_opt(),
            DatePattern::LastWeek => reference?.checked_sub_days(Days::new(7)),
            DatePattern::LastMonth => reference?.with_day(1)?.pred_opt()?.with_day(1),
        }
    }
}

impl fmt::Display for DatePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DatePattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        DatePattern::ALL
            .into_iter()
            .find(|pattern| pattern.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownPattern(s.to_string()))
    }
}

/// Try every pattern in priority order; the first match wins
pub fn find_first(text: &str, reference: Option<NaiveDate>) -> Option<(DatePattern, DateMatch)> {
    DatePattern::ALL
        .into_iter()
        .find_map(|pattern| pattern.find(text, reference).map(|found| (pattern, found)))
}

fn number(caps: &Captures, group: &str) -> Option<u32> {
    caps.name(group)?.as_str().parse().ok()
}

fn year(caps: &Captures) -> Option<i32> {
    numeric::parse_year(caps.name("year")?.as_str())
}

fn month_name(caps: &Captures) -> Option<u32> {
    month::month_number(caps.name("month")?.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Fixed "now" for relative and year-less patterns
    fn reference() -> NaiveDate {
        ymd(2024, 3, 15)
    }

    fn check(pattern: &str, text: &str, expected: Option<(NaiveDate, &str)>) {
        let pattern: DatePattern = pattern.parse().unwrap();
        let found = pattern.find(text, Some(reference()));
        let found = found.as_ref().map(|m| (m.date, m.found_string.as_str()));
        assert_eq!(found, expected, "{} on {:?}", pattern, text);
    }

    #[test]
    fn test_names_round_trip() {
        for pattern in DatePattern::ALL {
            assert_eq!(pattern.name().parse::<DatePattern>().unwrap(), pattern);
            assert_eq!(pattern.to_string(), pattern.name());
        }
        assert!(matches!(
            "not_a_pattern".parse::<DatePattern>(),
            Err(Error::UnknownPattern(_))
        ));
    }

    #[test]
    fn test_all_is_in_declared_order() {
        let names: Vec<&str> = DatePattern::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(
            names,
            vec![
                "yyyy_mm_dd", "yyyy_dd_mm", "mmddyyyy", "ddmmyyyy", "mm_dd", "dd_mm",
                "month_dd_yyyy", "dd_month_yyyy", "month_dd", "month_yyyy", "yyyy_month",
                "eu_ambiguous", "us_ambiguous", "jp_ambiguous", "today", "tomorrow",
                "yesterday", "last_week", "last_month",
            ]
        );
        for (index, pattern) in DatePattern::ALL.iter().enumerate() {
            assert_eq!(*pattern as usize, index);
        }
    }

    #[test]
    fn test_year_month_day() {
        check("yyyy_mm_dd", "2022/12/31", Some((ymd(2022, 12, 31), "2022/12/31")));
        check("yyyy_mm_dd", "20221231", Some((ymd(2022, 12, 31), "20221231")));
        check("yyyy_mm_dd", "file 2022-12-31", Some((ymd(2022, 12, 31), "2022-12-31")));
        check("yyyy_mm_dd", "file 2022-12-32", None);
        check("yyyy_mm_dd", "file 2022-12", None);
        check("yyyy_mm_dd", "file_2022_01_01_somefile", Some((ymd(2022, 1, 1), "2022_01_01")));
        check("yyyy_mm_dd", "string with no date", None);
        check("yyyy_mm_dd", "this not a valid date 2019-99-01 and more text", None);
        check("yyyy_mm_dd", "2023-02-29", None);
    }

    #[test]
    fn test_year_day_month() {
        check("yyyy_dd_mm", "2022/31/12", Some((ymd(2022, 12, 31), "2022/31/12")));
        check("yyyy_dd_mm", "20223112", Some((ymd(2022, 12, 31), "20223112")));
        check("yyyy_dd_mm", "file 2022-12-31", None);
        check("yyyy_dd_mm", "file 2022-12-32", None);
        check("yyyy_dd_mm", "file 2022-12", None);
        check("yyyy_dd_mm", "file 2022-31-12", Some((ymd(2022, 12, 31), "2022-31-12")));
        check("yyyy_dd_mm", "file_2022_01_01_somefile", Some((ymd(2022, 1, 1), "2022_01_01")));
        check("yyyy_dd_mm", "string with no date", None);
        check("yyyy_dd_mm", "this not a valid date 2019-99-01 and more text", None);
    }

    #[test]
    fn test_month_day_year() {
        check("mmddyyyy", "file 2022-12", None);
        check("mmddyyyy", "foo 01-22-2019 bar", Some((ymd(2019, 1, 22), "01-22-2019")));
        check("mmddyyyy", "foo 12112022 bar", Some((ymd(2022, 12, 11), "12112022")));
        check("mmddyyyy", "foo 12232022 bar", Some((ymd(2022, 12, 23), "12232022")));
        check("mmddyyyy", "04_14_2025 foo bar baz", Some((ymd(2025, 4, 14), "04_14_2025")));
        check("mmddyyyy", "foo 30122022 bar", None);
        check("mmddyyyy", "string with no date", None);
    }

    #[test]
    fn test_day_month_year() {
        check("ddmmyyyy", "file 2022-12", None);
        check("ddmmyyyy", "foo 01-22-2019 bar", None);
        check("ddmmyyyy", "foo 12112022 bar", Some((ymd(2022, 11, 12), "12112022")));
        check("ddmmyyyy", "foo 12232022 bar", None);
        check("ddmmyyyy", "foo 2122022 bar", None);
        check("ddmmyyyy", "foo 22-01-2019 bar", Some((ymd(2019, 1, 22), "22-01-2019")));
        check("ddmmyyyy", "foo 30122022 bar", Some((ymd(2022, 12, 30), "30122022")));
        check("ddmmyyyy", "string with no date", None);
        check("ddmmyyyy", "30-02-2022", None);
    }

    #[test]
    fn test_month_day_without_year() {
        check("mm_dd", "1201", Some((ymd(2024, 12, 1), "1201")));
        check("mm_dd", "1301", None);
        check("mm_dd", "file 2022-12", None);
        check("mm_dd", "foo 12232022 bar", None);
        check("mm_dd", "string with no date", None);
        // Feb 29 only exists in leap reference years
        check("mm_dd", "0229", Some((ymd(2024, 2, 29), "0229")));
        assert_eq!(DatePattern::MmDd.find("0229", Some(ymd(2023, 6, 1))), None);
    }

    #[test]
    fn test_day_month_without_year() {
        check("dd_mm", "1201", Some((ymd(2024, 1, 12), "1201")));
        check("dd_mm", "1301", Some((ymd(2024, 1, 13), "1301")));
        check("dd_mm", "3301", None);
        check("dd_mm", "file 202212", None);
        check("dd_mm", "foo 12232022 bar", None);
        check("dd_mm", "string with no date", None);
    }

    #[test]
    fn test_month_name_day_year() {
        check("month_dd_yyyy", "file 2022-12-31", None);
        check("month_dd_yyyy", "file 2022-12-32", None);
        check("month_dd_yyyy", "file 2022-12", None);
        check("month_dd_yyyy", "foo march 1st, 2019", Some((ymd(2019, 3, 1), "march 1st, 2019")));
        check("month_dd_yyyy", "foo Oct 22, 2019 bar", Some((ymd(2019, 10, 22), "Oct 22, 2019")));
        check("month_dd_yyyy", "foo Oct222019 bar", Some((ymd(2019, 10, 22), "Oct222019")));
        check("month_dd_yyyy", "hello 23 march, 2020 world", None);
        check("month_dd_yyyy", "jan 3rd, 2022", Some((ymd(2022, 1, 3), "jan 3rd, 2022")));
        check("month_dd_yyyy", "march 3rd 2022", Some((ymd(2022, 3, 3), "march 3rd 2022")));
        check("month_dd_yyyy", "march 42nd, 2022", None);
        check("month_dd_yyyy", "string with no date", None);
        check("month_dd_yyyy", "this not a valid date 2019-99-01 and more text", None);
        check("month_dd_yyyy", "January 13,2020", Some((ymd(2020, 1, 13), "January 13,2020")));
        check("month_dd_yyyy", "Kumar 3, 2019", None);
        check("month_dd_yyyy", "mobjan 5th 2020", None);
    }

    #[test]
    fn test_day_month_name_year() {
        check("dd_month_yyyy", "22nd June, 2019 and more text", Some((ymd(2019, 6, 22), "22nd June, 2019")));
        check("dd_month_yyyy", "file 2022-12-31", None);
        check("dd_month_yyyy", "file 2022-12-32", None);
        check("dd_month_yyyy", "file 2022-12", None);
        check("dd_month_yyyy", "hello 23 march, 2020 world", Some((ymd(2020, 3, 23), "23 march, 2020")));
        check("dd_month_yyyy", "march 3rd 2022", None);
        check("dd_month_yyyy", "march 42nd, 2022", None);
        check("dd_month_yyyy", "string with no date", None);
        check("dd_month_yyyy", "this not a valid date 2019-99-01 and more text", None);
        check("dd_month_yyyy", "13th, jan 2019", Some((ymd(2019, 1, 13), "13th, jan 2019")));
        check("dd_month_yyyy", "30 feb 2019", None);
    }

    #[test]
    fn test_month_name_day() {
        check("month_dd", "file 2022-12-31", None);
        check("month_dd", "file 2022-12-32", None);
        check("month_dd", "file 2022-12", None);
        check("month_dd", "march 3rd 2022", Some((ymd(2024, 3, 3), "march 3rd")));
        check("month_dd", "march 42nd, 2022", None);
        check("month_dd", "sep 4", Some((ymd(2024, 9, 4), "sep 4")));
        check("month_dd", "sep 42nd", None);
        check("month_dd", "sept 4th", Some((ymd(2024, 9, 4), "sept 4th")));
        check("month_dd", "string with no date", None);
        check("month_dd", "this not a valid date 2019-99-01 and more text", None);
        check("month_dd", "Osep 4", None);
    }

    #[test]
    fn test_month_name_year() {
        check("month_yyyy", "file 2022-12-31", None);
        check("month_yyyy", "file 2022-12-32", None);
        check("month_yyyy", "file 2022-12", None);
        check("month_yyyy", "mar2022", Some((ymd(2022, 3, 1), "mar2022")));
        check("month_yyyy", "march 3rd 2022", None);
        check("month_yyyy", "march 42nd, 2022", None);
        check("month_yyyy", "sep 2025", Some((ymd(2025, 9, 1), "sep 2025")));
        check("month_yyyy", "string with no date", None);
        check("month_yyyy", "this not a valid date 2019-99-01 and more text", None);
        check("month_yyyy", "xxx_December,-2019/aaa", Some((ymd(2019, 12, 1), "December,-2019")));
        // Month names hidden inside words
        check("month_yyyy", "Kumar 2019 report", None);
        check("month_yyyy", "Bojan 2020 photos", None);
        check("month_yyyy", "Kumar 2019 and mar 2020", Some((ymd(2020, 3, 1), "mar 2020")));
    }

    #[test]
    fn test_year_month_name() {
        check("yyyy_month", "2022mar", Some((ymd(2022, 3, 1), "2022mar")));
        check("yyyy_month", "2025 sep", Some((ymd(2025, 9, 1), "2025 sep")));
        check("yyyy_month", "file 2022-12", None);
        check("yyyy_month", "march 3rd 2022", None);
        check("yyyy_month", "march 42nd, 2022", None);
        check("yyyy_month", "string with no date", None);
        check("yyyy_month", "this not a valid date 2019-99-01 and more text", None);
        check("yyyy_month", "xxx_2019, December,-2019/aaa", Some((ymd(2019, 12, 1), "2019, December")));
        check("yyyy_month", "2020 mayor election", None);
    }

    #[test]
    fn test_fixed_patterns_stop_at_first_candidate() {
        check("yyyy_mm_dd", "2023-02-30 then 2023-03-01", None);
        check("month_dd_yyyy", "march 42nd, 2022 or march 4th, 2022", None);
        check("eu_ambiguous", "04 26 25 then 06 04 25", Some((ymd(2025, 4, 6), "06 04 25")));
    }

    #[test]
    fn test_match_range() {
        let found = DatePattern::MmDd.find("11201 1201", Some(reference())).unwrap();
        assert_eq!(found.range, 6..10);
        assert_eq!(found.found_string, "1201");
    }

    #[test]
    fn test_eu_ambiguous() {
        check("eu_ambiguous", "26/04/2025", Some((ymd(2025, 4, 26), "26/04/2025")));
        let test_cases = vec![
            "6/4/25", "6425", "60425", "06425", "642025", "0642025", "06042025", "060425", "06 04 2025",
        ];
        for text in test_cases {
            check("eu_ambiguous", text, Some((ymd(2025, 4, 6), text)));
        }
        check("eu_ambiguous", "04 26 25", None);
        check("eu_ambiguous", "042625", None);
        check("eu_ambiguous", "26 04 25", Some((ymd(2025, 4, 26), "26 04 25")));
    }

    #[test]
    fn test_us_ambiguous() {
        check("us_ambiguous", "04/26/2025", Some((ymd(2025, 4, 26), "04/26/2025")));
        let test_cases = vec![
            "6/4/25", "6425", "60425", "06425", "642025", "0642025", "06042025", "060425", "06 04 2025",
        ];
        for text in test_cases {
            check("us_ambiguous", text, Some((ymd(2025, 6, 4), text)));
        }
        check("us_ambiguous", "260425", None);
        check("us_ambiguous", "26 04 25", None);
        check("us_ambiguous", "26 04 2025", None);
    }

    #[test]
    fn test_jp_ambiguous() {
        check("jp_ambiguous", "2025/04/26", Some((ymd(2025, 4, 26), "2025/04/26")));
        let test_cases = vec![
            "25/6/4", "250604", "25604", "25064", "202564", "2025064", "20250604", "2025 06 04",
        ];
        for text in test_cases {
            check("jp_ambiguous", text, Some((ymd(2025, 6, 4), text)));
        }
        check("jp_ambiguous", "252604", None);
        check("jp_ambiguous", "25 26 04", None);
    }

    #[test]
    fn test_ambiguous_keeps_scanning() {
        // First run is not a valid day-month-year, the second one is
        check("eu_ambiguous", "042625 and 060425", Some((ymd(2025, 4, 6), "060425")));
        check("us_ambiguous", "26 04 25 then 6/4/25", Some((ymd(2025, 6, 4), "6/4/25")));
    }

    #[test]
    fn test_relative_terms() {
        let today = reference();
        check("today", "file 202212", None);
        check("today", "foo 12232022 bar", None);
        check("today", "fooTodayBar", Some((today, "Today")));
        check("today", "string with no date", None);
        check("today", "Todays agenda", Some((today, "Todays")));

        check("tomorrow", "file 202212", None);
        check("tomorrow", "footomorrow bar", Some((ymd(2024, 3, 16), "tomorrow")));
        check("tomorrow", "tomorrow's agenda", Some((ymd(2024, 3, 16), "tomorrow's")));

        check("yesterday", "foo 12232022 bar", None);
        check("yesterday", "fooyesterday.bar", Some((ymd(2024, 3, 14), "yesterday")));
        check("yesterday", "Yesterday's agenda", Some((ymd(2024, 3, 14), "Yesterday's")));

        check("last_week", "file 202212", None);
        check("last_week", "foo last.week bar", Some((ymd(2024, 3, 8), "last.week")));
        check("last_week", "last week's agenda", Some((ymd(2024, 3, 8), "last week's")));
        check("last_week", "string with no date", None);

        check("last_month", "file 202212", None);
        check("last_month", "foo last_month bar", Some((ymd(2024, 2, 1), "last_month")));
        check("last_month", "last Month's agenda", Some((ymd(2024, 2, 1), "last Month's")));
        check("last_month", "string with no date", None);
    }

    #[test]
    fn test_relative_terms_cross_boundaries() {
        let new_year = ymd(2025, 1, 1);
        assert_eq!(DatePattern::Yesterday.find("yesterday", Some(new_year)).unwrap().date, ymd(2024, 12, 31));
        assert_eq!(DatePattern::LastMonth.find("last month", Some(new_year)).unwrap().date, ymd(2024, 12, 1));
        assert_eq!(DatePattern::LastWeek.find("last week", Some(ymd(2024, 3, 3))).unwrap().date, ymd(2024, 2, 25));
        assert_eq!(DatePattern::Tomorrow.find("tomorrow", Some(ymd(2024, 2, 28))).unwrap().date, ymd(2024, 2, 29));
    }

    #[test]
    fn test_reference_required() {
        for pattern in DatePattern::ALL.into_iter().filter(|p| p.needs_reference()) {
            let text = match pattern {
                DatePattern::MmDd | DatePattern::DdMm => "1201",
                DatePattern::MonthDd => "sep 4",
                DatePattern::LastWeek => "last week",
                DatePattern::LastMonth => "last month",
                other => other.name(),
            };
            assert!(pattern.find(text, Some(reference())).is_some(), "{} with reference", pattern);
            assert_eq!(pattern.find(text, None), None, "{} without reference", pattern);
        }
    }

    #[test]
    fn test_find_first_priority() {
        let (pattern, found) = find_first("a file with a date 2020-11-01", None).unwrap();
        assert_eq!(pattern, DatePattern::YyyyMmDd);
        assert_eq!(found.found_string, "2020-11-01");

        // Both mm_dd and dd_mm accept 1201; mm_dd is declared first
        let (pattern, found) = find_first("1201", Some(reference())).unwrap();
        assert_eq!(pattern, DatePattern::MmDd);
        assert_eq!(found.date, ymd(2024, 12, 1));

        // The same 8-digit run reads as month-first before day-first
        let (pattern, found) = find_first("foo 12112022 bar", None).unwrap();
        assert_eq!(pattern, DatePattern::MmDdYyyy);
        assert_eq!(found.date, ymd(2022, 12, 11));

        let (pattern, _) = find_first("13th, jan 2019", None).unwrap();
        assert_eq!(pattern, DatePattern::DdMonthYyyy);

        assert_eq!(find_first("string with no date", Some(reference())), None);
        // A surname is not a month; the bare digits still read as a compact yymd run
        let (pattern, found) = find_first("Kumar 2019 report", None).unwrap();
        assert_eq!(pattern, DatePattern::JpAmbiguous);
        assert_eq!(found.found_string, "2019");
        assert_eq!(find_first("Bojan 2020 photos", None), None);
    }

    proptest! {
        #[test]
        fn prop_yyyy_mm_dd_round_trip(year in 1900i32..=2099, month in 1u32..=12, day in 1u32..=31) {
            let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
                return Ok(());
            };
            let text = date.format("%Y-%m-%d").to_string();
            let found = DatePattern::YyyyMmDd.find(&format!("scan {} done", text), None);
            prop_assert_eq!(found, Some(DateMatch { date, found_string: text, range: 5..15 }));
        }

        #[test]
        fn prop_matches_are_substrings_and_repeatable(text in "[0-9a-z ./_-]{0,24}") {
            for pattern in DatePattern::ALL {
                let first = pattern.find(&text, Some(reference()));
                let second = pattern.find(&text, Some(reference()));
                prop_assert_eq!(&first, &second);
                if let Some(found) = first {
                    prop_assert_eq!(&text[found.range.clone()], found.found_string.as_str());
                }
            }
        }

        #[test]
        fn prop_ambiguous_orders_disagree_or_reject(day in 13u32..=28, month in 1u32..=12, year in 0i32..=99) {
            // Day above 12 cannot be read as a month
            let text = format!("{:02} {:02} {:02}", day, month, year);
            let eu = DatePattern::EuAmbiguous.find(&text, None).map(|m| m.date);
            prop_assert_eq!(eu, NaiveDate::from_ymd_opt(2000 + year, month, day));
            prop_assert_eq!(DatePattern::UsAmbiguous.find(&text, None), None);
        }
    }
}
