//! Publication dates as they appear in front matter.

use std::fmt;

use chrono::{Datelike, NaiveDate};

/// Numeric layouts; a time part may follow after `T` or a space.
const NUMERIC_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Month-name layouts. `%B` also accepts the three-letter abbreviation.
const NAMED_FORMATS: [&str; 2] = ["%B %d, %Y", "%B %d %Y"];

const LONG_FORMAT: &str = "%B %-d, %Y";

/// Calendar date, ordered chronologically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct ContentDate(NaiveDate);

impl ContentDate {
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// `April 15, 2025`.
    pub fn long(&self) -> String {
        self.0.format(LONG_FORMAT).to_string()
    }
}

impl From<NaiveDate> for ContentDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for ContentDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Parse a front matter date.
///
/// Accepts `2025-04-15`, `2025-4-15`, `2025/04/15` (each optionally followed
/// by a time), `April 15, 2025`, `Apr 15, 2025` and `Apr 15 2025`.
pub fn parse_date(s: &str) -> Option<ContentDate> {
    let s = s.trim();
    parse_numeric(s)
        .or_else(|| {
            NAMED_FORMATS
                .iter()
                .find_map(|f| NaiveDate::parse_from_str(s, f).ok())
        })
        .map(ContentDate)
}

fn parse_numeric(s: &str) -> Option<NaiveDate> {
    NUMERIC_FORMATS.iter().find_map(|f| {
        let (date, rest) = NaiveDate::parse_and_remainder(s, f).ok()?;
        (rest.is_empty() || rest.starts_with(['T', ' '])).then_some(date)
    })
}

/// Long display form of a front matter date; unparseable input is returned as is.
pub fn format_long_date(s: &str) -> String {
    parse_date(s).map_or_else(|| s.to_owned(), |d| d.long())
}

#[cfg(test)]
#[path = "../../tests/unit/content/date.rs"]
mod tests;
