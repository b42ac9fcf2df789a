//! Date range resolution module

pub mod catalog;
pub mod matcher;
pub mod option;
pub mod resolve;

use std::fmt;

use chrono::NaiveDate;

use crate::date::{format_date, DEFAULT_DATE_FORMAT};

// Re-export commonly used items
pub use catalog::OptionCatalog;
pub use matcher::{match_option, match_range};
pub use option::{CustomResolver, OptionDefinition, OptionKey};
pub use resolve::{resolve, resolve_now};

/// An inclusive range of calendar dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a range as given, without reordering
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Single-day range
    pub fn day(date: NaiveDate) -> Self {
        Self::new(date, date)
    }

    /// Same range with the earlier date as start
    pub fn normalized(self) -> Self {
        if self.start <= self.end {
            self
        } else {
            Self::new(self.end, self.start)
        }
    }

    /// Number of days covered, counting both ends
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days().abs() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        let range = self.normalized();
        range.start <= date && date <= range.end
    }

    /// Render as `"<start> - <end>"` using a strftime format
    pub fn format(&self, format: &str) -> String {
        format!(
            "{} - {}",
            format_date(&self.start, format),
            format_date(&self.end, format)
        )
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(DEFAULT_DATE_FORMAT))
    }
}

/// Range produced by a custom resolver, where either bound may be missing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartialRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl PartialRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// The full range, only if both bounds are present
    pub fn complete(&self) -> Option<DateRange> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(DateRange::new(start, end)),
            _ => None,
        }
    }

    /// Fill missing bounds with `today`
    pub fn or_today(&self, today: NaiveDate) -> DateRange {
        DateRange::new(self.start.unwrap_or(today), self.end.unwrap_or(today))
    }
}

impl From<DateRange> for PartialRange {
    fn from(range: DateRange) -> Self {
        Self::new(Some(range.start), Some(range.end))
    }
}
