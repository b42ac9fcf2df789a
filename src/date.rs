//! Date helpers
//!
//! Calendar arithmetic shared by the resolver, plus parsing of the date
//! expressions accepted on the command line and display formatting.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{Datelike, Days, Local, NaiveDate};

use crate::error::{Error, Result};

/// Default display format, equivalent to `yyyy-MM-dd`
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Date expression types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateExpression {
    /// Use today's date
    Today,
    /// Use an explicit date
    Explicit(NaiveDate),
    /// Today shifted by a signed number of days
    Offset(i64),
    /// No date (empty/null)
    None,
}

/// Parse a date expression string into a DateExpression
///
/// Supported formats:
/// - `""` (empty) → None
/// - `"today"` → Today
/// - `"yesterday"` / `"tomorrow"` → Offset(-1) / Offset(1)
/// - `"today-7"`, `"today+3"` → Offset
/// - `"2024-11-20"` → Explicit date (ISO format)
/// - `"11/20/2024"` → Explicit date (US format)
pub fn parse_date_expression(expr: &str) -> Result<DateExpression> {
    let expr = expr.trim();

    if expr.is_empty() {
        return Ok(DateExpression::None);
    }

    if expr.eq_ignore_ascii_case("today") {
        return Ok(DateExpression::Today);
    }
    if expr.eq_ignore_ascii_case("yesterday") {
        return Ok(DateExpression::Offset(-1));
    }
    if expr.eq_ignore_ascii_case("tomorrow") {
        return Ok(DateExpression::Offset(1));
    }

    // ISO format: 2024-11-20
    if let Ok(date) = NaiveDate::parse_from_str(expr, "%Y-%m-%d") {
        return Ok(DateExpression::Explicit(date));
    }

    // US format: 11/20/2024
    if let Ok(date) = NaiveDate::parse_from_str(expr, "%m/%d/%Y") {
        return Ok(DateExpression::Explicit(date));
    }

    // "today+3" / "today - 7"
    let lower = expr.to_ascii_lowercase();
    if let Some(rest) = lower.strip_prefix("today") {
        let rest = rest.trim();
        let (sign, digits) = if let Some(digits) = rest.strip_prefix('+') {
            (1, digits)
        } else if let Some(digits) = rest.strip_prefix('-') {
            (-1, digits)
        } else {
            return Err(Error::InvalidDateExpression(format!(
                "Expected + or - after today: {}",
                expr
            )));
        };
        let days: i64 = digits.trim().parse().map_err(|_| {
            Error::InvalidDateExpression(format!("Invalid offset: {}", digits.trim()))
        })?;
        return Ok(DateExpression::Offset(sign * days));
    }

    Err(Error::InvalidDateExpression(format!(
        "Unable to parse date expression: {}",
        expr
    )))
}

/// Resolve a DateExpression against `today`
pub fn resolve_date(expr: &DateExpression, today: NaiveDate) -> Option<NaiveDate> {
    match expr {
        DateExpression::None => None,
        DateExpression::Today => Some(today),
        DateExpression::Explicit(date) => Some(*date),
        DateExpression::Offset(days) => Some(offset_days(today, *days)),
    }
}

/// Parse and resolve in one step; empty input yields `None`
pub fn parse_date(expr: &str, today: NaiveDate) -> Result<Option<NaiveDate>> {
    parse_date_expression(expr).map(|parsed| resolve_date(&parsed, today))
}

/// The local calendar date, sampled once
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Shift a date by a signed number of days
///
/// Saturates to `date` itself if the result would leave chrono's range.
pub fn offset_days(date: NaiveDate, days: i64) -> NaiveDate {
    let shifted = if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}

/// First day of the month containing `date`
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the year containing `date`
pub fn first_of_year(date: NaiveDate) -> NaiveDate {
    date.with_ordinal(1).unwrap_or(date)
}

/// First day of the month before the one containing `date`
pub fn first_of_previous_month(date: NaiveDate) -> NaiveDate {
    let first = first_of_month(date);
    first
        .pred_opt()
        .map(first_of_month)
        .unwrap_or(first)
}

/// Number of days in the month containing `date`
///
/// Computed as the day-of-month of the day before the first of the
/// following month, so leap Februaries need no table.
pub fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        // only reachable at chrono's upper bound, which is a December
        .unwrap_or(31)
}

/// Last day of the month containing `date`
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(days_in_month(date)).unwrap_or(date)
}

/// Check that a strftime format string only contains valid items
pub fn validate_format(format: &str) -> Result<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(Error::Config(format!("Invalid date format: {}", format)));
    }
    Ok(())
}

/// Format a date with a strftime format string
///
/// Falls back to ISO format if `format` cannot render this date.
pub fn format_date(date: &NaiveDate, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(format)).is_err() {
        return date.format(DEFAULT_DATE_FORMAT).to_string();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_date_expression("").unwrap(), DateExpression::None);
        assert_eq!(parse_date_expression("   ").unwrap(), DateExpression::None);
    }

    #[test]
    fn test_parse_today() {
        assert_eq!(parse_date_expression("today").unwrap(), DateExpression::Today);
        assert_eq!(parse_date_expression("TODAY").unwrap(), DateExpression::Today);
        assert_eq!(
            parse_date_expression("Yesterday").unwrap(),
            DateExpression::Offset(-1)
        );
    }

    #[test]
    fn test_parse_offsets() {
        assert_eq!(
            parse_date_expression("today-7").unwrap(),
            DateExpression::Offset(-7)
        );
        assert_eq!(
            parse_date_expression("today + 3").unwrap(),
            DateExpression::Offset(3)
        );
    }

    #[test]
    fn test_parse_iso_and_us_dates() {
        assert_eq!(
            parse_date_expression("2024-11-20").unwrap(),
            DateExpression::Explicit(ymd(2024, 11, 20))
        );
        assert_eq!(
            parse_date_expression("11/20/2024").unwrap(),
            DateExpression::Explicit(ymd(2024, 11, 20))
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_date_expression("NotADate").is_err());
        assert!(parse_date_expression("2024-13-01").is_err());
        assert!(parse_date_expression("today*2").is_err());
        assert!(parse_date_expression("today+abc").is_err());
    }

    #[test]
    fn test_resolve_against_fixed_today() {
        let today = ymd(2024, 3, 1);
        assert_eq!(resolve_date(&DateExpression::None, today), None);
        assert_eq!(resolve_date(&DateExpression::Today, today), Some(today));
        assert_eq!(
            resolve_date(&DateExpression::Offset(-1), today),
            Some(ymd(2024, 2, 29))
        );
        assert_eq!(parse_date("today+1", today).unwrap(), Some(ymd(2024, 3, 2)));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(ymd(2024, 2, 10)), 29);
        assert_eq!(days_in_month(ymd(2023, 2, 10)), 28);
        assert_eq!(days_in_month(ymd(1900, 2, 1)), 28);
        assert_eq!(days_in_month(ymd(2000, 2, 1)), 29);
        assert_eq!(days_in_month(ymd(2024, 4, 30)), 30);
        assert_eq!(days_in_month(ymd(2024, 12, 31)), 31);
    }

    #[test]
    fn test_month_boundaries() {
        assert_eq!(first_of_month(ymd(2024, 2, 29)), ymd(2024, 2, 1));
        assert_eq!(first_of_previous_month(ymd(2024, 1, 15)), ymd(2023, 12, 1));
        assert_eq!(first_of_previous_month(ymd(2024, 3, 31)), ymd(2024, 2, 1));
        assert_eq!(last_of_month(ymd(2024, 2, 3)), ymd(2024, 2, 29));
        assert_eq!(first_of_year(ymd(2024, 6, 1)), ymd(2024, 1, 1));
    }

    #[test]
    fn test_offset_days_saturates() {
        let date = ymd(2024, 3, 15);
        assert_eq!(offset_days(date, -7), ymd(2024, 3, 8));
        assert_eq!(offset_days(date, 0), date);
        assert_eq!(offset_days(date, i64::MAX), date);
        assert_eq!(offset_days(date, i64::MIN), date);
    }

    #[test]
    fn test_format_date() {
        let date = ymd(2024, 11, 20);
        assert_eq!(format_date(&date, DEFAULT_DATE_FORMAT), "2024-11-20");
        assert_eq!(format_date(&date, "%B %-d, %Y"), "November 20, 2024");
        assert_eq!(format_date(&date, "%d/%m/%Y"), "20/11/2024");
    }

    #[test]
    fn test_validate_format() {
        assert!(validate_format("%Y-%m-%d").is_ok());
        assert!(validate_format("%Q").is_err());
    }
}
