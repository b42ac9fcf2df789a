//! Resolve quick options to concrete date ranges

use chrono::NaiveDate;
use tracing::debug;

use super::option::{OptionDefinition, OptionKey};
use super::DateRange;
use crate::date::{
    first_of_month, first_of_previous_month, first_of_year, last_of_month, offset_days, today,
};

/// Compute the range an option stands for, relative to `now`
///
/// A custom resolver wins when it yields both bounds; its range is returned
/// as-is, without reordering. Otherwise the range follows the option key.
/// This never fails: `Custom` and anything else without a dedicated rule
/// behave like `SingleDate`.
pub fn resolve(option: &OptionDefinition, now: NaiveDate) -> DateRange {
    if let Some(resolver) = &option.custom_resolver {
        if let Some(range) = resolver().complete() {
            debug!(label = %option.label, %range, "resolved by custom resolver");
            return range;
        }
    }

    let range = match option.key {
        OptionKey::DateDiff => DateRange::new(offset_days(now, option.date_diff), now),
        OptionKey::LastMonth => {
            let start = first_of_previous_month(now);
            DateRange::new(start, last_of_month(start))
        }
        OptionKey::ThisMonth | OptionKey::MonthToDate => {
            DateRange::new(first_of_month(now), now)
        }
        OptionKey::YearToDate => DateRange::new(first_of_year(now), now),
        OptionKey::SingleDate | OptionKey::Custom => {
            DateRange::day(offset_days(now, option.date_diff))
        }
    };

    debug!(label = %option.label, key = %option.key, %range, "resolved option");
    range
}

/// Resolve against the local clock, sampled once
pub fn resolve_now(option: &OptionDefinition) -> DateRange {
    resolve(option, today())
}
