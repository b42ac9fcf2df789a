//! Infer which quick option a concrete range corresponds to

use chrono::NaiveDate;
use tracing::debug;

use super::catalog::OptionCatalog;
use super::option::OptionDefinition;
use super::resolve::resolve;
use super::DateRange;

/// Index of the first catalog option whose resolved range equals `range`
///
/// Both bounds are compared by calendar date, after ordering each range
/// with the earlier date first. `None` is the normal outcome for a
/// hand-picked range.
pub fn match_range(range: &DateRange, catalog: &OptionCatalog, now: NaiveDate) -> Option<usize> {
    let target = range.normalized();
    let found = catalog
        .iter()
        .position(|option| resolve(option, now).normalized() == target);

    if let Some(index) = found {
        debug!(%range, label = %catalog[index].label, "matched option");
    } else {
        debug!(%range, "no option matches range");
    }
    found
}

/// Like [`match_range`], returning the option itself
pub fn match_option<'a>(
    range: &DateRange,
    catalog: &'a OptionCatalog,
    now: NaiveDate,
) -> Option<&'a OptionDefinition> {
    match_range(range, catalog, now).and_then(|index| catalog.get(index))
}
