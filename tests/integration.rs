//! Integration tests for the range picker library

use chrono::{Datelike, NaiveDate};
use range_picker::date::{days_in_month, first_of_month};
use range_picker::range::{match_option, match_range, resolve};
use range_picker::{
    DateRange, DateRangePicker, OptionCatalog, OptionDefinition, OptionKey, PartialRange,
    PickerConfig, SelectionState,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Every day of 2023 and 2024, covering a leap year and both year ends
fn every_day() -> impl Iterator<Item = NaiveDate> {
    ymd(2023, 1, 1).iter_days().take_while(|d| d.year() <= 2024)
}

#[test]
fn test_this_month_for_every_day() {
    let option = OptionDefinition::new(OptionKey::ThisMonth, "This Month");
    for now in every_day() {
        let range = resolve(&option, now);
        assert_eq!(range.start, ymd(now.year(), now.month(), 1), "now = {}", now);
        assert_eq!(range.end, now, "now = {}", now);
    }
}

#[test]
fn test_last_month_for_every_day() {
    let option = OptionDefinition::new(OptionKey::LastMonth, "Last Month");
    for now in every_day() {
        let range = resolve(&option, now);
        let previous = first_of_month(now).pred_opt().unwrap();
        assert_eq!(range.start, first_of_month(previous), "now = {}", now);
        assert_eq!(range.end.day(), days_in_month(previous), "now = {}", now);
        assert_eq!(range.end, previous, "now = {}", now);
    }
}

#[test]
fn test_reference_ranges() {
    let now = ymd(2024, 3, 15);
    assert_eq!(
        resolve(&OptionDefinition::date_diff("Last 7 Days", -7), now),
        DateRange::new(ymd(2024, 3, 8), now)
    );
    assert_eq!(
        resolve(
            &OptionDefinition::new(OptionKey::YearToDate, "Year To Date"),
            ymd(2024, 6, 1)
        ),
        DateRange::new(ymd(2024, 1, 1), ymd(2024, 6, 1))
    );
    assert_eq!(
        resolve(
            &OptionDefinition::new(OptionKey::LastMonth, "Last Month"),
            ymd(2024, 1, 15)
        ),
        DateRange::new(ymd(2023, 12, 1), ymd(2023, 12, 31))
    );
}

#[test]
fn test_default_catalog_round_trip() {
    // Every option matches itself or an earlier option with the same range
    let catalog = OptionCatalog::default();
    for now in every_day() {
        for (index, option) in catalog.iter().enumerate() {
            let range = resolve(option, now);
            let matched = match_range(&range, &catalog, now).unwrap();
            assert!(matched <= index);
            assert_eq!(resolve(&catalog[matched], now), range);
        }
    }
}

#[test]
fn test_match_unknown_range() {
    let catalog = OptionCatalog::new(vec![
        OptionDefinition::new(OptionKey::ThisMonth, "This Month"),
        OptionDefinition::new(OptionKey::LastMonth, "Last Month"),
    ]);
    let range = DateRange::new(ymd(2024, 3, 5), ymd(2024, 3, 10));
    assert!(match_option(&range, &catalog, ymd(2024, 3, 15)).is_none());
}

#[test]
fn test_picker_from_config_file() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    write!(
        file,
        r#"
date_format = "%d.%m.%Y"
rematch = "on_change"

[[options]]
label = "Last 14 Days"
key = "DATE_DIFF"
date_diff = -14

[[options]]
label = "Pick Dates"
key = "CUSTOM"
"#
    )
    .expect("Failed to write config");

    let config = PickerConfig::load(file.path()).expect("Failed to load config");
    let now = ymd(2024, 3, 15);
    let initial = PartialRange::new(Some(ymd(2024, 3, 2)), None);
    let mut picker = DateRangePicker::new(&config, initial, now);

    assert_eq!(picker.options().len(), 2);
    assert_eq!(picker.selected(), None);
    assert_eq!(picker.display(), "02.03.2024 - 15.03.2024");

    let event = picker.set_range(ymd(2024, 3, 1), None, now);
    assert_eq!(event.selected_option.unwrap().label, "Last 14 Days");
    assert_eq!(picker.selected(), Some(0));

    let event = picker
        .select_label("last 14 days", now)
        .unwrap()
        .expect("non-custom option emits an event");
    assert_eq!(event.range, DateRange::new(ymd(2024, 3, 1), now));
    assert_eq!(event.display, "Last 14 Days");

    assert!(picker.select_label("Pick Dates", now).unwrap().is_none());
    assert_eq!(picker.state(), SelectionState::CustomRangeOpen);
    assert_eq!(picker.selection_flags(), vec![false, true]);
}

#[test]
fn test_selection_exclusive_across_operations() {
    let now = ymd(2024, 2, 29);
    let config = PickerConfig::default();
    let mut picker = DateRangePicker::new(&config, PartialRange::default(), now);
    let count = |p: &DateRangePicker| p.selection_flags().into_iter().filter(|f| *f).count();

    for index in 0..picker.options().len() {
        picker.select(index, now).unwrap();
        assert_eq!(count(&picker), 1);
    }

    picker.confirm_custom(Some(ymd(2024, 2, 3)), Some(ymd(2024, 2, 9)), now);
    assert_eq!(count(&picker), 0);

    picker.confirm_custom(Some(ymd(2024, 1, 1)), None, now);
    assert_eq!(count(&picker), 1);
    assert_eq!(picker.selected_option().unwrap().label, "Year To Date");
}
