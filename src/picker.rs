//! Selection state for a date range picker
//!
//! [`DateRangePicker`] owns a catalog, the current range and which option
//! (if any) is selected. Every change that moves the range produces a
//! [`SelectionEvent`] for the UI layer to render.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::config::{PickerConfig, RematchPolicy};
use crate::error::{Error, Result};
use crate::range::{match_range, resolve, DateRange, OptionCatalog, OptionDefinition, PartialRange};

/// Where the picker is in its selection flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    /// No option is associated with the current range
    NoSelection,
    /// A named option, or a confirmed custom range, is in effect
    OptionSelected,
    /// The user is editing a custom start/end pair
    CustomRangeOpen,
}

/// Payload emitted whenever the selected range changes
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionEvent {
    pub range: DateRange,
    pub selected_option: Option<OptionDefinition>,
    /// Text for the picker's input: the option label or the formatted range
    pub display: String,
}

/// Date range picker state machine
#[derive(Debug, Clone)]
pub struct DateRangePicker {
    catalog: OptionCatalog,
    selected: Option<usize>,
    state: SelectionState,
    /// State and selection to return to when custom editing is toggled off
    settled: SelectionState,
    settled_selected: Option<usize>,
    range: Option<DateRange>,
    date_format: String,
    show_range_label: bool,
    rematch: RematchPolicy,
}

impl DateRangePicker {
    /// Create a picker from config and an optional initial range
    ///
    /// A missing initial end defaults to `now`. When an initial range is
    /// given, the first catalog option resolving to it becomes selected.
    pub fn new(config: &PickerConfig, initial: PartialRange, now: NaiveDate) -> Self {
        Self::with_catalog(config, config.catalog(), initial, now)
    }

    /// Like [`DateRangePicker::new`], with a caller-supplied catalog
    pub fn with_catalog(
        config: &PickerConfig,
        catalog: OptionCatalog,
        initial: PartialRange,
        now: NaiveDate,
    ) -> Self {
        let mut picker = Self {
            catalog,
            selected: None,
            state: SelectionState::NoSelection,
            settled: SelectionState::NoSelection,
            settled_selected: None,
            range: initial
                .start
                .map(|start| DateRange::new(start, initial.end.unwrap_or(now)).normalized()),
            date_format: config.date_format.clone(),
            show_range_label: config.show_range_label,
            rematch: config.rematch,
        };
        picker.calculate_label(now);
        picker
    }

    /// Adopt the first option matching the current range, if any
    ///
    /// Returns the label that was found.
    pub fn calculate_label(&mut self, now: NaiveDate) -> Option<&str> {
        let range = self.range?;
        let index = match_range(&range, &self.catalog, now)?;
        self.set_selected(Some(index));
        self.catalog.get(index).map(|option| option.label.as_str())
    }

    /// Select an option by index
    ///
    /// A non-custom option resolves its range and emits an event. The custom
    /// option only opens custom range editing, so no event is produced.
    pub fn select(&mut self, index: usize, now: NaiveDate) -> Result<Option<SelectionEvent>> {
        let option = self
            .catalog
            .get(index)
            .ok_or(Error::OptionIndexOutOfRange(index))?;

        if option.is_custom() {
            debug!(label = %option.label, "custom option selected");
            self.open_custom_range();
            self.selected = Some(index);
            return Ok(None);
        }

        let range = resolve(option, now).normalized();
        info!(label = %option.label, %range, "option selected");
        self.range = Some(range);
        self.set_selected(Some(index));
        Ok(Some(self.event(range)))
    }

    /// Select an option by label, ignoring case
    pub fn select_label(&mut self, label: &str, now: NaiveDate) -> Result<Option<SelectionEvent>> {
        let index = self
            .catalog
            .find_by_label(label)
            .ok_or_else(|| Error::UnknownOption(label.to_string()))?;
        self.select(index, now)
    }

    /// Enter custom range editing
    pub fn open_custom_range(&mut self) {
        if self.state != SelectionState::CustomRangeOpen {
            self.settled = self.state;
            self.settled_selected = self.selected;
            self.state = SelectionState::CustomRangeOpen;
        }
    }

    /// Flip custom range editing on or off
    ///
    /// Leaving without confirming restores the selection held before
    /// editing was opened.
    pub fn toggle_custom_range(&mut self) {
        if self.state == SelectionState::CustomRangeOpen {
            self.state = self.settled;
            self.selected = self.settled_selected;
        } else {
            self.open_custom_range();
        }
    }

    /// Confirm a custom start/end pair
    ///
    /// Missing bounds fall back to `now` and reversed bounds are swapped. If
    /// an option resolves to the same range it becomes selected, otherwise
    /// the range is kept without a label.
    pub fn confirm_custom(
        &mut self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        now: NaiveDate,
    ) -> SelectionEvent {
        let range = PartialRange::new(start, end).or_today(now).normalized();
        let matched = match_range(&range, &self.catalog, now);
        info!(%range, matched = matched.is_some(), "custom range confirmed");
        self.range = Some(range);
        self.set_selected(matched);
        self.event(range)
    }

    /// Change the dates programmatically
    ///
    /// Under [`RematchPolicy::OnChange`] the selection is re-derived from the
    /// catalog; under [`RematchPolicy::InitialOnly`] it is left untouched.
    pub fn set_range(
        &mut self,
        start: NaiveDate,
        end: Option<NaiveDate>,
        now: NaiveDate,
    ) -> SelectionEvent {
        let range = DateRange::new(start, end.unwrap_or(now)).normalized();
        self.range = Some(range);
        if self.rematch == RematchPolicy::OnChange {
            let matched = match_range(&range, &self.catalog, now);
            self.set_selected(matched);
        }
        debug!(%range, policy = ?self.rematch, "range set");
        self.event(range)
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn range(&self) -> Option<DateRange> {
        self.range
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_option(&self) -> Option<&OptionDefinition> {
        self.selected.and_then(|index| self.catalog.get(index))
    }

    /// The options to render
    pub fn options(&self) -> &OptionCatalog {
        &self.catalog
    }

    /// Per-option selected flags, at most one of which is set
    pub fn selection_flags(&self) -> Vec<bool> {
        self.catalog.selection_flags(self.selected)
    }

    /// Input text for the current range, empty when no range is set
    pub fn display(&self) -> String {
        match self.range {
            Some(range) => self.display_for(&range),
            None => String::new(),
        }
    }

    fn display_for(&self, range: &DateRange) -> String {
        match self.selected_option() {
            Some(option) if self.show_range_label && !option.is_custom() => option.label.clone(),
            _ => range.format(&self.date_format),
        }
    }

    fn set_selected(&mut self, selected: Option<usize>) {
        self.selected = selected;
        self.state = if selected.is_some() || self.range.is_some() {
            SelectionState::OptionSelected
        } else {
            SelectionState::NoSelection
        };
        self.settled = self.state;
        self.settled_selected = selected;
    }

    fn event(&self, range: DateRange) -> SelectionEvent {
        SelectionEvent {
            range,
            selected_option: self.selected_option().cloned(),
            display: self.display_for(&range),
        }
    }
}
