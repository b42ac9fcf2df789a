//! Ordered catalog of quick options

use std::ops::Index;

use super::option::{OptionDefinition, OptionKey};

/// Ordered list of quick options
///
/// Order is both display order and match priority: when two options
/// resolve to the same range, the earlier one wins.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionCatalog {
    options: Vec<OptionDefinition>,
}

impl OptionCatalog {
    pub fn new(options: Vec<OptionDefinition>) -> Self {
        Self { options }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&OptionDefinition> {
        self.options.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OptionDefinition> {
        self.options.iter()
    }

    pub fn push(&mut self, option: OptionDefinition) {
        self.options.push(option);
    }

    /// Index of the first option with exactly this label
    pub fn position(&self, label: &str) -> Option<usize> {
        self.options.iter().position(|option| option.label == label)
    }

    /// Index of the first option whose label matches, ignoring case
    /// and surrounding whitespace
    pub fn find_by_label(&self, label: &str) -> Option<usize> {
        let label = label.trim();
        self.position(label).or_else(|| {
            self.options
                .iter()
                .position(|option| option.label.eq_ignore_ascii_case(label))
        })
    }

    /// Per-option selection flags for rendering, derived from the
    /// single selected index
    pub fn selection_flags(&self, selected: Option<usize>) -> Vec<bool> {
        (0..self.options.len())
            .map(|index| Some(index) == selected)
            .collect()
    }
}

impl Default for OptionCatalog {
    /// The built-in quick options
    fn default() -> Self {
        Self::new(vec![
            OptionDefinition::single_date("Today", 0),
            OptionDefinition::single_date("Yesterday", -1),
            OptionDefinition::date_diff("Last 7 Days", -7),
            OptionDefinition::date_diff("Last 30 Days", -30),
            OptionDefinition::new(OptionKey::ThisMonth, "This Month"),
            OptionDefinition::new(OptionKey::LastMonth, "Last Month"),
            OptionDefinition::new(OptionKey::MonthToDate, "Month To Date"),
            OptionDefinition::new(OptionKey::YearToDate, "Year To Date"),
            OptionDefinition::new(OptionKey::Custom, "Custom Range"),
        ])
    }
}

impl Index<usize> for OptionCatalog {
    type Output = OptionDefinition;

    fn index(&self, index: usize) -> &Self::Output {
        &self.options[index]
    }
}

impl<'a> IntoIterator for &'a OptionCatalog {
    type Item = &'a OptionDefinition;
    type IntoIter = std::slice::Iter<'a, OptionDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<OptionDefinition> for OptionCatalog {
    fn from_iter<I: IntoIterator<Item = OptionDefinition>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
