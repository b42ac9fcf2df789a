//! Quick option definitions

use std::fmt;
use std::sync::Arc;

use super::PartialRange;

/// Externally supplied resolution rule
pub type CustomResolver = Arc<dyn Fn() -> PartialRange + Send + Sync>;

/// How an option computes its range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKey {
    /// `now + date_diff` through today
    DateDiff,
    /// The whole previous calendar month
    LastMonth,
    /// First of this month through today
    ThisMonth,
    /// January 1st through today
    YearToDate,
    /// First of this month through today
    MonthToDate,
    /// The single day `now + date_diff`
    SingleDate,
    /// Opens custom range editing when selected in a picker; resolved
    /// and matched like `SingleDate`
    Custom,
}

impl OptionKey {
    pub const ALL: [OptionKey; 7] = [
        OptionKey::DateDiff,
        OptionKey::LastMonth,
        OptionKey::ThisMonth,
        OptionKey::YearToDate,
        OptionKey::MonthToDate,
        OptionKey::SingleDate,
        OptionKey::Custom,
    ];

    /// Name as written in config files
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKey::DateDiff => "DATE_DIFF",
            OptionKey::LastMonth => "LAST_MONTH",
            OptionKey::ThisMonth => "THIS_MONTH",
            OptionKey::YearToDate => "YEAR_TO_DATE",
            OptionKey::MonthToDate => "MONTH_TO_DATE",
            OptionKey::SingleDate => "SINGLE_DATE",
            OptionKey::Custom => "CUSTOM",
        }
    }

    /// Look up a key by name, case-insensitively
    ///
    /// Unrecognized names fall back to [`OptionKey::SingleDate`].
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(name))
            .unwrap_or(OptionKey::SingleDate)
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named quick option
#[derive(Clone)]
pub struct OptionDefinition {
    pub key: OptionKey,
    /// Display string, also the identity reported by matching
    pub label: String,
    /// Signed day offset from today, used by `DateDiff` and `SingleDate`
    pub date_diff: i64,
    pub custom_resolver: Option<CustomResolver>,
}

impl OptionDefinition {
    pub fn new(key: OptionKey, label: impl Into<String>) -> Self {
        Self {
            key,
            label: label.into(),
            date_diff: 0,
            custom_resolver: None,
        }
    }

    pub fn with_date_diff(mut self, date_diff: i64) -> Self {
        self.date_diff = date_diff;
        self
    }

    pub fn with_resolver<F>(mut self, resolver: F) -> Self
    where
        F: Fn() -> PartialRange + Send + Sync + 'static,
    {
        self.custom_resolver = Some(Arc::new(resolver));
        self
    }

    /// `DateDiff` option covering `date_diff` days back through today
    pub fn date_diff(label: impl Into<String>, date_diff: i64) -> Self {
        Self::new(OptionKey::DateDiff, label).with_date_diff(date_diff)
    }

    /// `SingleDate` option for the day `date_diff` away from today
    pub fn single_date(label: impl Into<String>, date_diff: i64) -> Self {
        Self::new(OptionKey::SingleDate, label).with_date_diff(date_diff)
    }

    pub fn is_custom(&self) -> bool {
        self.key == OptionKey::Custom
    }
}

impl fmt::Debug for OptionDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionDefinition")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("date_diff", &self.date_diff)
            .field("custom_resolver", &self.custom_resolver.is_some())
            .finish()
    }
}

impl PartialEq for OptionDefinition {
    fn eq(&self, other: &Self) -> bool {
        let same_resolver = match (&self.custom_resolver, &other.custom_resolver) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        };
        self.key == other.key
            && self.label == other.label
            && self.date_diff == other.date_diff
            && same_resolver
    }
}
