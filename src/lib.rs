//! Range Picker Library
//!
//! The non-visual core of a date range picker. This library provides
//! functionality to:
//! - Resolve named quick options ("Last Month", "Year To Date", ...) to dates
//! - Match a concrete range back to the first option that produces it
//! - Track selection state and build the events a UI layer renders
//! - Load option catalogs and display preferences from TOML
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use range_picker::range::{match_option, resolve, OptionCatalog};
//!
//! let catalog = OptionCatalog::default();
//! let now = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//!
//! let last_month = &catalog[catalog.position("Last Month").unwrap()];
//! let range = resolve(last_month, now);
//! assert_eq!(range.to_string(), "2023-12-01 - 2023-12-31");
//!
//! let matched = match_option(&range, &catalog, now).unwrap();
//! assert_eq!(matched.label, "Last Month");
//! ```

pub mod config;
pub mod date;
pub mod error;
pub mod picker;
pub mod range;

// Re-export commonly used items
pub use config::{PickerConfig, RematchPolicy};
pub use error::{Error, Result};
pub use picker::{DateRangePicker, SelectionEvent, SelectionState};
pub use range::{DateRange, OptionCatalog, OptionDefinition, OptionKey, PartialRange};
