//! Picker configuration
//!
//! Loaded from a TOML file. Every field has a default, so an empty file
//! (or no file at all) yields the built-in catalog with ISO formatting.
//!
//! ```toml
//! date_format = "%d/%m/%Y"
//! rematch = "on_change"
//!
//! [logging]
//! level = "debug"
//!
//! [[options]]
//! label = "Last 14 Days"
//! key = "DATE_DIFF"
//! date_diff = -14
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::date::{validate_format, DEFAULT_DATE_FORMAT};
use crate::error::{Error, Result};
use crate::range::{OptionCatalog, OptionDefinition, OptionKey};

/// Whether programmatic date changes re-derive the selected option
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RematchPolicy {
    /// Only the initial range is matched against the catalog
    #[default]
    InitialOnly,
    /// Every `set_range` call re-runs matching
    OnChange,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber; `RUST_LOG` overrides `level`
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        // a subscriber installed earlier by the host stays in place
        let _ = match self.format.as_str() {
            "json" => fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
            _ => fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
        };
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "pretty".into(),
        }
    }
}

/// One `[[options]]` table
#[derive(Debug, Clone, Deserialize)]
pub struct OptionEntry {
    pub label: String,
    /// Key name such as `LAST_MONTH`; unknown names act as `SINGLE_DATE`
    pub key: String,
    #[serde(default)]
    pub date_diff: i64,
}

impl From<&OptionEntry> for OptionDefinition {
    fn from(entry: &OptionEntry) -> Self {
        OptionDefinition::new(OptionKey::from_name(&entry.key), entry.label.clone())
            .with_date_diff(entry.date_diff)
    }
}

/// Top-level picker configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// strftime format for range display strings
    pub date_format: String,
    /// Show the matched option label instead of the formatted dates
    pub show_range_label: bool,
    /// Fall back to the built-in catalog when `options` is empty
    pub show_default_options: bool,
    pub rematch: RematchPolicy,
    pub logging: LoggingConfig,
    pub options: Vec<OptionEntry>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.into(),
            show_range_label: true,
            show_default_options: true,
            rematch: RematchPolicy::default(),
            logging: LoggingConfig::default(),
            options: Vec::new(),
        }
    }
}

impl PickerConfig {
    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse and validate TOML config text
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_format(&self.date_format)?;
        if let Some(entry) = self.options.iter().find(|e| e.label.trim().is_empty()) {
            return Err(Error::Config(format!(
                "Option with key {} has an empty label",
                entry.key
            )));
        }
        Ok(())
    }

    /// The catalog this config describes
    ///
    /// Configured options take precedence; otherwise the built-in catalog,
    /// unless `show_default_options` is off.
    pub fn catalog(&self) -> OptionCatalog {
        if !self.options.is_empty() {
            self.options.iter().map(OptionDefinition::from).collect()
        } else if self.show_default_options {
            OptionCatalog::default()
        } else {
            OptionCatalog::empty()
        }
    }

    pub fn init_logging(&self) {
        self.logging.init();
    }
}
