//! Error types for the range picker library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the range picker library
///
/// Resolution and matching never fail; these cover the edges where
/// user input or configuration enters the crate.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("Invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    /// Config file not found
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// Config parsed but is not usable
    #[error("Config error: {0}")]
    Config(String),

    /// Date parsing error
    #[error("Invalid date expression: {0}")]
    InvalidDateExpression(String),

    /// No catalog option carries this label
    #[error("Unknown option: {0}")]
    UnknownOption(String),

    /// Selection index outside the catalog
    #[error("Option index {0} is out of range")]
    OptionIndexOutOfRange(usize),
}
