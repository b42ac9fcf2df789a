//! Range Picker CLI tool
//!
//! Resolves quick date range options and matches ranges back to them.

use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use range_picker::date::{format_date, parse_date, today};
use range_picker::range::resolve;
use range_picker::{DateRangePicker, PartialRange, PickerConfig};

/// Range Picker - Resolve and match quick date range options
#[derive(Parser)]
#[command(name = "range-picker")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Show every option with the range it resolves to
    range-picker list

    # Resolve a single option
    range-picker resolve \"Last Month\"

    # Find the option matching a range, as of a fixed day
    range-picker --today 2024-03-15 match 2024-03-01 2024-03-15

    # Use a custom catalog
    range-picker --config picker.toml list")]
struct Cli {
    /// TOML config file with options and display settings
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Reference day (e.g., "2024-03-15", "today-1"); defaults to today
    #[arg(long, global = true)]
    today: Option<String>,

    /// strftime format for printed dates (overrides the config file)
    #[arg(long, global = true)]
    format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the options with their resolved ranges
    List,

    /// Print the range an option resolves to
    Resolve {
        /// Option label (case-insensitive)
        label: String,
    },

    /// Print the option matching a range, or the range itself if none does
    Match {
        /// Range start (e.g., "2024-03-01", "today-7")
        start: String,

        /// Range end; defaults to the reference day
        end: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = load_config(&cli).and_then(|config| {
        config.init_logging();
        let now = reference_day(cli.today.as_deref())?;
        match &cli.command {
            Commands::List => cmd_list(&config, now),
            Commands::Resolve { label } => cmd_resolve(&config, label, now),
            Commands::Match { start, end } => cmd_match(&config, start, end.as_deref(), now),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Load the config file (if any) and apply command-line overrides
fn load_config(cli: &Cli) -> Result<PickerConfig> {
    let mut config = match &cli.config {
        Some(path) => PickerConfig::load(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => PickerConfig::default(),
    };

    if let Some(format) = &cli.format {
        config.date_format = format.clone();
        config.validate()?;
    }

    Ok(config)
}

/// Resolve the `--today` expression against the system clock
fn reference_day(expr: Option<&str>) -> Result<NaiveDate> {
    let system_today = today();
    match expr {
        Some(expr) => Ok(parse_date(expr, system_today)?.unwrap_or(system_today)),
        None => Ok(system_today),
    }
}

/// Parse a required date argument
fn required_date(expr: &str, now: NaiveDate) -> Result<NaiveDate> {
    match parse_date(expr, now)? {
        Some(date) => Ok(date),
        None => bail!("Empty date"),
    }
}

/// List every option with its resolved range
fn cmd_list(config: &PickerConfig, now: NaiveDate) -> Result<()> {
    let catalog = config.catalog();
    if catalog.is_empty() {
        eprintln!("No options configured");
        return Ok(());
    }

    let width = catalog.iter().map(|o| o.label.len()).max().unwrap_or(0);
    for option in &catalog {
        if option.is_custom() {
            println!("{:<width$}  (custom range)", option.label, width = width);
        } else {
            let range = resolve(option, now).normalized();
            println!(
                "{:<width$}  {}",
                option.label,
                range.format(&config.date_format),
                width = width
            );
        }
    }

    Ok(())
}

/// Resolve one option by label
fn cmd_resolve(config: &PickerConfig, label: &str, now: NaiveDate) -> Result<()> {
    let mut picker = DateRangePicker::new(config, PartialRange::default(), now);

    match picker.select_label(label, now)? {
        Some(event) => {
            println!(
                "{}\t{}",
                format_date(&event.range.start, &config.date_format),
                format_date(&event.range.end, &config.date_format)
            );
            Ok(())
        }
        None => bail!("{} is a custom range and has no fixed dates", label),
    }
}

/// Match a range against the catalog
fn cmd_match(config: &PickerConfig, start: &str, end: Option<&str>, now: NaiveDate) -> Result<()> {
    let start = required_date(start, now)?;
    let end = end.map(|e| required_date(e, now)).transpose()?;

    let mut picker = DateRangePicker::new(config, PartialRange::default(), now);
    picker.open_custom_range();
    let event = picker.confirm_custom(Some(start), end, now);

    println!("{}", event.display);

    Ok(())
}
