//! neatdate CLI tool
//!
//! A command-line tool for finding dates in filenames and text.

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, TimeZone, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use glob::glob;
use std::path::PathBuf;
use std::process;

use neatdate::date::Date;
use neatdate::pattern::DatePattern;
use neatdate::rename::suggest_for_file;
use neatdate::settings::{Settings, DATE_FORMAT_ENV, DEFAULT_DATE_FORMAT};
use neatdate::Error;

/// neatdate - Find dates in filenames and text
#[derive(Parser)]
#[command(name = "neatdate")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Find the date in a string
    neatdate parse \"meeting notes Oct 22, 2019\"

    # Resolve relative terms against a given day
    neatdate parse \"yesterday's agenda\" --reference 2024-03-15

    # Try a single pattern
    neatdate parse \"26 04 25\" --pattern eu_ambiguous

    # Preview date-prefixed names for files
    neatdate --date-format \"%Y%m%d\" files \"*.pdf\"")]
struct Cli {
    /// Output format for dates (strftime-style, empty disables reformatting)
    #[arg(long, global = true, env = DATE_FORMAT_ENV, default_value = DEFAULT_DATE_FORMAT)]
    date_format: String,

    /// Log level
    #[arg(long, global = true, value_enum, default_value = "warn")]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the date in a string
    Parse {
        /// Text to search (e.g. a filename)
        text: String,

        /// Reference day for relative and year-less dates (YYYY-MM-DD or "today")
        #[arg(long)]
        reference: Option<String>,

        /// Only try this pattern (see `neatdate patterns`)
        #[arg(long)]
        pattern: Option<String>,
    },

    /// Suggest date-prefixed names for files. Nothing is renamed.
    Files {
        /// Input files. Supports glob patterns like "*.pdf"
        #[arg(required = true)]
        inputs: Vec<String>,
    },

    /// List pattern names in priority order
    Patterns,
}

/// Log level argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    /// Trace level (most verbose)
    Trace,
    /// Debug level
    Debug,
    /// Info level
    Info,
    /// Warning level (default)
    Warn,
    /// Error level (least verbose)
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.log_level);

    let settings = Settings::with_date_format(cli.date_format);

    let result = settings
        .validate()
        .map_err(anyhow::Error::from)
        .and_then(|_| match cli.command {
            Commands::Parse { text, reference, pattern } => cmd_parse(&text, reference, pattern, &settings),
            Commands::Files { inputs } => cmd_files(inputs, &settings),
            Commands::Patterns => cmd_patterns(),
        });

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Log to stderr so stdout stays clean for output
fn init_logging(level: LogLevel) {
    let level: tracing::Level = level.into();

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Parse a reference day: "today" or an ISO date
fn parse_reference(reference: &str) -> Result<NaiveDate> {
    let reference = reference.trim();
    if reference.eq_ignore_ascii_case("today") {
        return Ok(Utc::now().date_naive());
    }
    NaiveDate::parse_from_str(reference, "%Y-%m-%d")
        .map_err(|_| Error::InvalidReference(reference.to_string()).into())
}

/// Expand glob patterns in input paths
fn expand_globs(patterns: Vec<String>) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for pattern in patterns {
        // Check if pattern contains glob characters
        if pattern.contains('*') || pattern.contains('?') || pattern.contains('[') {
            let entries = glob(&pattern).map_err(|e| Error::InvalidGlob(format!("{}: {}", pattern, e)))?;
            let mut matched = false;
            for entry in entries {
                match entry {
                    Ok(path) => {
                        paths.push(path);
                        matched = true;
                    }
                    Err(e) => tracing::warn!(%pattern, error = %e, "glob error"),
                }
            }
            if !matched {
                return Err(Error::NoFilesMatched(pattern).into());
            }
        } else {
            // No glob characters, treat as literal path
            paths.push(PathBuf::from(pattern));
        }
    }

    // Sort paths for consistent ordering
    paths.sort();

    Ok(paths)
}

/// Find the date in a string
fn cmd_parse(text: &str, reference: Option<String>, pattern: Option<String>, settings: &Settings) -> Result<()> {
    let reference = reference.as_deref().map(parse_reference).transpose()?;
    // Noon keeps the calendar day stable across time zones
    let ctime = match reference {
        Some(day) => Some(
            Utc.from_local_datetime(&day.and_hms_opt(12, 0, 0).context("invalid reference time")?)
                .single()
                .context("ambiguous reference time")?,
        ),
        None => None,
    };

    let date = match pattern {
        Some(name) => {
            let pattern: DatePattern = name.parse()?;
            Date::with_pattern(text, pattern, ctime, settings)
        }
        None => Date::with_settings(text, ctime, settings),
    };

    let Some(resolved) = date.date else {
        bail!("No date found in: {}", text);
    };

    println!("Input: {}", date.original_string);
    match (&date.found_string, date.pattern) {
        (Some(found), Some(pattern)) => println!("Found: {} ({})", found, pattern),
        _ => println!("Found: (nothing, using reference)"),
    }
    println!("Date: {}", resolved);
    if let Some(reformatted) = date.reformatted_date() {
        println!("Formatted: {}", reformatted);
    }

    Ok(())
}

/// Preview date-prefixed names for files
fn cmd_files(inputs: Vec<String>, settings: &Settings) -> Result<()> {
    // Expand glob patterns
    let inputs = expand_globs(inputs)?;

    for path in &inputs {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            tracing::warn!(path = %path.display(), "skipping path without a file name");
            continue;
        };

        match suggest_for_file(path, settings)? {
            Some(suggested) if suggested == name => println!("{} (unchanged)", name),
            Some(suggested) => println!("{} -> {}", name, suggested),
            None => println!("{} (no date)", name),
        }
    }

    Ok(())
}

/// List pattern names in priority order
fn cmd_patterns() -> Result<()> {
    for (index, pattern) in DatePattern::ALL.iter().enumerate() {
        let note = if pattern.needs_reference() { "  (needs reference)" } else { "" };
        println!("{:>2}. {}{}", index + 1, pattern, note);
    }
    Ok(())
}
