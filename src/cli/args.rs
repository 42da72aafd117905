//! Command line argument parsing and validation.
//!
//! User-typed values go through the crate's converters as clap
//! `value_parser`s, so a malformed argument is rejected before any command
//! runs and the message names the offending value.

use crate::convert;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use std::time::Duration;

/// Parse compact durations and describe durations, dates and times in Russian
#[derive(Parser, Debug)]
#[command(
    name = "timewords",
    version,
    about = "Parse compact durations and describe durations, dates and times in Russian",
    long_about = "Parses compact duration strings and renders durations, dates and times as Russian phrases.

Usage:
  timewords parse 1d5h30m10s      # 1 день 5 часов 30 минут 10 секунд
  timewords parse 90              # bare numbers are minutes
  timewords humanize 210          # 3 минуты 30 секунд
  timewords date 1971-12-31       # 31 декабря 1971
  timewords datetime              # current local time and date

Exit code 2 = an argument could not be converted."
)]
pub struct Args {
    /// Only log errors; results are still printed
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print how each value was interpreted
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON objects
    #[arg(long, global = true, env = "TIMEWORDS_JSON")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Parse a duration such as 1d5h30m10s, 2h or 90 (minutes)
    Parse {
        #[arg(value_name = "DURATION", value_parser = convert::parse_duration)]
        duration: Duration,
    },

    /// Describe a number of seconds
    Humanize {
        #[arg(value_name = "SECONDS")]
        seconds: u64,
    },

    /// Describe a date given as YYYY-MM-DD (defaults to today)
    Date {
        #[arg(value_name = "DATE", value_parser = parse_date)]
        date: Option<NaiveDate>,
    },

    /// Describe a clock time given as HH:MM (defaults to now)
    Time {
        #[arg(value_name = "TIME", value_parser = parse_time)]
        time: Option<NaiveTime>,
    },

    /// Describe a timestamp given as YYYY-MM-DDTHH:MM (defaults to now)
    Datetime {
        #[arg(value_name = "DATETIME", value_parser = parse_datetime)]
        datetime: Option<NaiveDateTime>,
    },

    /// Interpret a yes/no token (on, yes, да, off, no, нет, ...)
    Bool {
        #[arg(value_name = "TOKEN", value_parser = convert::parse_bool, action = ArgAction::Set)]
        token: bool,
    },

    /// Interpret an integer
    Int {
        #[arg(value_name = "VALUE", value_parser = convert::parse_int, allow_hyphen_values = true)]
        value: i64,
    },
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Default log level when `RUST_LOG` is not set
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Error
        } else if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn parse_time(value: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|e| format!("expected HH:MM: {e}"))
}

fn parse_datetime(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M"))
        .map_err(|e| format!("expected YYYY-MM-DDTHH:MM: {e}"))
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for terminal output
    output: super::OutputManager,

    /// Emit JSON instead of plain phrases
    json: bool,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            output: super::OutputManager::new(args.verbose),
            json: args.json,
        }
    }
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    /// Whether results should be printed as JSON
    pub fn json(&self) -> bool {
        self.json
    }

    /// Print verbose message if in verbose mode
    pub fn verbose_println(&self, message: &str) -> std::io::Result<()> {
        self.output.verbose(message)
    }
}
