//! Command execution for each subcommand.
//!
//! Every command prints one result: the plain phrase by default, or a JSON
//! object with `--json`.

mod calendar;
mod convert;
mod duration;

use super::{Command, RuntimeConfig};
use crate::error::Result;
use serde_json::Value;

/// Run a parsed subcommand and print its result.
pub fn execute(command: &Command, config: &RuntimeConfig) -> Result<()> {
    match command {
        Command::Parse { duration } => duration::parse(*duration, config),
        Command::Humanize { seconds } => duration::humanize(*seconds, config),
        Command::Date { date } => calendar::date(*date, config),
        Command::Time { time } => calendar::time(*time, config),
        Command::Datetime { datetime } => calendar::datetime(*datetime, config),
        Command::Bool { token } => convert::boolean(*token, config),
        Command::Int { value } => convert::integer(*value, config),
    }
}

/// Print `text`, or `json` when JSON output was requested.
fn emit(config: &RuntimeConfig, text: &str, json: Value) -> Result<()> {
    if config.json() {
        config.output().result(&serde_json::to_string(&json)?)?;
    } else {
        config.output().result(text)?;
    }
    Ok(())
}
