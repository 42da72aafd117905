//! Command line interface for timewords.
//!
//! Argument parsing lives in [`args`], command execution in [`commands`].

mod args;
pub mod commands;
mod output;

pub use args::{Args, Command, RuntimeConfig};
pub use output::OutputManager;

use crate::error::Result;

/// Main CLI entry point
pub fn run(args: Args) -> Result<i32> {
    let config = RuntimeConfig::from(&args);
    commands::execute(&args.command, &config)?;
    Ok(0)
}
