//! `parse` and `humanize` commands.

use super::emit;
use crate::cli::RuntimeConfig;
use crate::error::Result;
use crate::humanize::Decomposed;
use serde_json::json;
use std::time::Duration;

pub fn parse(duration: Duration, config: &RuntimeConfig) -> Result<()> {
    let seconds = duration.as_secs();
    config.verbose_println(&format!("   Parsed {seconds} seconds"))?;
    describe(seconds, config)
}

pub fn humanize(seconds: u64, config: &RuntimeConfig) -> Result<()> {
    describe(seconds, config)
}

fn describe(seconds: u64, config: &RuntimeConfig) -> Result<()> {
    let parts = Decomposed::from_seconds(seconds);
    let text = parts.to_string();
    emit(
        config,
        &text,
        json!({
            "seconds": seconds,
            "parts": parts,
            "text": text,
        }),
    )
}
