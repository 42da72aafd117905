//! `bool` and `int` commands. The value was already converted by clap.

use super::emit;
use crate::cli::RuntimeConfig;
use crate::error::Result;
use serde_json::json;

pub fn boolean(token: bool, config: &RuntimeConfig) -> Result<()> {
    emit(config, &token.to_string(), json!({ "value": token }))
}

pub fn integer(value: i64, config: &RuntimeConfig) -> Result<()> {
    emit(config, &value.to_string(), json!({ "value": value }))
}
