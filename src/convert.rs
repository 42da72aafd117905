//! Argument converters for the command layer.
//!
//! Each converter turns a raw user-typed string into a typed value or a
//! [`ConversionError`] carrying the argument, so the caller decides how to
//! report it. The free functions at the bottom have the signature clap
//! expects from a `value_parser`.

use crate::error::{ConversionError, ValueKind};
use log::debug;
use std::time::Duration;

/// Converts a raw argument into a typed value.
pub trait Converter {
    type Output;

    fn convert(argument: &str) -> Result<Self::Output, ConversionError>;
}

/// Signed integers. Surrounding whitespace and a leading `+` are allowed.
///
/// Only ASCII digits are accepted: `1_000` and non-Latin digits such as
/// `١٢` are rejected.
pub struct IntConverter;

impl Converter for IntConverter {
    type Output = i64;

    fn convert(argument: &str) -> Result<i64, ConversionError> {
        argument.trim().parse().map_err(|e| {
            debug!("Rejected integer argument {argument:?}: {e}");
            ConversionError::new(ValueKind::Int, argument)
        })
    }
}

/// Compact duration strings such as `1d5h30m10s`; see [`crate::duration`].
pub struct DurationConverter;

impl Converter for DurationConverter {
    type Output = Duration;

    fn convert(argument: &str) -> Result<Duration, ConversionError> {
        crate::duration::parse_duration(argument)
    }
}

/// Tokens accepted as `true`.
pub const TRUE_TOKENS: [&str; 7] = ["on", "yes", "y", "1", "true", "да", "д"];

/// Tokens accepted as `false`.
pub const FALSE_TOKENS: [&str; 8] = ["off", "no", "n", "0", "false", "нет", "н", "не"];

/// Yes/no tokens in English or Russian, case-insensitive.
pub struct BoolConverter;

impl Converter for BoolConverter {
    type Output = bool;

    fn convert(argument: &str) -> Result<bool, ConversionError> {
        let token = argument.to_lowercase();
        if TRUE_TOKENS.contains(&token.as_str()) {
            Ok(true)
        } else if FALSE_TOKENS.contains(&token.as_str()) {
            Ok(false)
        } else {
            debug!("Rejected boolean argument {argument:?}");
            Err(ConversionError::new(ValueKind::Bool, argument))
        }
    }
}

/// `value_parser` for integer arguments
pub fn parse_int(argument: &str) -> Result<i64, ConversionError> {
    IntConverter::convert(argument)
}

/// `value_parser` for duration arguments
pub fn parse_duration(argument: &str) -> Result<Duration, ConversionError> {
    DurationConverter::convert(argument)
}

/// `value_parser` for boolean arguments
pub fn parse_bool(argument: &str) -> Result<bool, ConversionError> {
    BoolConverter::convert(argument)
}
