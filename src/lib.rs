//! Compact duration strings and Russian time phrases.
//!
//! This library provides:
//! - a parser for duration strings such as `1d5h30m10s` ([`duration`])
//! - numeral agreement for Russian nouns ([`plural`])
//! - phrases for durations, dates and times ([`humanize`])
//! - argument converters for command layers ([`convert`])
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod convert;
pub mod duration;
pub mod error;
pub mod humanize;
pub mod plural;

// Re-export commonly used types
pub use convert::{BoolConverter, Converter, DurationConverter, IntConverter};
pub use duration::parse_duration;
pub use error::{ConversionError, Error, Result, ValueKind};
pub use humanize::{
    humanize_date, humanize_datetime, humanize_duration, humanize_seconds, humanize_time,
};
pub use plural::{WordForms, pick_form};
