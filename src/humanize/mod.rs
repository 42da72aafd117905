//! Russian phrases for durations, dates and times.
//!
//! - [`humanize_seconds`] / [`humanize_duration`]: `3 минуты 30 секунд`
//! - [`humanize_date`]: `31 декабря 1971`
//! - [`humanize_time`]: `18:30`
//! - [`humanize_datetime`]: `9:00 1 сентября 1999`

mod calendar;
mod span;

pub use calendar::{MONTHS_GENITIVE, humanize_date, humanize_datetime, humanize_time};
pub use span::{Decomposed, SUB_SECOND, UNIT_FORMS, humanize_duration, humanize_seconds};
