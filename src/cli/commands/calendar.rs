//! `date`, `time` and `datetime` commands.
//!
//! A missing argument means the current local time.

use super::emit;
use crate::cli::RuntimeConfig;
use crate::error::Result;
use crate::humanize::{humanize_date, humanize_datetime, humanize_time};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::json;

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn date(date: Option<NaiveDate>, config: &RuntimeConfig) -> Result<()> {
    let date = date.unwrap_or_else(|| now().date());
    config.verbose_println(&format!("   Date: {date}"))?;
    let text = humanize_date(&date);
    emit(config, &text, json!({ "date": date, "text": text }))
}

pub fn time(time: Option<NaiveTime>, config: &RuntimeConfig) -> Result<()> {
    let time = time.unwrap_or_else(|| now().time());
    config.verbose_println(&format!("   Time: {time}"))?;
    let text = humanize_time(&time);
    emit(config, &text, json!({ "time": time, "text": text }))
}

pub fn datetime(datetime: Option<NaiveDateTime>, config: &RuntimeConfig) -> Result<()> {
    let datetime = datetime.unwrap_or_else(now);
    config.verbose_println(&format!("   Timestamp: {datetime}"))?;
    let text = humanize_datetime(&datetime);
    emit(config, &text, json!({ "datetime": datetime, "text": text }))
}
