//! Date and clock-time phrases.

use chrono::{Datelike, Timelike};

/// Month names in the genitive case, indexed by `month % 12`.
///
/// December comes first so that month 12 lands on index 0.
pub const MONTHS_GENITIVE: [&str; 12] = [
    "декабря",
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
];

/// Formats a date as `31 декабря 1971`.
pub fn humanize_date<D: Datelike>(date: &D) -> String {
    let month = MONTHS_GENITIVE[(date.month() % 12) as usize];
    format!("{} {} {}", date.day(), month, date.year())
}

/// Formats a clock time as `18:30`, or `9:05` with an unpadded hour.
pub fn humanize_time<T: Timelike>(time: &T) -> String {
    format!("{}:{:02}", time.hour(), time.minute())
}

/// Formats a timestamp as the time followed by the date, `9:00 1 сентября 1999`.
pub fn humanize_datetime<T: Datelike + Timelike>(datetime: &T) -> String {
    format!("{} {}", humanize_time(datetime), humanize_date(datetime))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_humanize_date() {
        assert_eq!(humanize_date(&date(1971, 12, 31)), "31 декабря 1971");
        assert_eq!(humanize_date(&date(1999, 9, 1)), "1 сентября 1999");
        assert_eq!(humanize_date(&date(2024, 1, 7)), "7 января 2024");
        assert_eq!(humanize_date(&date(2023, 11, 30)), "30 ноября 2023");
    }

    #[test]
    fn test_every_month_has_a_name() {
        for month in 1..=12 {
            let text = humanize_date(&date(2000, month, 1));
            assert_eq!(text, format!("1 {} 2000", MONTHS_GENITIVE[(month % 12) as usize]));
        }
    }

    #[test]
    fn test_humanize_time() {
        let time = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
        assert_eq!(humanize_time(&time(18, 30)), "18:30");
        assert_eq!(humanize_time(&time(7, 5)), "7:05");
        assert_eq!(humanize_time(&time(0, 0)), "0:00");
        assert_eq!(humanize_time(&time(23, 10)), "23:10");
    }

    #[test]
    fn test_humanize_datetime() {
        let naive = date(1999, 9, 1).and_hms_opt(9, 0, 0).unwrap();
        assert_eq!(humanize_datetime(&naive), "9:00 1 сентября 1999");

        let utc = Utc.with_ymd_and_hms(1971, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(humanize_datetime(&utc), "23:59 31 декабря 1971");
    }
}
