//! Duration phrases.

use crate::plural::WordForms;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Shown in place of an empty phrase when every unit is zero.
pub const SUB_SECOND: &str = "0.1 секунды";

/// Word forms for weeks, days, hours, minutes and seconds, largest first.
pub static UNIT_FORMS: [WordForms; 5] = [
    WordForms::new("неделя", "недели", "недель"),
    WordForms::new("день", "дня", "дней"),
    WordForms::new("час", "часа", "часов"),
    WordForms::new("минута", "минуты", "минут"),
    WordForms::new("секунда", "секунды", "секунд"),
];

/// A seconds count split into calendar-free units.
///
/// Every field except `weeks` is below its modulus (7, 24, 60, 60).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Decomposed {
    pub weeks: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Decomposed {
    pub fn from_seconds(total: u64) -> Self {
        let seconds = total % 60;
        let total = total / 60;
        let minutes = total % 60;
        let total = total / 60;
        let hours = total % 24;
        let total = total / 24;
        let days = total % 7;
        let weeks = total / 7;

        Self {
            weeks,
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// Whole seconds of `duration`; the fractional part is dropped.
    pub fn from_duration(duration: Duration) -> Self {
        Self::from_seconds(duration.as_secs())
    }

    /// Re-sums the units into seconds, or `None` if the sum overflows `u64`.
    pub fn total_seconds(&self) -> Option<u64> {
        let days = self.weeks.checked_mul(7)?.checked_add(self.days)?;
        let hours = days.checked_mul(24)?.checked_add(self.hours)?;
        let minutes = hours.checked_mul(60)?.checked_add(self.minutes)?;
        minutes.checked_mul(60)?.checked_add(self.seconds)
    }

    /// Unit counts paired with their word forms, largest unit first.
    fn parts(&self) -> [(u64, &'static WordForms); 5] {
        [
            (self.weeks, &UNIT_FORMS[0]),
            (self.days, &UNIT_FORMS[1]),
            (self.hours, &UNIT_FORMS[2]),
            (self.minutes, &UNIT_FORMS[3]),
            (self.seconds, &UNIT_FORMS[4]),
        ]
    }
}

impl fmt::Display for Decomposed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (count, forms) in self.parts() {
            if count == 0 {
                continue;
            }
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{} {}", count, forms.pick(count))?;
            first = false;
        }

        if first {
            f.write_str(SUB_SECOND)?;
        }
        Ok(())
    }
}

/// Describes a raw number of seconds, e.g. `1 день 5 часов 30 минут 10 секунд`.
pub fn humanize_seconds(seconds: u64) -> String {
    Decomposed::from_seconds(seconds).to_string()
}

/// Describes a [`Duration`] to whole-second precision.
pub fn humanize_duration(duration: Duration) -> String {
    Decomposed::from_duration(duration).to_string()
}
