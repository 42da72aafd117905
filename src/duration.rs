//! Compact duration strings.
//!
//! Accepts strings like `1d5h30m10s`, `2h`, `45s`, or a bare number which is
//! read as minutes. Matching is case-insensitive.

use crate::error::ConversionError;
use log::{debug, trace};
use std::time::Duration;

/// A single-character unit suffix and the number of seconds it stands for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct UnitToken {
    pub suffix: char,
    pub seconds: u64,
}

/// Unit tokens in the order they are consumed.
///
/// Each step only splits on its own first occurrence, so the order matters:
/// scanning `m` before `h` would misread `1h30m`.
pub const UNIT_TOKENS: [UnitToken; 4] = [
    UnitToken { suffix: 'd', seconds: 86_400 },
    UnitToken { suffix: 'h', seconds: 3_600 },
    UnitToken { suffix: 'm', seconds: 60 },
    UnitToken { suffix: 's', seconds: 1 },
];

/// Parses a compact duration string into a strictly positive [`Duration`].
///
/// # Errors
///
/// Returns a duration [`ConversionError`] carrying `argument` unchanged when:
/// - text before a unit suffix is not a run of decimal digits,
/// - no suffix is present and the string is not all digits,
/// - the total is zero or does not fit in `u64` seconds.
///
/// Text left over after the `s` suffix is ignored. A suffix that appears
/// twice is only split on once, so `1h2h` is one hour while `1h2h30m` fails
/// on `2h30` before `m`.
pub fn parse_duration(argument: &str) -> Result<Duration, ConversionError> {
    let lowered = argument.to_lowercase();

    let total = if is_digits(&lowered) {
        trace!("Reading bare number {lowered:?} as minutes");
        lowered.parse::<u64>().ok().and_then(|m| m.checked_mul(60))
    } else {
        sum_units(&lowered)
    };

    match total {
        Some(seconds) if seconds > 0 => Ok(Duration::from_secs(seconds)),
        _ => {
            debug!("Rejected duration argument {argument:?}");
            Err(ConversionError::duration(argument))
        }
    }
}

/// Folds over [`UNIT_TOKENS`], threading the unconsumed remainder through
/// each step. `None` means a malformed count or an overflow.
fn sum_units(input: &str) -> Option<u64> {
    let (total, rest) = UNIT_TOKENS
        .iter()
        .try_fold((0u64, input), |(total, rest), unit| {
            let Some((count, tail)) = rest.split_once(unit.suffix) else {
                return Some((total, rest));
            };
            if !is_digits(count) {
                return None;
            }
            let count: u64 = count.parse().ok()?;
            debug!("Resolved {count}{}", unit.suffix);
            let seconds = count.checked_mul(unit.seconds)?;
            Some((total.checked_add(seconds)?, tail))
        })?;

    if !rest.is_empty() {
        trace!("Ignoring trailing {rest:?}");
    }
    Some(total)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
