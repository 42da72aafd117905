//! Russian numeral agreement.
//!
//! A countable noun takes one of three forms depending on the number in front
//! of it: `1 минута`, `2 минуты`, `5 минут`.

/// The three forms of a noun that agree with a preceding count.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WordForms {
    /// Used after 1, 21, 31, ... (`минута`)
    pub one: &'static str,
    /// Used after 2-4, 22-24, ... (`минуты`)
    pub few: &'static str,
    /// Used after 0, 5-20, 25-30, ... (`минут`)
    pub many: &'static str,
}

impl WordForms {
    pub const fn new(one: &'static str, few: &'static str, many: &'static str) -> Self {
        Self { one, few, many }
    }

    /// Selects the form that agrees with `count`.
    pub fn pick(&self, count: u64) -> &'static str {
        pick_form(count, self)
    }
}

/// Returns the form of `forms` that agrees with `count`.
///
/// Only a raw count of 11 to 14 takes the irregular `many` form. Larger
/// counts ending in 11-14 (`111`, `212`) are decided by their last digit.
pub fn pick_form(count: u64, forms: &WordForms) -> &'static str {
    if 10 < count && count < 15 {
        return forms.many;
    }

    match count % 10 {
        1 => forms.one,
        2..=4 => forms.few,
        _ => forms.many,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: WordForms = WordForms::new("ключ", "ключа", "ключей");

    #[test]
    fn test_pick_form() {
        assert_eq!(KEYS.pick(0), "ключей");
        assert_eq!(KEYS.pick(1), "ключ");
        assert_eq!(KEYS.pick(2), "ключа");
        assert_eq!(KEYS.pick(4), "ключа");
        assert_eq!(KEYS.pick(5), "ключей");
        assert_eq!(KEYS.pick(10), "ключей");
        assert_eq!(KEYS.pick(11), "ключей");
        assert_eq!(KEYS.pick(14), "ключей");
        assert_eq!(KEYS.pick(15), "ключей");
        assert_eq!(KEYS.pick(21), "ключ");
        assert_eq!(KEYS.pick(23), "ключа");
        assert_eq!(KEYS.pick(101), "ключ");
    }

    #[test]
    fn test_exception_band_applies_to_raw_count_only() {
        assert_eq!(KEYS.pick(111), "ключ");
        assert_eq!(KEYS.pick(112), "ключа");
        assert_eq!(KEYS.pick(114), "ключа");
        assert_eq!(KEYS.pick(1011), "ключ");
    }

    #[test]
    fn test_agreement_rule_holds_for_all_small_counts() {
        for n in 0..=1000u64 {
            let irregular = 10 < n && n < 15;
            let expected = match n % 10 {
                1 if !irregular => KEYS.one,
                2..=4 if !irregular => KEYS.few,
                _ => KEYS.many,
            };
            assert_eq!(pick_form(n, &KEYS), expected, "count {n}");
        }
    }
}
