use chrono::{Days, NaiveDate};

pub(super) fn add_days(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX)
}

pub(super) fn non_whitespace_chars(s: &str) -> usize {
    s.chars().filter(|c| !c.is_whitespace()).count()
}

/// Chiffres, espaces, `+`, `-` et parenthèses uniquement, avec assez de chiffres.
pub(super) fn is_phone_like(raw: &str, min_digits: usize) -> bool {
    let allowed = raw
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'));
    allowed && raw.chars().filter(char::is_ascii_digit).count() >= min_digits
}
