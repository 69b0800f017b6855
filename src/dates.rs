use chrono::{Datelike, Duration, Local, NaiveDate};

pub const NOT_AVAILABLE: &str = "N/A";
pub const INVALID_DATE: &str = "Invalid Date";
pub const INVALID_FORMAT: &str = "Invalid Format";

/// A date as it reaches the formatting helpers: an already computed calendar
/// day, a string from the backend, or nothing at all.
#[derive(Debug, Clone, Copy)]
pub enum DateInput<'a> {
    Date(NaiveDate),
    Text(&'a str),
    Missing,
}

impl From<NaiveDate> for DateInput<'_> {
    fn from(date: NaiveDate) -> Self {
        DateInput::Date(date)
    }
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(text: &'a str) -> Self {
        DateInput::Text(text)
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(text: &'a String) -> Self {
        DateInput::Text(text.as_str())
    }
}

impl<'a, T: Into<DateInput<'a>>> From<Option<T>> for DateInput<'a> {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(DateInput::Missing)
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn canonical_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn canonical_key_opt(date: Option<NaiveDate>) -> String {
    date.map(canonical_key).unwrap_or_default()
}

/// Parses a strict `YYYY-MM-DD` key. Anything else, including out-of-range
/// calendar fields, yields `None`.
pub fn parse_key(text: &str) -> Option<NaiveDate> {
    if !is_key_shaped(text) {
        return None;
    }
    ymd_from_parts(&text[0..4], &text[5..7], &text[8..10])
}

/// Parses `Y-M-D` with any number of digits per field, e.g. `2024-3-5`.
/// Each field is read up to its first non-digit, so a trailing time such as
/// `2024-03-05T10:00:00` still yields the 5th.
pub fn parse_loose(text: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = text.split('-').collect();
    match parts.as_slice() {
        [year, month, day] => {
            ymd_from_parts(leading_digits(year), leading_digits(month), leading_digits(day))
        }
        _ => None,
    }
}

fn leading_digits(field: &str) -> &str {
    let field = field.trim_start();
    let end = field
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(field.len());
    &field[..end]
}

/// `DD/MM/YYYY`, or one of the placeholder labels when the input is unusable.
pub fn display_label<'a>(input: impl Into<DateInput<'a>>) -> String {
    match resolve(input.into()) {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(label) => label.to_string(),
    }
}

/// `DD/MM` for chart axes; empty when the input is unusable.
pub fn short_date_label<'a>(input: impl Into<DateInput<'a>>) -> String {
    resolve(input.into())
        .map(|date| date.format("%d/%m").to_string())
        .unwrap_or_default()
}

pub fn short_weekday_label(date: NaiveDate) -> String {
    date.format("%a").to_string()
}

pub fn week_label(start: NaiveDate) -> String {
    format!("Wk {}", start.format("%b %-d"))
}

/// Monday of the Monday..Sunday week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

fn resolve(input: DateInput<'_>) -> Result<NaiveDate, &'static str> {
    match input {
        DateInput::Date(date) => Ok(date),
        DateInput::Text(text) if has_key_prefix(text) => {
            let parts: Vec<&str> = text.get(..10).unwrap_or_default().split('-').collect();
            match parts.as_slice() {
                [year, month, day] => ymd_from_parts(year, month, day).ok_or(INVALID_DATE),
                _ => Err(INVALID_FORMAT),
            }
        }
        DateInput::Text(_) | DateInput::Missing => Err(NOT_AVAILABLE),
    }
}

fn ymd_from_parts(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    let year = year.parse::<i32>().ok()?;
    let month = month.parse::<u32>().ok()?;
    let day = day.parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn has_key_prefix(text: &str) -> bool {
    text.get(..10).is_some_and(is_key_shaped)
}

fn is_key_shaped(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(idx, byte)| match idx {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}
