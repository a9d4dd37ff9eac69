use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::core::types::PlayAxisValue;

/// Caption used for the group of points that carry no play-axis value.
pub const BLANK_CAPTION: &str = "(Blank)";

const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];
const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%B %d, %Y", "%d %B %Y"];

/// Comparison semantics inferred for a set of play-axis values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueClass {
    Number,
    Date,
    String,
}

/// Infers the value class with fixed precedence: number, then date, then string.
///
/// One value that fails a class pushes the whole set to the next class.
pub fn classify<'a, I>(values: I) -> ValueClass
where
    I: IntoIterator<Item = &'a PlayAxisValue>,
    I::IntoIter: Clone,
{
    let values = values.into_iter();
    if values.clone().all(|value| parse_number(value).is_some()) {
        return ValueClass::Number;
    }
    if values.clone().all(|value| parse_date(value).is_some()) {
        return ValueClass::Date;
    }
    ValueClass::String
}

#[must_use]
pub fn parse_number(value: &PlayAxisValue) -> Option<f64> {
    let parsed = match value {
        PlayAxisValue::Number(number) => *number,
        PlayAxisValue::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()?
        }
    };
    parsed.is_finite().then_some(parsed)
}

/// Parses a calendar date; numbers are read as epoch milliseconds.
#[must_use]
pub fn parse_date(value: &PlayAxisValue) -> Option<NaiveDateTime> {
    match value {
        PlayAxisValue::Number(millis) => {
            if !millis.is_finite() {
                return None;
            }
            DateTime::from_timestamp_millis(millis.trunc() as i64).map(|time| time.naive_utc())
        }
        PlayAxisValue::Text(text) => parse_date_text(text.trim()),
    }
}

fn parse_date_text(text: &str) -> Option<NaiveDateTime> {
    if text.is_empty() {
        return None;
    }
    if let Ok(time) = DateTime::parse_from_rfc3339(text) {
        return Some(time.naive_utc());
    }
    for format in DATE_TIME_FORMATS {
        if let Ok(time) = NaiveDateTime::parse_from_str(text, format) {
            return Some(time);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    // Year-month and bare-year shapes default to the first day of the period.
    let parts: Vec<&str> = text.split('-').collect();
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    match parts.as_slice() {
        [year, month] if year.len() == 4 && all_digits(*year) && all_digits(*month) => {
            NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)?.and_hms_opt(0, 0, 0)
        }
        [year] if year.len() == 4 && all_digits(*year) => {
            NaiveDate::from_ymd_opt(year.parse().ok()?, 1, 1)?.and_hms_opt(0, 0, 0)
        }
        _ => None,
    }
}

/// Formats a value for captions and axis labels.
///
/// Numbers render as-is, dates as en-US `MM/DD/YYYY`, strings verbatim.
#[must_use]
pub fn format_value(value: Option<&PlayAxisValue>, class: ValueClass) -> String {
    let Some(value) = value else {
        return BLANK_CAPTION.to_owned();
    };
    match class {
        ValueClass::Date => parse_date(value)
            .map(|time| time.format("%m/%d/%Y").to_string())
            .unwrap_or_else(|| value.to_string()),
        ValueClass::Number | ValueClass::String => value.to_string(),
    }
}
