//! Parser for the structured-data point-in-time grammar.
//!
//! Values look like `+1815-12-10T00:00:00Z`: an explicit era sign, a year of
//! at least four digits, month and day, a time of day and a `Z` designator.
//! Year-precision values pad month and day with `00`.

use crate::core::error::DomainError;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Parse a point-in-time string into a naive UTC date-time.
///
/// A single leading `+` is stripped; a leading `-` yields a negative
/// (astronomical) year. Month or day `00` is read as `01`.
pub fn parse_time(raw: &str) -> Result<NaiveDateTime, DomainError> {
    let unsigned = raw.trim().strip_prefix('+').unwrap_or(raw.trim());

    let (date_part, time_part) = unsigned
        .split_once('T')
        .ok_or_else(|| DomainError::invalid_time(raw, "missing 'T' separator"))?;
    let time_part = time_part.strip_suffix('Z').unwrap_or(time_part);

    let (negative, date_body) = match date_part.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, date_part),
    };

    let mut fields = date_body.splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(DomainError::invalid_time(raw, "expected YYYY-MM-DD"));
    };

    let year = parse_year(raw, year)?;
    let year = if negative { -year } else { year };
    let month = parse_component(raw, month, "month")?.max(1);
    let day = parse_component(raw, day, "day")?.max(1);

    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| DomainError::invalid_time(raw, "date out of range"))?;
    let time = NaiveTime::parse_from_str(time_part, "%H:%M:%S")
        .map_err(|e| DomainError::invalid_time(raw, format!("bad time of day: {}", e)))?;

    Ok(date.and_time(time))
}

fn parse_year(raw: &str, digits: &str) -> Result<i32, DomainError> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(DomainError::invalid_time(raw, "bad year"));
    }
    digits
        .parse::<i32>()
        .map_err(|_| DomainError::invalid_time(raw, "year out of range"))
}

fn parse_component(raw: &str, digits: &str, what: &str) -> Result<u32, DomainError> {
    if digits.len() != 2 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(DomainError::invalid_time(raw, format!("bad {}", what)));
    }
    digits
        .parse::<u32>()
        .map_err(|_| DomainError::invalid_time(raw, format!("bad {}", what)))
}
