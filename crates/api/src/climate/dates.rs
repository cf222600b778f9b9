use regex::Regex;
use std::sync::LazyLock;
use time::Date;

use super::Error;
use crate::db::{DateRange, DATE_FORMAT};

static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date shape pattern compiles"));

/// `YYYY-MM-DD` shape only, no calendar check
pub fn is_date_shaped(input: &str) -> bool {
    DATE_SHAPE.is_match(input)
}

fn to_date(input: &str) -> Option<Date> {
    if !is_date_shaped(input) {
        return None;
    }
    Date::parse(input, DATE_FORMAT).ok()
}

/// Lexical then calendar check of a single date. Never touches the store.
pub fn parse_date(input: &str) -> Result<Date, Error> {
    to_date(input).ok_or_else(|| Error::MalformedDate {
        input: input.to_string(),
    })
}

/// Lexical then calendar check of a start/end pair. Either failing rejects both.
pub fn parse_range(start: &str, end: &str) -> Result<(Date, Date), Error> {
    match (to_date(start), to_date(end)) {
        (Some(start_date), Some(end_date)) => Ok((start_date, end_date)),
        _ => Err(Error::MalformedRange {
            start: start.to_string(),
            end: end.to_string(),
        }),
    }
}

pub fn check_in_bounds(input: &str, date: Date, bounds: &DateRange) -> Result<Date, Error> {
    if bounds.contains(date) {
        Ok(date)
    } else {
        Err(Error::OutOfRange {
            input: input.to_string(),
            first: bounds.first,
            last: bounds.last,
        })
    }
}

/// Both ends must be inside `bounds` before their order is compared.
pub fn check_range_in_bounds(
    (start, end): (&str, &str),
    (start_date, end_date): (Date, Date),
    bounds: &DateRange,
) -> Result<(Date, Date), Error> {
    if !bounds.contains(start_date) || !bounds.contains(end_date) {
        return Err(Error::RangeOutOfBounds {
            start: start.to_string(),
            end: end.to_string(),
            first: bounds.first,
            last: bounds.last,
        });
    }
    if start_date > end_date {
        return Err(Error::InvertedRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    Ok((start_date, end_date))
}

pub fn validate_date(input: &str, bounds: &DateRange) -> Result<Date, Error> {
    let date = parse_date(input)?;
    check_in_bounds(input, date, bounds)
}

pub fn validate_range(start: &str, end: &str, bounds: &DateRange) -> Result<(Date, Date), Error> {
    let dates = parse_range(start, end)?;
    check_range_in_bounds((start, end), dates, bounds)
}
