//! Date validation and temperature queries behind the `/api/v1.0` routes.
//!
//! Every date a caller supplies is checked lexically before the store is
//! touched, then against the store's live date bounds before any aggregate
//! query runs.

mod activity;
mod dates;
mod summary;

use std::{future::Future, time::Duration};

use time::Date;

use crate::db::{self, ClimateData, DateRange};

pub use activity::{most_active_station, trailing_cutoff, trailing_year, TRAILING_WINDOW_DAYS};
pub use dates::{
    check_in_bounds, check_range_in_bounds, is_date_shaped, parse_date, parse_range,
    validate_date, validate_range,
};
pub use summary::{summary_between, summary_from, temperature_summary, TemperatureSummary};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{input} is not a date or in correct format. Date should be YYYY-MM-DD")]
    MalformedDate { input: String },
    #[error(
        "{start} and/or {end} is not a date or in correct format. Date should be YYYY-MM-DD"
    )]
    MalformedRange { start: String, end: String },
    #[error("{input} is not in database date range. Must be between {first} and {last}")]
    OutOfRange {
        input: String,
        first: Date,
        last: Date,
    },
    #[error(
        "{start} and/or {end} is not in database date range. Must be between {first} and {last}"
    )]
    RangeOutOfBounds {
        start: String,
        end: String,
        first: Date,
        last: Date,
    },
    #[error("start date ({start}) is after end date ({end}). Please make sure date range is correct.")]
    InvertedRange { start: String, end: String },
    #[error("no measurements in database, date range is undefined")]
    NoData,
    #[error("Failed to query climate store: {0}")]
    Store(#[from] db::Error),
    #[error("Climate store did not answer within {0:?}")]
    Timeout(Duration),
}

impl Error {
    /// Problems with the caller's input, as opposed to the store
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::MalformedDate { .. }
                | Error::MalformedRange { .. }
                | Error::OutOfRange { .. }
                | Error::RangeOutOfBounds { .. }
                | Error::InvertedRange { .. }
        )
    }
}

/// Live date bounds; an empty measurement table is [`Error::NoData`].
pub async fn date_bounds(store: &dyn ClimateData) -> Result<DateRange, Error> {
    store.date_bounds().await?.ok_or(Error::NoData)
}

/// Runs `operation`, giving up with [`Error::Timeout`] once `deadline` passes.
pub async fn with_deadline<T, F>(deadline: Duration, operation: F) -> Result<T, Error>
where
    F: Future<Output = Result<T, Error>>,
{
    tokio::time::timeout(deadline, operation)
        .await
        .map_err(|_| Error::Timeout(deadline))?
}
