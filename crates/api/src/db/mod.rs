pub mod schema;
pub mod sqlite;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::{format_description::BorrowedFormatItem, macros::format_description, Date};
use utoipa::ToSchema;

pub use sqlite::ClimateDatabase;

/// Text form every `measurement.date` value is stored in
pub const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to query sqlite: {0}")]
    Query(#[from] sqlx::Error),
    #[error("Failed to parse stored date: {0}")]
    DateParse(#[from] time::error::Parse),
    #[error("Failed to format date: {0}")]
    DateFormat(#[from] time::error::Format),
    #[error("Database file not found: {0}")]
    NotFound(String),
    #[error("Database schema mismatch: {0}")]
    Schema(String),
}

/// Read-only access to the observation store.
///
/// Every call is an independent query; implementations hold no per-request state.
#[async_trait]
pub trait ClimateData: Send + Sync {
    /// Earliest and latest measurement dates, `None` when there are no measurements
    async fn date_bounds(&self) -> Result<Option<DateRange>, Error>;
    async fn precipitation(&self) -> Result<Vec<Precipitation>, Error>;
    async fn stations(&self) -> Result<Vec<Station>, Error>;
    /// Measurement counts per station, busiest first
    async fn station_activity(&self) -> Result<Vec<StationActivity>, Error>;
    /// Min, max and mean `tobs` over every measurement on or after `since`
    async fn temperature_stats(&self, since: Date) -> Result<TemperatureStats, Error>;
    async fn temperature_observations(
        &self,
        station: &str,
        since: Date,
    ) -> Result<Vec<TemperatureObservation>, Error>;
}

/// Observed date bounds of the measurement table, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub first: Date,
    pub last: Date,
}

impl DateRange {
    pub fn contains(&self, date: Date) -> bool {
        self.first <= date && date <= self.last
    }
}

pub fn parse_stored_date(value: &str) -> Result<Date, Error> {
    Ok(Date::parse(value, DATE_FORMAT)?)
}

pub fn format_date(date: Date) -> Result<String, Error> {
    Ok(date.format(DATE_FORMAT)?)
}

/// A single `{"<date>": prcp}` reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct Precipitation(BTreeMap<String, Option<f64>>);

impl Precipitation {
    pub fn new(date: String, prcp: Option<f64>) -> Self {
        Self(BTreeMap::from([(date, prcp)]))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Station {
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub id: i64,
    pub elevation: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct StationActivity {
    pub station: String,
    pub observations: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct TemperatureObservation {
    pub date: String,
    pub tobs: f64,
    pub station: String,
}

/// Aggregate over a filtered set of measurements; all `None` when the set is empty
#[derive(Debug, Clone, Copy, Default, PartialEq, sqlx::FromRow)]
pub struct TemperatureStats {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub avg: Option<f64>,
}
