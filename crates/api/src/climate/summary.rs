use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{check_in_bounds, check_range_in_bounds, date_bounds, parse_date, parse_range, Error};
use crate::db::{format_date, ClimateData, TemperatureStats};

/// Temperature aggregate over every measurement on or after `start date`.
/// The three temperatures are `null` when nothing matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TemperatureSummary {
    #[serde(rename = "start date")]
    pub start_date: String,
    #[serde(rename = "end date")]
    pub end_date: String,
    #[serde(rename = "min temp")]
    pub min_temp: Option<f64>,
    #[serde(rename = "max temp")]
    pub max_temp: Option<f64>,
    #[serde(rename = "avg temp")]
    pub avg_temp: Option<f64>,
}

impl TemperatureSummary {
    fn new(start_date: String, end_date: String, stats: TemperatureStats) -> Self {
        Self {
            start_date,
            end_date,
            min_temp: stats.min,
            max_temp: stats.max,
            avg_temp: stats.avg,
        }
    }
}

/// Aggregate from `start` through the last recorded date.
pub async fn summary_from(
    store: &dyn ClimateData,
    start: &str,
) -> Result<TemperatureSummary, Error> {
    let start_date = parse_date(start)?;
    let bounds = date_bounds(store).await?;
    check_in_bounds(start, start_date, &bounds)?;

    let stats = store.temperature_stats(start_date).await?;
    Ok(TemperatureSummary::new(
        start.to_string(),
        format_date(bounds.last)?,
        stats,
    ))
}

/// Aggregate for a validated `start`/`end` pair.
///
/// `end` must be in bounds and not before `start`, but rows are only filtered
/// by `date >= start`; `end` is echoed back as `end date` without narrowing
/// the aggregate.
pub async fn summary_between(
    store: &dyn ClimateData,
    start: &str,
    end: &str,
) -> Result<TemperatureSummary, Error> {
    let dates = parse_range(start, end)?;
    let bounds = date_bounds(store).await?;
    let (start_date, _) = check_range_in_bounds((start, end), dates, &bounds)?;

    let stats = store.temperature_stats(start_date).await?;
    Ok(TemperatureSummary::new(
        start.to_string(),
        end.to_string(),
        stats,
    ))
}

pub async fn temperature_summary(
    store: &dyn ClimateData,
    start: &str,
    end: Option<&str>,
) -> Result<TemperatureSummary, Error> {
    match end {
        Some(end) => summary_between(store, start, end).await,
        None => summary_from(store, start).await,
    }
}
