use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::{
    climate::{summary_between, summary_from, with_deadline, Error, TemperatureSummary},
    routes::ErrorResponse,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/v1.0/{start}",
    params(
        ("start" = String, Path, description = "First date to include, YYYY-MM-DD"),
    ),
    responses(
        (status = OK, description = "Min, max and average temperature from `start` through the last recorded date", body = Vec<TemperatureSummary>),
        (status = NOT_FOUND, description = "Malformed or out of range date, or no measurements at all", body = ErrorResponse),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to query the climate store", body = ErrorResponse),
        (status = GATEWAY_TIMEOUT, description = "Climate store did not answer in time", body = ErrorResponse)
    ))]
pub async fn start_summary(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Result<Json<Vec<TemperatureSummary>>, Error> {
    let summary = with_deadline(
        state.query_timeout,
        summary_from(state.climate_db.as_ref(), &start),
    )
    .await?;
    Ok(Json(vec![summary]))
}

#[utoipa::path(
    get,
    path = "/api/v1.0/{start}/{end}",
    params(
        ("start" = String, Path, description = "First date to include, YYYY-MM-DD"),
        ("end" = String, Path, description = "End date, YYYY-MM-DD; validated and echoed back but rows after it are still aggregated"),
    ),
    responses(
        (status = OK, description = "Min, max and average temperature from `start` onward", body = Vec<TemperatureSummary>),
        (status = NOT_FOUND, description = "Malformed, out of range or inverted dates, or no measurements at all", body = ErrorResponse),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to query the climate store", body = ErrorResponse),
        (status = GATEWAY_TIMEOUT, description = "Climate store did not answer in time", body = ErrorResponse)
    ))]
pub async fn range_summary(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<Vec<TemperatureSummary>>, Error> {
    let summary = with_deadline(
        state.query_timeout,
        summary_between(state.climate_db.as_ref(), &start, &end),
    )
    .await?;
    Ok(Json(vec![summary]))
}
