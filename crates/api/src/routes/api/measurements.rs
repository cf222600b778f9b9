use axum::{extract::State, Json};
use futures::TryFutureExt;
use std::sync::Arc;

use crate::{
    climate::{trailing_year, with_deadline, Error},
    db::{Precipitation, TemperatureObservation},
    routes::ErrorResponse,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/v1.0/precipitation",
    responses(
        (status = OK, description = "Every precipitation reading as a single-key `{date: prcp}` object", body = Vec<Precipitation>),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to query the climate store", body = ErrorResponse),
        (status = GATEWAY_TIMEOUT, description = "Climate store did not answer in time", body = ErrorResponse)
    ))]
pub async fn precipitation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Precipitation>>, Error> {
    let readings = with_deadline(
        state.query_timeout,
        state.climate_db.precipitation().map_err(Error::from),
    )
    .await?;
    Ok(Json(readings))
}

#[utoipa::path(
    get,
    path = "/api/v1.0/tobs",
    responses(
        (status = OK, description = "Temperature observations of the most active station over the last 365 days of data", body = Vec<TemperatureObservation>),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to query the climate store", body = ErrorResponse),
        (status = GATEWAY_TIMEOUT, description = "Climate store did not answer in time", body = ErrorResponse)
    ))]
pub async fn tobs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TemperatureObservation>>, Error> {
    let observations =
        with_deadline(state.query_timeout, trailing_year(state.climate_db.as_ref())).await?;
    Ok(Json(observations))
}
