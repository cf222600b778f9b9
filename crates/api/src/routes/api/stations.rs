use axum::{extract::State, Json};
use futures::TryFutureExt;
use std::sync::Arc;

use crate::{
    climate::{with_deadline, Error},
    db::Station,
    routes::ErrorResponse,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/v1.0/stations",
    responses(
        (status = OK, description = "All weather stations", body = Vec<Station>),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to query the climate store", body = ErrorResponse),
        (status = GATEWAY_TIMEOUT, description = "Climate store did not answer in time", body = ErrorResponse)
    ))]
pub async fn stations(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Station>>, Error> {
    let stations = with_deadline(
        state.query_timeout,
        state.climate_db.stations().map_err(Error::from),
    )
    .await?;
    Ok(Json(stations))
}
