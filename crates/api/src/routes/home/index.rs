use std::sync::Arc;

use axum::{extract::State, response::Html};
use futures::TryFutureExt;

use crate::{
    climate::{with_deadline, Error},
    templates::home_page,
    AppState,
};

/// Route listing with the live date range filled in (GET /)
pub async fn index_handler(State(state): State<Arc<AppState>>) -> Result<Html<String>, Error> {
    let bounds = with_deadline(
        state.query_timeout,
        state.climate_db.date_bounds().map_err(Error::from),
    )
    .await?;
    Ok(Html(
        home_page(&state.remote_url, bounds.as_ref()).into_string(),
    ))
}
