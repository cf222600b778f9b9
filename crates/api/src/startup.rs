use crate::{
    climate::TemperatureSummary,
    db::{ClimateData, ClimateDatabase, Precipitation, Station, TemperatureObservation},
    index_handler, precipitation, range_summary, routes,
    routes::ErrorResponse,
    start_summary, stations, tobs,
};
use anyhow::anyhow;
use axum::{
    body::Body,
    extract::Request,
    middleware::{self, Next},
    response::IntoResponse,
    routing::get,
    Router,
};
use hyper::{header::ACCEPT, Method};
use log::info;
use std::{sync::Arc, time::Duration};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

#[derive(Clone)]
pub struct AppState {
    pub remote_url: String,
    pub climate_db: Arc<dyn ClimateData>,
    /// Upper bound on the store work done for a single request
    pub query_timeout: Duration,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::api::measurements::precipitation,
        routes::api::measurements::tobs,
        routes::api::stations::stations,
        routes::api::summary::start_summary,
        routes::api::summary::range_summary,
    ),
    components(
        schemas(
            Precipitation,
            Station,
            TemperatureObservation,
            TemperatureSummary,
            ErrorResponse
        )
    ),
    tags(
        (name = "hawaii climate api", description = "a read-only RESTful api over Oahu, Hawaii precipitation and temperature observations")
    )
)]
struct ApiDoc;

pub async fn build_app_state(
    remote_url: String,
    database_path: String,
    query_timeout: Duration,
) -> Result<AppState, anyhow::Error> {
    let climate_db = Arc::new(
        ClimateDatabase::new(&database_path)
            .await
            .map_err(|e| anyhow!("error opening climate database: {}", e))?,
    );

    Ok(AppState {
        remote_url,
        climate_db,
        query_timeout,
    })
}

pub fn app(app_state: AppState) -> Router {
    let api_docs = ApiDoc::openapi();
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([ACCEPT])
        .allow_origin(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/api/v1.0/precipitation", get(precipitation))
        .route("/api/v1.0/stations", get(stations))
        .route("/api/v1.0/tobs", get(tobs))
        .route("/api/v1.0/{start}", get(start_summary))
        .route("/api/v1.0/{start}/{end}", get(range_summary))
        .with_state(Arc::new(app_state))
        .layer(middleware::from_fn(log_request))
        .merge(Scalar::with_url("/docs", api_docs))
        .layer(cors)
}

async fn log_request(request: Request<Body>, next: Next) -> impl IntoResponse {
    let now = time::OffsetDateTime::now_utc();
    let path = request
        .uri()
        .path_and_query()
        .map(|p| p.as_str())
        .unwrap_or_default()
        .to_owned();
    info!(target: "http_request", "new request, {} {}", request.method().as_str(), path);

    let response = next.run(request).await;
    let response_time = time::OffsetDateTime::now_utc() - now;
    info!(target: "http_response", "response, {} code: {}, time: {}", path, response.status().as_str(), response_time);

    response
}
