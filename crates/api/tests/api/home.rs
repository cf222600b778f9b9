use crate::helpers::{hawaii_bounds, spawn_app, MockClimateAccess};
use axum::http::StatusCode;
use std::sync::Arc;

#[tokio::test]
async fn index_lists_routes_with_live_date_range() {
    let mut climate_db = MockClimateAccess::new();
    climate_db
        .expect_date_bounds()
        .times(1)
        .returning(|| Ok(Some(hawaii_bounds())));

    let test_app = spawn_app(Arc::new(climate_db)).await;
    let (status, body) = test_app.get("/").await;
    let html = String::from_utf8(body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Available Routes"));
    assert!(html.contains("/api/v1.0/precipitation"));
    assert!(html.contains("/api/v1.0/stations"));
    assert!(html.contains("/api/v1.0/tobs"));
    assert!(html.contains("Date range in database is 2016-08-23 to 2017-08-23"));
}

#[tokio::test]
async fn index_renders_without_measurements() {
    let mut climate_db = MockClimateAccess::new();
    climate_db
        .expect_date_bounds()
        .times(1)
        .returning(|| Ok(None));

    let test_app = spawn_app(Arc::new(climate_db)).await;
    let (status, body) = test_app.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(body).unwrap().contains("unknown"));
}

#[tokio::test]
async fn api_docs_are_served() {
    let climate_db = MockClimateAccess::new();
    let test_app = spawn_app(Arc::new(climate_db)).await;

    let (status, body) = test_app.get("/docs").await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body.is_empty());
}
