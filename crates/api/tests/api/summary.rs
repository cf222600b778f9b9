use crate::helpers::{hawaii_bounds, spawn_app, MockClimateAccess};
use axum::http::StatusCode;
use climate_api::{db, TemperatureStats};
use serde_json::json;
use std::sync::Arc;
use time::macros::date;

fn winter_stats() -> TemperatureStats {
    TemperatureStats {
        min: Some(58.0),
        max: Some(87.0),
        avg: Some(74.14387974230493),
    }
}

#[tokio::test]
async fn start_date_aggregates_through_last_recorded_date() {
    let mut climate_db = MockClimateAccess::new();
    climate_db
        .expect_date_bounds()
        .times(1)
        .returning(|| Ok(Some(hawaii_bounds())));
    climate_db
        .expect_temperature_stats()
        .withf(|since| *since == date!(2017 - 01 - 01))
        .times(1)
        .returning(|_| Ok(winter_stats()));

    let test_app = spawn_app(Arc::new(climate_db)).await;
    let (status, body) = test_app.get_json("/api/v1.0/2017-01-01").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{
            "start date": "2017-01-01",
            "end date": "2017-08-23",
            "min temp": 58.0,
            "max temp": 87.0,
            "avg temp": 74.14387974230493
        }])
    );
}

#[tokio::test]
async fn end_date_is_echoed_but_not_used_as_a_filter() {
    let mut climate_db = MockClimateAccess::new();
    climate_db
        .expect_date_bounds()
        .times(1)
        .returning(|| Ok(Some(hawaii_bounds())));
    // only the lower bound reaches the store
    climate_db
        .expect_temperature_stats()
        .withf(|since| *since == date!(2017 - 01 - 01))
        .times(1)
        .returning(|_| Ok(winter_stats()));

    let test_app = spawn_app(Arc::new(climate_db)).await;
    let (status, body) = test_app.get_json("/api/v1.0/2017-01-01/2017-02-01").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["start date"], "2017-01-01");
    assert_eq!(body[0]["end date"], "2017-02-01");
    assert_eq!(body[0]["max temp"], 87.0);
}

#[tokio::test]
async fn date_before_first_recorded_is_not_found() {
    let mut climate_db = MockClimateAccess::new();
    climate_db
        .expect_date_bounds()
        .times(1)
        .returning(|| Ok(Some(hawaii_bounds())));
    climate_db.expect_temperature_stats().never();

    let test_app = spawn_app(Arc::new(climate_db)).await;
    let (status, body) = test_app.get_json("/api/v1.0/2010-01-01").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"error": "2010-01-01 is not in database date range. Must be between 2016-08-23 and 2017-08-23"})
    );
}

#[tokio::test]
async fn malformed_date_never_reaches_the_store() {
    let mut climate_db = MockClimateAccess::new();
    climate_db.expect_date_bounds().never();
    climate_db.expect_temperature_stats().never();

    let test_app = spawn_app(Arc::new(climate_db)).await;

    for (uri, input) in [
        ("/api/v1.0/not-a-date", "not-a-date"),
        ("/api/v1.0/2023-13-45", "2023-13-45"),
        ("/api/v1.0/17-1-1", "17-1-1"),
    ] {
        let (status, body) = test_app.get_json(uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(
            body["error"],
            format!("{input} is not a date or in correct format. Date should be YYYY-MM-DD")
        );
    }
}

#[tokio::test]
async fn malformed_range_names_both_inputs() {
    let mut climate_db = MockClimateAccess::new();
    climate_db.expect_date_bounds().never();

    let test_app = spawn_app(Arc::new(climate_db)).await;
    let (status, body) = test_app.get_json("/api/v1.0/2017-01-01/tomorrow").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["error"],
        "2017-01-01 and/or tomorrow is not a date or in correct format. Date should be YYYY-MM-DD"
    );
}

#[tokio::test]
async fn range_outside_bounds_is_not_found() {
    let mut climate_db = MockClimateAccess::new();
    climate_db
        .expect_date_bounds()
        .times(1)
        .returning(|| Ok(Some(hawaii_bounds())));
    climate_db.expect_temperature_stats().never();

    let test_app = spawn_app(Arc::new(climate_db)).await;
    let (status, body) = test_app.get_json("/api/v1.0/2017-01-01/2018-01-01").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["error"],
        "2017-01-01 and/or 2018-01-01 is not in database date range. Must be between 2016-08-23 and 2017-08-23"
    );
}

#[tokio::test]
async fn inverted_range_is_not_found() {
    let mut climate_db = MockClimateAccess::new();
    climate_db
        .expect_date_bounds()
        .times(1)
        .returning(|| Ok(Some(hawaii_bounds())));
    climate_db.expect_temperature_stats().never();

    let test_app = spawn_app(Arc::new(climate_db)).await;
    let (status, body) = test_app.get_json("/api/v1.0/2017-02-01/2017-01-01").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["error"],
        "start date (2017-02-01) is after end date (2017-01-01). Please make sure date range is correct."
    );
}

#[tokio::test]
async fn no_matching_rows_returns_null_temperatures() {
    let mut climate_db = MockClimateAccess::new();
    climate_db
        .expect_date_bounds()
        .times(1)
        .returning(|| Ok(Some(hawaii_bounds())));
    climate_db
        .expect_temperature_stats()
        .times(1)
        .returning(|_| Ok(TemperatureStats::default()));

    let test_app = spawn_app(Arc::new(climate_db)).await;
    let (status, body) = test_app.get_json("/api/v1.0/2017-08-23").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["min temp"], serde_json::Value::Null);
    assert_eq!(body[0]["max temp"], serde_json::Value::Null);
    assert_eq!(body[0]["avg temp"], serde_json::Value::Null);
}

#[tokio::test]
async fn empty_store_is_reported_as_no_data() {
    let mut climate_db = MockClimateAccess::new();
    climate_db
        .expect_date_bounds()
        .times(1)
        .returning(|| Ok(None));

    let test_app = spawn_app(Arc::new(climate_db)).await;
    let (status, body) = test_app.get_json("/api/v1.0/2017-01-01").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["error"],
        "no measurements in database, date range is undefined"
    );
}

#[tokio::test]
async fn store_failure_is_a_server_error() {
    let mut climate_db = MockClimateAccess::new();
    climate_db
        .expect_date_bounds()
        .times(1)
        .returning(|| Err(db::Error::Schema("missing table `measurement`".to_string())));

    let test_app = spawn_app(Arc::new(climate_db)).await;
    let (status, body) = test_app.get_json("/api/v1.0/2017-01-01").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("missing table `measurement`"));
}
