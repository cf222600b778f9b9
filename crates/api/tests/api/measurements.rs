use crate::helpers::{hawaii_bounds, spawn_app, MockClimateAccess};
use axum::http::StatusCode;
use climate_api::{Precipitation, StationActivity, TemperatureObservation};
use serde_json::json;
use std::sync::Arc;
use time::macros::date;

fn activity(station: &str, observations: i64) -> StationActivity {
    StationActivity {
        station: station.to_string(),
        observations,
    }
}

fn observation(date: &str, tobs: f64) -> TemperatureObservation {
    TemperatureObservation {
        date: date.to_string(),
        tobs,
        station: "USC00519281".to_string(),
    }
}

#[tokio::test]
async fn precipitation_is_a_list_of_single_key_objects() {
    let mut climate_db = MockClimateAccess::new();
    climate_db.expect_precipitation().times(1).returning(|| {
        Ok(vec![
            Precipitation::new("2016-08-23".to_string(), Some(0.08)),
            Precipitation::new("2016-08-24".to_string(), None),
        ])
    });

    let test_app = spawn_app(Arc::new(climate_db)).await;
    let (status, body) = test_app.get_json("/api/v1.0/precipitation").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{"2016-08-23": 0.08}, {"2016-08-24": null}])
    );
}

#[tokio::test]
async fn empty_precipitation_table_is_an_empty_list() {
    let mut climate_db = MockClimateAccess::new();
    climate_db
        .expect_precipitation()
        .times(1)
        .returning(|| Ok(vec![]));

    let test_app = spawn_app(Arc::new(climate_db)).await;
    let (status, body) = test_app.get_json("/api/v1.0/precipitation").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn tobs_covers_trailing_year_of_most_active_station() {
    let mut climate_db = MockClimateAccess::new();
    climate_db
        .expect_date_bounds()
        .times(1)
        .returning(|| Ok(Some(hawaii_bounds())));
    climate_db.expect_station_activity().times(1).returning(|| {
        Ok(vec![
            activity("USC00519281", 2772),
            activity("USC00519397", 2724),
            activity("USC00513117", 2709),
        ])
    });
    climate_db
        .expect_temperature_observations()
        .withf(|station, since| station == "USC00519281" && *since == date!(2016 - 08 - 23))
        .times(1)
        .returning(|_, _| {
            Ok(vec![
                observation("2016-08-23", 77.0),
                observation("2017-08-18", 79.0),
            ])
        });

    let test_app = spawn_app(Arc::new(climate_db)).await;
    let (status, body) = test_app.get_json("/api/v1.0/tobs").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"date": "2016-08-23", "tobs": 77.0, "station": "USC00519281"},
            {"date": "2017-08-18", "tobs": 79.0, "station": "USC00519281"}
        ])
    );
}

#[tokio::test]
async fn tobs_tie_goes_to_lowest_station_code() {
    let mut climate_db = MockClimateAccess::new();
    climate_db
        .expect_date_bounds()
        .times(1)
        .returning(|| Ok(Some(hawaii_bounds())));
    climate_db.expect_station_activity().times(1).returning(|| {
        Ok(vec![
            activity("USC00519397", 100),
            activity("USC00513117", 100),
        ])
    });
    climate_db
        .expect_temperature_observations()
        .withf(|station, _| station == "USC00513117")
        .times(1)
        .returning(|_, _| Ok(vec![]));

    let test_app = spawn_app(Arc::new(climate_db)).await;
    let (status, _) = test_app.get_json("/api/v1.0/tobs").await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn tobs_on_empty_store_is_an_empty_list() {
    let mut climate_db = MockClimateAccess::new();
    climate_db
        .expect_date_bounds()
        .times(1)
        .returning(|| Ok(None));
    climate_db.expect_station_activity().never();
    climate_db.expect_temperature_observations().never();

    let test_app = spawn_app(Arc::new(climate_db)).await;
    let (status, body) = test_app.get_json("/api/v1.0/tobs").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}
