use async_trait::async_trait;
use log::{debug, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::{path::Path, time::Duration};
use time::Date;

use super::{
    format_date, parse_stored_date, schema, ClimateData, DateRange, Error, Precipitation, Station,
    StationActivity, TemperatureObservation, TemperatureStats,
};

/// SQLite-backed observation store, opened read-only
pub struct ClimateDatabase {
    pool: SqlitePool,
}

impl ClimateDatabase {
    pub async fn new(path: &str) -> Result<Self, Error> {
        if !Path::new(path).is_file() {
            return Err(Error::NotFound(path.to_string()));
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .read_only(true)
            .pragma("busy_timeout", "5000")
            .pragma("cache_size", "-16000");

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(options)
            .await?;

        let db = Self { pool };
        db.validate_schema().await?;
        info!("SQLite climate database opened read-only at: {}", path);

        Ok(db)
    }

    /// Fails when a required table or column is absent from the live database.
    async fn validate_schema(&self) -> Result<(), Error> {
        for table in schema::TABLES {
            let present: Vec<String> = sqlx::query_scalar("SELECT name FROM pragma_table_info(?)")
                .bind(table.name)
                .fetch_all(&self.pool)
                .await?;

            if present.is_empty() {
                return Err(Error::Schema(format!("missing table `{}`", table.name)));
            }

            let missing = table.missing_columns(&present);
            if !missing.is_empty() {
                return Err(Error::Schema(format!(
                    "table `{}` is missing columns: {}",
                    table.name,
                    missing.join(", ")
                )));
            }
            debug!("table `{}` matches expected schema", table.name);
        }
        Ok(())
    }
}

#[async_trait]
impl ClimateData for ClimateDatabase {
    async fn date_bounds(&self) -> Result<Option<DateRange>, Error> {
        let (first, last): (Option<String>, Option<String>) =
            sqlx::query_as("SELECT MIN(date), MAX(date) FROM measurement")
                .fetch_one(&self.pool)
                .await?;

        match (first, last) {
            (Some(first), Some(last)) => Ok(Some(DateRange {
                first: parse_stored_date(&first)?,
                last: parse_stored_date(&last)?,
            })),
            _ => Ok(None),
        }
    }

    async fn precipitation(&self) -> Result<Vec<Precipitation>, Error> {
        let rows: Vec<(String, Option<f64>)> =
            sqlx::query_as("SELECT date, CAST(prcp AS REAL) FROM measurement")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows
            .into_iter()
            .map(|(date, prcp)| Precipitation::new(date, prcp))
            .collect())
    }

    async fn stations(&self) -> Result<Vec<Station>, Error> {
        let stations = sqlx::query_as::<_, Station>(
            "SELECT station, name,
                    CAST(latitude AS REAL) AS latitude,
                    CAST(longitude AS REAL) AS longitude,
                    id,
                    CAST(elevation AS REAL) AS elevation
             FROM station",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(stations)
    }

    async fn station_activity(&self) -> Result<Vec<StationActivity>, Error> {
        let activity = sqlx::query_as::<_, StationActivity>(
            "SELECT station, COUNT(id) AS observations
             FROM measurement
             WHERE station IS NOT NULL
             GROUP BY station
             ORDER BY observations DESC, station ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(activity)
    }

    async fn temperature_stats(&self, since: Date) -> Result<TemperatureStats, Error> {
        let stats = sqlx::query_as::<_, TemperatureStats>(
            "SELECT CAST(MIN(tobs) AS REAL) AS min,
                    CAST(MAX(tobs) AS REAL) AS max,
                    CAST(AVG(tobs) AS REAL) AS avg
             FROM measurement
             WHERE date >= ?",
        )
        .bind(format_date(since)?)
        .fetch_one(&self.pool)
        .await?;
        Ok(stats)
    }

    async fn temperature_observations(
        &self,
        station: &str,
        since: Date,
    ) -> Result<Vec<TemperatureObservation>, Error> {
        let observations = sqlx::query_as::<_, TemperatureObservation>(
            "SELECT date, CAST(tobs AS REAL) AS tobs, station
             FROM measurement
             WHERE station = ? AND date >= ?",
        )
        .bind(station)
        .bind(format_date(since)?)
        .fetch_all(&self.pool)
        .await?;
        Ok(observations)
    }
}
