use time::{Date, Duration};

use super::Error;
use crate::db::{ClimateData, StationActivity, TemperatureObservation};

/// Length of the trailing window, in plain days (leap years are not special)
pub const TRAILING_WINDOW_DAYS: i64 = 365;

/// Busiest entry; equal counts go to the lowest station code.
fn busiest(activity: &[StationActivity]) -> Option<&StationActivity> {
    activity.iter().max_by(|a, b| {
        a.observations
            .cmp(&b.observations)
            .then_with(|| b.station.cmp(&a.station))
    })
}

/// Station with the most measurement rows, `None` when there are no measurements
pub async fn most_active_station(store: &dyn ClimateData) -> Result<Option<String>, Error> {
    let activity = store.station_activity().await?;
    Ok(busiest(&activity).map(|a| a.station.clone()))
}

pub fn trailing_cutoff(last: Date) -> Date {
    last.checked_sub(Duration::days(TRAILING_WINDOW_DAYS))
        .unwrap_or(Date::MIN)
}

/// Temperature observations of the most active station over the 365 days
/// ending at the last recorded date. Empty when there are no measurements.
pub async fn trailing_year(store: &dyn ClimateData) -> Result<Vec<TemperatureObservation>, Error> {
    let Some(bounds) = store.date_bounds().await? else {
        return Ok(Vec::new());
    };
    let cutoff = trailing_cutoff(bounds.last);

    let Some(station) = most_active_station(store).await? else {
        return Ok(Vec::new());
    };

    Ok(store.temperature_observations(&station, cutoff).await?)
}
