pub mod climate;
pub mod db;
pub mod routes;
mod startup;
pub mod templates;
mod utils;

pub use climate::TemperatureSummary;
pub use db::{
    ClimateData, ClimateDatabase, DateRange, Precipitation, Station, StationActivity,
    TemperatureObservation, TemperatureStats,
};
pub use routes::*;
pub use startup::*;
pub use utils::*;
