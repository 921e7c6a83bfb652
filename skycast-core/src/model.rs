use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Number of 3-hour forecast entries covering one calendar day.
///
/// The provider's forecast has a fixed 3-hour granularity; changing that
/// granularity must change this stride too, or the daily sampling breaks.
pub const ENTRIES_PER_DAY: usize = 8;

/// Days covered by the provider's 5-day/3-hour forecast.
pub const FORECAST_DAYS: usize = 5;

/// Current conditions for one location, replaced wholesale on each
/// successful fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location_name: String,
    pub condition: String,
    pub icon: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
}

/// One timestamped temperature reading in the forecast list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub timestamp: DateTime<Utc>,
    pub temperature_c: f64,
}

/// Ordered 3-hour forecast entries, nominally 40 over five days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSnapshot {
    pub entries: Vec<ForecastEntry>,
}

/// One calendar day derived from the forecast, temperature rounded to the
/// nearest integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySample {
    pub date: NaiveDate,
    pub temperature_c: i32,
}

impl ForecastSnapshot {
    /// One sample per day: every `ENTRIES_PER_DAY`-th entry, at most
    /// `FORECAST_DAYS` of them.
    pub fn daily_summary(&self) -> Vec<DailySample> {
        self.entries
            .iter()
            .step_by(ENTRIES_PER_DAY)
            .take(FORECAST_DAYS)
            .map(|entry| DailySample {
                date: entry.timestamp.date_naive(),
                temperature_c: entry.temperature_c.round() as i32,
            })
            .collect()
    }
}

/// Latitude/longitude pair produced once by a location provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A request specification shared by the current-conditions and forecast
/// calls of one logical lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    City(String),
    Coords(Coordinates),
}

impl Lookup {
    pub fn city(name: impl Into<String>) -> Self {
        Lookup::City(name.into())
    }

    pub fn coords(latitude: f64, longitude: f64) -> Self {
        Lookup::Coords(Coordinates { latitude, longitude })
    }
}
