use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::WeatherError;
use crate::model::{ForecastEntry, ForecastSnapshot, Lookup, WeatherSnapshot};

/// Fixed unit system sent with every request (Celsius, m/s).
const UNITS: &str = "metric";

/// Client for the OpenWeather current-conditions and forecast endpoints.
///
/// Holds no mutable state and performs no caching; every call is an
/// independent network round trip, and no failed attempt is retried.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    config: Config,
}

impl WeatherClient {
    pub fn new(config: Config) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Current conditions for a city name.
    pub async fn current_by_city(&self, city: &str) -> Result<WeatherSnapshot, WeatherError> {
        self.current(&Lookup::city(city)).await
    }

    /// 5-day/3-hour forecast for a city name.
    pub async fn forecast_by_city(&self, city: &str) -> Result<ForecastSnapshot, WeatherError> {
        self.forecast(&Lookup::city(city)).await
    }

    /// Current conditions for a coordinate pair.
    pub async fn current_by_coords(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherSnapshot, WeatherError> {
        self.current(&Lookup::coords(latitude, longitude)).await
    }

    /// 5-day/3-hour forecast for a coordinate pair.
    pub async fn forecast_by_coords(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ForecastSnapshot, WeatherError> {
        self.forecast(&Lookup::coords(latitude, longitude)).await
    }

    /// Current conditions for an already-built lookup.
    pub async fn current(&self, lookup: &Lookup) -> Result<WeatherSnapshot, WeatherError> {
        let parsed: OwCurrentResponse = self.get_json("weather", lookup).await?;

        let (condition, icon) = parsed
            .weather
            .into_iter()
            .next()
            .map(|w| (w.description, w.icon))
            .unwrap_or_else(|| ("Unknown".to_string(), String::new()));

        Ok(WeatherSnapshot {
            location_name: parsed.name,
            condition,
            icon,
            temperature_c: parsed.main.temp,
            feels_like_c: parsed.main.feels_like,
            humidity_pct: parsed.main.humidity,
            wind_speed_mps: parsed.wind.speed,
        })
    }

    /// Forecast for an already-built lookup.
    pub async fn forecast(&self, lookup: &Lookup) -> Result<ForecastSnapshot, WeatherError> {
        let parsed: OwForecastResponse = self.get_json("forecast", lookup).await?;

        let entries = parsed
            .list
            .into_iter()
            .map(|entry| ForecastEntry {
                timestamp: unix_to_utc(entry.dt).unwrap_or_else(Utc::now),
                temperature_c: entry.main.temp,
            })
            .collect();

        Ok(ForecastSnapshot { entries })
    }

    /// One GET against `{base}/{endpoint}`, with failures collapsed into
    /// the user-facing categories.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        lookup: &Lookup,
    ) -> Result<T, WeatherError> {
        let url = format!("{}/{}", self.config.base_url, endpoint);

        let mut query = location_params(lookup);
        query.push(("appid", self.config.api_key.clone()));
        query.push(("units", UNITS.to_string()));

        let res = self.http.get(&url).query(&query).send().await.map_err(|err| {
            tracing::debug!(%url, error = %err, "no response from weather endpoint");
            WeatherError::NetworkUnavailable
        })?;

        let status = res.status();
        let body = res.text().await.map_err(|err| {
            tracing::debug!(%url, error = %err, "failed to read weather response body");
            WeatherError::NetworkUnavailable
        })?;

        if status == StatusCode::NOT_FOUND {
            return Err(WeatherError::CityNotFound);
        }
        if status == StatusCode::UNAUTHORIZED {
            return Err(WeatherError::InvalidCredentials);
        }
        if !status.is_success() {
            tracing::warn!(%url, %status, body = %truncate_body(&body), "weather request failed");
            return Err(WeatherError::UnknownFailure);
        }

        serde_json::from_str(&body).map_err(|err| {
            tracing::warn!(%url, error = %err, body = %truncate_body(&body), "failed to parse weather response");
            WeatherError::UnknownFailure
        })
    }
}

fn location_params(lookup: &Lookup) -> Vec<(&'static str, String)> {
    match lookup {
        Lookup::City(name) => vec![("q", name.clone())],
        Lookup::Coords(coords) => vec![
            ("lat", coords.latitude.to_string()),
            ("lon", coords.longitude.to_string()),
        ],
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwForecastMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    main: OwForecastMain,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
