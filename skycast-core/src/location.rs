use async_trait::async_trait;

use crate::error::WeatherError;
use crate::model::Coordinates;

/// One-shot source of the user's position.
///
/// Resolves with coordinates or fails with `LocationUnavailable`, at most
/// once per request; it is not a stream of position updates.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn current_position(&self) -> Result<Coordinates, WeatherError>;
}

/// Position known up front, e.g. supplied on the command line.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub Coordinates);

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn current_position(&self) -> Result<Coordinates, WeatherError> {
        Ok(self.0)
    }
}

/// No usable location source: permission denied or platform unsupported.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocation;

#[async_trait]
impl LocationProvider for NoLocation {
    async fn current_position(&self) -> Result<Coordinates, WeatherError> {
        Err(WeatherError::LocationUnavailable)
    }
}
