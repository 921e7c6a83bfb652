use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex;

use crate::client::WeatherClient;
use crate::location::LocationProvider;
use crate::model::{ForecastSnapshot, Lookup, WeatherSnapshot};

/// What the presentation layer renders.
///
/// A failed refresh keeps the previous snapshots in place, so `error` and
/// stale data may coexist.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub weather: Option<WeatherSnapshot>,
    pub forecast: Option<ForecastSnapshot>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Sequences the current + forecast pair for one lookup and applies the
/// outcome to the shared view state.
///
/// Cheap to clone; clones share the same state. In-flight requests are
/// never cancelled: a fetch superseded by a newer one discards its own
/// completion instead of racing for the final write.
#[derive(Debug, Clone)]
pub struct ViewController {
    client: WeatherClient,
    state: Arc<Mutex<ViewState>>,
    generation: Arc<AtomicU64>,
}

impl ViewController {
    pub fn new(client: WeatherClient) -> Self {
        Self {
            client,
            state: Arc::new(Mutex::new(ViewState::default())),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Snapshot of the current view state.
    pub async fn state(&self) -> ViewState {
        self.state.lock().await.clone()
    }

    /// Fetch current conditions and the 5-day forecast for one lookup.
    ///
    /// Both requests are in flight at once; the state is written once,
    /// after both settle, so the UI observes either the old pair or the
    /// new pair, never a mix.
    pub async fn run_fetch(&self, lookup: &Lookup) {
        let attempt = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut state = self.state.lock().await;
            state.loading = true;
            state.error = None;
        }

        let (current, forecast) =
            tokio::join!(self.client.current(lookup), self.client.forecast(lookup));

        let mut state = self.state.lock().await;
        if self.generation.load(Ordering::SeqCst) != attempt {
            // A newer lookup owns the view now, loading flag included.
            return;
        }

        match (current, forecast) {
            (Ok(weather), Ok(forecast)) => {
                state.weather = Some(weather);
                state.forecast = Some(forecast);
            }
            // When both fail, the current-conditions failure is the one
            // reported.
            (Err(err), _) | (Ok(_), Err(err)) => {
                state.error = Some(err.to_string());
            }
        }
        state.loading = false;
    }

    /// Resolve the user's position once, then fetch for it.
    ///
    /// A provider failure surfaces the location message without touching
    /// the network.
    pub async fn run_located_fetch<P>(&self, provider: &P)
    where
        P: LocationProvider + ?Sized,
    {
        match provider.current_position().await {
            Ok(coords) => {
                self.run_fetch(&Lookup::Coords(coords)).await;
            }
            Err(err) => {
                let mut state = self.state.lock().await;
                state.error = Some(err.to_string());
                state.loading = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_state_defaults_to_empty() {
        let state = ViewState::default();
        assert!(state.weather.is_none());
        assert!(state.forecast.is_none());
        assert!(!state.loading);
        assert!(state.error.is_none());
    }
}
