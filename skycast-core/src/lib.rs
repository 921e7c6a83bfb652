//! Core library for the `skycast` weather dashboard.
//!
//! This crate defines:
//! - Configuration read once from the process environment
//! - A client for the OpenWeather current-conditions and 5-day forecast endpoints
//! - Normalization of transport failures into user-facing error categories
//! - The view state a presentation layer renders, and the controller that drives it
//!
//! It is used by `skycast-cli`, but can also be reused by other front-ends.

pub mod client;
pub mod config;
pub mod error;
pub mod location;
pub mod model;
pub mod view;

pub use client::WeatherClient;
pub use config::Config;
pub use error::WeatherError;
pub use location::{FixedLocation, LocationProvider, NoLocation};
pub use model::{
    Coordinates, DailySample, ForecastEntry, ForecastSnapshot, Lookup, WeatherSnapshot,
};
pub use view::{ViewController, ViewState};
