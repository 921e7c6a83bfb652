use std::env;

/// Environment variable holding the OpenWeather API key.
pub const API_KEY_VAR: &str = "OPENWEATHER_API_KEY";

/// Environment variable overriding the API base URL.
pub const BASE_URL_VAR: &str = "OPENWEATHER_BASE_URL";

/// Default OpenWeather REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Process-wide configuration, read once at startup and handed to the
/// client at construction.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key sent as the `appid` query parameter. May be empty; requests
    /// are still attempted and come back as `InvalidCredentials`.
    pub api_key: String,

    /// Base URL the `/weather` and `/forecast` paths are appended to.
    pub base_url: String,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_parts(env::var(API_KEY_VAR).ok(), env::var(BASE_URL_VAR).ok())
    }

    /// Assemble configuration from already-looked-up values.
    ///
    /// A missing API key is logged as a configuration warning, not treated
    /// as a hard error.
    pub fn from_parts(api_key: Option<String>, base_url: Option<String>) -> Self {
        let api_key = api_key.unwrap_or_default();
        if api_key.is_empty() {
            tracing::warn!("{API_KEY_VAR} is not set; weather requests will be unauthorized");
        }

        let base_url = base_url
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self { api_key, base_url }
    }
}
