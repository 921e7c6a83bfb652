use thiserror::Error;

/// User-facing failure categories.
///
/// Every failure a fetch attempt can produce collapses into one of these
/// variants; the `Display` text is the message shown in the error banner.
/// None of them are retried automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WeatherError {
    /// The provider answered HTTP 404 for the requested location.
    #[error("City not found. Please check the spelling and try again.")]
    CityNotFound,

    /// The provider rejected the API key with HTTP 401.
    #[error("Invalid API key. Please check your configuration.")]
    InvalidCredentials,

    /// No response was received at all.
    #[error("Network error. Please check your internet connection.")]
    NetworkUnavailable,

    /// Any other HTTP status, or a response body that failed to parse.
    #[error("An unexpected error occurred. Please try again later.")]
    UnknownFailure,

    /// The location provider was denied or is unsupported.
    #[error("Unable to get your location. Please allow location access or search manually.")]
    LocationUnavailable,
}
