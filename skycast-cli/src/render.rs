//! Plain-text rendering of the view state.
//!
//! Pure string builders so the output is testable; printing happens at
//! the call site.

use skycast_core::{DailySample, ForecastSnapshot, ViewState, WeatherSnapshot};

/// Render the whole view: error banner first, then whatever data is
/// present. A stale snapshot stays visible under the banner.
pub fn view(state: &ViewState) -> String {
    let mut out = String::new();

    if let Some(error) = &state.error {
        out.push_str(&format!("! {error}\n"));
    }
    if let Some(weather) = &state.weather {
        out.push_str(&current_card(weather));
    }
    if let Some(forecast) = &state.forecast {
        out.push_str(&daily_lines(forecast));
    }
    if out.is_empty() {
        out.push_str("No weather data. Search for a city to get started.\n");
    }

    out
}

/// The current-conditions card.
pub fn current_card(weather: &WeatherSnapshot) -> String {
    format!(
        "{name}\n{temp}  {condition}\nFeels like {feels}  Humidity {humidity}  Wind {wind}\n",
        name = weather.location_name,
        temp = format_temperature(weather.temperature_c),
        condition = capitalize_first(&weather.condition),
        feels = format_temperature(weather.feels_like_c),
        humidity = format_humidity(weather.humidity_pct),
        wind = format_wind(weather.wind_speed_mps),
    )
}

/// One line per sampled forecast day.
pub fn daily_lines(forecast: &ForecastSnapshot) -> String {
    forecast.daily_summary().iter().map(daily_line).collect()
}

fn daily_line(sample: &DailySample) -> String {
    format!(
        "{date}  {temp}°C\n",
        date = sample.date.format("%a %b %-d"),
        temp = sample.temperature_c,
    )
}

fn format_temperature(celsius: f64) -> String {
    format!("{}°C", celsius.round() as i64)
}

fn format_humidity(percent: u8) -> String {
    format!("{percent}%")
}

fn format_wind(speed_mps: f64) -> String {
    format!("{speed_mps} m/s")
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
