use anyhow::bail;
use clap::Parser;

use skycast_core::{Config, Coordinates, FixedLocation, Lookup, ViewController, WeatherClient};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "City weather and 5-day forecast")]
pub struct Cli {
    /// City to look up. Prompted for interactively when omitted.
    pub city: Option<String>,

    /// Latitude to look up instead of a city.
    #[arg(long, requires = "lon", conflicts_with = "city")]
    pub lat: Option<f64>,

    /// Longitude to look up instead of a city.
    #[arg(long, requires = "lat", conflicts_with = "city")]
    pub lon: Option<f64>,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::from_env();
        let controller = ViewController::new(WeatherClient::new(config));

        if let (Some(latitude), Some(longitude)) = (self.lat, self.lon) {
            let provider = FixedLocation(Coordinates {
                latitude,
                longitude,
            });
            controller.run_located_fetch(&provider).await;
        } else {
            let city = match self.city {
                Some(city) => city,
                None => inquire::Text::new("City:").prompt()?,
            };

            let city = city.trim().to_string();
            if city.is_empty() {
                bail!("Enter a city before searching for one");
            }

            controller.run_fetch(&Lookup::city(city)).await;
        }

        print!("{}", render::view(&controller.state().await));
        Ok(())
    }
}
