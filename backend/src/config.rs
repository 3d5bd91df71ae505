use std::{net::SocketAddr, path::PathBuf, time::Duration};

use chrono::NaiveDate;
use clap::{Args, Parser};
use shared::{trip::TripWindow, weather::FetchPlan, VILLA_DE_LEYVA};

use crate::provider::{OpenMeteoClient, OPEN_METEO_URL};

#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Serve the Villa de Leyva trip site and its weather API")]
pub struct ServerConfig {
    /// Address the HTTP server listens on
    #[arg(long, env = "LEYVA_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Directory holding the built frontend bundle; the API is served alone when it has no index.html
    #[arg(long, env = "LEYVA_STATIC_DIR", default_value = "frontend/dist")]
    pub static_dir: Option<PathBuf>,

    #[command(flatten)]
    pub weather: WeatherConfig,
}

/// Forecast provider settings shared by the server and the forecast CLI.
#[derive(Debug, Clone, Args)]
pub struct WeatherConfig {
    /// Open-Meteo compatible forecast endpoint
    #[arg(long, env = "LEYVA_WEATHER_URL", default_value = OPEN_METEO_URL)]
    pub provider_url: String,

    /// First day of the trip (YYYY-MM-DD)
    #[arg(long, env = "LEYVA_TRIP_START", default_value = "2025-12-30")]
    pub trip_start: NaiveDate,

    #[arg(long, env = "LEYVA_TRIP_DAYS", default_value_t = 4)]
    pub trip_days: u32,

    /// Days ahead of today for which the provider accepts explicit dates
    #[arg(long, env = "LEYVA_HORIZON_DAYS", default_value_t = 16)]
    pub horizon_days: u32,

    /// Provider request timeout in seconds
    #[arg(long, env = "LEYVA_WEATHER_TIMEOUT", default_value_t = 10)]
    pub timeout_secs: u64,
}

impl WeatherConfig {
    pub fn plan(&self) -> FetchPlan {
        FetchPlan {
            location: VILLA_DE_LEYVA,
            trip: TripWindow::new(self.trip_start, self.trip_days),
            horizon_days: self.horizon_days,
            ..FetchPlan::default()
        }
    }

    pub fn client(&self) -> Result<OpenMeteoClient, reqwest::Error> {
        OpenMeteoClient::new(
            self.provider_url.clone(),
            Duration::from_secs(self.timeout_secs),
        )
    }
}
