//! Platform-free logic for the Villa de Leyva trip site.
//!
//! Everything here is pure: the frontend feeds it DOM measurements and
//! events, the backend feeds it provider responses.

pub mod carousel;
pub mod content;
pub mod display;
pub mod i18n;
pub mod rating;
pub mod schedule;
pub mod section;
pub mod trip;
pub mod weather;

use serde::{Deserialize, Serialize};

pub use carousel::Carousel;
pub use i18n::{Language, Localized, Text};
pub use section::{ScrollState, Section, SectionBounds, SectionTracker};
pub use weather::{CurrentWeather, WeatherDay, WeatherOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

/// Villa de Leyva, Boyacá.
pub const VILLA_DE_LEYVA: Coordinate = Coordinate {
    lat: 5.6344,
    lon: -73.5264,
};

pub const PROVIDER_TIMEZONE: &str = "America/Bogota";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
}
