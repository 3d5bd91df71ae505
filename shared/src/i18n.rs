use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    pub fn toggle(self) -> Self {
        match self {
            Language::Es => Language::En,
            Language::En => Language::Es,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language `{0}`, expected `es` or `en`")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "es" => Ok(Language::Es),
            "en" => Ok(Language::En),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

/// A pair of Spanish and English strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized {
    pub es: &'static str,
    pub en: &'static str,
}

impl Localized {
    pub const fn new(es: &'static str, en: &'static str) -> Self {
        Self { es, en }
    }

    /// Same text in both languages (names, times).
    pub const fn same(text: &'static str) -> Self {
        Self { es: text, en: text }
    }

    pub fn get(&self, lang: Language) -> &'static str {
        match lang {
            Language::Es => self.es,
            Language::En => self.en,
        }
    }
}

/// Fixed UI labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    Title,
    TripDates,
    Home,
    ThingsToDo,
    ThingsToDoTitle,
    ThingsToDoSubtitle,
    GetDirections,
    TripInfo,
    Address,
    CheckIn,
    CheckOut,
    DaysUntil,
    Itinerary,
    RoomAssignments,
    Bedroom,
    Beds,
    Guests,
    DoubleBed,
    QueenBed,
    SingleBed,
    SingleBeds,
    Weather,
    TripWeather,
    TripWeatherSubtitle,
    CurrentWeather,
    CurrentWeatherSubtitle,
    High,
    Low,
    LoadingWeather,
    NoWeatherData,
    Restaurants,
    Breakfast,
    Lunch,
    Dinner,
    Activities,
    Cultural,
    NatureAdventure,
    Nearby,
    FamilyFriendly,
    ViewOnMaps,
    LearnMore,
    PreviousImage,
    NextImage,
}

impl Text {
    pub fn get(self, lang: Language) -> &'static str {
        self.localized().get(lang)
    }

    fn localized(self) -> Localized {
        use Text::*;
        match self {
            Title => Localized::new("Viaje a Villa de Leyva", "Villa de Leyva Trip"),
            TripDates => Localized::new(
                "30 de Diciembre, 2025 - 2 de Enero, 2026",
                "December 30, 2025 - January 2, 2026",
            ),
            Home => Localized::new("Inicio", "Home"),
            ThingsToDo => Localized::new("Qué Hacer", "Things to Do"),
            ThingsToDoTitle => Localized::new(
                "Qué Hacer en Villa de Leyva",
                "Things to Do in Villa de Leyva",
            ),
            ThingsToDoSubtitle => Localized::new(
                "Restaurantes, actividades y atracciones cerca de nuestra casa",
                "Restaurants, activities, and attractions near our house",
            ),
            GetDirections => Localized::new("Cómo Llegar", "Get Directions"),
            TripInfo => Localized::new("Información del Viaje", "Trip Information"),
            Address => Localized::new("Dirección", "Address"),
            CheckIn => Localized::new("Llegada", "Check-in"),
            CheckOut => Localized::new("Salida", "Check-out"),
            DaysUntil => Localized::new("días para el viaje", "days until the trip"),
            Itinerary => Localized::new("Itinerario", "Itinerary"),
            RoomAssignments => Localized::new("Asignación de Habitaciones", "Room Assignments"),
            Bedroom => Localized::new("Habitación", "Bedroom"),
            Beds => Localized::new("Camas", "Beds"),
            Guests => Localized::new("Huéspedes", "Guests"),
            DoubleBed => Localized::new("Cama doble", "Double bed"),
            QueenBed => Localized::new("Cama queen", "Queen bed"),
            SingleBed => Localized::new("Cama sencilla", "Single bed"),
            SingleBeds => Localized::new("camas sencillas", "single beds"),
            Weather => Localized::new("Clima", "Weather"),
            TripWeather => Localized::new("Clima del Viaje", "Trip Weather"),
            TripWeatherSubtitle => Localized::new(
                "Pronóstico para las fechas del viaje",
                "Forecast for the trip dates",
            ),
            CurrentWeather => Localized::new("Clima Actual", "Current Weather"),
            CurrentWeatherSubtitle => Localized::new(
                "El pronóstico del viaje estará disponible más cerca de la fecha",
                "The trip forecast will be available closer to the date",
            ),
            High => Localized::new("Máx", "High"),
            Low => Localized::new("Mín", "Low"),
            LoadingWeather => Localized::new("Cargando clima...", "Loading weather..."),
            NoWeatherData => Localized::new(
                "No hay datos del clima disponibles",
                "No weather data available",
            ),
            Restaurants => Localized::new("Restaurantes", "Restaurants"),
            Breakfast => Localized::new("Desayuno", "Breakfast"),
            Lunch => Localized::new("Almuerzo", "Lunch"),
            Dinner => Localized::new("Cena", "Dinner"),
            Activities => Localized::new("Actividades", "Activities"),
            Cultural => Localized::new("Cultural", "Cultural"),
            NatureAdventure => Localized::new("Naturaleza y Aventura", "Nature & Adventure"),
            Nearby => Localized::new("Pueblos Cercanos", "Nearby Towns"),
            FamilyFriendly => Localized::new("Para la Familia", "Family Friendly"),
            ViewOnMaps => Localized::new("Ver en Mapas", "View on Maps"),
            LearnMore => Localized::new("Más Información", "Learn More"),
            PreviousImage => Localized::new("Imagen anterior", "Previous image"),
            NextImage => Localized::new("Imagen siguiente", "Next image"),
        }
    }
}
