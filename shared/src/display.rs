//! Render-time weather formatting. Stored data always stays in Celsius.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::i18n::Language;

/// Rounds to the nearest integer, halves toward positive infinity.
fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

pub fn celsius_to_fahrenheit(celsius: f64) -> i32 {
    round_half_up(celsius * 9.0 / 5.0 + 32.0)
}

/// Fahrenheit for English readers, Celsius otherwise.
pub fn format_temperature(celsius: f64, lang: Language) -> String {
    match lang {
        Language::En => format!("{}°F", celsius_to_fahrenheit(celsius)),
        Language::Es => format!("{}°C", round_half_up(celsius)),
    }
}

/// Icon category for a provider weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherIcon {
    Clear,
    PartlyCloudy,
    Fog,
    Rain,
    Snow,
    Thunderstorm,
    Cloudy,
}

impl WeatherIcon {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => WeatherIcon::Clear,
            1..=3 => WeatherIcon::PartlyCloudy,
            45 | 48 => WeatherIcon::Fog,
            51..=67 => WeatherIcon::Rain,
            71..=77 => WeatherIcon::Snow,
            80..=99 => WeatherIcon::Thunderstorm,
            _ => WeatherIcon::Cloudy,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            WeatherIcon::Clear => "☀️",
            WeatherIcon::PartlyCloudy => "⛅",
            WeatherIcon::Fog => "🌫️",
            WeatherIcon::Rain => "🌧️",
            WeatherIcon::Snow => "🌨️",
            WeatherIcon::Thunderstorm => "⛈️",
            WeatherIcon::Cloudy => "☁️",
        }
    }
}

/// Short weekday, short month and day of month of a forecast date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayLabel {
    pub weekday: &'static str,
    pub month: &'static str,
    pub day: u32,
}

impl DayLabel {
    pub fn new(date: NaiveDate, lang: Language) -> Self {
        Self {
            weekday: weekday_short(date.weekday(), lang),
            month: month_short(date.month(), lang),
            day: date.day(),
        }
    }
}

fn weekday_short(weekday: Weekday, lang: Language) -> &'static str {
    let (es, en) = match weekday {
        Weekday::Mon => ("lun", "Mon"),
        Weekday::Tue => ("mar", "Tue"),
        Weekday::Wed => ("mié", "Wed"),
        Weekday::Thu => ("jue", "Thu"),
        Weekday::Fri => ("vie", "Fri"),
        Weekday::Sat => ("sáb", "Sat"),
        Weekday::Sun => ("dom", "Sun"),
    };
    match lang {
        Language::Es => es,
        Language::En => en,
    }
}

fn month_short(month: u32, lang: Language) -> &'static str {
    const ES: [&str; 12] = [
        "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
    ];
    const EN: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    let idx = month.saturating_sub(1).min(11) as usize;
    match lang {
        Language::Es => ES[idx],
        Language::En => EN[idx],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fahrenheit_reference_points() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32);
        assert_eq!(celsius_to_fahrenheit(100.0), 212);
        assert_eq!(celsius_to_fahrenheit(-40.0), -40);
        assert_eq!(celsius_to_fahrenheit(21.4), 71);
        assert_eq!(celsius_to_fahrenheit(21.7), 71);
    }

    #[test]
    fn temperature_follows_language() {
        assert_eq!(format_temperature(18.6, Language::Es), "19°C");
        assert_eq!(format_temperature(18.6, Language::En), "65°F");
        assert_eq!(format_temperature(-0.5, Language::Es), "0°C");
    }

    #[test]
    fn icon_categories() {
        assert_eq!(WeatherIcon::from_code(0), WeatherIcon::Clear);
        assert_eq!(WeatherIcon::from_code(2), WeatherIcon::PartlyCloudy);
        assert_eq!(WeatherIcon::from_code(45), WeatherIcon::Fog);
        assert_eq!(WeatherIcon::from_code(48), WeatherIcon::Fog);
        assert_eq!(WeatherIcon::from_code(46), WeatherIcon::Cloudy);
        assert_eq!(WeatherIcon::from_code(61), WeatherIcon::Rain);
        assert_eq!(WeatherIcon::from_code(75), WeatherIcon::Snow);
        assert_eq!(WeatherIcon::from_code(95), WeatherIcon::Thunderstorm);
        assert_eq!(WeatherIcon::from_code(-1), WeatherIcon::Cloudy);
        assert_eq!(WeatherIcon::from_code(100), WeatherIcon::Cloudy);
    }

    #[test]
    fn day_label_in_both_languages() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(
            DayLabel::new(date, Language::En),
            DayLabel {
                weekday: "Wed",
                month: "Dec",
                day: 31
            }
        );
        assert_eq!(DayLabel::new(date, Language::Es).weekday, "mié");
        assert_eq!(DayLabel::new(date, Language::Es).month, "dic");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_icon_mapping_is_total(code in any::<i32>()) {
                let icon = WeatherIcon::from_code(code);
                prop_assert!(!icon.glyph().is_empty());
            }

            #[test]
            fn prop_fahrenheit_within_half_degree(celsius in -60.0..60.0f64) {
                let exact = celsius * 9.0 / 5.0 + 32.0;
                let rounded = celsius_to_fahrenheit(celsius) as f64;
                prop_assert!((rounded - exact).abs() <= 0.5);
            }
        }
    }
}
