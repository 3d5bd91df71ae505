//! Weather fetch policy.
//!
//! [`WeatherFetch`] decides which Open-Meteo query to send and how to read the
//! answer, without doing any I/O itself. A driver calls [`WeatherFetch::start`],
//! performs the returned request, hands the result to
//! [`WeatherFetch::on_response`] and repeats until it gets [`FetchStep::Done`].
//! At most two requests are ever issued: the trip-date forecast, then the
//! current-weather fallback.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::trip::TripWindow;
use crate::{Coordinate, PROVIDER_TIMEZONE, VILLA_DE_LEYVA};

/// Message shown when neither query produced usable data.
pub const UNAVAILABLE: &str = "Unable to load weather data";

pub const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,weathercode";
pub const CURRENT_FIELDS: &str = "temperature_2m,weathercode";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherDay {
    pub date: NaiveDate,
    /// Celsius.
    pub max_temp: f64,
    /// Celsius.
    pub min_temp: f64,
    pub weather_code: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Celsius.
    pub temperature: f64,
    pub weather_code: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WeatherOutcome {
    TripForecast {
        days: Vec<WeatherDay>,
    },
    CurrentForecast {
        current: Option<CurrentWeather>,
        days: Vec<WeatherDay>,
    },
    Failed {
        reason: String,
    },
}

impl WeatherOutcome {
    pub fn days(&self) -> &[WeatherDay] {
        match self {
            WeatherOutcome::TripForecast { days } | WeatherOutcome::CurrentForecast { days, .. } => {
                days
            }
            WeatherOutcome::Failed { .. } => &[],
        }
    }

    pub fn is_trip_forecast(&self) -> bool {
        matches!(self, WeatherOutcome::TripForecast { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("provider answered with HTTP {0}")]
    Status(u16),
    #[error("provider rejected the request: {0}")]
    ProviderRejection(String),
    #[error("malformed provider response: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryRange {
    Dates { start: NaiveDate, end: NaiveDate },
    ForecastDays(u32),
    /// Current conditions only.
    Now,
}

/// One request to the forecast provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastQuery {
    pub location: Coordinate,
    pub daily: bool,
    pub current: bool,
    pub range: QueryRange,
}

impl ForecastQuery {
    pub fn trip(location: Coordinate, trip: &TripWindow) -> Self {
        Self {
            location,
            daily: true,
            current: false,
            range: QueryRange::Dates {
                start: trip.start,
                end: trip.end(),
            },
        }
    }

    pub fn upcoming(location: Coordinate, days: u32) -> Self {
        Self {
            location,
            daily: true,
            current: true,
            range: QueryRange::ForecastDays(days),
        }
    }

    pub fn current_only(location: Coordinate) -> Self {
        Self {
            location,
            daily: false,
            current: true,
            range: QueryRange::Now,
        }
    }

    /// URL query parameters in the order Open-Meteo documents them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("latitude", self.location.lat.to_string()),
            ("longitude", self.location.lon.to_string()),
        ];
        if self.daily {
            pairs.push(("daily", DAILY_FIELDS.to_string()));
        }
        if self.current {
            pairs.push(("current", CURRENT_FIELDS.to_string()));
        }
        pairs.push(("timezone", PROVIDER_TIMEZONE.to_string()));
        match self.range {
            QueryRange::Dates { start, end } => {
                pairs.push(("start_date", start.format("%Y-%m-%d").to_string()));
                pairs.push(("end_date", end.format("%Y-%m-%d").to_string()));
            }
            QueryRange::ForecastDays(days) => pairs.push(("forecast_days", days.to_string())),
            QueryRange::Now => {}
        }
        pairs
    }
}

/// Body of an Open-Meteo forecast response. Errors arrive as
/// `{"error": true, "reason": "..."}`, sometimes with HTTP 200.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily: Option<DailyBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<CurrentBlock>,
    #[serde(default)]
    pub error: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Parallel per-day arrays. The provider sends `null` for values it has no
/// data for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyBlock {
    pub time: Vec<NaiveDate>,
    pub temperature_2m_max: Vec<Option<f64>>,
    pub temperature_2m_min: Vec<Option<f64>>,
    pub weathercode: Vec<Option<i32>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentBlock {
    pub temperature_2m: f64,
    pub weathercode: i32,
}

impl ForecastResponse {
    pub fn rejection(&self) -> Option<FetchError> {
        self.error.then(|| {
            FetchError::ProviderRejection(
                self.reason
                    .clone()
                    .unwrap_or_else(|| "unspecified provider error".to_string()),
            )
        })
    }

    /// Days with every value present, in provider order. Days with a `null`
    /// value are skipped.
    pub fn daily_days(&self) -> Result<Vec<WeatherDay>, FetchError> {
        let daily = self
            .daily
            .as_ref()
            .ok_or_else(|| FetchError::Parse("missing daily block".to_string()))?;
        let len = daily.time.len();
        if daily.temperature_2m_max.len() != len
            || daily.temperature_2m_min.len() != len
            || daily.weathercode.len() != len
        {
            return Err(FetchError::Parse(
                "daily arrays have different lengths".to_string(),
            ));
        }
        Ok((0..len)
            .filter_map(|idx| {
                Some(WeatherDay {
                    date: daily.time[idx],
                    max_temp: daily.temperature_2m_max[idx]?,
                    min_temp: daily.temperature_2m_min[idx]?,
                    weather_code: daily.weathercode[idx]?,
                })
            })
            .collect())
    }

    pub fn current_weather(&self) -> Option<CurrentWeather> {
        self.current.map(|current| CurrentWeather {
            temperature: current.temperature_2m,
            weather_code: current.weathercode,
        })
    }
}

/// Parameters of one policy run.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchPlan {
    pub location: Coordinate,
    pub trip: TripWindow,
    /// How far ahead of today the provider accepts explicit dates.
    pub horizon_days: u32,
    /// `forecast_days` of the fallback query.
    pub fallback_days: u32,
    /// Entries kept from the fallback forecast.
    pub max_days: usize,
}

impl Default for FetchPlan {
    fn default() -> Self {
        Self {
            location: VILLA_DE_LEYVA,
            trip: TripWindow::default(),
            horizon_days: 16,
            fallback_days: 5,
            max_days: 4,
        }
    }
}

impl FetchPlan {
    pub fn trip_is_queryable(&self, today: NaiveDate) -> bool {
        today
            .checked_add_days(Days::new(u64::from(self.horizon_days)))
            .is_some_and(|horizon| self.trip.start <= horizon)
    }

    pub fn trip_query(&self) -> ForecastQuery {
        ForecastQuery::trip(self.location, &self.trip)
    }

    pub fn fallback_query(&self) -> ForecastQuery {
        ForecastQuery::upcoming(self.location, self.fallback_days)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
    Primary,
    Fallback,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Idle,
    Loading(Attempt),
    Resolved(WeatherOutcome),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchStep {
    Request(ForecastQuery),
    Done(WeatherOutcome),
}

#[derive(Debug, Clone)]
pub struct WeatherFetch {
    plan: FetchPlan,
    today: NaiveDate,
    state: FetchState,
    failures: Vec<(Attempt, FetchError)>,
}

impl WeatherFetch {
    /// `today` is the calendar date in the provider's time zone.
    pub fn new(plan: FetchPlan, today: NaiveDate) -> Self {
        Self {
            plan,
            today,
            state: FetchState::Idle,
            failures: Vec::new(),
        }
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// Failed attempts so far, for logging.
    pub fn failures(&self) -> &[(Attempt, FetchError)] {
        &self.failures
    }

    pub fn start(&mut self) -> FetchStep {
        if self.state == FetchState::Idle {
            let attempt = if self.plan.trip_is_queryable(self.today) {
                Attempt::Primary
            } else {
                Attempt::Fallback
            };
            self.state = FetchState::Loading(attempt);
        }
        self.step()
    }

    /// Feeds the result of the last requested query. Before [`start`] there
    /// is no outstanding request, so the result is ignored and the first
    /// request is returned.
    ///
    /// [`start`]: WeatherFetch::start
    pub fn on_response(&mut self, result: Result<ForecastResponse, FetchError>) -> FetchStep {
        let attempt = match self.state {
            FetchState::Idle => return self.start(),
            FetchState::Loading(attempt) => attempt,
            FetchState::Resolved(_) => return self.step(),
        };
        match attempt {
            Attempt::Primary => match result.and_then(|response| self.trip_days(&response)) {
                Ok(days) => self.resolve(WeatherOutcome::TripForecast { days }),
                Err(err) => {
                    self.failures.push((Attempt::Primary, err));
                    self.state = FetchState::Loading(Attempt::Fallback);
                }
            },
            Attempt::Fallback => match result.and_then(|response| self.upcoming(&response)) {
                Ok((current, days)) => self.resolve(WeatherOutcome::CurrentForecast { current, days }),
                Err(err) => {
                    self.failures.push((Attempt::Fallback, err));
                    self.resolve(WeatherOutcome::Failed {
                        reason: UNAVAILABLE.to_string(),
                    });
                }
            },
        }
        self.step()
    }

    fn step(&self) -> FetchStep {
        match &self.state {
            FetchState::Idle if !self.plan.trip_is_queryable(self.today) => {
                FetchStep::Request(self.plan.fallback_query())
            }
            FetchState::Idle | FetchState::Loading(Attempt::Primary) => {
                FetchStep::Request(self.plan.trip_query())
            }
            FetchState::Loading(Attempt::Fallback) => FetchStep::Request(self.plan.fallback_query()),
            FetchState::Resolved(outcome) => FetchStep::Done(outcome.clone()),
        }
    }

    fn resolve(&mut self, outcome: WeatherOutcome) {
        self.state = FetchState::Resolved(outcome);
    }

    fn trip_days(&self, response: &ForecastResponse) -> Result<Vec<WeatherDay>, FetchError> {
        if let Some(err) = response.rejection() {
            return Err(err);
        }
        let days = response.daily_days()?;
        if days.is_empty() {
            return Err(FetchError::Parse("empty daily block".to_string()));
        }
        Ok(days)
    }

    fn upcoming(
        &self,
        response: &ForecastResponse,
    ) -> Result<(Option<CurrentWeather>, Vec<WeatherDay>), FetchError> {
        if let Some(err) = response.rejection() {
            return Err(err);
        }
        let mut days = response.daily_days()?;
        days.retain(|day| day.date >= self.today);
        days.sort_by_key(|day| day.date);
        days.truncate(self.plan.max_days);
        Ok((response.current_weather(), days))
    }
}

/// Reads the nav widget's current-only query. Any failure hides the widget.
pub fn current_conditions(result: Result<ForecastResponse, FetchError>) -> Option<CurrentWeather> {
    let response = result.ok()?;
    if response.error {
        return None;
    }
    response.current_weather()
}
