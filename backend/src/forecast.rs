use chrono::NaiveDate;
use shared::weather::{
    self, Attempt, CurrentWeather, FetchPlan, FetchStep, ForecastQuery, WeatherFetch,
    WeatherOutcome,
};

use crate::provider::ForecastProvider;

/// Runs the weather fetch policy to completion: the trip-date query when the
/// trip is within the provider horizon, then the current-weather fallback if
/// needed. Requests are sequential; the fallback is only sent after the
/// primary attempt has settled.
pub async fn resolve_outcome(
    provider: &dyn ForecastProvider,
    plan: &FetchPlan,
    today: NaiveDate,
) -> WeatherOutcome {
    let mut fetch = WeatherFetch::new(plan.clone(), today);
    let mut step = fetch.start();
    loop {
        match step {
            FetchStep::Request(query) => {
                tracing::debug!(range = ?query.range, "querying forecast provider");
                let result = provider.fetch(&query).await;
                step = fetch.on_response(result);
            }
            FetchStep::Done(outcome) => {
                for (attempt, err) in fetch.failures() {
                    match attempt {
                        Attempt::Primary => {
                            tracing::info!("trip forecast unavailable, using current weather: {err}")
                        }
                        Attempt::Fallback => tracing::warn!("weather fallback failed: {err}"),
                    }
                }
                return outcome;
            }
        }
    }
}

/// Current conditions for the navigation widget.
pub async fn current_conditions(
    provider: &dyn ForecastProvider,
    plan: &FetchPlan,
) -> Option<CurrentWeather> {
    let result = provider
        .fetch(&ForecastQuery::current_only(plan.location))
        .await;
    if let Err(err) = &result {
        tracing::warn!("current weather fetch failed: {err}");
    }
    weather::current_conditions(result)
}
