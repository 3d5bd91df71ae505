pub mod config;
pub mod error;
pub mod forecast;
pub mod provider;

use std::{path::PathBuf, sync::Arc};

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use chrono::{DateTime, Utc};
use shared::{trip::colombia_today, weather::FetchPlan, ApiError, CurrentWeather, WeatherOutcome};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::error::{service_unavailable, ServerError};
use crate::provider::ForecastProvider;

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn ForecastProvider>,
    pub plan: Arc<FetchPlan>,
    /// Source of "now"; the forecast window is anchored to Colombia's date.
    pub clock: fn() -> DateTime<Utc>,
    pub static_dir: Option<PathBuf>,
}

impl AppState {
    pub fn new(provider: Arc<dyn ForecastProvider>, plan: FetchPlan) -> Self {
        Self {
            provider,
            plan: Arc::new(plan),
            clock: Utc::now,
            static_dir: None,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_dir = state.static_dir.clone();
    let mut app = Router::new()
        .route("/api/health", get(|| async { "ok" }))
        .route("/api/weather", get(weather_handler))
        .route("/api/weather/current", get(current_weather_handler))
        .layer(cors)
        .with_state(state);

    if let Some(dir) = static_dir {
        let index = dir.join("index.html");
        app = app.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)));
    }

    app.layer(TraceLayer::new_for_http())
}

async fn weather_handler(State(state): State<AppState>) -> Json<WeatherOutcome> {
    let today = colombia_today((state.clock)());
    let outcome = forecast::resolve_outcome(state.provider.as_ref(), &state.plan, today).await;
    Json(outcome)
}

async fn current_weather_handler(
    State(state): State<AppState>,
) -> Result<Json<CurrentWeather>, (StatusCode, Json<ApiError>)> {
    forecast::current_conditions(state.provider.as_ref(), &state.plan)
        .await
        .map(Json)
        .ok_or_else(|| service_unavailable(shared::weather::UNAVAILABLE))
}

/// Builds the provider client from `config` and serves until the process exits.
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let client = config.weather.client()?;
    tracing::info!("forecasts from {}", client.base_url());

    let static_dir = config.static_dir.filter(|dir| {
        let present = dir.join("index.html").exists();
        if !present {
            tracing::warn!("no frontend bundle at {}, serving API only", dir.display());
        }
        present
    });

    let state = AppState {
        static_dir,
        ..AppState::new(Arc::new(client), config.weather.plan())
    };
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.bind,
            source,
        })?;
    tracing::info!("starting server on http://{}", config.bind);
    axum::serve(listener, app).await?;
    Ok(())
}
