use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    Json, Router,
    body::{Body, to_bytes},
    extract::{Query, State},
    http::Request,
    routing::get,
};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use hyper::StatusCode;
use leyva_backend::{
    create_router,
    forecast::resolve_outcome,
    provider::{ForecastProvider, OpenMeteoClient},
    AppState,
};
use serde_json::{json, Value};
use shared::{
    trip::TripWindow,
    weather::{FetchPlan, UNAVAILABLE},
    ApiError, CurrentWeather, WeatherOutcome,
};
use tower::ServiceExt;

type Recorded = Arc<Mutex<Vec<HashMap<String, String>>>>;

#[derive(Clone, Copy)]
enum Mode {
    /// Answers every query.
    AcceptTrip,
    /// Refuses explicit dates the way Open-Meteo does past its horizon.
    RejectTrip,
    /// Refuses explicit dates with HTTP 200 and a bare `reason`.
    QuietRejectTrip,
    Outage,
}

#[derive(Clone)]
struct FakeProvider {
    mode: Mode,
    queries: Recorded,
}

async fn fake_forecast(
    State(fake): State<FakeProvider>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    fake.queries.lock().unwrap().push(params.clone());
    let dated = params.contains_key("start_date");
    match fake.mode {
        Mode::Outage => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": true, "reason": "upstream down"})),
        ),
        Mode::RejectTrip if dated => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": true,
                "reason": "Parameter 'start_date' is out of allowed range"
            })),
        ),
        Mode::QuietRejectTrip if dated => (
            StatusCode::OK,
            Json(json!({"reason": "out of allowed range"})),
        ),
        _ if dated => (StatusCode::OK, Json(trip_body())),
        _ if !params.contains_key("daily") => (StatusCode::OK, Json(current_body())),
        _ => (StatusCode::OK, Json(upcoming_body())),
    }
}

fn trip_body() -> Value {
    json!({
        "daily": {
            "time": ["2025-12-30", "2025-12-31", "2026-01-01", "2026-01-02"],
            "temperature_2m_max": [21.4, 22.0, 20.1, 19.8],
            "temperature_2m_min": [8.2, 9.0, 7.5, 8.8],
            "weathercode": [2, 3, 61, 1]
        }
    })
}

fn upcoming_body() -> Value {
    json!({
        "current": {"temperature_2m": 17.3, "weathercode": 2},
        "daily": {
            "time": ["2025-12-19", "2025-12-20", "2025-12-21", "2025-12-22", "2025-12-23"],
            "temperature_2m_max": [20.0, 21.0, 22.0, 23.0, 24.0],
            "temperature_2m_min": [7.0, 8.0, 9.0, 10.0, 11.0],
            "weathercode": [0, 1, 2, 3, 45]
        }
    })
}

fn current_body() -> Value {
    json!({"current": {"temperature_2m": 17.3, "weathercode": 2}})
}

async fn spawn_provider(mode: Mode) -> (OpenMeteoClient, Recorded) {
    let queries = Recorded::default();
    let app = Router::new()
        .route("/v1/forecast", get(fake_forecast))
        .with_state(FakeProvider {
            mode,
            queries: queries.clone(),
        });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

    let client =
        OpenMeteoClient::new(format!("http://{addr}/v1/forecast"), Duration::from_secs(5)).unwrap();
    (client, queries)
}

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 12, 20, 15, 0, 0).unwrap()
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 20).unwrap()
}

fn test_state(provider: OpenMeteoClient) -> AppState {
    AppState {
        clock: fixed_now,
        ..AppState::new(Arc::new(provider), FetchPlan::default())
    }
}

async fn get_json<T: serde::de::DeserializeOwned>(app: Router, uri: &str) -> (StatusCode, T) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn rejected_trip_dates_fall_back_to_current_weather() {
    let (client, queries) = spawn_provider(Mode::RejectTrip).await;
    let outcome = resolve_outcome(&client, &FetchPlan::default(), today()).await;

    let WeatherOutcome::CurrentForecast { current, days } = outcome else {
        panic!("expected current forecast");
    };
    assert_eq!(
        current,
        Some(CurrentWeather {
            temperature: 17.3,
            weather_code: 2
        })
    );
    let dates: Vec<String> = days.iter().map(|d| d.date.to_string()).collect();
    assert_eq!(
        dates,
        ["2025-12-20", "2025-12-21", "2025-12-22", "2025-12-23"]
    );

    let queries = queries.lock().unwrap();
    assert_eq!(queries.len(), 2);
    assert_eq!(queries[0]["start_date"], "2025-12-30");
    assert_eq!(queries[0]["end_date"], "2026-01-02");
    assert_eq!(queries[1]["forecast_days"], "5");
    assert_eq!(queries[1]["timezone"], "America/Bogota");
}

#[tokio::test]
async fn reason_only_body_on_trip_dates_falls_back() {
    let (client, queries) = spawn_provider(Mode::QuietRejectTrip).await;
    let outcome = resolve_outcome(&client, &FetchPlan::default(), today()).await;

    let WeatherOutcome::CurrentForecast { current, days } = outcome else {
        panic!("expected current forecast");
    };
    assert_eq!(current.map(|c| c.weather_code), Some(2));
    assert_eq!(days.len(), 4);

    let queries = queries.lock().unwrap();
    assert_eq!(queries.len(), 2);
    assert!(queries[0].contains_key("start_date"));
    assert_eq!(queries[1]["forecast_days"], "5");
}

#[tokio::test]
async fn accepted_trip_dates_need_a_single_request() {
    let (client, queries) = spawn_provider(Mode::AcceptTrip).await;
    let outcome = resolve_outcome(&client, &FetchPlan::default(), today()).await;

    assert!(outcome.is_trip_forecast());
    assert_eq!(outcome.days().len(), 4);
    assert_eq!(outcome.days()[2].weather_code, 61);
    assert_eq!(queries.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn provider_outage_reports_unavailable() {
    let (client, queries) = spawn_provider(Mode::Outage).await;
    let outcome = resolve_outcome(&client, &FetchPlan::default(), today()).await;

    assert_eq!(
        outcome,
        WeatherOutcome::Failed {
            reason: UNAVAILABLE.to_string()
        }
    );
    assert_eq!(queries.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn trip_beyond_horizon_skips_dated_query() {
    let (client, queries) = spawn_provider(Mode::AcceptTrip).await;
    let plan = FetchPlan {
        trip: TripWindow::new(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(), 4),
        ..FetchPlan::default()
    };
    let outcome = resolve_outcome(&client, &plan, today()).await;

    assert!(matches!(outcome, WeatherOutcome::CurrentForecast { .. }));
    let queries = queries.lock().unwrap();
    assert_eq!(queries.len(), 1);
    assert!(!queries[0].contains_key("start_date"));
}

#[tokio::test]
async fn unreachable_provider_reports_unavailable() {
    let client = OpenMeteoClient::new("http://127.0.0.1:9/v1/forecast", Duration::from_secs(2))
        .unwrap();
    let outcome = resolve_outcome(&client, &FetchPlan::default(), today()).await;
    assert!(matches!(outcome, WeatherOutcome::Failed { .. }));
}

#[tokio::test]
async fn weather_endpoint_serves_outcome() {
    let (client, _) = spawn_provider(Mode::RejectTrip).await;
    let app = create_router(test_state(client));

    let (status, outcome): (_, WeatherOutcome) = get_json(app, "/api/weather").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!outcome.is_trip_forecast());
    assert_eq!(outcome.days().len(), 4);
}

#[tokio::test]
async fn current_endpoint_reports_conditions() {
    let (client, queries) = spawn_provider(Mode::AcceptTrip).await;
    let app = create_router(test_state(client));

    let (status, current): (_, CurrentWeather) = get_json(app, "/api/weather/current").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(current.weather_code, 2);
    assert!(!queries.lock().unwrap()[0].contains_key("daily"));
}

#[tokio::test]
async fn current_endpoint_is_unavailable_during_outage() {
    let (client, _) = spawn_provider(Mode::Outage).await;
    let app = create_router(test_state(client));

    let (status, error): (_, ApiError) = get_json(app, "/api/weather/current").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(error.message, UNAVAILABLE);
}

#[tokio::test]
async fn health_check_answers_without_provider() {
    let (client, queries) = spawn_provider(Mode::Outage).await;
    let app = create_router(test_state(client));

    let request = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(queries.lock().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_paths_fall_back_to_the_frontend() {
    let dist = tempfile::tempdir().unwrap();
    std::fs::write(dist.path().join("index.html"), "<div id=\"app\"></div>").unwrap();
    std::fs::write(dist.path().join("app.js"), "console.log('leyva')").unwrap();

    let (client, _) = spawn_provider(Mode::AcceptTrip).await;
    let state = AppState {
        static_dir: Some(dist.path().to_path_buf()),
        ..test_state(client)
    };
    let app = create_router(state);

    for (uri, expected) in [
        ("/app.js", "console.log('leyva')"),
        ("/things-to-do", "<div id=\"app\"></div>"),
    ] {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        let bytes = to_bytes(response.into_body(), 1024).await.unwrap();
        assert_eq!(&bytes[..], expected.as_bytes());
    }
}

#[test]
fn provider_trait_objects_are_shareable() {
    fn assert_send_sync<T: Send + Sync + ?Sized>() {}
    assert_send_sync::<dyn ForecastProvider>();
}
