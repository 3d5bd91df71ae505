use std::time::Duration;

use async_trait::async_trait;
use shared::weather::{FetchError, ForecastQuery, ForecastResponse};

use crate::error::transport_error;

pub const OPEN_METEO_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Source of forecast data.
///
/// Implementations perform exactly one request per call and never retry;
/// the fetch policy decides whether a second query is worth sending.
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    async fn fetch(&self, query: &ForecastQuery) -> Result<ForecastResponse, FetchError>;
}

#[derive(Clone)]
pub struct OpenMeteoClient {
    http: reqwest::Client,
    base_url: String,
}

impl OpenMeteoClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ForecastProvider for OpenMeteoClient {
    async fn fetch(&self, query: &ForecastQuery) -> Result<ForecastResponse, FetchError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&query.query_pairs())
            .send()
            .await
            .map_err(transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(transport_error)?;
        let parsed = serde_json::from_slice::<ForecastResponse>(&body);

        if !status.is_success() {
            if let Some(FetchError::ProviderRejection(reason)) =
                parsed.ok().and_then(|body| body.rejection())
            {
                tracing::debug!("provider rejected query with HTTP {status}: {reason}");
            }
            return Err(FetchError::Status(status.as_u16()));
        }

        parsed.map_err(|err| FetchError::Parse(err.to_string()))
    }
}
