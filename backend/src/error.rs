use std::net::SocketAddr;

use axum::{http::StatusCode, Json};
use shared::{weather::FetchError, ApiError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Network, DNS and timeout failures all count as transport errors.
pub fn transport_error(err: reqwest::Error) -> FetchError {
    FetchError::Transport(err.to_string())
}

pub fn service_unavailable(message: impl Into<String>) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ApiError {
            message: message.into(),
        }),
    )
}
