//! Error types shared across the client, the handlers and the API clients.

use std::path::PathBuf;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Problems found while loading or validating configuration.
///
/// All of these are fatal for the interactive client.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file '{}' does not exist", .0.display())]
    Missing(PathBuf),

    #[error("cannot read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config file '{}': {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("missing key '{key}' in config file '{}'", path.display())]
    MissingKey { key: &'static str, path: PathBuf },

    #[error("baseurl '{0}' is not nearly long enough...")]
    UrlTooShort(String),

    #[error("update config file with your gateway endpoint")]
    PlaceholderUrl,

    #[error("your URL '{0}' starts with 'http', it should start with 'https'")]
    InsecureUrl(String),

    #[error("'{0}' still holds a placeholder value, update the config file")]
    Placeholder(&'static str),

    #[error("invalid server address '{addr}': {message}")]
    Address { addr: String, message: String },

    #[error("'{key}' is not a valid url: {message}")]
    InvalidUrl { key: &'static str, message: String },

    #[error("missing setting '{0}'")]
    MissingSetting(&'static str),
}

/// Failures talking to the Spotify Web API.
#[derive(Debug, Error)]
pub enum SpotifyError {
    /// The provider answered with a status the caller does not accept.
    /// `body` is the raw response text.
    #[error("{context}: {body}")]
    Api {
        context: &'static str,
        status: u16,
        body: String,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl SpotifyError {
    pub fn status(&self) -> Option<u16> {
        match self {
            SpotifyError::Api { status, .. } => Some(*status),
            SpotifyError::Http(e) => e.status().map(|s| s.as_u16()),
        }
    }
}

/// Failures of the managed text-analysis call.
#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("sentiment service returned status {status}: {body}")]
    Service { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("cannot sign request: {0}")]
    Signing(String),
}

/// Failures of calls from the client to the gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Non-200 answer. `message` holds the server's JSON error string when
    /// the status is 500.
    #[error("failed with status code: {status} (url: {url})")]
    Status {
        status: u16,
        url: String,
        message: Option<String>,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Outcome of a failed handler invocation.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("invalid request body: {0}")]
    BadRequest(String),

    #[error("unsupported sentiment label '{0}'")]
    UnknownSentiment(String),

    /// A provider lookup the handler cannot work without failed; its status
    /// is passed through to the caller.
    #[error("ERROR")]
    Upstream(u16),

    #[error(transparent)]
    Spotify(#[from] SpotifyError),

    #[error(transparent)]
    Sentiment(#[from] SentimentError),
}

impl HandlerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            HandlerError::BadRequest(_) | HandlerError::UnknownSentiment(_) => {
                StatusCode::BAD_REQUEST
            }
            HandlerError::Upstream(status) => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            HandlerError::Spotify(_) | HandlerError::Sentiment(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "handler failed");
        (self.status_code(), Json(self.to_string())).into_response()
    }
}

/// Failures of an interactive client flow.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Spotify(#[from] SpotifyError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("authorization failed: {0}")]
    Authorization(String),

    #[error("cannot read input: {0}")]
    Input(#[from] std::io::Error),
}
