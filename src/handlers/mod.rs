//! # Request Handlers
//!
//! Stateless handlers served by the gateway. Each accepts a JSON body and
//! answers either 200 with a JSON payload or an error status with a
//! JSON-encoded error string.
//!
//! ## Endpoints
//!
//! - [`sentiment`] - `POST /sentiment`, detect the sentiment of free text
//! - [`mood_playlist`] - `POST /playlist/mood`, playlist from a sentiment label
//! - [`top_artists_playlist`] - `POST /playlist/top-artists-songs`, playlist
//!   from the top track of each of the user's top artists
//! - [`health`] - `GET /health`, status and version
//!
//! The HTTP wrappers only decode the body and encode the outcome; the work is
//! done by plain async functions that can be called without a server.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::{get, post}};
//! use moodlist::handlers::{health, sentiment};
//!
//! let app = Router::new()
//!     .route("/sentiment", post(sentiment))
//!     .route("/health", get(health));
//! ```

mod health;
mod playlist;
mod sentiment;

use serde::de::DeserializeOwned;

use crate::{error::HandlerError, sentiment::ComprehendClient, spotify::SpotifyClient};

pub use health::health;
pub use playlist::{
    create_mood_playlist, create_top_artists_playlist, mood_playlist, top_artists_playlist,
};
pub use sentiment::{analyze_sentiment, sentiment};

/// Clients shared by every handler invocation.
#[derive(Debug, Clone)]
pub struct AppState {
    pub spotify: SpotifyClient,
    pub comprehend: ComprehendClient,
}

fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, HandlerError> {
    serde_json::from_slice(body).map_err(|e| HandlerError::BadRequest(e.to_string()))
}
