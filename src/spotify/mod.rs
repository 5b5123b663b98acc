//! # Spotify Integration Module
//!
//! Thin client for the parts of the Spotify Web API this application needs.
//! Every call is a single attempt that branches on the literal status code
//! returned; failures carry the raw response text so callers can show it.
//!
//! ## Architecture
//!
//! ```text
//! Handlers / Client flows
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (authorization code, client credentials, refresh)
//!     ├── User profile
//!     ├── Artist Operations (top artists, artist top tracks)
//!     ├── Track search
//!     └── Playlist Operations (create, add tracks)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## API Coverage
//!
//! - `GET /me` - Current user's profile
//! - `GET /me/top/artists` - User's top artists
//! - `GET /artists/{id}/top-tracks` - Artist's top tracks in a market
//! - `GET /search` - Track search
//! - `POST /users/{user_id}/playlists` - Create new playlists
//! - `POST /playlists/{playlist_id}/tracks` - Add tracks to playlists
//! - `POST /api/token` - Token exchange and refresh operations
//!
//! ## Usage Patterns
//!
//! ```rust
//! let spotify = SpotifyClient::new("https://api.spotify.com/v1");
//! let uris = spotify.search_tracks(&token, "happy").await?;
//! let playlist_id = spotify.create_playlist(&token, &user_id, "Great Day").await?;
//! spotify.add_tracks(&token, &playlist_id, &uris).await?;
//! ```

pub mod artists;
pub mod auth;
pub mod playlist;
pub mod search;
pub mod user;

use reqwest::{Client, Response};

use crate::error::SpotifyError;

/// Client for the Spotify Web API rooted at a configurable base URL.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    api_url: String,
}

impl SpotifyClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), api_url)
    }

    pub fn with_client(http: Client, api_url: impl Into<String>) -> Self {
        Self {
            http,
            api_url: api_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}

/// Turns a response whose status is not `expected` into an error holding the
/// raw body.
async fn expect_status(
    response: Response,
    expected: u16,
    context: &'static str,
) -> Result<Response, SpotifyError> {
    let status = response.status().as_u16();
    if status == expected {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    tracing::warn!(context, status, body = %body, "spotify call failed");
    Err(SpotifyError::Api {
        context,
        status,
        body,
    })
}
