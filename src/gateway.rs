//! Client side of the gateway-fronted endpoints.

use reqwest::{Client, Response};
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    error::GatewayError,
    retry,
    types::{MoodPlaylistRequest, SentimentRequest, SentimentResponse, TopArtistsPlaylistRequest},
};

pub const SENTIMENT_PATH: &str = "/sentiment";
pub const MOOD_PLAYLIST_PATH: &str = "/playlist/mood";
pub const TOP_ARTISTS_PLAYLIST_PATH: &str = "/playlist/top-artists-songs";
pub const HEALTH_PATH: &str = "/health";

#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: Client,
    baseurl: String,
}

impl GatewayClient {
    pub fn new(baseurl: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            baseurl: baseurl.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn baseurl(&self) -> &str {
        &self.baseurl
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.baseurl, path)
    }

    /// Probes `GET /health` with the bounded-retry helper.
    ///
    /// Returns the last status seen, or `None` when the gateway could not be
    /// reached at all.
    pub async fn health(&self) -> Option<u16> {
        retry::web_service_get(&self.http, &self.url(HEALTH_PATH))
            .await
            .map(|response| response.status().as_u16())
    }

    pub async fn analyze(&self, text: &str) -> Result<SentimentResponse, GatewayError> {
        self.post(
            SENTIMENT_PATH,
            &SentimentRequest {
                text: text.to_string(),
            },
        )
        .await
    }

    /// Returns the id of the created playlist.
    pub async fn mood_playlist(&self, request: &MoodPlaylistRequest) -> Result<String, GatewayError> {
        self.post(MOOD_PLAYLIST_PATH, request).await
    }

    /// Returns the id of the created playlist.
    pub async fn top_artists_playlist(
        &self,
        request: &TopArtistsPlaylistRequest,
    ) -> Result<String, GatewayError> {
        self.post(TOP_ARTISTS_PLAYLIST_PATH, request).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, GatewayError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let response = self.http.post(&url).json(body).send().await?;
        let response = check_status(response, url).await?;
        Ok(response.json::<T>().await?)
    }
}

/// Anything but 200 is a failure. A 500 carries the handler's JSON-encoded
/// error message.
async fn check_status(response: Response, url: String) -> Result<Response, GatewayError> {
    let status = response.status().as_u16();
    if status == 200 {
        return Ok(response);
    }

    let message = if status == 500 {
        response.json::<String>().await.ok()
    } else {
        None
    };

    Err(GatewayError::Status {
        status,
        url,
        message,
    })
}
