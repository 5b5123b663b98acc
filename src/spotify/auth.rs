use chrono::Utc;
use reqwest::{Client, Url};

use crate::{
    config::SpotifyConfig,
    error::{ConfigError, SpotifyError},
    types::{Token, TokenResponse},
};

use super::expect_status;

/// Talks to the Spotify accounts service on behalf of one registered
/// application.
#[derive(Debug, Clone)]
pub struct SpotifyAuth {
    http: Client,
    config: SpotifyConfig,
}

impl SpotifyAuth {
    pub fn new(config: SpotifyConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Builds the URL the user opens to grant access.
    ///
    /// The `state` value comes back on the redirect and lets the caller check
    /// that the code belongs to this authorization attempt.
    pub fn authorize_url(&self, state: &str) -> Result<Url, ConfigError> {
        Url::parse_with_params(
            &self.config.auth_url,
            &[
                ("response_type", "code"),
                ("client_id", self.config.client_id.as_str()),
                ("redirect_uri", self.config.redirect_uri.as_str()),
                ("scope", self.config.scope.as_str()),
                ("state", state),
            ],
        )
        .map_err(|e| ConfigError::InvalidUrl {
            key: "SPOTIFY_AUTH_URL",
            message: e.to_string(),
        })
    }

    /// Exchanges an authorization code for an access token.
    ///
    /// The client authenticates with HTTP basic auth (client id and secret).
    /// Any status other than 200 fails with the raw response text.
    pub async fn exchange_code(&self, code: &str) -> Result<Token, SpotifyError> {
        self.request_token(
            &[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", self.config.redirect_uri.as_str()),
            ],
            "Failed to exchange authorization code",
        )
        .await
    }

    /// Requests an app-only token with the client-credentials grant.
    ///
    /// Used at startup to find out early whether the configured client id
    /// and secret are accepted.
    pub async fn client_credentials(&self) -> Result<Token, SpotifyError> {
        self.request_token(
            &[("grant_type", "client_credentials")],
            "Failed to retrieve access token",
        )
        .await
    }

    /// Refreshes an expired access token. Spotify may omit a new refresh
    /// token, in which case the old one is kept.
    pub async fn refresh(&self, refresh_token: &str) -> Result<Token, SpotifyError> {
        let mut token = self
            .request_token(
                &[
                    ("grant_type", "refresh_token"),
                    ("refresh_token", refresh_token),
                ],
                "Failed to refresh access token",
            )
            .await?;

        if token.refresh_token.is_none() {
            token.refresh_token = Some(refresh_token.to_string());
        }
        Ok(token)
    }

    async fn request_token(
        &self,
        form: &[(&str, &str)],
        context: &'static str,
    ) -> Result<Token, SpotifyError> {
        let response = self
            .http
            .post(&self.config.token_url)
            .basic_auth(&self.config.client_id, Some(&self.config.client_secret))
            .form(form)
            .send()
            .await?;

        let response = expect_status(response, 200, context).await?;
        let json: TokenResponse = response.json().await?;

        Ok(Token {
            access_token: json.access_token,
            refresh_token: json.refresh_token,
            scope: json.scope,
            expires_in: json.expires_in,
            obtained_at: Utc::now().timestamp() as u64,
        })
    }
}
