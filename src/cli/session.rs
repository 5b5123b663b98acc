use chrono::Utc;

use crate::{gateway::GatewayClient, spotify::auth::SpotifyAuth, types::Token, utils, warning};

/// Everything the menu actions need about the logged-in user.
#[derive(Debug, Clone)]
pub struct Session {
    pub gateway: GatewayClient,
    pub auth: SpotifyAuth,
    pub user_id: String,
    token: Token,
}

impl Session {
    pub fn new(gateway: GatewayClient, auth: SpotifyAuth, token: Token, user_id: String) -> Self {
        Self {
            gateway,
            auth,
            user_id,
            token,
        }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Returns an access token, refreshing it first when it is about to
    /// expire. A failed refresh keeps the old token and lets the next call
    /// report the problem.
    pub async fn access_token(&mut self) -> String {
        let now = Utc::now().timestamp() as u64;
        if utils::is_token_expired(&self.token, now) {
            if let Some(refresh_token) = self.token.refresh_token.clone() {
                match self.auth.refresh(&refresh_token).await {
                    Ok(new_token) => self.token = new_token,
                    Err(e) => warning!("Failed to refresh access token: {}", e),
                }
            }
        }

        self.token.access_token.clone()
    }
}
