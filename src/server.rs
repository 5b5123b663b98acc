use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{
    config::GatewayConfig,
    gateway::{HEALTH_PATH, MOOD_PLAYLIST_PATH, SENTIMENT_PATH, TOP_ARTISTS_PLAYLIST_PATH},
    handlers::{self, AppState},
    sentiment::ComprehendClient,
    spotify::SpotifyClient,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(HEALTH_PATH, get(handlers::health))
        .route(SENTIMENT_PATH, post(handlers::sentiment))
        .route(MOOD_PLAYLIST_PATH, post(handlers::mood_playlist))
        .route(
            TOP_ARTISTS_PLAYLIST_PATH,
            post(handlers::top_artists_playlist),
        )
        .layer(Extension(state))
}

pub async fn start_gateway_server(config: GatewayConfig) -> std::io::Result<()> {
    let state = Arc::new(AppState {
        spotify: SpotifyClient::new(config.spotify_api_url.clone()),
        comprehend: ComprehendClient::new(config.comprehend.clone()),
    });

    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    tracing::info!(addr = %config.addr, "gateway listening");
    axum::serve(listener, router(state)).await
}
