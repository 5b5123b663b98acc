use std::sync::Arc;

use axum::{Extension, body::Bytes, response::Json};

use crate::{
    error::HandlerError,
    spotify::SpotifyClient,
    types::{MoodPlaylistRequest, SentimentLabel, TopArtistsPlaylistRequest},
};

use super::{AppState, parse_body};

/// Builds a playlist from tracks matching the mood of a sentiment label.
///
/// The label is mapped to its mood keyword, tracks are searched with that
/// keyword, the playlist is created and the tracks are added. Returns the
/// playlist id.
pub async fn create_mood_playlist(
    spotify: &SpotifyClient,
    request: &MoodPlaylistRequest,
) -> Result<String, HandlerError> {
    let label: SentimentLabel = request
        .sentiment
        .parse()
        .map_err(|_| HandlerError::UnknownSentiment(request.sentiment.clone()))?;
    let mood = label.mood();

    let tracks = spotify.search_tracks(&request.access_token, mood).await?;
    tracing::info!(mood, tracks = tracks.len(), "tracks found for mood");

    let playlist_id = spotify
        .create_playlist(&request.access_token, &request.user_id, &request.playlist_name)
        .await?;
    spotify
        .add_tracks(&request.access_token, &playlist_id, &tracks)
        .await?;

    Ok(playlist_id)
}

/// Builds a playlist from the top track of each of the user's top artists.
///
/// When the top-artists lookup itself is refused, its status is passed back
/// to the caller. Artists whose top tracks cannot be fetched, or who have
/// none, are skipped. A playlist may end up created but empty if adding the
/// tracks fails afterwards.
pub async fn create_top_artists_playlist(
    spotify: &SpotifyClient,
    request: &TopArtistsPlaylistRequest,
) -> Result<String, HandlerError> {
    let token = &request.access_token;

    let artists = match spotify.top_artists(token).await {
        Ok(artists) => artists,
        Err(e) => {
            tracing::warn!(error = %e, "failed to get top artists");
            return Err(match e.status() {
                Some(status) => HandlerError::Upstream(status),
                None => e.into(),
            });
        }
    };
    let artist_ids: Vec<&str> = artists.iter().map(|a| a.id.as_str()).collect();
    tracing::info!(?artist_ids, "top artists");

    let playlist_id = spotify
        .create_playlist(token, &request.user_id, &request.playlist_name)
        .await?;

    let mut track_uris = Vec::with_capacity(artist_ids.len());
    for artist_id in artist_ids {
        match spotify.artist_top_tracks(token, artist_id).await {
            Ok(tracks) => match tracks.into_iter().next() {
                Some(top_track) => track_uris.push(top_track.uri),
                None => tracing::debug!(artist_id, "artist has no top tracks"),
            },
            Err(e) => tracing::warn!(artist_id, error = %e, "skipping artist"),
        }
    }

    spotify.add_tracks(token, &playlist_id, &track_uris).await?;

    Ok(playlist_id)
}

/// `POST /playlist/mood`. Answers the playlist id.
pub async fn mood_playlist(
    Extension(state): Extension<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<String>, HandlerError> {
    let request: MoodPlaylistRequest = parse_body(&body)?;
    let playlist_id = create_mood_playlist(&state.spotify, &request).await?;
    Ok(Json(playlist_id))
}

/// `POST /playlist/top-artists-songs`. Answers the playlist id.
pub async fn top_artists_playlist(
    Extension(state): Extension<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<String>, HandlerError> {
    let request: TopArtistsPlaylistRequest = parse_body(&body)?;
    let playlist_id = create_top_artists_playlist(&state.spotify, &request).await?;
    Ok(Json(playlist_id))
}
