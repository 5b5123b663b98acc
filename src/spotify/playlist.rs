use crate::{
    error::SpotifyError,
    types::{
        AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, CreatePlaylistRequest,
        CreatePlaylistResponse,
    },
};

use super::{SpotifyClient, expect_status};

/// Most track URIs accepted by one add-tracks request.
pub const ADD_TRACKS_CHUNK: usize = 100;

impl SpotifyClient {
    /// Creates a private playlist for `user_id` and returns its id.
    ///
    /// Spotify answers 201 on success. Any other status fails with the raw
    /// response text.
    pub async fn create_playlist(
        &self,
        token: &str,
        user_id: &str,
        name: &str,
    ) -> Result<String, SpotifyError> {
        let body = CreatePlaylistRequest {
            name: name.to_string(),
            description: "Created by moodlist".to_string(),
            public: false,
        };

        let response = self
            .http
            .post(self.url(&format!("/users/{}/playlists", user_id)))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        let response = expect_status(response, 201, "Failed to create playlist").await?;
        Ok(response.json::<CreatePlaylistResponse>().await?.id)
    }

    /// Appends `uris` to a playlist, [`ADD_TRACKS_CHUNK`] at a time, and
    /// returns the last snapshot id. An empty list sends nothing.
    pub async fn add_tracks(
        &self,
        token: &str,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<Option<String>, SpotifyError> {
        let api_url = self.url(&format!("/playlists/{}/tracks", playlist_id));
        let mut snapshot_id = None;

        for chunk in uris.chunks(ADD_TRACKS_CHUNK) {
            let body = AddTrackToPlaylistRequest {
                uris: chunk.to_vec(),
            };

            let response = self
                .http
                .post(&api_url)
                .bearer_auth(token)
                .json(&body)
                .send()
                .await?;

            let response = expect_status(response, 201, "Failed to add tracks").await?;
            snapshot_id = Some(response.json::<AddTrackToPlaylistResponse>().await?.snapshot_id);
        }

        Ok(snapshot_id)
    }
}
