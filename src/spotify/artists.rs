use crate::{
    error::SpotifyError,
    types::{Artist, ArtistTopTracksResponse, TopArtistsResponse, Track},
};

use super::{SpotifyClient, expect_status};

/// Number of top artists requested, the API's maximum page size.
pub const TOP_ARTISTS_LIMIT: u32 = 50;

/// Market used to resolve an artist's top tracks.
pub const TOP_TRACKS_MARKET: &str = "US";

impl SpotifyClient {
    /// Retrieves the user's top artists, most listened first.
    ///
    /// Requires the `user-top-read` scope. Any status other than 200 is an
    /// error carrying the raw response text and the status, which the
    /// top-artists handler passes back to its caller.
    pub async fn top_artists(&self, token: &str) -> Result<Vec<Artist>, SpotifyError> {
        let api_url = format!(
            "{url}?limit={limit}",
            url = self.url("/me/top/artists"),
            limit = TOP_ARTISTS_LIMIT
        );

        let response = self.http.get(&api_url).bearer_auth(token).send().await?;
        let response = expect_status(response, 200, "Failed to get top artists").await?;

        Ok(response.json::<TopArtistsResponse>().await?.items)
    }

    /// Retrieves an artist's top tracks in [`TOP_TRACKS_MARKET`].
    pub async fn artist_top_tracks(
        &self,
        token: &str,
        artist_id: &str,
    ) -> Result<Vec<Track>, SpotifyError> {
        let api_url = format!(
            "{url}?market={market}",
            url = self.url(&format!("/artists/{}/top-tracks", artist_id)),
            market = TOP_TRACKS_MARKET
        );

        let response = self.http.get(&api_url).bearer_auth(token).send().await?;
        let response = expect_status(response, 200, "Failed to get artist top tracks").await?;

        Ok(response.json::<ArtistTopTracksResponse>().await?.tracks)
    }
}
