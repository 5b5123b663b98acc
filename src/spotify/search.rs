use crate::{error::SpotifyError, types::SearchResponse};

use super::{SpotifyClient, expect_status};

/// Number of tracks taken from a search.
pub const SEARCH_LIMIT: u32 = 10;

impl SpotifyClient {
    /// Searches tracks matching `query` and returns their URIs in result
    /// order.
    pub async fn search_tracks(&self, token: &str, query: &str) -> Result<Vec<String>, SpotifyError> {
        let limit = SEARCH_LIMIT.to_string();
        let response = self
            .http
            .get(self.url("/search"))
            .query(&[("q", query), ("type", "track"), ("limit", limit.as_str())])
            .bearer_auth(token)
            .send()
            .await?;

        let response = expect_status(response, 200, "Failed to search tracks").await?;
        let json = response.json::<SearchResponse>().await?;

        Ok(json.tracks.items.into_iter().map(|track| track.uri).collect())
    }
}
