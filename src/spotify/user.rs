use crate::{error::SpotifyError, types::User};

use super::{SpotifyClient, expect_status};

impl SpotifyClient {
    /// Fetches the profile of the user the token belongs to.
    pub async fn current_user(&self, token: &str) -> Result<User, SpotifyError> {
        let response = self
            .http
            .get(self.url("/me"))
            .bearer_auth(token)
            .send()
            .await?;

        let response = expect_status(response, 200, "Failed to get user profile").await?;
        Ok(response.json::<User>().await?)
    }
}
