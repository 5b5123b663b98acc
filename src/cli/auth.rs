use std::io::BufRead;

use crate::{
    error::FlowError,
    info,
    spotify::{SpotifyClient, auth::SpotifyAuth},
    types::{Token, User},
    utils, warning,
};

use super::read_line;

/// Walks the user through the authorization-code flow.
///
/// Prints the authorize URL (and hands it to `open_browser`), reads the
/// code or the full redirect URL the user pastes, exchanges it for a token
/// and looks up the user's profile.
pub async fn login<R, F>(
    auth: &SpotifyAuth,
    spotify: &SpotifyClient,
    input: &mut R,
    open_browser: F,
) -> Result<(Token, User), FlowError>
where
    R: BufRead,
    F: FnOnce(&str) -> std::io::Result<()>,
{
    let state = utils::generate_state();
    let auth_url = auth.authorize_url(&state)?;

    info!(
        "Open the link below to authorize your Spotify account. On redirect, enter the code (or the whole url)."
    );
    println!("{}", auth_url);

    if open_browser(auth_url.as_str()).is_err() {
        warning!("Failed to open browser. Please navigate to the url above manually.");
    }

    println!();
    let answer = read_line(input, "Enter auth code>")?;
    let code = utils::extract_auth_code(&answer, &state).map_err(FlowError::Authorization)?;

    let token = auth.exchange_code(&code).await?;
    let user = spotify.current_user(&token.access_token).await?;

    Ok((token, user))
}
