use rand::{Rng, distr::Alphanumeric};
use reqwest::Url;

use crate::{error::ConfigError, types::Token};

/// Gateway URL shipped in the example config.
pub const PLACEHOLDER_GATEWAY_URL: &str = "https://YOUR_GATEWAY_API.amazonaws.com";

/// Seconds before expiry at which a token is treated as expired.
pub const TOKEN_EXPIRY_MARGIN: u64 = 240;

pub fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// Validates the gateway base URL and strips a trailing `/`.
pub fn check_url(baseurl: &str) -> Result<String, ConfigError> {
    let baseurl = baseurl.trim();

    if baseurl.len() < 16 {
        return Err(ConfigError::UrlTooShort(baseurl.to_string()));
    }

    if baseurl == PLACEHOLDER_GATEWAY_URL {
        return Err(ConfigError::PlaceholderUrl);
    }

    if baseurl.starts_with("http:") {
        return Err(ConfigError::InsecureUrl(baseurl.to_string()));
    }

    Ok(baseurl.strip_suffix('/').unwrap_or(baseurl).to_string())
}

/// True for empty values and for values still carrying a `YOUR_...` marker
/// from the example config.
pub fn is_placeholder(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.to_uppercase().contains("YOUR_")
}

/// Maps a menu input line to a command number. Empty or non-numeric input
/// yields -1.
pub fn parse_menu_choice(input: &str) -> i32 {
    let input = input.trim();
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        return -1;
    }

    input.parse().unwrap_or(-1)
}

/// Pulls the authorization code out of what the user pasted.
///
/// Accepts either the bare code or the full redirect URL. A URL must carry a
/// `state` parameter equal to `expected_state`.
pub fn extract_auth_code(input: &str, expected_state: &str) -> Result<String, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("no authorization code entered".to_string());
    }

    if !input.contains("://") {
        return Ok(input.to_string());
    }

    let url = Url::parse(input).map_err(|e| format!("cannot parse redirect url: {}", e))?;

    let mut code = None;
    let mut state = None;
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "error" => return Err(format!("authorization denied: {}", value)),
            "state" => state = Some(value.into_owned()),
            "code" => code = Some(value.into_owned()),
            _ => {}
        }
    }

    if state.as_deref() != Some(expected_state) {
        return Err("state mismatch, start the authorization again".to_string());
    }

    code.ok_or_else(|| "redirect url has no 'code' parameter".to_string())
}

pub fn is_token_expired(token: &Token, now: u64) -> bool {
    now + TOKEN_EXPIRY_MARGIN >= token.obtained_at + token.expires_in
}
