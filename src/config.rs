//! Configuration management for the mood playlist client and gateway.
//!
//! Configuration lives in small key=value files using `.env` syntax. They are
//! parsed into explicit values that are handed to the code that needs them;
//! nothing is read from ambient process state after startup, except that the
//! gateway lets the process environment override its file.
//!
//! Default files live in the platform-specific local data directory:
//! - Linux: `~/.local/share/moodlist/`
//! - macOS: `~/Library/Application Support/moodlist/`
//! - Windows: `%LOCALAPPDATA%/moodlist/`

use std::{
    collections::HashMap,
    env,
    net::SocketAddr,
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::{error::ConfigError, utils};

pub const SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const SPOTIFY_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const SPOTIFY_SCOPE: &str = "user-library-read user-library-modify playlist-read-private playlist-modify-private playlist-modify-public user-read-private user-read-email user-top-read";

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8080";
pub const DEFAULT_AWS_REGION: &str = "us-east-1";
pub const DEFAULT_SENTIMENT_LANGUAGE: &str = "en";

fn config_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("moodlist");
    path
}

pub fn default_client_config() -> PathBuf {
    config_dir().join("client.env")
}

pub fn default_spotify_config() -> PathBuf {
    config_dir().join("spotify.env")
}

pub fn default_gateway_config() -> PathBuf {
    config_dir().join("gateway.env")
}

/// Reads a key=value file into a map.
pub async fn read_key_values(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    match async_fs::metadata(path).await {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => return Err(ConfigError::Missing(path.to_path_buf())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::Missing(path.to_path_buf()));
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    }

    let iter = dotenv::from_path_iter(path).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    iter.map(|item| {
        item.map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    })
    .collect()
}

fn required(
    values: &HashMap<String, String>,
    key: &'static str,
    path: &Path,
) -> Result<String, ConfigError> {
    values
        .get(key)
        .map(|v| v.trim().to_string())
        .ok_or_else(|| ConfigError::MissingKey {
            key,
            path: path.to_path_buf(),
        })
}

fn optional(values: &HashMap<String, String>, key: &str, default: &str) -> String {
    values
        .get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .to_string()
}

/// Client-side settings: where the gateway lives.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub webservice: String,
}

impl ClientConfig {
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let values = read_key_values(path).await?;
        Self::from_values(&values, path)
    }

    pub fn from_values(values: &HashMap<String, String>, path: &Path) -> Result<Self, ConfigError> {
        let webservice = utils::check_url(&required(values, "WEBSERVICE", path)?)?;
        Ok(Self { webservice })
    }
}

/// Spotify application credentials and endpoints.
#[derive(Debug, Clone)]
pub struct SpotifyConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub scope: String,
    pub api_url: String,
    pub auth_url: String,
    pub token_url: String,
}

impl SpotifyConfig {
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let values = read_key_values(path).await?;
        Self::from_values(&values, path)
    }

    pub fn from_values(values: &HashMap<String, String>, path: &Path) -> Result<Self, ConfigError> {
        let client_id = required(values, "SPOTIFY_CLIENT_ID", path)?;
        let client_secret = required(values, "SPOTIFY_CLIENT_SECRET", path)?;
        let redirect_uri = required(values, "SPOTIFY_REDIRECT_URI", path)?;

        for (key, value) in [
            ("SPOTIFY_CLIENT_ID", &client_id),
            ("SPOTIFY_CLIENT_SECRET", &client_secret),
            ("SPOTIFY_REDIRECT_URI", &redirect_uri),
        ] {
            if utils::is_placeholder(value) {
                return Err(ConfigError::Placeholder(key));
            }
        }

        Ok(Self {
            client_id,
            client_secret,
            redirect_uri,
            scope: optional(values, "SPOTIFY_SCOPE", SPOTIFY_SCOPE),
            api_url: optional(values, "SPOTIFY_API_URL", SPOTIFY_API_URL)
                .trim_end_matches('/')
                .to_string(),
            auth_url: optional(values, "SPOTIFY_AUTH_URL", SPOTIFY_AUTH_URL),
            token_url: optional(values, "SPOTIFY_TOKEN_URL", SPOTIFY_TOKEN_URL),
        })
    }
}

/// Static AWS credentials used to sign sentiment requests.
#[derive(Debug, Clone)]
pub struct AwsCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ComprehendConfig {
    pub region: String,
    pub endpoint: String,
    pub language_code: String,
    pub credentials: AwsCredentials,
}

/// Settings of the gateway server hosting the request handlers.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub addr: SocketAddr,
    pub spotify_api_url: String,
    pub comprehend: ComprehendConfig,
}

impl GatewayConfig {
    /// Loads the gateway file when it exists and lets the process environment
    /// override any of its keys.
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut values = match read_key_values(path).await {
            Ok(values) => values,
            Err(ConfigError::Missing(_)) => HashMap::new(),
            Err(e) => return Err(e),
        };

        for key in [
            "SERVER_ADDRESS",
            "SPOTIFY_API_URL",
            "AWS_REGION",
            "AWS_ACCESS_KEY_ID",
            "AWS_SECRET_ACCESS_KEY",
            "AWS_SESSION_TOKEN",
            "COMPREHEND_ENDPOINT",
            "SENTIMENT_LANGUAGE",
        ] {
            if let Ok(value) = env::var(key) {
                values.insert(key.to_string(), value);
            }
        }

        Self::from_values(&values)
    }

    pub fn from_values(values: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let addr_value = optional(values, "SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS);
        let addr = SocketAddr::from_str(&addr_value).map_err(|e| ConfigError::Address {
            addr: addr_value.clone(),
            message: e.to_string(),
        })?;

        let region = optional(values, "AWS_REGION", DEFAULT_AWS_REGION);
        let endpoint = optional(
            values,
            "COMPREHEND_ENDPOINT",
            &format!("https://comprehend.{}.amazonaws.com", region),
        );

        let access_key_id = optional(values, "AWS_ACCESS_KEY_ID", "");
        if access_key_id.is_empty() {
            return Err(ConfigError::MissingSetting("AWS_ACCESS_KEY_ID"));
        }
        let secret_access_key = optional(values, "AWS_SECRET_ACCESS_KEY", "");
        if secret_access_key.is_empty() {
            return Err(ConfigError::MissingSetting("AWS_SECRET_ACCESS_KEY"));
        }
        let session_token = Some(optional(values, "AWS_SESSION_TOKEN", ""))
            .filter(|token| !token.is_empty());

        Ok(Self {
            addr,
            spotify_api_url: optional(values, "SPOTIFY_API_URL", SPOTIFY_API_URL)
                .trim_end_matches('/')
                .to_string(),
            comprehend: ComprehendConfig {
                region,
                endpoint: endpoint.trim_end_matches('/').to_string(),
                language_code: optional(values, "SENTIMENT_LANGUAGE", DEFAULT_SENTIMENT_LANGUAGE),
                credentials: AwsCredentials {
                    access_key_id,
                    secret_access_key,
                    session_token,
                },
            },
        })
    }
}
