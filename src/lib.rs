//! Mood Playlist CLI Library
//!
//! This library provides the pieces of a small distributed application: an
//! interactive client that authorizes against Spotify, and a gateway that hosts
//! stateless request handlers for sentiment detection and playlist creation.
//!
//! # Modules
//!
//! - `cli` - Interactive client flows and the menu loop
//! - `config` - Configuration files for the client and the gateway
//! - `error` - Typed errors for every layer
//! - `gateway` - HTTP client for the gateway-fronted endpoints
//! - `handlers` - Request handlers served by the gateway
//! - `retry` - Bounded-retry helper for idempotent reads
//! - `sentiment` - Managed text-analysis client (AWS Comprehend)
//! - `server` - Gateway HTTP server
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use moodlist::{config, gateway::GatewayClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), moodlist::error::ConfigError> {
//!     let client_config = config::ClientConfig::load(&config::default_client_config()).await?;
//!     let gateway = GatewayClient::new(client_config.webservice);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod gateway;
pub mod handlers;
pub mod retry;
pub mod sentiment;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("Open the link below to authorize your account");
/// info!("Searching tracks for mood {}", mood);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Logged in as {}", user.id);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program. The exit status is 0, the same as a normal run,
/// so wrappers only ever see the printed message.
///
/// # Behavior
///
/// This macro will cause the program to exit immediately after printing
/// the error message. It should only be used for configuration and startup
/// errors where recovery is not possible.
///
/// # Example
///
/// ```
/// error!("spotify config file '{}' does not exist, exiting", path.display());
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(0);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues, such as a failed menu action, after which
/// the program carries on.
///
/// # Example
///
/// ```
/// warning!("failed with status code: {}", status);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
