//! # CLI Module
//!
//! The interactive client. After configuration and authorization it offers a
//! numeric menu:
//!
//! ```text
//! 0 => end
//! 1 => make playlist based on your mood
//! 2 => make playlist based on your top artists
//! 3 => get text sentiment
//! ```
//!
//! ## Layout
//!
//! - [`run`] - startup: configuration, gateway health check, authorization, menu
//! - [`auth`] - authorization-code flow against Spotify
//! - [`session`] - the authorized user and a self-refreshing token
//! - [`menu`] - prompt and dispatch loop
//! - [`playlist`] - mood and top-artists playlist flows
//! - [`sentiment`] - text sentiment flow
//!
//! Every flow reads its input from a [`BufRead`] and returns a typed result.
//! The menu loop decides how results and errors are shown, then prompts
//! again; a failed action leaves nothing behind that the next one depends on.

pub mod auth;
pub mod menu;
pub mod playlist;
pub mod sentiment;
pub mod session;

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    time::Duration,
};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config::{self, ClientConfig, SpotifyConfig},
    error, gateway::GatewayClient, info,
    spotify::{SpotifyClient, auth::SpotifyAuth},
    success, warning,
};

pub use session::Session;

/// Prints `prompt` and reads one line. End of input yields an empty string.
pub fn read_line<R: BufRead>(input: &mut R, prompt: &str) -> io::Result<String> {
    println!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

pub(crate) fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

/// Asks for the client config file, ENTER keeps `default`.
fn choose_client_config<R: BufRead>(input: &mut R, default: PathBuf) -> io::Result<PathBuf> {
    println!("First, enter name of client config file to use...");
    println!("Press ENTER to use default ({}), or", default.display());
    let answer = read_line(input, "enter config file name>")?;

    if answer.trim().is_empty() {
        Ok(default)
    } else {
        Ok(PathBuf::from(answer.trim()))
    }
}

/// Runs the interactive client until the user ends it.
///
/// Configuration and authorization problems end the program with a message.
pub async fn run(client_config: Option<PathBuf>, spotify_config: Option<PathBuf>) {
    println!("** Welcome to moodlist **");
    println!();

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let client_config_path = match client_config {
        Some(path) => path,
        None => match choose_client_config(&mut input, config::default_client_config()) {
            Ok(path) => path,
            Err(e) => error!("Cannot read input: {}", e),
        },
    };

    let client_config = match ClientConfig::load(&client_config_path).await {
        Ok(c) => c,
        Err(e) => error!("{}", e),
    };

    let spotify_config_path = spotify_config.unwrap_or_else(config::default_spotify_config);
    let spotify_config = match SpotifyConfig::load(&spotify_config_path).await {
        Ok(c) => c,
        Err(e) => error!("{}", e),
    };

    let gateway = GatewayClient::new(client_config.webservice);
    match gateway.health().await {
        Some(200) => info!("Gateway {} is up", gateway.baseurl()),
        Some(status) => warning!(
            "Gateway {} answered health check with status {}",
            gateway.baseurl(),
            status
        ),
        None => warning!("Gateway {} is not reachable", gateway.baseurl()),
    }

    let spotify = SpotifyClient::new(spotify_config.api_url.clone());
    let spotify_auth = SpotifyAuth::new(spotify_config);

    if let Err(e) = spotify_auth.client_credentials().await {
        error!("Spotify rejected the configured client credentials: {}", e);
    }

    let login = auth::login(&spotify_auth, &spotify, &mut input, webbrowser::open).await;
    let (token, user) = match login {
        Ok(login) => login,
        Err(e) => error!("{}", e),
    };
    success!(
        "Logged in as {}",
        user.display_name.as_deref().unwrap_or(&user.id)
    );

    let mut session = Session::new(gateway, spotify_auth, token, user.id);
    if let Err(e) = menu::menu_loop(&mut session, &mut input).await {
        warning!("{}", e);
    }

    println!();
    println!("** done **");
}
