use std::io::BufRead;

use tabled::Table;

use crate::{
    error::{FlowError, GatewayError},
    success, utils, warning,
};

use super::{Session, playlist, sentiment};

/// A menu entry as chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    End,
    MoodPlaylist,
    TopArtistsPlaylist,
    TextSentiment,
    Unknown,
}

impl From<i32> for MenuCommand {
    fn from(cmd: i32) -> Self {
        match cmd {
            0 => MenuCommand::End,
            1 => MenuCommand::MoodPlaylist,
            2 => MenuCommand::TopArtistsPlaylist,
            3 => MenuCommand::TextSentiment,
            _ => MenuCommand::Unknown,
        }
    }
}

/// Shows the menu and reads a command. End of input ends the session.
pub fn prompt<R: BufRead>(input: &mut R) -> Result<MenuCommand, FlowError> {
    println!();
    println!(">> Enter a command:");
    println!("   0 => end");
    println!("   1 => make playlist based on your mood");
    println!("   2 => make playlist based on your top artists");
    println!("   3 => get text sentiment");

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(MenuCommand::End);
    }

    Ok(MenuCommand::from(utils::parse_menu_choice(&line)))
}

/// Dispatches menu commands until the user ends the session.
pub async fn menu_loop<R: BufRead>(session: &mut Session, input: &mut R) -> Result<(), FlowError> {
    loop {
        match prompt(input)? {
            MenuCommand::End => return Ok(()),
            MenuCommand::MoodPlaylist => match playlist::mood_playlist(session, input).await {
                Ok(outcome) => success!(
                    "Created playlist called '{}' with id: '{}'",
                    outcome.playlist.name,
                    outcome.playlist.id
                ),
                Err(e) => report(&e),
            },
            MenuCommand::TopArtistsPlaylist => {
                match playlist::top_artists_playlist(session, input).await {
                    Ok(created) => success!(
                        "Created playlist called '{}' with id: '{}'",
                        created.name,
                        created.id
                    ),
                    Err(e) => report(&e),
                }
            }
            MenuCommand::TextSentiment => {
                match sentiment::text_sentiment(&session.gateway, input).await {
                    Ok(response) => {
                        success!("The provided text has {} sentiment", response.sentiment);
                        println!("{}", Table::new(response.scores.rows()));
                    }
                    Err(e) => report(&e),
                }
            }
            MenuCommand::Unknown => warning!("Unknown command, try again..."),
        }
    }
}

fn report(error: &FlowError) {
    tracing::error!(error = %error, "menu action failed");

    match error {
        FlowError::Gateway(GatewayError::Status {
            status,
            url,
            message,
        }) => {
            warning!("failed with status code: {}", status);
            warning!("url: {}", url);
            if let Some(message) = message {
                warning!("Error message: {}", message);
            }
        }
        other => warning!("{}", other),
    }
}
