use std::io::BufRead;

use crate::{
    error::FlowError,
    info,
    types::{CreatedPlaylist, MoodPlaylist, MoodPlaylistRequest, TopArtistsPlaylistRequest},
};

use super::{Session, read_line, spinner};

/// Asks about the user's day, detects its sentiment and has the gateway
/// build a playlist for that mood.
pub async fn mood_playlist<R: BufRead>(
    session: &mut Session,
    input: &mut R,
) -> Result<MoodPlaylist, FlowError> {
    let text = read_line(input, "tell me about your day>")?;

    let pb = spinner("Analyzing your day...");
    let analysis = session.gateway.analyze(&text).await;
    pb.finish_and_clear();
    let sentiment = analysis?.sentiment;

    info!(
        "Your day sounds {}, looking for {} songs",
        sentiment,
        sentiment.mood()
    );

    let name = read_line(input, "name your playlist>")?;
    let request = MoodPlaylistRequest {
        access_token: session.access_token().await,
        user_id: session.user_id.clone(),
        sentiment: sentiment.to_string(),
        playlist_name: name.clone(),
    };

    let pb = spinner("Creating playlist...");
    let result = session.gateway.mood_playlist(&request).await;
    pb.finish_and_clear();

    Ok(MoodPlaylist {
        sentiment,
        playlist: CreatedPlaylist { name, id: result? },
    })
}

/// Has the gateway build a playlist from the user's top artists.
pub async fn top_artists_playlist<R: BufRead>(
    session: &mut Session,
    input: &mut R,
) -> Result<CreatedPlaylist, FlowError> {
    let name = read_line(input, "name your playlist>")?;
    let request = TopArtistsPlaylistRequest {
        access_token: session.access_token().await,
        user_id: session.user_id.clone(),
        playlist_name: name.clone(),
    };

    let pb = spinner("Collecting your top artists' songs...");
    let result = session.gateway.top_artists_playlist(&request).await;
    pb.finish_and_clear();

    Ok(CreatedPlaylist { name, id: result? })
}
