mod common;

use common::{FakeOptions, spawn_fake, spawn_gateway};
use serde_json::{Value, json};

async fn post(url: &str, body: &Value) -> (u16, Value) {
    let response = reqwest::Client::new()
        .post(url)
        .json(body)
        .send()
        .await
        .unwrap();
    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

fn mood_request(sentiment: &str) -> Value {
    json!({
        "access_token": "token-1",
        "user_id": "user-1",
        "sentiment": sentiment,
        "playlist_name": "Great Day"
    })
}

fn top_artists_request() -> Value {
    json!({
        "access_token": "token-1",
        "user_id": "user-1",
        "playlist_name": "Favourites"
    })
}

#[tokio::test]
async fn test_health() {
    let fake = spawn_fake(FakeOptions::default()).await;
    let gateway = spawn_gateway(&fake).await;

    let response = reqwest::get(format!("{}/health", gateway)).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "moodlist");
}

#[tokio::test]
async fn test_sentiment() {
    let fake = spawn_fake(FakeOptions::default()).await;
    let gateway = spawn_gateway(&fake).await;

    let (status, body) = post(
        &format!("{}/sentiment", gateway),
        &json!({ "text": "I had a wonderful day" }),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["sentiment"], "POSITIVE");
    assert_eq!(body["scores"]["positive"], 0.98);

    let recorded = fake.recorded();
    assert_eq!(recorded.sentiment_texts, vec!["I had a wonderful day"]);
    assert_eq!(
        recorded.sentiment_targets,
        vec!["Comprehend_20171127.DetectSentiment"]
    );
    assert_eq!(recorded.sentiment_signed, vec![true]);
}

#[tokio::test]
async fn test_sentiment_service_failure() {
    let fake = spawn_fake(FakeOptions::default()).await;
    let gateway = spawn_gateway(&fake).await;

    let (status, body) = post(&format!("{}/sentiment", gateway), &json!({ "text": "" })).await;

    assert_eq!(status, 500);
    assert!(body.as_str().unwrap().contains("ValidationException"));
}

#[tokio::test]
async fn test_malformed_body() {
    let fake = spawn_fake(FakeOptions::default()).await;
    let gateway = spawn_gateway(&fake).await;

    let (status, body) = post(
        &format!("{}/sentiment", gateway),
        &json!({ "message": "wrong field" }),
    )
    .await;
    assert_eq!(status, 400);
    assert!(body.as_str().unwrap().starts_with("invalid request body"));

    let (status, _) = post(
        &format!("{}/playlist/mood", gateway),
        &json!({ "sentiment": "POSITIVE" }),
    )
    .await;
    assert_eq!(status, 400);
    assert!(fake.recorded().created_playlists.is_empty());
}

#[tokio::test]
async fn test_mood_playlist() {
    let fake = spawn_fake(FakeOptions::default()).await;
    let gateway = spawn_gateway(&fake).await;

    for (label, mood) in [
        ("NEGATIVE", "sad"),
        ("MIXED", "versatile"),
        ("NEUTRAL", "ambient"),
        ("POSITIVE", "happy"),
    ] {
        let (status, body) = post(
            &format!("{}/playlist/mood", gateway),
            &mood_request(label),
        )
        .await;
        assert_eq!(status, 200);
        assert_eq!(body, "playlist-1");

        let recorded = fake.recorded();
        assert_eq!(recorded.search_queries.last().unwrap(), mood);
        assert_eq!(
            recorded.added_tracks.last().unwrap(),
            &vec![
                format!("spotify:track:{}-1", mood),
                format!("spotify:track:{}-2", mood),
                format!("spotify:track:{}-3", mood),
            ]
        );
    }

    let recorded = fake.recorded();
    assert_eq!(recorded.created_playlists.len(), 4);
    assert_eq!(
        recorded.created_playlists[0],
        ("user-1".to_string(), "Great Day".to_string())
    );
}

#[tokio::test]
async fn test_mood_playlist_unknown_label() {
    let fake = spawn_fake(FakeOptions::default()).await;
    let gateway = spawn_gateway(&fake).await;

    for label in ["JOYFUL", "positive", ""] {
        let (status, body) = post(
            &format!("{}/playlist/mood", gateway),
            &mood_request(label),
        )
        .await;
        assert_eq!(status, 400, "label '{}'", label);
        assert!(body.as_str().unwrap().contains("unsupported sentiment label"));
    }

    let recorded = fake.recorded();
    assert!(recorded.search_queries.is_empty());
    assert!(recorded.created_playlists.is_empty());
}

#[tokio::test]
async fn test_mood_playlist_create_failure() {
    let fake = spawn_fake(FakeOptions {
        fail_create: true,
        ..FakeOptions::default()
    })
    .await;
    let gateway = spawn_gateway(&fake).await;

    let (status, body) = post(
        &format!("{}/playlist/mood", gateway),
        &mood_request("POSITIVE"),
    )
    .await;
    assert_eq!(status, 500);
    let message = body.as_str().unwrap();
    assert!(message.contains("Failed to create playlist"));
    assert!(message.contains("Insufficient client scope"));
    assert!(fake.recorded().added_tracks.is_empty());
}

#[tokio::test]
async fn test_top_artists_playlist() {
    let fake = spawn_fake(FakeOptions {
        artists: vec!["a1", "a2", "a3"],
        ..FakeOptions::default()
    })
    .await;
    let gateway = spawn_gateway(&fake).await;

    let (status, body) = post(
        &format!("{}/playlist/top-artists-songs", gateway),
        &top_artists_request(),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body, "playlist-1");

    let recorded = fake.recorded();
    assert_eq!(recorded.top_track_lookups, vec!["a1", "a2", "a3"]);
    assert_eq!(
        recorded.added_tracks,
        vec![vec![
            "spotify:track:a1-1".to_string(),
            "spotify:track:a2-1".to_string(),
            "spotify:track:a3-1".to_string(),
        ]]
    );
    assert_eq!(
        recorded.created_playlists,
        vec![("user-1".to_string(), "Favourites".to_string())]
    );
}

#[tokio::test]
async fn test_top_artists_playlist_skips_artists_without_tracks() {
    let fake = spawn_fake(FakeOptions {
        artists: vec!["a1", "a2", "a3"],
        artists_without_tracks: vec!["a2"],
        ..FakeOptions::default()
    })
    .await;
    let gateway = spawn_gateway(&fake).await;

    let (status, _) = post(
        &format!("{}/playlist/top-artists-songs", gateway),
        &top_artists_request(),
    )
    .await;
    assert_eq!(status, 200);

    let recorded = fake.recorded();
    assert_eq!(
        recorded.added_tracks,
        vec![vec![
            "spotify:track:a1-1".to_string(),
            "spotify:track:a3-1".to_string(),
        ]]
    );
}

#[tokio::test]
async fn test_top_artists_playlist_passes_status_through() {
    let fake = spawn_fake(FakeOptions {
        artists: vec!["a1"],
        top_artists_status: Some(401),
        ..FakeOptions::default()
    })
    .await;
    let gateway = spawn_gateway(&fake).await;

    let (status, body) = post(
        &format!("{}/playlist/top-artists-songs", gateway),
        &top_artists_request(),
    )
    .await;
    assert_eq!(status, 401);
    assert_eq!(body, "ERROR");

    let recorded = fake.recorded();
    assert!(recorded.created_playlists.is_empty());
    assert!(recorded.top_track_lookups.is_empty());
}

#[tokio::test]
async fn test_top_artists_playlist_without_artists() {
    let fake = spawn_fake(FakeOptions::default()).await;
    let gateway = spawn_gateway(&fake).await;

    let (status, body) = post(
        &format!("{}/playlist/top-artists-songs", gateway),
        &top_artists_request(),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body, "playlist-1");

    // the playlist exists but nothing was added to it
    let recorded = fake.recorded();
    assert_eq!(recorded.created_playlists.len(), 1);
    assert!(recorded.added_tracks.is_empty());
}
