//! In-process stand-ins for the Spotify Web API, the Spotify accounts
//! service and AWS Comprehend, plus a helper to run the gateway router.

#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    Form, Json, Router,
    body::Bytes,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};

use moodlist::{
    config::{AwsCredentials, ComprehendConfig, SpotifyConfig},
    handlers::AppState,
    sentiment::ComprehendClient,
    server,
    spotify::SpotifyClient,
};

#[derive(Debug, Clone, Default)]
pub struct FakeOptions {
    pub artists: Vec<&'static str>,
    /// Artists whose top-tracks lookup returns an empty list.
    pub artists_without_tracks: Vec<&'static str>,
    /// Status answered by `/me/top/artists` instead of 200.
    pub top_artists_status: Option<u16>,
    pub fail_create: bool,
}

#[derive(Debug, Default)]
pub struct Recorded {
    pub search_queries: Vec<String>,
    pub created_playlists: Vec<(String, String)>,
    pub added_tracks: Vec<Vec<String>>,
    pub top_track_lookups: Vec<String>,
    pub sentiment_texts: Vec<String>,
    pub sentiment_targets: Vec<String>,
    pub sentiment_signed: Vec<bool>,
    pub token_grants: Vec<String>,
    pub token_auth_headers: Vec<String>,
    pub bearer_tokens: Vec<String>,
}

pub struct Fake {
    options: FakeOptions,
    pub recorded: Mutex<Recorded>,
}

pub struct FakeServer {
    pub url: String,
    pub fake: Arc<Fake>,
}

impl FakeServer {
    pub fn recorded(&self) -> std::sync::MutexGuard<'_, Recorded> {
        self.fake.recorded.lock().unwrap()
    }

    pub fn spotify(&self) -> SpotifyClient {
        SpotifyClient::new(self.url.clone())
    }

    pub fn comprehend_config(&self) -> ComprehendConfig {
        ComprehendConfig {
            region: "us-east-1".to_string(),
            endpoint: format!("{}/comprehend", self.url),
            language_code: "en".to_string(),
            credentials: AwsCredentials {
                access_key_id: "AKIDEXAMPLE".to_string(),
                secret_access_key: "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY".to_string(),
                session_token: None,
            },
        }
    }

    pub fn spotify_config(&self) -> SpotifyConfig {
        SpotifyConfig {
            client_id: "client-id".to_string(),
            client_secret: "client-secret".to_string(),
            redirect_uri: "http://127.0.0.1:8888/callback".to_string(),
            scope: "user-top-read".to_string(),
            api_url: self.url.clone(),
            auth_url: format!("{}/authorize", self.url),
            token_url: format!("{}/api/token", self.url),
        }
    }
}

pub async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

pub async fn spawn_fake(options: FakeOptions) -> FakeServer {
    let fake = Arc::new(Fake {
        options,
        recorded: Mutex::new(Recorded::default()),
    });

    let app = Router::new()
        .route("/me", get(me))
        .route("/me/top/artists", get(top_artists))
        .route("/artists/{id}/top-tracks", get(top_tracks))
        .route("/search", get(search))
        .route("/users/{user_id}/playlists", post(create_playlist))
        .route("/playlists/{id}/tracks", post(add_tracks))
        .route("/api/token", post(token))
        .route("/comprehend/", post(detect_sentiment))
        .with_state(Arc::clone(&fake));

    let url = serve(app).await;
    FakeServer { url, fake }
}

/// Runs the real gateway router against the fake services.
pub async fn spawn_gateway(fake: &FakeServer) -> String {
    let state = Arc::new(AppState {
        spotify: fake.spotify(),
        comprehend: ComprehendClient::new(fake.comprehend_config()),
    });
    serve(server::router(state)).await
}

fn record_bearer(fake: &Fake, headers: &HeaderMap) {
    if let Some(value) = headers.get("authorization").and_then(|v| v.to_str().ok()) {
        fake.recorded
            .lock()
            .unwrap()
            .bearer_tokens
            .push(value.trim_start_matches("Bearer ").to_string());
    }
}

async fn me(State(fake): State<Arc<Fake>>, headers: HeaderMap) -> Json<Value> {
    record_bearer(&fake, &headers);
    Json(json!({ "id": "user-1", "display_name": "Test User" }))
}

async fn top_artists(State(fake): State<Arc<Fake>>, headers: HeaderMap) -> Response {
    record_bearer(&fake, &headers);
    if let Some(status) = fake.options.top_artists_status {
        let status = StatusCode::from_u16(status).unwrap();
        return (
            status,
            Json(json!({ "error": { "status": status.as_u16(), "message": "The access token expired" } })),
        )
            .into_response();
    }

    let items: Vec<Value> = fake
        .options
        .artists
        .iter()
        .map(|id| json!({ "id": id, "name": format!("Artist {}", id), "genres": ["pop"] }))
        .collect();
    Json(json!({ "items": items, "total": items.len() })).into_response()
}

async fn top_tracks(
    State(fake): State<Arc<Fake>>,
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    fake.recorded.lock().unwrap().top_track_lookups.push(id.clone());
    if params.get("market").map(String::as_str) != Some("US") {
        return (StatusCode::BAD_REQUEST, "missing market").into_response();
    }

    if fake.options.artists_without_tracks.contains(&id.as_str()) {
        return Json(json!({ "tracks": [] })).into_response();
    }

    Json(json!({
        "tracks": [
            { "id": format!("{}-1", id), "name": "Top", "uri": format!("spotify:track:{}-1", id) },
            { "id": format!("{}-2", id), "name": "Second", "uri": format!("spotify:track:{}-2", id) }
        ]
    }))
    .into_response()
}

async fn search(
    State(fake): State<Arc<Fake>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let query = params.get("q").cloned().unwrap_or_default();
    fake.recorded.lock().unwrap().search_queries.push(query.clone());

    if params.get("type").map(String::as_str) != Some("track") {
        return (StatusCode::BAD_REQUEST, "unsupported type").into_response();
    }

    let items: Vec<Value> = (1..=3)
        .map(|i| {
            json!({
                "id": format!("{}-{}", query, i),
                "name": format!("{} song {}", query, i),
                "uri": format!("spotify:track:{}-{}", query, i)
            })
        })
        .collect();
    Json(json!({ "tracks": { "items": items } })).into_response()
}

async fn create_playlist(
    State(fake): State<Arc<Fake>>,
    Path(user_id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    if fake.options.fail_create {
        return (
            StatusCode::FORBIDDEN,
            r#"{"error":{"status":403,"message":"Insufficient client scope"}}"#,
        )
            .into_response();
    }

    let name = body["name"].as_str().unwrap_or_default().to_string();
    fake.recorded
        .lock()
        .unwrap()
        .created_playlists
        .push((user_id, name.clone()));

    (
        StatusCode::CREATED,
        Json(json!({ "id": "playlist-1", "name": name, "public": body["public"] })),
    )
        .into_response()
}

async fn add_tracks(
    State(fake): State<Arc<Fake>>,
    Path(_id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let uris: Vec<String> = body["uris"]
        .as_array()
        .map(|uris| {
            uris.iter()
                .filter_map(|u| u.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();
    fake.recorded.lock().unwrap().added_tracks.push(uris);

    (StatusCode::CREATED, Json(json!({ "snapshot_id": "snapshot-1" }))).into_response()
}

async fn token(
    State(fake): State<Arc<Fake>>,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    let grant = form.get("grant_type").cloned().unwrap_or_default();
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    {
        let mut recorded = fake.recorded.lock().unwrap();
        recorded.token_grants.push(grant.clone());
        recorded.token_auth_headers.push(auth.clone());
    }

    if !auth.starts_with("Basic ") {
        return (
            StatusCode::BAD_REQUEST,
            r#"{"error":"invalid_client"}"#,
        )
            .into_response();
    }

    if grant == "authorization_code" && form.get("code").map(String::as_str) != Some("good-code") {
        return (
            StatusCode::BAD_REQUEST,
            r#"{"error":"invalid_grant","error_description":"Invalid authorization code"}"#,
        )
            .into_response();
    }

    let mut body = json!({
        "access_token": format!("access-{}", grant),
        "token_type": "Bearer",
        "expires_in": 3600,
        "scope": "user-top-read"
    });
    if grant == "authorization_code" {
        body["refresh_token"] = json!("refresh-1");
    }
    Json(body).into_response()
}

async fn detect_sentiment(
    State(fake): State<Arc<Fake>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let target = headers
        .get("x-amz-target")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let signed = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/"))
        .unwrap_or(false);

    let json: Value = match serde_json::from_slice(&body) {
        Ok(json) => json,
        Err(_) => return (StatusCode::BAD_REQUEST, "bad body").into_response(),
    };
    let text = json["Text"].as_str().unwrap_or_default().to_string();

    {
        let mut recorded = fake.recorded.lock().unwrap();
        recorded.sentiment_texts.push(text.clone());
        recorded.sentiment_targets.push(target);
        recorded.sentiment_signed.push(signed);
    }

    if text.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            r#"{"__type":"ValidationException","Message":"1 validation error detected"}"#,
        )
            .into_response();
    }

    let (sentiment, scores) = if text.contains("wonderful") {
        ("POSITIVE", [0.98, 0.005, 0.01, 0.005])
    } else if text.contains("terrible") {
        ("NEGATIVE", [0.01, 0.95, 0.03, 0.01])
    } else {
        ("NEUTRAL", [0.1, 0.05, 0.8, 0.05])
    };

    Json(json!({
        "Sentiment": sentiment,
        "SentimentScore": {
            "Positive": scores[0],
            "Negative": scores[1],
            "Neutral": scores[2],
            "Mixed": scores[3]
        }
    }))
    .into_response()
}
