use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

/// Raw body of the provider's token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: String,
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopArtistsResponse {
    pub items: Vec<Artist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistTopTracksResponse {
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: Tracks,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tracks {
    pub items: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistResponse {
    pub snapshot_id: String,
}

/// Categorical result of the text-analysis service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
    Mixed,
}

impl SentimentLabel {
    pub const ALL: [SentimentLabel; 4] = [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
        SentimentLabel::Mixed,
    ];

    /// Search keyword used to find tracks matching this sentiment.
    pub fn mood(self) -> &'static str {
        match self {
            SentimentLabel::Negative => "sad",
            SentimentLabel::Mixed => "versatile",
            SentimentLabel::Neutral => "ambient",
            SentimentLabel::Positive => "happy",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "POSITIVE",
            SentimentLabel::Negative => "NEGATIVE",
            SentimentLabel::Neutral => "NEUTRAL",
            SentimentLabel::Mixed => "MIXED",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SentimentLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SentimentLabel::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| format!("unsupported sentiment label '{}'", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub mixed: f64,
}

#[derive(Tabled)]
pub struct SentimentScoreRow {
    pub sentiment: String,
    pub confidence: String,
}

impl SentimentScore {
    pub fn rows(&self) -> Vec<SentimentScoreRow> {
        [
            (SentimentLabel::Positive, self.positive),
            (SentimentLabel::Negative, self.negative),
            (SentimentLabel::Neutral, self.neutral),
            (SentimentLabel::Mixed, self.mixed),
        ]
        .into_iter()
        .map(|(label, score)| SentimentScoreRow {
            sentiment: label.to_string(),
            confidence: format!("{:.4}", score),
        })
        .collect()
    }
}

/// Body of `DetectSentiment`, AWS JSON 1.1 wire names.
#[derive(Debug, Clone, Serialize)]
pub struct DetectSentimentRequest<'a> {
    #[serde(rename = "Text")]
    pub text: &'a str,
    #[serde(rename = "LanguageCode")]
    pub language_code: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DetectSentimentResponse {
    #[serde(rename = "Sentiment")]
    pub sentiment: SentimentLabel,
    #[serde(rename = "SentimentScore")]
    pub sentiment_score: DetectSentimentScore,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DetectSentimentScore {
    #[serde(rename = "Positive")]
    pub positive: f64,
    #[serde(rename = "Negative")]
    pub negative: f64,
    #[serde(rename = "Neutral")]
    pub neutral: f64,
    #[serde(rename = "Mixed")]
    pub mixed: f64,
}

impl From<DetectSentimentScore> for SentimentScore {
    fn from(score: DetectSentimentScore) -> Self {
        SentimentScore {
            positive: score.positive,
            negative: score.negative,
            neutral: score.neutral,
            mixed: score.mixed,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentResponse {
    pub sentiment: SentimentLabel,
    pub scores: SentimentScore,
}

/// The label stays a plain string on the wire so the handler can reject
/// unknown values with its own message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodPlaylistRequest {
    pub access_token: String,
    pub user_id: String,
    pub sentiment: String,
    pub playlist_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopArtistsPlaylistRequest {
    pub access_token: String,
    pub user_id: String,
    pub playlist_name: String,
}

/// A playlist created on behalf of the user by one of the flows.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedPlaylist {
    pub name: String,
    pub id: String,
}

/// Outcome of the mood flow: the detected label and the playlist built
/// from it.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodPlaylist {
    pub sentiment: SentimentLabel,
    pub playlist: CreatedPlaylist,
}
