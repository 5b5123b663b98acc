use std::sync::Arc;

use axum::{Extension, body::Bytes, response::Json};

use crate::{
    error::HandlerError,
    sentiment::ComprehendClient,
    types::{SentimentRequest, SentimentResponse},
};

use super::{AppState, parse_body};

pub async fn analyze_sentiment(
    comprehend: &ComprehendClient,
    request: &SentimentRequest,
) -> Result<SentimentResponse, HandlerError> {
    let response = comprehend.detect_sentiment(&request.text).await?;
    tracing::info!(
        sentiment = %response.sentiment,
        positive = response.scores.positive,
        negative = response.scores.negative,
        neutral = response.scores.neutral,
        mixed = response.scores.mixed,
        "sentiment scores"
    );
    Ok(response)
}

/// `POST /sentiment`. A malformed body answers 400, a failed analysis 500,
/// both with the error message.
pub async fn sentiment(
    Extension(state): Extension<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<SentimentResponse>, HandlerError> {
    let request: SentimentRequest = parse_body(&body)?;
    let response = analyze_sentiment(&state.comprehend, &request).await?;
    Ok(Json(response))
}
