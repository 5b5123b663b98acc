//! Managed text analysis.
//!
//! Sentiment detection is delegated to AWS Comprehend's `DetectSentiment`
//! operation, called directly over HTTPS with the AWS JSON 1.1 protocol and a
//! SigV4 signature. The call is a single attempt.

pub mod sigv4;

use chrono::Utc;
use reqwest::{Client, Url};

use crate::{
    config::ComprehendConfig,
    error::SentimentError,
    types::{DetectSentimentRequest, DetectSentimentResponse, SentimentResponse},
};

const SERVICE: &str = "comprehend";
const TARGET: &str = "Comprehend_20171127.DetectSentiment";
const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

#[derive(Debug, Clone)]
pub struct ComprehendClient {
    http: Client,
    config: ComprehendConfig,
}

impl ComprehendClient {
    pub fn new(config: ComprehendConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Detects the sentiment of `text`.
    pub async fn detect_sentiment(&self, text: &str) -> Result<SentimentResponse, SentimentError> {
        let url = Url::parse(&format!("{}/", self.config.endpoint))
            .map_err(|e| SentimentError::Signing(format!("invalid endpoint: {}", e)))?;
        let host = match (url.host_str(), url.port()) {
            (Some(host), Some(port)) => format!("{}:{}", host, port),
            (Some(host), None) => host.to_string(),
            (None, _) => {
                return Err(SentimentError::Signing(format!(
                    "endpoint '{}' has no host",
                    self.config.endpoint
                )));
            }
        };

        let payload = serde_json::to_vec(&DetectSentimentRequest {
            text,
            language_code: &self.config.language_code,
        })
        .map_err(|e| SentimentError::Signing(e.to_string()))?;

        let signed = sigv4::sign(
            &sigv4::SigningParams {
                method: "POST",
                host: &host,
                path: url.path(),
                region: &self.config.region,
                service: SERVICE,
                headers: &[("content-type", CONTENT_TYPE), ("x-amz-target", TARGET)],
                payload: &payload,
                timestamp: Utc::now(),
            },
            &self.config.credentials,
        )?;

        let mut request = self
            .http
            .post(url)
            .header("content-type", CONTENT_TYPE)
            .header("x-amz-target", TARGET)
            .header("x-amz-date", &signed.amz_date)
            .header("authorization", &signed.authorization)
            .body(payload);
        if let Some(token) = &signed.security_token {
            request = request.header("x-amz-security-token", token);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        if status != 200 {
            let body = response.text().await.unwrap_or_default();
            return Err(SentimentError::Service { status, body });
        }

        let json = response.json::<DetectSentimentResponse>().await?;
        tracing::info!(sentiment = %json.sentiment, "sentiment detected");

        Ok(SentimentResponse {
            sentiment: json.sentiment,
            scores: json.sentiment_score.into(),
        })
    }
}
