use std::io::BufRead;

use crate::{error::FlowError, gateway::GatewayClient, types::SentimentResponse};

use super::{read_line, spinner};

/// Reads a line of text and asks the gateway for its sentiment.
pub async fn text_sentiment<R: BufRead>(
    gateway: &GatewayClient,
    input: &mut R,
) -> Result<SentimentResponse, FlowError> {
    let text = read_line(input, "Input text>")?;

    let pb = spinner("Analyzing text...");
    let result = gateway.analyze(&text).await;
    pb.finish_and_clear();

    Ok(result?)
}
