//! AWS Signature Version 4 for JSON requests.
//!
//! Only what a single-shot `POST /` needs: no query string, a small set of
//! signed headers and a fully buffered payload.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::{config::AwsCredentials, error::SentimentError};

const ALGORITHM: &str = "AWS4-HMAC-SHA256";

type HmacSha256 = Hmac<Sha256>;

/// Everything that goes into one signature.
#[derive(Debug, Clone)]
pub struct SigningParams<'a> {
    pub method: &'a str,
    pub host: &'a str,
    pub path: &'a str,
    pub region: &'a str,
    pub service: &'a str,
    /// Extra headers to sign besides `host`, `x-amz-date` and the session
    /// token.
    pub headers: &'a [(&'a str, &'a str)],
    pub payload: &'a [u8],
    pub timestamp: DateTime<Utc>,
}

/// Headers to attach to the signed request.
#[derive(Debug, Clone, PartialEq)]
pub struct SignedHeaders {
    pub amz_date: String,
    pub authorization: String,
    pub security_token: Option<String>,
}

pub fn amz_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y%m%dT%H%M%SZ").to_string()
}

pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<Vec<u8>, SentimentError> {
    let mut mac =
        HmacSha256::new_from_slice(key).map_err(|e| SentimentError::Signing(e.to_string()))?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Returns the canonical request and the signed header list.
pub fn canonical_request(
    params: &SigningParams<'_>,
    credentials: &AwsCredentials,
) -> (String, String) {
    let amz_date = amz_date(&params.timestamp);

    let mut headers: Vec<(String, String)> = params
        .headers
        .iter()
        .map(|(name, value)| (name.to_lowercase(), value.trim().to_string()))
        .collect();
    headers.push(("host".to_string(), params.host.to_string()));
    headers.push(("x-amz-date".to_string(), amz_date));
    if let Some(token) = &credentials.session_token {
        headers.push(("x-amz-security-token".to_string(), token.clone()));
    }
    headers.sort();

    let canonical_headers: String = headers
        .iter()
        .map(|(name, value)| format!("{}:{}\n", name, value))
        .collect();
    let signed_headers = headers
        .iter()
        .map(|(name, _)| name.as_str())
        .collect::<Vec<_>>()
        .join(";");

    let request = format!(
        "{method}\n{path}\n\n{canonical_headers}\n{signed_headers}\n{payload_hash}",
        method = params.method,
        path = params.path,
        canonical_headers = canonical_headers,
        signed_headers = signed_headers,
        payload_hash = sha256_hex(params.payload),
    );

    (request, signed_headers)
}

/// Signs a request and returns the headers to send with it.
pub fn sign(
    params: &SigningParams<'_>,
    credentials: &AwsCredentials,
) -> Result<SignedHeaders, SentimentError> {
    let amz_date = amz_date(&params.timestamp);
    let date = params.timestamp.format("%Y%m%d").to_string();
    let scope = format!(
        "{}/{}/{}/aws4_request",
        date, params.region, params.service
    );

    let (request, signed_headers) = canonical_request(params, credentials);
    let string_to_sign = format!(
        "{}\n{}\n{}\n{}",
        ALGORITHM,
        amz_date,
        scope,
        sha256_hex(request.as_bytes())
    );

    let k_date = hmac_sha256(
        format!("AWS4{}", credentials.secret_access_key).as_bytes(),
        date.as_bytes(),
    )?;
    let k_region = hmac_sha256(&k_date, params.region.as_bytes())?;
    let k_service = hmac_sha256(&k_region, params.service.as_bytes())?;
    let k_signing = hmac_sha256(&k_service, b"aws4_request")?;
    let signature = hex::encode(hmac_sha256(&k_signing, string_to_sign.as_bytes())?);

    Ok(SignedHeaders {
        amz_date,
        authorization: format!(
            "{} Credential={}/{}, SignedHeaders={}, Signature={}",
            ALGORITHM, credentials.access_key_id, scope, signed_headers, signature
        ),
        security_token: credentials.session_token.clone(),
    })
}
