//! Bounded retry for idempotent reads.
//!
//! Calls across the network can fail at random, so a read is repeated a few
//! times before giving up. A response whose status is on the terminal list is
//! returned at once, whether it is a success or an error the caller wants to
//! see. Other statuses are retried with a linear backoff (1 unit, then 2
//! units) for at most three attempts, after which the last response is
//! returned as is.
//!
//! A transport fault ends the call: it is logged and reported as `None`.

use std::{fmt::Display, future::Future, time::Duration};

use reqwest::{Client, Response};
use tokio::time::sleep;

/// Statuses accepted as a final answer from the peer.
pub const TERMINAL_STATUS_CODES: [u16; 6] = [200, 400, 480, 481, 482, 500];

pub const MAX_ATTEMPTS: u32 = 3;

/// Anything that carries an HTTP status code.
pub trait HasStatus {
    fn status_code(&self) -> u16;
}

impl HasStatus for Response {
    fn status_code(&self) -> u16 {
        self.status().as_u16()
    }
}

#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff_unit: Duration,
    pub terminal: &'static [u16],
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            backoff_unit: Duration::from_secs(1),
            terminal: &TERMINAL_STATUS_CODES,
        }
    }
}

impl RetryPolicy {
    pub fn is_terminal(&self, status: u16) -> bool {
        self.terminal.contains(&status)
    }

    /// Delay before the next attempt once `attempts` calls have been made.
    pub fn backoff(&self, attempts: u32) -> Duration {
        self.backoff_unit * attempts
    }
}

/// Drives `call` under `policy`.
///
/// Returns the first terminal response, or the last response once the
/// attempts are used up. Returns `None` if a call fails at the transport
/// level.
pub async fn call_with_retry<F, Fut, R, E>(policy: &RetryPolicy, target: &str, mut call: F) -> Option<R>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<R, E>>,
    R: HasStatus,
    E: Display,
{
    let mut attempts = 0;

    loop {
        let response = match call().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(url = target, error = %e, "remote call failed");
                return None;
            }
        };
        attempts += 1;

        let status = response.status_code();
        if policy.is_terminal(status) || attempts >= policy.max_attempts {
            return Some(response);
        }

        let delay = policy.backoff(attempts);
        tracing::debug!(url = target, status, attempts, ?delay, "retrying remote call");
        sleep(delay).await;
    }
}

/// GETs `url` with the default policy.
pub async fn web_service_get(client: &Client, url: &str) -> Option<Response> {
    call_with_retry(&RetryPolicy::default(), url, || client.get(url).send()).await
}
