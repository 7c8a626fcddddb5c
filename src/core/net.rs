// src/core/net.rs
//! Resilient GET: bounded attempts, fixed pause between failures, per-attempt
//! timeout. Failures are reported as data (`FetchOutcome::Failure`), never as
//! an `Err` to the caller.

use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use crate::config::consts::USER_AGENT;
use crate::config::options::FetchParams;
use crate::error::FetchError;

/// One GET, one attempt. Implementations must be shareable across worker threads.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str, timeout: Duration) -> Result<String, FetchError>;
}

/// Production transport over `reqwest`'s blocking client.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, timeout: Duration) -> Result<String, FetchError> {
        let resp = self.client.get(url).timeout(timeout).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { status: status.as_u16() });
        }
        Ok(resp.text()?)
    }
}

/// Result of one logical fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    Success { body: String, attempts: u32 },
    Failure { attempts: u32 },
}

impl FetchOutcome {
    pub fn attempts(&self) -> u32 {
        match self {
            FetchOutcome::Success { attempts, .. } | FetchOutcome::Failure { attempts } => *attempts,
        }
    }

    pub fn into_body(self) -> Option<String> {
        match self {
            FetchOutcome::Success { body, .. } => Some(body),
            FetchOutcome::Failure { .. } => None,
        }
    }
}

/// Retry wrapper around a [`Transport`].
#[derive(Clone, Debug)]
pub struct Fetcher<T = HttpTransport> {
    transport: T,
}

impl Fetcher<HttpTransport> {
    /// Fetcher over the default HTTP client.
    pub fn http() -> Result<Self, FetchError> {
        Ok(Self::new(HttpTransport::new()?))
    }
}

impl<T: Transport> Fetcher<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn fetch(&self, url: &str, params: &FetchParams) -> FetchOutcome {
        let max = params.max_attempts;

        for attempt in 1..=max {
            debug!(url, attempt, max, "fetching");

            match self.transport.get(url, params.timeout) {
                Ok(body) => return FetchOutcome::Success { body, attempts: attempt },
                Err(e) => {
                    debug!(url, attempt, error = %e, "attempt failed");
                    if attempt < max && !params.delay.is_zero() {
                        debug!(url, delay = ?params.delay, "sleeping before retry");
                        thread::sleep(params.delay);
                    }
                }
            }
        }

        warn!(url, attempts = max, "giving up");
        FetchOutcome::Failure { attempts: max }
    }
}
