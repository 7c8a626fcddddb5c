// src/error.rs
use thiserror::Error;

/// One failed GET attempt. Retried by `core::net::Fetcher`, never surfaced
/// past the fetch boundary.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status}")]
    Status { status: u16 },
}

/// Bad user-supplied options. Raised before any fetch is attempted.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("the number of threads must be at least 1")]
    NoWorkers,

    #[error("the number of retries must be at least 1")]
    NoAttempts,

    #[error("invalid duration for --{flag}: {value} (expected a non-negative number of seconds)")]
    InvalidSeconds { flag: &'static str, value: f64 },

    #[error("invalid regions: {}", .0.join(", "))]
    UnknownRegions(Vec<String>),

    #[error("unknown field: {0} (expected one of nom, region, email, groupe, circonscription)")]
    UnknownField(String),

    #[error("no output field selected")]
    NoFields,
}
