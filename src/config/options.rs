// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;
use super::regions::{normalize_region, DEFAULT_REGIONS};
use crate::data::Field;
use crate::error::ConfigError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub output: OutputOptions,
}

/// Retry policy for one logical GET. Shared by the listing and detail fetches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchParams {
    pub max_attempts: u32,
    pub delay: Duration,   // between a failed attempt and the next one
    pub timeout: Duration, // per attempt
}

impl Default for FetchParams {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_RETRIES,
            delay: Duration::from_secs_f64(DEFAULT_DELAY_SECS),
            timeout: Duration::from_secs_f64(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl FetchParams {
    /// Build from raw CLI numbers. Delay may be zero, timeout may not.
    pub fn new(retries: u32, delay_secs: f64, timeout_secs: f64) -> Result<Self, ConfigError> {
        if retries == 0 {
            return Err(ConfigError::NoAttempts);
        }
        let delay = Duration::try_from_secs_f64(delay_secs)
            .map_err(|_| ConfigError::InvalidSeconds { flag: "delay", value: delay_secs })?;
        let timeout = Duration::try_from_secs_f64(timeout_secs)
            .ok()
            .filter(|t| !t.is_zero())
            .ok_or(ConfigError::InvalidSeconds { flag: "timeout", value: timeout_secs })?;

        Ok(Self { max_attempts: retries, delay, timeout })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrapeOptions {
    pub regions: Vec<String>, // canonical spellings
    pub workers: usize,       // 1 = sequential
    pub fetch: FetchParams,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            regions: DEFAULT_REGIONS.iter().map(|r| s!(*r)).collect(),
            workers: DEFAULT_WORKERS,
            fetch: FetchParams::default(),
        }
    }
}

impl ScrapeOptions {
    /// Validate user input. An empty region list selects the defaults; every
    /// unknown region is reported at once.
    pub fn new(regions: &[String], workers: usize, fetch: FetchParams) -> Result<Self, ConfigError> {
        if workers < 1 {
            return Err(ConfigError::NoWorkers);
        }

        let regions = if regions.is_empty() {
            DEFAULT_REGIONS.iter().map(|r| s!(*r)).collect()
        } else {
            let invalid: Vec<String> = regions
                .iter()
                .filter(|r| normalize_region(r).is_none())
                .cloned()
                .collect();
            if !invalid.is_empty() {
                return Err(ConfigError::UnknownRegions(invalid));
            }
            regions
                .iter()
                .filter_map(|r| normalize_region(r))
                .map(String::from)
                .collect()
        };

        Ok(Self { regions, workers, fetch })
    }

    /// More than one worker switches the detail fetches to the thread pool.
    pub fn concurrent(&self) -> bool {
        self.workers > 1
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputOptions {
    pub fields: Vec<Field>,
    pub table: bool,        // append the ASCII summary table
    pub barefields: bool,   // values without "Label: "
    pub no_separator: bool, // only honoured with barefields + a single field
    pub out: Option<PathBuf>,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            fields: Field::ALL.to_vec(),
            table: false,
            barefields: false,
            no_separator: false,
            out: None,
        }
    }
}

impl OutputOptions {
    /// Drop the dashed line between records?
    pub fn skip_separators(&self) -> bool {
        self.barefields && self.fields.len() == 1 && self.no_separator
    }
}

/// Parse `--fields nom,email`. Order is kept, entries are trimmed.
pub fn parse_fields(list: &str) -> Result<Vec<Field>, ConfigError> {
    let fields = list
        .split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(|f| f.parse::<Field>())
        .collect::<Result<Vec<_>, _>>()?;

    if fields.is_empty() {
        return Err(ConfigError::NoFields);
    }
    Ok(fields)
}
