// src/cli.rs
use std::path::PathBuf;

use clap::Parser;
use tracing::debug;

use crate::config::consts::{DEFAULT_DELAY_SECS, DEFAULT_RETRIES, DEFAULT_TIMEOUT_SECS, DEFAULT_WORKERS};
use crate::config::options::{parse_fields, AppOptions, FetchParams, OutputOptions, ScrapeOptions};
use crate::config::regions::VALID_REGIONS;
use crate::core::net::Fetcher;
use crate::data::Field;
use crate::error::ConfigError;
use crate::{file, log, render, scrape};

/// Scrape French deputies (name, region, email, group, constituency) from the
/// Assemblée nationale website.
#[derive(Debug, Parser)]
#[command(name = "deputes", version)]
pub struct Args {
    /// Print the valid region names and exit.
    #[arg(long)]
    pub list_regions: bool,

    /// Regions to scrape (e.g. 'Ile-de-France' 'Bretagne'), case-insensitive.
    /// Defaults to Ile-de-France and Provence-Alpes-Côte d'Azur.
    #[arg(long, num_args = 1..)]
    pub region: Vec<String>,

    /// Worker threads for the detail pages (1 = sequential).
    #[arg(long, default_value_t = DEFAULT_WORKERS)]
    pub threads: usize,

    /// Write the results to this file instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Verbose traces on stderr.
    #[arg(long)]
    pub debug: bool,

    /// Attempts per request.
    #[arg(long, default_value_t = DEFAULT_RETRIES)]
    pub retries: u32,

    /// Seconds to wait between failed attempts.
    #[arg(long, default_value_t = DEFAULT_DELAY_SECS)]
    pub delay: f64,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: f64,

    /// Comma-separated fields: nom,region,email,groupe,circonscription.
    #[arg(long)]
    pub fields: Option<String>,

    /// Append an ASCII summary table.
    #[arg(long)]
    pub table: bool,

    /// Print values only, without labels.
    #[arg(long)]
    pub barefields: bool,

    /// With --barefields and a single field, drop the dashed separator.
    #[arg(long)]
    pub no_separator: bool,
}

impl Args {
    /// Validate everything before the first request goes out.
    pub fn to_options(&self) -> Result<AppOptions, ConfigError> {
        let fetch = FetchParams::new(self.retries, self.delay, self.timeout)?;
        let scrape = ScrapeOptions::new(&self.region, self.threads, fetch)?;
        let fields = match &self.fields {
            Some(list) => parse_fields(list)?,
            None => Field::ALL.to_vec(),
        };
        let output = OutputOptions {
            fields,
            table: self.table,
            barefields: self.barefields,
            no_separator: self.no_separator,
            out: self.output.clone(),
        };
        Ok(AppOptions { scrape, output })
    }
}

pub fn region_list() -> String {
    join!("🌍 Régions valides :\n  - ", &VALID_REGIONS.join("\n  - "))
}

pub fn run() -> color_eyre::Result<()> {
    let args = Args::parse();

    if args.list_regions {
        println!("{}", region_list());
        return Ok(());
    }

    log::init(args.debug);
    let opts = args.to_options()?;
    debug!(?opts, "options");

    let fetcher = Fetcher::http()?;
    let records = scrape::run(&fetcher, &opts.scrape, None);
    debug!(count = records.len(), "records collected");

    let report = render::render(&records, &opts.output);
    file::write_output(opts.output.out.as_deref(), &report)?;
    Ok(())
}
