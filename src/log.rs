// src/log.rs
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is not set.
pub fn default_filter(debug: bool) -> &'static str {
    if debug { "deputes_scrape=debug,warn" } else { "warn" }
}

/// Install the global stderr subscriber. `RUST_LOG` overrides the `--debug`
/// default. Calling it twice is harmless (the second call is ignored).
pub fn init(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(debug)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
