// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.assemblee-nationale.fr";
pub const LISTING_URL: &str = "https://www2.assemblee-nationale.fr/deputes/liste/regions";
pub const DETAIL_PATH: &str = "/dyn/deputes/";
pub const FICHE_PREFIX: &str = "/deputes/fiche/";
pub const USER_AGENT: &str = concat!("deputes_scrape/", env!("CARGO_PKG_VERSION"));

// Listing markup
pub const DEPARTMENT_CLASS: &str = "departementTitre";

// Fetch defaults
pub const DEFAULT_RETRIES: u32 = 3;
pub const DEFAULT_DELAY_SECS: f64 = 0.0;
pub const DEFAULT_TIMEOUT_SECS: f64 = 10.0;

// Concurrency
pub const DEFAULT_WORKERS: usize = 1; // 1 = sequential

// Output
pub const SEPARATOR_WIDTH: usize = 40;
pub const TABLE_TITLE: &str = "=== TABLEAU RÉCAPITULATIF ===";
pub const EMPTY_TABLE: &str = "[INFO] Aucune donnée disponible pour générer un tableau.";
