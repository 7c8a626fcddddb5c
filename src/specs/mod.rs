//! # Page "specs"
//!
//! One module per remote page. Each knows *where the data lives in the HTML*
//! and how to read it tolerantly; none of them decide when to scrape, how to
//! schedule work or how to present results.
//!
//! - `listing`: `/deputes/liste/regions`, region → `{ name → fiche URL }`.
//! - `detail`: `/dyn/deputes/PA<id>`, one deputy's email, group, constituency.
//!
//! ## Conventions
//! - Parsing is pure (`parse_*` take the page body) and testable offline;
//!   the `index` / `extract` entry points only add the fetch.
//! - A markup change is an expected outcome: it yields `None` or an empty
//!   index, never an error.
//!
//! ```text
//! cli → scrape::run → specs::listing::index   (per region)
//!                   → specs::detail::extract  (per deputy, pooled)
//! ```
pub mod detail;
pub mod listing;
