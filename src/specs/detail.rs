// src/specs/detail.rs
//! Deputy detail page (`/dyn/deputes/PA<id>`).
//!
//! Each field is looked up on its own; a missing node only blanks that field.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};
use tracing::{debug, error, warn};

use crate::config::consts::{BASE_URL, DETAIL_PATH};
use crate::config::options::FetchParams;
use crate::core::html::{first_text, select_first, text_of};
use crate::core::net::{Fetcher, Transport};
use crate::core::sanitize::non_empty;
use crate::data::{DeputyRecord, DeputyRef};

static FICHE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/deputes/fiche/OMC_PA(\d+)").expect("fiche id regex"));

static MAILTO: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"a[href^="mailto:"]"#).expect("mailto selector"));
static GROUP_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a.h4._colored.link").expect("group selector"));
// The site renders this container either with one dotted class token or with
// two space-separated tokens.
static CIRC_DOTTED: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"div[class~="_mb-small._centered-text"]"#).expect("dotted selector"));
static CIRC_SPACED: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div._mb-small._centered-text").expect("spaced selector"));
static BIG: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span._big").expect("span selector"));

/// `…/deputes/fiche/OMC_PA1234` → `PA1234`.
pub fn deputy_id(url: &str) -> Option<String> {
    FICHE_ID.captures(url).map(|c| join!("PA", &c[1]))
}

pub fn detail_url(id: &str) -> String {
    join!(BASE_URL, DETAIL_PATH, id)
}

/// Fetch and read one deputy's detail page. Always returns a record; anything
/// that goes wrong leaves the optional fields `None`.
pub fn extract<T: Transport>(fetcher: &Fetcher<T>, reference: &DeputyRef, params: &FetchParams) -> DeputyRecord {
    let Some(id) = deputy_id(&reference.url) else {
        warn!(url = %reference.url, "no OMC_PA id in deputy url");
        return DeputyRecord::bare(reference);
    };

    let url = detail_url(&id);
    let Some(doc) = fetcher.fetch(&url, params).into_body() else {
        error!(name = %reference.name, url = %url, "could not fetch detail page");
        return DeputyRecord::bare(reference);
    };

    parse_detail(reference, &doc)
}

/// Read the detail fields out of an already fetched page.
pub fn parse_detail(reference: &DeputyRef, doc: &str) -> DeputyRecord {
    let html = Html::parse_document(doc);

    let record = DeputyRecord {
        email: email(&html),
        political_group: political_group(&html),
        constituency: constituency(&html),
        ..DeputyRecord::bare(reference)
    };
    debug!(
        name = %record.name,
        email = ?record.email,
        group = ?record.political_group,
        constituency = ?record.constituency,
        "detail parsed"
    );
    record
}

/// Address of the first `mailto:` link.
pub fn email(doc: &Html) -> Option<String> {
    let href = select_first(doc, &MAILTO)?.value().attr("href")?;
    non_empty(href.replace("mailto:", "").trim().to_string())
}

/// Parliamentary group, shown as a coloured heading link.
pub fn political_group(doc: &Html) -> Option<String> {
    select_first(doc, &GROUP_LINK).map(text_of).and_then(non_empty)
}

/// Constituency label in `span._big`. The first container found (dotted
/// spelling first) is the only one searched for the span.
pub fn constituency(doc: &Html) -> Option<String> {
    let container = [&*CIRC_DOTTED, &*CIRC_SPACED]
        .into_iter()
        .find_map(|sel| select_first(doc, sel))?;
    first_text(container, &BIG)
}
