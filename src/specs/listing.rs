// src/specs/listing.rs
//! Listing page: region → deputies.
//!
//! The page is one flat run of siblings:
//!
//! ```text
//! <h2>Bretagne</h2>
//! <h4 class="departementTitre">Côtes-d'Armor (22)</h4>
//! <div><ul><li><a href="/deputes/fiche/OMC_PA1">…</a></li>…</ul></div>
//! <h4 class="departementTitre">Finistère (29)</h4>
//! <div>…</div>
//! <h2>Centre-Val de Loire</h2>
//! …
//! ```
//!
//! The siblings after the region's `<h2>` are typed into [`Node`]s and fed to
//! [`walk`], a two-state machine (outside / inside a department).

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, error, trace, warn};

use crate::config::consts::{BASE_URL, DEPARTMENT_CLASS, FICHE_PREFIX, LISTING_URL};
use crate::config::options::FetchParams;
use crate::core::html::{has_exact_class, next_element_siblings, trimmed_text};
use crate::core::net::{Fetcher, Transport};
use crate::data::GroupIndex;

static H2: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h2").expect("h2 selector"));
static LI: LazyLock<Selector> = LazyLock::new(|| Selector::parse("li").expect("li selector"));
static LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").expect("link selector"));

/// One sibling of the region header, as far as the walk cares.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// `<h2>`: next region, ends the walk.
    Region(String),
    /// `<h4 class="departementTitre">`: opens a department.
    Department(String),
    /// Any other `<h4>`: closes the current department without opening one.
    Heading,
    /// `<div>` with the deputy links found in its `<li>`s, as `(name, url)`.
    Container(Vec<(String, String)>),
    Other,
}

/// Fetch the listing page and index the deputies of `region`.
/// Fetch failure and unknown region both give an empty index.
pub fn index<T: Transport>(fetcher: &Fetcher<T>, region: &str, params: &FetchParams) -> GroupIndex {
    debug!(region, "collecting deputies");

    let Some(doc) = fetcher.fetch(LISTING_URL, params).into_body() else {
        error!(url = LISTING_URL, region, "could not fetch listing page");
        return GroupIndex::new();
    };

    let found = parse_listing(&doc, region);
    debug!(region, count = found.len(), names = ?found.keys().collect::<Vec<_>>(), "deputies found");
    found
}

/// Index `region` in an already fetched listing page.
pub fn parse_listing(doc: &str, region: &str) -> GroupIndex {
    let html = Html::parse_document(doc);

    let Some(header) = html.select(&H2).find(|h| trimmed_text(*h) == region) else {
        warn!(region, "no <h2> header for region");
        return GroupIndex::new();
    };

    walk(next_element_siblings(header).map(classify))
}

/// Run the department state machine over typed siblings. Names seen twice keep
/// the last URL.
pub fn walk<I>(nodes: I) -> GroupIndex
where
    I: IntoIterator<Item = Node>,
{
    let mut found = GroupIndex::new();
    let mut in_department = false;

    for node in nodes {
        match node {
            Node::Region(next) => {
                trace!(next = %next, "region boundary");
                break;
            }
            Node::Department(name) => {
                trace!(department = %name, "department");
                in_department = true;
            }
            Node::Heading => in_department = false,
            Node::Container(links) if in_department => {
                for (name, url) in links {
                    found.insert(name, url);
                }
            }
            Node::Container(_) | Node::Other => {}
        }
    }
    found
}

pub fn classify(el: ElementRef<'_>) -> Node {
    match el.value().name() {
        "h2" => Node::Region(trimmed_text(el)),
        "h4" if has_exact_class(el, DEPARTMENT_CLASS) => Node::Department(trimmed_text(el)),
        "h4" => Node::Heading,
        "div" => Node::Container(deputy_links(el)),
        _ => Node::Other,
    }
}

/// For each `<li>`, its first link if it points at a deputy page.
fn deputy_links(container: ElementRef<'_>) -> Vec<(String, String)> {
    container
        .select(&LI)
        .filter_map(|li| li.select(&LINK).next())
        .filter_map(|a| {
            let href = a.value().attr("href")?;
            href.starts_with(FICHE_PREFIX)
                .then(|| (trimmed_text(a), join!(BASE_URL, href)))
        })
        .collect()
}
