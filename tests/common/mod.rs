// tests/common/mod.rs
//
// Offline site stub shared by the integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use deputes_scrape::config::consts::{BASE_URL, LISTING_URL};
use deputes_scrape::config::options::FetchParams;
use deputes_scrape::core::net::Transport;
use deputes_scrape::error::FetchError;

/// Serves canned bodies by exact URL; unknown URLs answer 404.
/// Every request is counted.
#[derive(Default)]
pub struct Site {
    pages: HashMap<String, Result<String, u16>>,
    hits: Mutex<HashMap<String, u32>>,
}

impl Site {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), Ok(body.to_string()));
        self
    }

    pub fn broken(mut self, url: &str, status: u16) -> Self {
        self.pages.insert(url.to_string(), Err(status));
        self
    }

    pub fn listing(self, body: &str) -> Self {
        self.page(LISTING_URL, body)
    }

    pub fn detail(self, id: u32, body: &str) -> Self {
        let url = format!("{BASE_URL}/dyn/deputes/PA{id}");
        self.page(&url, body)
    }

    pub fn hits(&self, url: &str) -> u32 {
        self.hits.lock().unwrap().get(url).copied().unwrap_or(0)
    }

    pub fn total_hits(&self) -> u32 {
        self.hits.lock().unwrap().values().sum()
    }
}

impl Transport for Site {
    fn get(&self, url: &str, _timeout: Duration) -> Result<String, FetchError> {
        *self.hits.lock().unwrap().entry(url.to_string()).or_insert(0) += 1;
        match self.pages.get(url) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(status)) => Err(FetchError::Status { status: *status }),
            None => Err(FetchError::Status { status: 404 }),
        }
    }
}

pub fn params(max_attempts: u32) -> FetchParams {
    FetchParams {
        max_attempts,
        delay: Duration::ZERO,
        timeout: Duration::from_secs(1),
    }
}

pub fn fiche(id: u32) -> String {
    format!("{BASE_URL}/deputes/fiche/OMC_PA{id}")
}

/// Listing page in the site's layout: two regions, Bretagne with two departments.
pub const LISTING: &str = r#"<!DOCTYPE html>
<html><body>
<div id="content">
  <h1>Liste des députés par région</h1>
  <h2>Auvergne-Rhône-Alpes</h2>
  <h4 class="departementTitre">Ain (01)</h4>
  <div class="clearfix"><ul>
    <li><a href="/deputes/fiche/OMC_PA100">M. Xavier Breton</a> (1re circonscription)</li>
  </ul></div>
  <h2>
    Bretagne
  </h2>
  <p class="intro">Députés élus en Bretagne</p>
  <h4 class="departementTitre">Côtes-d'Armor (22)</h4>
  <div class="clearfix"><ul>
    <li><a href="/deputes/fiche/OMC_PA1">Mme Anne Dupont</a> (1re circonscription)</li>
    <li><a href="/deputes/fiche/OMC_PA2">M. Paul Le Goff</a> (2e circonscription)</li>
    <li><a href="/carte">Voir la carte</a></li>
  </ul></div>
  <h4 class="departementTitre">Finistère (29)</h4>
  <div class="clearfix"><ul>
    <li><a href="/deputes/fiche/OMC_PA3">Mme Marie   Kerouac</a></li>
  </ul></div>
  <div class="clearfix"><ul>
    <li><a href="/deputes/fiche/OMC_PA4">M. Yann Morvan</a></li>
  </ul></div>
  <h2>Centre-Val de Loire</h2>
  <h4 class="departementTitre">Cher (18)</h4>
  <div class="clearfix"><ul>
    <li><a href="/deputes/fiche/OMC_PA200">M. Loic Kervran</a></li>
  </ul></div>
</div>
</body></html>"#;

pub fn detail_page(email: Option<&str>, group: Option<&str>, constituency: Option<&str>) -> String {
    let mut html = String::from("<html><body><div class=\"_main\">");
    if let Some(g) = group {
        html.push_str(&format!(r#"<a class="h4 _colored link" href="/groupe">{g}</a>"#));
    }
    if let Some(c) = constituency {
        html.push_str(&format!(
            r#"<div class="_mb-small _centered-text"><span class="_big">{c}</span></div>"#
        ));
    }
    if let Some(e) = email {
        html.push_str(&format!(r#"<ul><li><a href="mailto:{e}">Courriel</a></li></ul>"#));
    }
    html.push_str("</div></body></html>");
    html
}
