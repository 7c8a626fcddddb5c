// src/core/html.rs
// Small helpers over `scraper` element handles. Site-specific selectors live
// in `specs`.

use scraper::{ElementRef, Html, Selector};

use super::sanitize::{non_empty, normalize_ws};

/// Visible text of an element: all descendant text nodes, whitespace-normalized.
pub fn text_of(el: ElementRef<'_>) -> String {
    let raw: String = el.text().collect();
    normalize_ws(&raw)
}

/// Visible text with only the surrounding whitespace removed. Inner runs are
/// kept as they appear in the page.
pub fn trimmed_text(el: ElementRef<'_>) -> String {
    let raw: String = el.text().collect();
    raw.trim().to_string()
}

/// Text of the first match, `None` when absent or blank.
pub fn first_text(root: ElementRef<'_>, sel: &Selector) -> Option<String> {
    root.select(sel).next().map(text_of).and_then(non_empty)
}

/// First element in the document matching `sel`.
pub fn select_first<'a>(doc: &'a Html, sel: &Selector) -> Option<ElementRef<'a>> {
    doc.select(sel).next()
}

/// True when the raw `class` attribute is exactly `class` (after trimming).
/// Unlike `.class` selectors, this does not match extra or reordered tokens.
pub fn has_exact_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value().attr("class").map(str::trim) == Some(class)
}

/// Element siblings following `el`, skipping text and comment nodes.
pub fn next_element_siblings<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    el.next_siblings().filter_map(ElementRef::wrap)
}
