//! Extraction of report rows from result pages.
//!
//! Parsing happens on owned HTML strings inside synchronous functions:
//! `scraper::Html` is not `Send` and must never cross an `await`.

use scraper::{ElementRef, Html, Selector};

use crate::config::PortalConfig;
use crate::tree::ReportEntry;

/// All report links on the page, regardless of grouping. Used for
/// per-politician responses, where the whole page belongs to the single
/// politician that was posted.
pub(crate) fn flat_entries(html: &str, config: &PortalConfig) -> Vec<ReportEntry> {
    let Some(links) = selector(&config.report_links) else {
        return Vec::new();
    };
    let doc = Html::parse_document(html);
    doc.select(&links).filter_map(entry_from_anchor).collect()
}

/// Report links grouped by the politician heading that precedes each
/// result table. Used for all-politicians responses.
///
/// A heading without a following table still yields the politician with
/// an empty list, matching the page layout for members with no reports
/// that month.
pub(crate) fn grouped_entries(html: &str, config: &PortalConfig) -> Vec<(String, Vec<ReportEntry>)> {
    let (Some(headings), Some(links)) = (
        selector(&config.politician_heading),
        selector(&config.report_links),
    ) else {
        return Vec::new();
    };

    let doc = Html::parse_document(html);
    let mut groups = Vec::new();

    for heading in doc.select(&headings) {
        let name = element_text(heading);
        if name.is_empty() {
            continue;
        }

        let mut entries = Vec::new();
        if let Some(table) = next_sibling_table(heading, &headings) {
            entries.extend(table.select(&links).filter_map(entry_from_anchor));
        }
        groups.push((name, entries));
    }

    groups
}

/// The report table following a politician heading. The scan stops at the
/// next heading so a politician without a table cannot claim a later
/// politician's reports.
fn next_sibling_table<'a>(heading: ElementRef<'a>, headings: &Selector) -> Option<ElementRef<'a>> {
    heading
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .take_while(|el| !headings.matches(el))
        .find(|el| el.value().name() == "table")
}

/// Builds an entry from a report anchor. Anchors without an `href` carry
/// nothing to crawl and are dropped; an empty description is kept.
fn entry_from_anchor(anchor: ElementRef) -> Option<ReportEntry> {
    let link = anchor.value().attr("href")?.trim().to_string();
    if link.is_empty() {
        return None;
    }
    Some(ReportEntry {
        description: element_text(anchor),
        link,
    })
}

fn element_text(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

fn selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(s) => Some(s),
        Err(e) => {
            tracing::warn!("invalid selector {:?}: {}", css, e);
            None
        }
    }
}
