//! Parsed HTML document with CSS-selector querying.
//!
//! `scraper::Html` is not `Send`, so a [`Document`] must never be held
//! across an `await` point. Callers parse, query, and drop it inside
//! synchronous code.

use scraper::{Html, Selector};

/// A parsed HTML page.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses an HTML string into a queryable document.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Returns the non-empty `value` attributes of all elements matching
    /// `css`, in document order. Empty values are dropped, which filters
    /// out placeholder "choose one" options in form selects.
    pub fn select_values(&self, css: &str) -> Vec<String> {
        let Some(selector) = parse_selector(css) else {
            return Vec::new();
        };
        self.html
            .select(&selector)
            .filter_map(|el| el.value().attr("value"))
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect()
    }
}

fn parse_selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(s) => Some(s),
        Err(e) => {
            tracing::warn!("invalid selector {:?}: {}", css, e);
            None
        }
    }
}
