//! The nested result accumulator.

use indexmap::IndexMap;
use serde::Serialize;

/// One extracted report row: a human-readable description and the link to
/// the actual report document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub description: String,
    pub link: String,
}

/// Reports grouped by politician for one (year, month).
pub type PoliticianReports = IndexMap<String, Vec<ReportEntry>>;

/// The year → month → politician → reports accumulator.
///
/// Keys are created lazily, in insertion order, and never removed.
/// Re-recording an existing path appends, de-duplicating by `link`, so
/// re-running a combination cannot duplicate entries. Serializes as the
/// bare nested mapping with keys in insertion order.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct ResultTree {
    years: IndexMap<String, IndexMap<String, PoliticianReports>>,
}

impl ResultTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates-or-returns the month map for a year. Keeps a year visible
    /// in the output even when it offers no months to crawl.
    pub fn ensure_year(&mut self, year: &str) -> &mut IndexMap<String, PoliticianReports> {
        self.years.entry(year.to_string()).or_default()
    }

    /// Creates-or-returns the politician map at (year, month).
    pub fn ensure_month(&mut self, year: &str, month: &str) -> &mut PoliticianReports {
        self.ensure_year(year).entry(month.to_string()).or_default()
    }

    /// Creates-or-returns the report list at (year, month, politician),
    /// creating intermediate maps as needed.
    pub fn ensure_path(
        &mut self,
        year: &str,
        month: &str,
        politician: &str,
    ) -> &mut Vec<ReportEntry> {
        self.ensure_month(year, month)
            .entry(politician.to_string())
            .or_default()
    }

    /// Appends `entries` at (year, month, politician), skipping entries
    /// whose link is already recorded at that path.
    pub fn record(&mut self, year: &str, month: &str, politician: &str, entries: Vec<ReportEntry>) {
        let list = self.ensure_path(year, month, politician);
        for entry in entries {
            if !list.iter().any(|existing| existing.link == entry.link) {
                list.push(entry);
            }
        }
    }

    /// Year keys, in insertion order.
    pub fn years(&self) -> impl Iterator<Item = &str> {
        self.years.keys().map(String::as_str)
    }

    /// The politician map at (year, month), if that combination was crawled.
    pub fn reports(&self, year: &str, month: &str) -> Option<&PoliticianReports> {
        self.years.get(year)?.get(month)
    }

    /// The report list at (year, month, politician).
    pub fn entries(&self, year: &str, month: &str, politician: &str) -> Option<&[ReportEntry]> {
        Some(self.reports(year, month)?.get(politician)?.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Total number of report entries across the whole tree.
    pub fn entry_count(&self) -> usize {
        self.years
            .values()
            .flat_map(|months| months.values())
            .flat_map(|politicians| politicians.values())
            .map(Vec::len)
            .sum()
    }

    /// Serializes the tree as pretty-printed JSON, keys in insertion order.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
