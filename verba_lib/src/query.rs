//! Caller-supplied crawl filters and mode selection.

use std::str::FromStr;

/// Restricts the crawl to a subset of the discovered domain.
///
/// An empty dimension means "everything the domain offers". Values are
/// matched against domain values by exact string equality, so numeric
/// years and months are normalized to strings on the way in.
#[derive(Debug, Clone, Default)]
pub struct QueryFilter {
    pub years: Vec<String>,
    pub months: Vec<String>,
    pub politicians: Vec<String>,
}

impl QueryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the crawl to one more year. Accepts numbers or strings.
    pub fn with_year(mut self, year: impl ToString) -> Self {
        self.years.push(year.to_string());
        self
    }

    /// Restricts the crawl to the given years.
    pub fn with_years<I, T>(mut self, years: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        self.years.extend(years.into_iter().map(|y| y.to_string()));
        self
    }

    /// Restricts the crawl to one more month. Accepts numbers or strings.
    pub fn with_month(mut self, month: impl ToString) -> Self {
        self.months.push(month.to_string());
        self
    }

    /// Restricts the crawl to the given months.
    pub fn with_months<I, T>(mut self, months: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        self.months.extend(months.into_iter().map(|m| m.to_string()));
        self
    }

    /// Restricts the crawl to one more politician, by exact form value.
    pub fn with_politician(mut self, politician: impl Into<String>) -> Self {
        self.politicians.push(politician.into());
        self
    }

    /// Restricts the crawl to the given politicians.
    pub fn with_politicians<I, T>(mut self, politicians: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.politicians
            .extend(politicians.into_iter().map(|p| p.into()));
        self
    }
}

/// How the engine queries each (year, month) cell of the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrawlMode {
    /// One request per (year, month), with the politician field left
    /// empty so the server returns every politician's reports on one
    /// page. This is the default and by far the cheaper mode.
    #[default]
    Aggregate,
    /// One request per (year, month, politician). Substantially slower;
    /// one request per cell of the full cross-product.
    PerPolitician,
}

impl FromStr for CrawlMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aggregate" => Ok(CrawlMode::Aggregate),
            "per-politician" => Ok(CrawlMode::PerPolitician),
            other => Err(format!(
                "unknown mode {:?}, expected \"aggregate\" or \"per-politician\"",
                other
            )),
        }
    }
}
