//! Discovery of the valid query-parameter domain from the portal form.

use indexmap::IndexMap;
use verba_api::{Client, Document, Error};

use crate::config::PortalConfig;
use crate::error::CrawlError;

/// Months and politicians valid for one year. Politician rosters are
/// year-scoped because legislative composition changes across terms.
#[derive(Debug, Clone, Default)]
pub struct YearScope {
    pub months: Vec<String>,
    pub politicians: Vec<String>,
}

/// The discovered universe of valid query parameters.
#[derive(Debug, Clone, Default)]
pub struct Domain {
    /// Year tokens in the order the form offers them.
    pub years: Vec<String>,
    /// Per-year scopes, keyed by year token.
    pub scopes: IndexMap<String, YearScope>,
}

impl Domain {
    pub fn scope(&self, year: &str) -> Option<&YearScope> {
        self.scopes.get(year)
    }
}

/// Builds the [`Domain`] from the portal form.
///
/// Fetches the landing page for the year options, then posts each year
/// back to obtain that year's months and politicians. A failed year-scope
/// request is downgraded to an empty scope with a warning; a failed
/// landing-page fetch is fatal. Nothing is cached: calling this again
/// re-fetches everything.
pub async fn discover(client: &Client, config: &PortalConfig) -> Result<Domain, CrawlError> {
    let html = client.get(&config.form_path).await?;
    let years = {
        let doc = Document::parse(&html);
        doc.select_values(&config.year_options)
    };
    if years.is_empty() {
        return Err(CrawlError::EmptyDomain);
    }
    tracing::info!("discovered {} years", years.len());

    let mut scopes = IndexMap::new();
    for year in &years {
        let scope = match year_scope(client, config, year).await {
            Ok(scope) => {
                tracing::debug!(
                    %year,
                    months = scope.months.len(),
                    politicians = scope.politicians.len(),
                    "year scope discovered"
                );
                scope
            }
            Err(e) => {
                tracing::warn!(%year, error = %e, "year scope discovery failed, using empty scope");
                YearScope::default()
            }
        };
        scopes.insert(year.clone(), scope);
    }

    Ok(Domain { years, scopes })
}

async fn year_scope(
    client: &Client,
    config: &PortalConfig,
    year: &str,
) -> Result<YearScope, Error> {
    let mut form = config.fixed_fields.clone();
    form.push((config.year_field.clone(), year.to_string()));

    let html = client.post_form(&config.form_path, &form).await?;
    let doc = Document::parse(&html);
    Ok(YearScope {
        months: doc.select_values(&config.month_options),
        politicians: doc.select_values(&config.politician_options),
    })
}
