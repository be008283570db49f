//! The crawl matrix engine.
//!
//! Enumerates the filtered cross-product of the discovered domain and
//! issues one POST per combination, strictly sequentially. A failed
//! combination is logged and left as an empty entry; the crawl never
//! aborts on a single failure and never retries.

use verba_api::{Client, Error};

use crate::config::PortalConfig;
use crate::domain::Domain;
use crate::extract;
use crate::query::{CrawlMode, QueryFilter};
use crate::tree::ResultTree;

/// Crawls every effective (year, month[, politician]) combination and
/// returns the accumulated tree.
///
/// Every effective (year, month) pair ends up as a key in the tree even
/// when its request failed or its page held no reports; no key outside
/// the effective domain is ever created.
pub async fn crawl(
    client: &Client,
    config: &PortalConfig,
    domain: &Domain,
    filter: &QueryFilter,
    mode: CrawlMode,
) -> ResultTree {
    let mut tree = ResultTree::new();

    for year in effective(&domain.years, &filter.years) {
        // The year key must exist even when its scope is empty, e.g.
        // after a failed year-scope discovery.
        tree.ensure_year(year);

        let scope = domain.scope(year);
        let months = scope.map(|s| s.months.as_slice()).unwrap_or(&[]);

        for month in effective(months, &filter.months) {
            tree.ensure_month(year, month);

            match mode {
                CrawlMode::Aggregate => {
                    crawl_aggregate(client, config, &mut tree, filter, year, month).await;
                }
                CrawlMode::PerPolitician => {
                    let politicians = scope.map(|s| s.politicians.as_slice()).unwrap_or(&[]);
                    for politician in effective(politicians, &filter.politicians) {
                        crawl_politician(client, config, &mut tree, year, month, politician).await;
                    }
                }
            }
        }
    }

    tree
}

/// One request for all politicians of (year, month). Politician filters
/// are applied after extraction; the request already returned everyone.
async fn crawl_aggregate(
    client: &Client,
    config: &PortalConfig,
    tree: &mut ResultTree,
    filter: &QueryFilter,
    year: &str,
    month: &str,
) {
    tracing::info!(year, month, "fetching reports");
    match fetch_combination(client, config, year, month, None).await {
        Ok(html) => {
            for (politician, entries) in extract::grouped_entries(&html, config) {
                if !filter.politicians.is_empty() && !filter.politicians.contains(&politician) {
                    continue;
                }
                tree.record(year, month, &politician, entries);
            }
        }
        Err(e) => {
            tracing::warn!(year, month, error = %e, "combination failed, leaving empty entry");
        }
    }
}

/// One request for a single (year, month, politician) combination. The
/// path key exists afterwards even when the request failed.
async fn crawl_politician(
    client: &Client,
    config: &PortalConfig,
    tree: &mut ResultTree,
    year: &str,
    month: &str,
    politician: &str,
) {
    tracing::info!(year, month, politician, "fetching reports");
    tree.ensure_path(year, month, politician);

    match fetch_combination(client, config, year, month, Some(politician)).await {
        Ok(html) => {
            tree.record(year, month, politician, extract::flat_entries(&html, config));
        }
        Err(e) => {
            tracing::warn!(
                year, month, politician, error = %e,
                "combination failed, leaving empty entry"
            );
        }
    }
}

async fn fetch_combination(
    client: &Client,
    config: &PortalConfig,
    year: &str,
    month: &str,
    politician: Option<&str>,
) -> Result<String, Error> {
    let mut form = config.fixed_fields.clone();
    form.push((config.year_field.clone(), year.to_string()));
    form.push((config.month_field.clone(), month.to_string()));
    // An empty politician value is the server's convention for "all".
    form.push((
        config.politician_field.clone(),
        politician.unwrap_or("").to_string(),
    ));

    client.post_form(&config.form_path, &form).await
}

/// Intersects domain values with a filter, preserving domain order. An
/// empty filter selects the whole domain dimension.
fn effective<'a>(domain: &'a [String], filter: &[String]) -> Vec<&'a str> {
    domain
        .iter()
        .filter(|value| filter.is_empty() || filter.iter().any(|f| f == *value))
        .map(String::as_str)
        .collect()
}
