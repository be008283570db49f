//! Stateful facade driving the discover → crawl → output lifecycle.

use std::path::Path;

use verba_api::Client;

use crate::config::PortalConfig;
use crate::crawl;
use crate::domain::{self, Domain};
use crate::error::CrawlError;
use crate::query::{CrawlMode, QueryFilter};
use crate::tree::ResultTree;

/// Owns the client, the portal configuration, and the crawl state.
///
/// Operations must run in lifecycle order: [`discover`](Self::discover)
/// before [`crawl`](Self::crawl), and a completed crawl before
/// [`result`](Self::result) or [`save_json`](Self::save_json). Violations
/// surface as [`CrawlError::Precondition`].
pub struct PortalScraper {
    client: Client,
    config: PortalConfig,
    domain: Option<Domain>,
    result: Option<ResultTree>,
}

impl PortalScraper {
    /// Creates a scraper for the portal at `base_url` with the default
    /// portal configuration.
    pub fn new(base_url: &str) -> Self {
        Self::with_config(Client::new(base_url), PortalConfig::default())
    }

    /// Creates a scraper with a custom client and configuration.
    pub fn with_config(client: Client, config: PortalConfig) -> Self {
        Self {
            client,
            config,
            domain: None,
            result: None,
        }
    }

    /// Discovers the valid parameter domain from the portal form.
    /// Re-running discovery re-fetches everything and clears any
    /// previous crawl result.
    pub async fn discover(&mut self) -> Result<&Domain, CrawlError> {
        let domain = domain::discover(&self.client, &self.config).await?;
        self.result = None;
        Ok(&*self.domain.insert(domain))
    }

    /// The discovered domain, if discovery has run.
    pub fn domain(&self) -> Option<&Domain> {
        self.domain.as_ref()
    }

    /// Crawls the filtered cross-product of the discovered domain.
    pub async fn crawl(&mut self, filter: &QueryFilter, mode: CrawlMode) -> Result<(), CrawlError> {
        let domain = self
            .domain
            .as_ref()
            .ok_or(CrawlError::Precondition("crawl invoked before discovery"))?;

        let tree = crawl::crawl(&self.client, &self.config, domain, filter, mode).await;
        self.result = Some(tree);
        Ok(())
    }

    /// The finalized result tree. Read-only; only available once a crawl
    /// has completed.
    pub fn result(&self) -> Result<&ResultTree, CrawlError> {
        self.result.as_ref().ok_or(CrawlError::Precondition(
            "result requested before crawl completion",
        ))
    }

    /// The finalized result as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CrawlError> {
        Ok(self.result()?.to_json()?)
    }

    /// Writes the finalized result as UTF-8 JSON to `path`.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), CrawlError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
