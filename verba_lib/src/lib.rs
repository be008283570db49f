//! Crawler for the indemnity-allowance page of a legislative transparency
//! portal.
//!
//! The portal exposes its data behind an HTML form that must be POSTed
//! once per (year, month) or (year, month, politician) combination. This
//! crate discovers the valid parameter domain from the form, enumerates
//! the filtered cross-product sequentially, and accumulates extracted
//! report links into a nested year → month → politician tree.

pub mod config;
pub mod crawl;
pub mod domain;
pub mod error;
mod extract;
pub mod query;
pub mod scraper;
pub mod tree;

pub use verba_api;

pub use config::PortalConfig;
pub use domain::{discover, Domain, YearScope};
pub use error::CrawlError;
pub use query::{CrawlMode, QueryFilter};
pub use scraper::PortalScraper;
pub use tree::{ReportEntry, ResultTree};
