//! Error types for the crawler library.

/// Errors surfaced to callers of the crawler.
///
/// Per-combination fetch and parse failures are deliberately absent: the
/// crawl engine downgrades them to empty entries and keeps going, so they
/// only show up in logs.
#[derive(thiserror::Error, Debug)]
pub enum CrawlError {
    /// The landing-page fetch failed. Without it there is no domain and
    /// no crawl is possible.
    #[error("discovery failed: {0}")]
    Discovery(#[from] verba_api::Error),
    /// The landing page parsed but offered no year options.
    #[error("landing page offered no year options")]
    EmptyDomain,
    /// An operation was invoked out of lifecycle order.
    #[error("precondition violated: {0}")]
    Precondition(&'static str),
    /// Serializing the result tree to JSON failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// Writing the output artifact failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
