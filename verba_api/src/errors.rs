//! Error types for the portal HTTP client.

/// Errors that can occur when fetching a page from the portal.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The server answered with a non-success status. Carries a truncated
    /// body snippet for logging.
    #[error("request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The request exceeded the configured timeout.
    #[error("request timed out")]
    Timeout,
    /// Connection-level failure (DNS, refused connection, broken transfer).
    #[error("network error: {0}")]
    Network(String),
    /// The redirect limit was exceeded.
    #[error("redirect limit exceeded")]
    RedirectLimit,
    /// Anything reqwest reports that fits none of the above.
    #[error("unknown error: {0}")]
    Unknown(String),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        // A timed-out request also reports as a request error, so the
        // timeout check must come first.
        if e.is_timeout() {
            Error::Timeout
        } else if e.is_redirect() {
            Error::RedirectLimit
        } else if e.is_connect() || e.is_request() || e.is_body() {
            Error::Network(e.to_string())
        } else {
            Error::Unknown(e.to_string())
        }
    }
}
