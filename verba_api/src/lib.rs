mod client;
mod document;
mod errors;
pub mod user_agent;

pub use self::client::{Client, DEFAULT_TIMEOUT};
pub use self::document::Document;
pub use self::errors::Error;
