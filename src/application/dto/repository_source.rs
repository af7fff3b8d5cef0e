use std::fmt;
use std::path::PathBuf;

/// Default orders file looked up in the working directory
pub const DEFAULT_ORDERS_FILE: &str = "orders.json";

/// Where the order repository reads from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositorySource {
    /// JSON file holding an array of orders
    File(PathBuf),
    /// Base URL of an order service exposing `GET /orders`
    Http(String),
}

impl Default for RepositorySource {
    fn default() -> Self {
        RepositorySource::File(PathBuf::from(DEFAULT_ORDERS_FILE))
    }
}

impl fmt::Display for RepositorySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositorySource::File(path) => write!(f, "file {}", path.display()),
            RepositorySource::Http(url) => write!(f, "order service {}", url),
        }
    }
}
