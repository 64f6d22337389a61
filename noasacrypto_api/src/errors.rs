//! Error types for the API client.

/// Errors that can occur when requesting reasons.
///
/// Callers are expected to handle the kinds distinctly: a
/// [`CategoryNotFound`](Error::CategoryNotFound) usually means "show the valid
/// categories", a [`Connection`](Error::Connection) means "check the network",
/// and an [`Api`](Error::Api) carries the server's own message.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request never produced an HTTP response (refused, DNS, TLS, timeout)
    /// or the response body could not be read.
    #[error("Failed to connect to {url}: {cause}")]
    Connection { url: String, cause: String },
    /// The by-category endpoint answered 404.
    #[error("{0}")]
    CategoryNotFound(String),
    /// Any other non-success status, or a success body that did not decode.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
    /// The client configuration or a request URL was rejected before sending.
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// HTTP status code of an [`Api`](Error::Api) error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The bare message, without the kind prefix added by `Display`.
    pub fn message(&self) -> String {
        match self {
            Error::Connection { url, cause } => format!("Failed to connect to {}: {}", url, cause),
            Error::CategoryNotFound(message) => message.clone(),
            Error::Api { message, .. } => message.clone(),
            Error::InvalidConfig(message) => message.clone(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
