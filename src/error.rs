//! Error types for every remote operation of this crate

use thiserror::Error;

/// Errors that a remote operation can report.
///
/// Validation failures are deliberately not part of this taxonomy: they are caught by the
/// [`editor`](crate::editor) before a request is even built, and never reach the network.
#[derive(Error, Debug)]
pub enum Error {
    /// The stored credential was missing, expired, or rejected by the server.
    /// The [`SessionGuard`](crate::session::SessionGuard) has already been told about it.
    #[error("not authenticated, please log in again")]
    Unauthorized,

    /// The server answered with a non-success status other than 401/403.
    #[error("server returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// The server could not be reached, or the response body was not what we expected.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A URL could not be built from the configured base URL.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
