// src/error.rs
// =============================================================================
// Errors that stop a whole run.
//
// Anything that goes wrong for a single link (bad href, connection refused,
// 404) is reported and skipped inside the checker. Only the failures below
// are fatal: the process prints them to stderr and exits with code 1.
// =============================================================================

use thiserror::Error;

use crate::fetch::FetchError;

#[derive(Error, Debug)]
pub enum CheckError {
    /// Reading the target URL from stdin failed
    #[error("Error reading URL: {0}")]
    Input(#[source] std::io::Error),

    /// The target URL typed by the user is not an absolute URL
    #[error("Error parsing base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// The page itself could not be downloaded
    #[error("Error fetching HTML: {0}")]
    Fetch(#[from] FetchError),

    /// The HTTP client could not be built (e.g. TLS backend failed to load)
    #[error("Error creating HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Writing a report line to stdout failed
    #[error("Error writing report: {0}")]
    Io(#[from] std::io::Error),
}
