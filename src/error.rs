use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by fetching, parsing and section lookup.
///
/// Every variant propagates to the immediate caller; there is no retry or
/// partial-result recovery anywhere in the crate.
#[derive(Debug, Error)]
pub enum NavError {
    /// The server answered, but not with a success status. The unsuccessful
    /// response (status and body) is the error payload.
    #[error("GET {url} returned {status}")]
    Fetch {
        url: String,
        status: StatusCode,
        body: String,
    },

    /// The request could not complete at all (DNS, connect, TLS, ...).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The retrieved text could not be parsed as an HTML document.
    #[error("could not parse document as HTML: {0}")]
    Parse(String),

    /// A caller required a named navigation section that the page does not
    /// have. This is a contract violation, never silently tolerated.
    #[error("navigation section {0:?} not found in page")]
    MissingSection(String),

    /// A configured follow/skip pattern did not compile.
    #[error("invalid filter pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A start URL or joined link destination was not a valid URL.
    #[error("invalid URL {url}: {source}")]
    Url {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Configuration file could not be read.
    #[error("could not read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be decoded.
    #[error("could not decode configuration: {0}")]
    Config(#[from] serde_json::Error),
}
