// src/fetch.rs
// =============================================================================
// Downloads the page we're going to check and parses it.
//
// This request is deliberately plain: no browser headers, no referer. Only
// the link probes dress up as a browser.
//
// Unlike the link probes, a non-2xx status here is NOT an error. Error pages
// have links too, so the body gets parsed whatever the status was. What is
// an error is not getting a body at all (DNS failure, connection refused,
// connection dropped mid-body), and that ends the run.
// =============================================================================

use reqwest::Client;
use scraper::Html;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not read body of {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

// Fetches a page and parses it into an HTML tree
//
// Parameters:
//   client: the shared HTTP client
//   url: the page to fetch
//
// Returns: the parsed document, or FetchError if no body could be read
pub async fn fetch_html(client: &Client, url: &Url) -> Result<Html, FetchError> {
    let response = client
        .get(url.as_str())
        .send()
        .await
        .map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        warn!(%url, status = status.as_u16(), "page returned an error status, checking it anyway");
    }

    let body = response.text().await.map_err(|source| FetchError::Body {
        url: url.to_string(),
        source,
    })?;
    debug!(%url, status = status.as_u16(), bytes = body.len(), "fetched page");

    // html5ever recovers from any markup error, so parsing itself can't fail
    Ok(Html::parse_document(&body))
}
