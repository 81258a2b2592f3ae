// src/checker/http.rs
// =============================================================================
// This module checks if a URL is alive by making an HTTP request.
//
// Key functionality:
// - Builds the one HTTP client used for the whole run
// - Sends a GET that looks like it came from a normal browser
// - Classifies the response: status >= 400 is dead, anything else is alive
//
// Why pretend to be a browser?
// - Plenty of sites answer 403 to anything that doesn't look like one
// - Sending User-Agent, Accept, Accept-Language and Referer headers keeps
//   those false positives down
//
// Only the status line and headers are looked at. The body is never read;
// the response is dropped as soon as we have the status.
// =============================================================================

use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, REFERER, USER_AGENT};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;
use url::Url;

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36";
const BROWSER_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
const BROWSER_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";

// What a probe found out about a link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeResult {
    /// Status below 400 (2xx, or a 3xx the client didn't follow)
    Alive(StatusCode),
    /// Status 400 or above
    Dead(StatusCode),
}

impl ProbeResult {
    pub fn from_status(status: StatusCode) -> Self {
        if status.as_u16() >= 400 {
            ProbeResult::Dead(status)
        } else {
            ProbeResult::Alive(status)
        }
    }
}

// Builds the HTTP client shared by the page fetch and every probe
//
// Parameters:
//   timeout: optional limit for each whole request; None means wait as
//            long as the server keeps the connection open
//
// Redirects use reqwest's default policy (follow up to 10).
pub fn build_client(timeout: Option<Duration>) -> reqwest::Result<Client> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

// Checks a single link
//
// Parameters:
//   client: reqwest HTTP client (borrowed, we don't own it)
//   url: the absolute URL to check
//   referer: the page the link was found on
//
// Returns: ProbeResult on any HTTP response, Err on transport failures
// (DNS, connection refused, TLS, timeout)
pub async fn probe(client: &Client, url: &Url, referer: &Url) -> reqwest::Result<ProbeResult> {
    let response = client
        .get(url.as_str())
        .header(USER_AGENT, BROWSER_USER_AGENT)
        .header(ACCEPT, BROWSER_ACCEPT)
        .header(ACCEPT_LANGUAGE, BROWSER_ACCEPT_LANGUAGE)
        .header(REFERER, referer.as_str())
        .send()
        .await?;

    let status = response.status();
    drop(response);

    debug!(%url, status = status.as_u16(), "probed link");
    Ok(ProbeResult::from_status(status))
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why not a HEAD request?
//    - HEAD would be lighter, but lots of servers handle it badly
//      (405 Method Not Allowed, or a different status than GET)
//    - A GET where we never read the body costs almost the same
//
// 2. What does drop(response) do?
//    - Ends the response's lifetime right there
//    - The unread body is discarded and the connection released
//    - Without it the response would live until the end of the function anyway,
//      but being explicit shows we never want the body
//
// 3. Why reqwest::Result?
//    - An alias for Result<T, reqwest::Error>
//    - The caller needs the real error to print it next to the URL
// -----------------------------------------------------------------------------
