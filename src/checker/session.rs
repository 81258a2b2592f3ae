// src/checker/session.rs
// =============================================================================
// The state of one run: which page we're on, the HTTP client, where output
// goes, and whether we've seen a dead link yet.
//
// For every href the tree walker hands us:
//   resolve -> (bad href?  report "Error parsing link", move on)
//   filter  -> (no real domain? skip silently, move on)
//   probe   -> dead:  report "Dead link found", set the flag
//              error: report "Error checking link", flag untouched
//              alive: say nothing
//
// Links are probed one at a time, in the order they appear in the page.
// =============================================================================

use reqwest::Client;
use scraper::Html;
use std::io::Write;
use tracing::{debug, info};
use url::Url;

use super::domain::is_checkable;
use super::html::anchor_hrefs;
use super::http::{probe, ProbeResult};
use super::resolve::{link_host, resolve_link};
use crate::error::CheckError;
use crate::report::{Report, Reporter};

/// Tally of what happened to the links on a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    pub any_dead_link_found: bool,
    pub links_found: usize,
    pub invalid: usize,
    pub skipped: usize,
    pub probed: usize,
    pub dead: usize,
    pub failed: usize,
}

pub struct LinkChecker<W> {
    base: Url,
    client: Client,
    reporter: Reporter<W>,
    outcome: Outcome,
}

impl<W: Write> LinkChecker<W> {
    pub fn new(base: Url, client: Client, reporter: Reporter<W>) -> Self {
        Self {
            base,
            client,
            reporter,
            outcome: Outcome::default(),
        }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn any_dead_link_found(&self) -> bool {
        self.outcome.any_dead_link_found
    }

    /// Prints the startup line.
    pub fn start(&mut self) -> Result<(), CheckError> {
        info!(base = %self.base, "checking page for dead links");
        self.reporter.emit(&Report::Started)?;
        Ok(())
    }

    /// Checks every anchor href in `document`, in document order.
    pub async fn check_document(&mut self, document: &Html) -> Result<(), CheckError> {
        for href in anchor_hrefs(document) {
            self.check_href(href).await?;
        }
        Ok(())
    }

    /// Resolves, filters and probes a single href.
    ///
    /// Only a failure to write output is returned as an error; everything
    /// that can go wrong with the link itself is reported and swallowed.
    pub async fn check_href(&mut self, href: &str) -> Result<(), CheckError> {
        self.outcome.links_found += 1;

        let link = match resolve_link(href, &self.base) {
            Ok(link) => link,
            Err(e) => {
                self.outcome.invalid += 1;
                self.reporter.emit(&Report::InvalidLink {
                    error: e.to_string(),
                })?;
                return Ok(());
            }
        };

        if !is_checkable(link_host(&link)) {
            debug!(%link, "skipping link without a registrable domain");
            self.outcome.skipped += 1;
            return Ok(());
        }

        self.outcome.probed += 1;
        match probe(&self.client, &link, &self.base).await {
            Ok(ProbeResult::Dead(status)) => {
                self.outcome.dead += 1;
                self.outcome.any_dead_link_found = true;
                self.reporter.emit(&Report::DeadLink {
                    url: link.to_string(),
                    status: status.as_u16(),
                })?;
            }
            Ok(ProbeResult::Alive(_)) => {}
            Err(e) => {
                self.outcome.failed += 1;
                self.reporter.emit(&Report::ProbeFailed {
                    url: link.to_string(),
                    error: e.to_string(),
                })?;
            }
        }
        Ok(())
    }

    /// Prints the closing line (if no dead links) and hands back the tally.
    pub fn finish(mut self) -> Result<Outcome, CheckError> {
        if !self.any_dead_link_found() {
            self.reporter.emit(&Report::NoDeadLinks)?;
        }

        let outcome = self.outcome;
        info!(
            links = outcome.links_found,
            probed = outcome.probed,
            skipped = outcome.skipped,
            invalid = outcome.invalid,
            dead = outcome.dead,
            failed = outcome.failed,
            "finished checking links"
        );
        Ok(outcome)
    }
}
