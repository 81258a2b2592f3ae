// src/report.rs
// =============================================================================
// Everything the user sees on stdout goes through here.
//
// Reporting is streaming: each line is written (and flushed) the moment the
// checker knows about it, not collected into a table at the end. A slow
// probe halfway down the page therefore doesn't hold back earlier results.
//
// Two formats:
// - Text: the plain lines, e.g. "Dead link found: https://x.com/a (404)"
// - Json: one JSON object per line, e.g. {"event":"dead_link","url":...}
// =============================================================================

use serde::Serialize;
use std::fmt;
use std::io::{self, Write};

/// One line of output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Report {
    Started,
    DeadLink { url: String, status: u16 },
    ProbeFailed { url: String, error: String },
    InvalidLink { error: String },
    NoDeadLinks,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Started => write!(f, "Checking for dead links. This may take some time..."),
            Report::DeadLink { url, status } => write!(f, "Dead link found: {} ({})", url, status),
            Report::ProbeFailed { url, error } => write!(f, "Error checking link {}: {}", url, error),
            Report::InvalidLink { error } => write!(f, "Error parsing link: {}", error),
            Report::NoDeadLinks => write!(f, "No dead links found."),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub struct Reporter<W> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn emit(&mut self, report: &Report) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", report)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, report)?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()
    }
}
