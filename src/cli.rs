// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// There is only one job, so there are no subcommands:
//   dead-link-checker https://example.com
//   dead-link-checker                      (asks for the URL on stdin)
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Option<T>: Arguments the user may leave out
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::time::Duration;

use crate::report::OutputFormat;

const PROMPT: &str = "Enter the URL of the website to check for dead links: ";

#[derive(Parser, Debug)]
#[command(
    name = "dead-link-checker",
    version,
    about = "Checks every link on a web page and reports the dead ones",
    long_about = "dead-link-checker downloads one page, finds every <a href> on it and requests each link. \
                  Links answering with a 4xx/5xx status are reported as dead; links that can't be \
                  reached at all are reported as errors."
)]
pub struct Cli {
    /// Page to check (e.g., https://example.com/docs/)
    ///
    /// When left out, the URL is read from stdin after a prompt
    pub url: Option<String>,

    /// Give up on a request after this many seconds
    ///
    /// By default there is no timeout, so one unresponsive server can
    /// stall the whole run
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Print each result as a JSON object (one per line) instead of text
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

// Asks for the target URL and reads one line of input
//
// Returns the line with surrounding whitespace (and the newline) removed.
// An empty string comes back on EOF; URL parsing rejects it later.
pub fn prompt_for_url<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<String> {
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
