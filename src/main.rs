// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap (or prompt for the URL)
// 2. Parse the URL; a bad URL ends the run right away
// 3. Fetch the page; an unreachable page ends the run too
// 4. Walk the page and probe every link, printing problems as we go
// 5. Exit with proper code (0 = run completed, 1 = could not run)
//
// Dead links do NOT change the exit code. They only decide whether the
// final "No dead links found." line is printed.
//
// Rust concepts used:
// - async/await: reqwest's client is async, tokio drives it
// - Result<T, E>: For error handling (T = success type, E = error type)
// - Generics: check_page writes to any io::Write, so tests can capture output
// =============================================================================

// Module declarations - tells Rust about our other source files
mod checker; // src/checker/ - link checking logic
mod cli; // src/cli.rs - command-line parsing
mod error; // src/error.rs - fatal error types
mod fetch; // src/fetch.rs - downloading the page
mod report; // src/report.rs - everything printed to stdout

use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;
use url::Url;

use checker::{build_client, LinkChecker, Outcome};
use error::CheckError;
use report::Reporter;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    let exit_code = match run(cli).await {
        Ok(_) => 0,
        Err(e) => {
            eprintln!("{}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

// Diagnostics go to stderr so they never mix with the report on stdout.
// Quiet unless RUST_LOG asks for more (e.g. RUST_LOG=debug).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

// This is the main application logic
async fn run(cli: Cli) -> Result<Outcome> {
    let target = match &cli.url {
        Some(url) => url.clone(),
        None => {
            let stdin = io::stdin();
            cli::prompt_for_url(&mut stdin.lock(), &mut io::stdout()).map_err(CheckError::Input)?
        }
    };

    let client = build_client(cli.timeout()).map_err(CheckError::Client)?;
    let reporter = Reporter::new(io::stdout(), cli.output_format());

    Ok(check_page(&target, client, reporter).await?)
}

// Checks one page from start to finish
//
// Parameters:
//   target: the page URL as typed by the user
//   client: HTTP client used for the page and for every link
//   reporter: where the report lines go
//
// Returns: the tally of links, or a fatal error (bad URL, page unreachable)
async fn check_page<W: Write>(
    target: &str,
    client: reqwest::Client,
    reporter: Reporter<W>,
) -> Result<Outcome, CheckError> {
    let base = Url::parse(target)?;

    let mut checker = LinkChecker::new(base, client, reporter);
    checker.start()?;

    let document = fetch::fetch_html(checker.client(), checker.base()).await?;
    checker.check_document(&document).await?;

    checker.finish()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is the URL an Option?
//    - The user can pass it on the command line or type it when asked
//    - None means "not given", so we fall back to the prompt
//
// 2. Why does check_page take a generic W: Write?
//    - In the real program W is stdout
//    - In tests W is a Vec<u8>, so we can compare the output as a string
//
// 3. Why std::process::exit() instead of returning from main?
//    - It lets us pick the exact exit code (0 or 1)
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use report::OutputFormat;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SITE: &str = "docs.example.com";
    const ELSEWHERE: &str = "example.invalid";

    struct TestSite {
        server: MockServer,
        client: reqwest::Client,
    }

    impl TestSite {
        // Routes both test host names to a fresh mock server
        async fn new() -> Self {
            let server = MockServer::start().await;
            let client = reqwest::Client::builder()
                .no_proxy()
                .resolve(SITE, *server.address())
                .resolve(ELSEWHERE, *server.address())
                .build()
                .unwrap();

            Self { server, client }
        }

        // Serves `html` as the page under test, at http://docs.example.com:<port>/
        async fn with_page(html: &str) -> Self {
            let site = Self::new().await;
            site.serve_page(html).await;
            site
        }

        async fn serve_page(&self, html: &str) {
            Mock::given(method("GET"))
                .and(path("/"))
                .respond_with(
                    ResponseTemplate::new(200)
                        .insert_header("content-type", "text/html")
                        .set_body_string(html.to_string()),
                )
                .mount(&self.server)
                .await;
        }

        fn port(&self) -> u16 {
            self.server.address().port()
        }

        fn url(&self) -> String {
            format!("http://{}:{}/", SITE, self.port())
        }

        async fn route(&self, route: &str, status: u16) {
            Mock::given(method("GET"))
                .and(path(route))
                .respond_with(ResponseTemplate::new(status))
                .expect(1)
                .mount(&self.server)
                .await;
        }

        async fn check(&self) -> (Outcome, String) {
            let mut output = Vec::new();
            let reporter = Reporter::new(&mut output, OutputFormat::Text);
            let outcome = check_page(&self.url(), self.client.clone(), reporter)
                .await
                .unwrap();
            (outcome, String::from_utf8(output).unwrap())
        }
    }

    #[tokio::test]
    async fn test_page_without_links() {
        let site = TestSite::with_page("<html><body><h1>Hello</h1></body></html>").await;

        let (outcome, output) = site.check().await;

        assert!(!outcome.any_dead_link_found);
        assert_eq!(
            output,
            "Checking for dead links. This may take some time...\nNo dead links found.\n"
        );
    }

    #[tokio::test]
    async fn test_relative_link_alive() {
        let site = TestSite::with_page(r#"<a href="/about">About</a>"#).await;
        site.route("/about", 200).await;

        let (outcome, output) = site.check().await;

        assert_eq!(outcome.probed, 1);
        assert!(output.ends_with("No dead links found.\n"));
    }

    #[tokio::test]
    async fn test_absolute_link_dead() {
        let site = TestSite::new().await;
        let page = format!(r#"<a href="http://{}:{}/missing">gone</a>"#, ELSEWHERE, site.port());
        site.serve_page(&page).await;
        site.route("/missing", 404).await;

        let (outcome, output) = site.check().await;

        assert!(outcome.any_dead_link_found);
        assert!(output.contains(&format!(
            "Dead link found: http://{}:{}/missing (404)",
            ELSEWHERE,
            site.port()
        )));
        assert!(!output.contains("No dead links found."));
    }

    #[tokio::test]
    async fn test_mailto_and_javascript_skipped() {
        let site = TestSite::with_page(
            r#"<a href="mailto:a@b.com">mail</a> <a href="javascript:void(0)">js</a>"#,
        )
        .await;

        let (outcome, output) = site.check().await;

        assert_eq!(outcome.skipped, 2);
        assert_eq!(
            output,
            "Checking for dead links. This may take some time...\nNo dead links found.\n"
        );
        // Only the page itself was requested
        assert_eq!(site.server.received_requests().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_mixed_page() {
        let site = TestSite::with_page(
            r#"<nav>
                <a href="/ok">ok</a>
                <a href="http://[::1/bad">bad</a>
                <a href="/gone">gone</a>
            </nav>"#,
        )
        .await;
        site.route("/ok", 200).await;
        site.route("/gone", 410).await;

        let (outcome, output) = site.check().await;
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Checking for dead links. This may take some time...");
        assert!(lines[1].starts_with("Error parsing link: "));
        assert_eq!(
            lines[2],
            format!("Dead link found: http://{}:{}/gone (410)", SITE, site.port())
        );
        assert_eq!(outcome.invalid, 1);
        assert_eq!(outcome.dead, 1);
    }

    #[tokio::test]
    async fn test_invalid_base_url_is_fatal() {
        let mut output = Vec::new();
        let reporter = Reporter::new(&mut output, OutputFormat::Text);
        let client = build_client(None).unwrap();

        let err = check_page("not a url", client, reporter).await.unwrap_err();

        assert!(matches!(err, CheckError::InvalidBaseUrl(_)));
        assert!(output.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_page_is_fatal() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let mut output = Vec::new();
        let reporter = Reporter::new(&mut output, OutputFormat::Text);
        let client = build_client(None).unwrap();

        let err = check_page(&format!("http://{}/", addr), client, reporter)
            .await
            .unwrap_err();

        assert!(matches!(err, CheckError::Fetch(_)));
        assert!(err.to_string().starts_with("Error fetching HTML: "));
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Checking for dead links. This may take some time...\n"
        );
    }
}
