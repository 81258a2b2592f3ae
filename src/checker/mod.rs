// src/checker/mod.rs
// =============================================================================
// This module contains all link checking logic.
//
// Submodules:
// - resolve: Turns an href into an absolute URL
// - domain: Decides whether a host is a real, checkable web domain
// - http: Makes HTTP requests to check if links are alive
// - html: Walks the parsed page and pulls out <a href> values
// - session: Ties the four together for one run
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
// =============================================================================

mod domain;
pub(crate) mod html;
mod http;
mod resolve;
mod session;

// Re-export public items from submodules
// This lets users write `checker::build_client()` instead of
// `checker::http::build_client()`
pub use http::build_client;
pub use session::{LinkChecker, Outcome};
