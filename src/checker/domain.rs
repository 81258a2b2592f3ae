// src/checker/domain.rs
// =============================================================================
// Decides whether a host is worth probing.
//
// A host is checkable when it has a registrable domain ("eTLD+1") according
// to the Public Suffix List:
//   www.example.com   -> example.com      (checkable)
//   blog.example.co.uk -> example.co.uk   (checkable)
//   co.uk, com        -> itself a suffix  (skip)
//   localhost, ""     -> no domain        (skip)
//   a..b.com          -> empty label      (skip)
//
// Links with no host at all (mailto:, tel:, javascript:) end up here with
// an empty string and are skipped silently.
// =============================================================================

// Returns true when `host` has a registrable domain
pub fn is_checkable(host: &str) -> bool {
    if host.is_empty() || host.starts_with('.') || host.ends_with('.') || host.contains("..") {
        return false;
    }
    psl::domain_str(host).is_some()
}
