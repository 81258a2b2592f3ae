// src/checker/html.rs
// =============================================================================
// This module walks a parsed HTML page and pulls out link targets.
//
// We use the `scraper` crate which:
// - Parses HTML into a tree of nodes (elements, text, comments, ...)
// - Is built on html5ever (Mozilla's HTML parser), so broken markup is
//   repaired the same way a browser would
//
// The walk is depth-first and pre-order: a node is looked at before its
// children, and children in document order. That means links come out in
// the same order you'd read them in the page source.
//
// Rust concepts:
// - Iterators: The walk is lazy, nothing happens until someone asks for
//   the next href
// - Lifetimes: The hrefs borrow from the document, no copying
// =============================================================================

use scraper::{Html, Node};

// Yields the value of every `href` attribute on every <a> element
//
// Parameters:
//   document: the parsed page (borrowed)
//
// Returns: a lazy iterator of raw href strings, in document order
//
// Example:
//   <nav><a href="/one">1</a><div><a href="/two">2</a></div></nav><a href="/three">
//   -> "/one", "/two", "/three"
pub fn anchor_hrefs(document: &Html) -> impl Iterator<Item = &str> + '_ {
    // descendants() is an iterative pre-order walk starting at the root,
    // so deeply nested pages can't blow the stack
    document
        .tree
        .root()
        .descendants()
        .filter_map(|node| match node.value() {
            Node::Element(element) if element.name() == "a" => Some(element),
            _ => None,
        })
        .flat_map(|element| {
            element
                .attrs()
                .filter(|(name, _)| *name == "href")
                .map(|(_, value)| value)
        })
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why not a CSS selector like "a[href]"?
//    - A selector would work too, but walking the tree ourselves makes the
//      visiting order explicit and doesn't need a selector that could fail
//      to parse
//
// 2. What is impl Iterator<Item = &str>?
//    - "Some iterator type that yields &str", without naming the exact type
//    - The exact type is a long chain of adapters nobody wants to spell out
//
// 3. What does flat_map do?
//    - Each <a> element turns into zero or more hrefs
//    - flat_map glues all those small sequences into one long one
// -----------------------------------------------------------------------------
