//! CSS selector parsing helpers.

use scraper::Selector;

/// Selector that can never match, used when a caller-supplied selector is invalid.
const MATCH_NOTHING: &str = "*:not(*)";

/// Parses a CSS selector, falling back to a selector that matches nothing.
///
/// Selectors built at runtime (for example `meta[name="..."]` with a caller
/// supplied name) can be malformed. Instead of panicking this logs the parse
/// error and hands back `*:not(*)`, so the lookup simply finds no element.
pub fn parse_selector_with_fallback(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        log::error!(
            "Failed to parse CSS selector '{}' in {}: {}. Using fallback selector.",
            selector_str,
            context,
            e
        );
        parse_selector_unsafe(MATCH_NOTHING, "match-nothing fallback")
    })
}

/// Parses a CSS selector that is a compile-time constant.
///
/// # Panics
///
/// Panics if the selector cannot be parsed, which indicates a programming error.
pub fn parse_selector_unsafe(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        panic!(
            "Failed to parse CSS selector '{}' in {}: {}. This is a programming error.",
            selector_str, context, e
        )
    })
}
