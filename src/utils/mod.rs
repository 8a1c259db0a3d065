//! Shared helpers.
//!
//! - CSS selector parsing with safe fallbacks

mod selector;

pub(crate) use selector::parse_selector_with_fallback;
