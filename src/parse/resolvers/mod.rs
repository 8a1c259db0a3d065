//! Field resolvers.
//!
//! Each output field has its own ordered fallback chain. A chain is a slice of
//! [`Step`]s tried in order; the first step that yields a value wins and the
//! rest are never consulted, so sources are never merged. Site-specific
//! heuristics live in their own named steps, gated on an explicit predicate.

mod attribution;
mod dates;
mod image;
mod keywords;
mod page;
mod title;

pub use attribution::{resolve_author, resolve_publication, twitter_profile_url};
pub use dates::{resolve_created_date, resolve_modified_date, resolve_published_date};
pub use image::resolve_image;
pub use keywords::{is_medium_url, resolve_keywords};
pub use page::{resolve_description, resolve_language, resolve_open_graph, resolve_twitter_card};
pub use title::resolve_title;

use super::document::PageDocument;
use super::linked_data::LinkedData;

/// Immutable inputs shared by every resolver for one page.
#[derive(Clone, Copy)]
pub struct ResolveContext<'a> {
    pub document: &'a dyn PageDocument,
    pub linked_data: Option<&'a LinkedData>,
    pub source_url: &'a str,
}

impl<'a> ResolveContext<'a> {
    pub fn new(
        document: &'a dyn PageDocument,
        linked_data: Option<&'a LinkedData>,
        source_url: &'a str,
    ) -> Self {
        Self {
            document,
            linked_data,
            source_url,
        }
    }
}

/// One source in a fallback chain.
pub(crate) type Step<T> = fn(&ResolveContext<'_>) -> Option<T>;

/// Runs `steps` in order and returns the first value produced.
pub(crate) fn first_match<T>(ctx: &ResolveContext<'_>, steps: &[Step<T>]) -> Option<T> {
    steps.iter().find_map(|step| step(ctx))
}

/// Treats empty and whitespace-only values as missing.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Treats an empty list as missing.
pub(crate) fn non_empty(values: Vec<String>) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}
