//! Keyword resolution.
//!
//! Sources are tried in order and the first one that yields at least one
//! keyword wins outright:
//!
//! 1. `<meta name="keywords">`
//! 2. JSON-LD `keywords` (Medium pages keep only their `Tag:` entries)
//! 3. the `keywords` of an `Article` node in the JSON-LD `@graph`

use super::{first_match, non_empty, ResolveContext, Step};
use crate::parse::linked_data::{split_keywords, GraphNode};
use crate::parse::sources::meta_by_name;

/// Marker Medium puts in front of topic tags, e.g. `Tag:rust`.
const MEDIUM_TAG_MARKER: &str = "Tag:";
const MEDIUM_HOST: &str = "medium.com";

fn meta_keywords(ctx: &ResolveContext<'_>) -> Option<Vec<String>> {
    non_empty(split_keywords(&meta_by_name(ctx.document, "keywords")?))
}

fn linked_data_keywords(ctx: &ResolveContext<'_>) -> Option<Vec<String>> {
    let entries = ctx.linked_data?.keywords.as_ref()?.entries();
    if is_medium_url(ctx.source_url) {
        non_empty(medium_tags(entries))
    } else {
        non_empty(entries)
    }
}

fn graph_article_keywords(ctx: &ResolveContext<'_>) -> Option<Vec<String>> {
    let keywords = ctx.linked_data?.graph_nodes().find_map(|node| match node {
        GraphNode::Article { keywords } => Some(keywords.as_ref()),
        _ => None,
    })??;
    non_empty(keywords.entries())
}

const KEYWORD_STEPS: &[Step<Vec<String>>] = &[
    meta_keywords,
    linked_data_keywords,
    graph_article_keywords,
];

/// Resolves the page keywords. Empty when no source yields any.
pub fn resolve_keywords(ctx: &ResolveContext<'_>) -> Vec<String> {
    first_match(ctx, KEYWORD_STEPS).unwrap_or_default()
}

/// Whether `source_url` points at a Medium-hosted article.
///
/// Matches `medium.com` and its subdomains. When the URL cannot be parsed the
/// raw string is checked for `medium` instead.
pub fn is_medium_url(source_url: &str) -> bool {
    match url::Url::parse(source_url) {
        Ok(parsed) => parsed.host_str().is_some_and(|host| {
            let host = host.to_ascii_lowercase();
            host == MEDIUM_HOST || host.ends_with(&format!(".{}", MEDIUM_HOST))
        }),
        Err(_) => source_url.contains("medium"),
    }
}

/// Keeps entries carrying the Medium tag marker, with the marker removed.
fn medium_tags(entries: Vec<String>) -> Vec<String> {
    entries
        .into_iter()
        .filter(|entry| entry.contains(MEDIUM_TAG_MARKER))
        .map(|entry| entry.replacen(MEDIUM_TAG_MARKER, "", 1))
        .collect()
}
