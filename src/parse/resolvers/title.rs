//! Title resolution: `og:title`, then `<head><title>`.

use super::{first_match, non_blank, ResolveContext, Step};
use crate::parse::sources::{head_title, meta_by_property};

fn og_title(ctx: &ResolveContext<'_>) -> Option<String> {
    non_blank(meta_by_property(ctx.document, "og:title"))
}

fn document_title(ctx: &ResolveContext<'_>) -> Option<String> {
    non_blank(Some(head_title(ctx.document).trim().to_string()))
}

const TITLE_STEPS: &[Step<String>] = &[og_title, document_title];

/// Resolves the page title. Never fails; empty when the page declares none.
///
/// A blank `og:title` is treated as missing and falls through to `<title>`,
/// whose text is trimmed. Both are intentional: an empty OpenGraph tag never
/// hides a usable document title.
pub fn resolve_title(ctx: &ResolveContext<'_>) -> String {
    first_match(ctx, TITLE_STEPS).unwrap_or_else(|| {
        log::debug!("No title found for {}", ctx.source_url);
        String::new()
    })
}
