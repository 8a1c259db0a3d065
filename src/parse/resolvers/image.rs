//! Lead image resolution.

use super::{first_match, non_blank, ResolveContext, Step};
use crate::parse::sources::{first_image, meta_by_name, meta_by_property};

fn og_image(ctx: &ResolveContext<'_>) -> Option<String> {
    non_blank(meta_by_property(ctx.document, "og:image"))
}

fn twitter_image(ctx: &ResolveContext<'_>) -> Option<String> {
    non_blank(meta_by_name(ctx.document, "twitter:image"))
}

fn linked_data_image(ctx: &ResolveContext<'_>) -> Option<String> {
    non_blank(ctx.linked_data?.first_image().map(str::to_string))
}

fn first_document_image(ctx: &ResolveContext<'_>) -> Option<String> {
    non_blank(first_image(ctx.document))
}

const IMAGE_STEPS: &[Step<String>] = &[
    og_image,
    twitter_image,
    linked_data_image,
    first_document_image,
];

/// Resolves the lead image: `og:image`, `twitter:image`, the first JSON-LD
/// `image`, then the first `<img src>` of the page. Blank meta values are
/// skipped on purpose so an empty `og:image` does not mask a real image.
pub fn resolve_image(ctx: &ResolveContext<'_>) -> Option<String> {
    first_match(ctx, IMAGE_STEPS)
}
