//! Description, language and the raw OpenGraph / Twitter Card sub-records.

use super::{non_blank, ResolveContext};
use crate::parse::record::{OpenGraph, TwitterCard, DEFAULT_LANGUAGE};
use crate::parse::sources::{document_language, meta_by_name, meta_by_property};

/// `<meta name="description">`, as declared.
pub fn resolve_description(ctx: &ResolveContext<'_>) -> Option<String> {
    meta_by_name(ctx.document, "description")
}

/// `<html lang>`, defaulting to `en`.
pub fn resolve_language(ctx: &ResolveContext<'_>) -> String {
    non_blank(document_language(ctx.document)).unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
}

pub fn resolve_open_graph(ctx: &ResolveContext<'_>) -> OpenGraph {
    let og = |property: &str| meta_by_property(ctx.document, property);
    OpenGraph {
        title: og("og:title"),
        description: og("og:description"),
        image: og("og:image"),
        og_type: og("og:type"),
        url: og("og:url"),
    }
}

pub fn resolve_twitter_card(ctx: &ResolveContext<'_>) -> TwitterCard {
    let twitter = |name: &str| meta_by_name(ctx.document, name);
    TwitterCard {
        title: twitter("twitter:title"),
        description: twitter("twitter:description"),
        card: twitter("twitter:card"),
        image: twitter("twitter:image"),
        image_alt: twitter("twitter:image:alt"),
        label1: twitter("twitter:label1"),
        data1: twitter("twitter:data1"),
        label2: twitter("twitter:label2"),
        data2: twitter("twitter:data2"),
    }
}
