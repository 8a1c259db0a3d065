//! Resolution engine: one parsed page in, one [`MetadataRecord`] out.

use scraper::Html;

use super::document::PageDocument;
use super::linked_data::decode_linked_data;
use super::record::MetadataRecord;
use super::resolvers::*;

/// Resolves canonical metadata for a parsed page.
///
/// Structured data is decoded once and every field resolver then reads the
/// same immutable inputs, so resolver order has no effect on the result.
/// This never fails: each field falls back to its own empty or absent value.
///
/// `source_url` is the URL the page was fetched from; site heuristics (Medium
/// tags) are gated on it.
pub fn resolve(document: &dyn PageDocument, source_url: &str) -> MetadataRecord {
    let linked_data = decode_linked_data(document);
    let ctx = ResolveContext::new(document, linked_data.as_ref(), source_url);

    let title = resolve_title(&ctx);
    let keywords = resolve_keywords(&ctx);

    log::debug!(
        "Resolved {}: title={:?}, {} keywords, structured data: {}",
        source_url,
        title,
        keywords.len(),
        linked_data.is_some()
    );

    MetadataRecord {
        title,
        description: resolve_description(&ctx),
        keywords,
        language: resolve_language(&ctx),
        image: resolve_image(&ctx),
        created_date: resolve_created_date(&ctx),
        published_date: resolve_published_date(&ctx),
        modified_date: resolve_modified_date(&ctx),
        author: resolve_author(&ctx),
        publication: resolve_publication(&ctx),
        og: resolve_open_graph(&ctx),
        twitter: resolve_twitter_card(&ctx),
        linked_data,
    }
}

/// Parses `html` and resolves its metadata.
pub fn resolve_html(html: &str, source_url: &str) -> MetadataRecord {
    let document = Html::parse_document(html);
    resolve(&document, source_url)
}
