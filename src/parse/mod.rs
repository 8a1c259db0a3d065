//! Page metadata resolution.
//!
//! This module turns a parsed HTML page into one [`MetadataRecord`] by
//! reconciling four independently optional sources:
//! - HTML head fields (`<title>`, `<meta name>`, `<html lang>`, `<img>`)
//! - OpenGraph meta tags (`og:*`, `article:*`)
//! - Twitter Card meta tags (`twitter:*`)
//! - JSON-LD structured data (flat records and `@graph` sequences)
//!
//! All DOM access goes through the [`PageDocument`] trait, which `scraper::Html`
//! implements using CSS selectors.

mod dates;
mod document;
mod engine;
mod linked_data;
mod record;
mod resolvers;
mod sources;

// Re-export public API
pub use dates::parse_timestamp;
pub use document::PageDocument;
pub use engine::{resolve, resolve_html};
pub use linked_data::{
    decode_linked_data, parse_linked_data, Author, Entity, GraphNode, ImageRef, Keywords,
    LinkedData, Logo, OneOrMany, Publisher,
};
pub use record::{Attribution, MetadataRecord, OpenGraph, TwitterCard, DEFAULT_LANGUAGE};
pub use resolvers::{is_medium_url, twitter_profile_url};
pub use sources::{meta_by_name, meta_by_property};
