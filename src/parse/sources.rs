//! Source readers: thin accessors over a [`PageDocument`].
//!
//! These return the literal values found in the markup. Deciding whether a
//! blank value counts as missing is left to the resolvers, so the raw `og`
//! and `twitter` sub-records can mirror exactly what the page declares.

use super::document::PageDocument;

const TITLE_SELECTOR_STR: &str = "head title";
const HTML_SELECTOR_STR: &str = "html";
const FIRST_IMAGE_SELECTOR_STR: &str = "img[src]";
const LINKED_DATA_SELECTOR_STR: &str = r#"script[type="application/ld+json"]"#;

/// Reads the `content` of the first `<meta name="...">` tag.
pub fn meta_by_name(document: &dyn PageDocument, name: &str) -> Option<String> {
    document.find_attribute(&format!(r#"meta[name="{}"]"#, escape(name)), "content")
}

/// Reads the `content` of the first `<meta property="...">` tag.
pub fn meta_by_property(document: &dyn PageDocument, property: &str) -> Option<String> {
    document.find_attribute(
        &format!(r#"meta[property="{}"]"#, escape(property)),
        "content",
    )
}

/// Reads the document's declared language from `<html lang>`.
pub fn document_language(document: &dyn PageDocument) -> Option<String> {
    document.find_attribute(HTML_SELECTOR_STR, "lang")
}

/// Reads the text of `<head><title>`, untrimmed. Empty when absent.
pub fn head_title(document: &dyn PageDocument) -> String {
    document.find_text(TITLE_SELECTOR_STR)
}

/// Reads the `src` of the first `<img>` carrying one.
pub fn first_image(document: &dyn PageDocument) -> Option<String> {
    document.find_attribute(FIRST_IMAGE_SELECTOR_STR, "src")
}

/// Reads the raw text of the first JSON-LD script block.
pub fn linked_data_text(document: &dyn PageDocument) -> Option<String> {
    document.find_raw_html(LINKED_DATA_SELECTOR_STR)
}

/// Escapes a value for use inside a double-quoted attribute selector.
fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
