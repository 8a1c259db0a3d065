//! Read-only document capability used by the resolution engine.
//!
//! The engine never walks the DOM itself. It asks three questions of a parsed
//! page through [`PageDocument`]: the attribute of the first element matching a
//! selector, the text of the first match, and the raw content of the first
//! match. [`scraper::Html`] implements the trait; tests can supply their own.

use scraper::Html;

use crate::utils::parse_selector_with_fallback;

/// Selector-based access to a parsed HTML document.
///
/// Implementations must be pure: the same selector on the same document always
/// yields the same answer.
pub trait PageDocument {
    /// Returns `attribute` of the first element matching `selector`.
    fn find_attribute(&self, selector: &str, attribute: &str) -> Option<String>;

    /// Returns the concatenated text of the first element matching `selector`,
    /// or an empty string when nothing matches.
    fn find_text(&self, selector: &str) -> String;

    /// Returns the content of the first element matching `selector` as it
    /// appears in the source, without entity escaping. Used for `<script>`
    /// bodies, whose text is raw.
    fn find_raw_html(&self, selector: &str) -> Option<String>;
}

impl PageDocument for Html {
    fn find_attribute(&self, selector: &str, attribute: &str) -> Option<String> {
        let parsed = parse_selector_with_fallback(selector, "attribute lookup");
        self.select(&parsed)
            .next()
            .and_then(|element| element.value().attr(attribute))
            .map(str::to_string)
    }

    fn find_text(&self, selector: &str) -> String {
        let parsed = parse_selector_with_fallback(selector, "text lookup");
        self.select(&parsed)
            .next()
            .map(|element| element.text().collect::<String>())
            .unwrap_or_default()
    }

    fn find_raw_html(&self, selector: &str) -> Option<String> {
        let parsed = parse_selector_with_fallback(selector, "raw html lookup");
        self.select(&parsed)
            .next()
            .map(|element| element.text().collect::<String>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html lang="fr">
            <head>
                <title> Hello </title>
                <meta name="description" content="A page">
                <meta name="description" content="Second">
                <script type="application/ld+json">{"name": "x"}</script>
            </head>
            <body><img src="/a.png"><img src="/b.png"></body>
        </html>
    "#;

    #[test]
    fn test_find_attribute_first_match() {
        let document = Html::parse_document(PAGE);
        assert_eq!(
            document.find_attribute(r#"meta[name="description"]"#, "content"),
            Some("A page".to_string())
        );
        assert_eq!(
            document.find_attribute("img[src]", "src"),
            Some("/a.png".to_string())
        );
        assert_eq!(document.find_attribute("html", "lang"), Some("fr".to_string()));
    }

    #[test]
    fn test_find_attribute_missing() {
        let document = Html::parse_document(PAGE);
        assert_eq!(document.find_attribute(r#"meta[name="keywords"]"#, "content"), None);
        assert_eq!(document.find_attribute("html", "dir"), None);
    }

    #[test]
    fn test_find_text_untrimmed_and_empty() {
        let document = Html::parse_document(PAGE);
        assert_eq!(document.find_text("head title"), " Hello ");
        assert_eq!(document.find_text("h1"), "");
    }

    #[test]
    fn test_find_raw_html_script() {
        let document = Html::parse_document(PAGE);
        let raw = document.find_raw_html(r#"script[type="application/ld+json"]"#);
        assert_eq!(raw.as_deref(), Some(r#"{"name": "x"}"#));
    }

    #[test]
    fn test_find_raw_html_keeps_markup_characters() {
        let document = Html::parse_document(
            r#"<script type="application/ld+json">{"name": "Tom & Jerry <3", "alt": "a > b"}</script>"#,
        );
        let raw = document.find_raw_html(r#"script[type="application/ld+json"]"#);
        assert_eq!(
            raw.as_deref(),
            Some(r#"{"name": "Tom & Jerry <3", "alt": "a > b"}"#)
        );
    }

    #[test]
    fn test_invalid_selector_finds_nothing() {
        let document = Html::parse_document(PAGE);
        assert_eq!(document.find_attribute("meta[name=", "content"), None);
        assert_eq!(document.find_text("(("), "");
        assert_eq!(document.find_raw_html("(("), None);
    }
}
