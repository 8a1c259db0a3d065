//! JSON-LD (schema.org) decoding.
//!
//! Only the first `<script type="application/ld+json">` block of a page is
//! consulted. The block either decodes completely into [`LinkedData`] or the
//! page is treated as having no structured data at all; a malformed block never
//! surfaces as an error.
//!
//! Real pages populate arbitrary subsets of the vocabulary, so every field is
//! optional and a few fields accept the alternative shapes seen in the wild
//! (a bare value or a sequence, a keyword list or a comma-joined string).

use serde::{Deserialize, Serialize};

use super::document::PageDocument;
use super::sources::linked_data_text;

/// A value that pages send either bare or wrapped in a sequence.
///
/// `Many` is tried first: serde can read a struct out of a JSON array, so the
/// other order would misread `["a.png", "b.png"]` as one object.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    /// The bare value, or the first element of the sequence.
    pub fn first(&self) -> Option<&T> {
        match self {
            OneOrMany::One(value) => Some(value),
            OneOrMany::Many(values) => values.first(),
        }
    }
}

/// `keywords` as either a list or a single comma-joined string.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Keywords {
    List(Vec<String>),
    Joined(String),
}

impl Keywords {
    /// Entries as sent. A joined string is split on commas and trimmed.
    pub fn entries(&self) -> Vec<String> {
        match self {
            Keywords::List(list) => list.clone(),
            Keywords::Joined(joined) => split_keywords(joined),
        }
    }
}

/// Splits a comma-joined keyword string and trims each entry.
///
/// Empty entries are kept, so a trailing comma yields a trailing `""`.
pub fn split_keywords(joined: &str) -> Vec<String> {
    joined
        .split(',')
        .map(|keyword| keyword.trim().to_string())
        .collect()
}

/// An `image` entry: a URL, or an `ImageObject` carrying one.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ImageRef {
    Url(String),
    Object {
        #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
        schema_type: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
    },
}

impl ImageRef {
    pub fn url(&self) -> Option<&str> {
        match self {
            ImageRef::Url(url) => Some(url),
            ImageRef::Object { url, .. } => url.as_deref(),
        }
    }
}

/// A named entity such as an article's author.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Entity {
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<OneOrMany<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// An `author` entry: a bare name, or an entity.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Author {
    Name(String),
    Entity(Entity),
}

impl Author {
    pub fn name(&self) -> Option<&str> {
        match self {
            Author::Name(name) => Some(name),
            Author::Entity(entity) => entity.name.as_deref(),
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Author::Name(_) => None,
            Author::Entity(entity) => entity.url.as_deref(),
        }
    }
}

/// Publisher logo, either a URL or an `ImageObject`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Logo {
    Url(String),
    Object {
        #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
        schema_type: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        width: Option<serde_json::Value>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        height: Option<serde_json::Value>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
    },
}

/// The organization that published the page.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Publisher {
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<OneOrMany<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<Logo>,
}

/// One typed node of a `@graph` sequence.
///
/// `@type` is normalized before classification: a sequence is reduced to its
/// first element, so `"Person"` and `["Person"]` decode to the same variant.
/// `WebSite` is matched ignoring case; the other types are matched exactly.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(from = "RawGraphNode", into = "RawGraphNode")]
pub enum GraphNode {
    Organization {
        name: Option<String>,
        url: Option<String>,
    },
    WebSite {
        type_name: String,
        name: Option<String>,
        url: Option<String>,
    },
    Article {
        keywords: Option<Keywords>,
    },
    Person {
        name: Option<String>,
    },
    Other {
        type_name: Option<String>,
    },
}

/// Wire shape of a graph node, before classification.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
struct RawGraphNode {
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    node_type: Option<OneOrMany<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    keywords: Option<Keywords>,
}

/// Reduces `@type` to a single type name.
fn normalize_type(node_type: Option<OneOrMany<String>>) -> Option<String> {
    match node_type? {
        OneOrMany::One(name) => Some(name),
        OneOrMany::Many(names) => names.into_iter().next(),
    }
}

impl From<RawGraphNode> for GraphNode {
    fn from(raw: RawGraphNode) -> Self {
        let Some(type_name) = normalize_type(raw.node_type) else {
            return GraphNode::Other { type_name: None };
        };

        if type_name == "Organization" {
            GraphNode::Organization {
                name: raw.name,
                url: raw.url,
            }
        } else if type_name.eq_ignore_ascii_case("website") {
            GraphNode::WebSite {
                type_name,
                name: raw.name,
                url: raw.url,
            }
        } else if type_name == "Article" {
            GraphNode::Article {
                keywords: raw.keywords,
            }
        } else if type_name == "Person" {
            GraphNode::Person { name: raw.name }
        } else {
            GraphNode::Other {
                type_name: Some(type_name),
            }
        }
    }
}

impl From<GraphNode> for RawGraphNode {
    fn from(node: GraphNode) -> Self {
        let one = |name: &str| Some(OneOrMany::One(name.to_string()));
        match node {
            GraphNode::Organization { name, url } => RawGraphNode {
                node_type: one("Organization"),
                name,
                url,
                ..Default::default()
            },
            GraphNode::WebSite {
                type_name,
                name,
                url,
            } => RawGraphNode {
                node_type: Some(OneOrMany::One(type_name)),
                name,
                url,
                ..Default::default()
            },
            GraphNode::Article { keywords } => RawGraphNode {
                node_type: one("Article"),
                keywords,
                ..Default::default()
            },
            GraphNode::Person { name } => RawGraphNode {
                node_type: one("Person"),
                name,
                ..Default::default()
            },
            GraphNode::Other { type_name } => RawGraphNode {
                node_type: type_name.map(OneOrMany::One),
                ..Default::default()
            },
        }
    }
}

/// Structured data decoded from a page's first JSON-LD block.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedData {
    #[serde(rename = "@context", default, skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<OneOrMany<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<OneOrMany<ImageRef>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<OneOrMany<Author>>,
    #[serde(rename = "@graph", default, skip_serializing_if = "Option::is_none")]
    pub graph: Option<Vec<GraphNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Keywords>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_entity_of_page: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<Publisher>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl LinkedData {
    /// Nodes of the `@graph` sequence, empty when the page has none.
    pub fn graph_nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.graph.iter().flatten()
    }

    /// URL of the first `image` entry.
    pub fn first_image(&self) -> Option<&str> {
        self.image.as_ref()?.first()?.url()
    }

    /// The first declared author.
    pub fn first_author(&self) -> Option<&Author> {
        self.author.as_ref()?.first()
    }
}

/// Decodes JSON-LD text. Returns `None` on malformed syntax or a wrong shape.
pub fn parse_linked_data(text: &str) -> Option<LinkedData> {
    let value = match serde_json::from_str::<serde_json::Value>(text.trim()) {
        Ok(value) => value,
        Err(e) => {
            log::debug!("Ignoring malformed JSON-LD block: {}", e);
            return None;
        }
    };

    // serde would happily read a struct out of a JSON array; only objects qualify.
    if !value.is_object() {
        log::debug!("Ignoring JSON-LD block that is not an object");
        return None;
    }

    match serde_json::from_value::<LinkedData>(value) {
        Ok(data) => Some(data),
        Err(e) => {
            log::debug!("Ignoring JSON-LD block with unexpected shape: {}", e);
            None
        }
    }
}

/// Locates and decodes the first JSON-LD block of `document`.
pub fn decode_linked_data(document: &dyn PageDocument) -> Option<LinkedData> {
    let text = linked_data_text(document)?;
    parse_linked_data(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_decode_flat_record() {
        let data = parse_linked_data(
            r#"{
                "@context": "https://schema.org",
                "@type": "NewsArticle",
                "author": {"@type": "Person", "name": "Ada", "url": "https://ada.example"},
                "publisher": {"@type": "Organization", "name": "Daily", "url": "https://daily.example",
                              "logo": {"@type": "ImageObject", "width": 600, "height": 60, "url": "l.png"}},
                "keywords": ["Tag:rust", "Topic:systems"],
                "image": ["a.png", "b.png"],
                "datePublished": "2020-01-02T03:04:05Z"
            }"#,
        )
        .expect("valid record");

        let author = data.first_author().expect("author");
        assert_eq!(author.name(), Some("Ada"));
        assert_eq!(author.url(), Some("https://ada.example"));
        assert_eq!(
            data.publisher.as_ref().and_then(|p| p.url.as_deref()),
            Some("https://daily.example")
        );
        assert_eq!(data.first_image(), Some("a.png"));
        assert_eq!(
            data.keywords.as_ref().map(Keywords::entries),
            Some(vec!["Tag:rust".to_string(), "Topic:systems".to_string()])
        );
        assert_eq!(data.date_published.as_deref(), Some("2020-01-02T03:04:05Z"));
    }

    #[test]
    fn test_decode_graph_variants() {
        let data = parse_linked_data(
            r#"{"@graph": [
                {"@type": "Organization", "name": "Org", "url": "https://org.example"},
                {"@type": "WebSite", "name": "Site", "url": "https://site.example"},
                {"@type": "Article", "keywords": "css, grid ,layout"},
                {"@type": ["Person"], "name": "Chris"},
                {"@type": "BreadcrumbList"},
                {"name": "untyped"}
            ]}"#,
        )
        .expect("valid graph");

        let nodes: Vec<&GraphNode> = data.graph_nodes().collect();
        assert_eq!(nodes.len(), 6);
        assert!(matches!(nodes[0], GraphNode::Organization { .. }));
        assert!(matches!(nodes[1], GraphNode::WebSite { .. }));
        assert_eq!(
            nodes[2],
            &GraphNode::Article {
                keywords: Some(Keywords::Joined("css, grid ,layout".to_string()))
            }
        );
        assert_eq!(
            nodes[3],
            &GraphNode::Person {
                name: Some("Chris".to_string())
            }
        );
        assert_eq!(
            nodes[4],
            &GraphNode::Other {
                type_name: Some("BreadcrumbList".to_string())
            }
        );
        assert_eq!(nodes[5], &GraphNode::Other { type_name: None });
    }

    #[test]
    fn test_person_type_bare_and_sequence_are_equivalent() {
        let bare = parse_linked_data(r#"{"@graph": [{"@type": "Person", "name": "P"}]}"#);
        let seq = parse_linked_data(r#"{"@graph": [{"@type": ["Person"], "name": "P"}]}"#);
        assert_eq!(
            bare.map(|d| d.graph),
            seq.map(|d| d.graph),
        );
    }

    #[test]
    fn test_website_type_is_case_insensitive() {
        for type_name in ["WebSite", "website", "WEBSITE"] {
            let json = format!(r#"{{"@graph": [{{"@type": "{}", "name": "S"}}]}}"#, type_name);
            let data = parse_linked_data(&json).expect("valid graph");
            assert!(
                matches!(data.graph_nodes().next(), Some(GraphNode::WebSite { .. })),
                "{} should classify as WebSite",
                type_name
            );
        }
    }

    #[test]
    fn test_malformed_json_is_none() {
        assert_eq!(parse_linked_data("{not json"), None);
        assert_eq!(parse_linked_data(""), None);
    }

    #[test]
    fn test_wrong_shape_is_none() {
        // No partial decoding: one bad field rejects the whole block.
        assert_eq!(parse_linked_data(r#"{"name": "ok", "keywords": 42}"#), None);
        assert_eq!(parse_linked_data(r#"[{"@type": "WebPage"}]"#), None);
        assert_eq!(parse_linked_data(r#""just a string""#), None);
    }

    #[test]
    fn test_author_as_bare_name_or_sequence() {
        let bare = parse_linked_data(r#"{"author": "Grace"}"#).expect("valid");
        assert_eq!(bare.first_author().and_then(Author::name), Some("Grace"));
        assert_eq!(bare.first_author().and_then(Author::url), None);

        let seq = parse_linked_data(r#"{"author": [{"name": "A"}, {"name": "B"}]}"#).expect("valid");
        assert_eq!(seq.first_author().and_then(Author::name), Some("A"));
    }

    #[test]
    fn test_image_object_and_bare_string() {
        let object = parse_linked_data(r#"{"image": {"@type": "ImageObject", "url": "o.png"}}"#)
            .expect("valid");
        assert_eq!(object.first_image(), Some("o.png"));

        let bare = parse_linked_data(r#"{"image": "b.png"}"#).expect("valid");
        assert_eq!(bare.first_image(), Some("b.png"));

        let empty = parse_linked_data(r#"{"image": []}"#).expect("valid");
        assert_eq!(empty.first_image(), None);
    }

    #[test]
    fn test_decode_from_document() {
        let document = Html::parse_document(
            r#"<html><head><script type="application/ld+json">
                {"@type": "Article", "headline": "H"}
            </script></head></html>"#,
        );
        let data = decode_linked_data(&document).expect("decoded");
        assert_eq!(data.headline.as_deref(), Some("H"));
    }

    #[test]
    fn test_decode_absent_block() {
        let document = Html::parse_document("<html><head></head><body></body></html>");
        assert_eq!(decode_linked_data(&document), None);
    }

    #[test]
    fn test_serializes_only_present_fields() {
        let data = parse_linked_data(r#"{"@type": "Article", "name": "N"}"#).expect("valid");
        let json = serde_json::to_value(&data).expect("serializable");
        assert_eq!(json, serde_json::json!({"@type": "Article", "name": "N"}));
    }

    #[test]
    fn test_split_keywords_trims_and_keeps_empty_entries() {
        assert_eq!(split_keywords("a, b ,c"), vec!["a", "b", "c"]);
        assert_eq!(split_keywords("a, b,"), vec!["a", "b", ""]);
        assert_eq!(split_keywords("a,, ,b"), vec!["a", "", "", "b"]);
        assert_eq!(split_keywords(" , "), vec!["", ""]);
        assert_eq!(split_keywords(""), vec![""]);
    }
}
