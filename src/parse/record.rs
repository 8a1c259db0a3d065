//! Output records produced by the resolution engine.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::dates::serialize_millis;
use super::linked_data::LinkedData;

/// Language reported when the page does not declare one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// A named person or organization with an optional profile URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribution {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Attribution {
    pub fn new(name: impl Into<String>, url: Option<String>) -> Self {
        Self {
            name: name.into(),
            url,
        }
    }
}

/// Raw OpenGraph values, exactly as declared by the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OpenGraph {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub og_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Raw Twitter Card values, exactly as declared by the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TwitterCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data2: Option<String>,
}

/// Canonical metadata for one page.
///
/// Built once per resolution and never mutated afterwards. `title`,
/// `keywords` and `language` are always present; every other field degrades
/// to absent on its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataRecord {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub keywords: Vec<String>,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(serialize_with = "serialize_millis")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(serialize_with = "serialize_millis")]
    pub published_date: Option<DateTime<Utc>>,
    #[serde(serialize_with = "serialize_millis")]
    pub modified_date: Option<DateTime<Utc>>,
    pub author: Option<Attribution>,
    pub publication: Option<Attribution>,
    pub og: OpenGraph,
    pub twitter: TwitterCard,
    pub linked_data: Option<LinkedData>,
}

impl MetadataRecord {
    /// Serializes the record as compact JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Serializes the record as indented JSON.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
