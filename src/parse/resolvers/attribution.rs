//! Author and publication resolution.

use super::{first_match, non_blank, ResolveContext, Step};
use crate::parse::linked_data::GraphNode;
use crate::parse::record::Attribution;
use crate::parse::sources::meta_by_name;

const TWITTER_PROFILE_BASE: &str = "https://twitter.com/";

/// A declared name, unless it is blank.
fn named(name: Option<&str>) -> Option<&str> {
    name.filter(|n| !n.trim().is_empty())
}

fn linked_data_author(ctx: &ResolveContext<'_>) -> Option<Attribution> {
    let author = ctx.linked_data?.first_author()?;
    let name = named(author.name())?;
    Some(Attribution::new(name, author.url().map(str::to_string)))
}

/// Graph heuristic: the first `Person` node with a name.
fn graph_person(ctx: &ResolveContext<'_>) -> Option<Attribution> {
    let name = ctx.linked_data?.graph_nodes().find_map(|node| match node {
        GraphNode::Person { name } => named(name.as_deref()),
        _ => None,
    })?;
    Some(Attribution::new(name, None))
}

fn twitter_creator(ctx: &ResolveContext<'_>) -> Option<Attribution> {
    let handle = non_blank(meta_by_name(ctx.document, "twitter:creator"))?;
    let url = twitter_profile_url(&handle);
    Some(Attribution::new(handle, Some(url)))
}

const AUTHOR_STEPS: &[Step<Attribution>] = &[linked_data_author, graph_person, twitter_creator];

/// Resolves the author: JSON-LD `author`, a `Person` graph node, then
/// `twitter:creator`.
pub fn resolve_author(ctx: &ResolveContext<'_>) -> Option<Attribution> {
    first_match(ctx, AUTHOR_STEPS)
}

/// Builds a profile URL from a `twitter:creator` handle.
///
/// Exactly one leading character is dropped, which is the `@` for
/// well-formed handles. Handles without the `@` lose their first letter.
pub fn twitter_profile_url(handle: &str) -> String {
    let mut chars = handle.chars();
    chars.next();
    format!("{}{}", TWITTER_PROFILE_BASE, chars.as_str())
}

fn linked_data_publisher(ctx: &ResolveContext<'_>) -> Option<Attribution> {
    let publisher = ctx.linked_data?.publisher.as_ref()?;
    let name = named(publisher.name.as_deref())?;
    Some(Attribution::new(name, publisher.url.clone()))
}

/// Graph heuristic: the first `WebSite` node (any casing) with a name.
fn graph_website(ctx: &ResolveContext<'_>) -> Option<Attribution> {
    let (name, url) = ctx.linked_data?.graph_nodes().find_map(|node| match node {
        GraphNode::WebSite { name, url, .. } => Some((named(name.as_deref())?, url)),
        _ => None,
    })?;
    Some(Attribution::new(name, url.clone()))
}

const PUBLICATION_STEPS: &[Step<Attribution>] = &[linked_data_publisher, graph_website];

/// Resolves the publication: JSON-LD `publisher`, then a `WebSite` graph node.
pub fn resolve_publication(ctx: &ResolveContext<'_>) -> Option<Attribution> {
    first_match(ctx, PUBLICATION_STEPS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::linked_data::parse_linked_data;
    use scraper::Html;

    fn with_ctx<T>(
        html: &str,
        linked_data: Option<&str>,
        resolve: fn(&ResolveContext<'_>) -> T,
    ) -> T {
        let document = Html::parse_document(html);
        let data = linked_data.and_then(parse_linked_data);
        resolve(&ResolveContext::new(
            &document,
            data.as_ref(),
            "https://example.com/post",
        ))
    }

    const TWITTER_GRACE: &str = r#"<meta name="twitter:creator" content="@grace">"#;

    #[test]
    fn test_linked_data_author_wins_over_twitter() {
        let author = with_ctx(
            TWITTER_GRACE,
            Some(r#"{"author": {"name": "Ada", "url": "https://ada.example"}}"#),
            resolve_author,
        );
        assert_eq!(
            author,
            Some(Attribution::new("Ada", Some("https://ada.example".to_string())))
        );
    }

    #[test]
    fn test_linked_data_author_without_url() {
        let author = with_ctx("", Some(r#"{"author": {"name": "Ada"}}"#), resolve_author);
        assert_eq!(author, Some(Attribution::new("Ada", None)));
    }

    #[test]
    fn test_graph_person_bare_and_sequence_type() {
        let bare = with_ctx(
            TWITTER_GRACE,
            Some(r#"{"@graph": [{"@type": "Person", "name": "Chris"}]}"#),
            resolve_author,
        );
        let seq = with_ctx(
            TWITTER_GRACE,
            Some(r#"{"@graph": [{"@type": ["Person"], "name": "Chris"}]}"#),
            resolve_author,
        );
        assert_eq!(bare, Some(Attribution::new("Chris", None)));
        assert_eq!(bare, seq);
    }

    #[test]
    fn test_unnamed_graph_person_falls_through() {
        let author = with_ctx(
            TWITTER_GRACE,
            Some(r#"{"@graph": [{"@type": "Person"}]}"#),
            resolve_author,
        );
        assert_eq!(author.map(|a| a.name), Some("@grace".to_string()));
    }

    #[test]
    fn test_twitter_creator_url() {
        let author = with_ctx(TWITTER_GRACE, None, resolve_author);
        assert_eq!(
            author,
            Some(Attribution::new(
                "@grace",
                Some("https://twitter.com/grace".to_string())
            ))
        );
    }

    #[test]
    fn test_no_author() {
        assert_eq!(with_ctx("<html></html>", None, resolve_author), None);
    }

    #[test]
    fn test_twitter_profile_url_drops_one_character() {
        assert_eq!(twitter_profile_url("@grace"), "https://twitter.com/grace");
        assert_eq!(twitter_profile_url("grace"), "https://twitter.com/race");
        assert_eq!(twitter_profile_url("@"), "https://twitter.com/");
    }

    #[test]
    fn test_linked_data_publisher() {
        let publication = with_ctx(
            "",
            Some(r#"{"publisher": {"@type": "Organization", "name": "Daily", "url": "https://daily.example"}}"#),
            resolve_publication,
        );
        assert_eq!(
            publication,
            Some(Attribution::new("Daily", Some("https://daily.example".to_string())))
        );
    }

    #[test]
    fn test_graph_website_any_case() {
        for type_name in ["WebSite", "website"] {
            let json = format!(
                r#"{{"@graph": [
                    {{"@type": "Organization", "name": "Org"}},
                    {{"@type": "{}", "name": "CSS-Tricks", "url": "https://css-tricks.com/"}}
                ]}}"#,
                type_name
            );
            let publication = with_ctx("", Some(json.as_str()), resolve_publication);
            assert_eq!(
                publication,
                Some(Attribution::new(
                    "CSS-Tricks",
                    Some("https://css-tricks.com/".to_string())
                )),
                "type {}",
                type_name
            );
        }
    }

    #[test]
    fn test_publisher_wins_over_graph() {
        let publication = with_ctx(
            "",
            Some(r#"{"publisher": {"name": "P"}, "@graph": [{"@type": "WebSite", "name": "W"}]}"#),
            resolve_publication,
        );
        assert_eq!(publication.map(|p| p.name), Some("P".to_string()));
    }

    #[test]
    fn test_no_publication() {
        assert_eq!(
            with_ctx("", Some(r#"{"name": "x"}"#), resolve_publication),
            None
        );
    }
}
