//! Created, published and modified date resolution.
//!
//! Each chain picks the first source that is present, then parses it. A value
//! that fails to parse leaves the field empty rather than falling back to the
//! next source.

use chrono::{DateTime, Utc};

use super::{first_match, non_blank, ResolveContext, Step};
use crate::parse::dates::parse_field;
use crate::parse::sources::meta_by_property;

fn og_published_time(ctx: &ResolveContext<'_>) -> Option<String> {
    non_blank(meta_by_property(ctx.document, "article:published_time"))
}

fn og_modified_time(ctx: &ResolveContext<'_>) -> Option<String> {
    non_blank(meta_by_property(ctx.document, "article:modified_time"))
}

fn linked_data_date_published(ctx: &ResolveContext<'_>) -> Option<String> {
    non_blank(ctx.linked_data?.date_published.clone())
}

fn linked_data_date_modified(ctx: &ResolveContext<'_>) -> Option<String> {
    non_blank(ctx.linked_data?.date_modified.clone())
}

fn linked_data_date_created(ctx: &ResolveContext<'_>) -> Option<String> {
    non_blank(ctx.linked_data?.date_created.clone())
}

const PUBLISHED_STEPS: &[Step<String>] = &[og_published_time, linked_data_date_published];
const MODIFIED_STEPS: &[Step<String>] = &[og_modified_time, linked_data_date_modified];
// OpenGraph has no creation time.
const CREATED_STEPS: &[Step<String>] = &[linked_data_date_created];

pub fn resolve_published_date(ctx: &ResolveContext<'_>) -> Option<DateTime<Utc>> {
    parse_field("publishedDate", &first_match(ctx, PUBLISHED_STEPS)?)
}

pub fn resolve_modified_date(ctx: &ResolveContext<'_>) -> Option<DateTime<Utc>> {
    parse_field("modifiedDate", &first_match(ctx, MODIFIED_STEPS)?)
}

pub fn resolve_created_date(ctx: &ResolveContext<'_>) -> Option<DateTime<Utc>> {
    parse_field("createdDate", &first_match(ctx, CREATED_STEPS)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::linked_data::parse_linked_data;
    use chrono::TimeZone;
    use scraper::Html;

    struct Dates {
        created: Option<DateTime<Utc>>,
        published: Option<DateTime<Utc>>,
        modified: Option<DateTime<Utc>>,
    }

    fn dates_of(html: &str, linked_data: Option<&str>) -> Dates {
        let document = Html::parse_document(html);
        let data = linked_data.and_then(parse_linked_data);
        let ctx = ResolveContext::new(&document, data.as_ref(), "https://example.com");
        Dates {
            created: resolve_created_date(&ctx),
            published: resolve_published_date(&ctx),
            modified: resolve_modified_date(&ctx),
        }
    }

    fn day(y: i32, m: u32, d: u32) -> Option<DateTime<Utc>> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).single()
    }

    #[test]
    fn test_og_times_precede_linked_data() {
        let dates = dates_of(
            r#"<meta property="article:published_time" content="2020-01-01T00:00:00Z">
               <meta property="article:modified_time" content="2020-02-01T00:00:00Z">"#,
            Some(r#"{"datePublished": "2019-01-01", "dateModified": "2019-02-01", "dateCreated": "2018-01-01"}"#),
        );
        assert_eq!(dates.published, day(2020, 1, 1));
        assert_eq!(dates.modified, day(2020, 2, 1));
        assert_eq!(dates.created, day(2018, 1, 1));
    }

    #[test]
    fn test_linked_data_dates_as_fallback() {
        let dates = dates_of(
            "",
            Some(r#"{"datePublished": "2019-01-01", "dateModified": "2019-02-01"}"#),
        );
        assert_eq!(dates.published, day(2019, 1, 1));
        assert_eq!(dates.modified, day(2019, 2, 1));
        assert_eq!(dates.created, None);
    }

    #[test]
    fn test_unparsable_date_only_blanks_its_field() {
        let dates = dates_of(
            r#"<meta property="article:published_time" content="last tuesday">"#,
            Some(r#"{"datePublished": "2019-01-01", "dateModified": "2019-02-01"}"#),
        );
        assert_eq!(dates.published, None);
        assert_eq!(dates.modified, day(2019, 2, 1));
    }

    #[test]
    fn test_no_dates() {
        let dates = dates_of("<html></html>", None);
        assert!(dates.created.is_none());
        assert!(dates.published.is_none());
        assert!(dates.modified.is_none());
    }
}
