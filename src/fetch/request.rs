//! Page retrieval with retries, and the fetch-then-resolve convenience.

use std::sync::Arc;

use log::{debug, warn};
use scraper::Html;

use super::response::{read_html_response, FetchedPage};
use crate::app::validate_and_normalize_url;
use crate::error_handling::{classify_reqwest_error, get_retry_strategy, FetchError};
use crate::parse::{resolve, MetadataRecord};

/// Fetches `url` as an HTML document.
///
/// The URL is normalized first (an `https://` prefix is added when no scheme
/// is given). Transient failures (timeouts, connection errors, 429, 5xx) are
/// retried with exponential backoff; everything else fails immediately.
///
/// # Errors
///
/// Returns `FetchError::InvalidUrl` for unusable URLs and the last attempt's
/// error otherwise.
pub async fn fetch_document(client: &reqwest::Client, url: &str) -> Result<FetchedPage, FetchError> {
    let url: Arc<str> = validate_and_normalize_url(url)
        .ok_or(FetchError::InvalidUrl)?
        .into();

    let result = tokio_retry::RetryIf::spawn(
        get_retry_strategy(),
        || {
            let url = Arc::clone(&url);
            async move { fetch_once(client, url.as_ref()).await }
        },
        |e: &FetchError| {
            let retry = e.is_retriable();
            if retry {
                debug!("Retrying {}: {e}", url.as_ref());
            }
            retry
        },
    )
    .await;

    if let Err(e) = &result {
        warn!("Failed to fetch {}: {e}", url.as_ref());
    }
    result
}

async fn fetch_once(client: &reqwest::Client, url: &str) -> Result<FetchedPage, FetchError> {
    let response = client
        .get(url)
        .header(reqwest::header::ACCEPT, "text/html,application/xhtml+xml")
        .send()
        .await
        .map_err(classify_reqwest_error)?;
    read_html_response(response).await
}

/// Fetches `url` and resolves its metadata.
///
/// The final URL after redirects is used as the source URL, so site
/// heuristics see where the page actually lives.
///
/// # Errors
///
/// Any `FetchError` from [`fetch_document`]. Resolution itself never fails.
pub async fn extract_metadata(client: &reqwest::Client, url: &str) -> Result<MetadataRecord, FetchError> {
    let page = fetch_document(client, url).await?;
    // Html is not Send; parse and drop it without crossing an await
    let record = {
        let document = Html::parse_document(&page.body);
        resolve(&document, &page.final_url)
    };
    Ok(record)
}
