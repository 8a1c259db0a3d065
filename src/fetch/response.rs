//! HTTP response validation.

use futures::StreamExt;
use log::debug;

use crate::config::MAX_RESPONSE_BODY_SIZE;
use crate::error_handling::{classify_reqwest_error, FetchError};

/// Content types the resolver accepts. Anything else is rejected before parsing.
const HTML_CONTENT_TYPES: &[&str] = &["text/html", "application/xhtml+xml"];

/// An HTML page retrieved for resolution.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL after redirects; used as the source URL for resolution.
    pub final_url: String,
    pub status: u16,
    pub body: String,
}

/// Validates a response and reads its body as HTML text.
///
/// Non-success statuses, non-HTML content types, bodies over
/// `MAX_RESPONSE_BODY_SIZE` and empty bodies are all errors. A missing
/// `Content-Type` header is tolerated since some servers omit it.
///
/// The body is streamed and the read is abandoned as soon as it passes the
/// cap, whether or not the server sent `Content-Length`.
pub(crate) async fn read_html_response(response: reqwest::Response) -> Result<FetchedPage, FetchError> {
    let final_url = response.url().to_string();
    let status = response.status();
    debug!("Final url after redirects: {final_url} ({status})");

    if !status.is_success() {
        return Err(FetchError::HttpStatus(status.as_u16()));
    }

    if let Some(ct) = response.headers().get(reqwest::header::CONTENT_TYPE) {
        let ct = ct.to_str().unwrap_or("").to_lowercase();
        if !is_html_content_type(&ct) {
            log::info!("Skipping {final_url} - non-HTML content-type: {ct}");
            return Err(FetchError::UnsupportedContentType(ct));
        }
    } else {
        debug!("No Content-Type header for {final_url}, continuing anyway");
    }

    if let Some(length) = response.content_length() {
        let length = usize::try_from(length).unwrap_or(usize::MAX);
        if length > MAX_RESPONSE_BODY_SIZE {
            return Err(FetchError::BodyTooLarge(length));
        }
    }

    let bytes = read_body_with_limit(response, MAX_RESPONSE_BODY_SIZE).await?;
    let body = String::from_utf8_lossy(&bytes).into_owned();
    if body.trim().is_empty() {
        log::info!("Skipping {final_url} - empty response body");
        return Err(FetchError::EmptyBody);
    }

    debug!("Body length for {final_url}: {} bytes", body.len());

    Ok(FetchedPage {
        final_url,
        status: status.as_u16(),
        body,
    })
}

/// Collects the body chunk by chunk, failing once it would exceed `max_size`.
async fn read_body_with_limit(
    response: reqwest::Response,
    max_size: usize,
) -> Result<Vec<u8>, FetchError> {
    let mut stream = response.bytes_stream();
    let mut buf = Vec::with_capacity(max_size.min(64 * 1024));

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(classify_reqwest_error)?;
        if buf.len() + chunk.len() > max_size {
            debug!(
                "Body exceeds {} bytes (aborting at {} bytes)",
                max_size,
                buf.len() + chunk.len()
            );
            return Err(FetchError::BodyTooLarge(buf.len() + chunk.len()));
        }
        buf.extend_from_slice(&chunk);
    }

    Ok(buf)
}

fn is_html_content_type(content_type: &str) -> bool {
    let mime = content_type.split(';').next().unwrap_or("").trim();
    HTML_CONTENT_TYPES.contains(&mime)
}
