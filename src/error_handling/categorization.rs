//! Error categorization and retry strategy.

use std::time::Duration;

use axum::http::StatusCode;
use tokio_retry::strategy::ExponentialBackoff;

use super::types::{ErrorType, FetchError};

/// Creates the exponential backoff used when fetching pages.
///
/// Starts at `RETRY_INITIAL_DELAY_MS`, multiplies by `RETRY_FACTOR`, caps each
/// delay at `RETRY_MAX_DELAY_SECS` and yields at most `RETRY_MAX_ATTEMPTS`
/// delays.
///
/// `ExponentialBackoff` yields `base^n * factor` milliseconds, so the growth
/// rate goes in as the base and the initial delay is divided by it.
pub fn get_retry_strategy() -> impl Iterator<Item = Duration> {
    ExponentialBackoff::from_millis(crate::config::RETRY_FACTOR)
        .factor(crate::config::RETRY_INITIAL_DELAY_MS / crate::config::RETRY_FACTOR)
        .max_delay(Duration::from_secs(crate::config::RETRY_MAX_DELAY_SECS))
        .take(crate::config::RETRY_MAX_ATTEMPTS)
}

/// Converts a `reqwest::Error` into a `FetchError`, separating timeouts.
pub fn classify_reqwest_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout(error)
    } else if let Some(status) = error.status() {
        FetchError::HttpStatus(status.as_u16())
    } else {
        FetchError::Request(error)
    }
}

impl FetchError {
    /// Whether retrying the same request might succeed.
    ///
    /// Timeouts, connection failures, 429 and 5xx responses are transient;
    /// everything else is permanent.
    pub fn is_retriable(&self) -> bool {
        match self {
            FetchError::Timeout(_) => true,
            FetchError::Request(e) => e.is_connect() || e.is_request(),
            FetchError::HttpStatus(code) => {
                *code == crate::config::HTTP_STATUS_TOO_MANY_REQUESTS || (500..600).contains(code)
            }
            FetchError::InvalidUrl
            | FetchError::UnsupportedContentType(_)
            | FetchError::BodyTooLarge(_)
            | FetchError::EmptyBody => false,
        }
    }

    /// The counter this failure is recorded under.
    pub fn error_type(&self) -> ErrorType {
        match self {
            FetchError::InvalidUrl => ErrorType::InvalidUrl,
            FetchError::Timeout(_) => ErrorType::HttpRequestTimeoutError,
            FetchError::Request(e) if e.is_connect() => ErrorType::HttpRequestConnectError,
            FetchError::Request(_) => ErrorType::HttpRequestOtherError,
            FetchError::HttpStatus(_) => ErrorType::HttpStatusError,
            FetchError::UnsupportedContentType(_) => ErrorType::UnsupportedContentType,
            FetchError::BodyTooLarge(_) => ErrorType::BodyTooLarge,
            FetchError::EmptyBody => ErrorType::EmptyBody,
        }
    }

    /// HTTP status the metadata endpoint answers with for this failure.
    pub fn status_code(&self) -> StatusCode {
        match self {
            FetchError::InvalidUrl => StatusCode::BAD_REQUEST,
            FetchError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            FetchError::UnsupportedContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            FetchError::BodyTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            FetchError::Request(_) | FetchError::HttpStatus(_) | FetchError::EmptyBody => {
                StatusCode::BAD_GATEWAY
            }
        }
    }
}
