//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Failures while retrieving a page for resolution.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The URL is malformed, too long or not http(s).
    #[error("Invalid URL")]
    InvalidUrl,

    /// The request did not complete in time.
    #[error("Request timed out: {0}")]
    Timeout(#[source] ReqwestError),

    /// Any other transport-level failure.
    #[error("Request failed: {0}")]
    Request(#[from] ReqwestError),

    /// The server answered with a non-success status.
    #[error("Upstream responded with HTTP {0}")]
    HttpStatus(u16),

    /// The response is not an HTML document.
    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),

    /// The response body exceeds the configured cap.
    #[error("Response body too large: {0} bytes")]
    BodyTooLarge(usize),

    /// The response body is empty.
    #[error("Empty response body")]
    EmptyBody,
}

/// A date-bearing metadata value that no supported layout matches.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    #[error("unrecognized timestamp '{0}'")]
    Unrecognized(String),
}

/// Outcome categories counted by the HTTP endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    InvalidUrl,
    HttpRequestTimeoutError,
    HttpRequestConnectError,
    HttpRequestOtherError,
    HttpStatusError,
    UnsupportedContentType,
    BodyTooLarge,
    EmptyBody,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::InvalidUrl => "Invalid URL",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::HttpStatusError => "Upstream HTTP status error",
            ErrorType::UnsupportedContentType => "Unsupported content type",
            ErrorType::BodyTooLarge => "Response body too large",
            ErrorType::EmptyBody => "Empty response body",
        }
    }

    /// Snake-case key used in JSON status output.
    pub fn key(&self) -> &'static str {
        match self {
            ErrorType::InvalidUrl => "invalid_url",
            ErrorType::HttpRequestTimeoutError => "timeout",
            ErrorType::HttpRequestConnectError => "connection_error",
            ErrorType::HttpRequestOtherError => "request_error",
            ErrorType::HttpStatusError => "http_error",
            ErrorType::UnsupportedContentType => "unsupported_content_type",
            ErrorType::BodyTooLarge => "body_too_large",
            ErrorType::EmptyBody => "empty_body",
        }
    }
}
