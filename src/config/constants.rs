//! Configuration constants.
//!
//! Timeouts, size limits and other operational parameters shared by the
//! fetcher, the HTTP endpoint and the CLI.

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag or the
/// `OGE_USER_AGENT` environment variable.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

// Response and body size limits
/// Maximum response body size in bytes (2MB)
/// Responses larger than this are rejected before parsing
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;

/// Maximum accepted URL length in characters
pub const MAX_URL_LENGTH: usize = 2048;

// Redirect handling
/// Maximum number of redirect hops to follow
pub const MAX_REDIRECT_HOPS: usize = 10;

// Retry strategy
/// Initial delay in milliseconds before first retry
pub const RETRY_INITIAL_DELAY_MS: u64 = 500;
/// Factor by which retry delay is multiplied on each attempt
pub const RETRY_FACTOR: u64 = 2;
/// Maximum delay between retries in seconds
pub const RETRY_MAX_DELAY_SECS: u64 = 15;
/// Maximum number of retries after the initial attempt
pub const RETRY_MAX_ATTEMPTS: usize = 2;

// HTTP endpoint
/// Address the HTTP endpoint binds to
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
/// Port the HTTP endpoint listens on
pub const DEFAULT_PORT: u16 = 3000;

/// Maximum number of URLs resolved concurrently by the CLI
pub const DEFAULT_MAX_CONCURRENCY: usize = 8;

// HTTP status codes (for clarity and consistency)
pub const HTTP_STATUS_TOO_MANY_REQUESTS: u16 = 429;
