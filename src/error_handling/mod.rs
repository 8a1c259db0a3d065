//! Error handling and request statistics.
//!
//! This module provides:
//! - Error type definitions (`thiserror`)
//! - Mapping of fetch failures to retry decisions and HTTP status codes
//! - Retry strategy configuration
//! - Per-outcome request counters for the HTTP endpoint

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{classify_reqwest_error, get_retry_strategy};
pub use stats::ProcessingStats;
pub use types::{DateParseError, ErrorType, FetchError, InitializationError};
