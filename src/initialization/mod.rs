//! Application initialization and resource setup.
//!
//! - Logger (`env_logger`, plain or JSON)
//! - Shared HTTP client

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
