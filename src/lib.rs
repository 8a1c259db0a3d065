//! oge library: canonical page metadata resolution
//!
//! Reconciles HTML head fields, OpenGraph, Twitter Card and JSON-LD data into
//! one [`MetadataRecord`] per page. The engine itself is synchronous and
//! pure; fetching and serving live around it.
//!
//! # Example
//!
//! ```no_run
//! use oge::{extract_metadata, resolve_html};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let record = resolve_html(
//!     r#"<html lang="fr"><head><meta property="og:title" content="Bonjour"></head></html>"#,
//!     "https://example.fr/",
//! );
//! assert_eq!(record.title, "Bonjour");
//!
//! let client = reqwest::Client::new();
//! let record = extract_metadata(&client, "https://example.com/").await?;
//! println!("{}", record.to_json_pretty());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! [`resolve`] and [`resolve_html`] need no runtime. Fetching requires a
//! Tokio runtime.

mod app;
pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
mod parse;
mod run;
pub mod server;
mod utils;

// Re-export public API
pub use app::validate_and_normalize_url;
pub use config::{Config, LogFormat, LogLevel, Opt};
pub use error_handling::{DateParseError, FetchError, InitializationError};
pub use fetch::{extract_metadata, fetch_document, FetchedPage};
pub use parse::*;
pub use run::{resolve_urls, BatchReport, UrlOutcome};
