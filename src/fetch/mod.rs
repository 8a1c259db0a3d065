//! Page retrieval.
//!
//! Fetches a URL with the shared `reqwest::Client`, enforces the HTML-only
//! and body-size rules, and hands the body to the resolution engine.

mod request;
mod response;

pub use request::{extract_metadata, fetch_document};
pub use response::FetchedPage;
