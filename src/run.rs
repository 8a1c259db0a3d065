//! Batch resolution of the URLs given on the command line.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use log::info;

use crate::config::Config;
use crate::error_handling::FetchError;
use crate::fetch::extract_metadata;
use crate::initialization::init_client;
use crate::parse::MetadataRecord;

/// Outcome for one requested URL.
#[derive(Debug)]
pub struct UrlOutcome {
    /// The URL as given by the caller
    pub url: String,
    /// The resolved record, or why the page could not be fetched
    pub result: Result<MetadataRecord, FetchError>,
}

/// Summary of a batch run.
#[derive(Debug)]
pub struct BatchReport {
    /// Outcomes in the same order as the input URLs
    pub outcomes: Vec<UrlOutcome>,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

impl BatchReport {
    /// Number of URLs resolved successfully.
    pub fn successful(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    /// Number of URLs that failed.
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.successful()
    }
}

/// Resolves every URL in `urls`, at most `config.max_concurrency` at a time.
///
/// Individual failures are reported per URL; only client set-up errors fail
/// the whole batch.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub async fn resolve_urls(config: &Config, urls: &[String]) -> Result<BatchReport> {
    let start = Instant::now();
    let client = init_client(config).context("Failed to initialize HTTP client")?;

    let outcomes: Vec<UrlOutcome> = stream::iter(urls.iter().cloned())
        .map(|url| {
            let client = Arc::clone(&client);
            async move {
                let result = extract_metadata(&client, &url).await;
                UrlOutcome { url, result }
            }
        })
        .buffered(config.max_concurrency.max(1))
        .collect()
        .await;

    let report = BatchReport {
        outcomes,
        elapsed_seconds: start.elapsed().as_secs_f64(),
    };
    info!(
        "Resolved {} URL{} ({} succeeded, {} failed) in {:.1}s",
        report.outcomes.len(),
        if report.outcomes.len() == 1 { "" } else { "s" },
        report.successful(),
        report.failed(),
        report.elapsed_seconds
    );
    Ok(report)
}
