//! HTTP endpoint data structures.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error_handling::ProcessingStats;

/// Shared state for the HTTP endpoint
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<reqwest::Client>,
    pub stats: Arc<ProcessingStats>,
    pub start_time: Arc<Instant>,
}

impl AppState {
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        Self {
            client,
            stats: Arc::new(ProcessingStats::new()),
            start_time: Arc::new(Instant::now()),
        }
    }
}

/// Query string of `GET /api`
#[derive(Debug, Deserialize)]
pub struct ApiQuery {
    pub url: Option<String>,
}

/// JSON body returned for any failed `/api` request
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// JSON response for `/status`
#[derive(Serialize)]
pub struct StatusResponse {
    pub uptime_seconds: f64,
    pub total_requests: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub errors: HashMap<&'static str, usize>,
}
