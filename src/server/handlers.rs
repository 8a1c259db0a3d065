//! HTTP endpoint handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::types::{ApiQuery, AppState, ErrorResponse, StatusResponse};
use crate::app::validate_and_normalize_url;
use crate::error_handling::FetchError;
use crate::fetch::extract_metadata;

/// `GET /api?url=<url>`: fetches the page and returns its metadata record.
pub async fn metadata_handler(
    State(state): State<AppState>,
    Query(query): Query<ApiQuery>,
) -> Response {
    let Some(url) = query.url.as_deref().and_then(validate_and_normalize_url) else {
        return error_response(&state, FetchError::InvalidUrl);
    };

    match extract_metadata(&state.client, &url).await {
        Ok(record) => {
            state.stats.increment_success();
            log::info!("Resolved metadata for {url}");
            Json(record).into_response()
        }
        Err(e) => error_response(&state, e),
    }
}

fn error_response(state: &AppState, error: FetchError) -> Response {
    state.stats.increment_error(error.error_type());
    let status = error.status_code();
    if status.is_server_error() {
        log::warn!("Metadata request failed: {error}");
    } else {
        log::debug!("Metadata request rejected: {error}");
    }
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}

/// `GET /health`
pub async fn health_handler() -> &'static str {
    "ok"
}

/// `GET /status`: request counters since start-up.
pub async fn status_handler(State(state): State<AppState>) -> Response {
    let response = StatusResponse {
        uptime_seconds: state.start_time.elapsed().as_secs_f64(),
        total_requests: state.stats.total_requests(),
        succeeded: state.stats.success_count(),
        failed: state.stats.total_errors(),
        errors: state.stats.error_breakdown(),
    };
    (StatusCode::OK, Json(response)).into_response()
}
