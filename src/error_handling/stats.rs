//! Request outcome statistics for the HTTP endpoint.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use strum::IntoEnumIterator;

use super::types::ErrorType;

/// Thread-safe counters of served and failed metadata requests.
///
/// Every `ErrorType` gets a counter at construction, so increments never
/// allocate. Shared across handlers behind an `Arc`.
pub struct ProcessingStats {
    succeeded: AtomicUsize,
    errors: HashMap<ErrorType, AtomicUsize>,
}

impl ProcessingStats {
    pub fn new() -> Self {
        let errors = ErrorType::iter()
            .map(|error| (error, AtomicUsize::new(0)))
            .collect();
        ProcessingStats {
            succeeded: AtomicUsize::new(0),
            errors,
        }
    }

    pub fn increment_success(&self) {
        self.succeeded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_error(&self, error: ErrorType) {
        if let Some(counter) = self.errors.get(&error) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!("No counter registered for {:?}", error);
        }
    }

    pub fn success_count(&self) -> usize {
        self.succeeded.load(Ordering::SeqCst)
    }

    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors
            .get(&error)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    pub fn total_errors(&self) -> usize {
        ErrorType::iter().map(|e| self.get_error_count(e)).sum()
    }

    /// Total requests seen, successful or not.
    pub fn total_requests(&self) -> usize {
        self.success_count() + self.total_errors()
    }

    /// Non-zero error counters keyed by `ErrorType::key`.
    pub fn error_breakdown(&self) -> HashMap<&'static str, usize> {
        ErrorType::iter()
            .map(|e| (e.key(), self.get_error_count(e)))
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}
