use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::models::AuthorizationOutcome;

#[derive(Default)]
pub struct CheckoutMetrics {
    attempts: AtomicU64,
    approved: AtomicU64,
    declined: AtomicU64,
    validation_failed: AtomicU64,
    processor_unavailable: AtomicU64,
    transport_errors: AtomicU64,
    recording_failed: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub attempts: u64,
    pub approved: u64,
    pub declined: u64,
    pub validation_failed: u64,
    pub processor_unavailable: u64,
    pub transport_errors: u64,
    pub recording_failed: u64,
}

impl CheckoutMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, outcome: &AuthorizationOutcome) {
        self.attempts.fetch_add(1, Ordering::Relaxed);
        let counter = match outcome {
            AuthorizationOutcome::Approved { .. } => &self.approved,
            AuthorizationOutcome::Declined { .. } => &self.declined,
            AuthorizationOutcome::ValidationFailed { .. } => &self.validation_failed,
            AuthorizationOutcome::ProcessorUnavailable => &self.processor_unavailable,
            AuthorizationOutcome::TransportError => &self.transport_errors,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_recording_failed(&self) {
        self.recording_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            attempts: self.attempts.load(Ordering::Relaxed),
            approved: self.approved.load(Ordering::Relaxed),
            declined: self.declined.load(Ordering::Relaxed),
            validation_failed: self.validation_failed.load(Ordering::Relaxed),
            processor_unavailable: self.processor_unavailable.load(Ordering::Relaxed),
            transport_errors: self.transport_errors.load(Ordering::Relaxed),
            recording_failed: self.recording_failed.load(Ordering::Relaxed),
        }
    }
}
