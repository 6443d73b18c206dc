//! Prometheus Metrics Module
//!
//! # Metrics
//!
//! - `payment_service_rpc_requests_total{method}`
//! - `payment_service_rpc_errors_total{method, code}`
//! - `payment_service_rpc_duration_seconds{method}`
//! - `payment_service_payments_total{operation, outcome}`
//!
//! Metrics are exposed at `/metrics` on the health server port.

use std::sync::OnceLock;
use std::time::Duration;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

// =============================================================================
// Global Metrics Handle
// =============================================================================

static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Error type for metrics setup.
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    /// Failed to install the Prometheus recorder.
    #[error("metrics installation error: {0}")]
    Installation(String),
}

/// Install the Prometheus recorder. Later calls return the existing handle.
///
/// # Errors
///
/// Returns `MetricsError::Installation` if another global recorder is
/// already installed.
pub fn init_metrics() -> Result<PrometheusHandle, MetricsError> {
    if let Some(handle) = PROMETHEUS_HANDLE.get() {
        return Ok(handle.clone());
    }
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| MetricsError::Installation(e.to_string()))?;
    register_metrics();
    Ok(PROMETHEUS_HANDLE.get_or_init(|| handle).clone())
}

/// Get the Prometheus handle for rendering metrics.
///
/// Returns `None` if metrics have not been initialized.
#[must_use]
pub fn get_metrics_handle() -> Option<PrometheusHandle> {
    PROMETHEUS_HANDLE.get().cloned()
}

// =============================================================================
// Metric Registration
// =============================================================================

fn register_metrics() {
    describe_counter!(
        "payment_service_rpc_requests_total",
        "Total gRPC requests by method"
    );
    describe_counter!(
        "payment_service_rpc_errors_total",
        "Total gRPC requests that returned a non-OK status"
    );
    describe_histogram!(
        "payment_service_rpc_duration_seconds",
        "gRPC handler latency"
    );
    describe_counter!(
        "payment_service_payments_total",
        "Charge and refund attempts by outcome"
    );
}

// =============================================================================
// Metric Recording Functions
// =============================================================================

/// Money-moving operation.
#[derive(Debug, Clone, Copy)]
pub enum PaymentOperation {
    /// Charge through the gateway.
    Charge,
    /// Refund through the gateway.
    Refund,
}

impl PaymentOperation {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Charge => "charge",
            Self::Refund => "refund",
        }
    }
}

/// Result of a money-moving operation.
#[derive(Debug, Clone, Copy)]
pub enum PaymentOutcome {
    /// Gateway approved.
    Approved,
    /// Gateway declined.
    Declined,
    /// Request failed before or at the gateway.
    Error,
}

impl PaymentOutcome {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Declined => "declined",
            Self::Error => "error",
        }
    }
}

/// Record one handled RPC. `error_code` is `None` for OK responses.
pub fn record_rpc(method: &'static str, error_code: Option<tonic::Code>, duration: Duration) {
    counter!("payment_service_rpc_requests_total", "method" => method).increment(1);
    if let Some(code) = error_code {
        counter!(
            "payment_service_rpc_errors_total",
            "method" => method,
            "code" => format!("{code:?}")
        )
        .increment(1);
    }
    histogram!("payment_service_rpc_duration_seconds", "method" => method)
        .record(duration.as_secs_f64());
}

/// Record a charge or refund attempt.
pub fn record_payment(operation: PaymentOperation, outcome: PaymentOutcome) {
    counter!(
        "payment_service_payments_total",
        "operation" => operation.as_str(),
        "outcome" => outcome.as_str()
    )
    .increment(1);
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_values() {
        assert_eq!(PaymentOperation::Charge.as_str(), "charge");
        assert_eq!(PaymentOperation::Refund.as_str(), "refund");
        assert_eq!(PaymentOutcome::Approved.as_str(), "approved");
        assert_eq!(PaymentOutcome::Declined.as_str(), "declined");
        assert_eq!(PaymentOutcome::Error.as_str(), "error");
    }

    #[test]
    fn recording_without_recorder_is_a_no_op() {
        record_rpc("GetPayment", None, Duration::from_millis(3));
        record_rpc("GetPayment", Some(tonic::Code::NotFound), Duration::from_millis(1));
        record_payment(PaymentOperation::Charge, PaymentOutcome::Approved);
    }
}
