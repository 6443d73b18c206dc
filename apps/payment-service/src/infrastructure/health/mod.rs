//! Health Check and Metrics Endpoint
//!
//! # Endpoints
//!
//! - `GET /health` - JSON health status with store sizes
//! - `GET /healthz` - liveness probe (simple OK)
//! - `GET /readyz` - readiness probe (gRPC server accepting requests)
//! - `GET /metrics` - Prometheus metrics in text format

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::infrastructure::gateway::MockGateway;
use crate::infrastructure::metrics::get_metrics_handle;
use crate::infrastructure::persistence::{
    InMemoryPaymentRepository, InMemorySubscriptionRepository,
};

// =============================================================================
// Health Response Types
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: HealthStatus,
    /// Service version.
    pub version: String,
    /// Server uptime in seconds.
    pub uptime_secs: u64,
    /// Current time.
    pub current_time: DateTime<Utc>,
    /// Gateway reachability.
    pub gateway: GatewayInfo,
    /// Stored entity counts.
    pub store: StoreInfo,
}

/// Overall health status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Serving with the gateway reachable.
    Healthy,
    /// Serving, but charges and refunds will fail.
    Degraded,
    /// Not serving yet.
    Unhealthy,
}

/// Gateway status.
#[derive(Debug, Clone, Serialize)]
pub struct GatewayInfo {
    /// Gateway name.
    pub name: &'static str,
    /// Whether the gateway accepts requests.
    pub available: bool,
}

/// In-memory store sizes.
#[derive(Debug, Clone, Serialize)]
pub struct StoreInfo {
    /// Stored payments.
    pub payments: usize,
    /// Stored subscriptions.
    pub subscriptions: usize,
}

// =============================================================================
// Health Server State
// =============================================================================

/// Shared state for the health server.
pub struct HealthServerState {
    version: String,
    started_at: Instant,
    ready: AtomicBool,
    gateway: Arc<MockGateway>,
    payments: Arc<InMemoryPaymentRepository>,
    subscriptions: Arc<InMemorySubscriptionRepository>,
}

impl HealthServerState {
    /// Create new health server state. Starts not ready.
    #[must_use]
    pub fn new(
        version: String,
        gateway: Arc<MockGateway>,
        payments: Arc<InMemoryPaymentRepository>,
        subscriptions: Arc<InMemorySubscriptionRepository>,
    ) -> Self {
        Self {
            version,
            started_at: Instant::now(),
            ready: AtomicBool::new(false),
            gateway,
            payments,
            subscriptions,
        }
    }

    /// Mark the gRPC server as accepting (or no longer accepting) requests.
    pub fn set_ready(&self, ready: bool) {
        self.ready.store(ready, Ordering::SeqCst);
    }

    /// Whether the gRPC server is accepting requests.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }
}

// =============================================================================
// Health Server
// =============================================================================

/// Health check HTTP server.
pub struct HealthServer {
    port: u16,
    state: Arc<HealthServerState>,
    cancel: CancellationToken,
}

impl HealthServer {
    /// Create a new health server.
    #[must_use]
    pub const fn new(port: u16, state: Arc<HealthServerState>, cancel: CancellationToken) -> Self {
        Self {
            port,
            state,
            cancel,
        }
    }

    /// Run the health server until cancelled.
    ///
    /// # Errors
    ///
    /// Returns `HealthServerError` if binding fails or the HTTP server
    /// encounters a fatal error while running.
    pub async fn run(self) -> Result<(), HealthServerError> {
        let app = router(self.state);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| HealthServerError::BindFailed(self.port, e.to_string()))?;

        tracing::info!(port = self.port, "Health server listening");

        axum::serve(listener, app)
            .with_graceful_shutdown(self.cancel.cancelled_owned())
            .await
            .map_err(|e| HealthServerError::ServerFailed(e.to_string()))?;

        tracing::info!("Health server stopped");
        Ok(())
    }
}

/// Routes served by the health server.
pub fn router(state: Arc<HealthServerState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/healthz", get(liveness_handler))
        .route("/readyz", get(readiness_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

// =============================================================================
// HTTP Handlers
// =============================================================================

async fn health_handler(State(state): State<Arc<HealthServerState>>) -> impl IntoResponse {
    let response = build_health_response(&state);
    let status_code = match response.status {
        HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };
    (status_code, Json(response))
}

async fn liveness_handler() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

async fn readiness_handler(State(state): State<Arc<HealthServerState>>) -> impl IntoResponse {
    if state.is_ready() {
        (StatusCode::OK, "READY")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "NOT READY")
    }
}

async fn metrics_handler() -> impl IntoResponse {
    get_metrics_handle().map_or_else(
        || {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                [("content-type", "text/plain")],
                "Metrics not initialized".to_string(),
            )
        },
        |handle| {
            (
                StatusCode::OK,
                [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
                handle.render(),
            )
        },
    )
}

fn build_health_response(state: &HealthServerState) -> HealthResponse {
    let gateway = GatewayInfo {
        name: "mock",
        available: state.gateway.is_available(),
    };
    HealthResponse {
        status: determine_health_status(state.is_ready(), gateway.available),
        version: state.version.clone(),
        uptime_secs: state.started_at.elapsed().as_secs(),
        current_time: Utc::now(),
        gateway,
        store: StoreInfo {
            payments: state.payments.len(),
            subscriptions: state.subscriptions.len(),
        },
    }
}

const fn determine_health_status(ready: bool, gateway_available: bool) -> HealthStatus {
    match (ready, gateway_available) {
        (false, _) => HealthStatus::Unhealthy,
        (true, false) => HealthStatus::Degraded,
        (true, true) => HealthStatus::Healthy,
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Health server errors.
#[derive(Debug, thiserror::Error)]
pub enum HealthServerError {
    /// Failed to bind to port.
    #[error("failed to bind to port {0}: {1}")]
    BindFailed(u16, String),

    /// Server error.
    #[error("server error: {0}")]
    ServerFailed(String),
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    use super::*;

    fn state() -> Arc<HealthServerState> {
        Arc::new(HealthServerState::new(
            "0.1.0".to_string(),
            Arc::new(MockGateway::default()),
            Arc::new(InMemoryPaymentRepository::new()),
            Arc::new(InMemorySubscriptionRepository::new()),
        ))
    }

    async fn get(state: Arc<HealthServerState>, path: &str) -> (StatusCode, String) {
        let response = router(state)
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[test]
    fn status_follows_readiness_and_gateway() {
        assert_eq!(determine_health_status(false, true), HealthStatus::Unhealthy);
        assert_eq!(determine_health_status(true, false), HealthStatus::Degraded);
        assert_eq!(determine_health_status(true, true), HealthStatus::Healthy);
    }

    #[tokio::test]
    async fn readiness_tracks_flag() {
        let state = state();
        assert_eq!(
            get(Arc::clone(&state), "/readyz").await,
            (StatusCode::SERVICE_UNAVAILABLE, "NOT READY".to_string())
        );
        state.set_ready(true);
        assert_eq!(
            get(state, "/readyz").await,
            (StatusCode::OK, "READY".to_string())
        );
    }

    #[tokio::test]
    async fn health_reports_json() {
        let state = state();
        state.set_ready(true);
        let (status, body) = get(state, "/health").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["version"], "0.1.0");
        assert_eq!(json["store"]["payments"], 0);
        assert_eq!(json["gateway"]["available"], true);
    }

    #[tokio::test]
    async fn liveness_is_always_ok() {
        assert_eq!(
            get(state(), "/healthz").await,
            (StatusCode::OK, "OK".to_string())
        );
    }
}
