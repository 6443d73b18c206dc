//! Payment Service Binary
//!
//! Starts the `payment.v1.PaymentService` gRPC server and its health
//! endpoint.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin payment-service
//! ```
//!
//! # Environment Variables
//!
//! - `PAYMENT_SERVICE_GRPC_PORT`: gRPC server port (default: 50061)
//! - `PAYMENT_SERVICE_HEALTH_PORT`: Health and metrics HTTP port (default: 8091)
//! - `PAYMENT_SERVICE_DEFAULT_CURRENCY`: Currency for requests that omit one (default: INR)
//! - `PAYMENT_SERVICE_MAX_PAGE_SIZE`: Largest list page (default: 100)
//! - `PAYMENT_SERVICE_DEFAULT_PAGE_SIZE`: List page when none is requested (default: 20)
//! - `PAYMENT_SERVICE_DECLINE_CARDS`: Comma-separated cards the mock gateway declines
//! - `OTEL_ENABLED`: Enable OpenTelemetry export (default: true)
//! - `OTEL_EXPORTER_OTLP_ENDPOINT`: OTLP endpoint (default: <http://localhost:4318>)
//! - `OTEL_SERVICE_NAME`: Service name (default: riskpay-payment-service)
//! - `RUST_LOG`: Log level (default: info)

use std::sync::Arc;
use std::time::Duration;

use payment_service::infrastructure::config::ServiceConfig;
use payment_service::infrastructure::grpc;
use payment_service::infrastructure::health::{HealthServer, HealthServerState};
use payment_service::infrastructure::metrics::init_metrics;
use payment_service::infrastructure::telemetry;
use payment_service::{
    InMemoryPaymentRepository, InMemorySubscriptionRepository, MockGateway, PaymentUseCases,
    SubscriptionUseCases, create_payment_service,
};
use tokio::signal;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Graceful shutdown timeout.
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    let _telemetry_guard = telemetry::init()?;

    tracing::info!("Starting Payment Service");

    if let Err(e) = init_metrics() {
        tracing::warn!(error = %e, "Prometheus metrics unavailable");
    }

    let config = ServiceConfig::from_env()?;
    log_config(&config);

    let shutdown_token = CancellationToken::new();

    let payment_repo = Arc::new(InMemoryPaymentRepository::new());
    let subscription_repo = Arc::new(InMemorySubscriptionRepository::new());
    let gateway = Arc::new(MockGateway::new(config.payments.decline_cards.clone()));

    let payments = Arc::new(PaymentUseCases::new(
        Arc::clone(&payment_repo),
        Arc::clone(&gateway),
        config.payments.pages,
    ));
    let subscriptions = Arc::new(SubscriptionUseCases::new(
        Arc::clone(&subscription_repo),
        config.payments.pages,
    ));

    let health_state = Arc::new(HealthServerState::new(
        env!("CARGO_PKG_VERSION").to_string(),
        Arc::clone(&gateway),
        Arc::clone(&payment_repo),
        Arc::clone(&subscription_repo),
    ));
    let health_server = HealthServer::new(
        config.server.health_port,
        Arc::clone(&health_state),
        shutdown_token.clone(),
    );
    let health_handle = tokio::spawn(async move {
        if let Err(e) = health_server.run().await {
            tracing::error!(error = %e, "Health server error");
        }
    });

    let listener = grpc::bind(config.server.grpc_port).await?;
    let service = create_payment_service(
        payments,
        subscriptions,
        config.payments.default_currency.clone(),
    );
    let grpc_shutdown = shutdown_token.clone();
    let grpc_handle = tokio::spawn(async move {
        if let Err(e) = grpc::serve(listener, service, grpc_shutdown).await {
            tracing::error!(error = %e, "gRPC server error");
        }
    });

    health_state.set_ready(true);
    tracing::info!("Payment service ready");

    await_shutdown(shutdown_token).await;
    health_state.set_ready(false);

    drain(vec![grpc_handle, health_handle]).await;

    tracing::info!("Payment service stopped");
    Ok(())
}

/// Load .env file from current or ancestor directories.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Log the parsed configuration.
fn log_config(config: &ServiceConfig) {
    tracing::info!(
        grpc_port = config.server.grpc_port,
        health_port = config.server.health_port,
        default_currency = %config.payments.default_currency,
        default_page_size = config.payments.pages.default_size,
        max_page_size = config.payments.pages.max_size,
        decline_cards = config.payments.decline_cards.len(),
        "Configuration loaded"
    );
}

/// Wait for SIGINT or SIGTERM, then cancel `shutdown_token`.
async fn await_shutdown(shutdown_token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }

    shutdown_token.cancel();

    tracing::info!(
        timeout_secs = SHUTDOWN_TIMEOUT.as_secs(),
        "Graceful shutdown started"
    );
}

/// Wait for server tasks to finish, giving up after `SHUTDOWN_TIMEOUT`.
async fn drain(handles: Vec<JoinHandle<()>>) {
    let all = async {
        for handle in handles {
            if let Err(e) = handle.await {
                tracing::error!(error = %e, "Server task panicked");
            }
        }
    };
    if tokio::time::timeout(SHUTDOWN_TIMEOUT, all).await.is_err() {
        tracing::warn!(
            timeout_secs = SHUTDOWN_TIMEOUT.as_secs(),
            "Shutdown timed out with requests still in flight"
        );
    }
}
