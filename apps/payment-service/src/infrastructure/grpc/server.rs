//! gRPC server lifecycle.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tokio_util::sync::CancellationToken;

use super::proto::payment_service_server::PaymentServiceServer;
use super::service::PaymentServiceAdapter;
use crate::application::ports::PaymentGateway;
use crate::domain::payment::PaymentRepository;
use crate::domain::subscription::SubscriptionRepository;

/// gRPC server errors.
#[derive(Debug, thiserror::Error)]
pub enum GrpcServerError {
    /// Failed to bind to port.
    #[error("failed to bind to port {0}: {1}")]
    BindFailed(u16, String),

    /// Transport error while serving.
    #[error("gRPC transport error: {0}")]
    Transport(#[from] tonic::transport::Error),
}

/// Bind the gRPC listener on all interfaces.
///
/// # Errors
///
/// Returns `GrpcServerError::BindFailed` if the port is unavailable.
pub async fn bind(port: u16) -> Result<TcpListener, GrpcServerError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    TcpListener::bind(addr)
        .await
        .map_err(|e| GrpcServerError::BindFailed(port, e.to_string()))
}

/// Serve `PaymentService` on an already bound listener until `shutdown`
/// is cancelled. In-flight calls are allowed to finish.
///
/// # Errors
///
/// Returns `GrpcServerError::Transport` if the server fails while running.
pub async fn serve<PR, SR, G>(
    listener: TcpListener,
    service: PaymentServiceServer<PaymentServiceAdapter<PR, SR, G>>,
    shutdown: CancellationToken,
) -> Result<(), GrpcServerError>
where
    PR: PaymentRepository + 'static,
    SR: SubscriptionRepository + 'static,
    G: PaymentGateway + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "gRPC server listening");
    }

    tonic::transport::Server::builder()
        .add_service(service)
        .serve_with_incoming_shutdown(
            TcpListenerStream::new(listener),
            shutdown.cancelled_owned(),
        )
        .await?;

    tracing::info!("gRPC server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::application::use_cases::{PageSettings, PaymentUseCases, SubscriptionUseCases};
    use crate::domain::shared::Currency;
    use crate::infrastructure::gateway::MockGateway;
    use crate::infrastructure::grpc::create_payment_service;
    use crate::infrastructure::persistence::{
        InMemoryPaymentRepository, InMemorySubscriptionRepository,
    };

    #[tokio::test]
    async fn stops_when_cancelled() {
        let payments = Arc::new(PaymentUseCases::new(
            Arc::new(InMemoryPaymentRepository::new()),
            Arc::new(MockGateway::default()),
            PageSettings::default(),
        ));
        let subscriptions = Arc::new(SubscriptionUseCases::new(
            Arc::new(InMemorySubscriptionRepository::new()),
            PageSettings::default(),
        ));
        let service = create_payment_service(payments, subscriptions, Currency::inr());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let shutdown = CancellationToken::new();
        let handle = tokio::spawn(serve(listener, service, shutdown.clone()));

        shutdown.cancel();
        let result = tokio::time::timeout(std::time::Duration::from_secs(5), handle)
            .await
            .unwrap()
            .unwrap();
        assert!(result.is_ok());
    }
}
