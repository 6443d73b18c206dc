//! gRPC PaymentService implementation.
//!
//! Thin adapter: requests are converted to domain commands, handed to the
//! use cases, and the results converted back. Every call is wrapped in a
//! tracing span and recorded in the RPC metrics.

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use tonic::{Request, Response, Status};
use tracing::Instrument;

use super::converters::{
    create_payment_command, create_subscription_command, instrument_from_proto, optional_text,
    payment_filter, payment_to_proto, refund_amount, refund_to_proto, subscription_changes,
    subscription_status_filter, subscription_to_proto, validation_to_proto,
};
use super::errors::{ServiceError, payment_status, subscription_status};
use super::proto::{
    CancelSubscriptionRequest, CancelSubscriptionResponse, CreatePaymentRequest,
    CreatePaymentResponse, CreateSubscriptionRequest, CreateSubscriptionResponse,
    GetPaymentRequest, GetPaymentResponse, GetSubscriptionRequest, GetSubscriptionResponse,
    ListPaymentsRequest, ListPaymentsResponse, ListSubscriptionsRequest,
    ListSubscriptionsResponse, ProcessPaymentRequest, ProcessPaymentResponse,
    RefundPaymentRequest, RefundPaymentResponse, UpdateSubscriptionRequest,
    UpdateSubscriptionResponse, ValidatePaymentMethodRequest, ValidatePaymentMethodResponse,
    payment_service_server::{PaymentService, PaymentServiceServer},
};
use crate::application::ports::PaymentGateway;
use crate::application::use_cases::{PaymentUseCases, SubscriptionUseCases};
use crate::domain::payment::{PaymentError, PaymentRepository, RefundStatus};
use crate::domain::shared::Currency;
use crate::domain::subscription::SubscriptionRepository;
use crate::infrastructure::metrics::{
    PaymentOperation, PaymentOutcome, record_payment, record_rpc,
};

/// gRPC PaymentService adapter.
pub struct PaymentServiceAdapter<PR, SR, G>
where
    PR: PaymentRepository,
    SR: SubscriptionRepository,
    G: PaymentGateway,
{
    payments: Arc<PaymentUseCases<PR, G>>,
    subscriptions: Arc<SubscriptionUseCases<SR>>,
    default_currency: Currency,
}

impl<PR, SR, G> PaymentServiceAdapter<PR, SR, G>
where
    PR: PaymentRepository,
    SR: SubscriptionRepository,
    G: PaymentGateway,
{
    /// Create a new adapter.
    pub const fn new(
        payments: Arc<PaymentUseCases<PR, G>>,
        subscriptions: Arc<SubscriptionUseCases<SR>>,
        default_currency: Currency,
    ) -> Self {
        Self {
            payments,
            subscriptions,
            default_currency,
        }
    }
}

/// Create a PaymentService gRPC server.
pub fn create_payment_service<PR, SR, G>(
    payments: Arc<PaymentUseCases<PR, G>>,
    subscriptions: Arc<SubscriptionUseCases<SR>>,
    default_currency: Currency,
) -> PaymentServiceServer<PaymentServiceAdapter<PR, SR, G>>
where
    PR: PaymentRepository + 'static,
    SR: SubscriptionRepository + 'static,
    G: PaymentGateway + 'static,
{
    PaymentServiceServer::new(PaymentServiceAdapter::new(
        payments,
        subscriptions,
        default_currency,
    ))
}

/// Run one RPC inside a span and record its metrics.
async fn observe<T, F>(method: &'static str, call: F) -> Result<Response<T>, Status>
where
    F: Future<Output = Result<T, Status>>,
{
    let started = Instant::now();
    let result = call.instrument(tracing::info_span!("rpc", method)).await;
    record_rpc(
        method,
        result.as_ref().err().map(Status::code),
        started.elapsed(),
    );
    if let Err(status) = &result {
        tracing::debug!(method, code = ?status.code(), message = status.message(), "RPC failed");
    }
    result.map(Response::new)
}

#[tonic::async_trait]
impl<PR, SR, G> PaymentService for PaymentServiceAdapter<PR, SR, G>
where
    PR: PaymentRepository + 'static,
    SR: SubscriptionRepository + 'static,
    G: PaymentGateway + 'static,
{
    // =========================================================================
    // Payments
    // =========================================================================

    async fn create_payment(
        &self,
        request: Request<CreatePaymentRequest>,
    ) -> Result<Response<CreatePaymentResponse>, Status> {
        let req = request.into_inner();
        observe("CreatePayment", async {
            let command = create_payment_command(&req, &self.default_currency)?;
            let payment = self.payments.create(command).await.map_err(payment_status)?;
            Ok(CreatePaymentResponse {
                payment: Some(payment_to_proto(&payment)),
            })
        })
        .await
    }

    async fn get_payment(
        &self,
        request: Request<GetPaymentRequest>,
    ) -> Result<Response<GetPaymentResponse>, Status> {
        let req = request.into_inner();
        observe("GetPayment", async {
            let payment = self
                .payments
                .get(&req.payment_id)
                .await
                .map_err(payment_status)?;
            Ok(GetPaymentResponse {
                payment: Some(payment_to_proto(&payment)),
            })
        })
        .await
    }

    async fn list_payments(
        &self,
        request: Request<ListPaymentsRequest>,
    ) -> Result<Response<ListPaymentsResponse>, Status> {
        let req = request.into_inner();
        observe("ListPayments", async {
            let filter = payment_filter(&req)?;
            let page = self
                .payments
                .list(&filter, req.page_size, &req.page_token)
                .await
                .map_err(payment_status)?;
            Ok(ListPaymentsResponse {
                payments: page.items.iter().map(payment_to_proto).collect(),
                next_page_token: page.next_page_token,
                total_count: i32::try_from(page.total).unwrap_or(i32::MAX),
            })
        })
        .await
    }

    async fn process_payment(
        &self,
        request: Request<ProcessPaymentRequest>,
    ) -> Result<Response<ProcessPaymentResponse>, Status> {
        let req = request.into_inner();
        observe("ProcessPayment", async {
            let instrument = req.method.as_ref().map(instrument_from_proto).transpose()?;
            let outcome = match self.payments.process(&req.payment_id, instrument).await {
                Ok(outcome) => outcome,
                Err(e @ PaymentError::Gateway(_)) => {
                    record_payment(PaymentOperation::Charge, PaymentOutcome::Error);
                    return Err(payment_status(e));
                }
                Err(e) => return Err(payment_status(e)),
            };
            record_payment(
                PaymentOperation::Charge,
                if outcome.success {
                    PaymentOutcome::Approved
                } else {
                    PaymentOutcome::Declined
                },
            );
            Ok(ProcessPaymentResponse {
                payment: Some(payment_to_proto(&outcome.payment)),
                success: outcome.success,
                message: outcome.message,
            })
        })
        .await
    }

    async fn refund_payment(
        &self,
        request: Request<RefundPaymentRequest>,
    ) -> Result<Response<RefundPaymentResponse>, Status> {
        let req = request.into_inner();
        observe("RefundPayment", async {
            let amount = refund_amount(req.amount)?;
            let reason = optional_text(&req.reason);
            let result = self.payments.refund(&req.payment_id, amount, reason).await;
            let (refund, payment) = match result {
                Ok(pair) => pair,
                Err(e @ PaymentError::Gateway(_)) => {
                    record_payment(PaymentOperation::Refund, PaymentOutcome::Error);
                    return Err(payment_status(e));
                }
                Err(e) => return Err(payment_status(e)),
            };
            record_payment(
                PaymentOperation::Refund,
                if refund.status() == RefundStatus::Succeeded {
                    PaymentOutcome::Approved
                } else {
                    PaymentOutcome::Declined
                },
            );
            Ok(RefundPaymentResponse {
                refund: Some(refund_to_proto(&refund)),
                payment: Some(payment_to_proto(&payment)),
            })
        })
        .await
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    async fn create_subscription(
        &self,
        request: Request<CreateSubscriptionRequest>,
    ) -> Result<Response<CreateSubscriptionResponse>, Status> {
        let req = request.into_inner();
        observe("CreateSubscription", async {
            let command = create_subscription_command(&req, &self.default_currency)?;
            let subscription = self
                .subscriptions
                .create(command)
                .await
                .map_err(subscription_status)?;
            Ok(CreateSubscriptionResponse {
                subscription: Some(subscription_to_proto(&subscription)),
            })
        })
        .await
    }

    async fn get_subscription(
        &self,
        request: Request<GetSubscriptionRequest>,
    ) -> Result<Response<GetSubscriptionResponse>, Status> {
        let req = request.into_inner();
        observe("GetSubscription", async {
            let subscription = self
                .subscriptions
                .get(&req.subscription_id)
                .await
                .map_err(subscription_status)?;
            Ok(GetSubscriptionResponse {
                subscription: Some(subscription_to_proto(&subscription)),
            })
        })
        .await
    }

    async fn update_subscription(
        &self,
        request: Request<UpdateSubscriptionRequest>,
    ) -> Result<Response<UpdateSubscriptionResponse>, Status> {
        let req = request.into_inner();
        observe("UpdateSubscription", async {
            let changes = subscription_changes(&req)?;
            let subscription = self
                .subscriptions
                .update(&req.subscription_id, changes)
                .await
                .map_err(subscription_status)?;
            Ok(UpdateSubscriptionResponse {
                subscription: Some(subscription_to_proto(&subscription)),
            })
        })
        .await
    }

    async fn cancel_subscription(
        &self,
        request: Request<CancelSubscriptionRequest>,
    ) -> Result<Response<CancelSubscriptionResponse>, Status> {
        let req = request.into_inner();
        observe("CancelSubscription", async {
            let subscription = self
                .subscriptions
                .cancel(
                    &req.subscription_id,
                    req.at_period_end,
                    optional_text(&req.reason),
                )
                .await
                .map_err(subscription_status)?;
            Ok(CancelSubscriptionResponse {
                subscription: Some(subscription_to_proto(&subscription)),
            })
        })
        .await
    }

    async fn list_subscriptions(
        &self,
        request: Request<ListSubscriptionsRequest>,
    ) -> Result<Response<ListSubscriptionsResponse>, Status> {
        let req = request.into_inner();
        observe("ListSubscriptions", async {
            let status = subscription_status_filter(req.status)?;
            let customer = optional_text(&req.customer_id);
            let page = self
                .subscriptions
                .list(customer.as_deref(), status, req.page_size, &req.page_token)
                .await
                .map_err(subscription_status)?;
            Ok(ListSubscriptionsResponse {
                subscriptions: page.items.iter().map(subscription_to_proto).collect(),
                next_page_token: page.next_page_token,
                total_count: i32::try_from(page.total).unwrap_or(i32::MAX),
            })
        })
        .await
    }

    // =========================================================================
    // Payment methods
    // =========================================================================

    async fn validate_payment_method(
        &self,
        request: Request<ValidatePaymentMethodRequest>,
    ) -> Result<Response<ValidatePaymentMethodResponse>, Status> {
        let req = request.into_inner();
        observe("ValidatePaymentMethod", async {
            let method = req
                .method
                .as_ref()
                .ok_or_else(|| ServiceError::invalid_field("method", "is required"))?;
            // Malformed methods are reported as invalid rather than rejected.
            Ok(match instrument_from_proto(method) {
                Ok(instrument) => validation_to_proto(self.payments.validate_method(&instrument)),
                Err(error) => ValidatePaymentMethodResponse {
                    valid: false,
                    errors: vec![error.message().to_string()],
                    ..Default::default()
                },
            })
        })
        .await
    }
}
