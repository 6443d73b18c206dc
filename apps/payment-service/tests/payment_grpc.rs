//! Payment gRPC Integration Tests
//!
//! Drives `PaymentService` through a real tonic client: creation and
//! idempotency, charging, declines and retries, refunds, listing and
//! payment method validation.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]

use std::sync::Arc;
use std::time::Duration;

use tonic::Code;
use tonic::transport::{Channel, Server};

use payment_service::domain::shared::Currency;
use payment_service::infrastructure::grpc::proto::{
    CardBrand, CardDetails, CreatePaymentRequest, GetPaymentRequest, ListPaymentsRequest,
    PaymentMethod, PaymentMethodType, PaymentStatus, ProcessPaymentRequest, RefundPaymentRequest,
    RefundStatus, UpiDetails, ValidatePaymentMethodRequest,
    payment_service_client::PaymentServiceClient,
};
use payment_service::{
    InMemoryPaymentRepository, InMemorySubscriptionRepository, MockGateway, PageSettings,
    PaymentUseCases, SubscriptionUseCases, create_payment_service,
};

const GOOD_CARD: &str = "4111 1111 1111 1111";
const DECLINED_CARD: &str = "4000000000000002";

/// Start a test gRPC server on a random port and return the client.
async fn setup_test_server() -> (
    PaymentServiceClient<Channel>,
    Arc<MockGateway>,
    tokio::task::JoinHandle<()>,
) {
    let gateway = Arc::new(MockGateway::default());
    let pages = PageSettings {
        default_size: 2,
        max_size: 3,
    };
    let payments = Arc::new(PaymentUseCases::new(
        Arc::new(InMemoryPaymentRepository::new()),
        Arc::clone(&gateway),
        pages,
    ));
    let subscriptions = Arc::new(SubscriptionUseCases::new(
        Arc::new(InMemorySubscriptionRepository::new()),
        pages,
    ));
    let service = create_payment_service(payments, subscriptions, Currency::inr());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server_handle = tokio::spawn(async move {
        Server::builder()
            .add_service(service)
            .serve_with_incoming(tokio_stream::wrappers::TcpListenerStream::new(listener))
            .await
            .unwrap();
    });

    // Give server time to start
    tokio::time::sleep(Duration::from_millis(50)).await;

    let client = PaymentServiceClient::connect(format!("http://{addr}"))
        .await
        .unwrap();

    (client, gateway, server_handle)
}

fn card(number: &str) -> PaymentMethod {
    let mut method = PaymentMethod {
        card: Some(CardDetails {
            card_number: number.to_string(),
            expiry_month: 12,
            expiry_year: 2099,
            cvv: "123".to_string(),
            cardholder_name: "Asha Rao".to_string(),
        }),
        ..Default::default()
    };
    method.set_method_type(PaymentMethodType::Card);
    method
}

fn create_request(
    customer: &str,
    amount: f64,
    method: Option<PaymentMethod>,
) -> CreatePaymentRequest {
    CreatePaymentRequest {
        customer_id: customer.to_string(),
        amount,
        method,
        description: "Pro plan".to_string(),
        ..Default::default()
    }
}

async fn create_and_capture(client: &mut PaymentServiceClient<Channel>, amount: f64) -> String {
    let payment = client
        .create_payment(create_request("cus_1", amount, Some(card(GOOD_CARD))))
        .await
        .unwrap()
        .into_inner()
        .payment
        .unwrap();
    let processed = client
        .process_payment(ProcessPaymentRequest {
            payment_id: payment.payment_id.clone(),
            method: None,
        })
        .await
        .unwrap()
        .into_inner();
    assert!(processed.success);
    payment.payment_id
}

#[tokio::test]
async fn test_create_and_get_payment() {
    let (mut client, _gateway, _handle) = setup_test_server().await;

    let created = client
        .create_payment(create_request("cus_1", 499.0, Some(card(GOOD_CARD))))
        .await
        .unwrap()
        .into_inner()
        .payment
        .unwrap();

    assert!(created.payment_id.starts_with("pay_"));
    assert_eq!(created.status(), PaymentStatus::Pending);
    assert_eq!(created.currency, "INR");
    assert_eq!(created.amount, 499.0);
    assert!(!created.created_at.is_empty());

    let method = created.method.as_ref().unwrap();
    assert_eq!(method.last4, "1111");
    assert_eq!(method.card_brand(), CardBrand::Visa);
    assert!(method.card.as_ref().unwrap().card_number.is_empty());
    assert!(method.card.as_ref().unwrap().cvv.is_empty());

    let fetched = client
        .get_payment(GetPaymentRequest {
            payment_id: created.payment_id.clone(),
        })
        .await
        .unwrap()
        .into_inner()
        .payment
        .unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_payment_rejects_bad_input() {
    let (mut client, _gateway, _handle) = setup_test_server().await;

    let status = client
        .create_payment(create_request("", 10.0, None))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);

    let status = client
        .create_payment(create_request("cus_1", 0.0, None))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);

    let status = client
        .create_payment(create_request("cus_1", 10.0, Some(card("4111111111111112"))))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
}

#[tokio::test]
async fn test_idempotency_key_replays_and_conflicts() {
    let (mut client, _gateway, _handle) = setup_test_server().await;

    let mut request = create_request("cus_1", 100.0, None);
    request.idempotency_key = "order-77".to_string();

    let first = client.create_payment(request.clone()).await.unwrap().into_inner();
    let replay = client.create_payment(request.clone()).await.unwrap().into_inner();
    assert_eq!(
        first.payment.unwrap().payment_id,
        replay.payment.unwrap().payment_id
    );

    request.amount = 250.0;
    let status = client.create_payment(request).await.unwrap_err();
    assert_eq!(status.code(), Code::AlreadyExists);
}

#[tokio::test]
async fn test_get_unknown_payment_is_not_found() {
    let (mut client, _gateway, _handle) = setup_test_server().await;

    let status = client
        .get_payment(GetPaymentRequest {
            payment_id: "pay_missing".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::NotFound);
}

#[tokio::test]
async fn test_process_payment_captures_once() {
    let (mut client, _gateway, _handle) = setup_test_server().await;
    let payment_id = create_and_capture(&mut client, 300.0).await;

    let payment = client
        .get_payment(GetPaymentRequest {
            payment_id: payment_id.clone(),
        })
        .await
        .unwrap()
        .into_inner()
        .payment
        .unwrap();
    assert_eq!(payment.status(), PaymentStatus::Succeeded);
    assert!(payment.gateway_reference.starts_with("mock_ch_"));

    let status = client
        .process_payment(ProcessPaymentRequest {
            payment_id,
            method: None,
        })
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::FailedPrecondition);
}

#[tokio::test]
async fn test_process_without_method_fails_precondition() {
    let (mut client, _gateway, _handle) = setup_test_server().await;

    let payment = client
        .create_payment(create_request("cus_1", 50.0, None))
        .await
        .unwrap()
        .into_inner()
        .payment
        .unwrap();

    let status = client
        .process_payment(ProcessPaymentRequest {
            payment_id: payment.payment_id,
            method: None,
        })
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::FailedPrecondition);
}

#[tokio::test]
async fn test_declined_payment_can_be_retried() {
    let (mut client, _gateway, _handle) = setup_test_server().await;

    let payment = client
        .create_payment(create_request("cus_1", 75.0, Some(card(DECLINED_CARD))))
        .await
        .unwrap()
        .into_inner()
        .payment
        .unwrap();

    let declined = client
        .process_payment(ProcessPaymentRequest {
            payment_id: payment.payment_id.clone(),
            method: None,
        })
        .await
        .unwrap()
        .into_inner();
    assert!(!declined.success);
    let declined_payment = declined.payment.unwrap();
    assert_eq!(declined_payment.status(), PaymentStatus::Failed);
    assert!(!declined_payment.failure_reason.is_empty());

    let mut upi = PaymentMethod {
        upi: Some(UpiDetails {
            vpa: "asha@okhdfc".to_string(),
        }),
        ..Default::default()
    };
    upi.set_method_type(PaymentMethodType::Upi);

    let retried = client
        .process_payment(ProcessPaymentRequest {
            payment_id: payment.payment_id,
            method: Some(upi),
        })
        .await
        .unwrap()
        .into_inner();
    assert!(retried.success);
    let retried_payment = retried.payment.unwrap();
    assert_eq!(retried_payment.status(), PaymentStatus::Succeeded);
    assert!(retried_payment.failure_reason.is_empty());
    assert_eq!(retried_payment.method.unwrap().method_type(), PaymentMethodType::Upi);
}

#[tokio::test]
async fn test_gateway_outage_is_unavailable() {
    let (mut client, gateway, _handle) = setup_test_server().await;

    let payment = client
        .create_payment(create_request("cus_1", 20.0, Some(card(GOOD_CARD))))
        .await
        .unwrap()
        .into_inner()
        .payment
        .unwrap();

    gateway.set_available(false);
    let status = client
        .process_payment(ProcessPaymentRequest {
            payment_id: payment.payment_id.clone(),
            method: None,
        })
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::Unavailable);

    let stored = client
        .get_payment(GetPaymentRequest {
            payment_id: payment.payment_id.clone(),
        })
        .await
        .unwrap()
        .into_inner()
        .payment
        .unwrap();
    assert_eq!(stored.status(), PaymentStatus::Failed);

    gateway.set_available(true);
    let retried = client
        .process_payment(ProcessPaymentRequest {
            payment_id: payment.payment_id,
            method: None,
        })
        .await
        .unwrap()
        .into_inner();
    assert!(retried.success);
}

#[tokio::test]
async fn test_partial_then_full_refund() {
    let (mut client, _gateway, _handle) = setup_test_server().await;
    let payment_id = create_and_capture(&mut client, 1000.0).await;

    let partial = client
        .refund_payment(RefundPaymentRequest {
            payment_id: payment_id.clone(),
            amount: 400.0,
            reason: "damaged item".to_string(),
        })
        .await
        .unwrap()
        .into_inner();
    let refund = partial.refund.unwrap();
    assert!(refund.refund_id.starts_with("rfd_"));
    assert_eq!(refund.status(), RefundStatus::Succeeded);
    assert_eq!(refund.amount, 400.0);
    assert_eq!(refund.reason, "damaged item");
    let payment = partial.payment.unwrap();
    assert_eq!(payment.status(), PaymentStatus::PartiallyRefunded);
    assert_eq!(payment.refunded_amount, 400.0);

    let status = client
        .refund_payment(RefundPaymentRequest {
            payment_id: payment_id.clone(),
            amount: 700.0,
            reason: String::new(),
        })
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::FailedPrecondition);

    // Zero refunds whatever remains.
    let rest = client
        .refund_payment(RefundPaymentRequest {
            payment_id: payment_id.clone(),
            amount: 0.0,
            reason: String::new(),
        })
        .await
        .unwrap()
        .into_inner();
    assert_eq!(rest.refund.unwrap().amount, 600.0);
    assert_eq!(rest.payment.unwrap().status(), PaymentStatus::Refunded);

    let status = client
        .refund_payment(RefundPaymentRequest {
            payment_id,
            amount: 0.0,
            reason: String::new(),
        })
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::FailedPrecondition);
}

#[tokio::test]
async fn test_refund_requires_capture() {
    let (mut client, _gateway, _handle) = setup_test_server().await;

    let payment = client
        .create_payment(create_request("cus_1", 10.0, Some(card(GOOD_CARD))))
        .await
        .unwrap()
        .into_inner()
        .payment
        .unwrap();

    let status = client
        .refund_payment(RefundPaymentRequest {
            payment_id: payment.payment_id,
            amount: 5.0,
            reason: String::new(),
        })
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::FailedPrecondition);
}

#[tokio::test]
async fn test_list_payments_filters_and_pages() {
    let (mut client, _gateway, _handle) = setup_test_server().await;

    for amount in [10.0, 20.0, 30.0, 40.0] {
        client
            .create_payment(create_request("cus_a", amount, None))
            .await
            .unwrap();
    }
    client
        .create_payment(create_request("cus_b", 99.0, None))
        .await
        .unwrap();

    let first = client
        .list_payments(ListPaymentsRequest {
            customer_id: "cus_a".to_string(),
            ..Default::default()
        })
        .await
        .unwrap()
        .into_inner();
    assert_eq!(first.total_count, 4);
    assert_eq!(first.payments.len(), 2);
    assert_eq!(first.payments[0].amount, 10.0);
    assert!(!first.next_page_token.is_empty());

    let second = client
        .list_payments(ListPaymentsRequest {
            customer_id: "cus_a".to_string(),
            page_size: 50,
            page_token: first.next_page_token,
            ..Default::default()
        })
        .await
        .unwrap()
        .into_inner();
    assert_eq!(second.payments.len(), 2);
    assert_eq!(second.payments[1].amount, 40.0);
    assert!(second.next_page_token.is_empty());

    let mut by_status = ListPaymentsRequest::default();
    by_status.set_status(PaymentStatus::Succeeded);
    let none = client.list_payments(by_status).await.unwrap().into_inner();
    assert_eq!(none.total_count, 0);

    let status = client
        .list_payments(ListPaymentsRequest {
            page_token: "not-a-token".to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
}

#[tokio::test]
async fn test_validate_payment_method() {
    let (mut client, _gateway, _handle) = setup_test_server().await;

    let valid = client
        .validate_payment_method(ValidatePaymentMethodRequest {
            method: Some(card("378282246310005")),
        })
        .await
        .unwrap()
        .into_inner();
    // Amex needs a four-digit CVV.
    assert!(!valid.valid);
    assert_eq!(valid.card_brand(), CardBrand::Amex);
    assert_eq!(valid.masked_number, "****-****-****-0005");
    assert_eq!(valid.errors, vec!["CVV must be 4 digits".to_string()]);

    let ok = client
        .validate_payment_method(ValidatePaymentMethodRequest {
            method: Some(card(GOOD_CARD)),
        })
        .await
        .unwrap()
        .into_inner();
    assert!(ok.valid);
    assert!(ok.errors.is_empty());

    let mut missing_details = PaymentMethod::default();
    missing_details.set_method_type(PaymentMethodType::Upi);
    let malformed = client
        .validate_payment_method(ValidatePaymentMethodRequest {
            method: Some(missing_details),
        })
        .await
        .unwrap()
        .into_inner();
    assert!(!malformed.valid);
    assert_eq!(malformed.errors.len(), 1);

    let status = client
        .validate_payment_method(ValidatePaymentMethodRequest { method: None })
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
}
