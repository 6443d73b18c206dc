//! Subscription gRPC Integration Tests
//!
//! Covers the subscription lifecycle over a real tonic channel: trials,
//! plan changes, pause and resume, cancellation and listing.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]

use std::sync::Arc;
use std::time::Duration;

use tonic::Code;
use tonic::transport::{Channel, Server};

use payment_service::domain::shared::Currency;
use payment_service::infrastructure::grpc::proto::{
    BillingInterval, CancelSubscriptionRequest, CardDetails, CreateSubscriptionRequest,
    GetSubscriptionRequest, ListSubscriptionsRequest, PaymentMethod, PaymentMethodType,
    Subscription, SubscriptionStatus, SubscriptionTier, UpdateSubscriptionRequest,
    payment_service_client::PaymentServiceClient,
};
use payment_service::{
    InMemoryPaymentRepository, InMemorySubscriptionRepository, MockGateway, PageSettings,
    PaymentUseCases, SubscriptionUseCases, create_payment_service,
};

/// Start a test gRPC server on a random port and return the client.
async fn setup_test_server() -> (PaymentServiceClient<Channel>, tokio::task::JoinHandle<()>) {
    let pages = PageSettings {
        default_size: 2,
        max_size: 3,
    };
    let payments = Arc::new(PaymentUseCases::new(
        Arc::new(InMemoryPaymentRepository::new()),
        Arc::new(MockGateway::default()),
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

    (client, server_handle)
}

fn card() -> PaymentMethod {
    let mut method = PaymentMethod {
        card: Some(CardDetails {
            card_number: "5555555555554444".to_string(),
            expiry_month: 6,
            expiry_year: 2099,
            cvv: "321".to_string(),
            cardholder_name: "Vikram Iyer".to_string(),
        }),
        ..Default::default()
    };
    method.set_method_type(PaymentMethodType::Card);
    method
}

fn subscribe_request(
    customer: &str,
    tier: SubscriptionTier,
    amount: f64,
) -> CreateSubscriptionRequest {
    let mut request = CreateSubscriptionRequest {
        customer_id: customer.to_string(),
        plan_id: "plan_pro".to_string(),
        amount,
        payment_method: Some(card()),
        ..Default::default()
    };
    request.set_tier(tier);
    request
}

async fn subscribe(
    client: &mut PaymentServiceClient<Channel>,
    request: CreateSubscriptionRequest,
) -> Subscription {
    client
        .create_subscription(request)
        .await
        .unwrap()
        .into_inner()
        .subscription
        .unwrap()
}

async fn update(
    client: &mut PaymentServiceClient<Channel>,
    request: UpdateSubscriptionRequest,
) -> Result<Subscription, tonic::Status> {
    client
        .update_subscription(request)
        .await
        .map(|r| r.into_inner().subscription.unwrap())
}

// =============================================================================
// Creation
// =============================================================================

#[tokio::test]
async fn test_create_without_trial_starts_active() {
    let (mut client, _server) = setup_test_server().await;

    let sub = subscribe(
        &mut client,
        subscribe_request("cust_1", SubscriptionTier::Premium, 499.0),
    )
    .await;

    assert!(sub.subscription_id.starts_with("sub_"));
    assert_eq!(sub.status(), SubscriptionStatus::Active);
    assert_eq!(sub.billing_interval(), BillingInterval::Monthly);
    assert_eq!(sub.currency, "INR");
    assert_eq!(sub.amount, 499.0);
    assert!(sub.trial_end.is_empty());
    assert!(sub.current_period_end > sub.current_period_start);

    let method = sub.payment_method.unwrap();
    let card = method.card.unwrap();
    assert!(card.card_number.is_empty());
    assert!(card.cvv.is_empty());
    assert_eq!(method.last4, "4444");
}

#[tokio::test]
async fn test_create_with_trial_starts_in_trial() {
    let (mut client, _server) = setup_test_server().await;

    let mut request = subscribe_request("cust_1", SubscriptionTier::Basic, 99.0);
    request.trial_days = 14;
    request.set_billing_interval(BillingInterval::Yearly);
    let sub = subscribe(&mut client, request).await;

    assert_eq!(sub.status(), SubscriptionStatus::Trial);
    assert_eq!(sub.billing_interval(), BillingInterval::Yearly);
    assert!(!sub.trial_end.is_empty());
    assert_eq!(sub.trial_end, sub.current_period_end);
}

#[tokio::test]
async fn test_free_tier_needs_no_amount_or_method() {
    let (mut client, _server) = setup_test_server().await;

    let mut request = subscribe_request("cust_1", SubscriptionTier::Free, 0.0);
    request.payment_method = None;
    let sub = subscribe(&mut client, request).await;

    assert_eq!(sub.status(), SubscriptionStatus::Active);
    assert_eq!(sub.tier(), SubscriptionTier::Free);
    assert!(sub.payment_method.is_none());
}

#[tokio::test]
async fn test_create_rejects_bad_requests() {
    let (mut client, _server) = setup_test_server().await;

    let paid_without_price = subscribe_request("cust_1", SubscriptionTier::Enterprise, 0.0);
    let missing_tier = subscribe_request("cust_1", SubscriptionTier::Unspecified, 10.0);
    let mut long_trial = subscribe_request("cust_1", SubscriptionTier::Basic, 10.0);
    long_trial.trial_days = 400;
    let mut negative_trial = subscribe_request("cust_1", SubscriptionTier::Basic, 10.0);
    negative_trial.trial_days = -1;
    let no_customer = subscribe_request("", SubscriptionTier::Basic, 10.0);

    for request in [
        paid_without_price,
        missing_tier,
        long_trial,
        negative_trial,
        no_customer,
    ] {
        let status = client.create_subscription(request).await.unwrap_err();
        assert_eq!(status.code(), Code::InvalidArgument, "{}", status.message());
    }
}

#[tokio::test]
async fn test_get_unknown_subscription_is_not_found() {
    let (mut client, _server) = setup_test_server().await;

    let status = client
        .get_subscription(GetSubscriptionRequest {
            subscription_id: "sub_missing".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::NotFound);
}

// =============================================================================
// Updates
// =============================================================================

#[tokio::test]
async fn test_update_changes_only_given_fields() {
    let (mut client, _server) = setup_test_server().await;
    let sub = subscribe(
        &mut client,
        subscribe_request("cust_1", SubscriptionTier::Basic, 99.0),
    )
    .await;

    let mut request = UpdateSubscriptionRequest {
        subscription_id: sub.subscription_id.clone(),
        plan_id: "plan_pro_plus".to_string(),
        amount: 1299.0,
        ..Default::default()
    };
    request.set_tier(SubscriptionTier::Professional);
    request.metadata.insert("source".to_string(), "upgrade".to_string());
    let updated = update(&mut client, request).await.unwrap();

    assert_eq!(updated.plan_id, "plan_pro_plus");
    assert_eq!(updated.tier(), SubscriptionTier::Professional);
    assert_eq!(updated.amount, 1299.0);
    assert_eq!(updated.billing_interval(), BillingInterval::Monthly);
    assert_eq!(updated.metadata.get("source").unwrap(), "upgrade");
    assert_eq!(updated.current_period_end, sub.current_period_end);

    let fetched = client
        .get_subscription(GetSubscriptionRequest {
            subscription_id: sub.subscription_id,
        })
        .await
        .unwrap()
        .into_inner()
        .subscription
        .unwrap();
    assert_eq!(fetched.plan_id, "plan_pro_plus");
}

#[tokio::test]
async fn test_interval_change_moves_period_end() {
    let (mut client, _server) = setup_test_server().await;
    let sub = subscribe(
        &mut client,
        subscribe_request("cust_1", SubscriptionTier::Basic, 99.0),
    )
    .await;

    let mut request = UpdateSubscriptionRequest {
        subscription_id: sub.subscription_id.clone(),
        ..Default::default()
    };
    request.set_billing_interval(BillingInterval::Yearly);
    let updated = update(&mut client, request).await.unwrap();

    assert_eq!(updated.billing_interval(), BillingInterval::Yearly);
    assert_eq!(updated.current_period_start, sub.current_period_start);
    assert!(updated.current_period_end > sub.current_period_end);
}

#[tokio::test]
async fn test_pause_then_resume() {
    let (mut client, _server) = setup_test_server().await;
    let sub = subscribe(
        &mut client,
        subscribe_request("cust_1", SubscriptionTier::Premium, 499.0),
    )
    .await;

    let paused = update(
        &mut client,
        UpdateSubscriptionRequest {
            subscription_id: sub.subscription_id.clone(),
            pause: true,
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(paused.status(), SubscriptionStatus::Paused);

    let status = update(
        &mut client,
        UpdateSubscriptionRequest {
            subscription_id: sub.subscription_id.clone(),
            pause: true,
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert_eq!(status.code(), Code::FailedPrecondition);

    let resumed = update(
        &mut client,
        UpdateSubscriptionRequest {
            subscription_id: sub.subscription_id,
            resume: true,
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(resumed.status(), SubscriptionStatus::Active);
}

#[tokio::test]
async fn test_update_rejects_conflicting_or_invalid_changes() {
    let (mut client, _server) = setup_test_server().await;
    let sub = subscribe(
        &mut client,
        subscribe_request("cust_1", SubscriptionTier::Premium, 499.0),
    )
    .await;

    let both = update(
        &mut client,
        UpdateSubscriptionRequest {
            subscription_id: sub.subscription_id.clone(),
            pause: true,
            resume: true,
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert_eq!(both.code(), Code::InvalidArgument);

    let resume_active = update(
        &mut client,
        UpdateSubscriptionRequest {
            subscription_id: sub.subscription_id.clone(),
            resume: true,
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert_eq!(resume_active.code(), Code::FailedPrecondition);

    let negative = update(
        &mut client,
        UpdateSubscriptionRequest {
            subscription_id: sub.subscription_id.clone(),
            amount: -5.0,
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert_eq!(negative.code(), Code::InvalidArgument);

    // A rejected update leaves the subscription untouched.
    let fetched = client
        .get_subscription(GetSubscriptionRequest {
            subscription_id: sub.subscription_id,
        })
        .await
        .unwrap()
        .into_inner()
        .subscription
        .unwrap();
    assert_eq!(fetched.status(), SubscriptionStatus::Active);
    assert_eq!(fetched.amount, 499.0);
}

// =============================================================================
// Cancellation
// =============================================================================

#[tokio::test]
async fn test_cancel_at_period_end_then_immediately() {
    let (mut client, _server) = setup_test_server().await;
    let sub = subscribe(
        &mut client,
        subscribe_request("cust_1", SubscriptionTier::Premium, 499.0),
    )
    .await;

    let scheduled = client
        .cancel_subscription(CancelSubscriptionRequest {
            subscription_id: sub.subscription_id.clone(),
            at_period_end: true,
            reason: "too expensive".to_string(),
        })
        .await
        .unwrap()
        .into_inner()
        .subscription
        .unwrap();
    assert_eq!(scheduled.status(), SubscriptionStatus::Active);
    assert!(scheduled.cancel_at_period_end);
    assert!(scheduled.cancelled_at.is_empty());
    assert_eq!(scheduled.cancellation_reason, "too expensive");

    let cancelled = client
        .cancel_subscription(CancelSubscriptionRequest {
            subscription_id: sub.subscription_id.clone(),
            at_period_end: false,
            reason: String::new(),
        })
        .await
        .unwrap()
        .into_inner()
        .subscription
        .unwrap();
    assert_eq!(cancelled.status(), SubscriptionStatus::Cancelled);
    assert!(!cancelled.cancel_at_period_end);
    assert!(!cancelled.cancelled_at.is_empty());

    let again = client
        .cancel_subscription(CancelSubscriptionRequest {
            subscription_id: sub.subscription_id.clone(),
            at_period_end: false,
            reason: String::new(),
        })
        .await
        .unwrap_err();
    assert_eq!(again.code(), Code::FailedPrecondition);

    let status = update(
        &mut client,
        UpdateSubscriptionRequest {
            subscription_id: sub.subscription_id,
            plan_id: "plan_other".to_string(),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert_eq!(status.code(), Code::FailedPrecondition);
}

#[tokio::test]
async fn test_cancel_paused_subscription_is_immediate() {
    let (mut client, _server) = setup_test_server().await;
    let sub = subscribe(
        &mut client,
        subscribe_request("cust_1", SubscriptionTier::Basic, 99.0),
    )
    .await;
    update(
        &mut client,
        UpdateSubscriptionRequest {
            subscription_id: sub.subscription_id.clone(),
            pause: true,
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let cancelled = client
        .cancel_subscription(CancelSubscriptionRequest {
            subscription_id: sub.subscription_id,
            at_period_end: true,
            reason: String::new(),
        })
        .await
        .unwrap()
        .into_inner()
        .subscription
        .unwrap();

    assert_eq!(cancelled.status(), SubscriptionStatus::Cancelled);
    assert!(cancelled.cancellation_reason.is_empty());
}

// =============================================================================
// Listing
// =============================================================================

#[tokio::test]
async fn test_list_filters_and_pages() {
    let (mut client, _server) = setup_test_server().await;

    for _ in 0..3 {
        subscribe(
            &mut client,
            subscribe_request("cust_a", SubscriptionTier::Basic, 99.0),
        )
        .await;
    }
    let mut trial = subscribe_request("cust_a", SubscriptionTier::Basic, 99.0);
    trial.trial_days = 7;
    subscribe(&mut client, trial).await;
    subscribe(
        &mut client,
        subscribe_request("cust_b", SubscriptionTier::Basic, 99.0),
    )
    .await;

    let first = client
        .list_subscriptions(ListSubscriptionsRequest {
            customer_id: "cust_a".to_string(),
            ..Default::default()
        })
        .await
        .unwrap()
        .into_inner();
    assert_eq!(first.total_count, 4);
    assert_eq!(first.subscriptions.len(), 2);
    assert!(!first.next_page_token.is_empty());

    let second = client
        .list_subscriptions(ListSubscriptionsRequest {
            customer_id: "cust_a".to_string(),
            page_size: 10,
            page_token: first.next_page_token,
            ..Default::default()
        })
        .await
        .unwrap()
        .into_inner();
    assert_eq!(second.subscriptions.len(), 2);
    assert!(second.next_page_token.is_empty());
    assert!(
        second
            .subscriptions
            .iter()
            .all(|s| s.customer_id == "cust_a")
    );

    let mut by_status = ListSubscriptionsRequest {
        page_size: 3,
        ..Default::default()
    };
    by_status.set_status(SubscriptionStatus::Trial);
    let trials = client
        .list_subscriptions(by_status)
        .await
        .unwrap()
        .into_inner();
    assert_eq!(trials.total_count, 1);
    assert_eq!(trials.subscriptions[0].status(), SubscriptionStatus::Trial);

    let bad_token = client
        .list_subscriptions(ListSubscriptionsRequest {
            page_token: "not-a-token".to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_eq!(bad_token.code(), Code::InvalidArgument);
}
