// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Payment Service
//!
//! gRPC server for `payment.v1.PaymentService`: one-off payments with
//! refunds, recurring subscriptions, and payment method validation.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: aggregates, value objects and repository traits
//!   - `payment`: payment lifecycle, refunds, idempotency
//!   - `subscription`: plans, trials, billing periods, pause and cancel
//!   - `payment_method`: instruments and validation rules
//!   - `shared`: identifiers and money
//!
//! - **Application**: use cases and outbound ports
//!   - `ports`: `PaymentGateway`
//!   - `use_cases`: `PaymentUseCases`, `SubscriptionUseCases`, pagination
//!
//! - **Infrastructure**: adapters
//!   - `grpc`: tonic service, proto conversions, error details
//!   - `persistence`: in-memory repositories
//!   - `gateway`: mock gateway
//!   - `health`, `metrics`, `telemetry`, `config`

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no transport or storage concerns.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Re-exports
// =============================================================================

pub use application::use_cases::{PageSettings, PaymentUseCases, SubscriptionUseCases};
pub use domain::payment::{Payment, PaymentError, PaymentStatus};
pub use domain::subscription::{Subscription, SubscriptionError, SubscriptionStatus};
pub use infrastructure::config::ServiceConfig;
pub use infrastructure::gateway::MockGateway;
pub use infrastructure::grpc::{PaymentServiceAdapter, create_payment_service};
pub use infrastructure::persistence::{InMemoryPaymentRepository, InMemorySubscriptionRepository};
