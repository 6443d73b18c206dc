//! gRPC Adapter (Driver Adapter)
//!
//! Tonic-based `payment.v1.PaymentService` that delegates to the
//! application use cases.

pub mod converters;
pub mod errors;
mod server;
mod service;

pub use errors::{ERROR_DOMAIN, ErrorReason, ServiceError};
pub use server::{GrpcServerError, bind, serve};
pub use service::{PaymentServiceAdapter, create_payment_service};

/// Generated protobuf code for `payment.v1`.
pub use riskpay_schema::payment as proto;
