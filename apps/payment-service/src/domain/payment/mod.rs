//! Payment Bounded Context
//!
//! A payment is created pending, charged through the gateway, and may then
//! be refunded in one or more parts.
//!
//! # Key Concepts
//!
//! - **Payment Aggregate**: status machine plus captured and refunded totals
//! - **Refund**: an accepted or declined refund attempt
//! - **Idempotency**: a customer's idempotency key maps to exactly one payment

mod aggregate;
mod errors;
mod refund;
mod repository;
mod status;

pub use aggregate::{CreatePaymentCommand, Payment};
pub use errors::PaymentError;
pub use refund::Refund;
pub use repository::{PaymentFilter, PaymentRepository};
pub use status::{PaymentStatus, RefundStatus};
