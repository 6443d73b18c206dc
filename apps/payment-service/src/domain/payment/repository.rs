//! Payment Repository Trait
//!
//! Persistence abstraction for payments, implemented in the infrastructure layer.

use async_trait::async_trait;

use super::{Payment, PaymentError, PaymentStatus};
use crate::domain::shared::PaymentId;

/// Criteria for listing payments. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentFilter {
    /// Only payments for this customer.
    pub customer_id: Option<String>,
    /// Only payments in this status.
    pub status: Option<PaymentStatus>,
}

impl PaymentFilter {
    /// Whether a payment satisfies the filter.
    #[must_use]
    pub fn matches(&self, payment: &Payment) -> bool {
        self.customer_id
            .as_deref()
            .is_none_or(|c| payment.customer_id() == c)
            && self.status.is_none_or(|s| payment.status() == s)
    }
}

/// Repository trait for payment persistence.
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Insert a new payment unless the customer already has one with the
    /// same idempotency key, in which case the existing payment is returned
    /// untouched. Returns whichever payment is now stored.
    ///
    /// # Errors
    ///
    /// Returns error if persistence fails.
    async fn insert(&self, payment: Payment) -> Result<Payment, PaymentError>;

    /// Save an existing payment.
    ///
    /// # Errors
    ///
    /// Returns `PaymentError::NotFound` if the payment was never inserted.
    async fn update(&self, payment: &Payment) -> Result<(), PaymentError>;

    /// Find a payment by ID.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_id(&self, id: &PaymentId) -> Result<Option<Payment>, PaymentError>;

    /// All payments matching the filter, in creation order.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_matching(&self, filter: &PaymentFilter) -> Result<Vec<Payment>, PaymentError>;
}
