//! Refund entity.

use chrono::{DateTime, Utc};

use super::RefundStatus;
use crate::domain::shared::{Money, PaymentId, RefundId};

/// A refund attempt against a payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refund {
    id: RefundId,
    payment_id: PaymentId,
    amount: Money,
    reason: Option<String>,
    status: RefundStatus,
    gateway_reference: Option<String>,
    failure_reason: Option<String>,
    created_at: DateTime<Utc>,
}

impl Refund {
    /// A refund the gateway accepted.
    #[must_use]
    pub const fn succeeded(
        id: RefundId,
        payment_id: PaymentId,
        amount: Money,
        reason: Option<String>,
        gateway_reference: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            payment_id,
            amount,
            reason,
            status: RefundStatus::Succeeded,
            gateway_reference: Some(gateway_reference),
            failure_reason: None,
            created_at,
        }
    }

    /// A refund the gateway declined.
    #[must_use]
    pub const fn failed(
        id: RefundId,
        payment_id: PaymentId,
        amount: Money,
        reason: Option<String>,
        failure_reason: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            payment_id,
            amount,
            reason,
            status: RefundStatus::Failed,
            gateway_reference: None,
            failure_reason: Some(failure_reason),
            created_at,
        }
    }

    /// Refund ID.
    #[must_use]
    pub const fn id(&self) -> &RefundId {
        &self.id
    }

    /// Payment this refund belongs to.
    #[must_use]
    pub const fn payment_id(&self) -> &PaymentId {
        &self.payment_id
    }

    /// Refunded amount.
    #[must_use]
    pub const fn amount(&self) -> &Money {
        &self.amount
    }

    /// Customer-facing reason.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// Outcome.
    #[must_use]
    pub const fn status(&self) -> RefundStatus {
        self.status
    }

    /// Gateway reference for accepted refunds.
    #[must_use]
    pub fn gateway_reference(&self) -> Option<&str> {
        self.gateway_reference.as_deref()
    }

    /// Why the gateway declined.
    #[must_use]
    pub fn failure_reason(&self) -> Option<&str> {
        self.failure_reason.as_deref()
    }

    /// When the refund was attempted.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
