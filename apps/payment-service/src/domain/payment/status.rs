//! Payment and refund status.

use std::fmt;

/// Lifecycle state of a payment.
///
/// ```text
/// Pending ──► Processing ──► Succeeded ──► PartiallyRefunded ──► Refunded
///                 │              └───────────────────────────────►┘
///                 └──► Failed ──► Processing (retry)
/// ```
///
/// `Cancelled` is part of the wire enum so clients can filter on it, but no
/// operation of this service moves a payment there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentStatus {
    /// Created, not yet charged.
    Pending,
    /// Charge in flight at the gateway.
    Processing,
    /// Captured in full.
    Succeeded,
    /// Charge declined or errored; may be retried.
    Failed,
    /// Abandoned before charging.
    Cancelled,
    /// Fully refunded.
    Refunded,
    /// Some of the captured amount has been refunded.
    PartiallyRefunded,
}

impl PaymentStatus {
    /// A charge can be attempted from this state.
    #[must_use]
    pub const fn can_process(self) -> bool {
        matches!(self, Self::Pending | Self::Failed)
    }

    /// Captured funds remain that can be refunded.
    #[must_use]
    pub const fn is_refundable(self) -> bool {
        matches!(self, Self::Succeeded | Self::PartiallyRefunded)
    }

    /// Uppercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Processing => "PROCESSING",
            Self::Succeeded => "SUCCEEDED",
            Self::Failed => "FAILED",
            Self::Cancelled => "CANCELLED",
            Self::Refunded => "REFUNDED",
            Self::PartiallyRefunded => "PARTIALLY_REFUNDED",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a refund attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefundStatus {
    /// Submitted, awaiting the gateway.
    Pending,
    /// Funds returned.
    Succeeded,
    /// Gateway declined the refund.
    Failed,
}

impl RefundStatus {
    /// Uppercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Succeeded => "SUCCEEDED",
            Self::Failed => "FAILED",
        }
    }
}

impl fmt::Display for RefundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn processing_allowed_from_pending_and_failed_only() {
        let allowed: Vec<_> = [
            PaymentStatus::Pending,
            PaymentStatus::Processing,
            PaymentStatus::Succeeded,
            PaymentStatus::Failed,
            PaymentStatus::Cancelled,
            PaymentStatus::Refunded,
            PaymentStatus::PartiallyRefunded,
        ]
        .into_iter()
        .filter(|s| s.can_process())
        .collect();
        assert_eq!(allowed, vec![PaymentStatus::Pending, PaymentStatus::Failed]);
    }

    #[test]
    fn refundable_states() {
        assert!(PaymentStatus::Succeeded.is_refundable());
        assert!(PaymentStatus::PartiallyRefunded.is_refundable());
        assert!(!PaymentStatus::Refunded.is_refundable());
        assert!(!PaymentStatus::Pending.is_refundable());
    }

    #[test]
    fn cancelled_accepts_no_operation() {
        assert!(!PaymentStatus::Cancelled.can_process());
        assert!(!PaymentStatus::Cancelled.is_refundable());
        assert_eq!(PaymentStatus::Cancelled.as_str(), "CANCELLED");
    }
}
