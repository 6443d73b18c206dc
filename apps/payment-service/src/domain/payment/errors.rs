//! Payment errors.

use rust_decimal::Decimal;

use super::PaymentStatus;
use crate::domain::shared::MoneyError;

/// Errors raised by the payment context.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaymentError {
    /// A request field is missing or malformed.
    #[error("invalid {field}: {message}")]
    InvalidParameters {
        /// Offending field.
        field: String,
        /// What is wrong with it.
        message: String,
    },

    /// Amount or currency is unusable.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// The payment method failed validation.
    #[error("invalid payment method: {}", .errors.join("; "))]
    InvalidPaymentMethod {
        /// Validation messages.
        errors: Vec<String>,
    },

    /// Processing was requested without a payment method on file.
    #[error("payment {payment_id} has no payment method")]
    MissingPaymentMethod {
        /// Payment ID.
        payment_id: String,
    },

    /// The action is not allowed in the current status.
    #[error("cannot {action} payment in status {status}")]
    InvalidStateTransition {
        /// Current status.
        status: PaymentStatus,
        /// Attempted action.
        action: &'static str,
    },

    /// Refund larger than what remains captured.
    #[error("refund of {requested} exceeds refundable amount {available}")]
    RefundExceedsAvailable {
        /// Requested refund amount.
        requested: Decimal,
        /// Amount still refundable.
        available: Decimal,
    },

    /// An idempotency key was reused with different parameters.
    #[error("idempotency key {key} was already used for a different payment")]
    IdempotencyConflict {
        /// The reused key.
        key: String,
    },

    /// Payment does not exist.
    #[error("payment not found: {payment_id}")]
    NotFound {
        /// Payment ID.
        payment_id: String,
    },

    /// Another request is already working on this payment.
    #[error("payment {payment_id} is busy with another request")]
    Busy {
        /// Payment ID.
        payment_id: String,
    },

    /// The gateway could not be reached or errored.
    #[error("gateway error: {0}")]
    Gateway(String),

    /// Storage failed.
    #[error("storage error: {0}")]
    Storage(String),
}

impl PaymentError {
    /// Shorthand for [`PaymentError::InvalidParameters`].
    #[must_use]
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameters {
            field: field.into(),
            message: message.into(),
        }
    }
}
