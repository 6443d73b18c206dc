//! Subscription errors.

use super::SubscriptionStatus;
use crate::domain::shared::MoneyError;

/// Errors raised by the subscription context.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubscriptionError {
    /// A request field is missing or malformed.
    #[error("invalid {field}: {message}")]
    InvalidParameters {
        /// Offending field.
        field: String,
        /// What is wrong with it.
        message: String,
    },

    /// Price or currency is unusable.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// The payment method failed validation.
    #[error("invalid payment method: {}", .errors.join("; "))]
    InvalidPaymentMethod {
        /// Validation messages.
        errors: Vec<String>,
    },

    /// The action is not allowed in the current status.
    #[error("cannot {action} subscription in status {status}")]
    InvalidStateTransition {
        /// Current status.
        status: SubscriptionStatus,
        /// Attempted action.
        action: &'static str,
    },

    /// Subscription does not exist.
    #[error("subscription not found: {subscription_id}")]
    NotFound {
        /// Subscription ID.
        subscription_id: String,
    },

    /// Another request is already modifying this subscription.
    #[error("subscription {subscription_id} is busy with another request")]
    Busy {
        /// Subscription ID.
        subscription_id: String,
    },

    /// Storage failed.
    #[error("storage error: {0}")]
    Storage(String),
}

impl SubscriptionError {
    /// Shorthand for [`SubscriptionError::InvalidParameters`].
    #[must_use]
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameters {
            field: field.into(),
            message: message.into(),
        }
    }
}
