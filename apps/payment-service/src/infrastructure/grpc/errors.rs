//! Rich gRPC errors.
//!
//! Domain errors are mapped to a [`ServiceError`] carrying a stable reason
//! code, then to a `tonic::Status` with `tonic-types` error details so that
//! clients can read field violations and precondition failures.
//!
//! | Reason | Code |
//! |--------|------|
//! | `INVALID_REQUEST`, `INVALID_PAYMENT_METHOD` | `INVALID_ARGUMENT` |
//! | `PAYMENT_NOT_FOUND`, `SUBSCRIPTION_NOT_FOUND` | `NOT_FOUND` |
//! | `IDEMPOTENCY_CONFLICT` | `ALREADY_EXISTS` |
//! | `INVALID_STATE`, `MISSING_PAYMENT_METHOD`, `REFUND_EXCEEDS_AVAILABLE` | `FAILED_PRECONDITION` |
//! | `CONCURRENT_MODIFICATION` | `ABORTED` |
//! | `GATEWAY_UNAVAILABLE` | `UNAVAILABLE` |
//! | `INTERNAL_ERROR` | `INTERNAL` |

use std::collections::HashMap;

use tonic::{Code, Status};
use tonic_types::{ErrorDetails, StatusExt};

use crate::domain::payment::PaymentError;
use crate::domain::shared::MoneyError;
use crate::domain::subscription::SubscriptionError;

/// Domain reported in `ErrorInfo` details.
pub const ERROR_DOMAIN: &str = "riskpay.payment";

/// Stable error reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorReason {
    /// Missing or malformed request field.
    InvalidRequest,
    /// Payment method failed validation.
    InvalidPaymentMethod,
    /// Unknown payment.
    PaymentNotFound,
    /// Unknown subscription.
    SubscriptionNotFound,
    /// Idempotency key reused with different parameters.
    IdempotencyConflict,
    /// Action not allowed in the current status.
    InvalidState,
    /// Charge requested without an instrument.
    MissingPaymentMethod,
    /// Refund larger than the refundable amount.
    RefundExceedsAvailable,
    /// Another request holds the entity.
    ConcurrentModification,
    /// Gateway unreachable.
    GatewayUnavailable,
    /// Unexpected server error.
    InternalError,
}

impl ErrorReason {
    /// gRPC status code for this reason.
    #[must_use]
    pub const fn grpc_code(self) -> Code {
        match self {
            Self::InvalidRequest | Self::InvalidPaymentMethod => Code::InvalidArgument,
            Self::PaymentNotFound | Self::SubscriptionNotFound => Code::NotFound,
            Self::IdempotencyConflict => Code::AlreadyExists,
            Self::InvalidState | Self::MissingPaymentMethod | Self::RefundExceedsAvailable => {
                Code::FailedPrecondition
            }
            Self::ConcurrentModification => Code::Aborted,
            Self::GatewayUnavailable => Code::Unavailable,
            Self::InternalError => Code::Internal,
        }
    }

    /// Reason string for `ErrorInfo`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::InvalidPaymentMethod => "INVALID_PAYMENT_METHOD",
            Self::PaymentNotFound => "PAYMENT_NOT_FOUND",
            Self::SubscriptionNotFound => "SUBSCRIPTION_NOT_FOUND",
            Self::IdempotencyConflict => "IDEMPOTENCY_CONFLICT",
            Self::InvalidState => "INVALID_STATE",
            Self::MissingPaymentMethod => "MISSING_PAYMENT_METHOD",
            Self::RefundExceedsAvailable => "REFUND_EXCEEDS_AVAILABLE",
            Self::ConcurrentModification => "CONCURRENT_MODIFICATION",
            Self::GatewayUnavailable => "GATEWAY_UNAVAILABLE",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error ready to be sent to a gRPC client.
#[derive(Debug, Clone, thiserror::Error)]
#[error("[{reason}] {message}")]
pub struct ServiceError {
    reason: ErrorReason,
    message: String,
    context: Vec<(String, String)>,
    field_violations: Vec<(String, String)>,
}

impl ServiceError {
    /// Create an error.
    #[must_use]
    pub fn new(reason: ErrorReason, message: impl Into<String>) -> Self {
        Self {
            reason,
            message: message.into(),
            context: Vec::new(),
            field_violations: Vec::new(),
        }
    }

    /// A single invalid request field.
    #[must_use]
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let field = field.into();
        let message = message.into();
        Self::new(ErrorReason::InvalidRequest, format!("invalid {field}: {message}"))
            .with_violation(field, message)
    }

    /// Attach `ErrorInfo` metadata.
    #[must_use]
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.push((key.into(), value.into()));
        self
    }

    /// Attach a `BadRequest` field violation.
    #[must_use]
    pub fn with_violation(
        mut self,
        field: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.field_violations.push((field.into(), description.into()));
        self
    }

    /// Reason code.
    #[must_use]
    pub const fn reason(&self) -> ErrorReason {
        self.reason
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Convert to a tonic Status with rich error details.
    #[must_use]
    pub fn to_status(&self) -> Status {
        let mut details = ErrorDetails::new();

        let metadata: HashMap<String, String> = self.context.iter().cloned().collect();
        details.set_error_info(self.reason.as_str(), ERROR_DOMAIN, metadata);

        for (field, description) in &self.field_violations {
            details.add_bad_request_violation(field.clone(), description.clone());
        }

        if self.reason.grpc_code() == Code::FailedPrecondition {
            details.add_precondition_failure_violation(
                self.reason.as_str(),
                self.context
                    .first()
                    .map(|(_, v)| v.clone())
                    .unwrap_or_default(),
                self.message.clone(),
            );
        }

        Status::with_error_details(self.reason.grpc_code(), &self.message, details)
    }
}

impl From<ServiceError> for Status {
    fn from(error: ServiceError) -> Self {
        error.to_status()
    }
}

impl From<MoneyError> for ServiceError {
    fn from(error: MoneyError) -> Self {
        let field = match &error {
            MoneyError::Negative(_) => "amount",
            MoneyError::InvalidCurrency(_) | MoneyError::CurrencyMismatch { .. } => "currency",
        };
        Self::invalid_field(field, error.to_string())
    }
}

fn invalid_method(errors: Vec<String>) -> ServiceError {
    let mut error = ServiceError::new(
        ErrorReason::InvalidPaymentMethod,
        format!("invalid payment method: {}", errors.join("; ")),
    );
    for message in errors {
        error = error.with_violation("method", message);
    }
    error
}

impl From<PaymentError> for ServiceError {
    fn from(error: PaymentError) -> Self {
        let message = error.to_string();
        match error {
            PaymentError::InvalidParameters { field, message } => {
                Self::invalid_field(field, message)
            }
            PaymentError::Money(e) => e.into(),
            PaymentError::InvalidPaymentMethod { errors } => invalid_method(errors),
            PaymentError::MissingPaymentMethod { payment_id } => {
                Self::new(ErrorReason::MissingPaymentMethod, message)
                    .with_context("payment_id", payment_id)
            }
            PaymentError::InvalidStateTransition { status, .. } => {
                Self::new(ErrorReason::InvalidState, message)
                    .with_context("status", status.as_str())
            }
            PaymentError::RefundExceedsAvailable { available, .. } => {
                Self::new(ErrorReason::RefundExceedsAvailable, message)
                    .with_context("available", available.to_string())
            }
            PaymentError::IdempotencyConflict { key } => {
                Self::new(ErrorReason::IdempotencyConflict, message)
                    .with_context("idempotency_key", key)
            }
            PaymentError::NotFound { payment_id } => {
                Self::new(ErrorReason::PaymentNotFound, message)
                    .with_context("payment_id", payment_id)
            }
            PaymentError::Busy { payment_id } => {
                Self::new(ErrorReason::ConcurrentModification, message)
                    .with_context("payment_id", payment_id)
            }
            PaymentError::Gateway(_) => Self::new(ErrorReason::GatewayUnavailable, message),
            PaymentError::Storage(_) => Self::new(ErrorReason::InternalError, message),
        }
    }
}

impl From<SubscriptionError> for ServiceError {
    fn from(error: SubscriptionError) -> Self {
        let message = error.to_string();
        match error {
            SubscriptionError::InvalidParameters { field, message } => {
                Self::invalid_field(field, message)
            }
            SubscriptionError::Money(e) => e.into(),
            SubscriptionError::InvalidPaymentMethod { errors } => invalid_method(errors),
            SubscriptionError::InvalidStateTransition { status, .. } => {
                Self::new(ErrorReason::InvalidState, message)
                    .with_context("status", status.as_str())
            }
            SubscriptionError::NotFound { subscription_id } => {
                Self::new(ErrorReason::SubscriptionNotFound, message)
                    .with_context("subscription_id", subscription_id)
            }
            SubscriptionError::Busy { subscription_id } => {
                Self::new(ErrorReason::ConcurrentModification, message)
                    .with_context("subscription_id", subscription_id)
            }
            SubscriptionError::Storage(_) => Self::new(ErrorReason::InternalError, message),
        }
    }
}

/// Map a payment error straight to a Status.
#[must_use]
pub fn payment_status(error: PaymentError) -> Status {
    ServiceError::from(error).to_status()
}

/// Map a subscription error straight to a Status.
#[must_use]
pub fn subscription_status(error: SubscriptionError) -> Status {
    ServiceError::from(error).to_status()
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::payment::PaymentStatus;
    use crate::domain::subscription::SubscriptionStatus;

    #[test]
    fn payment_errors_map_to_codes() {
        let cases = [
            (PaymentError::invalid("amount", "must be positive"), Code::InvalidArgument),
            (
                PaymentError::NotFound {
                    payment_id: "pay_x".to_string(),
                },
                Code::NotFound,
            ),
            (
                PaymentError::InvalidStateTransition {
                    status: PaymentStatus::Refunded,
                    action: "process",
                },
                Code::FailedPrecondition,
            ),
            (
                PaymentError::RefundExceedsAvailable {
                    requested: Decimal::from(10),
                    available: Decimal::from(5),
                },
                Code::FailedPrecondition,
            ),
            (
                PaymentError::IdempotencyConflict {
                    key: "k".to_string(),
                },
                Code::AlreadyExists,
            ),
            (
                PaymentError::Busy {
                    payment_id: "pay_x".to_string(),
                },
                Code::Aborted,
            ),
            (PaymentError::Gateway("down".to_string()), Code::Unavailable),
            (PaymentError::Storage("disk".to_string()), Code::Internal),
        ];
        for (error, code) in cases {
            assert_eq!(payment_status(error).code(), code);
        }
    }

    #[test]
    fn subscription_errors_map_to_codes() {
        let status = subscription_status(SubscriptionError::InvalidStateTransition {
            status: SubscriptionStatus::Cancelled,
            action: "update",
        });
        assert_eq!(status.code(), Code::FailedPrecondition);

        let status = subscription_status(SubscriptionError::NotFound {
            subscription_id: "sub_x".to_string(),
        });
        assert_eq!(status.code(), Code::NotFound);
    }

    #[test]
    fn details_carry_reason_and_violations() {
        let status = payment_status(PaymentError::InvalidPaymentMethod {
            errors: vec![
                "card has expired".to_string(),
                "CVV must be 3 digits".to_string(),
            ],
        });
        assert_eq!(status.code(), Code::InvalidArgument);

        let details = status.get_error_details();
        let info = details.error_info().unwrap();
        assert_eq!(info.reason, "INVALID_PAYMENT_METHOD");
        assert_eq!(info.domain, ERROR_DOMAIN);
        assert_eq!(details.bad_request().unwrap().field_violations.len(), 2);
    }

    #[test]
    fn display_includes_reason() {
        let error = ServiceError::invalid_field("customer_id", "is required");
        assert_eq!(
            error.to_string(),
            "[INVALID_REQUEST] invalid customer_id: is required"
        );
    }
}
