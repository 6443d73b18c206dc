//! Payment Gateway Port (Driven Port)
//!
//! Interface for charging instruments and returning funds through a
//! payment processor.

use async_trait::async_trait;

use crate::domain::payment_method::PaymentInstrument;
use crate::domain::shared::{Money, PaymentId, RefundId};

/// Request to charge an instrument.
#[derive(Debug, Clone)]
pub struct ChargeRequest {
    /// Payment being charged.
    pub payment_id: PaymentId,
    /// Amount to capture.
    pub amount: Money,
    /// Instrument to charge.
    pub instrument: PaymentInstrument,
    /// Statement description.
    pub description: String,
}

/// Request to refund part or all of a captured charge.
#[derive(Debug, Clone)]
pub struct RefundRequest {
    /// Payment being refunded.
    pub payment_id: PaymentId,
    /// Refund being issued.
    pub refund_id: RefundId,
    /// Amount to return.
    pub amount: Money,
    /// Gateway reference of the original charge.
    pub charge_reference: String,
}

/// Processor decision on a charge or refund.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayOutcome {
    /// Accepted; carries the processor's reference.
    Approved {
        /// Processor reference.
        reference: String,
    },
    /// Refused by the processor or issuer.
    Declined {
        /// Decline reason.
        reason: String,
    },
}

/// Gateway port error. A decline is an outcome, not an error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GatewayError {
    /// The processor could not be reached.
    #[error("gateway unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// The processor returned something unusable.
    #[error("gateway protocol error: {message}")]
    Protocol {
        /// Error details.
        message: String,
    },
}

/// Port for payment processor interactions.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Short processor name for logs and metrics.
    fn name(&self) -> &'static str;

    /// Capture a charge.
    async fn charge(&self, request: ChargeRequest) -> Result<GatewayOutcome, GatewayError>;

    /// Return funds from a previous charge.
    async fn refund(&self, request: RefundRequest) -> Result<GatewayOutcome, GatewayError>;
}
