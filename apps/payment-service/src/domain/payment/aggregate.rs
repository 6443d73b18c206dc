//! Payment Aggregate Root
//!
//! Owns the captured amount, the running refunded total and the status
//! machine. Refunds never exceed the captured amount.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::{PaymentError, PaymentStatus, Refund, RefundStatus};
use crate::domain::payment_method::PaymentInstrument;
use crate::domain::shared::{Money, PaymentId};

/// Command to create a payment.
#[derive(Debug, Clone)]
pub struct CreatePaymentCommand {
    /// Paying customer.
    pub customer_id: String,
    /// Amount to charge.
    pub amount: Money,
    /// Instrument to charge, if already known.
    pub instrument: Option<PaymentInstrument>,
    /// Free-form description.
    pub description: String,
    /// Caller metadata.
    pub metadata: BTreeMap<String, String>,
    /// Client-supplied key that makes creation idempotent per customer.
    pub idempotency_key: Option<String>,
}

impl CreatePaymentCommand {
    /// Validate the command parameters.
    ///
    /// # Errors
    ///
    /// Returns `PaymentError::InvalidParameters` for a missing customer or a
    /// non-positive amount.
    pub fn validate(&self) -> Result<(), PaymentError> {
        if self.customer_id.trim().is_empty() {
            return Err(PaymentError::invalid("customer_id", "is required"));
        }
        if !self.amount.is_positive() {
            return Err(PaymentError::invalid("amount", "must be greater than zero"));
        }
        Ok(())
    }
}

/// A single charge and its refunds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    id: PaymentId,
    customer_id: String,
    amount: Money,
    refunded: Money,
    status: PaymentStatus,
    instrument: Option<PaymentInstrument>,
    description: String,
    metadata: BTreeMap<String, String>,
    gateway_reference: Option<String>,
    failure_reason: Option<String>,
    idempotency_key: Option<String>,
    refunds: Vec<Refund>,
    attempts: u32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Payment {
    /// Create a pending payment.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails validation.
    pub fn new(command: CreatePaymentCommand, now: DateTime<Utc>) -> Result<Self, PaymentError> {
        command.validate()?;
        let refunded = Money::zero(command.amount.currency().clone());
        Ok(Self {
            id: PaymentId::generate(),
            customer_id: command.customer_id,
            amount: command.amount,
            refunded,
            status: PaymentStatus::Pending,
            instrument: command.instrument,
            description: command.description,
            metadata: command.metadata,
            gateway_reference: None,
            failure_reason: None,
            idempotency_key: command.idempotency_key.filter(|k| !k.is_empty()),
            refunds: Vec::new(),
            attempts: 0,
            created_at: now,
            updated_at: now,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Payment ID.
    #[must_use]
    pub const fn id(&self) -> &PaymentId {
        &self.id
    }

    /// Paying customer.
    #[must_use]
    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    /// Charged amount.
    #[must_use]
    pub const fn amount(&self) -> &Money {
        &self.amount
    }

    /// Total refunded so far.
    #[must_use]
    pub const fn refunded(&self) -> &Money {
        &self.refunded
    }

    /// Current status.
    #[must_use]
    pub const fn status(&self) -> PaymentStatus {
        self.status
    }

    /// Instrument on file.
    #[must_use]
    pub const fn instrument(&self) -> Option<&PaymentInstrument> {
        self.instrument.as_ref()
    }

    /// Description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Caller metadata.
    #[must_use]
    pub const fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }

    /// Gateway reference of the successful charge.
    #[must_use]
    pub fn gateway_reference(&self) -> Option<&str> {
        self.gateway_reference.as_deref()
    }

    /// Reason for the last failed charge.
    #[must_use]
    pub fn failure_reason(&self) -> Option<&str> {
        self.failure_reason.as_deref()
    }

    /// Idempotency key supplied at creation.
    #[must_use]
    pub fn idempotency_key(&self) -> Option<&str> {
        self.idempotency_key.as_deref()
    }

    /// Refund attempts, oldest first.
    #[must_use]
    pub fn refunds(&self) -> &[Refund] {
        &self.refunds
    }

    /// Number of charge attempts.
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Creation time.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Last modification time.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Amount still available for refunds.
    #[must_use]
    pub fn refundable_amount(&self) -> Decimal {
        if self.status.is_refundable() {
            self.amount.amount() - self.refunded.amount()
        } else {
            Decimal::ZERO
        }
    }

    /// True if this payment was created with the same parameters that a
    /// replayed create request carries.
    #[must_use]
    pub fn matches_request(&self, amount: &Money, customer_id: &str) -> bool {
        self.amount == *amount && self.customer_id == customer_id
    }

    // =========================================================================
    // Charging
    // =========================================================================

    /// Replace the instrument before charging.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` once the payment can no longer be charged.
    pub fn attach_instrument(
        &mut self,
        instrument: PaymentInstrument,
        now: DateTime<Utc>,
    ) -> Result<(), PaymentError> {
        self.ensure_can_process("change the payment method of")?;
        self.instrument = Some(instrument);
        self.updated_at = now;
        Ok(())
    }

    /// Move to `Processing` ahead of a gateway charge.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` unless the payment is `Pending` or
    /// `Failed`, and `MissingPaymentMethod` when no instrument is on file.
    pub fn start_processing(&mut self, now: DateTime<Utc>) -> Result<(), PaymentError> {
        self.ensure_can_process("process")?;
        if self.instrument.is_none() {
            return Err(PaymentError::MissingPaymentMethod {
                payment_id: self.id.to_string(),
            });
        }
        self.status = PaymentStatus::Processing;
        self.failure_reason = None;
        self.attempts += 1;
        self.updated_at = now;
        Ok(())
    }

    /// Record a successful capture.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` unless the payment is `Processing`.
    pub fn mark_succeeded(
        &mut self,
        gateway_reference: String,
        now: DateTime<Utc>,
    ) -> Result<(), PaymentError> {
        self.ensure_processing("complete")?;
        self.status = PaymentStatus::Succeeded;
        self.gateway_reference = Some(gateway_reference);
        self.updated_at = now;
        Ok(())
    }

    /// Record a declined or errored charge.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` unless the payment is `Processing`.
    pub fn mark_failed(&mut self, reason: String, now: DateTime<Utc>) -> Result<(), PaymentError> {
        self.ensure_processing("fail")?;
        self.status = PaymentStatus::Failed;
        self.failure_reason = Some(reason);
        self.updated_at = now;
        Ok(())
    }

    // =========================================================================
    // Refunds
    // =========================================================================

    /// Resolve and check a refund amount. `None` means the full remaining amount.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` when nothing is refundable,
    /// `InvalidParameters` for a non-positive amount and
    /// `RefundExceedsAvailable` when the amount is too large.
    pub fn prepare_refund(&self, requested: Option<Decimal>) -> Result<Money, PaymentError> {
        if !self.status.is_refundable() {
            return Err(PaymentError::InvalidStateTransition {
                status: self.status,
                action: "refund",
            });
        }
        let available = self.refundable_amount();
        let amount = match requested {
            None => available,
            Some(value) if value <= Decimal::ZERO => {
                return Err(PaymentError::invalid("amount", "must be greater than zero"));
            }
            Some(value) => value,
        };
        let amount = self.amount.with_amount(amount)?;
        if !amount.is_positive() {
            return Err(PaymentError::invalid(
                "amount",
                "must be at least the smallest currency unit",
            ));
        }
        if amount.amount() > available {
            return Err(PaymentError::RefundExceedsAvailable {
                requested: amount.amount(),
                available,
            });
        }
        Ok(amount)
    }

    /// Record a refund attempt. Only successful refunds change the totals.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Payment::prepare_refund`] when a
    /// successful refund no longer fits.
    pub fn record_refund(
        &mut self,
        refund: Refund,
        now: DateTime<Utc>,
    ) -> Result<(), PaymentError> {
        if refund.status() == RefundStatus::Succeeded {
            let amount = self.prepare_refund(Some(refund.amount().amount()))?;
            self.refunded = self.refunded.checked_add(&amount)?;
            self.status = if self.refunded.amount() >= self.amount.amount() {
                PaymentStatus::Refunded
            } else {
                PaymentStatus::PartiallyRefunded
            };
        }
        self.refunds.push(refund);
        self.updated_at = now;
        Ok(())
    }

    fn ensure_can_process(&self, action: &'static str) -> Result<(), PaymentError> {
        if self.status.can_process() {
            Ok(())
        } else {
            Err(PaymentError::InvalidStateTransition {
                status: self.status,
                action,
            })
        }
    }

    fn ensure_processing(&self, action: &'static str) -> Result<(), PaymentError> {
        if self.status == PaymentStatus::Processing {
            Ok(())
        } else {
            Err(PaymentError::InvalidStateTransition {
                status: self.status,
                action,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::TimeZone;

    use super::*;
    use crate::domain::payment_method::{CardDetails, PaymentInstrument};
    use crate::domain::shared::{Currency, RefundId};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 1, 10, 0, 0).unwrap()
    }

    fn inr(amount: &str) -> Money {
        Money::new(Decimal::from_str(amount).unwrap(), Currency::parse("INR").unwrap()).unwrap()
    }

    fn visa() -> PaymentInstrument {
        PaymentInstrument::Card(CardDetails {
            number: "4111111111111111".to_string(),
            expiry_month: 12,
            expiry_year: 2030,
            cvv: "123".to_string(),
            holder_name: "Meera Nair".to_string(),
        })
    }

    fn command(amount: &str) -> CreatePaymentCommand {
        CreatePaymentCommand {
            customer_id: "cus_1".to_string(),
            amount: inr(amount),
            instrument: Some(visa()),
            description: "Pro plan".to_string(),
            metadata: BTreeMap::new(),
            idempotency_key: None,
        }
    }

    fn captured(amount: &str) -> Payment {
        let mut payment = Payment::new(command(amount), now()).unwrap();
        payment.start_processing(now()).unwrap();
        payment.mark_succeeded("ch_1".to_string(), now()).unwrap();
        payment
    }

    fn refund_of(payment: &Payment, amount: &str) -> Refund {
        Refund::succeeded(
            RefundId::generate(),
            payment.id().clone(),
            inr(amount),
            None,
            "rf_1".to_string(),
            now(),
        )
    }

    #[test]
    fn new_payment_is_pending() {
        let payment = Payment::new(command("499.00"), now()).unwrap();
        assert_eq!(payment.status(), PaymentStatus::Pending);
        assert_eq!(payment.refundable_amount(), Decimal::ZERO);
        assert!(payment.refunded().is_zero());
    }

    #[test]
    fn rejects_zero_amount_and_missing_customer() {
        assert!(matches!(
            Payment::new(command("0"), now()),
            Err(PaymentError::InvalidParameters { field, .. }) if field == "amount"
        ));

        let mut cmd = command("10");
        cmd.customer_id = "  ".to_string();
        assert!(Payment::new(cmd, now()).is_err());
    }

    #[test]
    fn processing_requires_instrument() {
        let mut cmd = command("10");
        cmd.instrument = None;
        let mut payment = Payment::new(cmd, now()).unwrap();
        assert!(matches!(
            payment.start_processing(now()),
            Err(PaymentError::MissingPaymentMethod { .. })
        ));
        payment.attach_instrument(visa(), now()).unwrap();
        payment.start_processing(now()).unwrap();
        assert_eq!(payment.status(), PaymentStatus::Processing);
    }

    #[test]
    fn failed_payment_can_be_retried() {
        let mut payment = Payment::new(command("10"), now()).unwrap();
        payment.start_processing(now()).unwrap();
        payment.mark_failed("card declined".to_string(), now()).unwrap();
        assert_eq!(payment.failure_reason(), Some("card declined"));

        payment.start_processing(now()).unwrap();
        assert_eq!(payment.failure_reason(), None);
        payment.mark_succeeded("ch_2".to_string(), now()).unwrap();
        assert_eq!(payment.attempts(), 2);
        assert_eq!(payment.gateway_reference(), Some("ch_2"));
    }

    #[test]
    fn succeeded_payment_cannot_be_processed_again() {
        let mut payment = captured("10");
        assert!(matches!(
            payment.start_processing(now()),
            Err(PaymentError::InvalidStateTransition {
                status: PaymentStatus::Succeeded,
                ..
            })
        ));
        assert!(payment.attach_instrument(visa(), now()).is_err());
    }

    #[test]
    fn completion_requires_processing() {
        let mut payment = Payment::new(command("10"), now()).unwrap();
        assert!(payment.mark_succeeded("ch".to_string(), now()).is_err());
        assert!(payment.mark_failed("x".to_string(), now()).is_err());
    }

    #[test]
    fn partial_then_full_refund() {
        let mut payment = captured("100");

        let amount = payment.prepare_refund(Some(Decimal::from(30))).unwrap();
        assert_eq!(amount.amount(), Decimal::from(30));
        let refund = refund_of(&payment, "30");
        payment.record_refund(refund, now()).unwrap();
        assert_eq!(payment.status(), PaymentStatus::PartiallyRefunded);
        assert_eq!(payment.refundable_amount(), Decimal::from(70));

        // None resolves to the remaining amount
        let rest = payment.prepare_refund(None).unwrap();
        assert_eq!(rest.amount(), Decimal::from(70));
        let refund = refund_of(&payment, "70");
        payment.record_refund(refund, now()).unwrap();
        assert_eq!(payment.status(), PaymentStatus::Refunded);
        assert_eq!(payment.refunded().amount(), Decimal::from(100));
        assert_eq!(payment.refunds().len(), 2);
    }

    #[test]
    fn sub_cent_refund_is_rejected_after_rounding() {
        let payment = captured("100");
        assert!(matches!(
            payment.prepare_refund(Some(Decimal::from_str("0.004").unwrap())),
            Err(PaymentError::InvalidParameters { field, .. }) if field == "amount"
        ));
        let rounded_up = payment
            .prepare_refund(Some(Decimal::from_str("0.005").unwrap()))
            .unwrap();
        assert_eq!(rounded_up.amount(), Decimal::from_str("0.01").unwrap());
    }

    #[test]
    fn refund_cannot_exceed_capture() {
        let payment = captured("100");
        assert!(matches!(
            payment.prepare_refund(Some(Decimal::from_str("100.01").unwrap())),
            Err(PaymentError::RefundExceedsAvailable { .. })
        ));
        assert!(matches!(
            payment.prepare_refund(Some(Decimal::ZERO)),
            Err(PaymentError::InvalidParameters { .. })
        ));
    }

    #[test]
    fn refund_requires_capture() {
        let payment = Payment::new(command("10"), now()).unwrap();
        assert!(matches!(
            payment.prepare_refund(None),
            Err(PaymentError::InvalidStateTransition { action: "refund", .. })
        ));
    }

    #[test]
    fn failed_refund_leaves_totals_alone() {
        let mut payment = captured("50");
        let refund = Refund::failed(
            RefundId::generate(),
            payment.id().clone(),
            inr("20"),
            Some("customer request".to_string()),
            "insufficient balance".to_string(),
            now(),
        );
        payment.record_refund(refund, now()).unwrap();
        assert_eq!(payment.status(), PaymentStatus::Succeeded);
        assert!(payment.refunded().is_zero());
        assert_eq!(payment.refunds().len(), 1);
    }

    #[test]
    fn replay_matching() {
        let payment = Payment::new(command("25"), now()).unwrap();
        assert!(payment.matches_request(&inr("25"), "cus_1"));
        assert!(!payment.matches_request(&inr("26"), "cus_1"));
    }
}
