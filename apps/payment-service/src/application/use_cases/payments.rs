//! Payment Use Cases
//!
//! Create, read, list, charge and refund payments. Charging and refunding
//! hold an in-flight claim on the payment so that two requests cannot both
//! reach the gateway for the same payment.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;

use super::in_flight::{InFlight, InFlightGuard};
use super::pagination::{Page, PageRequest, PageSettings, paginate};
use crate::application::ports::{ChargeRequest, GatewayOutcome, PaymentGateway, RefundRequest};
use crate::domain::payment::{
    CreatePaymentCommand, Payment, PaymentError, PaymentFilter, PaymentRepository, Refund,
};
use crate::domain::payment_method::{PaymentInstrument, ValidationReport, validate_instrument};
use crate::domain::shared::{PaymentId, RefundId};

/// Result of a charge attempt.
#[derive(Debug, Clone)]
pub struct ProcessOutcome {
    /// Payment after the attempt.
    pub payment: Payment,
    /// The gateway captured the funds.
    pub success: bool,
    /// Human-readable outcome.
    pub message: String,
}

/// Payment operations over a repository and a gateway.
pub struct PaymentUseCases<R, G>
where
    R: PaymentRepository,
    G: PaymentGateway,
{
    repo: Arc<R>,
    gateway: Arc<G>,
    in_flight: InFlight,
    pages: PageSettings,
}

impl<R, G> PaymentUseCases<R, G>
where
    R: PaymentRepository,
    G: PaymentGateway,
{
    /// Create the use cases.
    pub fn new(repo: Arc<R>, gateway: Arc<G>, pages: PageSettings) -> Self {
        Self {
            repo,
            gateway,
            in_flight: InFlight::new(),
            pages,
        }
    }

    /// Create a pending payment.
    ///
    /// Replaying a request with the same customer and idempotency key
    /// returns the payment created the first time.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameters` or `InvalidPaymentMethod` for bad input
    /// and `IdempotencyConflict` when the key was used with a different
    /// amount.
    pub async fn create(&self, command: CreatePaymentCommand) -> Result<Payment, PaymentError> {
        if let Some(instrument) = &command.instrument {
            ensure_usable(instrument)?;
        }
        let payment = Payment::new(command, Utc::now())?;
        let stored = self.repo.insert(payment.clone()).await?;

        if stored.id() == payment.id() {
            tracing::info!(
                payment_id = %stored.id(),
                customer_id = stored.customer_id(),
                amount = %stored.amount(),
                "Payment created"
            );
            return Ok(stored);
        }

        if stored.matches_request(payment.amount(), payment.customer_id()) {
            tracing::debug!(payment_id = %stored.id(), "Idempotent replay of payment creation");
            Ok(stored)
        } else {
            Err(PaymentError::IdempotencyConflict {
                key: payment.idempotency_key().unwrap_or_default().to_string(),
            })
        }
    }

    /// Fetch a payment.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown ID.
    pub async fn get(&self, payment_id: &str) -> Result<Payment, PaymentError> {
        let id = parse_id(payment_id)?;
        self.repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| PaymentError::NotFound {
                payment_id: payment_id.to_string(),
            })
    }

    /// List payments matching a filter, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameters` for a bad page size or token.
    pub async fn list(
        &self,
        filter: &PaymentFilter,
        page_size: i32,
        page_token: &str,
    ) -> Result<Page<Payment>, PaymentError> {
        let request = PageRequest::parse(page_size, page_token, self.pages)
            .map_err(|e| PaymentError::invalid(e.field(), e.to_string()))?;
        let matching = self.repo.find_matching(filter).await?;
        Ok(paginate(matching, request))
    }

    /// Charge a payment, optionally replacing its instrument first.
    ///
    /// A decline is a normal outcome: the payment is saved as failed and
    /// `success` is false. A failed payment may be processed again.
    ///
    /// # Errors
    ///
    /// Returns `Busy` while another request works on the payment,
    /// `InvalidStateTransition` when it cannot be charged and `Gateway`
    /// when the processor is unreachable, in which case the payment is
    /// saved as failed.
    pub async fn process(
        &self,
        payment_id: &str,
        instrument: Option<PaymentInstrument>,
    ) -> Result<ProcessOutcome, PaymentError> {
        let id = parse_id(payment_id)?;
        let _claim = self.claim(id.as_str())?;
        let mut payment = self.get(id.as_str()).await?;
        let now = Utc::now();

        if let Some(instrument) = instrument {
            ensure_usable(&instrument)?;
            payment.attach_instrument(instrument, now)?;
        } else if let Some(instrument) = payment.instrument() {
            ensure_usable(instrument)?;
        }

        payment.start_processing(now)?;
        self.repo.update(&payment).await?;

        let instrument = payment
            .instrument()
            .cloned()
            .ok_or_else(|| PaymentError::MissingPaymentMethod {
                payment_id: payment_id.to_string(),
            })?;
        let request = ChargeRequest {
            payment_id: payment.id().clone(),
            amount: payment.amount().clone(),
            instrument,
            description: payment.description().to_string(),
        };

        let outcome = self.gateway.charge(request).await;
        let now = Utc::now();
        let (success, message) = match outcome {
            Ok(GatewayOutcome::Approved { reference }) => {
                payment.mark_succeeded(reference, now)?;
                (true, "payment captured".to_string())
            }
            Ok(GatewayOutcome::Declined { reason }) => {
                payment.mark_failed(reason.clone(), now)?;
                (false, reason)
            }
            Err(e) => {
                tracing::warn!(
                    payment_id,
                    gateway = self.gateway.name(),
                    error = %e,
                    "Charge failed at gateway"
                );
                payment.mark_failed(e.to_string(), now)?;
                self.repo.update(&payment).await?;
                return Err(PaymentError::Gateway(e.to_string()));
            }
        };
        self.repo.update(&payment).await?;

        tracing::info!(
            payment_id,
            gateway = self.gateway.name(),
            status = %payment.status(),
            attempt = payment.attempts(),
            "Payment processed"
        );
        Ok(ProcessOutcome {
            payment,
            success,
            message,
        })
    }

    /// Refund part or all of a captured payment. `None` refunds whatever
    /// remains.
    ///
    /// A declined refund is recorded with status failed and leaves the
    /// payment unchanged.
    ///
    /// # Errors
    ///
    /// Returns `Busy`, `InvalidStateTransition` for payments that were never
    /// captured or are fully refunded, `RefundExceedsAvailable` and
    /// `Gateway` when the processor is unreachable.
    pub async fn refund(
        &self,
        payment_id: &str,
        amount: Option<Decimal>,
        reason: Option<String>,
    ) -> Result<(Refund, Payment), PaymentError> {
        let id = parse_id(payment_id)?;
        let _claim = self.claim(id.as_str())?;
        let mut payment = self.get(id.as_str()).await?;
        let amount = payment.prepare_refund(amount)?;

        let refund_id = RefundId::generate();
        let request = RefundRequest {
            payment_id: payment.id().clone(),
            refund_id: refund_id.clone(),
            amount: amount.clone(),
            charge_reference: payment.gateway_reference().unwrap_or_default().to_string(),
        };
        let outcome = self
            .gateway
            .refund(request)
            .await
            .map_err(|e| PaymentError::Gateway(e.to_string()))?;

        let now = Utc::now();
        let refund = match outcome {
            GatewayOutcome::Approved { reference } => Refund::succeeded(
                refund_id,
                payment.id().clone(),
                amount,
                reason,
                reference,
                now,
            ),
            GatewayOutcome::Declined { reason: declined } => Refund::failed(
                refund_id,
                payment.id().clone(),
                amount,
                reason,
                declined,
                now,
            ),
        };
        payment.record_refund(refund.clone(), now)?;
        self.repo.update(&payment).await?;

        tracing::info!(
            payment_id,
            refund_id = %refund.id(),
            amount = %refund.amount(),
            refund_status = %refund.status(),
            "Refund recorded"
        );
        Ok((refund, payment))
    }

    /// Check an instrument without storing anything.
    #[must_use]
    pub fn validate_method(&self, instrument: &PaymentInstrument) -> ValidationReport {
        validate_instrument(instrument, Utc::now().date_naive())
    }

    fn claim(&self, payment_id: &str) -> Result<InFlightGuard, PaymentError> {
        self.in_flight
            .try_claim(payment_id)
            .ok_or_else(|| PaymentError::Busy {
                payment_id: payment_id.to_string(),
            })
    }
}

fn parse_id(payment_id: &str) -> Result<PaymentId, PaymentError> {
    let trimmed = payment_id.trim();
    if trimmed.is_empty() {
        return Err(PaymentError::invalid("payment_id", "is required"));
    }
    Ok(PaymentId::new(trimmed))
}

fn ensure_usable(instrument: &PaymentInstrument) -> Result<(), PaymentError> {
    let report = validate_instrument(instrument, Utc::now().date_naive());
    if report.is_valid() {
        Ok(())
    } else {
        Err(PaymentError::InvalidPaymentMethod {
            errors: report.errors,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::str::FromStr;

    use super::*;
    use crate::domain::payment::{PaymentStatus, RefundStatus};
    use crate::domain::payment_method::{CardDetails, MethodKind};
    use crate::domain::shared::{Currency, Money};
    use crate::infrastructure::gateway::MockGateway;
    use crate::infrastructure::persistence::InMemoryPaymentRepository;

    type UseCases = PaymentUseCases<InMemoryPaymentRepository, MockGateway>;

    fn setup() -> (UseCases, Arc<MockGateway>) {
        let gateway = Arc::new(MockGateway::default());
        let use_cases = PaymentUseCases::new(
            Arc::new(InMemoryPaymentRepository::new()),
            Arc::clone(&gateway),
            PageSettings::default(),
        );
        (use_cases, gateway)
    }

    fn inr(amount: &str) -> Money {
        Money::new(
            Decimal::from_str(amount).unwrap(),
            Currency::parse("INR").unwrap(),
        )
        .unwrap()
    }

    fn card(number: &str) -> PaymentInstrument {
        PaymentInstrument::Card(CardDetails {
            number: number.to_string(),
            expiry_month: 12,
            expiry_year: 2099,
            cvv: "123".to_string(),
            holder_name: "Asha Rao".to_string(),
        })
    }

    fn command(customer: &str, amount: &str, key: Option<&str>) -> CreatePaymentCommand {
        CreatePaymentCommand {
            customer_id: customer.to_string(),
            amount: inr(amount),
            instrument: Some(card("4111111111111111")),
            description: "order 42".to_string(),
            metadata: BTreeMap::new(),
            idempotency_key: key.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn create_is_idempotent_per_key() {
        let (uc, _) = setup();
        let first = uc.create(command("cus_1", "100", Some("k1"))).await.unwrap();
        let replay = uc.create(command("cus_1", "100", Some("k1"))).await.unwrap();
        assert_eq!(first.id(), replay.id());

        let other_customer = uc.create(command("cus_2", "100", Some("k1"))).await.unwrap();
        assert_ne!(first.id(), other_customer.id());

        let conflict = uc.create(command("cus_1", "250", Some("k1"))).await;
        assert!(matches!(
            conflict,
            Err(PaymentError::IdempotencyConflict { key }) if key == "k1"
        ));
    }

    #[tokio::test]
    async fn create_rejects_invalid_card() {
        let (uc, _) = setup();
        let mut cmd = command("cus_1", "100", None);
        cmd.instrument = Some(card("4111111111111112"));
        assert!(matches!(
            uc.create(cmd).await,
            Err(PaymentError::InvalidPaymentMethod { .. })
        ));
    }

    #[tokio::test]
    async fn process_then_refund_in_parts() {
        let (uc, _) = setup();
        let payment = uc.create(command("cus_1", "100", None)).await.unwrap();
        let id = payment.id().to_string();

        let outcome = uc.process(&id, None).await.unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.payment.status(), PaymentStatus::Succeeded);
        assert!(outcome.payment.gateway_reference().is_some());

        let (refund, after) = uc
            .refund(&id, Some(Decimal::from(40)), Some("damaged".to_string()))
            .await
            .unwrap();
        assert_eq!(refund.status(), RefundStatus::Succeeded);
        assert_eq!(after.status(), PaymentStatus::PartiallyRefunded);
        assert_eq!(after.refunded().amount(), Decimal::from(40));

        let too_much = uc.refund(&id, Some(Decimal::from(61)), None).await;
        assert!(matches!(
            too_much,
            Err(PaymentError::RefundExceedsAvailable { .. })
        ));

        let (rest, after) = uc.refund(&id, None, None).await.unwrap();
        assert_eq!(rest.amount().amount(), Decimal::from(60));
        assert_eq!(after.status(), PaymentStatus::Refunded);

        let again = uc.refund(&id, None, None).await;
        assert!(matches!(
            again,
            Err(PaymentError::InvalidStateTransition { .. })
        ));
    }

    #[tokio::test]
    async fn sub_cent_refund_never_reaches_gateway() {
        let (uc, _) = setup();
        let payment = uc.create(command("cus_1", "100", None)).await.unwrap();
        let id = payment.id().to_string();
        uc.process(&id, None).await.unwrap();

        let result = uc
            .refund(&id, Some(Decimal::from_str("0.004").unwrap()), None)
            .await;
        assert!(matches!(
            result,
            Err(PaymentError::InvalidParameters { field, .. }) if field == "amount"
        ));

        let stored = uc.get(&id).await.unwrap();
        assert_eq!(stored.status(), PaymentStatus::Succeeded);
        assert!(stored.refunds().is_empty());
    }

    #[tokio::test]
    async fn declined_charge_can_be_retried_with_new_card() {
        let (uc, _) = setup();
        let mut cmd = command("cus_1", "100", None);
        cmd.instrument = Some(card("4000000000000002"));
        let payment = uc.create(cmd).await.unwrap();
        let id = payment.id().to_string();

        let declined = uc.process(&id, None).await.unwrap();
        assert!(!declined.success);
        assert_eq!(declined.payment.status(), PaymentStatus::Failed);
        assert!(declined.payment.failure_reason().is_some());

        let retried = uc
            .process(&id, Some(card("5555555555554444")))
            .await
            .unwrap();
        assert!(retried.success);
        assert_eq!(retried.payment.attempts(), 2);
        assert!(retried.payment.failure_reason().is_none());
    }

    #[tokio::test]
    async fn succeeded_payment_cannot_be_processed_again() {
        let (uc, _) = setup();
        let payment = uc.create(command("cus_1", "10", None)).await.unwrap();
        let id = payment.id().to_string();
        uc.process(&id, None).await.unwrap();
        assert!(matches!(
            uc.process(&id, None).await,
            Err(PaymentError::InvalidStateTransition { .. })
        ));
    }

    #[tokio::test]
    async fn process_without_method_fails() {
        let (uc, _) = setup();
        let mut cmd = command("cus_1", "10", None);
        cmd.instrument = None;
        let payment = uc.create(cmd).await.unwrap();
        assert!(matches!(
            uc.process(payment.id().as_str(), None).await,
            Err(PaymentError::MissingPaymentMethod { .. })
        ));
    }

    #[tokio::test]
    async fn unreachable_gateway_marks_payment_failed() {
        let (uc, gateway) = setup();
        let payment = uc.create(command("cus_1", "10", None)).await.unwrap();
        let id = payment.id().to_string();

        gateway.set_available(false);
        assert!(matches!(
            uc.process(&id, None).await,
            Err(PaymentError::Gateway(_))
        ));
        assert_eq!(uc.get(&id).await.unwrap().status(), PaymentStatus::Failed);

        gateway.set_available(true);
        let saved = PaymentInstrument::Saved {
            kind: MethodKind::Card,
            token: "tok_1".to_string(),
        };
        assert!(uc.process(&id, Some(saved)).await.unwrap().success);
    }

    #[tokio::test]
    async fn busy_payment_is_rejected() {
        let (uc, _) = setup();
        let payment = uc.create(command("cus_1", "10", None)).await.unwrap();
        let id = payment.id().to_string();

        let _held = uc.in_flight.try_claim(&id);
        assert!(matches!(
            uc.process(&id, None).await,
            Err(PaymentError::Busy { .. })
        ));
    }

    #[tokio::test]
    async fn claim_ignores_surrounding_whitespace_in_id() {
        let (uc, _) = setup();
        let payment = uc.create(command("cus_1", "10", None)).await.unwrap();
        let id = payment.id().to_string();
        uc.process(&id, None).await.unwrap();

        let _held = uc.in_flight.try_claim(&id);
        assert!(matches!(
            uc.process(&format!(" {id}"), None).await,
            Err(PaymentError::Busy { .. })
        ));
        assert!(matches!(
            uc.refund(&format!("{id}\t"), None, None).await,
            Err(PaymentError::Busy { .. })
        ));
    }

    #[tokio::test]
    async fn list_filters_and_pages() {
        let (uc, _) = setup();
        for _ in 0..3 {
            uc.create(command("cus_1", "10", None)).await.unwrap();
        }
        uc.create(command("cus_2", "10", None)).await.unwrap();

        let filter = PaymentFilter {
            customer_id: Some("cus_1".to_string()),
            status: None,
        };
        let page = uc.list(&filter, 2, "").await.unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total, 3);
        assert_eq!(page.next_page_token, "2");

        let rest = uc.list(&filter, 2, &page.next_page_token).await.unwrap();
        assert_eq!(rest.items.len(), 1);
        assert!(rest.next_page_token.is_empty());

        assert!(uc.list(&filter, -1, "").await.is_err());
        assert!(uc.list(&filter, 2, "zz").await.is_err());
    }

    #[tokio::test]
    async fn no_operation_produces_cancelled() {
        let (uc, _) = setup();
        uc.create(command("cus_1", "10", None)).await.unwrap();
        let charged = uc.create(command("cus_1", "10", None)).await.unwrap();
        let id = charged.id().to_string();
        uc.process(&id, None).await.unwrap();
        uc.refund(&id, None, None).await.unwrap();

        let filter = PaymentFilter {
            customer_id: None,
            status: Some(PaymentStatus::Cancelled),
        };
        let page = uc.list(&filter, 10, "").await.unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
    }

    #[tokio::test]
    async fn get_unknown_payment() {
        let (uc, _) = setup();
        assert!(matches!(
            uc.get("pay_missing").await,
            Err(PaymentError::NotFound { .. })
        ));
        assert!(matches!(
            uc.get("  ").await,
            Err(PaymentError::InvalidParameters { .. })
        ));
    }
}
