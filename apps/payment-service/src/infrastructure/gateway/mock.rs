//! Mock payment gateway.
//!
//! Approves every charge except cards on the decline list and approves
//! every refund. Can be switched offline to exercise gateway failures.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::ports::{
    ChargeRequest, GatewayError, GatewayOutcome, PaymentGateway, RefundRequest,
};
use crate::domain::payment_method::PaymentInstrument;

/// Card numbers declined unless configured otherwise.
pub const DEFAULT_DECLINE_CARDS: &[&str] = &["4000000000000002"];

const DECLINE_REASON: &str = "card declined by issuer";

/// In-process gateway for development and tests.
#[derive(Debug)]
pub struct MockGateway {
    decline_cards: HashSet<String>,
    available: AtomicBool,
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new(DEFAULT_DECLINE_CARDS.iter().map(|c| (*c).to_string()))
    }
}

impl MockGateway {
    /// Create a gateway that declines the given card numbers.
    pub fn new(decline_cards: impl IntoIterator<Item = String>) -> Self {
        Self {
            decline_cards: decline_cards
                .into_iter()
                .map(|c| c.chars().filter(char::is_ascii_digit).collect())
                .collect(),
            available: AtomicBool::new(true),
        }
    }

    /// Take the gateway on or offline.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Whether the gateway is accepting requests.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    fn ensure_available(&self) -> Result<(), GatewayError> {
        if self.is_available() {
            Ok(())
        } else {
            Err(GatewayError::Unavailable {
                message: "mock gateway is offline".to_string(),
            })
        }
    }

    fn declines(&self, instrument: &PaymentInstrument) -> bool {
        match instrument {
            PaymentInstrument::Card(card) => self.decline_cards.contains(&card.digits()),
            _ => false,
        }
    }
}

#[async_trait]
impl PaymentGateway for MockGateway {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn charge(&self, request: ChargeRequest) -> Result<GatewayOutcome, GatewayError> {
        self.ensure_available()?;
        if self.declines(&request.instrument) {
            tracing::debug!(payment_id = %request.payment_id, "Mock gateway declined charge");
            return Ok(GatewayOutcome::Declined {
                reason: DECLINE_REASON.to_string(),
            });
        }
        Ok(GatewayOutcome::Approved {
            reference: format!("mock_ch_{}", Uuid::new_v4().simple()),
        })
    }

    async fn refund(&self, request: RefundRequest) -> Result<GatewayOutcome, GatewayError> {
        self.ensure_available()?;
        tracing::debug!(
            payment_id = %request.payment_id,
            refund_id = %request.refund_id,
            "Mock gateway approved refund"
        );
        Ok(GatewayOutcome::Approved {
            reference: format!("mock_rf_{}", Uuid::new_v4().simple()),
        })
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::payment_method::{CardDetails, MethodKind};
    use crate::domain::shared::{Currency, Money, PaymentId};

    fn charge(instrument: PaymentInstrument) -> ChargeRequest {
        ChargeRequest {
            payment_id: PaymentId::new("pay_test"),
            amount: Money::new(Decimal::from(5), Currency::parse("INR").unwrap()).unwrap(),
            instrument,
            description: String::new(),
        }
    }

    fn card(number: &str) -> PaymentInstrument {
        PaymentInstrument::Card(CardDetails {
            number: number.to_string(),
            expiry_month: 1,
            expiry_year: 2099,
            cvv: "123".to_string(),
            holder_name: "Test".to_string(),
        })
    }

    #[tokio::test]
    async fn declines_listed_cards_only() {
        let gateway = MockGateway::default();
        let declined = gateway
            .charge(charge(card("4000 0000 0000 0002")))
            .await
            .unwrap();
        assert!(matches!(declined, GatewayOutcome::Declined { .. }));

        let approved = gateway.charge(charge(card("4111111111111111"))).await.unwrap();
        assert!(matches!(
            approved,
            GatewayOutcome::Approved { reference } if reference.starts_with("mock_ch_")
        ));

        let saved = PaymentInstrument::Saved {
            kind: MethodKind::Card,
            token: "tok".to_string(),
        };
        assert!(matches!(
            gateway.charge(charge(saved)).await.unwrap(),
            GatewayOutcome::Approved { .. }
        ));
    }

    #[tokio::test]
    async fn offline_gateway_errors() {
        let gateway = MockGateway::new(Vec::new());
        gateway.set_available(false);
        assert!(gateway.charge(charge(card("4111111111111111"))).await.is_err());
        gateway.set_available(true);
        assert!(gateway.charge(charge(card("4000000000000002"))).await.is_ok());
    }
}
