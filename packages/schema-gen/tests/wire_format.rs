//! Wire Format Integration Tests
//!
//! Exercises the generated bindings through the public helpers: nested and
//! repeated messages, map fields, unknown enum values and unknown fields.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]

use proptest::prelude::*;
use test_case::test_case;

use riskpay_schema::payment::{
    self, CardBrand, CardDetails, Payment, PaymentMethod, PaymentMethodType, PaymentStatus,
    Subscription, SubscriptionStatus,
};
use riskpay_schema::risk::{
    self, AlertSeverity, ConcentrationMetrics, ExpectedShortfall, PortfolioRiskMetrics, RiskAlert,
    RiskLevel, RiskReport, StressScenario, StressTestResult, TradeDetails, TradeSide, ValueAtRisk,
    VarMethod,
};
use riskpay_schema::{Message, decode, encode, enum_name, from_object, to_object};

// =============================================================================
// Fixtures
// =============================================================================

fn portfolio_metrics() -> PortfolioRiskMetrics {
    let mut concentration = ConcentrationMetrics {
        herfindahl_index: 0.18,
        top_position_weight: 0.22,
        top_five_weight: 0.61,
        position_count: 14,
        ..Default::default()
    };
    concentration
        .sector_weights
        .insert("financials".to_string(), 0.35);
    concentration
        .sector_weights
        .insert("technology".to_string(), 0.28);

    let mut metrics = PortfolioRiskMetrics {
        portfolio_id: "pf-001".to_string(),
        value_at_risk: Some(ValueAtRisk {
            var_95: 12_500.0,
            var_99: 19_250.5,
            var_999: 31_000.25,
            method: VarMethod::Historical as i32,
            horizon_days: 1,
            lookback_days: 252,
        }),
        expected_shortfall: Some(ExpectedShortfall {
            es_95: 15_000.0,
            es_99: 23_000.0,
            es_999: 36_500.0,
        }),
        concentration: Some(concentration),
        overall_risk_score: 63.4,
        leverage: 1.35,
        calculated_at: "2025-02-10T09:15:00.000Z".to_string(),
        ..Default::default()
    };
    metrics.set_overall_risk_level(RiskLevel::Elevated);
    metrics.category_scores.insert("market".to_string(), 71.0);
    metrics.category_scores.insert("liquidity".to_string(), 22.5);
    metrics
}

fn card_payment() -> Payment {
    let mut method = PaymentMethod {
        card: Some(CardDetails {
            card_number: "4111111111111111".to_string(),
            expiry_month: 12,
            expiry_year: 2030,
            cvv: "123".to_string(),
            cardholder_name: "A. Shah".to_string(),
        }),
        last4: "1111".to_string(),
        ..Default::default()
    };
    method.set_method_type(PaymentMethodType::Card);
    method.set_card_brand(CardBrand::Visa);

    let mut payment = Payment {
        payment_id: "pay_123".to_string(),
        customer_id: "cus_9".to_string(),
        amount: 499.0,
        currency: "INR".to_string(),
        method: Some(method),
        description: "Premium plan".to_string(),
        created_at: "2025-02-10T09:15:00.000Z".to_string(),
        ..Default::default()
    };
    payment.set_status(PaymentStatus::Succeeded);
    payment
        .metadata
        .insert("order_id".to_string(), "ord_77".to_string());
    payment
}

// =============================================================================
// Round Trips
// =============================================================================

#[test]
fn portfolio_metrics_round_trip() {
    let metrics = portfolio_metrics();
    let decoded: PortfolioRiskMetrics = decode(&encode(&metrics)).unwrap();
    assert_eq!(decoded, metrics);

    let var = decoded.value_at_risk.unwrap();
    assert_eq!(var.var_95, 12_500.0);
    assert_eq!(var.var_99, 19_250.5);
    assert_eq!(var.var_999, 31_000.25);
    assert_eq!(var.method(), VarMethod::Historical);
}

#[test]
fn nested_report_round_trip() {
    let mut scenario = StressScenario {
        scenario_id: "covid-2020".to_string(),
        name: "March 2020 drawdown".to_string(),
        ..Default::default()
    };
    scenario.shocks.insert("equity".to_string(), -0.34);

    let mut alert = RiskAlert {
        alert_id: "al-1".to_string(),
        alert_type: "var_breach".to_string(),
        message: "VaR above limit".to_string(),
        ..Default::default()
    };
    alert.set_severity(AlertSeverity::High);
    alert.metrics.insert("var_95".to_string(), 0.12);

    let report = RiskReport {
        report_id: "rep-1".to_string(),
        portfolio_id: "pf-001".to_string(),
        metrics: Some(portfolio_metrics()),
        stress_results: vec![StressTestResult {
            scenario: Some(scenario),
            portfolio_impact: -340_000.0,
            impact_percent: -34.0,
            ..Default::default()
        }],
        alerts: vec![alert],
        summary: "Elevated market risk".to_string(),
        ..Default::default()
    };

    let decoded: RiskReport = decode(&encode(&report)).unwrap();
    assert_eq!(decoded, report);
    assert_eq!(decoded.alerts[0].severity(), AlertSeverity::High);
}

#[test]
fn payment_round_trip() {
    let payment = card_payment();
    let decoded: Payment = decode(&encode(&payment)).unwrap();
    assert_eq!(decoded, payment);
    assert_eq!(decoded.status(), PaymentStatus::Succeeded);
    assert_eq!(
        decoded.method.unwrap().card_brand(),
        CardBrand::Visa
    );
}

// =============================================================================
// proto3 Semantics
// =============================================================================

#[test_case(&risk::Portfolio::default().encode_to_vec() ; "portfolio")]
#[test_case(&risk::RiskReport::default().encode_to_vec() ; "risk report")]
#[test_case(&payment::Payment::default().encode_to_vec() ; "payment")]
#[test_case(&payment::Subscription::default().encode_to_vec() ; "subscription")]
fn default_messages_are_empty_on_the_wire(bytes: &[u8]) {
    assert!(bytes.is_empty());
}

#[test]
fn setting_a_field_back_to_default_removes_it() {
    let mut trade = TradeDetails {
        symbol: "INFY".to_string(),
        quantity: 10.0,
        ..Default::default()
    };
    let with_qty = encode(&trade).len();
    trade.quantity = 0.0;
    assert!(encode(&trade).len() < with_qty);
    trade.symbol.clear();
    assert!(encode(&trade).is_empty());
}

#[test]
fn unknown_enum_value_is_preserved() {
    let mut subscription = Subscription {
        subscription_id: "sub_1".to_string(),
        ..Default::default()
    };
    subscription.status = 42;

    let decoded: Subscription = decode(&encode(&subscription)).unwrap();
    assert_eq!(decoded.status, 42);
    // generated getter falls back to the zero value
    assert_eq!(decoded.status(), SubscriptionStatus::Unspecified);
    assert_eq!(enum_name::<SubscriptionStatus>(decoded.status), "UNKNOWN");
}

#[test]
fn unknown_fields_are_skipped() {
    // GetPaymentRequest only knows tag 1, which lines up with Payment.payment_id.
    let bytes = encode(&card_payment());
    let request: payment::GetPaymentRequest = decode(&bytes).unwrap();
    assert_eq!(request.payment_id, "pay_123");
}

#[test]
fn object_conversion_round_trip() {
    let metrics = portfolio_metrics();
    let object = to_object(&metrics).unwrap();
    assert_eq!(object["valueAtRisk"]["var999"], 31_000.25);
    assert_eq!(object["overallRiskLevel"], "RISK_LEVEL_ELEVATED");
    assert_eq!(object["valueAtRisk"]["method"], "VAR_METHOD_HISTORICAL");

    let back: PortfolioRiskMetrics = from_object(object).unwrap();
    assert_eq!(back, metrics);
}

// =============================================================================
// Property Tests
// =============================================================================

fn finite() -> impl Strategy<Value = f64> {
    -1.0e12f64..1.0e12f64
}

prop_compose! {
    fn arb_trade()(
        trade_id in "[a-z0-9-]{0,16}",
        symbol in "[A-Z]{0,6}",
        side in 0i32..5,
        quantity in finite(),
        price in finite(),
        venue in "[A-Z]{0,4}",
    ) -> TradeDetails {
        TradeDetails {
            trade_id,
            symbol,
            side,
            quantity,
            price,
            venue,
            ..Default::default()
        }
    }
}

proptest! {
    #[test]
    fn trade_details_round_trip(trade in arb_trade()) {
        let decoded: TradeDetails = decode(&encode(&trade)).unwrap();
        prop_assert_eq!(&decoded, &trade);
        prop_assert!(TradeSide::try_from(decoded.side).is_ok());
    }

    #[test]
    fn payment_amounts_round_trip(
        amount in finite(),
        refunded in finite(),
        status in 0i32..8,
        metadata in proptest::collection::btree_map("[a-z]{1,8}", "[a-z0-9]{0,8}", 0..4),
    ) {
        let payment = Payment {
            amount,
            refunded_amount: refunded,
            status,
            metadata,
            ..Default::default()
        };
        let decoded: Payment = decode(&encode(&payment)).unwrap();
        prop_assert_eq!(decoded, payment);
    }
}
