//! Conversions between protobuf messages and domain types.
//!
//! Inbound conversions validate shape only (required fields, enum ranges,
//! finite amounts); business rules stay in the domain. Outbound payment
//! methods never carry a card or account number or a CVV.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use riskpay_schema::time::{optional_rfc3339, to_rfc3339};

use super::errors::ServiceError;
use super::proto;
use crate::domain::payment::{
    CreatePaymentCommand, Payment, PaymentFilter, PaymentStatus, Refund, RefundStatus,
};
use crate::domain::payment_method::{
    BankAccount, CardDetails, CardNetwork, MethodKind, PaymentInstrument, ValidationReport,
};
use crate::domain::shared::{Currency, Money};
use crate::domain::subscription::{
    BillingInterval, CreateSubscriptionCommand, MAX_TRIAL_DAYS, Subscription,
    SubscriptionChanges, SubscriptionStatus, SubscriptionTier,
};

// =============================================================================
// Scalars
// =============================================================================

/// Wire amount to `Decimal`. Rejects NaN and infinities.
///
/// # Errors
///
/// Returns an invalid-field error naming `field`.
pub fn decimal_from_f64(field: &str, value: f64) -> Result<Decimal, ServiceError> {
    if !value.is_finite() {
        return Err(ServiceError::invalid_field(field, "must be a finite number"));
    }
    Decimal::try_from(value).map_err(|e| ServiceError::invalid_field(field, e.to_string()))
}

/// `Decimal` to wire amount.
#[must_use]
pub fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

fn money_to_f64(money: &Money) -> f64 {
    decimal_to_f64(money.amount())
}

/// Parse a currency code, falling back to `default` when blank.
///
/// # Errors
///
/// Returns an invalid-field error for malformed codes.
pub fn currency_or_default(code: &str, default: &Currency) -> Result<Currency, ServiceError> {
    if code.trim().is_empty() {
        Ok(default.clone())
    } else {
        Ok(Currency::parse(code)?)
    }
}

/// Blank strings mean "not provided".
fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// =============================================================================
// Enums
// =============================================================================

fn unknown_enum(field: &str, value: i32) -> ServiceError {
    ServiceError::invalid_field(field, format!("unknown value {value}"))
}

/// Payment status filter; `UNSPECIFIED` means no filter.
///
/// # Errors
///
/// Returns an invalid-field error for values outside the enum.
pub fn payment_status_filter(value: i32) -> Result<Option<PaymentStatus>, ServiceError> {
    let status = proto::PaymentStatus::try_from(value).map_err(|_| unknown_enum("status", value))?;
    Ok(match status {
        proto::PaymentStatus::Unspecified => None,
        proto::PaymentStatus::Pending => Some(PaymentStatus::Pending),
        proto::PaymentStatus::Processing => Some(PaymentStatus::Processing),
        proto::PaymentStatus::Succeeded => Some(PaymentStatus::Succeeded),
        proto::PaymentStatus::Failed => Some(PaymentStatus::Failed),
        proto::PaymentStatus::Cancelled => Some(PaymentStatus::Cancelled),
        proto::PaymentStatus::Refunded => Some(PaymentStatus::Refunded),
        proto::PaymentStatus::PartiallyRefunded => Some(PaymentStatus::PartiallyRefunded),
    })
}

/// Domain payment status to proto.
#[must_use]
pub const fn payment_status_to_proto(status: PaymentStatus) -> proto::PaymentStatus {
    match status {
        PaymentStatus::Pending => proto::PaymentStatus::Pending,
        PaymentStatus::Processing => proto::PaymentStatus::Processing,
        PaymentStatus::Succeeded => proto::PaymentStatus::Succeeded,
        PaymentStatus::Failed => proto::PaymentStatus::Failed,
        PaymentStatus::Cancelled => proto::PaymentStatus::Cancelled,
        PaymentStatus::Refunded => proto::PaymentStatus::Refunded,
        PaymentStatus::PartiallyRefunded => proto::PaymentStatus::PartiallyRefunded,
    }
}

const fn refund_status_to_proto(status: RefundStatus) -> proto::RefundStatus {
    match status {
        RefundStatus::Pending => proto::RefundStatus::Pending,
        RefundStatus::Succeeded => proto::RefundStatus::Succeeded,
        RefundStatus::Failed => proto::RefundStatus::Failed,
    }
}

fn method_kind_from_proto(value: i32) -> Result<MethodKind, ServiceError> {
    match proto::PaymentMethodType::try_from(value) {
        Ok(proto::PaymentMethodType::Card) => Ok(MethodKind::Card),
        Ok(proto::PaymentMethodType::Upi) => Ok(MethodKind::Upi),
        Ok(proto::PaymentMethodType::Netbanking) => Ok(MethodKind::Netbanking),
        Ok(proto::PaymentMethodType::Wallet) => Ok(MethodKind::Wallet),
        Ok(proto::PaymentMethodType::BankTransfer) => Ok(MethodKind::BankTransfer),
        Ok(proto::PaymentMethodType::Unspecified) => Err(ServiceError::invalid_field(
            "method.method_type",
            "is required",
        )),
        Err(_) => Err(unknown_enum("method.method_type", value)),
    }
}

const fn method_kind_to_proto(kind: MethodKind) -> proto::PaymentMethodType {
    match kind {
        MethodKind::Card => proto::PaymentMethodType::Card,
        MethodKind::Upi => proto::PaymentMethodType::Upi,
        MethodKind::Netbanking => proto::PaymentMethodType::Netbanking,
        MethodKind::Wallet => proto::PaymentMethodType::Wallet,
        MethodKind::BankTransfer => proto::PaymentMethodType::BankTransfer,
    }
}

/// Card network to proto card brand.
#[must_use]
pub const fn card_brand_to_proto(network: CardNetwork) -> proto::CardBrand {
    match network {
        CardNetwork::Visa => proto::CardBrand::Visa,
        CardNetwork::Mastercard => proto::CardBrand::Mastercard,
        CardNetwork::Amex => proto::CardBrand::Amex,
        CardNetwork::Rupay => proto::CardBrand::Rupay,
        CardNetwork::Diners => proto::CardBrand::Diners,
        CardNetwork::Discover => proto::CardBrand::Discover,
        CardNetwork::Jcb => proto::CardBrand::Jcb,
    }
}

/// Subscription status filter; `UNSPECIFIED` means no filter.
///
/// # Errors
///
/// Returns an invalid-field error for values outside the enum.
pub fn subscription_status_filter(value: i32) -> Result<Option<SubscriptionStatus>, ServiceError> {
    let status =
        proto::SubscriptionStatus::try_from(value).map_err(|_| unknown_enum("status", value))?;
    Ok(match status {
        proto::SubscriptionStatus::Unspecified => None,
        proto::SubscriptionStatus::Trial => Some(SubscriptionStatus::Trial),
        proto::SubscriptionStatus::Active => Some(SubscriptionStatus::Active),
        proto::SubscriptionStatus::PastDue => Some(SubscriptionStatus::PastDue),
        proto::SubscriptionStatus::Paused => Some(SubscriptionStatus::Paused),
        proto::SubscriptionStatus::Cancelled => Some(SubscriptionStatus::Cancelled),
        proto::SubscriptionStatus::Expired => Some(SubscriptionStatus::Expired),
    })
}

const fn subscription_status_to_proto(status: SubscriptionStatus) -> proto::SubscriptionStatus {
    match status {
        SubscriptionStatus::Trial => proto::SubscriptionStatus::Trial,
        SubscriptionStatus::Active => proto::SubscriptionStatus::Active,
        SubscriptionStatus::PastDue => proto::SubscriptionStatus::PastDue,
        SubscriptionStatus::Paused => proto::SubscriptionStatus::Paused,
        SubscriptionStatus::Cancelled => proto::SubscriptionStatus::Cancelled,
        SubscriptionStatus::Expired => proto::SubscriptionStatus::Expired,
    }
}

fn tier_from_proto(value: i32) -> Result<Option<SubscriptionTier>, ServiceError> {
    let tier = proto::SubscriptionTier::try_from(value).map_err(|_| unknown_enum("tier", value))?;
    Ok(match tier {
        proto::SubscriptionTier::Unspecified => None,
        proto::SubscriptionTier::Free => Some(SubscriptionTier::Free),
        proto::SubscriptionTier::Basic => Some(SubscriptionTier::Basic),
        proto::SubscriptionTier::Premium => Some(SubscriptionTier::Premium),
        proto::SubscriptionTier::Professional => Some(SubscriptionTier::Professional),
        proto::SubscriptionTier::Enterprise => Some(SubscriptionTier::Enterprise),
    })
}

const fn tier_to_proto(tier: SubscriptionTier) -> proto::SubscriptionTier {
    match tier {
        SubscriptionTier::Free => proto::SubscriptionTier::Free,
        SubscriptionTier::Basic => proto::SubscriptionTier::Basic,
        SubscriptionTier::Premium => proto::SubscriptionTier::Premium,
        SubscriptionTier::Professional => proto::SubscriptionTier::Professional,
        SubscriptionTier::Enterprise => proto::SubscriptionTier::Enterprise,
    }
}

fn interval_from_proto(value: i32) -> Result<Option<BillingInterval>, ServiceError> {
    let interval = proto::BillingInterval::try_from(value)
        .map_err(|_| unknown_enum("billing_interval", value))?;
    Ok(match interval {
        proto::BillingInterval::Unspecified => None,
        proto::BillingInterval::Monthly => Some(BillingInterval::Monthly),
        proto::BillingInterval::Quarterly => Some(BillingInterval::Quarterly),
        proto::BillingInterval::Yearly => Some(BillingInterval::Yearly),
    })
}

const fn interval_to_proto(interval: BillingInterval) -> proto::BillingInterval {
    match interval {
        BillingInterval::Monthly => proto::BillingInterval::Monthly,
        BillingInterval::Quarterly => proto::BillingInterval::Quarterly,
        BillingInterval::Yearly => proto::BillingInterval::Yearly,
    }
}

// =============================================================================
// Payment methods
// =============================================================================

/// Build an instrument from a request's payment method.
///
/// A non-empty `token` selects a saved instrument; otherwise the details
/// message matching `method_type` must be present.
///
/// # Errors
///
/// Returns an invalid-field error for a missing type or missing details.
pub fn instrument_from_proto(
    method: &proto::PaymentMethod,
) -> Result<PaymentInstrument, ServiceError> {
    let kind = method_kind_from_proto(method.method_type)?;

    if let Some(token) = non_blank(&method.token) {
        return Ok(PaymentInstrument::Saved { kind, token });
    }

    let missing = |name: &str| {
        ServiceError::invalid_field(
            format!("method.{name}"),
            format!("is required for {kind} payments"),
        )
    };

    match kind {
        MethodKind::Card => {
            let card = method.card.as_ref().ok_or_else(|| missing("card"))?;
            Ok(PaymentInstrument::Card(CardDetails {
                number: card.card_number.clone(),
                expiry_month: u32::try_from(card.expiry_month).unwrap_or(0),
                expiry_year: card.expiry_year,
                cvv: card.cvv.clone(),
                holder_name: card.cardholder_name.clone(),
            }))
        }
        MethodKind::Upi => {
            let upi = method.upi.as_ref().ok_or_else(|| missing("upi"))?;
            Ok(PaymentInstrument::Upi {
                vpa: upi.vpa.trim().to_string(),
            })
        }
        MethodKind::Netbanking | MethodKind::BankTransfer => {
            let account = method
                .bank_account
                .as_ref()
                .ok_or_else(|| missing("bank_account"))?;
            let account = BankAccount {
                account_number: account.account_number.clone(),
                ifsc: account.ifsc_code.trim().to_string(),
                holder_name: account.account_holder_name.clone(),
                bank_name: account.bank_name.clone(),
            };
            Ok(if kind == MethodKind::Netbanking {
                PaymentInstrument::Netbanking(account)
            } else {
                PaymentInstrument::BankTransfer(account)
            })
        }
        MethodKind::Wallet => {
            let wallet = method.wallet.as_ref().ok_or_else(|| missing("wallet"))?;
            Ok(PaymentInstrument::Wallet {
                provider: wallet.provider.clone(),
                wallet_id: wallet.wallet_id.clone(),
            })
        }
    }
}

fn optional_instrument(
    method: Option<&proto::PaymentMethod>,
) -> Result<Option<PaymentInstrument>, ServiceError> {
    method.map(instrument_from_proto).transpose()
}

/// Instrument to a response payment method with sensitive fields removed.
#[must_use]
pub fn method_to_proto(instrument: &PaymentInstrument) -> proto::PaymentMethod {
    let mut method = proto::PaymentMethod {
        last4: instrument.last4().unwrap_or_default(),
        ..Default::default()
    };
    method.set_method_type(method_kind_to_proto(instrument.kind()));
    if let Some(network) = instrument.card_network() {
        method.set_card_brand(card_brand_to_proto(network));
    }

    match instrument {
        PaymentInstrument::Card(card) => {
            method.card = Some(proto::CardDetails {
                expiry_month: i32::try_from(card.expiry_month).unwrap_or_default(),
                expiry_year: card.expiry_year,
                cardholder_name: card.holder_name.clone(),
                ..Default::default()
            });
        }
        PaymentInstrument::Upi { vpa } => {
            method.upi = Some(proto::UpiDetails { vpa: vpa.clone() });
        }
        PaymentInstrument::Netbanking(account) | PaymentInstrument::BankTransfer(account) => {
            method.bank_account = Some(proto::BankAccountDetails {
                ifsc_code: account.ifsc.clone(),
                account_holder_name: account.holder_name.clone(),
                bank_name: account.bank_name.clone(),
                ..Default::default()
            });
        }
        PaymentInstrument::Wallet {
            provider,
            wallet_id,
        } => {
            method.wallet = Some(proto::WalletDetails {
                provider: provider.clone(),
                wallet_id: wallet_id.clone(),
            });
        }
        PaymentInstrument::Saved { token, .. } => {
            method.token.clone_from(token);
        }
    }
    method
}

/// Validation report to response.
#[must_use]
pub fn validation_to_proto(report: ValidationReport) -> proto::ValidatePaymentMethodResponse {
    let mut response = proto::ValidatePaymentMethodResponse {
        valid: report.is_valid(),
        masked_number: report.masked_number.unwrap_or_default(),
        errors: report.errors,
        ..Default::default()
    };
    if let Some(network) = report.card_network {
        response.set_card_brand(card_brand_to_proto(network));
    }
    response
}

// =============================================================================
// Payments
// =============================================================================

/// Payment aggregate to proto.
#[must_use]
pub fn payment_to_proto(payment: &Payment) -> proto::Payment {
    let mut message = proto::Payment {
        payment_id: payment.id().to_string(),
        customer_id: payment.customer_id().to_string(),
        amount: money_to_f64(payment.amount()),
        currency: payment.amount().currency().to_string(),
        method: payment.instrument().map(method_to_proto),
        description: payment.description().to_string(),
        metadata: payment.metadata().clone(),
        gateway_reference: payment.gateway_reference().unwrap_or_default().to_string(),
        failure_reason: payment.failure_reason().unwrap_or_default().to_string(),
        refunded_amount: money_to_f64(payment.refunded()),
        idempotency_key: payment.idempotency_key().unwrap_or_default().to_string(),
        created_at: to_rfc3339(payment.created_at()),
        updated_at: to_rfc3339(payment.updated_at()),
        ..Default::default()
    };
    message.set_status(payment_status_to_proto(payment.status()));
    message
}

/// Refund to proto.
#[must_use]
pub fn refund_to_proto(refund: &Refund) -> proto::Refund {
    let mut message = proto::Refund {
        refund_id: refund.id().to_string(),
        payment_id: refund.payment_id().to_string(),
        amount: money_to_f64(refund.amount()),
        currency: refund.amount().currency().to_string(),
        reason: refund.reason().unwrap_or_default().to_string(),
        gateway_reference: refund.gateway_reference().unwrap_or_default().to_string(),
        created_at: to_rfc3339(refund.created_at()),
        ..Default::default()
    };
    message.set_status(refund_status_to_proto(refund.status()));
    message
}

/// `CreatePaymentRequest` to command.
///
/// # Errors
///
/// Returns an invalid-field error for a bad amount, currency or method.
pub fn create_payment_command(
    request: &proto::CreatePaymentRequest,
    default_currency: &Currency,
) -> Result<CreatePaymentCommand, ServiceError> {
    let currency = currency_or_default(&request.currency, default_currency)?;
    let amount = Money::new(decimal_from_f64("amount", request.amount)?, currency)?;
    Ok(CreatePaymentCommand {
        customer_id: request.customer_id.trim().to_string(),
        amount,
        instrument: optional_instrument(request.method.as_ref())?,
        description: request.description.clone(),
        metadata: request.metadata.clone(),
        idempotency_key: non_blank(&request.idempotency_key),
    })
}

/// `ListPaymentsRequest` to filter.
///
/// # Errors
///
/// Returns an invalid-field error for an unknown status.
pub fn payment_filter(request: &proto::ListPaymentsRequest) -> Result<PaymentFilter, ServiceError> {
    Ok(PaymentFilter {
        customer_id: non_blank(&request.customer_id),
        status: payment_status_filter(request.status)?,
    })
}

/// Refund amount from the wire; zero refunds whatever remains.
///
/// # Errors
///
/// Returns an invalid-field error for negative or non-finite amounts.
pub fn refund_amount(amount: f64) -> Result<Option<Decimal>, ServiceError> {
    let amount = decimal_from_f64("amount", amount)?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ServiceError::invalid_field("amount", "must not be negative"));
    }
    Ok((!amount.is_zero()).then_some(amount))
}

/// Optional free-text field.
#[must_use]
pub fn optional_text(value: &str) -> Option<String> {
    non_blank(value)
}

// =============================================================================
// Subscriptions
// =============================================================================

fn optional_time(at: Option<DateTime<Utc>>) -> String {
    optional_rfc3339(at)
}

/// Subscription aggregate to proto.
#[must_use]
pub fn subscription_to_proto(subscription: &Subscription) -> proto::Subscription {
    let mut message = proto::Subscription {
        subscription_id: subscription.id().to_string(),
        customer_id: subscription.customer_id().to_string(),
        plan_id: subscription.plan_id().to_string(),
        amount: money_to_f64(subscription.price()),
        currency: subscription.price().currency().to_string(),
        payment_method: subscription.instrument().map(method_to_proto),
        current_period_start: to_rfc3339(subscription.current_period_start()),
        current_period_end: to_rfc3339(subscription.current_period_end()),
        trial_end: optional_time(subscription.trial_end()),
        cancel_at_period_end: subscription.cancel_at_period_end(),
        cancelled_at: optional_time(subscription.cancelled_at()),
        cancellation_reason: subscription
            .cancellation_reason()
            .unwrap_or_default()
            .to_string(),
        metadata: subscription.metadata().clone(),
        created_at: to_rfc3339(subscription.created_at()),
        updated_at: to_rfc3339(subscription.updated_at()),
        ..Default::default()
    };
    message.set_tier(tier_to_proto(subscription.tier()));
    message.set_status(subscription_status_to_proto(subscription.status()));
    message.set_billing_interval(interval_to_proto(subscription.interval()));
    message
}

/// `CreateSubscriptionRequest` to command. The billing interval defaults to
/// monthly; the tier is required.
///
/// # Errors
///
/// Returns an invalid-field error for bad enums, amounts or methods.
pub fn create_subscription_command(
    request: &proto::CreateSubscriptionRequest,
    default_currency: &Currency,
) -> Result<CreateSubscriptionCommand, ServiceError> {
    let tier = tier_from_proto(request.tier)?
        .ok_or_else(|| ServiceError::invalid_field("tier", "is required"))?;
    let interval =
        interval_from_proto(request.billing_interval)?.unwrap_or(BillingInterval::Monthly);
    let currency = currency_or_default(&request.currency, default_currency)?;
    let price = Money::new(decimal_from_f64("amount", request.amount)?, currency)?;
    let trial_days = u32::try_from(request.trial_days).map_err(|_| {
        ServiceError::invalid_field(
            "trial_days",
            format!("must be between 0 and {MAX_TRIAL_DAYS}"),
        )
    })?;

    Ok(CreateSubscriptionCommand {
        customer_id: request.customer_id.trim().to_string(),
        plan_id: request.plan_id.trim().to_string(),
        tier,
        interval,
        price,
        instrument: optional_instrument(request.payment_method.as_ref())?,
        trial_days,
        metadata: request.metadata.clone(),
    })
}

/// `UpdateSubscriptionRequest` to changes. Zero-valued fields are left
/// unchanged.
///
/// # Errors
///
/// Returns an invalid-field error for bad enums, amounts or methods.
pub fn subscription_changes(
    request: &proto::UpdateSubscriptionRequest,
) -> Result<SubscriptionChanges, ServiceError> {
    let price = decimal_from_f64("amount", request.amount)?;
    Ok(SubscriptionChanges {
        plan_id: non_blank(&request.plan_id),
        tier: tier_from_proto(request.tier)?,
        interval: interval_from_proto(request.billing_interval)?,
        price: (!price.is_zero()).then_some(price),
        instrument: optional_instrument(request.payment_method.as_ref())?,
        metadata: request.metadata.clone(),
        pause: request.pause,
        resume: request.resume,
    })
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::domain::payment_method::validate_instrument;

    fn card_method(number: &str) -> proto::PaymentMethod {
        let mut method = proto::PaymentMethod {
            card: Some(proto::CardDetails {
                card_number: number.to_string(),
                expiry_month: 12,
                expiry_year: 2099,
                cvv: "123".to_string(),
                cardholder_name: "Asha Rao".to_string(),
            }),
            ..Default::default()
        };
        method.set_method_type(proto::PaymentMethodType::Card);
        method
    }

    #[test_case(f64::NAN ; "nan")]
    #[test_case(f64::INFINITY ; "infinity")]
    #[test_case(f64::NEG_INFINITY ; "negative infinity")]
    fn non_finite_amounts_are_rejected(value: f64) {
        assert!(decimal_from_f64("amount", value).is_err());
    }

    #[test]
    fn amounts_convert_both_ways() {
        let amount = decimal_from_f64("amount", 499.99).unwrap();
        assert_eq!(amount, Decimal::new(49999, 2));
        assert!((decimal_to_f64(amount) - 499.99).abs() < f64::EPSILON);
    }

    #[test]
    fn blank_currency_uses_default() {
        let inr = Currency::inr();
        assert_eq!(currency_or_default("  ", &inr).unwrap(), inr);
        assert_eq!(currency_or_default("usd", &inr).unwrap().as_str(), "USD");
        assert!(currency_or_default("dollars", &inr).is_err());
    }

    #[test]
    fn card_method_round_trip_is_redacted() {
        let instrument = instrument_from_proto(&card_method("4111 1111 1111 1111")).unwrap();
        let method = method_to_proto(&instrument);

        assert_eq!(method.method_type(), proto::PaymentMethodType::Card);
        assert_eq!(method.card_brand(), proto::CardBrand::Visa);
        assert_eq!(method.last4, "1111");
        let card = method.card.unwrap();
        assert!(card.card_number.is_empty());
        assert!(card.cvv.is_empty());
        assert_eq!(card.cardholder_name, "Asha Rao");
        assert_eq!(card.expiry_month, 12);
    }

    #[test]
    fn bank_account_number_is_not_returned() {
        let mut method = proto::PaymentMethod {
            bank_account: Some(proto::BankAccountDetails {
                account_number: "001234567890".to_string(),
                ifsc_code: "HDFC0001234".to_string(),
                account_holder_name: "Asha Rao".to_string(),
                bank_name: "HDFC".to_string(),
            }),
            ..Default::default()
        };
        method.set_method_type(proto::PaymentMethodType::BankTransfer);

        let instrument = instrument_from_proto(&method).unwrap();
        assert_eq!(instrument.kind(), MethodKind::BankTransfer);

        let out = method_to_proto(&instrument);
        assert_eq!(out.last4, "7890");
        assert!(out.bank_account.unwrap().account_number.is_empty());
    }

    #[test]
    fn token_selects_saved_instrument() {
        let mut method = proto::PaymentMethod {
            token: "tok_saved".to_string(),
            ..Default::default()
        };
        method.set_method_type(proto::PaymentMethodType::Upi);
        assert_eq!(
            instrument_from_proto(&method).unwrap(),
            PaymentInstrument::Saved {
                kind: MethodKind::Upi,
                token: "tok_saved".to_string(),
            }
        );
    }

    #[test]
    fn method_type_and_details_are_required() {
        let untyped = proto::PaymentMethod::default();
        assert!(instrument_from_proto(&untyped).is_err());

        let mut no_details = proto::PaymentMethod::default();
        no_details.set_method_type(proto::PaymentMethodType::Wallet);
        let err = instrument_from_proto(&no_details).unwrap_err();
        assert!(err.message().contains("method.wallet"));

        let unknown = proto::PaymentMethod {
            method_type: 42,
            ..Default::default()
        };
        assert!(instrument_from_proto(&unknown).is_err());
    }

    #[test]
    fn validation_report_maps_brand_and_mask() {
        let instrument = instrument_from_proto(&card_method("5555555555554444")).unwrap();
        let report = validate_instrument(&instrument, Utc::now().date_naive());
        let response = validation_to_proto(report);
        assert!(response.valid);
        assert_eq!(response.card_brand(), proto::CardBrand::Mastercard);
        assert_eq!(response.masked_number, "****-****-****-4444");
    }

    #[test_case(0.0, None ; "zero means full")]
    #[test_case(25.5, Some(Decimal::new(255, 1)) ; "partial")]
    fn refund_amounts(value: f64, expected: Option<Decimal>) {
        assert_eq!(refund_amount(value).unwrap(), expected);
    }

    #[test]
    fn negative_refund_is_rejected() {
        assert!(refund_amount(-1.0).is_err());
    }

    #[test]
    fn status_filters() {
        assert_eq!(payment_status_filter(0).unwrap(), None);
        assert_eq!(
            payment_status_filter(proto::PaymentStatus::Failed as i32).unwrap(),
            Some(PaymentStatus::Failed)
        );
        assert!(payment_status_filter(99).is_err());
        assert_eq!(
            subscription_status_filter(proto::SubscriptionStatus::PastDue as i32).unwrap(),
            Some(SubscriptionStatus::PastDue)
        );
    }

    #[test]
    fn create_subscription_defaults_interval_and_requires_tier() {
        let mut request = proto::CreateSubscriptionRequest {
            customer_id: "cus_1".to_string(),
            plan_id: "basic".to_string(),
            amount: 199.0,
            ..Default::default()
        };
        assert!(create_subscription_command(&request, &Currency::inr()).is_err());

        request.set_tier(proto::SubscriptionTier::Basic);
        let command = create_subscription_command(&request, &Currency::inr()).unwrap();
        assert_eq!(command.interval, BillingInterval::Monthly);
        assert_eq!(command.price.currency().as_str(), "INR");

        request.trial_days = -1;
        assert!(create_subscription_command(&request, &Currency::inr()).is_err());
    }

    #[test]
    fn zero_valued_update_fields_are_unchanged() {
        let request = proto::UpdateSubscriptionRequest {
            subscription_id: "sub_1".to_string(),
            pause: true,
            ..Default::default()
        };
        let changes = subscription_changes(&request).unwrap();
        assert_eq!(changes.plan_id, None);
        assert_eq!(changes.tier, None);
        assert_eq!(changes.interval, None);
        assert_eq!(changes.price, None);
        assert!(changes.instrument.is_none());
        assert!(changes.pause);
    }
}
