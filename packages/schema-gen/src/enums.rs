//! Enum Tables
//!
//! Enum fields are stored as raw `i32` on messages so that unknown values
//! survive a decode/encode cycle. `ProtoEnum` gives a uniform view over every
//! generated enum for name lookups and table listings.

use crate::payment::{
    BillingInterval, CardBrand, PaymentMethodType, PaymentStatus, RefundStatus,
    SubscriptionStatus, SubscriptionTier,
};
use crate::risk::{
    AlertSeverity, AlertStatus, ComplianceStatus, FraudDecision, LimitType, RiskCategory,
    RiskLevel, ScenarioType, TradeSide, VarMethod,
};

/// Name returned for raw values outside an enum's table.
pub const UNKNOWN_ENUM_NAME: &str = "UNKNOWN";

/// Common view over generated protobuf enums.
pub trait ProtoEnum: Copy + Sized + 'static {
    /// Fully qualified protobuf name, e.g. `risk.v1.RiskLevel`.
    const FULL_NAME: &'static str;

    /// Every declared variant in wire-number order, including `UNSPECIFIED`.
    fn variants() -> &'static [Self];

    /// Name as declared in the `.proto` file.
    fn proto_name(self) -> &'static str;

    /// Parse a `.proto` declared name.
    fn from_proto_name(name: &str) -> Option<Self>;

    /// Convert a raw wire value, `None` if the value is not declared.
    fn from_raw(value: i32) -> Option<Self>;

    /// Raw wire value.
    fn raw(self) -> i32;
}

/// Look up the declared name for a raw enum field value.
///
/// Values not present in the table map to [`UNKNOWN_ENUM_NAME`].
pub fn enum_name<E: ProtoEnum>(value: i32) -> &'static str {
    E::from_raw(value).map_or(UNKNOWN_ENUM_NAME, ProtoEnum::proto_name)
}

/// The `(number, name)` table for an enum.
pub fn enum_table<E: ProtoEnum>() -> Vec<(i32, &'static str)> {
    E::variants()
        .iter()
        .map(|v| (v.raw(), v.proto_name()))
        .collect()
}

macro_rules! proto_enum {
    ($ty:ident, $full:literal, [$($variant:ident),+ $(,)?]) => {
        impl ProtoEnum for $ty {
            const FULL_NAME: &'static str = $full;

            fn variants() -> &'static [Self] {
                &[$($ty::$variant),+]
            }

            fn proto_name(self) -> &'static str {
                self.as_str_name()
            }

            fn from_proto_name(name: &str) -> Option<Self> {
                Self::from_str_name(name)
            }

            fn from_raw(value: i32) -> Option<Self> {
                Self::try_from(value).ok()
            }

            fn raw(self) -> i32 {
                self as i32
            }
        }
    };
}

// risk.v1
proto_enum!(RiskLevel, "risk.v1.RiskLevel", [
    Unspecified, Minimal, Low, Moderate, Elevated, High, Severe, Critical,
]);
proto_enum!(RiskCategory, "risk.v1.RiskCategory", [
    Unspecified, Market, Credit, Liquidity, Operational, Concentration, Regulatory, Systemic,
]);
proto_enum!(AlertSeverity, "risk.v1.AlertSeverity", [
    Unspecified, Info, Low, Medium, High, Critical,
]);
proto_enum!(AlertStatus, "risk.v1.AlertStatus", [
    Unspecified, Active, Acknowledged, Resolved,
]);
proto_enum!(TradeSide, "risk.v1.TradeSide", [
    Unspecified, Buy, Sell, ShortSell, BuyToCover,
]);
proto_enum!(VarMethod, "risk.v1.VarMethod", [
    Unspecified, Historical, Parametric, MonteCarlo,
]);
proto_enum!(ScenarioType, "risk.v1.ScenarioType", [
    Unspecified, Historical, Hypothetical, Reverse,
]);
proto_enum!(FraudDecision, "risk.v1.FraudDecision", [
    Unspecified, Approve, Review, Decline,
]);
proto_enum!(ComplianceStatus, "risk.v1.ComplianceStatus", [
    Unspecified, Compliant, NonCompliant, PendingReview, Exempt,
]);
proto_enum!(LimitType, "risk.v1.LimitType", [
    Unspecified, Position, Sector, Leverage, Var, Drawdown, Notional, Liquidity, DailyLoss,
]);

// payment.v1
proto_enum!(PaymentStatus, "payment.v1.PaymentStatus", [
    Unspecified, Pending, Processing, Succeeded, Failed, Cancelled, Refunded, PartiallyRefunded,
]);
proto_enum!(PaymentMethodType, "payment.v1.PaymentMethodType", [
    Unspecified, Card, Upi, Netbanking, Wallet, BankTransfer,
]);
proto_enum!(CardBrand, "payment.v1.CardBrand", [
    Unspecified, Visa, Mastercard, Amex, Rupay, Diners, Discover, Jcb,
]);
proto_enum!(SubscriptionStatus, "payment.v1.SubscriptionStatus", [
    Unspecified, Trial, Active, PastDue, Paused, Cancelled, Expired,
]);
proto_enum!(BillingInterval, "payment.v1.BillingInterval", [
    Unspecified, Monthly, Quarterly, Yearly,
]);
proto_enum!(SubscriptionTier, "payment.v1.SubscriptionTier", [
    Unspecified, Free, Basic, Premium, Professional, Enterprise,
]);
proto_enum!(RefundStatus, "payment.v1.RefundStatus", [
    Unspecified, Pending, Succeeded, Failed,
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_level_has_seven_levels_plus_unspecified() {
        let table = enum_table::<RiskLevel>();
        assert_eq!(table.len(), 8);
        assert_eq!(table[0], (0, "RISK_LEVEL_UNSPECIFIED"));
        assert_eq!(table[7], (7, "RISK_LEVEL_CRITICAL"));
    }

    #[test]
    fn tables_are_dense_and_ordered() {
        fn check<E: ProtoEnum>() {
            for (idx, (number, _)) in enum_table::<E>().into_iter().enumerate() {
                assert_eq!(number, i32::try_from(idx).unwrap(), "{}", E::FULL_NAME);
            }
        }
        check::<RiskLevel>();
        check::<RiskCategory>();
        check::<AlertSeverity>();
        check::<LimitType>();
        check::<PaymentStatus>();
        check::<SubscriptionStatus>();
        check::<CardBrand>();
    }

    #[test]
    fn unknown_value_maps_to_unknown_name() {
        assert_eq!(enum_name::<PaymentStatus>(3), "PAYMENT_STATUS_SUCCEEDED");
        assert_eq!(enum_name::<PaymentStatus>(99), UNKNOWN_ENUM_NAME);
        assert_eq!(enum_name::<RiskLevel>(-1), UNKNOWN_ENUM_NAME);
    }

    #[test]
    fn names_round_trip() {
        for variant in BillingInterval::variants() {
            assert_eq!(
                BillingInterval::from_proto_name(variant.proto_name()),
                Some(*variant)
            );
        }
        assert_eq!(BillingInterval::from_proto_name("MONTHLY"), None);
    }
}
