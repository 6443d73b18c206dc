//! Subscription value objects.

use std::fmt;

use chrono::{DateTime, Months, Utc};

/// Lifecycle state of a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubscriptionStatus {
    /// In a free trial.
    Trial,
    /// Paid and current.
    Active,
    /// Renewal charge outstanding.
    PastDue,
    /// Temporarily suspended by the customer.
    Paused,
    /// Ended by cancellation.
    Cancelled,
    /// Ended without renewal.
    Expired,
}

impl SubscriptionStatus {
    /// Cancelled and expired subscriptions accept no changes.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Cancelled | Self::Expired)
    }

    /// The subscription can be paused from this state.
    #[must_use]
    pub const fn can_pause(self) -> bool {
        matches!(self, Self::Trial | Self::Active | Self::PastDue)
    }

    /// Uppercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trial => "TRIAL",
            Self::Active => "ACTIVE",
            Self::PastDue => "PAST_DUE",
            Self::Paused => "PAUSED",
            Self::Cancelled => "CANCELLED",
            Self::Expired => "EXPIRED",
        }
    }
}

impl fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How often a subscription renews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BillingInterval {
    /// Every calendar month.
    Monthly,
    /// Every three calendar months.
    Quarterly,
    /// Every twelve calendar months.
    Yearly,
}

impl BillingInterval {
    /// Length of one period in calendar months.
    #[must_use]
    pub const fn months(self) -> u32 {
        match self {
            Self::Monthly => 1,
            Self::Quarterly => 3,
            Self::Yearly => 12,
        }
    }

    /// End of the `n`th period counted from `anchor` (`n = 1` is the first).
    ///
    /// Every boundary is measured from the anchor, so a short month clamps
    /// one boundary without shifting the later ones: an anchor of 31 January
    /// gives 28 February, then 31 March.
    #[must_use]
    pub fn period_end(self, anchor: DateTime<Utc>, n: u32) -> Option<DateTime<Utc>> {
        let months = self.months().checked_mul(n)?;
        anchor.checked_add_months(Months::new(months))
    }
}

/// Plan tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SubscriptionTier {
    /// No charge.
    Free,
    /// Entry paid tier.
    Basic,
    /// Premium.
    Premium,
    /// Professional.
    Professional,
    /// Enterprise.
    Enterprise,
}

impl SubscriptionTier {
    /// Paid tiers need a positive price.
    #[must_use]
    pub const fn is_paid(self) -> bool {
        !matches!(self, Self::Free)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn period_end_uses_calendar_months() {
        let start = Utc.with_ymd_and_hms(2025, 1, 15, 8, 0, 0).unwrap();
        assert_eq!(
            BillingInterval::Monthly.period_end(start, 1),
            Some(Utc.with_ymd_and_hms(2025, 2, 15, 8, 0, 0).unwrap())
        );
        assert_eq!(
            BillingInterval::Quarterly.period_end(start, 1),
            Some(Utc.with_ymd_and_hms(2025, 4, 15, 8, 0, 0).unwrap())
        );
        assert_eq!(
            BillingInterval::Yearly.period_end(start, 1),
            Some(Utc.with_ymd_and_hms(2026, 1, 15, 8, 0, 0).unwrap())
        );
    }

    #[test]
    fn month_end_is_clamped() {
        let start = Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap();
        assert_eq!(
            BillingInterval::Monthly.period_end(start, 1),
            Some(Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn later_periods_return_to_month_end() {
        let anchor = Utc.with_ymd_and_hms(2025, 1, 31, 0, 0, 0).unwrap();
        let ends: Vec<_> = (1..=3)
            .map(|n| BillingInterval::Monthly.period_end(anchor, n).unwrap())
            .collect();
        assert_eq!(
            ends,
            vec![
                Utc.with_ymd_and_hms(2025, 2, 28, 0, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2025, 3, 31, 0, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2025, 4, 30, 0, 0, 0).unwrap(),
            ]
        );
    }

    #[test]
    fn terminal_and_pausable_states() {
        assert!(SubscriptionStatus::Cancelled.is_terminal());
        assert!(SubscriptionStatus::Expired.is_terminal());
        assert!(!SubscriptionStatus::Paused.is_terminal());
        assert!(SubscriptionStatus::Trial.can_pause());
        assert!(!SubscriptionStatus::Paused.can_pause());
    }
}
