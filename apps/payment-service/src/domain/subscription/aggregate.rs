//! Subscription Aggregate Root
//!
//! Billing periods are computed in calendar months from a billing anchor,
//! so clamping in a short month does not move later renewal dates.
//! State moves forward lazily: [`Subscription::sync`] applies trial expiry,
//! scheduled cancellation and period renewal up to a given instant.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use super::{BillingInterval, SubscriptionError, SubscriptionStatus, SubscriptionTier};
use crate::domain::payment_method::PaymentInstrument;
use crate::domain::shared::{Money, SubscriptionId};

/// Longest free trial that can be granted.
pub const MAX_TRIAL_DAYS: u32 = 365;

/// Command to start a subscription.
#[derive(Debug, Clone)]
pub struct CreateSubscriptionCommand {
    /// Subscribing customer.
    pub customer_id: String,
    /// Plan identifier.
    pub plan_id: String,
    /// Plan tier.
    pub tier: SubscriptionTier,
    /// Renewal interval.
    pub interval: BillingInterval,
    /// Price per period.
    pub price: Money,
    /// Instrument used for renewals.
    pub instrument: Option<PaymentInstrument>,
    /// Length of the free trial; zero for none.
    pub trial_days: u32,
    /// Caller metadata.
    pub metadata: BTreeMap<String, String>,
}

impl CreateSubscriptionCommand {
    /// Validate the command parameters.
    ///
    /// # Errors
    ///
    /// Returns `SubscriptionError::InvalidParameters` describing the first
    /// problem found.
    pub fn validate(&self) -> Result<(), SubscriptionError> {
        if self.customer_id.trim().is_empty() {
            return Err(SubscriptionError::invalid("customer_id", "is required"));
        }
        if self.plan_id.trim().is_empty() {
            return Err(SubscriptionError::invalid("plan_id", "is required"));
        }
        if self.tier.is_paid() && !self.price.is_positive() {
            return Err(SubscriptionError::invalid(
                "amount",
                "must be greater than zero for paid tiers",
            ));
        }
        if self.trial_days > MAX_TRIAL_DAYS {
            return Err(SubscriptionError::invalid(
                "trial_days",
                format!("must not exceed {MAX_TRIAL_DAYS}"),
            ));
        }
        Ok(())
    }
}

/// Partial update. `None` and empty fields leave the subscription unchanged.
#[derive(Debug, Clone, Default)]
pub struct SubscriptionChanges {
    /// New plan.
    pub plan_id: Option<String>,
    /// New tier.
    pub tier: Option<SubscriptionTier>,
    /// New renewal interval, applied to the current period.
    pub interval: Option<BillingInterval>,
    /// New price per period, in the subscription's currency.
    pub price: Option<Decimal>,
    /// New renewal instrument.
    pub instrument: Option<PaymentInstrument>,
    /// Metadata entries to upsert.
    pub metadata: BTreeMap<String, String>,
    /// Pause renewals.
    pub pause: bool,
    /// Resume a paused subscription.
    pub resume: bool,
}

/// A recurring plan for one customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    id: SubscriptionId,
    customer_id: String,
    plan_id: String,
    tier: SubscriptionTier,
    status: SubscriptionStatus,
    interval: BillingInterval,
    price: Money,
    instrument: Option<PaymentInstrument>,
    current_period_start: DateTime<Utc>,
    current_period_end: DateTime<Utc>,
    billing_anchor: DateTime<Utc>,
    periods_since_anchor: u32,
    trial_end: Option<DateTime<Utc>>,
    cancel_at_period_end: bool,
    cancelled_at: Option<DateTime<Utc>>,
    cancellation_reason: Option<String>,
    metadata: BTreeMap<String, String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Subscription {
    /// Start a subscription, in trial if `trial_days` is non-zero.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails validation or the first period
    /// cannot be computed.
    pub fn new(
        command: CreateSubscriptionCommand,
        now: DateTime<Utc>,
    ) -> Result<Self, SubscriptionError> {
        command.validate()?;

        let (status, period_end, trial_end) = if command.trial_days > 0 {
            let trial_end = now + Duration::days(i64::from(command.trial_days));
            (SubscriptionStatus::Trial, trial_end, Some(trial_end))
        } else {
            (
                SubscriptionStatus::Active,
                next_period_end(command.interval, now, 1)?,
                None,
            )
        };

        Ok(Self {
            id: SubscriptionId::generate(),
            customer_id: command.customer_id,
            plan_id: command.plan_id,
            tier: command.tier,
            status,
            interval: command.interval,
            price: command.price,
            instrument: command.instrument,
            current_period_start: now,
            current_period_end: period_end,
            billing_anchor: now,
            periods_since_anchor: 0,
            trial_end,
            cancel_at_period_end: false,
            cancelled_at: None,
            cancellation_reason: None,
            metadata: command.metadata,
            created_at: now,
            updated_at: now,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Subscription ID.
    #[must_use]
    pub const fn id(&self) -> &SubscriptionId {
        &self.id
    }

    /// Subscribing customer.
    #[must_use]
    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    /// Plan identifier.
    #[must_use]
    pub fn plan_id(&self) -> &str {
        &self.plan_id
    }

    /// Plan tier.
    #[must_use]
    pub const fn tier(&self) -> SubscriptionTier {
        self.tier
    }

    /// Current status.
    #[must_use]
    pub const fn status(&self) -> SubscriptionStatus {
        self.status
    }

    /// Renewal interval.
    #[must_use]
    pub const fn interval(&self) -> BillingInterval {
        self.interval
    }

    /// Price per period.
    #[must_use]
    pub const fn price(&self) -> &Money {
        &self.price
    }

    /// Renewal instrument.
    #[must_use]
    pub const fn instrument(&self) -> Option<&PaymentInstrument> {
        self.instrument.as_ref()
    }

    /// Start of the current period.
    #[must_use]
    pub const fn current_period_start(&self) -> DateTime<Utc> {
        self.current_period_start
    }

    /// End of the current period.
    #[must_use]
    pub const fn current_period_end(&self) -> DateTime<Utc> {
        self.current_period_end
    }

    /// End of the trial, if one was granted.
    #[must_use]
    pub const fn trial_end(&self) -> Option<DateTime<Utc>> {
        self.trial_end
    }

    /// Cancellation is scheduled for the end of the current period.
    #[must_use]
    pub const fn cancel_at_period_end(&self) -> bool {
        self.cancel_at_period_end
    }

    /// When the subscription was cancelled.
    #[must_use]
    pub const fn cancelled_at(&self) -> Option<DateTime<Utc>> {
        self.cancelled_at
    }

    /// Why it was cancelled.
    #[must_use]
    pub fn cancellation_reason(&self) -> Option<&str> {
        self.cancellation_reason.as_deref()
    }

    /// Caller metadata.
    #[must_use]
    pub const fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
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

    // =========================================================================
    // Commands
    // =========================================================================

    /// Apply a partial update. Either every change applies or none does.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` for cancelled or expired
    /// subscriptions and for pause/resume from the wrong state, and
    /// `InvalidParameters` when the result would be inconsistent.
    pub fn apply_changes(
        &mut self,
        changes: SubscriptionChanges,
        now: DateTime<Utc>,
    ) -> Result<(), SubscriptionError> {
        self.ensure_not_terminal("update")?;
        if changes.pause && changes.resume {
            return Err(SubscriptionError::invalid(
                "pause",
                "pause and resume cannot both be set",
            ));
        }

        let mut next = self.clone();

        if let Some(plan_id) = changes.plan_id.filter(|p| !p.trim().is_empty()) {
            next.plan_id = plan_id;
        }
        if let Some(tier) = changes.tier {
            next.tier = tier;
        }
        if let Some(price) = changes.price {
            next.price = next.price.with_amount(price)?;
        }
        if next.tier.is_paid() && !next.price.is_positive() {
            return Err(SubscriptionError::invalid(
                "amount",
                "must be greater than zero for paid tiers",
            ));
        }
        if let Some(interval) = changes.interval
            && interval != next.interval
        {
            next.interval = interval;
            if next.status != SubscriptionStatus::Trial {
                next.begin_period(next.current_period_start)?;
            }
        }
        if let Some(instrument) = changes.instrument {
            next.instrument = Some(instrument);
            if next.status == SubscriptionStatus::PastDue {
                next.start_new_period(now)?;
            }
        }
        next.metadata.extend(changes.metadata);

        if changes.pause {
            if !next.status.can_pause() {
                return Err(SubscriptionError::InvalidStateTransition {
                    status: next.status,
                    action: "pause",
                });
            }
            next.status = SubscriptionStatus::Paused;
        }
        if changes.resume {
            if next.status != SubscriptionStatus::Paused {
                return Err(SubscriptionError::InvalidStateTransition {
                    status: next.status,
                    action: "resume",
                });
            }
            next.start_new_period(now)?;
        }

        next.updated_at = now;
        next.sync(now);
        *self = next;
        Ok(())
    }

    /// Cancel now, or schedule cancellation for the end of the period.
    ///
    /// Paused and past-due subscriptions have no running period and are
    /// always cancelled immediately.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` if already cancelled or expired.
    pub fn cancel(
        &mut self,
        at_period_end: bool,
        reason: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<(), SubscriptionError> {
        self.ensure_not_terminal("cancel")?;
        self.cancellation_reason = reason.filter(|r| !r.trim().is_empty());
        let has_running_period = !matches!(
            self.status,
            SubscriptionStatus::Paused | SubscriptionStatus::PastDue
        );
        if at_period_end && has_running_period {
            self.cancel_at_period_end = true;
        } else {
            self.status = SubscriptionStatus::Cancelled;
            self.cancel_at_period_end = false;
            self.cancelled_at = Some(now);
        }
        self.updated_at = now;
        Ok(())
    }

    /// Bring time-driven state up to `now`. Returns true if anything changed.
    ///
    /// - an ended trial converts to active, or expires when a paid tier has
    ///   no instrument on file
    /// - an ended period renews, becomes past due without an instrument, or
    ///   cancels if cancellation was scheduled
    pub fn sync(&mut self, now: DateTime<Utc>) -> bool {
        let before = (self.status, self.current_period_end);

        if self.status == SubscriptionStatus::Trial && self.current_period_end <= now {
            let trial_end = self.current_period_end;
            if self.cancel_at_period_end {
                self.finish(SubscriptionStatus::Cancelled, trial_end);
            } else if self.needs_instrument() {
                self.finish(SubscriptionStatus::Expired, trial_end);
            } else {
                self.status = SubscriptionStatus::Active;
                // Fails only at the end of the representable range; the trial
                // end then stays as the period end.
                let _ = self.begin_period(trial_end);
            }
        }

        if self.status == SubscriptionStatus::Active && self.current_period_end <= now {
            if self.cancel_at_period_end {
                self.finish(SubscriptionStatus::Cancelled, self.current_period_end);
            } else if self.needs_instrument() {
                self.status = SubscriptionStatus::PastDue;
            } else {
                while self.current_period_end <= now {
                    let n = self.periods_since_anchor.saturating_add(2);
                    let Some(end) = self.interval.period_end(self.billing_anchor, n) else {
                        break;
                    };
                    self.periods_since_anchor += 1;
                    self.current_period_start = self.current_period_end;
                    self.current_period_end = end;
                }
            }
        }

        let changed = before != (self.status, self.current_period_end);
        if changed {
            self.updated_at = now;
        }
        changed
    }

    fn needs_instrument(&self) -> bool {
        self.tier.is_paid() && self.instrument.is_none()
    }

    fn finish(&mut self, status: SubscriptionStatus, at: DateTime<Utc>) {
        self.status = status;
        self.cancel_at_period_end = false;
        if status == SubscriptionStatus::Cancelled {
            self.cancelled_at = Some(at);
        }
    }

    fn start_new_period(&mut self, now: DateTime<Utc>) -> Result<(), SubscriptionError> {
        self.begin_period(now)?;
        self.status = SubscriptionStatus::Active;
        Ok(())
    }

    /// Re-anchor billing at `start`. Leaves everything untouched on error.
    fn begin_period(&mut self, start: DateTime<Utc>) -> Result<(), SubscriptionError> {
        let end = next_period_end(self.interval, start, 1)?;
        self.billing_anchor = start;
        self.periods_since_anchor = 0;
        self.current_period_start = start;
        self.current_period_end = end;
        Ok(())
    }

    fn ensure_not_terminal(&self, action: &'static str) -> Result<(), SubscriptionError> {
        if self.status.is_terminal() {
            Err(SubscriptionError::InvalidStateTransition {
                status: self.status,
                action,
            })
        } else {
            Ok(())
        }
    }
}

fn next_period_end(
    interval: BillingInterval,
    anchor: DateTime<Utc>,
    n: u32,
) -> Result<DateTime<Utc>, SubscriptionError> {
    interval
        .period_end(anchor, n)
        .ok_or_else(|| SubscriptionError::invalid("billing_interval", "period end out of range"))
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::TimeZone;

    use super::*;
    use crate::domain::payment_method::MethodKind;
    use crate::domain::shared::Currency;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 10, 12, 0, 0).unwrap()
    }

    fn price(amount: &str) -> Money {
        Money::new(Decimal::from_str(amount).unwrap(), Currency::parse("INR").unwrap()).unwrap()
    }

    fn saved_card() -> PaymentInstrument {
        PaymentInstrument::Saved {
            kind: MethodKind::Card,
            token: "tok_visa".to_string(),
        }
    }

    fn command() -> CreateSubscriptionCommand {
        CreateSubscriptionCommand {
            customer_id: "cus_1".to_string(),
            plan_id: "pro-monthly".to_string(),
            tier: SubscriptionTier::Premium,
            interval: BillingInterval::Monthly,
            price: price("999"),
            instrument: Some(saved_card()),
            trial_days: 0,
            metadata: BTreeMap::new(),
        }
    }

    #[test]
    fn starts_active_with_first_period() {
        let sub = Subscription::new(command(), t0()).unwrap();
        assert_eq!(sub.status(), SubscriptionStatus::Active);
        assert_eq!(sub.current_period_start(), t0());
        assert_eq!(
            sub.current_period_end(),
            Utc.with_ymd_and_hms(2025, 2, 10, 12, 0, 0).unwrap()
        );
        assert_eq!(sub.trial_end(), None);
    }

    #[test]
    fn trial_converts_to_active() {
        let mut cmd = command();
        cmd.trial_days = 14;
        let mut sub = Subscription::new(cmd, t0()).unwrap();
        assert_eq!(sub.status(), SubscriptionStatus::Trial);
        let trial_end = t0() + Duration::days(14);
        assert_eq!(sub.trial_end(), Some(trial_end));

        assert!(!sub.sync(t0() + Duration::days(13)));
        assert!(sub.sync(t0() + Duration::days(15)));
        assert_eq!(sub.status(), SubscriptionStatus::Active);
        assert_eq!(sub.current_period_start(), trial_end);
        assert_eq!(
            sub.current_period_end(),
            Utc.with_ymd_and_hms(2025, 2, 24, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn trial_without_instrument_expires() {
        let mut cmd = command();
        cmd.trial_days = 7;
        cmd.instrument = None;
        let mut sub = Subscription::new(cmd, t0()).unwrap();
        sub.sync(t0() + Duration::days(8));
        assert_eq!(sub.status(), SubscriptionStatus::Expired);
    }

    #[test]
    fn free_tier_needs_no_price_or_instrument() {
        let mut cmd = command();
        cmd.tier = SubscriptionTier::Free;
        cmd.price = price("0");
        cmd.instrument = None;
        let mut sub = Subscription::new(cmd, t0()).unwrap();
        sub.sync(t0() + Duration::days(40));
        assert_eq!(sub.status(), SubscriptionStatus::Active);
    }

    #[test]
    fn paid_tier_needs_price() {
        let mut cmd = command();
        cmd.price = price("0");
        assert!(matches!(
            Subscription::new(cmd, t0()),
            Err(SubscriptionError::InvalidParameters { field, .. }) if field == "amount"
        ));
    }

    #[test]
    fn renewal_skips_whole_periods() {
        let mut sub = Subscription::new(command(), t0()).unwrap();
        // three and a half months later
        sub.sync(Utc.with_ymd_and_hms(2025, 4, 25, 0, 0, 0).unwrap());
        assert_eq!(sub.status(), SubscriptionStatus::Active);
        assert_eq!(
            sub.current_period_start(),
            Utc.with_ymd_and_hms(2025, 4, 10, 12, 0, 0).unwrap()
        );
        assert_eq!(
            sub.current_period_end(),
            Utc.with_ymd_and_hms(2025, 5, 10, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn cancel_at_period_end_then_lapse() {
        let mut sub = Subscription::new(command(), t0()).unwrap();
        sub.cancel(true, Some("too expensive".to_string()), t0())
            .unwrap();
        assert_eq!(sub.status(), SubscriptionStatus::Active);
        assert!(sub.cancel_at_period_end());

        let period_end = sub.current_period_end();
        sub.sync(period_end);
        assert_eq!(sub.status(), SubscriptionStatus::Cancelled);
        assert_eq!(sub.cancelled_at(), Some(period_end));
        assert_eq!(sub.cancellation_reason(), Some("too expensive"));
    }

    #[test]
    fn immediate_cancel_is_terminal() {
        let mut sub = Subscription::new(command(), t0()).unwrap();
        sub.cancel(false, None, t0()).unwrap();
        assert_eq!(sub.status(), SubscriptionStatus::Cancelled);
        assert_eq!(sub.cancelled_at(), Some(t0()));

        assert!(matches!(
            sub.cancel(false, None, t0()),
            Err(SubscriptionError::InvalidStateTransition { .. })
        ));
        assert!(
            sub.apply_changes(
                SubscriptionChanges {
                    plan_id: Some("other".to_string()),
                    ..Default::default()
                },
                t0()
            )
            .is_err()
        );
    }

    #[test]
    fn pause_and_resume() {
        let mut sub = Subscription::new(command(), t0()).unwrap();
        let pause = SubscriptionChanges {
            pause: true,
            ..Default::default()
        };
        sub.apply_changes(pause.clone(), t0()).unwrap();
        assert_eq!(sub.status(), SubscriptionStatus::Paused);
        assert!(sub.apply_changes(pause, t0()).is_err());

        // paused subscriptions do not renew
        let later = t0() + Duration::days(60);
        assert!(!sub.sync(later));

        let resume = SubscriptionChanges {
            resume: true,
            ..Default::default()
        };
        sub.apply_changes(resume, later).unwrap();
        assert_eq!(sub.status(), SubscriptionStatus::Active);
        assert_eq!(sub.current_period_start(), later);
    }

    #[test]
    fn pause_and_resume_together_rejected() {
        let mut sub = Subscription::new(command(), t0()).unwrap();
        let both = SubscriptionChanges {
            pause: true,
            resume: true,
            ..Default::default()
        };
        assert!(sub.apply_changes(both, t0()).is_err());
    }

    #[test]
    fn failed_update_changes_nothing() {
        let mut sub = Subscription::new(command(), t0()).unwrap();
        let before = sub.clone();
        let changes = SubscriptionChanges {
            plan_id: Some("enterprise".to_string()),
            price: Some(Decimal::ZERO),
            ..Default::default()
        };
        assert!(sub.apply_changes(changes, t0()).is_err());
        assert_eq!(sub, before);
    }

    #[test]
    fn interval_change_recomputes_period() {
        let mut sub = Subscription::new(command(), t0()).unwrap();
        let mut metadata = BTreeMap::new();
        metadata.insert("source".to_string(), "upgrade".to_string());
        sub.apply_changes(
            SubscriptionChanges {
                interval: Some(BillingInterval::Yearly),
                tier: Some(SubscriptionTier::Enterprise),
                price: Some(Decimal::from(9_999)),
                metadata,
                ..Default::default()
            },
            t0(),
        )
        .unwrap();
        assert_eq!(sub.interval(), BillingInterval::Yearly);
        assert_eq!(sub.tier(), SubscriptionTier::Enterprise);
        assert_eq!(sub.price().amount(), Decimal::from(9_999));
        assert_eq!(
            sub.current_period_end(),
            Utc.with_ymd_and_hms(2026, 1, 10, 12, 0, 0).unwrap()
        );
        assert_eq!(sub.metadata().get("source").map(String::as_str), Some("upgrade"));
    }

    #[test]
    fn past_due_recovers_when_instrument_added() {
        let mut cmd = command();
        cmd.instrument = None;
        let mut sub = Subscription::new(cmd, t0()).unwrap();
        let later = t0() + Duration::days(35);
        sub.sync(later);
        assert_eq!(sub.status(), SubscriptionStatus::PastDue);

        sub.apply_changes(
            SubscriptionChanges {
                instrument: Some(saved_card()),
                ..Default::default()
            },
            later,
        )
        .unwrap();
        assert_eq!(sub.status(), SubscriptionStatus::Active);
        assert_eq!(sub.current_period_start(), later);
    }

    #[test]
    fn trial_length_is_capped() {
        let mut cmd = command();
        cmd.trial_days = MAX_TRIAL_DAYS + 1;
        assert!(Subscription::new(cmd, t0()).is_err());
    }

    #[test]
    fn cancelling_past_due_is_immediate() {
        let mut cmd = command();
        cmd.instrument = None;
        let mut sub = Subscription::new(cmd, t0()).unwrap();
        let later = t0() + Duration::days(35);
        sub.sync(later);
        assert_eq!(sub.status(), SubscriptionStatus::PastDue);

        sub.cancel(true, None, later).unwrap();
        assert_eq!(sub.status(), SubscriptionStatus::Cancelled);
        assert!(!sub.cancel_at_period_end());
        assert_eq!(sub.cancelled_at(), Some(later));
    }

    #[test]
    fn month_end_anchor_survives_short_months() {
        let anchor = Utc.with_ymd_and_hms(2025, 1, 31, 9, 0, 0).unwrap();
        let mut sub = Subscription::new(command(), anchor).unwrap();
        assert_eq!(
            sub.current_period_end(),
            Utc.with_ymd_and_hms(2025, 2, 28, 9, 0, 0).unwrap()
        );

        sub.sync(Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap());
        assert_eq!(
            sub.current_period_start(),
            Utc.with_ymd_and_hms(2025, 3, 31, 9, 0, 0).unwrap()
        );
        assert_eq!(
            sub.current_period_end(),
            Utc.with_ymd_and_hms(2025, 4, 30, 9, 0, 0).unwrap()
        );
    }

    #[test]
    fn trial_end_becomes_billing_anchor() {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let mut cmd = command();
        cmd.trial_days = 30;
        let mut sub = Subscription::new(cmd, start).unwrap();

        // trial ends 31 January
        sub.sync(Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap());
        assert_eq!(sub.status(), SubscriptionStatus::Active);
        assert_eq!(
            sub.current_period_start(),
            Utc.with_ymd_and_hms(2025, 2, 28, 0, 0, 0).unwrap()
        );
        assert_eq!(
            sub.current_period_end(),
            Utc.with_ymd_and_hms(2025, 3, 31, 0, 0, 0).unwrap()
        );
    }
}
