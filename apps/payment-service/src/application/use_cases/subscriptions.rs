//! Subscription Use Cases
//!
//! Reads return subscriptions brought up to date with [`Subscription::sync`]
//! without writing back; mutations sync, apply and persist under an
//! in-flight claim.

use std::sync::Arc;

use chrono::Utc;

use super::in_flight::{InFlight, InFlightGuard};
use super::pagination::{Page, PageRequest, PageSettings, paginate};
use crate::domain::payment_method::{PaymentInstrument, validate_instrument};
use crate::domain::shared::SubscriptionId;
use crate::domain::subscription::{
    CreateSubscriptionCommand, Subscription, SubscriptionChanges, SubscriptionError,
    SubscriptionRepository, SubscriptionStatus,
};

/// Subscription operations over a repository.
pub struct SubscriptionUseCases<R>
where
    R: SubscriptionRepository,
{
    repo: Arc<R>,
    in_flight: InFlight,
    pages: PageSettings,
}

impl<R> SubscriptionUseCases<R>
where
    R: SubscriptionRepository,
{
    /// Create the use cases.
    pub fn new(repo: Arc<R>, pages: PageSettings) -> Self {
        Self {
            repo,
            in_flight: InFlight::new(),
            pages,
        }
    }

    /// Start a subscription.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameters` or `InvalidPaymentMethod` for bad input.
    pub async fn create(
        &self,
        command: CreateSubscriptionCommand,
    ) -> Result<Subscription, SubscriptionError> {
        if let Some(instrument) = &command.instrument {
            ensure_usable(instrument)?;
        }
        let subscription = Subscription::new(command, Utc::now())?;
        self.repo.insert(&subscription).await?;
        tracing::info!(
            subscription_id = %subscription.id(),
            customer_id = subscription.customer_id(),
            plan_id = subscription.plan_id(),
            status = %subscription.status(),
            "Subscription created"
        );
        Ok(subscription)
    }

    /// Fetch a subscription as of now.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown ID.
    pub async fn get(&self, subscription_id: &str) -> Result<Subscription, SubscriptionError> {
        let id = parse_id(subscription_id)?;
        let mut subscription = self.load(&id).await?;
        subscription.sync(Utc::now());
        Ok(subscription)
    }

    /// Apply a partial update.
    ///
    /// # Errors
    ///
    /// Returns `Busy`, `NotFound`, `InvalidPaymentMethod`, and whatever
    /// [`Subscription::apply_changes`] rejects.
    pub async fn update(
        &self,
        subscription_id: &str,
        changes: SubscriptionChanges,
    ) -> Result<Subscription, SubscriptionError> {
        if let Some(instrument) = &changes.instrument {
            ensure_usable(instrument)?;
        }
        let id = parse_id(subscription_id)?;
        let _claim = self.claim(&id)?;
        let mut subscription = self.load(&id).await?;
        let now = Utc::now();
        subscription.sync(now);
        subscription.apply_changes(changes, now)?;
        self.repo.update(&subscription).await?;
        tracing::info!(
            subscription_id = %subscription.id(),
            status = %subscription.status(),
            "Subscription updated"
        );
        Ok(subscription)
    }

    /// Cancel now or at the end of the current period.
    ///
    /// # Errors
    ///
    /// Returns `Busy`, `NotFound`, and `InvalidStateTransition` for
    /// subscriptions that already ended.
    pub async fn cancel(
        &self,
        subscription_id: &str,
        at_period_end: bool,
        reason: Option<String>,
    ) -> Result<Subscription, SubscriptionError> {
        let id = parse_id(subscription_id)?;
        let _claim = self.claim(&id)?;
        let mut subscription = self.load(&id).await?;
        let now = Utc::now();
        subscription.sync(now);
        subscription.cancel(at_period_end, reason, now)?;
        self.repo.update(&subscription).await?;
        tracing::info!(
            subscription_id = %subscription.id(),
            at_period_end,
            status = %subscription.status(),
            "Subscription cancelled"
        );
        Ok(subscription)
    }

    /// List subscriptions, optionally for one customer and in one status.
    /// The status filter applies to the up-to-date status.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameters` for a bad page size or token.
    pub async fn list(
        &self,
        customer_id: Option<&str>,
        status: Option<SubscriptionStatus>,
        page_size: i32,
        page_token: &str,
    ) -> Result<Page<Subscription>, SubscriptionError> {
        let request = PageRequest::parse(page_size, page_token, self.pages)
            .map_err(|e| SubscriptionError::invalid(e.field(), e.to_string()))?;
        let now = Utc::now();
        let matching: Vec<Subscription> = self
            .repo
            .find_by_customer(customer_id)
            .await?
            .into_iter()
            .map(|mut s| {
                s.sync(now);
                s
            })
            .filter(|s| status.is_none_or(|wanted| s.status() == wanted))
            .collect();
        Ok(paginate(matching, request))
    }

    async fn load(&self, id: &SubscriptionId) -> Result<Subscription, SubscriptionError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| SubscriptionError::NotFound {
                subscription_id: id.to_string(),
            })
    }

    fn claim(&self, id: &SubscriptionId) -> Result<InFlightGuard, SubscriptionError> {
        self.in_flight
            .try_claim(id.as_str())
            .ok_or_else(|| SubscriptionError::Busy {
                subscription_id: id.to_string(),
            })
    }
}

fn parse_id(subscription_id: &str) -> Result<SubscriptionId, SubscriptionError> {
    let trimmed = subscription_id.trim();
    if trimmed.is_empty() {
        return Err(SubscriptionError::invalid("subscription_id", "is required"));
    }
    Ok(SubscriptionId::new(trimmed))
}

fn ensure_usable(instrument: &PaymentInstrument) -> Result<(), SubscriptionError> {
    let report = validate_instrument(instrument, Utc::now().date_naive());
    if report.is_valid() {
        Ok(())
    } else {
        Err(SubscriptionError::InvalidPaymentMethod {
            errors: report.errors,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::shared::{Currency, Money};
    use crate::domain::subscription::{BillingInterval, SubscriptionTier};
    use crate::infrastructure::persistence::InMemorySubscriptionRepository;

    fn use_cases() -> SubscriptionUseCases<InMemorySubscriptionRepository> {
        SubscriptionUseCases::new(
            Arc::new(InMemorySubscriptionRepository::new()),
            PageSettings::default(),
        )
    }

    fn command(customer: &str, trial_days: u32) -> CreateSubscriptionCommand {
        CreateSubscriptionCommand {
            customer_id: customer.to_string(),
            plan_id: "basic-monthly".to_string(),
            tier: SubscriptionTier::Basic,
            interval: BillingInterval::Monthly,
            price: Money::new(Decimal::from(499), Currency::parse("INR").unwrap()).unwrap(),
            instrument: Some(PaymentInstrument::Upi {
                vpa: "asha@okbank".to_string(),
            }),
            trial_days,
            metadata: BTreeMap::new(),
        }
    }

    #[tokio::test]
    async fn create_get_update_cancel() {
        let uc = use_cases();
        let created = uc.create(command("cus_1", 14)).await.unwrap();
        assert_eq!(created.status(), SubscriptionStatus::Trial);
        let id = created.id().to_string();

        let fetched = uc.get(&id).await.unwrap();
        assert_eq!(fetched.id(), created.id());

        let paused = uc
            .update(
                &id,
                SubscriptionChanges {
                    pause: true,
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(paused.status(), SubscriptionStatus::Paused);

        let cancelled = uc
            .cancel(&id, false, Some("moving".to_string()))
            .await
            .unwrap();
        assert_eq!(cancelled.status(), SubscriptionStatus::Cancelled);
        assert_eq!(cancelled.cancellation_reason(), Some("moving"));

        let rejected = uc
            .update(
                &id,
                SubscriptionChanges {
                    plan_id: Some("pro".to_string()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(
            rejected,
            Err(SubscriptionError::InvalidStateTransition { .. })
        ));
    }

    #[tokio::test]
    async fn invalid_method_is_rejected() {
        let uc = use_cases();
        let mut cmd = command("cus_1", 0);
        cmd.instrument = Some(PaymentInstrument::Upi {
            vpa: "not-a-vpa".to_string(),
        });
        assert!(matches!(
            uc.create(cmd).await,
            Err(SubscriptionError::InvalidPaymentMethod { .. })
        ));
    }

    #[tokio::test]
    async fn list_by_customer_and_status() {
        let uc = use_cases();
        uc.create(command("cus_1", 0)).await.unwrap();
        uc.create(command("cus_1", 7)).await.unwrap();
        uc.create(command("cus_2", 0)).await.unwrap();

        let all = uc.list(None, None, 0, "").await.unwrap();
        assert_eq!(all.total, 3);

        let mine = uc.list(Some("cus_1"), None, 0, "").await.unwrap();
        assert_eq!(mine.total, 2);

        let trials = uc
            .list(Some("cus_1"), Some(SubscriptionStatus::Trial), 0, "")
            .await
            .unwrap();
        assert_eq!(trials.total, 1);
        assert_eq!(trials.items[0].status(), SubscriptionStatus::Trial);
    }

    #[tokio::test]
    async fn unknown_subscription() {
        let uc = use_cases();
        assert!(matches!(
            uc.get("sub_missing").await,
            Err(SubscriptionError::NotFound { .. })
        ));
        assert!(matches!(
            uc.cancel("sub_missing", true, None).await,
            Err(SubscriptionError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn claim_ignores_surrounding_whitespace_in_id() {
        let uc = use_cases();
        let created = uc.create(command("cus_1", 0)).await.unwrap();
        let id = created.id().to_string();

        let _held = uc.in_flight.try_claim(&id);
        assert!(matches!(
            uc.cancel(&format!("  {id}"), false, None).await,
            Err(SubscriptionError::Busy { .. })
        ));
        assert!(matches!(
            uc.update(&format!("{id} "), SubscriptionChanges::default()).await,
            Err(SubscriptionError::Busy { .. })
        ));
    }
}
