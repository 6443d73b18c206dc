//! In-memory repositories.
//!
//! State lives for the lifetime of the process.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::payment::{Payment, PaymentError, PaymentFilter, PaymentRepository};
use crate::domain::shared::{PaymentId, SubscriptionId};
use crate::domain::subscription::{Subscription, SubscriptionError, SubscriptionRepository};

/// Records keyed by ID, remembering insertion order.
#[derive(Debug)]
struct Table<T> {
    rows: HashMap<String, T>,
    order: Vec<String>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<T: Clone> Table<T> {
    fn insert(&mut self, id: String, row: T) {
        if self.rows.insert(id.clone(), row).is_none() {
            self.order.push(id);
        }
    }

    fn in_order(&self) -> impl Iterator<Item = &T> {
        self.order.iter().filter_map(|id| self.rows.get(id))
    }
}

#[derive(Debug, Default)]
struct PaymentTable {
    payments: Table<Payment>,
    /// (customer, idempotency key) to payment ID.
    idempotency: HashMap<(String, String), String>,
}

/// In-memory implementation of `PaymentRepository`.
#[derive(Debug, Default)]
pub struct InMemoryPaymentRepository {
    inner: RwLock<PaymentTable>,
}

impl InMemoryPaymentRepository {
    /// Create a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored payments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().payments.rows.len()
    }

    /// True when no payments are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl PaymentRepository for InMemoryPaymentRepository {
    async fn insert(&self, payment: Payment) -> Result<Payment, PaymentError> {
        let mut inner = self.inner.write();
        if let Some(key) = payment.idempotency_key() {
            let index_key = (payment.customer_id().to_string(), key.to_string());
            if let Some(existing) = inner
                .idempotency
                .get(&index_key)
                .and_then(|id| inner.payments.rows.get(id))
            {
                return Ok(existing.clone());
            }
            inner
                .idempotency
                .insert(index_key, payment.id().to_string());
        }
        inner
            .payments
            .insert(payment.id().to_string(), payment.clone());
        Ok(payment)
    }

    async fn update(&self, payment: &Payment) -> Result<(), PaymentError> {
        let mut inner = self.inner.write();
        match inner.payments.rows.get_mut(payment.id().as_str()) {
            Some(row) => {
                *row = payment.clone();
                Ok(())
            }
            None => Err(PaymentError::NotFound {
                payment_id: payment.id().to_string(),
            }),
        }
    }

    async fn find_by_id(&self, id: &PaymentId) -> Result<Option<Payment>, PaymentError> {
        Ok(self.inner.read().payments.rows.get(id.as_str()).cloned())
    }

    async fn find_matching(&self, filter: &PaymentFilter) -> Result<Vec<Payment>, PaymentError> {
        Ok(self
            .inner
            .read()
            .payments
            .in_order()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }
}

/// In-memory implementation of `SubscriptionRepository`.
#[derive(Debug, Default)]
pub struct InMemorySubscriptionRepository {
    inner: RwLock<Table<Subscription>>,
}

impl InMemorySubscriptionRepository {
    /// Create a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored subscriptions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().rows.len()
    }

    /// True when no subscriptions are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SubscriptionRepository for InMemorySubscriptionRepository {
    async fn insert(&self, subscription: &Subscription) -> Result<(), SubscriptionError> {
        self.inner
            .write()
            .insert(subscription.id().to_string(), subscription.clone());
        Ok(())
    }

    async fn update(&self, subscription: &Subscription) -> Result<(), SubscriptionError> {
        let mut inner = self.inner.write();
        match inner.rows.get_mut(subscription.id().as_str()) {
            Some(row) => {
                *row = subscription.clone();
                Ok(())
            }
            None => Err(SubscriptionError::NotFound {
                subscription_id: subscription.id().to_string(),
            }),
        }
    }

    async fn find_by_id(
        &self,
        id: &SubscriptionId,
    ) -> Result<Option<Subscription>, SubscriptionError> {
        Ok(self.inner.read().rows.get(id.as_str()).cloned())
    }

    async fn find_by_customer(
        &self,
        customer_id: Option<&str>,
    ) -> Result<Vec<Subscription>, SubscriptionError> {
        Ok(self
            .inner
            .read()
            .in_order()
            .filter(|s| customer_id.is_none_or(|c| s.customer_id() == c))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::Utc;
    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::payment::{CreatePaymentCommand, PaymentStatus};
    use crate::domain::shared::{Currency, Money};
    use crate::domain::subscription::{
        BillingInterval, CreateSubscriptionCommand, SubscriptionTier,
    };

    fn payment(customer: &str, key: Option<&str>) -> Payment {
        Payment::new(
            CreatePaymentCommand {
                customer_id: customer.to_string(),
                amount: Money::new(Decimal::from(10), Currency::parse("INR").unwrap()).unwrap(),
                instrument: None,
                description: String::new(),
                metadata: BTreeMap::new(),
                idempotency_key: key.map(str::to_string),
            },
            Utc::now(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn insert_respects_idempotency_index() {
        let repo = InMemoryPaymentRepository::new();
        let first = repo.insert(payment("cus_1", Some("k"))).await.unwrap();
        let second = repo.insert(payment("cus_1", Some("k"))).await.unwrap();
        assert_eq!(first.id(), second.id());
        assert_eq!(repo.len(), 1);

        repo.insert(payment("cus_1", None)).await.unwrap();
        repo.insert(payment("cus_1", None)).await.unwrap();
        assert_eq!(repo.len(), 3);
    }

    #[tokio::test]
    async fn update_requires_existing_payment() {
        let repo = InMemoryPaymentRepository::new();
        let unsaved = payment("cus_1", None);
        assert!(matches!(
            repo.update(&unsaved).await,
            Err(PaymentError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn find_matching_keeps_insertion_order() {
        let repo = InMemoryPaymentRepository::new();
        let mut ids = Vec::new();
        for customer in ["cus_a", "cus_b", "cus_a", "cus_a"] {
            ids.push(repo.insert(payment(customer, None)).await.unwrap().id().clone());
        }

        let filter = PaymentFilter {
            customer_id: Some("cus_a".to_string()),
            status: Some(PaymentStatus::Pending),
        };
        let found: Vec<PaymentId> = repo
            .find_matching(&filter)
            .await
            .unwrap()
            .iter()
            .map(|p| p.id().clone())
            .collect();
        assert_eq!(found, vec![ids[0].clone(), ids[2].clone(), ids[3].clone()]);
    }

    #[tokio::test]
    async fn subscriptions_by_customer() {
        let repo = InMemorySubscriptionRepository::new();
        for customer in ["cus_a", "cus_b"] {
            let sub = Subscription::new(
                CreateSubscriptionCommand {
                    customer_id: customer.to_string(),
                    plan_id: "free".to_string(),
                    tier: SubscriptionTier::Free,
                    interval: BillingInterval::Monthly,
                    price: Money::zero(Currency::parse("INR").unwrap()),
                    instrument: None,
                    trial_days: 0,
                    metadata: BTreeMap::new(),
                },
                Utc::now(),
            )
            .unwrap();
            repo.insert(&sub).await.unwrap();
        }
        assert_eq!(repo.find_by_customer(None).await.unwrap().len(), 2);
        assert_eq!(repo.find_by_customer(Some("cus_b")).await.unwrap().len(), 1);
        assert!(repo.find_by_customer(Some("cus_c")).await.unwrap().is_empty());
    }
}
