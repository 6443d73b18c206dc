//! Subscription Repository Trait

use async_trait::async_trait;

use super::{Subscription, SubscriptionError};
use crate::domain::shared::SubscriptionId;

/// Repository trait for subscription persistence.
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Store a new subscription.
    ///
    /// # Errors
    ///
    /// Returns error if persistence fails.
    async fn insert(&self, subscription: &Subscription) -> Result<(), SubscriptionError>;

    /// Save an existing subscription.
    ///
    /// # Errors
    ///
    /// Returns `SubscriptionError::NotFound` if it was never inserted.
    async fn update(&self, subscription: &Subscription) -> Result<(), SubscriptionError>;

    /// Find a subscription by ID.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_id(
        &self,
        id: &SubscriptionId,
    ) -> Result<Option<Subscription>, SubscriptionError>;

    /// Subscriptions for one customer, or all of them, in creation order.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_customer(
        &self,
        customer_id: Option<&str>,
    ) -> Result<Vec<Subscription>, SubscriptionError>;
}
