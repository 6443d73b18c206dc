//! Subscription Bounded Context
//!
//! Recurring plans with optional trials, pause/resume and scheduled or
//! immediate cancellation.

mod aggregate;
mod errors;
mod repository;
mod value_objects;

pub use aggregate::{
    CreateSubscriptionCommand, MAX_TRIAL_DAYS, Subscription, SubscriptionChanges,
};
pub use errors::SubscriptionError;
pub use repository::SubscriptionRepository;
pub use value_objects::{BillingInterval, SubscriptionStatus, SubscriptionTier};
