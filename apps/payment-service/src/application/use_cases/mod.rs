//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod in_flight;
mod pagination;
mod payments;
mod subscriptions;

pub use in_flight::{InFlight, InFlightGuard};
pub use pagination::{Page, PageError, PageRequest, PageSettings, paginate};
pub use payments::{PaymentUseCases, ProcessOutcome};
pub use subscriptions::SubscriptionUseCases;
