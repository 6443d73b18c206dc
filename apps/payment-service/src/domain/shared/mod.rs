//! Shared Domain Types
//!
//! Identifiers and money shared by the payment and subscription contexts.

mod identifiers;
mod money;

pub use identifiers::{PaymentId, RefundId, SubscriptionId};
pub use money::{Currency, Money, MoneyError};
