//! Domain Layer
//!
//! Business rules for payments and subscriptions with no transport or
//! storage concerns. Timestamps are always passed in by the caller so every
//! rule can be exercised deterministically.
//!
//! # Bounded Contexts
//!
//! - [`payment`]: payment lifecycle, captures and refunds
//! - [`subscription`]: recurring plans, trials, billing periods
//! - [`payment_method`]: instruments and their validation rules
//! - [`shared`]: identifiers and money

pub mod payment;
pub mod payment_method;
pub mod shared;
pub mod subscription;
