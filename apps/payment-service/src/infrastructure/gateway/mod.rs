//! Payment Gateway Adapters

pub mod mock;

pub use mock::{DEFAULT_DECLINE_CARDS, MockGateway};
