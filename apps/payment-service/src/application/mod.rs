//! Application Layer
//!
//! The application layer orchestrates domain logic through use cases.
//!
//! - **Ports**: interfaces to systems outside the service
//! - **Use Cases**: payment and subscription operations

pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
