#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines
    )
)]

//! riskpay Schema - Protobuf Bindings
//!
//! Rust bindings for the `risk.v1` message library and the `payment.v1`
//! gRPC service.
//!
//! # Module Structure
//!
//! - `risk`: generated risk messages and enums
//! - `payment`: generated payment messages, enums, `PaymentServiceClient`
//!   and `PaymentService` server trait
//! - `codec`: binary wire encode/decode and length-delimited framing
//! - `object`: proto3 JSON object conversion over the generated pbjson impls
//! - `enums`: enum table lookups over raw `i32` field values
//! - `time`: RFC 3339 timestamp helpers used by string timestamp fields
//!
//! # Wire Format
//!
//! All messages use standard proto3 binary encoding. Default-valued scalar
//! fields are omitted on the wire, and unknown enum numbers are preserved as
//! raw `i32` values.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Generated Code
// =============================================================================

/// Generated `risk.v1` messages.
/// The generated code is in packages/schema-gen/rust/risk/v1/
/// risk.v1.rs includes risk.v1.serde.rs at the end
#[allow(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used
)]
pub mod risk {
    pub mod v1 {
        include!("../rust/risk/v1/risk.v1.rs");
    }
    pub use v1::*;
}

/// Generated `payment.v1` messages and service stubs.
/// payment.v1.rs includes payment.v1.serde.rs and payment.v1.tonic.rs at the end
#[allow(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used
)]
pub mod payment {
    pub mod v1 {
        include!("../rust/payment/v1/payment.v1.rs");
    }
    pub use v1::*;
}

// =============================================================================
// Helpers
// =============================================================================

pub mod codec;
pub mod enums;
mod error;
pub mod object;
pub mod time;

// =============================================================================
// Re-exports
// =============================================================================

pub use codec::{decode, decode_delimited, decode_delimited_stream, encode, encode_delimited};
pub use enums::{ProtoEnum, enum_name};
pub use error::SchemaError;
pub use object::{from_json_str, from_object, to_json_string, to_object};

/// Re-export of the prost `Message` trait so callers do not need a direct
/// prost dependency to call `encode_to_vec` / `decode`.
pub use prost::Message;
