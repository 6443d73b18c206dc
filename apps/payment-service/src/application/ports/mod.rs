//! Application Ports (Driven)
//!
//! Repository traits live next to their aggregates in the domain layer;
//! this module holds the ports to systems outside the service.

mod gateway_port;

pub use gateway_port::{ChargeRequest, GatewayError, GatewayOutcome, PaymentGateway, RefundRequest};
