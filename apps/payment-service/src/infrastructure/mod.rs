//! Infrastructure Layer
//!
//! Adapters for the ports defined in the domain and application layers:
//!
//! - **Driven Adapters (Outbound)**
//!   - `persistence/`: in-memory repositories
//!   - `gateway/`: mock payment gateway
//!
//! - **Driver Adapters (Inbound)**
//!   - `grpc/`: `payment.v1.PaymentService`
//!   - `health/`: health probes and Prometheus scrape endpoint
//!
//! - **Cross-cutting**
//!   - `config/`: environment configuration
//!   - `telemetry/`: logging and OTLP tracing
//!   - `metrics/`: Prometheus metrics

pub mod config;
pub mod gateway;
pub mod grpc;
pub mod health;
pub mod metrics;
pub mod persistence;
pub mod telemetry;
