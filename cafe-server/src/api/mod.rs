//! HTTP API
//!
//! - [`health`] - `/` and `/healthcheck`
//! - [`orders`] - submit, retrieve and list orders
//! - [`metrics`] - Prometheus text exposition

pub mod health;
pub mod metrics;
pub mod orders;
