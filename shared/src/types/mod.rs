//! Type definitions shared between crates
//!
//! - `response` - Health check response types

pub mod response;

pub use response::{HealthResponse, HealthStatus, ServiceHealth};
