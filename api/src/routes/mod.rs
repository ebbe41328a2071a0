//! Route handlers
//!
//! - `conversion` - Text conversion and result-link verification
//! - `payment` - UPI link generation and payment acknowledgement

pub mod conversion;
pub mod payment;
