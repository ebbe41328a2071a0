//! Token codec module for signed result links
//!
//! This module handles all token-related operations:
//! - HS256 signing of conversion payloads
//! - Signature, issuer and expiry verification

mod codec;
mod config;


pub use codec::LinkTokenCodec;
pub use config::TokenCodecConfig;
