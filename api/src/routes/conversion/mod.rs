//! Conversion route handlers

pub mod convert;
pub mod verify;

pub use convert::convert;
pub use verify::verify;
