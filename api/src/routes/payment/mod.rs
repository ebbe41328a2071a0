//! Payment route handlers

pub mod success;
pub mod upi_link;

pub use success::payment_success;
pub use upi_link::upi_link;
