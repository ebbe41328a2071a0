//! Common validation utilities

/// Common validation functions
pub mod validators {
    /// Check if a string is not empty after trimming
    pub fn not_blank(value: &str) -> bool {
        !value.trim().is_empty()
    }
}
