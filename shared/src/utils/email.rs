//! Email address helpers

/// Mask an email address for logging.
///
/// Keeps the first character of the local part and the full domain:
/// `jane.doe@example.com` becomes `j*******@example.com`.
pub fn mask_email(email: &str) -> String {
    let email = email.trim();
    match email.rsplit_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let mut chars = local.chars();
            let first = chars.next().unwrap_or('*');
            format!("{}{}@{}", first, "*".repeat(chars.count()), domain)
        }
        _ => "*".repeat(email.chars().count()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("jane.doe@example.com"), "j*******@example.com");
        assert_eq!(mask_email("a@b.com"), "a@b.com");
        assert_eq!(mask_email("  ab@b.com "), "a*@b.com");
    }

    #[test]
    fn test_mask_email_without_at_sign() {
        assert_eq!(mask_email("nobody"), "******");
        assert_eq!(mask_email("@example.com"), "************");
    }
}
