//! Contact validation and masking utilities

use once_cell::sync::Lazy;
use regex::Regex;

// Basic email address pattern
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap()
});

// Chinese mobile phone number pattern
static CHINA_MOBILE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^1[3-9]\d{9}$").unwrap());

/// Check if a string is a well-formed email address
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Check if a string is a valid mobile phone number
pub fn is_valid_phone(value: &str) -> bool {
    CHINA_MOBILE_REGEX.is_match(value)
}

/// Mask a phone number for logs (e.g., 138****5678)
pub fn mask_phone(phone: &str) -> String {
    if phone.len() >= 7 {
        format!("{}****{}", &phone[0..3], &phone[phone.len() - 4..])
    } else {
        "****".to_string()
    }
}

/// Mask an email address for logs (e.g., al***@example.com)
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let visible = local.chars().take(2).collect::<String>();
            format!("{}***@{}", visible, domain)
        }
        None => "***".to_string(),
    }
}
