//! Contact value object: an email address or a mobile phone number.

use serde::{Deserialize, Serialize};

use sn_shared::utils::validation::{is_valid_email, is_valid_phone, mask_email, mask_phone};

use crate::errors::DomainError;

/// A verified-format contact address used as the verification key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Contact {
    /// Email address
    Email(String),
    /// Mobile phone number
    Phone(String),
}

impl Contact {
    /// Parse a raw string into a contact, trimming surrounding whitespace.
    ///
    /// # Returns
    ///
    /// * `Ok(Contact)` - the input matched the email or phone pattern
    /// * `Err(DomainError::InvalidFormat)` - anything else
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if is_valid_email(trimmed) {
            Ok(Contact::Email(trimmed.to_string()))
        } else if is_valid_phone(trimmed) {
            Ok(Contact::Phone(trimmed.to_string()))
        } else {
            Err(DomainError::InvalidFormat {
                contact: mask_unknown(trimmed),
            })
        }
    }

    /// The underlying address string
    pub fn as_str(&self) -> &str {
        match self {
            Contact::Email(value) | Contact::Phone(value) => value,
        }
    }

    /// Whether this contact is an email address
    pub fn is_email(&self) -> bool {
        matches!(self, Contact::Email(_))
    }

    /// Whether this contact is a phone number
    pub fn is_phone(&self) -> bool {
        matches!(self, Contact::Phone(_))
    }

    /// Masked form safe for logs
    pub fn masked(&self) -> String {
        match self {
            Contact::Email(value) => mask_email(value),
            Contact::Phone(value) => mask_phone(value),
        }
    }
}

impl std::fmt::Display for Contact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Rejected input never goes back to the caller verbatim
fn mask_unknown(raw: &str) -> String {
    if raw.chars().count() <= 3 {
        "***".to_string()
    } else {
        format!("{}***", raw.chars().take(3).collect::<String>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_email() {
        let contact = Contact::parse("  user@example.com ").unwrap();
        assert!(contact.is_email());
        assert_eq!(contact.as_str(), "user@example.com");
    }

    #[test]
    fn test_parse_phone() {
        let contact = Contact::parse("13812345678").unwrap();
        assert!(contact.is_phone());
        assert_eq!(contact.as_str(), "13812345678");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            Contact::parse("not a contact"),
            Err(DomainError::InvalidFormat { .. })
        ));
        assert!(Contact::parse("").is_err());
        assert!(Contact::parse("12345").is_err());
    }

    #[test]
    fn test_masked_never_leaks_full_address() {
        let email = Contact::parse("alice@example.com").unwrap();
        assert!(!email.masked().contains("alice@"));

        let phone = Contact::parse("13812345678").unwrap();
        assert_eq!(phone.masked(), "138****5678");
    }
}
