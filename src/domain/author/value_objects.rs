// src/domain/author/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::validation::{is_valid_email, is_valid_phone_number};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AuthorId(pub i64);

impl AuthorId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("author id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<AuthorId> for i64 {
    fn from(value: AuthorId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorName(String);

impl AuthorName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("name cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<AuthorName> for String {
    fn from(value: AuthorName) -> Self {
        value.0
    }
}

/// Stored trimmed and lower-cased; the lower-cased form is what uniqueness
/// and article lookups compare against.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AuthorEmail(String);

impl AuthorEmail {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_lowercase();
        if !is_valid_email(&value) {
            return Err(DomainError::Validation("Email is invalid".into()));
        }
        Ok(Self(value))
    }

    /// The normalization applied before any lookup or comparison.
    pub fn normalize(value: &str) -> String {
        value.trim().to_lowercase()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthorEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<AuthorEmail> for String {
    fn from(value: AuthorEmail) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !is_valid_phone_number(&value) {
            return Err(DomainError::Validation(format!(
                "{value} is not a valid phone number format. Use xxx-xxx-xxxx format."
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_trimmed_and_lowercased() {
        let email = AuthorEmail::new("  A@X.Com ").unwrap();
        assert_eq!(email.as_str(), "a@x.com");
    }

    #[test]
    fn invalid_email_is_rejected() {
        assert!(AuthorEmail::new("not-an-email").is_err());
    }

    #[test]
    fn name_is_trimmed() {
        let name = AuthorName::new("  Ada  ").unwrap();
        assert_eq!(name.as_str(), "Ada");
        assert!(AuthorName::new("   ").is_err());
    }

    #[test]
    fn phone_pattern_is_enforced() {
        assert!(PhoneNumber::new("123-456-7890").is_ok());
        assert!(PhoneNumber::new("123-45-67890").is_err());
    }
}
