// src/domain/article/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::validation::{is_not_future, is_valid_article_id, is_valid_date_format};
use std::fmt;

/// Store-assigned identity of the article record. Distinct from the
/// human-assigned [`ArticleKey`] the HTTP surface addresses articles by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleRecordId(pub i64);

impl ArticleRecordId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article record id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleRecordId> for i64 {
    fn from(value: ArticleRecordId) -> Self {
        value.0
    }
}

/// The human-assigned `articleId`: trimmed, ASCII letters and digits only,
/// unique across articles (enforced by pre-query, not by the store).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleKey(String);

impl ArticleKey {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if !is_valid_article_id(&value) {
            return Err(DomainError::Validation(format!(
                "{value} is not a valid articleId. ArticleId must contain only numbers and letters."
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleKey> for String {
    fn from(value: ArticleKey) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleHeading(String);

impl ArticleHeading {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("heading cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<ArticleHeading> for String {
    fn from(value: ArticleHeading) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSummary(String);

impl ArticleSummary {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("summary cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<ArticleSummary> for String {
    fn from(value: ArticleSummary) -> Self {
        value.0
    }
}

/// Publication date kept as `yyyy-mm-dd` text, exactly as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationDate(String);

impl PublicationDate {
    /// Write-time constructor: shape check plus the not-in-future rule
    /// against the caller-supplied `today` (same fixed-width text form).
    pub fn new(value: impl Into<String>, today: &str) -> DomainResult<Self> {
        let value = value.into();
        if !is_valid_date_format(&value) {
            return Err(DomainError::Validation(
                "Date is not in correct format. It should be yyyy-mm-dd.".into(),
            ));
        }
        if !is_not_future(&value, today) {
            return Err(DomainError::Validation("Date can't be in the future.".into()));
        }
        Ok(Self(value))
    }

    /// Read-side constructor for values already persisted. Only the shape is
    /// re-checked; a stored date does not become invalid as time passes.
    pub fn stored(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !is_valid_date_format(&value) {
            return Err(DomainError::Validation(
                "Date is not in correct format. It should be yyyy-mm-dd.".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PublicationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PublicationDate> for String {
    fn from(value: PublicationDate) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_key_is_trimmed_and_charset_checked() {
        let key = ArticleKey::new(" abc123 ").unwrap();
        assert_eq!(key.as_str(), "abc123");
        assert!(ArticleKey::new("abc-123").is_err());
        assert!(ArticleKey::new("").is_err());
    }

    #[test]
    fn publication_date_rejects_future() {
        assert!(PublicationDate::new("2020-01-01", "2024-06-15").is_ok());
        let err = PublicationDate::new("2024-06-16", "2024-06-15").unwrap_err();
        assert_eq!(err.message(), "Date can't be in the future.");
    }

    #[test]
    fn publication_date_rejects_bad_shape() {
        let err = PublicationDate::new("16-06-2024", "2024-06-15").unwrap_err();
        assert!(err.message().starts_with("Date is not in correct format"));
    }

    #[test]
    fn stored_date_skips_future_rule() {
        assert!(PublicationDate::stored("2999-01-01").is_ok());
        assert!(PublicationDate::stored("not-a-date").is_err());
    }
}
