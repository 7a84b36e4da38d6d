// src/domain/article/review.rs
//
// Reviews live only inside an article's `reviews` sequence. They have no
// storage of their own; the sub-identity exists for lookup within the
// owning article.
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::validation::is_non_negative;
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReviewId(pub Uuid);

impl ReviewId {
    /// Assigned when the review is embedded into its article.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl FromStr for ReviewId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| DomainError::NotFound("Review not found in the article".into()))
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteCount(i64);

impl VoteCount {
    pub fn new(value: i64, label: &str) -> DomainResult<Self> {
        if !is_non_negative(value) {
            return Err(DomainError::Validation(format!(
                "{label} cannot be less than 0"
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<VoteCount> for i64 {
    fn from(value: VoteCount) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewHeading(String);

impl ReviewHeading {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation(
                "review heading cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<ReviewHeading> for String {
    fn from(value: ReviewHeading) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewContent(String);

impl ReviewContent {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation(
                "review content cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<ReviewContent> for String {
    fn from(value: ReviewContent) -> Self {
        value.0
    }
}

#[derive(Debug, Clone)]
pub struct Review {
    pub id: ReviewId,
    pub heading: ReviewHeading,
    pub content: ReviewContent,
    pub likes: VoteCount,
    pub dislikes: VoteCount,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    /// Collecting validation pass; a fresh sub-identity is assigned here,
    /// at the moment the value is built for embedding.
    pub fn new(
        heading: &str,
        content: &str,
        likes: i64,
        dislikes: i64,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let heading = ReviewHeading::new(heading);
        let content = ReviewContent::new(content);
        let likes = VoteCount::new(likes, "Likes");
        let dislikes = VoteCount::new(dislikes, "Dislikes");

        let violations: Vec<String> = [
            heading.as_ref().err(),
            content.as_ref().err(),
            likes.as_ref().err(),
            dislikes.as_ref().err(),
        ]
        .into_iter()
        .flatten()
        .map(|err| err.message().to_string())
        .collect();

        match (heading, content, likes, dislikes) {
            (Ok(heading), Ok(content), Ok(likes), Ok(dislikes)) => Ok(Self {
                id: ReviewId::random(),
                heading,
                content,
                likes,
                dislikes,
                created_at: now,
                updated_at: now,
            }),
            _ => Err(DomainError::Validation(violations.join("; "))),
        }
    }

    /// Rebuild an already-embedded review from stored parts.
    #[allow(clippy::too_many_arguments)]
    pub fn from_stored(
        id: ReviewId,
        heading: &str,
        content: &str,
        likes: i64,
        dislikes: i64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        Ok(Self {
            id,
            heading: ReviewHeading::new(heading)?,
            content: ReviewContent::new(content)?,
            likes: VoteCount::new(likes, "Likes")?,
            dislikes: VoteCount::new(dislikes, "Dislikes")?,
            created_at,
            updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn assigns_a_fresh_sub_identity() {
        let a = Review::new("R", "C", 1, 0, Utc::now()).unwrap();
        let b = Review::new("R", "C", 1, 0, Utc::now()).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn negative_counts_are_rejected() {
        let err = Review::new("R", "C", -1, 0, Utc::now()).unwrap_err();
        assert_eq!(err.message(), "Likes cannot be less than 0");
        let err = Review::new("R", "C", 0, -2, Utc::now()).unwrap_err();
        assert_eq!(err.message(), "Dislikes cannot be less than 0");
    }

    #[test]
    fn collects_text_and_count_violations_together() {
        let err = Review::new("", "", -1, -1, Utc::now()).unwrap_err();
        let message = err.message().to_string();
        assert!(message.contains("review heading cannot be empty"));
        assert!(message.contains("review content cannot be empty"));
        assert!(message.contains("Likes cannot be less than 0"));
        assert!(message.contains("Dislikes cannot be less than 0"));
    }
}
