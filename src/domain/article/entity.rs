// src/domain/article/entity.rs
use crate::domain::article::review::{Review, ReviewId};
use crate::domain::article::value_objects::{
    ArticleHeading, ArticleKey, ArticleRecordId, ArticleSummary, PublicationDate,
};
use crate::domain::author::value_objects::AuthorEmail;
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};

/// The article aggregate. It exclusively owns its embedded reviews and
/// carries a denormalized copy of the publishing author's email, taken at
/// creation time and never re-synced afterwards.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleRecordId,
    pub article_id: ArticleKey,
    pub heading: ArticleHeading,
    pub date_of_publication: PublicationDate,
    pub summary: ArticleSummary,
    pub author_email: AuthorEmail,
    pub reviews: Vec<Review>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Appends to the review sequence; prior entries and their order are
    /// untouched. Duplicates by content are allowed.
    pub fn add_review(&mut self, review: Review, now: DateTime<Utc>) {
        self.reviews.push(review);
        self.updated_at = now;
    }

    /// Removes exactly the review with the given sub-identity, keeping the
    /// remaining entries in their original relative order.
    pub fn remove_review(&mut self, id: ReviewId, now: DateTime<Utc>) -> DomainResult<Review> {
        let index = self
            .reviews
            .iter()
            .position(|review| review.id == id)
            .ok_or_else(|| DomainError::NotFound("Review not found in the article".into()))?;
        let removed = self.reviews.remove(index);
        self.updated_at = now;
        Ok(removed)
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub article_id: ArticleKey,
    pub heading: ArticleHeading,
    pub date_of_publication: PublicationDate,
    pub summary: ArticleSummary,
    pub author_email: AuthorEmail,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewArticle {
    /// Collecting validation pass over the article's own fields. The author
    /// email arrives already resolved against the author collection; the
    /// review sequence always starts empty.
    pub fn new(
        article_id: &str,
        heading: &str,
        date_of_publication: &str,
        summary: &str,
        author_email: AuthorEmail,
        today: &str,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let article_id = ArticleKey::new(article_id);
        let heading = ArticleHeading::new(heading);
        let date_of_publication = PublicationDate::new(date_of_publication, today);
        let summary = ArticleSummary::new(summary);

        let violations: Vec<String> = [
            article_id.as_ref().err(),
            heading.as_ref().err(),
            date_of_publication.as_ref().err(),
            summary.as_ref().err(),
        ]
        .into_iter()
        .flatten()
        .map(|err| err.message().to_string())
        .collect();

        match (article_id, heading, date_of_publication, summary) {
            (Ok(article_id), Ok(heading), Ok(date_of_publication), Ok(summary)) => Ok(Self {
                article_id,
                heading,
                date_of_publication,
                summary,
                author_email,
                created_at: now,
                updated_at: now,
            }),
            _ => Err(DomainError::Validation(violations.join("; "))),
        }
    }
}
