use crate::application::dto::authors::AuthorDto;
use crate::domain::article::{Article, Review};
use crate::domain::author::Author;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub id: String,
    pub heading: String,
    pub content: String,
    pub likes: i64,
    pub dislikes: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Review> for ReviewDto {
    fn from(review: Review) -> Self {
        Self {
            id: review.id.to_string(),
            heading: review.heading.into(),
            content: review.content.into(),
            likes: review.likes.into(),
            dislikes: review.dislikes.into(),
            created_at: review.created_at,
            updated_at: review.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: i64,
    pub article_id: String,
    pub heading: String,
    pub date_of_publication: String,
    pub summary: String,
    pub email: String,
    pub reviews: Vec<ReviewDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            article_id: article.article_id.into(),
            heading: article.heading.into(),
            date_of_publication: article.date_of_publication.into(),
            summary: article.summary.into(),
            email: article.author_email.into(),
            reviews: article.reviews.into_iter().map(Into::into).collect(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// The `email` field on listings is dual-shaped: the full author record when
/// resolution succeeded, the stored email string when it did not.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthorField {
    Resolved(AuthorDto),
    Email(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListedArticleDto {
    pub id: i64,
    pub article_id: String,
    pub heading: String,
    pub date_of_publication: String,
    pub summary: String,
    pub email: AuthorField,
    pub reviews: Vec<ReviewDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ListedArticleDto {
    pub fn from_article(article: Article, author: Option<Author>) -> Self {
        let email = match author {
            Some(author) => AuthorField::Resolved(author.into()),
            None => AuthorField::Email(article.author_email.as_str().to_string()),
        };
        Self {
            id: article.id.into(),
            article_id: article.article_id.into(),
            heading: article.heading.into(),
            date_of_publication: article.date_of_publication.into(),
            summary: article.summary.into(),
            email,
            reviews: article.reviews.into_iter().map(Into::into).collect(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_field_serializes_as_string_or_object() {
        let email = AuthorField::Email("a@x.com".into());
        assert_eq!(serde_json::to_value(&email).unwrap(), serde_json::json!("a@x.com"));

        let resolved = AuthorField::Resolved(AuthorDto {
            id: 1,
            name: "A".into(),
            email: "a@x.com".into(),
            cell_phone_number: "123-456-7890".into(),
            house_number: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        });
        let value = serde_json::to_value(&resolved).unwrap();
        assert_eq!(value["email"], "a@x.com");
        assert_eq!(value["name"], "A");
    }
}
