// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleHeading, ArticleKey, ArticleReadRepository, ArticleRecordId, ArticleSummary,
    ArticleWriteRepository, NewArticle, PublicationDate, Review, ReviewId,
};
use crate::domain::author::AuthorEmail;
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresArticleRepository {
    pool: PgPool,
}

impl PostgresArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Wire form of an embedded review inside the `reviews` JSONB column.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ReviewRecord {
    id: Uuid,
    heading: String,
    content: String,
    likes: i64,
    dislikes: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<&Review> for ReviewRecord {
    fn from(review: &Review) -> Self {
        Self {
            id: review.id.0,
            heading: review.heading.as_str().to_string(),
            content: review.content.as_str().to_string(),
            likes: review.likes.value(),
            dislikes: review.dislikes.value(),
            created_at: review.created_at,
            updated_at: review.updated_at,
        }
    }
}

impl TryFrom<ReviewRecord> for Review {
    type Error = DomainError;

    fn try_from(record: ReviewRecord) -> Result<Self, Self::Error> {
        Review::from_stored(
            ReviewId(record.id),
            &record.heading,
            &record.content,
            record.likes,
            record.dislikes,
            record.created_at,
            record.updated_at,
        )
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    article_id: String,
    heading: String,
    date_of_publication: String,
    summary: String,
    email: String,
    reviews: Json<Vec<ReviewRecord>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let reviews = row
            .reviews
            .0
            .into_iter()
            .map(Review::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Article {
            id: ArticleRecordId::new(row.id)?,
            article_id: ArticleKey::new(row.article_id)?,
            heading: ArticleHeading::new(row.heading)?,
            date_of_publication: PublicationDate::stored(row.date_of_publication)?,
            summary: ArticleSummary::new(row.summary)?,
            author_email: AuthorEmail::new(row.email)?,
            reviews,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn review_records(article: &Article) -> Vec<ReviewRecord> {
    article.reviews.iter().map(ReviewRecord::from).collect()
}

const ARTICLE_COLUMNS: &str =
    "id, article_id, heading, date_of_publication, summary, email, reviews, created_at, updated_at";

#[async_trait]
impl ArticleWriteRepository for PostgresArticleRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            article_id,
            heading,
            date_of_publication,
            summary,
            author_email,
            created_at,
            updated_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (article_id, heading, date_of_publication, summary, email, reviews, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING id, article_id, heading, date_of_publication, summary, email, reviews, created_at, updated_at",
        )
        .bind(article_id.as_str())
        .bind(heading.as_str())
        .bind(date_of_publication.as_str())
        .bind(summary.as_str())
        .bind(author_email.as_str())
        .bind(Json(Vec::<ReviewRecord>::new()))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn save_reviews(&self, article: &Article) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE articles SET reviews = $1, updated_at = $2 WHERE id = $3",
        )
        .bind(Json(review_records(article)))
        .bind(article.updated_at)
        .bind(i64::from(article.id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("Article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleRepository {
    async fn find_by_article_id(&self, article_id: &str) -> DomainResult<Option<Article>> {
        let maybe_row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE article_id = $1 LIMIT 1"
        ))
        .bind(article_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        maybe_row.map(Article::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}
