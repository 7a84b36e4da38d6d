// src/infrastructure/repositories/postgres_author.rs
use super::map_sqlx;
use crate::domain::author::{
    Author, AuthorEmail, AuthorId, AuthorName, AuthorRepository, NewAuthor, PhoneNumber,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresAuthorRepository {
    pool: PgPool,
}

impl PostgresAuthorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AuthorRow {
    id: i64,
    name: String,
    email: String,
    cell_phone_number: String,
    house_number: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<AuthorRow> for Author {
    type Error = DomainError;

    fn try_from(row: AuthorRow) -> Result<Self, Self::Error> {
        Ok(Author {
            id: AuthorId::new(row.id)?,
            name: AuthorName::new(row.name)?,
            email: AuthorEmail::new(row.email)?,
            cell_phone_number: PhoneNumber::new(row.cell_phone_number)?,
            house_number: row.house_number,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl AuthorRepository for PostgresAuthorRepository {
    async fn insert(&self, author: NewAuthor) -> DomainResult<Author> {
        let NewAuthor {
            name,
            email,
            cell_phone_number,
            house_number,
            created_at,
            updated_at,
        } = author;

        let row = sqlx::query_as::<_, AuthorRow>(
            "INSERT INTO authors (name, email, cell_phone_number, house_number, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, name, email, cell_phone_number, house_number, created_at, updated_at",
        )
        .bind(name.as_str())
        .bind(email.as_str())
        .bind(cell_phone_number.as_str())
        .bind(house_number)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Author::try_from(row)
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Author>> {
        let maybe_row = sqlx::query_as::<_, AuthorRow>(
            "SELECT id, name, email, cell_phone_number, house_number, created_at, updated_at
             FROM authors WHERE email = $1 LIMIT 1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        maybe_row.map(Author::try_from).transpose()
    }
}
