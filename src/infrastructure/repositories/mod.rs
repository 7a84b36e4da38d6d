// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_article;
mod postgres_author;

pub(crate) use error::map_sqlx;
pub use postgres_article::PostgresArticleRepository;
pub use postgres_author::PostgresAuthorRepository;
