use crate::domain::author::entity::{Author, NewAuthor};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Authors are created once and never updated or deleted.
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    async fn insert(&self, author: NewAuthor) -> DomainResult<Author>;

    /// Lookup by the normalized (trimmed, lower-cased) email.
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Author>>;
}
