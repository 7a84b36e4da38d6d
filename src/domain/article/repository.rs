use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;

    /// Partial save used by the review mutations: writes only the review
    /// sequence and `updated_at` back to the stored record. The article's
    /// other fields are neither touched nor re-validated by this path.
    async fn save_reviews(&self, article: &Article) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    /// Lookup by the human-assigned `articleId` (trimmed form).
    async fn find_by_article_id(&self, article_id: &str) -> DomainResult<Option<Article>>;

    async fn list(&self) -> DomainResult<Vec<Article>>;
}
