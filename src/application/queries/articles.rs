// src/application/queries/articles.rs
use std::sync::Arc;

use crate::application::{
    dto::ListedArticleDto,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::article::ArticleReadRepository;
use crate::domain::author::AuthorRepository;

pub struct ArticleQueryService {
    read_repo: Arc<dyn ArticleReadRepository>,
    author_repo: Arc<dyn AuthorRepository>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        author_repo: Arc<dyn AuthorRepository>,
    ) -> Self {
        Self {
            read_repo,
            author_repo,
        }
    }

    /// One author lookup per article; cost is linear in article count. An
    /// article whose stored email no longer resolves keeps the plain string
    /// in its `email` field.
    pub async fn list_articles(&self) -> ApplicationResult<Vec<ListedArticleDto>> {
        let articles = self.read_repo.list().await?;
        if articles.is_empty() {
            return Err(ApplicationError::not_found("No articles found"));
        }

        let mut listed = Vec::with_capacity(articles.len());
        for article in articles {
            let author = self
                .author_repo
                .find_by_email(article.author_email.as_str())
                .await?;
            listed.push(ListedArticleDto::from_article(article, author));
        }
        Ok(listed)
    }
}
