// tests/support/mocks.rs
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use pressroom::application::ports::time::Clock;
use pressroom::domain::article::entity::{Article, NewArticle};
use pressroom::domain::article::repository::{ArticleReadRepository, ArticleWriteRepository};
use pressroom::domain::article::value_objects::ArticleRecordId;
use pressroom::domain::author::entity::{Author, NewAuthor};
use pressroom::domain::author::repository::AuthorRepository;
use pressroom::domain::author::value_objects::AuthorId;
use pressroom::domain::errors::{DomainError, DomainResult};

/// Clock pinned to 2024-06-15T12:00:00Z so the not-in-future rule is
/// deterministic in tests.
pub struct FixedClock;

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

/* ------------------------------ AuthorRepository ------------------------------ */

#[derive(Default)]
pub struct InMemoryAuthorRepository {
    authors: Mutex<Vec<Author>>,
    next_id: AtomicI64,
}

impl InMemoryAuthorRepository {
    pub async fn find_count(&self) -> usize {
        self.authors.lock().unwrap().len()
    }
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepository {
    async fn insert(&self, author: NewAuthor) -> DomainResult<Author> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let stored = Author {
            id: AuthorId::new(id)?,
            name: author.name,
            email: author.email,
            cell_phone_number: author.cell_phone_number,
            house_number: author.house_number,
            created_at: author.created_at,
            updated_at: author.updated_at,
        };
        self.authors.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Author>> {
        Ok(self
            .authors
            .lock()
            .unwrap()
            .iter()
            .find(|author| author.email.as_str() == email)
            .cloned())
    }
}

/* ------------------------------ Article repositories ------------------------------ */

#[derive(Default)]
pub struct InMemoryArticleRepository {
    articles: Mutex<Vec<Article>>,
    next_id: AtomicI64,
}

impl InMemoryArticleRepository {
    pub fn snapshot(&self) -> Vec<Article> {
        self.articles.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let stored = Article {
            id: ArticleRecordId::new(id)?,
            article_id: article.article_id,
            heading: article.heading,
            date_of_publication: article.date_of_publication,
            summary: article.summary,
            author_email: article.author_email,
            reviews: Vec::new(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        self.articles.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn save_reviews(&self, article: &Article) -> DomainResult<()> {
        let mut articles = self.articles.lock().unwrap();
        let stored = articles
            .iter_mut()
            .find(|candidate| candidate.id == article.id)
            .ok_or_else(|| DomainError::NotFound("Article not found".into()))?;
        stored.reviews = article.reviews.clone();
        stored.updated_at = article.updated_at;
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepository {
    async fn find_by_article_id(&self, article_id: &str) -> DomainResult<Option<Article>> {
        Ok(self
            .articles
            .lock()
            .unwrap()
            .iter()
            .find(|article| article.article_id.as_str() == article_id)
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        Ok(self.articles.lock().unwrap().clone())
    }
}

/// Repository that fails every call, for exercising the internal-error path.
pub struct FailingArticleRepository;

#[async_trait]
impl ArticleReadRepository for FailingArticleRepository {
    async fn find_by_article_id(&self, _article_id: &str) -> DomainResult<Option<Article>> {
        Err(DomainError::Persistence("connection reset".into()))
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        Err(DomainError::Persistence("connection reset".into()))
    }
}

#[async_trait]
impl ArticleWriteRepository for FailingArticleRepository {
    async fn insert(&self, _article: NewArticle) -> DomainResult<Article> {
        Err(DomainError::Persistence("connection reset".into()))
    }

    async fn save_reviews(&self, _article: &Article) -> DomainResult<()> {
        Err(DomainError::Persistence("connection reset".into()))
    }
}
