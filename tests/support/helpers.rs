// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks::{FixedClock, InMemoryArticleRepository, InMemoryAuthorRepository};
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use serde_json::Value;
use tower::util::ServiceExt as _;

use pressroom::application::ports::time::Clock;
use pressroom::application::services::ApplicationServices;
use pressroom::domain::article::repository::{ArticleReadRepository, ArticleWriteRepository};
use pressroom::domain::author::repository::AuthorRepository;
use pressroom::presentation::http::{routes::build_router, state::HttpState};

pub struct TestApp {
    pub router: Router,
    pub authors: Arc<InMemoryAuthorRepository>,
    pub articles: Arc<InMemoryArticleRepository>,
}

pub fn make_test_app() -> TestApp {
    let authors = Arc::new(InMemoryAuthorRepository::default());
    let articles = Arc::new(InMemoryArticleRepository::default());

    let author_repo: Arc<dyn AuthorRepository> = Arc::clone(&authors) as Arc<dyn AuthorRepository>;
    let article_write: Arc<dyn ArticleWriteRepository> =
        Arc::clone(&articles) as Arc<dyn ArticleWriteRepository>;
    let article_read: Arc<dyn ArticleReadRepository> =
        Arc::clone(&articles) as Arc<dyn ArticleReadRepository>;
    let clock: Arc<dyn Clock> = Arc::new(FixedClock);

    let services = Arc::new(ApplicationServices::new(
        author_repo,
        article_write,
        article_read,
        clock,
    ));

    TestApp {
        router: build_router(HttpState { services }),
        authors,
        articles,
    }
}

pub async fn send_json(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

pub async fn post_json(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send_json(router, "POST", uri, Some(body)).await
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    send_json(router, "GET", uri, None).await
}

pub async fn delete(router: &Router, uri: &str) -> (StatusCode, Value) {
    send_json(router, "DELETE", uri, None).await
}

/// Creates the standing author used by most article tests.
pub async fn create_default_author(router: &Router) {
    let (status, _) = post_json(
        router,
        "/authors",
        serde_json::json!({
            "name": "A",
            "email": "a@x.com",
            "cellPhoneNumber": "123-456-7890"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

/// Creates an article owned by the default author.
pub async fn create_article(router: &Router, article_id: &str) {
    let (status, _) = post_json(
        router,
        "/articles",
        serde_json::json!({
            "articleId": article_id,
            "heading": "H",
            "dateOfPublication": "2020-01-01",
            "summary": "S",
            "email": "a@x.com"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}
