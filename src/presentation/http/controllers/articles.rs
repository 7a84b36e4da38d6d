// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{AddReviewCommand, CreateArticleCommand, DeleteReviewCommand},
    dto::{ArticleDto, ListedArticleDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult, MessageBody};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequest {
    #[serde(default)]
    pub article_id: String,
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub date_of_publication: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub email: String,
}

/// Counts stay raw JSON values so the command can run its negativity and
/// type checks in the contractual order.
#[derive(Debug, Deserialize)]
pub struct AddReviewRequest {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub likes: Value,
    #[serde(default)]
    pub dislikes: Value,
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        article_id: payload.article_id,
        heading: payload.heading,
        date_of_publication: payload.date_of_publication,
        summary: payload.summary,
        email: payload.email,
    };

    let created = state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ListedArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles()
        .await
        .into_http()
        .map(Json)
}

pub async fn add_review(
    Extension(state): Extension<HttpState>,
    Path(article_id): Path<String>,
    Json(payload): Json<AddReviewRequest>,
) -> HttpResult<(StatusCode, Json<MessageBody>)> {
    let command = AddReviewCommand {
        article_id,
        heading: payload.heading,
        content: payload.content,
        likes: payload.likes,
        dislikes: payload.dislikes,
    };

    state
        .services
        .article_commands
        .add_review(command)
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(MessageBody::new("Review added to article successfully")),
    ))
}

pub async fn delete_review(
    Extension(state): Extension<HttpState>,
    Path((article_id, review_id)): Path<(String, String)>,
) -> HttpResult<Json<MessageBody>> {
    state
        .services
        .article_commands
        .delete_review(DeleteReviewCommand {
            article_id,
            review_id,
        })
        .await
        .into_http()?;

    Ok(Json(MessageBody::new("Review deleted successfully")))
}
