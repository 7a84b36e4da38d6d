// src/presentation/http/controllers/authors.rs
use crate::application::{commands::authors::CreateAuthorCommand, dto::AuthorDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;

/// Missing fields default to empty values and fall through the same
/// validation pass, so an absent name reports a validation error rather
/// than a deserialization rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuthorRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub cell_phone_number: String,
    #[serde(default)]
    pub house_number: Option<i64>,
}

pub async fn create_author(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateAuthorRequest>,
) -> HttpResult<(StatusCode, Json<AuthorDto>)> {
    let command = CreateAuthorCommand {
        name: payload.name,
        email: payload.email,
        cell_phone_number: payload.cell_phone_number,
        house_number: payload.house_number,
    };

    let created = state
        .services
        .author_commands
        .create_author(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}
