use crate::domain::author::Author;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub cell_phone_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house_number: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Author> for AuthorDto {
    fn from(author: Author) -> Self {
        Self {
            id: author.id.into(),
            name: author.name.into(),
            email: author.email.into(),
            cell_phone_number: author.cell_phone_number.into(),
            house_number: author.house_number,
            created_at: author.created_at,
            updated_at: author.updated_at,
        }
    }
}
