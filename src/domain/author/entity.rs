// src/domain/author/entity.rs
use crate::domain::author::value_objects::{AuthorEmail, AuthorId, AuthorName, PhoneNumber};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Author {
    pub id: AuthorId,
    pub name: AuthorName,
    pub email: AuthorEmail,
    pub cell_phone_number: PhoneNumber,
    pub house_number: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub name: AuthorName,
    pub email: AuthorEmail,
    pub cell_phone_number: PhoneNumber,
    pub house_number: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewAuthor {
    /// Validation pass over the whole payload: every field is checked and
    /// all violations are collected before reporting.
    pub fn new(
        name: &str,
        email: &str,
        cell_phone_number: &str,
        house_number: Option<i64>,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let name = AuthorName::new(name);
        let email = AuthorEmail::new(email);
        let cell_phone_number = PhoneNumber::new(cell_phone_number);

        let violations: Vec<String> = [
            name.as_ref().err(),
            email.as_ref().err(),
            cell_phone_number.as_ref().err(),
        ]
        .into_iter()
        .flatten()
        .map(|err| err.message().to_string())
        .collect();

        match (name, email, cell_phone_number) {
            (Ok(name), Ok(email), Ok(cell_phone_number)) => Ok(Self {
                name,
                email,
                cell_phone_number,
                house_number,
                created_at: now,
                updated_at: now,
            }),
            _ => Err(DomainError::Validation(violations.join("; "))),
        }
    }
}
