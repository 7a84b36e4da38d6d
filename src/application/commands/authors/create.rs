// src/application/commands/authors/create.rs
use super::AuthorCommandService;
use crate::application::{
    dto::AuthorDto,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::author::{AuthorEmail, NewAuthor};

#[derive(Debug)]
pub struct CreateAuthorCommand {
    pub name: String,
    pub email: String,
    pub cell_phone_number: String,
    pub house_number: Option<i64>,
}

impl AuthorCommandService {
    /// Duplicate emails are caught by an explicit pre-query against the
    /// normalized address; check-then-insert is not atomic, which is the
    /// documented behavior of this operation.
    pub async fn create_author(
        &self,
        command: CreateAuthorCommand,
    ) -> ApplicationResult<AuthorDto> {
        let normalized = AuthorEmail::normalize(&command.email);
        if self.author_repo.find_by_email(&normalized).await?.is_some() {
            return Err(ApplicationError::conflict("Email is already registered"));
        }

        let new_author = NewAuthor::new(
            &command.name,
            &command.email,
            &command.cell_phone_number,
            command.house_number,
            self.clock.now(),
        )?;

        let created = self.author_repo.insert(new_author).await?;
        Ok(created.into())
    }
}
