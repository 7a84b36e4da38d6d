// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::application::{
    dto::ArticleDto,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::article::NewArticle;
use crate::domain::author::AuthorEmail;
use crate::domain::validation::is_valid_date_format;
use chrono::NaiveDate;

#[derive(Debug)]
pub struct CreateArticleCommand {
    pub article_id: String,
    pub heading: String,
    pub date_of_publication: String,
    pub summary: String,
    pub email: String,
}

impl ArticleCommandService {
    /// The check ordering is contractual: duplicate `articleId` first (a
    /// duplicate-id request never learns about an author problem), then
    /// author existence, then the date format, then the calendar re-parse.
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let article_id = command.article_id.trim();
        if self
            .read_repo
            .find_by_article_id(article_id)
            .await?
            .is_some()
        {
            return Err(ApplicationError::conflict("ArticleId is already in use"));
        }

        let normalized_email = AuthorEmail::normalize(&command.email);
        let author = self
            .author_repo
            .find_by_email(&normalized_email)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Author does not exist"))?;

        if !is_valid_date_format(&command.date_of_publication) {
            return Err(ApplicationError::validation(
                "Date is not in correct format. It should be yyyy-mm-dd.",
            ));
        }

        // Normalization re-parse: values like `2024-13-99` pass the shape
        // check but are not calendar dates, and are rejected here.
        let date = NaiveDate::parse_from_str(&command.date_of_publication, "%Y-%m-%d")
            .map_err(|_| ApplicationError::validation("Date is not a valid calendar date."))?;
        let normalized_date = date.format("%Y-%m-%d").to_string();

        let now = self.clock.now();
        let new_article = NewArticle::new(
            &command.article_id,
            &command.heading,
            &normalized_date,
            &command.summary,
            author.email.clone(),
            &self.clock.today(),
            now,
        )?;

        let created = self.write_repo.insert(new_article).await?;
        Ok(created.into())
    }
}
