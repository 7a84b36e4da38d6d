// src/application/commands/articles/delete_review.rs
use super::ArticleCommandService;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::article::ReviewId;

#[derive(Debug)]
pub struct DeleteReviewCommand {
    pub article_id: String,
    pub review_id: String,
}

impl ArticleCommandService {
    /// An id that cannot be parsed can never match an embedded review, so it
    /// reports the same not-found outcome as an unknown sub-identity.
    pub async fn delete_review(&self, command: DeleteReviewCommand) -> ApplicationResult<()> {
        let mut article = self
            .read_repo
            .find_by_article_id(command.article_id.trim())
            .await?
            .ok_or_else(|| ApplicationError::not_found("Article not found"))?;

        let review_id: ReviewId = command.review_id.parse()?;

        let now = self.clock.now();
        article.remove_review(review_id, now)?;

        self.write_repo.save_reviews(&article).await?;
        Ok(())
    }
}
