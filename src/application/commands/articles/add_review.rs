// src/application/commands/articles/add_review.rs
use super::ArticleCommandService;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::article::Review;
use serde_json::Value;

/// Like/dislike counts arrive as raw JSON values so the two count checks can
/// run in their contractual order: the negativity comparison first (with
/// numeric coercion of strings), the number type check second. A value such
/// as `"-3"` therefore reports "cannot be negative" even though it is not a
/// number, and `likes` is inspected before `dislikes` in both checks.
#[derive(Debug)]
pub struct AddReviewCommand {
    pub article_id: String,
    pub heading: String,
    pub content: String,
    pub likes: Value,
    pub dislikes: Value,
}

fn coerced_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn is_negative(value: &Value) -> bool {
    coerced_number(value).is_some_and(|n| n < 0.0)
}

fn as_count(value: &Value) -> Option<i64> {
    value.as_i64()
}

impl ArticleCommandService {
    pub async fn add_review(&self, command: AddReviewCommand) -> ApplicationResult<()> {
        let mut article = self
            .read_repo
            .find_by_article_id(command.article_id.trim())
            .await?
            .ok_or_else(|| ApplicationError::not_found("Article does not exist"))?;

        if is_negative(&command.likes) || is_negative(&command.dislikes) {
            let field = if is_negative(&command.likes) {
                "likes"
            } else {
                "dislikes"
            };
            return Err(ApplicationError::validation(format!(
                "Number of {field} cannot be negative"
            )));
        }

        if !command.likes.is_number() || !command.dislikes.is_number() {
            let field = if !command.likes.is_number() {
                "likes"
            } else {
                "dislikes"
            };
            return Err(ApplicationError::validation(format!(
                "{field} need to be a number"
            )));
        }

        let likes = as_count(&command.likes)
            .ok_or_else(|| ApplicationError::validation("likes need to be a number"))?;
        let dislikes = as_count(&command.dislikes)
            .ok_or_else(|| ApplicationError::validation("dislikes need to be a number"))?;

        let now = self.clock.now();
        let review = Review::new(&command.heading, &command.content, likes, dislikes, now)?;

        article.add_review(review, now);
        self.write_repo.save_reviews(&article).await?;
        Ok(())
    }
}
