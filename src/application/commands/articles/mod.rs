mod add_review;
mod create;
mod delete_review;
mod service;

pub use add_review::AddReviewCommand;
pub use create::CreateArticleCommand;
pub use delete_review::DeleteReviewCommand;
pub use service::ArticleCommandService;
