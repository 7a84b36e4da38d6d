pub mod articles;
pub mod authors;

pub use articles::{ArticleDto, AuthorField, ListedArticleDto, ReviewDto};
pub use authors::AuthorDto;
