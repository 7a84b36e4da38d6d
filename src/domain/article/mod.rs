pub mod entity;
pub mod repository;
pub mod review;
pub mod value_objects;

pub use entity::{Article, NewArticle};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use review::{Review, ReviewId, VoteCount};
pub use value_objects::{
    ArticleHeading, ArticleKey, ArticleRecordId, ArticleSummary, PublicationDate,
};
