// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use crate::domain::author::AuthorRepository;

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) author_repo: Arc<dyn AuthorRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        author_repo: Arc<dyn AuthorRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            author_repo,
            clock,
        }
    }
}
