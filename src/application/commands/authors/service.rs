// src/application/commands/authors/service.rs
use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::domain::author::AuthorRepository;

pub struct AuthorCommandService {
    pub(super) author_repo: Arc<dyn AuthorRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl AuthorCommandService {
    pub fn new(author_repo: Arc<dyn AuthorRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { author_repo, clock }
    }
}
