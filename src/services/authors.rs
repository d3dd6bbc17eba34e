//! Author registration and lookup

use std::sync::Arc;

use crate::{error::AppResult, models::Author, repository::AuthorRepository};

#[derive(Clone)]
pub struct AuthorService {
    repository: Arc<dyn AuthorRepository>,
}

impl AuthorService {
    pub fn new(repository: Arc<dyn AuthorRepository>) -> Self {
        Self { repository }
    }

    /// Register a new author; on success `author.id` holds the generated id
    pub async fn register_author(&self, author: &mut Author) -> AppResult<()> {
        tracing::info!("Registering author: {}", author.name);
        self.repository.create(author).await
    }

    pub async fn get_author(&self, id: i32) -> AppResult<Author> {
        self.repository.find_by_id(id).await
    }
}
