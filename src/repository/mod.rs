//! Repository layer for database operations

pub mod authors;
pub mod books;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{Author, Book},
};

/// Persistence contract for books.
///
/// Services reach stored books only through this trait; production wires
/// the PostgreSQL adapter, tests the in-memory one or a mock.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// All books, newest publication first; empty when the table is empty
    async fn find_all(&self) -> AppResult<Vec<Book>>;
    /// Single book by primary key; `NotFound` when no row matches
    async fn find_by_id(&self, id: i32) -> AppResult<Book>;
    /// Insert from all fields except `id`; the generated id is written back
    /// into `book` on success and left at zero on failure
    async fn create(&self, book: &mut Book) -> AppResult<()>;
    /// Full-field replacement keyed by `book.id`; `NotFound` when no row
    /// was affected
    async fn update(&self, book: &Book) -> AppResult<()>;
    /// Remove by primary key; `NotFound` when no row was affected
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Persistence contract for authors.
///
/// Create and lookup only; authors are immutable once registered.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Single author by primary key; `NotFound` when no row matches
    async fn find_by_id(&self, id: i32) -> AppResult<Author>;
    /// Insert from all fields except `id`; the generated id is written back
    async fn create(&self, author: &mut Author) -> AppResult<()>;
}

/// Main repository struct bundling one adapter per entity
#[derive(Clone)]
pub struct Repository {
    pub books: Arc<dyn BookRepository>,
    pub authors: Arc<dyn AuthorRepository>,
}

impl Repository {
    /// Create a repository backed by the given PostgreSQL pool
    pub fn postgres(pool: Pool<Postgres>) -> Self {
        Self {
            books: Arc::new(books::PgBookRepository::new(pool.clone())),
            authors: Arc::new(authors::PgAuthorRepository::new(pool)),
        }
    }
}
