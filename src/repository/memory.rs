//! In-memory repository adapters.
//!
//! Store stand-ins used by tests. Behavior mirrors the PostgreSQL adapters,
//! including identifier write-back on create and the distinct not-found
//! conditions on lookups, updates and deletes.

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::{
    error::{AppError, AppResult},
    models::{Author, Book},
    repository::{AuthorRepository, BookRepository},
};

#[derive(Default)]
pub struct InMemoryBookRepository {
    books: RwLock<Vec<Book>>,
    next_id: AtomicI32,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn find_all(&self) -> AppResult<Vec<Book>> {
        let mut books = self.books.read().unwrap().clone();
        books.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(books)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Book> {
        self.books
            .read()
            .unwrap()
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    async fn create(&self, book: &mut Book) -> AppResult<()> {
        book.id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.books.write().unwrap().push(book.clone());
        Ok(())
    }

    async fn update(&self, book: &Book) -> AppResult<()> {
        let mut books = self.books.write().unwrap();
        match books.iter_mut().find(|b| b.id == book.id) {
            Some(slot) => {
                *slot = book.clone();
                Ok(())
            }
            None => Err(AppError::NotFound(format!(
                "Book {} not found for update",
                book.id
            ))),
        }
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut books = self.books.write().unwrap();
        let before = books.len();
        books.retain(|b| b.id != id);
        if books.len() == before {
            return Err(AppError::NotFound(format!(
                "Book {} not found for delete",
                id
            )));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryAuthorRepository {
    authors: RwLock<Vec<Author>>,
    next_id: AtomicI32,
}

impl InMemoryAuthorRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepository {
    async fn find_by_id(&self, id: i32) -> AppResult<Author> {
        self.authors
            .read()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))
    }

    async fn create(&self, author: &mut Author) -> AppResult<()> {
        author.id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.authors.write().unwrap().push(author.clone());
        Ok(())
    }
}
