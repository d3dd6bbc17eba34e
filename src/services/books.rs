//! Catalog operations for books

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{Book, GoogleBook},
    repository::BookRepository,
    services::GoogleBooksClient,
};

#[derive(Clone)]
pub struct BookService {
    repository: Arc<dyn BookRepository>,
    search: GoogleBooksClient,
}

impl BookService {
    pub fn new(repository: Arc<dyn BookRepository>, search: GoogleBooksClient) -> Self {
        Self { repository, search }
    }

    /// All books, newest publication first
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.find_all().await
    }

    pub async fn get_book(&self, id: i32) -> AppResult<Book> {
        self.repository.find_by_id(id).await
    }

    /// Store a new book; on success `book.id` holds the generated id
    pub async fn add_book(&self, book: &mut Book) -> AppResult<()> {
        tracing::info!("Adding book: {}", book.title);
        self.repository.create(book).await
    }

    /// Replace every stored field of the book identified by `book.id`
    pub async fn update_book(&self, book: &Book) -> AppResult<()> {
        tracing::info!("Updating book {}", book.id);
        self.repository.update(book).await
    }

    pub async fn remove_book(&self, id: i32) -> AppResult<()> {
        tracing::info!("Removing book {}", id);
        self.repository.delete(id).await
    }

    /// Search the Google Books catalog by title
    pub async fn search_google_books(&self, title: &str) -> AppResult<Vec<GoogleBook>> {
        self.search.search(title).await
    }
}
