//! Business logic services

pub mod authors;
pub mod books;
pub mod google_books;

pub use authors::AuthorService;
pub use books::BookService;
pub use google_books::GoogleBooksClient;

use crate::{config::GoogleBooksConfig, error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: BookService,
    pub authors: AuthorService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, google_books: &GoogleBooksConfig) -> AppResult<Self> {
        let search = GoogleBooksClient::new(google_books)?;

        Ok(Self {
            books: BookService::new(repository.books, search),
            authors: AuthorService::new(repository.authors),
        })
    }
}
