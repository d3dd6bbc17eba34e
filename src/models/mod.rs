//! Data models for Folio

pub mod author;
pub mod book;
pub mod google_book;

// Re-export commonly used types
pub use author::Author;
pub use book::Book;
pub use google_book::{GoogleBook, VolumeInfo};
