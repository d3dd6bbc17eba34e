//! Book catalog endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{Book, GoogleBook},
};

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "List of books, newest publication first", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.list_books().await?;
    Ok(Json(books))
}

/// Get book details by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.get_book(id).await?;
    Ok(Json(book))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = Book,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(mut book): Json<Book>,
) -> AppResult<(StatusCode, Json<Book>)> {
    state.services.books.add_book(&mut book).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// Update an existing book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = Book,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(mut book): Json<Book>,
) -> AppResult<Json<Book>> {
    // The path segment names the row; any id in the body is ignored.
    book.id = id;
    state.services.books.update_book(&book).await?;
    Ok(Json(book))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.books.remove_book(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Search the Google Books catalog by title
#[utoipa::path(
    get,
    path = "/books/search/google",
    tag = "books",
    params(
        ("title" = String, Query, description = "Title to search for")
    ),
    responses(
        (status = 200, description = "Matching volumes", body = Vec<GoogleBook>),
        (status = 400, description = "Missing title query parameter"),
        (status = 502, description = "Google Books API failure")
    )
)]
pub async fn search_google_books(
    State(state): State<crate::AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<GoogleBook>>> {
    let title = params
        .title
        .filter(|title| !title.is_empty())
        .ok_or_else(|| AppError::Validation("Missing title query parameter".to_string()))?;

    let results = state.services.books.search_google_books(&title).await?;
    Ok(Json(results))
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub title: Option<String>,
}
