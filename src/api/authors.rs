//! Author endpoints
//!
//! Authors can be registered and looked up, never modified or removed.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{error::AppResult, models::Author};

/// Register a new author
#[utoipa::path(
    post,
    path = "/authors",
    tag = "authors",
    request_body = Author,
    responses(
        (status = 201, description = "Author created", body = Author),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_author(
    State(state): State<crate::AppState>,
    Json(mut author): Json<Author>,
) -> AppResult<(StatusCode, Json<Author>)> {
    state.services.authors.register_author(&mut author).await?;
    Ok((StatusCode::CREATED, Json(author)))
}

/// Get author details by ID
#[utoipa::path(
    get,
    path = "/authors/{id}",
    tag = "authors",
    params(
        ("id" = i32, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Author details", body = Author),
        (status = 404, description = "Author not found")
    )
)]
pub async fn get_author(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Author>> {
    let author = state.services.authors.get_author(id).await?;
    Ok(Json(author))
}
