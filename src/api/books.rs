//! Book endpoints
//!
//! Reads need an authenticated caller, mutations the Administrator role.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{BookCreateDto, BookDto, BookUpdateDto},
    AppState,
};

use super::{AdminUser, AuthenticatedUser, JsonBody};

/// List all books, with cover images attached
pub async fn get_books(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<BookDto>>> {
    let books = state.services.books.get_books().await?;
    Ok(Json(books))
}

/// Get a book by ID
pub async fn get_book(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<BookDto>> {
    let book = state.services.books.get_book(id).await?;
    Ok(Json(book))
}

/// Create a book and store its cover image
pub async fn create_book(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    JsonBody(book): JsonBody<BookCreateDto>,
) -> AppResult<(StatusCode, Json<BookDto>)> {
    tracing::debug!("Book creation requested by {}", claims.sub);
    let created = state.services.books.create(book).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a book
pub async fn update_book(
    State(state): State<AppState>,
    AdminUser(_claims): AdminUser,
    Path(id): Path<i32>,
    JsonBody(book): JsonBody<BookUpdateDto>,
) -> AppResult<StatusCode> {
    state.services.books.update(id, book).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Remove a book
pub async fn delete_book(
    State(state): State<AppState>,
    AdminUser(_claims): AdminUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.books.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
