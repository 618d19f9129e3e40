//! Author endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{AuthorCreateDto, AuthorDto, AuthorUpdateDto},
    AppState,
};

use super::JsonBody;

/// List all authors
pub async fn get_authors(State(state): State<AppState>) -> AppResult<Json<Vec<AuthorDto>>> {
    let authors = state.services.authors.get_authors().await?;
    Ok(Json(authors))
}

/// Get an author by ID
pub async fn get_author(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<AuthorDto>> {
    let author = state.services.authors.get_author(id).await?;
    Ok(Json(author))
}

/// Create an author
pub async fn create_author(
    State(state): State<AppState>,
    JsonBody(author): JsonBody<AuthorCreateDto>,
) -> AppResult<(StatusCode, Json<AuthorDto>)> {
    let created = state.services.authors.create(author).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an author
pub async fn update_author(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(author): JsonBody<AuthorUpdateDto>,
) -> AppResult<StatusCode> {
    state.services.authors.update(id, author).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Remove an author
pub async fn delete_author(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.authors.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
