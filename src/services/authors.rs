//! Author management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{Author, AuthorCreateDto, AuthorDto, AuthorUpdateDto, NewAuthor},
    repository::Repository,
};

use super::location;

const RESOURCE: &str = "Authors";

#[derive(Clone)]
pub struct AuthorsService {
    repository: Repository,
}

impl AuthorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// All authors with their books
    pub async fn get_authors(&self) -> AppResult<Vec<AuthorDto>> {
        let location = location(RESOURCE, "GetAuthors");
        tracing::info!("{}: Attempted Call", location);

        let authors = self.repository.authors.find_all().await?;
        let response: Vec<AuthorDto> = authors.into_iter().map(AuthorDto::from).collect();

        tracing::info!("{}: Successfully got {} authors", location, response.len());
        Ok(response)
    }

    pub async fn get_author(&self, id: i32) -> AppResult<AuthorDto> {
        let location = location(RESOURCE, "GetAuthor");
        tracing::info!("{}: Attempted Call for id: {}", location, id);

        let Some(author) = self.repository.authors.find_by_id(id).await? else {
            tracing::warn!("{}: Author with id: {} not found", location, id);
            return Err(AppError::NotFound(format!("Author {} not found", id)));
        };

        tracing::info!("{}: Successfully got Author with id: {}", location, id);
        Ok(author.into())
    }

    pub async fn create(&self, dto: AuthorCreateDto) -> AppResult<AuthorDto> {
        let location = location(RESOURCE, "Create");
        tracing::info!("{}: Create Attempted", location);

        if let Err(errors) = dto.validate() {
            tracing::warn!("{}: Author data was incomplete", location);
            return Err(errors.into());
        }

        let author = self.repository.authors.create(&NewAuthor::from(dto)).await?;

        tracing::info!("{}: Author created with id: {}", location, author.id);
        Ok(author.into())
    }

    /// Replace an author's fields; the path id must match the body id
    pub async fn update(&self, id: i32, dto: AuthorUpdateDto) -> AppResult<()> {
        let location = location(RESOURCE, "Update");
        tracing::info!("{}: Update Attempted - id: {}", location, id);

        if id < 1 {
            tracing::warn!("{}: Update failed with bad data - id: {}", location, id);
            return Err(AppError::BadRequest(format!("Invalid id {}", id)));
        }
        if id != dto.id {
            tracing::warn!("{}: Update failed with bad data - id: {}", location, id);
            return Err(AppError::BadRequest(format!(
                "Path id {} does not match body id {}",
                id, dto.id
            )));
        }

        if let Err(errors) = dto.validate() {
            tracing::warn!("{}: Author update data was incomplete - id: {}", location, id);
            return Err(errors.into());
        }

        if !self.repository.authors.exists(id).await? {
            tracing::warn!("{}: Author with id: {} was not found", location, id);
            return Err(AppError::NotFound(format!("Author {} not found", id)));
        }

        if !self.repository.authors.update(&Author::from(dto)).await? {
            return Err(AppError::Internal(format!("{}: Update operation failed for id: {}", location, id)));
        }

        tracing::info!("{}: Author with id: {} successfully updated", location, id);
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let location = location(RESOURCE, "Delete");
        tracing::info!("{}: Delete Attempted - id: {}", location, id);

        if id < 1 {
            tracing::warn!("{}: Delete failed with bad data - id: {}", location, id);
            return Err(AppError::BadRequest(format!("Invalid id {}", id)));
        }

        if !self.repository.authors.exists(id).await? {
            tracing::warn!("{}: Author with id: {} was not found", location, id);
            return Err(AppError::NotFound(format!("Author {} not found", id)));
        }

        if !self.repository.authors.delete(id).await? {
            return Err(AppError::Internal(format!("{}: Delete failed for id: {}", location, id)));
        }

        tracing::info!("{}: Author with id: {} successfully deleted", location, id);
        Ok(())
    }
}
