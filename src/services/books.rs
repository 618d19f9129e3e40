//! Book management service
//!
//! Database writes happen before image writes. There is no compensation: when
//! the image write fails after the row was stored, the failure is logged and
//! reported as an internal error while the row stays in place.

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookCreateDto, BookDto, BookUpdateDto, NewBook},
    repository::Repository,
};

use super::{images::ImageStore, location};

const RESOURCE: &str = "Books";

/// Non-empty image name, if any
fn image_name(image: &Option<String>) -> Option<&str> {
    image.as_deref().filter(|name| !name.is_empty())
}

/// Decoded image bytes for a request, checked before any store access
fn decode_payload(image: &Option<String>, file: &Option<String>) -> AppResult<Option<Vec<u8>>> {
    let Some(payload) = file.as_deref().filter(|f| !f.is_empty()) else {
        return Ok(None);
    };
    if image_name(image).is_none() {
        return Err(AppError::Validation(
            "image: a file name is required when file is provided".to_string(),
        ));
    }
    ImageStore::decode(payload).map(Some)
}

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
    images: ImageStore,
}

impl BooksService {
    pub fn new(repository: Repository, images: ImageStore) -> Self {
        Self { repository, images }
    }

    /// Map a book and attach its image bytes when the file exists
    async fn to_dto(&self, book: Book) -> AppResult<BookDto> {
        let mut dto = BookDto::from(book);
        if let Some(name) = image_name(&dto.image) {
            dto.file = self.images.read_base64(name).await?;
            if dto.file.is_none() {
                tracing::error!("Book {}: image {} is missing from the store", dto.id, name);
            }
        }
        Ok(dto)
    }

    pub async fn get_books(&self) -> AppResult<Vec<BookDto>> {
        let location = location(RESOURCE, "GetBooks");
        tracing::info!("{}: Attempted Call", location);

        let books = self.repository.books.find_all().await?;
        let mut response = Vec::with_capacity(books.len());
        for book in books {
            response.push(self.to_dto(book).await?);
        }

        tracing::info!("{}: Successful Call, {} books", location, response.len());
        Ok(response)
    }

    pub async fn get_book(&self, id: i32) -> AppResult<BookDto> {
        let location = location(RESOURCE, "GetBook");
        tracing::info!("{}: Attempted Call for id: {}", location, id);

        let Some(book) = self.repository.books.find_by_id(id).await? else {
            tracing::warn!("{}: Failed to retrieve record with id: {}", location, id);
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        };
        let response = self.to_dto(book).await?;

        tracing::info!("{}: Successfully got record with id: {}", location, id);
        Ok(response)
    }

    pub async fn create(&self, dto: BookCreateDto) -> AppResult<BookDto> {
        let location = location(RESOURCE, "Create");
        tracing::info!("{}: Create Attempted", location);

        if let Err(errors) = dto.validate() {
            tracing::warn!("{}: Data was incomplete", location);
            return Err(errors.into());
        }
        let image_bytes = decode_payload(&dto.image, &dto.file).map_err(|e| {
            tracing::warn!("{}: Image payload rejected", location);
            e
        })?;

        let book = self.repository.books.create(&NewBook::from(&dto)).await?;

        if let (Some(bytes), Some(name)) = (image_bytes, image_name(&dto.image)) {
            if let Err(e) = self.images.write(name, &bytes).await {
                tracing::error!(
                    "{}: Book {} stored but image {} could not be written: {}",
                    location, book.id, name, e
                );
                return Err(e);
            }
        }

        tracing::info!("{}: Creation was successful, id: {}", location, book.id);
        Ok(book.into())
    }

    /// Replace a book's fields and keep the image store in step with the new file name
    pub async fn update(&self, id: i32, dto: BookUpdateDto) -> AppResult<()> {
        let location = location(RESOURCE, "Update");
        tracing::info!("{}: Update Attempted on record with id: {}", location, id);

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
            tracing::warn!("{}: Data was incomplete - id: {}", location, id);
            return Err(errors.into());
        }
        let image_bytes = decode_payload(&dto.image, &dto.file).map_err(|e| {
            tracing::warn!("{}: Image payload rejected - id: {}", location, id);
            e
        })?;

        if !self.repository.books.exists(id).await? {
            tracing::warn!("{}: Failed to retrieve record with id: {}", location, id);
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        let old_image = self.repository.books.get_image_file_name(id).await?;

        if !self.repository.books.update(&Book::from(&dto)).await? {
            return Err(AppError::Internal(format!(
                "{}: Update failed for record with id: {}",
                location, id
            )));
        }

        let new_image = image_name(&dto.image);
        if let Some(old) = image_name(&old_image) {
            if new_image != Some(old) {
                match self.images.remove(old).await {
                    Ok(true) => tracing::info!("{}: Removed previous image {}", location, old),
                    Ok(false) => {}
                    Err(e) => tracing::warn!(
                        "{}: Could not remove previous image {}: {}",
                        location, old, e
                    ),
                }
            }
        }

        if let (Some(bytes), Some(name)) = (image_bytes, new_image) {
            if let Err(e) = self.images.write(name, &bytes).await {
                tracing::error!(
                    "{}: Book {} updated but image {} could not be written: {}",
                    location, id, name, e
                );
                return Err(e);
            }
        }

        tracing::info!("{}: Record with id: {} successfully updated", location, id);
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let location = location(RESOURCE, "Delete");
        tracing::info!("{}: Delete Attempted on record with id: {}", location, id);

        if id < 1 {
            tracing::warn!("{}: Delete failed with bad data - id: {}", location, id);
            return Err(AppError::BadRequest(format!("Invalid id {}", id)));
        }

        if !self.repository.books.exists(id).await? {
            tracing::warn!("{}: Delete with id: {} was not found", location, id);
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        let image = self.repository.books.get_image_file_name(id).await?;

        if !self.repository.books.delete(id).await? {
            return Err(AppError::Internal(format!(
                "{}: Delete Failed on record {}",
                location, id
            )));
        }

        if let Some(name) = image_name(&image) {
            if let Err(e) = self.images.remove(name).await {
                tracing::warn!("{}: Could not remove image {}: {}", location, name, e);
            }
        }

        tracing::info!("{}: Record with id: {} successfully deleted", location, id);
        Ok(())
    }
}
