//! Book model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use super::{
    author::{Author, AuthorDto},
    validate_not_blank,
};

/// Book record as stored in the `books` table
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub year: Option<i32>,
    pub isbn: String,
    pub summary: Option<String>,
    /// File name of the cover in the image store
    pub image: Option<String>,
    pub author_id: Option<i32>,
    /// Owning author, loaded by the repository on reads
    #[sqlx(skip)]
    pub author: Option<Author>,
}

/// Values for a new `books` row; the id is assigned by the store
#[derive(Debug, Clone, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub year: Option<i32>,
    pub isbn: String,
    pub summary: Option<String>,
    pub image: Option<String>,
    pub author_id: Option<i32>,
}

/// Book as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    pub id: i32,
    pub title: String,
    pub year: Option<i32>,
    pub isbn: String,
    pub summary: Option<String>,
    pub image: Option<String>,
    /// Base64 image bytes, filled on every read and never persisted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub author_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorDto>,
}

/// Create book request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookCreateDto {
    #[validate(custom(function = "validate_not_blank", message = "Title is required"))]
    pub title: String,
    pub year: Option<i32>,
    #[validate(custom(function = "validate_not_blank", message = "ISBN is required"))]
    pub isbn: String,
    #[validate(length(max = 500, message = "Summary must be at most 500 characters"))]
    pub summary: Option<String>,
    #[validate(custom(function = "validate_image_name"))]
    pub image: Option<String>,
    /// Base64 image payload to store under `image`
    pub file: Option<String>,
    pub author_id: Option<i32>,
}

/// Update book request; replaces every mutable field
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookUpdateDto {
    pub id: i32,
    #[validate(custom(function = "validate_not_blank", message = "Title is required"))]
    pub title: String,
    pub year: Option<i32>,
    #[validate(custom(function = "validate_not_blank", message = "ISBN is required"))]
    pub isbn: String,
    #[validate(length(max = 500, message = "Summary must be at most 500 characters"))]
    pub summary: Option<String>,
    #[validate(custom(function = "validate_image_name"))]
    pub image: Option<String>,
    pub file: Option<String>,
    pub author_id: Option<i32>,
}

/// Image names are plain file names inside the image store
fn validate_image_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Ok(());
    }
    let invalid = name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
        || name.contains('\0');
    if invalid {
        let mut err = ValidationError::new("image_name");
        err.message = Some("Image must be a plain file name".into());
        return Err(err);
    }
    Ok(())
}
