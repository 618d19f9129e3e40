//! Data models for the Book Store

use validator::ValidationError;

pub mod author;
pub mod book;
pub mod user;

pub use author::{Author, AuthorCreateDto, AuthorDto, AuthorUpdateDto, NewAuthor};
pub use book::{Book, BookCreateDto, BookDto, BookUpdateDto, NewBook};
pub use user::UserClaims;

/// Required text: rejects empty and whitespace-only values
fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}
