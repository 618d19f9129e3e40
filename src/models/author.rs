//! Author model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::{
    book::{Book, BookDto},
    validate_not_blank,
};

/// Author record as stored in the `authors` table
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Author {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub bio: Option<String>,
    /// Books owned by this author, loaded by the repository on reads
    #[sqlx(skip)]
    pub books: Vec<Book>,
}

/// Values for a new `authors` row; the id is assigned by the store
#[derive(Debug, Clone, PartialEq)]
pub struct NewAuthor {
    pub first_name: String,
    pub last_name: String,
    pub bio: Option<String>,
}

/// Author as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub books: Vec<BookDto>,
}

/// Create author request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AuthorCreateDto {
    #[validate(custom(function = "validate_not_blank", message = "First name is required"))]
    pub first_name: String,
    #[validate(custom(function = "validate_not_blank", message = "Last name is required"))]
    pub last_name: String,
    #[validate(length(max = 250, message = "Bio must be at most 250 characters"))]
    pub bio: Option<String>,
}

/// Update author request; replaces every mutable field
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AuthorUpdateDto {
    pub id: i32,
    #[validate(custom(function = "validate_not_blank", message = "First name is required"))]
    pub first_name: String,
    #[validate(custom(function = "validate_not_blank", message = "Last name is required"))]
    pub last_name: String,
    #[validate(length(max = 250, message = "Bio must be at most 250 characters"))]
    pub bio: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_requires_names() {
        let dto: AuthorCreateDto =
            serde_json::from_str(r#"{"firstName": "", "lastName": "Herbert"}"#).unwrap();
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("first_name"));
    }

    #[test]
    fn test_whitespace_names_are_rejected() {
        let dto = AuthorUpdateDto {
            id: 1,
            first_name: "  ".to_string(),
            last_name: "Herbert".to_string(),
            bio: None,
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("first_name"));
    }

    #[test]
    fn test_bio_length_is_bounded() {
        let dto = AuthorCreateDto {
            first_name: "Frank".to_string(),
            last_name: "Herbert".to_string(),
            bio: Some("x".repeat(251)),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_missing_field_fails_to_deserialize() {
        let parsed = serde_json::from_str::<AuthorUpdateDto>(r#"{"firstName": "Frank"}"#);
        assert!(parsed.is_err());
    }
}
