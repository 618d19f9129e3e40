//! Repository layer for database operations
//!
//! Absence is reported through `Option`/`bool` return values; errors are
//! reserved for store failures.

pub mod authors;
pub mod books;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{Author, Book, NewAuthor, NewBook},
};

pub use authors::PgAuthorRepository;
pub use books::PgBookRepository;

/// Data access for the `authors` table
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorRepository: Send + Sync + 'static {
    /// All authors with their books, in store order
    async fn find_all(&self) -> AppResult<Vec<Author>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Author>>;

    async fn exists(&self, id: i32) -> AppResult<bool>;

    async fn create(&self, author: &NewAuthor) -> AppResult<Author>;

    /// Replace the mutable fields; `false` when no row matched
    async fn update(&self, author: &Author) -> AppResult<bool>;

    /// `false` when no row matched
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

/// Data access for the `books` table
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync + 'static {
    /// All books with their authors, in store order
    async fn find_all(&self) -> AppResult<Vec<Book>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>>;

    async fn exists(&self, id: i32) -> AppResult<bool>;

    async fn create(&self, book: &NewBook) -> AppResult<Book>;

    /// Replace the mutable fields; `false` when no row matched
    async fn update(&self, book: &Book) -> AppResult<bool>;

    /// `false` when no row matched
    async fn delete(&self, id: i32) -> AppResult<bool>;

    /// Stored image file name of a book, `None` when unset or the book is missing
    async fn get_image_file_name(&self, id: i32) -> AppResult<Option<String>>;
}

/// Main repository struct holding one repository per entity
#[derive(Clone)]
pub struct Repository {
    pub authors: Arc<dyn AuthorRepository>,
    pub books: Arc<dyn BookRepository>,
}

impl Repository {
    /// Create PostgreSQL-backed repositories over the given pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            authors: Arc::new(PgAuthorRepository::new(pool.clone())),
            books: Arc::new(PgBookRepository::new(pool)),
        }
    }

    /// Assemble a repository from arbitrary implementations
    pub fn from_parts(authors: Arc<dyn AuthorRepository>, books: Arc<dyn BookRepository>) -> Self {
        Self { authors, books }
    }
}
