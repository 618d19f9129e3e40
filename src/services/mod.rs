//! Request handling services

pub mod authors;
pub mod books;
pub mod images;

use crate::repository::Repository;

/// Log tag for a resource action, e.g. `Books / Create`
pub(crate) fn location(resource: &str, action: &str) -> String {
    format!("{} / {}", resource, action)
}

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub authors: authors::AuthorsService,
    pub books: books::BooksService,
}

impl Services {
    /// Create all services over the given repository and image store
    pub fn new(repository: Repository, images: images::ImageStore) -> Self {
        Self {
            authors: authors::AuthorsService::new(repository.clone()),
            books: books::BooksService::new(repository, images),
        }
    }
}
