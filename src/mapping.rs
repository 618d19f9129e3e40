//! Conversions between stored records and wire DTOs
//!
//! Nested relations are mapped one level deep: an author's books carry no
//! author, a book's author carries no books.

use crate::models::{
    Author, AuthorCreateDto, AuthorDto, AuthorUpdateDto, Book, BookCreateDto, BookDto,
    BookUpdateDto, NewAuthor, NewBook,
};

fn author_without_books(author: Author) -> AuthorDto {
    AuthorDto {
        id: author.id,
        first_name: author.first_name,
        last_name: author.last_name,
        bio: author.bio,
        books: Vec::new(),
    }
}

fn book_without_author(book: Book) -> BookDto {
    BookDto {
        id: book.id,
        title: book.title,
        year: book.year,
        isbn: book.isbn,
        summary: book.summary,
        image: book.image,
        file: None,
        author_id: book.author_id,
        author: None,
    }
}

impl From<Author> for AuthorDto {
    fn from(mut author: Author) -> Self {
        let books = std::mem::take(&mut author.books)
            .into_iter()
            .map(book_without_author)
            .collect();
        AuthorDto {
            books,
            ..author_without_books(author)
        }
    }
}

impl From<Book> for BookDto {
    fn from(mut book: Book) -> Self {
        let author = book.author.take().map(author_without_books);
        BookDto {
            author,
            ..book_without_author(book)
        }
    }
}

impl From<AuthorCreateDto> for NewAuthor {
    fn from(dto: AuthorCreateDto) -> Self {
        NewAuthor {
            first_name: dto.first_name,
            last_name: dto.last_name,
            bio: dto.bio,
        }
    }
}

impl From<AuthorUpdateDto> for Author {
    fn from(dto: AuthorUpdateDto) -> Self {
        Author {
            id: dto.id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            bio: dto.bio,
            books: Vec::new(),
        }
    }
}

impl From<&BookCreateDto> for NewBook {
    fn from(dto: &BookCreateDto) -> Self {
        NewBook {
            title: dto.title.clone(),
            year: dto.year,
            isbn: dto.isbn.clone(),
            summary: dto.summary.clone(),
            image: dto.image.clone(),
            author_id: dto.author_id,
        }
    }
}

impl From<&BookUpdateDto> for Book {
    fn from(dto: &BookUpdateDto) -> Self {
        Book {
            id: dto.id,
            title: dto.title.clone(),
            year: dto.year,
            isbn: dto.isbn.clone(),
            summary: dto.summary.clone(),
            image: dto.image.clone(),
            author_id: dto.author_id,
            author: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn herbert() -> Author {
        Author {
            id: 1,
            first_name: "Frank".to_string(),
            last_name: "Herbert".to_string(),
            bio: None,
            books: Vec::new(),
        }
    }

    fn dune() -> Book {
        Book {
            id: 7,
            title: "Dune".to_string(),
            year: Some(1965),
            isbn: "978-0441013593".to_string(),
            summary: Some("Spice".to_string()),
            image: Some("dune.png".to_string()),
            author_id: Some(1),
            author: None,
        }
    }

    #[test]
    fn test_author_books_drop_back_reference() {
        let mut book = dune();
        book.author = Some(herbert());
        let mut author = herbert();
        author.books = vec![book];

        let dto = AuthorDto::from(author);
        assert_eq!(dto.books.len(), 1);
        assert_eq!(dto.books[0].title, "Dune");
        assert!(dto.books[0].author.is_none());
    }

    #[test]
    fn test_book_author_drops_books() {
        let mut author = herbert();
        author.books = vec![dune()];
        let mut book = dune();
        book.author = Some(author);

        let dto = BookDto::from(book);
        let author = dto.author.expect("author mapped");
        assert_eq!(author.last_name, "Herbert");
        assert!(author.books.is_empty());
        assert!(dto.file.is_none());
    }

    #[test]
    fn test_create_dto_maps_every_stored_field() {
        let dto = BookCreateDto {
            title: "Dune".to_string(),
            year: Some(1965),
            isbn: "978-0441013593".to_string(),
            summary: Some("Spice".to_string()),
            image: Some("dune.png".to_string()),
            file: Some("AQI=".to_string()),
            author_id: Some(1),
        };
        let new_book = NewBook::from(&dto);
        assert_eq!(new_book.title, dto.title);
        assert_eq!(new_book.image, dto.image);
        assert_eq!(new_book.author_id, Some(1));
    }
}
