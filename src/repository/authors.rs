//! Authors repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::AuthorRepository;
use crate::{
    error::AppResult,
    models::{Author, Book, NewAuthor},
};

#[derive(Clone)]
pub struct PgAuthorRepository {
    pool: Pool<Postgres>,
}

impl PgAuthorRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Attach owned books to each author with a single query
    async fn load_books(&self, authors: &mut [Author]) -> AppResult<()> {
        if authors.is_empty() {
            return Ok(());
        }
        let ids: Vec<i32> = authors.iter().map(|a| a.id).collect();
        let books = sqlx::query_as::<_, Book>(
            "SELECT * FROM books WHERE author_id = ANY($1) ORDER BY id",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        for book in books {
            if let Some(author) = authors.iter_mut().find(|a| Some(a.id) == book.author_id) {
                author.books.push(book);
            }
        }
        Ok(())
    }
}

#[async_trait]
impl AuthorRepository for PgAuthorRepository {
    async fn find_all(&self) -> AppResult<Vec<Author>> {
        let mut authors = sqlx::query_as::<_, Author>("SELECT * FROM authors ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        self.load_books(&mut authors).await?;
        Ok(authors)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Author>> {
        let author = sqlx::query_as::<_, Author>("SELECT * FROM authors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match author {
            Some(author) => {
                let mut found = [author];
                self.load_books(&mut found).await?;
                let [author] = found;
                Ok(Some(author))
            }
            None => Ok(None),
        }
    }

    async fn exists(&self, id: i32) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM authors WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn create(&self, author: &NewAuthor) -> AppResult<Author> {
        let row = sqlx::query_as::<_, Author>(
            r#"
            INSERT INTO authors (first_name, last_name, bio)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&author.first_name)
        .bind(&author.last_name)
        .bind(&author.bio)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(&self, author: &Author) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE authors SET first_name = $1, last_name = $2, bio = $3 WHERE id = $4",
        )
        .bind(&author.first_name)
        .bind(&author.last_name)
        .bind(&author.bio)
        .bind(author.id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
