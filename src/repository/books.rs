//! Books repository

use sqlx::{Pool, Sqlite, SqliteConnection};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, NewBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Sqlite>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all books in insertion order
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>("SELECT * FROM books ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Check whether a title is taken (exact, case-sensitive match)
    pub async fn title_exists(&self, conn: &mut SqliteConnection, title: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE title = ?)")
            .bind(title)
            .fetch_one(&mut *conn)
            .await?;
        Ok(exists)
    }

    /// Insert a book; a title collision surfaces as `AppError::Duplicate`
    pub async fn insert(&self, conn: &mut SqliteConnection, book: &NewBook) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            "INSERT INTO books (title, author, rating) VALUES (?, ?, ?) RETURNING *",
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.rating)
        .fetch_one(&mut *conn)
        .await
        .map_err(map_write_error)
    }

    /// Update the rating of a book, leaving every other column untouched
    pub async fn update_rating(
        &self,
        conn: &mut SqliteConnection,
        id: i64,
        rating: f64,
    ) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("UPDATE books SET rating = ? WHERE id = ? RETURNING *")
            .bind(rating)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Delete a book, returning the removed row
    pub async fn delete(&self, conn: &mut SqliteConnection, id: i64) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("DELETE FROM books WHERE id = ? RETURNING *")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or_else(|| not_found(id))
    }
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Book {} not found", id))
}

/// Turn a unique constraint violation into the duplicate-title error
pub fn map_write_error(e: sqlx::Error) -> AppError {
    match e.as_database_error() {
        Some(db) if db.is_unique_violation() => {
            AppError::Duplicate("A book with this title already exists.".to_string())
        }
        _ => AppError::Database(e),
    }
}
