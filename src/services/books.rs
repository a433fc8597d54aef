//! Book library service

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookForm, RatingForm},
    repository::{books::map_write_error, Repository},
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List every book in insertion order
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    /// Validate and insert a new book.
    ///
    /// Returns `Validation` or `Duplicate` for input the user can fix, and
    /// `Database` when the write could not be committed. Nothing is persisted
    /// unless the whole transaction commits.
    pub async fn create(&self, form: &BookForm) -> AppResult<Book> {
        let new_book = form.to_new_book()?;

        let mut tx = self.repository.begin().await?;

        if self.repository.books.title_exists(&mut tx, &new_book.title).await? {
            return Err(AppError::Duplicate(
                "A book with this title already exists.".to_string(),
            ));
        }

        let book = self.repository.books.insert(&mut tx, &new_book).await?;
        tx.commit().await.map_err(map_write_error)?;

        tracing::info!("Added book id={} title={:?}", book.id, book.title);
        Ok(book)
    }

    /// Change the rating of a book previously fetched with `get_by_id`.
    /// Returns `NotFound` if it was deleted in the meantime.
    pub async fn update_rating(&self, book: &Book, form: &RatingForm) -> AppResult<Book> {
        let rating = form.to_rating()?;

        let mut tx = self.repository.begin().await?;
        let updated = self
            .repository
            .books
            .update_rating(&mut tx, book.id, rating)
            .await?;
        tx.commit().await?;

        tracing::info!("Updated rating of book id={} to {}", book.id, rating);
        Ok(updated)
    }

    /// Delete a book, returning what was removed
    pub async fn delete(&self, id: i64) -> AppResult<Book> {
        let mut tx = self.repository.begin().await?;
        let book = self.repository.books.delete(&mut tx, id).await?;
        tx.commit().await?;

        tracing::info!("Deleted book id={} title={:?}", book.id, book.title);
        Ok(book)
    }
}
