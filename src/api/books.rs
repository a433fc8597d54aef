//! Book library pages and form handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::{CookieJar, SignedCookieJar};

use crate::{
    error::{AppError, AppResult},
    models::book::{BookForm, RatingForm},
    views, AppState,
};

use super::flash::{self, Flash};

/// Pick the status and message for a form that has to be shown again.
/// Store failures are logged and replaced by `generic`.
fn form_failure(err: &AppError, generic: &str) -> (StatusCode, String) {
    match err.form_message() {
        Some(msg) => {
            tracing::debug!("Form rejected: {}", msg);
            (err.status_code(), msg.to_string())
        }
        None => {
            tracing::error!("{}: {}", generic, err);
            (StatusCode::INTERNAL_SERVER_ERROR, generic.to_string())
        }
    }
}

/// List all books
pub async fn list_books(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    raw: CookieJar,
) -> AppResult<(SignedCookieJar, Html<String>)> {
    let books = state.services.books.list().await?;
    let (jar, flash) = flash::take(jar, &raw);
    Ok((jar, views::book_list(&books, flash.as_ref())))
}

/// Show the add form
pub async fn add_form() -> Html<String> {
    views::add_form(&BookForm::default(), None)
}

/// Submit a new book
pub async fn add_book(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<BookForm>,
) -> Response {
    match state.services.books.create(&form).await {
        Ok(_) => (
            flash::push(jar, Flash::success("Book added successfully!")),
            Redirect::to("/"),
        )
            .into_response(),
        Err(e) => {
            let (status, message) = form_failure(&e, "An error occurred while adding the book.");
            (status, views::add_form(&form, Some(&message))).into_response()
        }
    }
}

/// Show the edit rating form
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Html<String>> {
    let book = state.services.books.get_by_id(id).await?;
    let rating = book.rating.to_string();
    Ok(views::edit_form(&book, &rating, None))
}

/// Submit a new rating
pub async fn update_rating(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(id): Path<i64>,
    Form(form): Form<RatingForm>,
) -> AppResult<Response> {
    // Unknown ids win over bad input
    let book = state.services.books.get_by_id(id).await?;

    match state.services.books.update_rating(&book, &form).await {
        Ok(_) => Ok((
            flash::push(jar, Flash::success("Rating updated successfully!")),
            Redirect::to("/"),
        )
            .into_response()),
        Err(e @ AppError::NotFound(_)) => Err(e),
        Err(e) => {
            let (status, message) =
                form_failure(&e, "An error occurred while updating the rating.");
            Ok((status, views::edit_form(&book, &form.rating, Some(&message))).into_response())
        }
    }
}

/// Delete a book
pub async fn delete_book(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(id): Path<i64>,
) -> AppResult<(SignedCookieJar, Redirect)> {
    let flash = match state.services.books.delete(id).await {
        Ok(book) => Flash::success(format!("'{}' has been deleted successfully!", book.title)),
        Err(e @ AppError::NotFound(_)) => return Err(e),
        Err(e) => {
            tracing::error!("Failed to delete book id={}: {}", id, e);
            Flash::error("An error occurred while deleting the book.")
        }
    };

    Ok((flash::push(jar, flash), Redirect::to("/")))
}
