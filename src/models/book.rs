//! Book model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationErrors};

use crate::error::{AppError, AppResult};

pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 10.0;

/// Book record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i64,
    /// Unique, case-sensitive
    pub title: String,
    pub author: String,
    /// Between 0 and 10 inclusive
    pub rating: f64,
}

/// Add book form, as submitted
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct BookForm {
    #[serde(default)]
    #[validate(length(max = 250, message = "Title must be at most 250 characters."))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 250, message = "Author must be at most 250 characters."))]
    pub author: String,
    #[serde(default)]
    pub rating: String,
}

/// Edit rating form, as submitted
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RatingForm {
    #[serde(default)]
    pub rating: String,
}

/// A validated book ready to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub rating: f64,
}

impl BookForm {
    pub fn new(title: &str, author: &str, rating: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            rating: rating.to_string(),
        }
    }

    /// Trim and check every field, producing the row to insert
    pub fn to_new_book(&self) -> AppResult<NewBook> {
        let trimmed = BookForm::new(self.title.trim(), self.author.trim(), self.rating.trim());

        if trimmed.title.is_empty() || trimmed.author.is_empty() || trimmed.rating.is_empty() {
            return Err(AppError::Validation("All fields are required.".to_string()));
        }

        trimmed
            .validate()
            .map_err(|e| AppError::Validation(first_message(&e)))?;

        let rating = parse_rating(&trimmed.rating)?;

        Ok(NewBook {
            title: trimmed.title,
            author: trimmed.author,
            rating,
        })
    }
}

impl RatingForm {
    pub fn to_rating(&self) -> AppResult<f64> {
        parse_rating(&self.rating)
    }
}

/// Parse a submitted rating, accepting only finite values in [0, 10]
pub fn parse_rating(raw: &str) -> AppResult<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AppError::Validation("Rating is required.".to_string()));
    }

    let rating: f64 = raw
        .parse()
        .map_err(|_| AppError::Validation("Rating must be a valid number.".to_string()))?;

    if !rating.is_finite() {
        return Err(AppError::Validation("Rating must be a valid number.".to_string()));
    }
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(AppError::Validation(
            "Rating must be between 0 and 10.".to_string(),
        ));
    }

    Ok(rating)
}

fn first_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid input.".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(err: AppError) -> String {
        match err {
            AppError::Validation(msg) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_rating_bounds_are_inclusive() {
        assert_eq!(parse_rating("0").unwrap(), 0.0);
        assert_eq!(parse_rating("10").unwrap(), 10.0);
        assert_eq!(parse_rating(" 9.5 ").unwrap(), 9.5);
    }

    #[test]
    fn test_rating_out_of_range() {
        for raw in ["-0.01", "10.01", "-1", "11"] {
            assert_eq!(
                message(parse_rating(raw).unwrap_err()),
                "Rating must be between 0 and 10."
            );
        }
    }

    #[test]
    fn test_rating_not_a_number() {
        for raw in ["abc", "7/10", "NaN", "inf", "-inf"] {
            assert_eq!(
                message(parse_rating(raw).unwrap_err()),
                "Rating must be a valid number."
            );
        }
    }

    #[test]
    fn test_rating_required() {
        assert_eq!(message(parse_rating("   ").unwrap_err()), "Rating is required.");
    }

    #[test]
    fn test_form_trims_fields() {
        let book = BookForm::new("  Dune ", " Frank Herbert", "9.5 ")
            .to_new_book()
            .unwrap();
        assert_eq!(
            book,
            NewBook {
                title: "Dune".to_string(),
                author: "Frank Herbert".to_string(),
                rating: 9.5,
            }
        );
    }

    #[test]
    fn test_form_requires_all_fields() {
        for form in [
            BookForm::new("", "Frank Herbert", "9"),
            BookForm::new("Dune", "   ", "9"),
            BookForm::new("Dune", "Frank Herbert", ""),
        ] {
            assert_eq!(message(form.to_new_book().unwrap_err()), "All fields are required.");
        }
    }

    #[test]
    fn test_form_length_limit() {
        let ok = "a".repeat(250);
        assert!(BookForm::new(&ok, "x", "1").to_new_book().is_ok());

        let long = "a".repeat(251);
        assert_eq!(
            message(BookForm::new(&long, "x", "1").to_new_book().unwrap_err()),
            "Title must be at most 250 characters."
        );
        assert_eq!(
            message(BookForm::new("x", &long, "1").to_new_book().unwrap_err()),
            "Author must be at most 250 characters."
        );
    }
}
