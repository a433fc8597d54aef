//! Minimal HTML pages

use std::fmt::Write;

use axum::{http::StatusCode, response::Html};

use crate::{
    api::flash::{Flash, FlashLevel},
    models::book::{Book, BookForm},
};

/// Escape text for use in element content and quoted attributes
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape(title),
        body
    ))
}

fn message_block(class: &str, message: &str) -> String {
    format!("<p class=\"flash {}\">{}</p>\n", class, escape(message))
}

pub fn book_list(books: &[Book], flash: Option<&Flash>) -> Html<String> {
    let mut body = String::from("<h1>My Library</h1>\n");

    if let Some(flash) = flash {
        let class = match flash.level {
            FlashLevel::Success => "success",
            FlashLevel::Error => "error",
        };
        body.push_str(&message_block(class, &flash.message));
    }

    if books.is_empty() {
        body.push_str("<p>Library is empty.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for book in books {
            // Writing into a String cannot fail
            let _ = write!(
                body,
                "<li data-id=\"{id}\">{title} - {author} - {rating}/10 \
                 <a href=\"/edit/{id}\">Edit Rating</a> \
                 <form method=\"post\" action=\"/delete/{id}\" style=\"display:inline\">\
                 <button type=\"submit\">Delete</button></form></li>\n",
                id = book.id,
                title = escape(&book.title),
                author = escape(&book.author),
                rating = book.rating,
            );
        }
        body.push_str("</ul>\n");
    }

    body.push_str("<a href=\"/add\">Add New Book</a>\n");
    layout("My Library", &body)
}

/// Add form, pre-filled with whatever was submitted last
pub fn add_form(form: &BookForm, error: Option<&str>) -> Html<String> {
    let mut body = String::from("<h1>Add a Book</h1>\n");
    if let Some(error) = error {
        body.push_str(&message_block("error", error));
    }
    let _ = write!(
        body,
        "<form method=\"post\" action=\"/add\">\n\
         <label>Book Name <input name=\"title\" value=\"{}\"></label>\n\
         <label>Book Author <input name=\"author\" value=\"{}\"></label>\n\
         <label>Rating <input name=\"rating\" value=\"{}\"></label>\n\
         <button type=\"submit\">Add Book</button>\n</form>\n\
         <a href=\"/\">Back</a>\n",
        escape(&form.title),
        escape(&form.author),
        escape(&form.rating),
    );
    layout("Add Book", &body)
}

pub fn edit_form(book: &Book, rating: &str, error: Option<&str>) -> Html<String> {
    let mut body = format!(
        "<h1>Edit Rating</h1>\n<p>Book Name: {}</p>\n<p>Author: {}</p>\n<p>Current Rating: {}</p>\n",
        escape(&book.title),
        escape(&book.author),
        book.rating,
    );
    if let Some(error) = error {
        body.push_str(&message_block("error", error));
    }
    let _ = write!(
        body,
        "<form method=\"post\" action=\"/edit/{}\">\n\
         <label>New Rating <input name=\"rating\" value=\"{}\"></label>\n\
         <button type=\"submit\">Change Rating</button>\n</form>\n\
         <a href=\"/\">Back</a>\n",
        book.id,
        escape(rating),
    );
    layout("Edit Rating", &body)
}

pub fn error_page(status: StatusCode, message: &str) -> Html<String> {
    let heading = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        "<h1>{}</h1>\n<p>{}</p>\n<a href=\"/\">Back to library</a>\n",
        escape(heading),
        escape(message)
    );
    layout(heading, &body)
}
