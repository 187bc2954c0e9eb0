//! The single response type returned by page handlers.

use axum::response::{Html, IntoResponse, Response};
use http::{header, StatusCode};

use super::views;
use crate::domain::foundation::UserId;
use crate::domain::item::Item;

/// A page to render, with the data it shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    List {
        list_title: &'static str,
        items: Vec<Item>,
        viewer: Option<UserId>,
    },
    Register,
    Login,
}

/// What a handler wants written back to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageResponse {
    /// 302 Found to the given path.
    Redirect(&'static str),
    Rendered(Page),
    PlainText(StatusCode, String),
}

impl PageResponse {
    pub fn text(message: impl Into<String>) -> Self {
        PageResponse::PlainText(StatusCode::OK, message.into())
    }

    pub fn internal_error() -> Self {
        PageResponse::PlainText(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error".to_string(),
        )
    }
}

impl IntoResponse for PageResponse {
    fn into_response(self) -> Response {
        match self {
            PageResponse::Redirect(path) => {
                (StatusCode::FOUND, [(header::LOCATION, path)]).into_response()
            }
            PageResponse::Rendered(page) => Html(views::render(&page)).into_response(),
            PageResponse::PlainText(status, message) => (status, message).into_response(),
        }
    }
}
