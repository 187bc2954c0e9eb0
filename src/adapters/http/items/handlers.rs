//! HTTP handlers for the list routes.

use axum::{extract::State, Form};

use crate::adapters::http::middleware::CurrentSession;
use crate::adapters::http::response::{Page, PageResponse};
use crate::adapters::http::state::AppState;
use crate::application::handlers::{
    AddItemCommand, DeleteItemCommand, EditItemCommand, ListItemsQuery,
};
use crate::domain::item::ItemError;

use super::dto::{AddItemForm, DeleteItemForm, EditItemForm};

const LIST_TITLE: &str = "Today";

/// GET / - Render the list
pub async fn list_items(State(state): State<AppState>, session: CurrentSession) -> PageResponse {
    let viewer = session.user_id();

    match state.list_items.handle(ListItemsQuery { viewer }).await {
        Ok(items) => PageResponse::Rendered(Page::List {
            list_title: LIST_TITLE,
            items,
            viewer,
        }),
        Err(e) => handle_item_error("list items", e),
    }
}

/// POST /add - Add an item owned by the session user
pub async fn add_item(
    State(state): State<AppState>,
    session: CurrentSession,
    Form(form): Form<AddItemForm>,
) -> PageResponse {
    let cmd = AddItemCommand {
        title: form.new_item.unwrap_or_default(),
        owner: session.user_id(),
    };

    match state.add_item.handle(cmd).await {
        Ok(item_id) => {
            tracing::debug!(item_id = %item_id, "item added");
            PageResponse::Redirect("/")
        }
        Err(e) => handle_item_error("add item", e),
    }
}

/// POST /edit - Rename an item
pub async fn edit_item(
    State(state): State<AppState>,
    Form(form): Form<EditItemForm>,
) -> PageResponse {
    let cmd = EditItemCommand {
        item_id: form.updated_item_id.unwrap_or_default(),
        title: form.updated_item_title.unwrap_or_default(),
    };

    match state.edit_item.handle(cmd).await {
        Ok(result) => {
            tracing::debug!(item_id = %result.item_id, updated = result.updated, "item edited");
            PageResponse::Redirect("/")
        }
        Err(e) => handle_item_error("edit item", e),
    }
}

/// POST /delete - Remove an item
pub async fn delete_item(
    State(state): State<AppState>,
    Form(form): Form<DeleteItemForm>,
) -> PageResponse {
    let cmd = DeleteItemCommand {
        item_id: form.delete_item_id.unwrap_or_default(),
    };

    match state.delete_item.handle(cmd).await {
        Ok(result) => {
            tracing::debug!(item_id = %result.item_id, deleted = result.deleted, "item deleted");
            PageResponse::Redirect("/")
        }
        Err(e) => handle_item_error("delete item", e),
    }
}

fn handle_item_error(action: &str, error: ItemError) -> PageResponse {
    match error {
        ItemError::Invalid(e) => {
            tracing::debug!(action, reason = %e, "ignoring invalid item input");
            PageResponse::Redirect("/")
        }
        ItemError::Infrastructure(msg) => {
            tracing::error!(action, error = %msg, "item store failure");
            PageResponse::internal_error()
        }
    }
}
