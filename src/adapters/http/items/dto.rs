//! Form bodies for the list routes.
//!
//! Field names match the HTML form inputs. Every field is optional so a
//! missing input becomes a validation redirect rather than a 422.

use serde::Deserialize;

/// `POST /add`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddItemForm {
    #[serde(rename = "newItem")]
    pub new_item: Option<String>,
}

/// `POST /edit`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditItemForm {
    #[serde(rename = "updatedItemId")]
    pub updated_item_id: Option<String>,
    #[serde(rename = "updatedItemTitle")]
    pub updated_item_title: Option<String>,
}

/// `POST /delete`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteItemForm {
    #[serde(rename = "deleteItemId")]
    pub delete_item_id: Option<String>,
}
