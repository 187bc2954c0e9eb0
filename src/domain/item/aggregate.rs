//! Item entity and its title value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ItemId, UserId, ValidationError};

/// Title of a list item.
///
/// # Invariants
///
/// - Never empty or whitespace-only
/// - Stored with surrounding whitespace removed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemTitle(String);

impl ItemTitle {
    /// Validates and normalizes a user-supplied title.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the input is empty after trimming
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    /// Owning user; `None` for items added anonymously.
    pub user_id: Option<UserId>,
}

impl Item {
    pub fn new(id: ItemId, title: impl Into<String>, user_id: Option<UserId>) -> Self {
        Self {
            id,
            title: title.into(),
            user_id,
        }
    }

    /// True when the item belongs to the given user.
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == Some(user_id)
    }
}
