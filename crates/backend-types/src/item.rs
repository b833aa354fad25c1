//! Item resource types

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A persisted item, as returned by `GET /api/items`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Rendered as an ISO-8601 string without zone, or `null`
    pub created_at: Option<NaiveDateTime>,
}

/// Raw body of `POST /api/items`
///
/// Both fields are optional here so that a missing name can be reported as a
/// validation failure instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateItemRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
}

/// Validated input for an insert. The name is always non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    name: String,
    description: String,
}

impl NewItem {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::NameRequired);
        }

        Ok(Self {
            name,
            description: description.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl TryFrom<CreateItemRequest> for NewItem {
    type Error = ValidationError;

    fn try_from(req: CreateItemRequest) -> Result<Self, Self::Error> {
        let name = req.name.ok_or(ValidationError::NameRequired)?;
        NewItem::new(name, req.description.unwrap_or_default())
    }
}

/// Body of a successful `POST /api/items`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedItem {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub message: String,
}

impl CreatedItem {
    pub const MESSAGE: &'static str = "Item created successfully";

    pub fn new(id: i32, item: NewItem) -> Self {
        Self {
            id,
            name: item.name,
            description: item.description,
            message: Self::MESSAGE.to_string(),
        }
    }
}
