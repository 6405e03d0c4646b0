//! Category and forest model.
//!
//! # Invariants
//! - `id` is a UUID v4 string for categories created by this crate; persisted
//!   ids from older installations are accepted as opaque strings.
//! - A category with `parent_id` set never carries subcategories.
//! - `parent_id`/`subcategories` are omitted from JSON when absent so flat
//!   categories keep the flat shape.

use crate::model::project::Project;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category identifier shared by root categories and subcategories.
pub type CategoryId = String;

/// Ordered sequence of root categories, persisted as one document.
pub type Forest = Vec<Category>;

/// Named group of project shortcuts, optionally nesting one level of
/// subcategories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<CategoryId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategories: Option<Vec<Category>>,
}

impl Category {
    /// Creates an empty root category with a fresh id.
    pub fn new_root(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            projects: Vec::new(),
            parent_id: None,
            subcategories: None,
        }
    }

    /// Creates an empty subcategory owned by `parent_id`.
    pub fn new_child(parent_id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            parent_id: Some(parent_id.into()),
            ..Self::new_root(name)
        }
    }

    /// Returns whether this category is nested under another one.
    pub fn is_subcategory(&self) -> bool {
        self.parent_id.as_deref().is_some_and(|id| !id.is_empty())
    }

    pub fn has_project(&self, path: &str) -> bool {
        self.projects.iter().any(|project| project.path == path)
    }

    /// Direct subcategories, empty when the list is absent.
    pub fn children(&self) -> &[Category] {
        self.subcategories.as_deref().unwrap_or_default()
    }
}
