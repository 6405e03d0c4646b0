//! Category forest use-case service.
//!
//! # Responsibility
//! - Wrap each forest mutation in one load-mutate-save cycle.
//! - Skip the write when a mutation resolves as a no-op.
//!
//! # Invariants
//! - No forest copy is cached between calls; every operation reloads.
//! - Unknown ids, the nesting cap and duplicate paths are not errors.

use crate::model::category::{Category, Forest};
use crate::model::project::Project;
use crate::service::forest_ops;
use crate::store::state_store::{StateKey, StateStore, StoreResult};
use log::{debug, info};

/// Tree mutator over the persisted category forest.
pub struct CategoryService<S: StateStore> {
    store: S,
}

impl<S: StateStore> CategoryService<S> {
    /// Creates service from store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Loads the current forest snapshot (`[]` before first write).
    pub fn list_categories(&self) -> StoreResult<Forest> {
        self.store.load(StateKey::Categories)
    }

    /// Creates one root category and returns it.
    pub fn create_category(&self, name: impl Into<String>) -> StoreResult<Category> {
        let mut forest = self.list_categories()?;
        let category = forest_ops::create_category(&mut forest, name);
        self.save(&forest)?;
        info!(
            "event=category_create module=service status=ok category_id={}",
            category.id
        );
        Ok(category)
    }

    /// Creates one subcategory under a root category.
    ///
    /// Returns `None` and writes nothing when the parent is unknown or is
    /// itself a subcategory.
    pub fn create_subcategory(
        &self,
        parent_id: &str,
        name: impl Into<String>,
    ) -> StoreResult<Option<Category>> {
        let mut forest = self.list_categories()?;
        let Some(child) = forest_ops::create_subcategory(&mut forest, parent_id, name) else {
            debug!(
                "event=subcategory_create module=service status=skipped parent_id={parent_id}"
            );
            return Ok(None);
        };
        self.save(&forest)?;
        info!(
            "event=subcategory_create module=service status=ok category_id={} parent_id={parent_id}",
            child.id
        );
        Ok(Some(child))
    }

    /// Adds a project to a category at any depth.
    ///
    /// Returns whether the forest changed.
    pub fn add_project_to_category(
        &self,
        category_id: &str,
        project: Project,
    ) -> StoreResult<bool> {
        self.mutate("project_add", category_id, |forest| {
            forest_ops::add_project(forest, category_id, project)
        })
    }

    /// Removes a project path from one category.
    ///
    /// Returns whether the forest changed.
    pub fn remove_project_from_category(
        &self,
        category_id: &str,
        project_path: &str,
    ) -> StoreResult<bool> {
        self.mutate("project_remove", category_id, |forest| {
            forest_ops::remove_project(forest, category_id, project_path)
        })
    }

    /// Removes a category (root or nested) with everything under it.
    ///
    /// Returns whether the forest changed.
    pub fn remove_category(&self, category_id: &str) -> StoreResult<bool> {
        self.mutate("category_remove", category_id, |forest| {
            forest_ops::remove_category(forest, category_id).is_some()
        })
    }

    fn mutate(
        &self,
        event: &'static str,
        category_id: &str,
        apply: impl FnOnce(&mut Forest) -> bool,
    ) -> StoreResult<bool> {
        let mut forest = self.list_categories()?;
        if !apply(&mut forest) {
            debug!("event={event} module=service status=skipped category_id={category_id}");
            return Ok(false);
        }
        self.save(&forest)?;
        info!("event={event} module=service status=ok category_id={category_id}");
        Ok(true)
    }

    fn save(&self, forest: &Forest) -> StoreResult<()> {
        self.store.save(StateKey::Categories, forest)
    }
}
