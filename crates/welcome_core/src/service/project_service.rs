//! Standalone project list use-case service.
//!
//! # Responsibility
//! - Maintain the "known folders" list that is independent of categories.
//! - Build the all-projects view from open workspace folders plus saved ones.
//!
//! # Invariants
//! - Saved paths are unique; re-adding a known path changes nothing.
//! - The all-projects view lists workspace folders first, in host order.

use crate::model::project::Project;
use crate::store::state_store::{StateKey, StateStore, StoreResult};
use log::info;

/// Result of registering a standalone project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddProjectOutcome {
    Added,
    AlreadyKnown,
}

/// Service over the standalone project list.
pub struct ProjectService<S: StateStore> {
    store: S,
}

impl<S: StateStore> ProjectService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Loads saved standalone projects (`[]` before first write).
    pub fn list_saved_projects(&self) -> StoreResult<Vec<Project>> {
        self.store.load(StateKey::Projects)
    }

    /// Appends `project` unless its path is already saved.
    pub fn add_saved_project(&self, project: Project) -> StoreResult<AddProjectOutcome> {
        let mut projects = self.list_saved_projects()?;
        if projects.iter().any(|known| known.path == project.path) {
            return Ok(AddProjectOutcome::AlreadyKnown);
        }
        projects.push(project);
        self.store.save(StateKey::Projects, &projects)?;
        info!(
            "event=project_register module=service status=ok total={}",
            projects.len()
        );
        Ok(AddProjectOutcome::Added)
    }

    /// Merges open workspace folders with saved projects, dropping saved
    /// entries whose path is already listed.
    pub fn all_projects(&self, workspace_folders: Vec<Project>) -> StoreResult<Vec<Project>> {
        let mut merged = workspace_folders;
        for saved in self.list_saved_projects()? {
            if !merged.iter().any(|project| project.path == saved.path) {
                merged.push(saved);
            }
        }
        Ok(merged)
    }
}
