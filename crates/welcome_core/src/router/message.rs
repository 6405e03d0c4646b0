//! Wire messages exchanged with the start page.

use crate::model::category::{Category, CategoryId, Forest};
use crate::model::project::Project;
use log::debug;
use serde::{Deserialize, Serialize};

/// Request sent by the page. Serialized with a `type` discriminator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Request {
    GetCategories,
    CreateCategory {
        name: String,
    },
    CreateSubcategory {
        parent_id: CategoryId,
        name: String,
    },
    AddProjectToCategory {
        category_id: CategoryId,
        project: Project,
    },
    /// Picks a folder, then adds it to `category_id`.
    AddProject {
        category_id: CategoryId,
    },
    RemoveProjectFromCategory {
        category_id: CategoryId,
        project_path: String,
    },
    RemoveCategory {
        category_id: CategoryId,
    },
    OpenProject {
        path: String,
    },
    /// Requests the all-projects view.
    GetProjects,
    /// Picks a folder and registers it in the standalone list.
    AddStandaloneProject,
}

impl Request {
    /// Decodes one raw page message.
    ///
    /// Unknown `type` values and malformed payloads yield `None`.
    pub fn decode(raw: &str) -> Option<Self> {
        match serde_json::from_str(raw) {
            Ok(request) => Some(request),
            Err(err) => {
                debug!("event=request_decode module=router status=ignored error={err}");
                None
            }
        }
    }

    /// Wire name of this request.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::GetCategories => "getCategories",
            Self::CreateCategory { .. } => "createCategory",
            Self::CreateSubcategory { .. } => "createSubcategory",
            Self::AddProjectToCategory { .. } => "addProjectToCategory",
            Self::AddProject { .. } => "addProject",
            Self::RemoveProjectFromCategory { .. } => "removeProjectFromCategory",
            Self::RemoveCategory { .. } => "removeCategory",
            Self::OpenProject { .. } => "openProject",
            Self::GetProjects => "getProjects",
            Self::AddStandaloneProject => "addStandaloneProject",
        }
    }
}

/// Message pushed back to the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Push {
    /// Full forest snapshot.
    Categories { categories: Forest },
    /// Newly created root category.
    CategoryCreated { category: Category },
    /// All-projects view.
    UpdateProjects { projects: Vec<Project> },
}

impl Push {
    /// Encodes this push as one JSON object.
    pub fn encode(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
