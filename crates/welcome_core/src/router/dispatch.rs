//! Request dispatch onto category and project services.

use crate::host::{Host, DUPLICATE_PROJECT_NOTICE, PICK_FOLDER_LABEL};
use crate::model::project::Project;
use crate::router::message::{Push, Request};
use crate::service::category_service::CategoryService;
use crate::service::project_service::{AddProjectOutcome, ProjectService};
use crate::store::state_store::{StateStore, StoreResult};
use log::{debug, error, info};
use std::path::Path;
use std::time::Instant;

/// Routes page requests to core services and host collaborators.
///
/// Requests are handled one at a time; the only suspension point is the
/// host's modal folder picker.
pub struct MessageRouter<S: StateStore, H: Host> {
    store: S,
    host: H,
}

impl<S: StateStore, H: Host> MessageRouter<S, H> {
    pub fn new(store: S, host: H) -> Self {
        Self { store, host }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Decodes and handles one raw page message, returning the encoded push.
    ///
    /// Undecodable messages are ignored.
    pub fn handle_json(&self, raw: &str) -> Option<String> {
        let push = self.handle(Request::decode(raw)?)?;
        match push.encode() {
            Ok(encoded) => Some(encoded),
            Err(err) => {
                error!("event=push_encode module=router status=error error={err}");
                None
            }
        }
    }

    /// Handles one typed request.
    ///
    /// Store failures are logged and resolve as "no push".
    pub fn handle(&self, request: Request) -> Option<Push> {
        let started_at = Instant::now();
        let kind = request.kind();
        match self.dispatch(request) {
            Ok(push) => {
                info!(
                    "event=request_handle module=router status=ok request={kind} pushed={} duration_ms={}",
                    push.is_some(),
                    started_at.elapsed().as_millis()
                );
                push
            }
            Err(err) => {
                error!(
                    "event=request_handle module=router status=error request={kind} duration_ms={} error={err}",
                    started_at.elapsed().as_millis()
                );
                None
            }
        }
    }

    fn dispatch(&self, request: Request) -> StoreResult<Option<Push>> {
        let categories = CategoryService::new(&self.store);
        match request {
            Request::GetCategories => self.categories_push(),
            Request::CreateCategory { name } => {
                let category = categories.create_category(name)?;
                Ok(Some(Push::CategoryCreated { category }))
            }
            Request::CreateSubcategory { parent_id, name } => {
                match categories.create_subcategory(&parent_id, name)? {
                    Some(_) => self.categories_push(),
                    None => Ok(None),
                }
            }
            Request::AddProjectToCategory {
                category_id,
                project,
            } => {
                categories.add_project_to_category(&category_id, project)?;
                self.categories_push()
            }
            Request::AddProject { category_id } => {
                let Some(folder) = self.pick_folder() else {
                    return Ok(None);
                };
                // Duplicate paths stay silent here, unlike the standalone list.
                categories.add_project_to_category(&category_id, Project::from_folder(folder))?;
                self.categories_push()
            }
            Request::RemoveProjectFromCategory {
                category_id,
                project_path,
            } => {
                categories.remove_project_from_category(&category_id, &project_path)?;
                self.categories_push()
            }
            Request::RemoveCategory { category_id } => {
                categories.remove_category(&category_id)?;
                self.categories_push()
            }
            Request::OpenProject { path } => {
                self.host.open_folder(Path::new(&path));
                Ok(None)
            }
            Request::GetProjects => self.projects_push(),
            Request::AddStandaloneProject => {
                let Some(folder) = self.pick_folder() else {
                    return Ok(None);
                };
                let projects = ProjectService::new(&self.store);
                match projects.add_saved_project(Project::from_folder(folder))? {
                    AddProjectOutcome::Added => self.projects_push(),
                    AddProjectOutcome::AlreadyKnown => {
                        self.host.show_information(DUPLICATE_PROJECT_NOTICE);
                        Ok(None)
                    }
                }
            }
        }
    }

    fn pick_folder(&self) -> Option<std::path::PathBuf> {
        let folder = self.host.pick_folder(PICK_FOLDER_LABEL);
        if folder.is_none() {
            debug!("event=folder_pick module=router status=cancelled");
        }
        folder
    }

    fn categories_push(&self) -> StoreResult<Option<Push>> {
        let categories = CategoryService::new(&self.store).list_categories()?;
        Ok(Some(Push::Categories { categories }))
    }

    fn projects_push(&self) -> StoreResult<Option<Push>> {
        let projects =
            ProjectService::new(&self.store).all_projects(self.host.workspace_folders())?;
        Ok(Some(Push::UpdateProjects { projects }))
    }
}
