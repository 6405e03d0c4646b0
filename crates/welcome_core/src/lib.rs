//! Core domain logic for the project manager start page.
//! This crate is the single source of truth for category tree invariants.

pub mod config;
pub mod db;
pub mod host;
pub mod logging;
pub mod model;
pub mod router;
pub mod service;
pub mod session;
pub mod store;

pub use config::{AppConfig, ConfigError};
pub use host::{Host, DUPLICATE_PROJECT_NOTICE, PICK_FOLDER_LABEL};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::{Category, CategoryId, Forest};
pub use model::project::Project;
pub use router::dispatch::MessageRouter;
pub use router::message::{Push, Request};
pub use service::category_service::CategoryService;
pub use service::project_service::{AddProjectOutcome, ProjectService};
pub use session::{
    close_welcome_page, current_welcome_page, default_welcome_tabs, open_welcome_page,
    PageHandle, PageHost, PageOpen, PageSession, OPEN_WELCOME_COMMAND,
};
pub use store::state_store::{SqliteStateStore, StateKey, StateStore, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
