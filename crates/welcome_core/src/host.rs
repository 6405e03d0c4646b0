//! Host collaborator contracts.
//!
//! The editor host owns the native folder picker, workspace opening and
//! notifications. Core code only sees these traits so the router can be driven
//! by the bridge, the CLI or a scripted test double.

use crate::model::project::Project;
use std::path::{Path, PathBuf};

/// Label shown on the folder picker's confirm button.
pub const PICK_FOLDER_LABEL: &str = "Select Project Folder";

/// Notice shown when a standalone project path is registered twice.
pub const DUPLICATE_PROJECT_NOTICE: &str = "This project is already in your list!";

/// Editor-side services the message router depends on.
pub trait Host {
    /// Shows a modal single-folder picker.
    ///
    /// Returns `None` when the user dismisses the dialog.
    fn pick_folder(&self, open_label: &str) -> Option<PathBuf>;

    /// Opens `path` as the active workspace.
    fn open_folder(&self, path: &Path);

    /// Shows an informational notice.
    fn show_information(&self, message: &str);

    /// Folders currently open in the host workspace.
    fn workspace_folders(&self) -> Vec<Project> {
        Vec::new()
    }
}

impl<H: Host> Host for &H {
    fn pick_folder(&self, open_label: &str) -> Option<PathBuf> {
        (**self).pick_folder(open_label)
    }

    fn open_folder(&self, path: &Path) {
        (**self).open_folder(path)
    }

    fn show_information(&self, message: &str) {
        (**self).show_information(message)
    }

    fn workspace_folders(&self) -> Vec<Project> {
        (**self).workspace_folders()
    }
}
