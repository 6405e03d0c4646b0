//! Project folder shortcut.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// One folder shortcut shown as a card.
///
/// `path` is the identity key inside a category; `name` is display-only and
/// may be missing from page messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub name: String,
    pub path: String,
}

impl Project {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Builds a project for a picked folder, named after its last path segment.
    ///
    /// Paths without a final component (for example `/`) use the full path as
    /// the name.
    pub fn from_folder(folder: impl AsRef<Path>) -> Self {
        let folder = folder.as_ref();
        let path = folder.to_string_lossy().into_owned();
        let name = folder
            .file_name()
            .map(|segment| segment.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.clone());
        Self { name, path }
    }
}

#[cfg(test)]
mod tests {
    use super::Project;

    #[test]
    fn from_folder_uses_last_segment_as_name() {
        let project = Project::from_folder("/home/dev/work/svc");
        assert_eq!(project.name, "svc");
        assert_eq!(project.path, "/home/dev/work/svc");
    }

    #[test]
    fn from_folder_falls_back_to_path_for_root() {
        let project = Project::from_folder("/");
        assert_eq!(project.name, "/");
        assert_eq!(project.path, "/");
    }

    #[test]
    fn decodes_without_name() {
        let project: Project = serde_json::from_str(r#"{"path":"/a/svc"}"#).unwrap();
        assert_eq!(project, Project::new("", "/a/svc"));
    }

    #[test]
    fn serializes_as_plain_object() {
        let json = serde_json::to_value(Project::new("svc", "/a/svc")).unwrap();
        assert_eq!(json, serde_json::json!({"name": "svc", "path": "/a/svc"}));
    }
}
