use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use welcome_core::db::open_db_in_memory;
use welcome_core::{
    Category, Host, MessageRouter, Project, Push, Request, SqliteStateStore,
    DUPLICATE_PROJECT_NOTICE, PICK_FOLDER_LABEL,
};

#[derive(Default)]
struct ScriptedHost {
    picks: RefCell<VecDeque<Option<PathBuf>>>,
    pick_labels: RefCell<Vec<String>>,
    opened: RefCell<Vec<PathBuf>>,
    notices: RefCell<Vec<String>>,
    workspace: Vec<Project>,
}

impl ScriptedHost {
    fn with_picks(picks: impl IntoIterator<Item = Option<&'static str>>) -> Self {
        Self {
            picks: RefCell::new(picks.into_iter().map(|pick| pick.map(PathBuf::from)).collect()),
            ..Self::default()
        }
    }
}

impl Host for ScriptedHost {
    fn pick_folder(&self, open_label: &str) -> Option<PathBuf> {
        self.pick_labels.borrow_mut().push(open_label.to_string());
        self.picks.borrow_mut().pop_front().flatten()
    }

    fn open_folder(&self, path: &Path) {
        self.opened.borrow_mut().push(path.to_path_buf());
    }

    fn show_information(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_string());
    }

    fn workspace_folders(&self) -> Vec<Project> {
        self.workspace.clone()
    }
}

fn snapshot(push: Option<Push>) -> Vec<Category> {
    match push {
        Some(Push::Categories { categories }) => categories,
        other => panic!("expected categories push, got {other:?}"),
    }
}

fn created(push: Option<Push>) -> Category {
    match push {
        Some(Push::CategoryCreated { category }) => category,
        other => panic!("expected categoryCreated push, got {other:?}"),
    }
}

#[test]
fn scenario_over_json_messages() {
    let conn = open_db_in_memory().unwrap();
    let router = MessageRouter::new(
        SqliteStateStore::try_new(&conn).unwrap(),
        ScriptedHost::default(),
    );

    let raw = router
        .handle_json(r#"{"type":"createCategory","name":"Work"}"#)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["type"], "categoryCreated");
    assert_eq!(value["category"]["name"], "Work");
    assert_eq!(value["category"]["projects"], serde_json::json!([]));
    let work_id = value["category"]["id"].as_str().unwrap().to_string();

    let forest = snapshot(router.handle(Request::CreateSubcategory {
        parent_id: work_id.clone(),
        name: "Backend".to_string(),
    }));
    let backend = forest[0].children()[0].clone();
    assert_eq!(backend.parent_id.as_deref(), Some(work_id.as_str()));

    let add = Request::AddProjectToCategory {
        category_id: backend.id.clone(),
        project: Project::new("svc", "/a/svc"),
    };
    snapshot(router.handle(add.clone()));
    let forest = snapshot(router.handle(add));
    assert_eq!(
        forest[0].children()[0].projects,
        vec![Project::new("svc", "/a/svc")]
    );

    let forest = snapshot(router.handle(Request::RemoveCategory {
        category_id: work_id,
    }));
    assert!(forest.is_empty());
}

#[test]
fn unknown_category_still_pushes_unchanged_snapshot() {
    let conn = open_db_in_memory().unwrap();
    let router = MessageRouter::new(
        SqliteStateStore::try_new(&conn).unwrap(),
        ScriptedHost::default(),
    );
    created(router.handle(Request::CreateCategory {
        name: "Work".to_string(),
    }));
    let before = snapshot(router.handle(Request::GetCategories));

    let after = snapshot(router.handle(Request::AddProjectToCategory {
        category_id: "nonexistent-id".to_string(),
        project: Project::new("x", "/x"),
    }));
    assert_eq!(after, before);

    let after = snapshot(router.handle(Request::RemoveProjectFromCategory {
        category_id: "nonexistent-id".to_string(),
        project_path: "/x".to_string(),
    }));
    assert_eq!(after, before);
}

#[test]
fn rejected_subcategory_sends_no_push() {
    let conn = open_db_in_memory().unwrap();
    let router = MessageRouter::new(
        SqliteStateStore::try_new(&conn).unwrap(),
        ScriptedHost::default(),
    );
    let work = created(router.handle(Request::CreateCategory {
        name: "Work".to_string(),
    }));
    let forest = snapshot(router.handle(Request::CreateSubcategory {
        parent_id: work.id,
        name: "Backend".to_string(),
    }));
    let backend_id = forest[0].children()[0].id.clone();

    assert!(router
        .handle(Request::CreateSubcategory {
            parent_id: backend_id,
            name: "Deep".to_string(),
        })
        .is_none());
    assert_eq!(snapshot(router.handle(Request::GetCategories)), forest);
}

#[test]
fn add_project_uses_picked_folder_and_ignores_cancel() {
    let conn = open_db_in_memory().unwrap();
    let host = ScriptedHost::with_picks([Some("/home/dev/api"), None, Some("/home/dev/api")]);
    let router = MessageRouter::new(SqliteStateStore::try_new(&conn).unwrap(), host);
    let work = created(router.handle(Request::CreateCategory {
        name: "Work".to_string(),
    }));
    let request = Request::AddProject {
        category_id: work.id.clone(),
    };

    let forest = snapshot(router.handle(request.clone()));
    assert_eq!(forest[0].projects, vec![Project::new("api", "/home/dev/api")]);

    assert!(router.handle(request.clone()).is_none());

    let forest = snapshot(router.handle(request));
    assert_eq!(forest[0].projects.len(), 1);
    assert!(router.host().notices.borrow().is_empty());
    assert_eq!(
        *router.host().pick_labels.borrow(),
        vec![PICK_FOLDER_LABEL; 3]
    );
}

#[test]
fn open_project_delegates_to_host_without_push() {
    let conn = open_db_in_memory().unwrap();
    let router = MessageRouter::new(
        SqliteStateStore::try_new(&conn).unwrap(),
        ScriptedHost::default(),
    );

    assert!(router
        .handle_json(r#"{"type":"openProject","path":"/a/svc"}"#)
        .is_none());
    assert_eq!(*router.host().opened.borrow(), vec![PathBuf::from("/a/svc")]);
}

#[test]
fn unmatched_messages_are_ignored() {
    let conn = open_db_in_memory().unwrap();
    let router = MessageRouter::new(
        SqliteStateStore::try_new(&conn).unwrap(),
        ScriptedHost::default(),
    );

    assert!(router.handle_json(r#"{"type":"renameCategory"}"#).is_none());
    assert!(router.handle_json(r#"{"name":"no type"}"#).is_none());
    assert!(snapshot(router.handle(Request::GetCategories)).is_empty());
}

#[test]
fn standalone_projects_merge_workspace_and_notify_duplicates() {
    let conn = open_db_in_memory().unwrap();
    let mut host = ScriptedHost::with_picks([Some("/srv/tools"), Some("/srv/tools"), None]);
    host.workspace = vec![Project::new("repo", "/work/repo")];
    let router = MessageRouter::new(SqliteStateStore::try_new(&conn).unwrap(), host);

    let first = router.handle(Request::AddStandaloneProject);
    assert_eq!(
        first,
        Some(Push::UpdateProjects {
            projects: vec![
                Project::new("repo", "/work/repo"),
                Project::new("tools", "/srv/tools"),
            ],
        })
    );

    assert!(router.handle(Request::AddStandaloneProject).is_none());
    assert_eq!(
        *router.host().notices.borrow(),
        vec![DUPLICATE_PROJECT_NOTICE.to_string()]
    );

    assert!(router.handle(Request::AddStandaloneProject).is_none());
    assert_eq!(router.host().notices.borrow().len(), 1);
}

#[test]
fn all_projects_view_drops_saved_duplicates_of_workspace_folders() {
    let conn = open_db_in_memory().unwrap();
    let mut host = ScriptedHost::with_picks([Some("/work/repo")]);
    host.workspace = vec![Project::new("repo", "/work/repo")];
    let router = MessageRouter::new(SqliteStateStore::try_new(&conn).unwrap(), host);

    router.handle(Request::AddStandaloneProject);
    let view = router.handle(Request::GetProjects);
    assert_eq!(
        view,
        Some(Push::UpdateProjects {
            projects: vec![Project::new("repo", "/work/repo")],
        })
    );
}

#[test]
fn store_failure_resolves_as_no_push() {
    let conn = open_db_in_memory().unwrap();
    let router = MessageRouter::new(
        SqliteStateStore::try_new(&conn).unwrap(),
        ScriptedHost::default(),
    );
    conn.execute(
        "INSERT INTO state_documents (key, value) VALUES ('categories', 'oops');",
        [],
    )
    .unwrap();

    assert!(router.handle(Request::GetCategories).is_none());
    assert!(router
        .handle(Request::CreateCategory {
            name: "Work".to_string(),
        })
        .is_none());
}

#[test]
fn project_payload_without_name_is_added() {
    let conn = open_db_in_memory().unwrap();
    let router = MessageRouter::new(
        SqliteStateStore::try_new(&conn).unwrap(),
        ScriptedHost::default(),
    );
    let work = created(router.handle(Request::CreateCategory {
        name: "Work".to_string(),
    }));

    let raw = router
        .handle_json(&format!(
            r#"{{"type":"addProjectToCategory","categoryId":"{}","project":{{"path":"/a/svc"}}}}"#,
            work.id
        ))
        .expect("nameless project should still push categories");
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["categories"][0]["projects"][0]["path"], "/a/svc");
    assert_eq!(value["categories"][0]["projects"][0]["name"], "");
}
