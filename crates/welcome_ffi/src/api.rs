//! Bridge API for the start page UI.
//!
//! # Responsibility
//! - Expose page messaging and session calls to the UI via FRB.
//! - Collect host-side effects (open folder, notices) into the response so the
//!   UI can perform them.
//!
//! # Invariants
//! - Exported functions must not panic across the bridge boundary.
//! - The UI resolves the folder picker itself and passes the chosen folder
//!   along with the request that needs it.

use log::warn;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use welcome_core::db::open_db;
use welcome_core::{
    core_version as core_version_inner, default_welcome_tabs as default_welcome_tabs_inner,
    init_logging as init_logging_inner, ping as ping_inner, AppConfig, Host, MessageRouter,
    PageHandle, PageHost, PageOpen, Project, SqliteStateStore, OPEN_WELCOME_COMMAND,
};

const FALLBACK_DB_FILE_NAME: &str = "welcome_menu.sqlite3";
static BRIDGE_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through the bridge.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes core logging once per process.
///
/// Returns an empty string on success and an error message on failure. Safe
/// to call repeatedly with the same `level + log_dir`.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Result of one page message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BridgeResponse {
    /// Encoded push for the page, if the request produced one.
    pub push: Option<String>,
    /// Folder the UI should open as the active workspace.
    pub open_folder: Option<String>,
    /// Informational notices the UI should show.
    pub notices: Vec<String>,
    /// Infrastructure failure, if the state database was unavailable.
    pub error: Option<String>,
}

/// Result of the open-page command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOpenResponse {
    /// `true` when the UI must create the page, `false` to focus it.
    pub created: bool,
    pub page_id: String,
}

/// Handles one raw page message.
///
/// `picked_folder` carries the UI-side folder picker result for requests that
/// pick a folder (`None` means the dialog was dismissed). `workspace_folders`
/// lists folders open in the editor, used by the all-projects view.
#[flutter_rust_bridge::frb(sync)]
pub fn dispatch_message(
    message_json: String,
    picked_folder: Option<String>,
    workspace_folders: Vec<String>,
) -> BridgeResponse {
    dispatch_with_db(
        &resolve_bridge_db_path(),
        &message_json,
        picked_folder,
        workspace_folders,
    )
}

/// Opens the start page or focuses the existing one.
#[flutter_rust_bridge::frb(sync)]
pub fn open_welcome_page() -> PageOpenResponse {
    match welcome_core::open_welcome_page(&BridgePageHost) {
        PageOpen::Created(page) => PageOpenResponse {
            created: true,
            page_id: page.id.to_string(),
        },
        PageOpen::Revealed(page) => PageOpenResponse {
            created: false,
            page_id: page.id.to_string(),
        },
    }
}

/// Host command id the UI registers to open the start page.
#[flutter_rust_bridge::frb(sync)]
pub fn open_welcome_command() -> String {
    OPEN_WELCOME_COMMAND.to_owned()
}

/// Id of the open start page, or `None` when no page is open.
#[flutter_rust_bridge::frb(sync)]
pub fn current_welcome_page_id() -> Option<String> {
    welcome_core::current_welcome_page().map(|page| page.id.to_string())
}

/// Forgets the start page after the UI closed it.
///
/// Returns `false` for unknown or malformed ids.
#[flutter_rust_bridge::frb(sync)]
pub fn close_welcome_page(page_id: String) -> bool {
    match page_id.trim().parse() {
        Ok(id) => welcome_core::close_welcome_page(id),
        Err(_) => false,
    }
}

/// Filters tab labels down to the editor's default welcome tabs.
#[flutter_rust_bridge::frb(sync)]
pub fn default_welcome_tabs(labels: Vec<String>) -> Vec<String> {
    default_welcome_tabs_inner(labels.iter().map(String::as_str))
        .into_iter()
        .map(str::to_owned)
        .collect()
}

fn dispatch_with_db(
    db_path: &Path,
    message_json: &str,
    picked_folder: Option<String>,
    workspace_folders: Vec<String>,
) -> BridgeResponse {
    let conn = match open_db(db_path) {
        Ok(conn) => conn,
        Err(err) => return BridgeResponse::failure(format!("state DB open failed: {err}")),
    };
    let store = match SqliteStateStore::try_new(&conn) {
        Ok(store) => store,
        Err(err) => return BridgeResponse::failure(format!("state store init failed: {err}")),
    };

    let host = BridgeHost {
        picked_folder: RefCell::new(picked_folder.map(PathBuf::from)),
        workspace_folders: workspace_folders
            .iter()
            .map(Project::from_folder)
            .collect(),
        ..BridgeHost::default()
    };
    let router = MessageRouter::new(store, host);
    let push = router.handle_json(message_json);

    let host = router.host();
    let response = BridgeResponse {
        push,
        open_folder: host.opened.borrow_mut().take(),
        notices: host.notices.take(),
        error: None,
    };
    response
}

impl BridgeResponse {
    fn failure(message: String) -> Self {
        Self {
            error: Some(message),
            ..Self::default()
        }
    }
}

#[derive(Default)]
struct BridgeHost {
    picked_folder: RefCell<Option<PathBuf>>,
    workspace_folders: Vec<Project>,
    opened: RefCell<Option<String>>,
    notices: RefCell<Vec<String>>,
}

impl Host for BridgeHost {
    fn pick_folder(&self, _open_label: &str) -> Option<PathBuf> {
        self.picked_folder.borrow_mut().take()
    }

    fn open_folder(&self, path: &Path) {
        *self.opened.borrow_mut() = Some(path.to_string_lossy().into_owned());
    }

    fn show_information(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_owned());
    }

    fn workspace_folders(&self) -> Vec<Project> {
        self.workspace_folders.clone()
    }
}

/// The UI owns page creation; the session only tracks identity.
struct BridgePageHost;

impl PageHost for BridgePageHost {
    fn show_page(&self, _page: &PageHandle) {}

    fn reveal_page(&self, _page: &PageHandle) {}
}

fn resolve_bridge_db_path() -> PathBuf {
    BRIDGE_DB_PATH
        .get_or_init(|| match AppConfig::from_env() {
            Ok(config) => config.db_path,
            Err(err) => {
                warn!("event=config_resolve module=ffi status=error error={err}");
                std::env::temp_dir().join(FALLBACK_DB_FILE_NAME)
            }
        })
        .clone()
}
