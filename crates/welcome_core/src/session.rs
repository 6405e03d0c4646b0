//! Process-wide start page session.
//!
//! # Responsibility
//! - Track the single open start page and reuse it on repeated open commands.
//! - Forget the page once the host reports it closed.
//!
//! # Invariants
//! - At most one page handle is held per process.
//! - Closing an unknown or stale page id leaves the current handle untouched.

use log::info;
use once_cell::sync::Lazy;
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

/// Host command that opens or focuses the start page.
pub const OPEN_WELCOME_COMMAND: &str = "welcoming-menu.openWelcome";
/// Host view type of the start page.
pub const PAGE_VIEW_TYPE: &str = "welcomingMenu";
/// Tab title of the start page.
pub const PAGE_TITLE: &str = "Project Manager";

static GLOBAL_SESSION: Lazy<Mutex<PageSession>> = Lazy::new(|| Mutex::new(PageSession::new()));

/// Handle to the open start page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageHandle {
    pub id: Uuid,
    pub view_type: &'static str,
    pub title: &'static str,
}

/// Host tab management used by the session.
pub trait PageHost {
    /// Creates and shows a new page for `page`.
    fn show_page(&self, page: &PageHandle);
    /// Brings an existing page to the front.
    fn reveal_page(&self, page: &PageHandle);
}

/// Outcome of an open request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOpen {
    Created(PageHandle),
    Revealed(PageHandle),
}

impl PageOpen {
    pub fn page(&self) -> &PageHandle {
        match self {
            Self::Created(page) | Self::Revealed(page) => page,
        }
    }
}

/// Holder of the optional current page.
#[derive(Debug, Default)]
pub struct PageSession {
    current: Option<PageHandle>,
}

impl PageSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&PageHandle> {
        self.current.as_ref()
    }

    /// Reveals the current page, or creates one when none is open.
    pub fn open_or_reveal(&mut self, host: &impl PageHost) -> PageOpen {
        if let Some(page) = &self.current {
            host.reveal_page(page);
            return PageOpen::Revealed(page.clone());
        }

        let page = PageHandle {
            id: Uuid::new_v4(),
            view_type: PAGE_VIEW_TYPE,
            title: PAGE_TITLE,
        };
        host.show_page(&page);
        info!("event=page_open module=session status=ok page_id={}", page.id);
        self.current = Some(page.clone());
        PageOpen::Created(page)
    }

    /// Clears the current page when `page_id` matches it.
    pub fn close(&mut self, page_id: Uuid) -> bool {
        match &self.current {
            Some(page) if page.id == page_id => {
                self.current = None;
                info!("event=page_close module=session status=ok page_id={page_id}");
                true
            }
            _ => false,
        }
    }
}

/// Runs the open command against the process-wide session.
pub fn open_welcome_page(host: &impl PageHost) -> PageOpen {
    global_session().open_or_reveal(host)
}

/// Handles the host's page-closed event for the process-wide session.
pub fn close_welcome_page(page_id: Uuid) -> bool {
    global_session().close(page_id)
}

/// Returns the process-wide current page, if any.
pub fn current_welcome_page() -> Option<PageHandle> {
    global_session().current().cloned()
}

/// Selects host tab labels that belong to the default editor welcome page.
pub fn default_welcome_tabs<'a>(labels: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    labels
        .into_iter()
        .filter(|label| label.to_lowercase().contains("welcome"))
        .collect()
}

fn global_session() -> MutexGuard<'static, PageSession> {
    // The session holds no cross-field invariant a panic could break.
    GLOBAL_SESSION
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
