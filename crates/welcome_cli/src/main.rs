//! Line-oriented driver for the start page message router.
//!
//! # Responsibility
//! - Feed one JSON request per stdin line through the router.
//! - Print each resulting push as one JSON line on stdout.
//!
//! Host effects (open folder, notices) are reported on stderr. Folder picks
//! are answered from `--pick` values in order; once they run out, every pick
//! behaves like a dismissed dialog.

use clap::Parser;
use log::info;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use welcome_core::db::open_db;
use welcome_core::{
    core_version, init_logging, AppConfig, Host, MessageRouter, Project, SqliteStateStore,
    StateStore,
};

#[derive(Debug, Parser)]
#[command(
    name = "welcome-cli",
    version,
    about = "Drive the project manager start page from JSON lines"
)]
struct Args {
    /// State database path (defaults to WELCOME_MENU_DB_PATH or a temp file)
    #[arg(long)]
    db: Option<PathBuf>,
    /// Absolute log directory (defaults to WELCOME_MENU_LOG_DIR)
    #[arg(long)]
    log_dir: Option<PathBuf>,
    /// Log level: trace|debug|info|warn|error
    #[arg(long)]
    log_level: Option<String>,
    /// Folder returned by the next folder pick; repeatable
    #[arg(long = "pick")]
    picks: Vec<PathBuf>,
    /// Folder reported as open in the workspace; repeatable
    #[arg(long = "workspace")]
    workspace: Vec<PathBuf>,
}

struct CliHost {
    picks: RefCell<VecDeque<PathBuf>>,
    workspace: Vec<Project>,
}

impl CliHost {
    fn new(picks: Vec<PathBuf>, workspace: &[PathBuf]) -> Self {
        Self {
            picks: RefCell::new(picks.into()),
            workspace: workspace.iter().map(Project::from_folder).collect(),
        }
    }
}

impl Host for CliHost {
    fn pick_folder(&self, open_label: &str) -> Option<PathBuf> {
        let picked = self.picks.borrow_mut().pop_front();
        match &picked {
            Some(folder) => eprintln!("[{open_label}] picked {}", folder.display()),
            None => eprintln!("[{open_label}] dismissed"),
        }
        picked
    }

    fn open_folder(&self, path: &Path) {
        eprintln!("open folder: {}", path.display());
    }

    fn show_information(&self, message: &str) {
        eprintln!("info: {message}");
    }

    fn workspace_folders(&self) -> Vec<Project> {
        self.workspace.clone()
    }
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("welcome-cli: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), String> {
    let config = AppConfig::from_env().map_err(|err| err.to_string())?;
    let log_level = args.log_level.as_deref().unwrap_or(config.log_level);
    let log_dir = args.log_dir.unwrap_or(config.log_dir);
    init_logging(log_level, &log_dir.to_string_lossy())?;

    let db_path = args.db.unwrap_or(config.db_path);
    info!(
        "event=cli_start module=cli status=ok version={} db_path={}",
        core_version(),
        db_path.display()
    );

    let conn = open_db(&db_path).map_err(|err| format!("state DB open failed: {err}"))?;
    let store = SqliteStateStore::try_new(&conn)
        .map_err(|err| format!("state store init failed: {err}"))?;
    let router = MessageRouter::new(store, CliHost::new(args.picks, &args.workspace));

    let handled = run_session(&router, io::stdin().lock(), io::stdout().lock())?;
    info!("event=cli_finish module=cli status=ok pushes={handled}");
    Ok(())
}

/// Routes every non-blank input line and writes each push as one line.
///
/// Returns the number of pushes written.
fn run_session<S, H>(
    router: &MessageRouter<S, H>,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<usize, String>
where
    S: StateStore,
    H: Host,
{
    let mut pushes = 0;
    for line in input.lines() {
        let line = line.map_err(|err| format!("failed to read stdin: {err}"))?;
        if line.trim().is_empty() {
            continue;
        }
        if let Some(push) = router.handle_json(&line) {
            writeln!(output, "{push}").map_err(|err| format!("failed to write stdout: {err}"))?;
            pushes += 1;
        }
    }
    output
        .flush()
        .map_err(|err| format!("failed to write stdout: {err}"))?;
    Ok(pushes)
}
