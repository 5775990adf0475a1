//! FFI use-case API for host-UI-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level task list functions via FRB.
//! - Keep error semantics simple for UI integration: envelopes, not panics.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - One process-wide task list session; reopening replaces it.

use log::info;
use std::sync::Mutex;
use taskpad_core::db::open_db;
use taskpad_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    ItemId, ListController, SqliteKvStore, TaskItem,
};

static SESSION: Mutex<Option<ListController<SqliteKvStore>>> = Mutex::new(None);

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One task row as presented to the host UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskView {
    /// Numeric item id, stable for the item's lifetime.
    pub id: u64,
    /// Item label; absent for legacy untitled rows.
    pub title: Option<String>,
    /// Completion flag.
    pub is_done: bool,
}

impl From<&TaskItem> for TaskView {
    fn from(item: &TaskItem) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            is_done: item.is_done,
        }
    }
}

/// List response envelope for the visible collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListResponse {
    /// Visible items, newest first (screen order).
    pub items: Vec<TaskView>,
    /// Active search query text as last set.
    pub query: String,
    /// Size of the full collection, for "N of M" UI affordances.
    pub total_count: u64,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

impl TaskListResponse {
    fn empty(message: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            query: String::new(),
            total_count: 0,
            message: message.into(),
        }
    }
}

/// Generic action response envelope for mutating calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskActionResponse {
    /// Whether the operation took effect.
    pub ok: bool,
    /// Created item id for add calls.
    pub item_id: Option<u64>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl TaskActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            item_id: None,
            message: message.into(),
        }
    }

    fn created(message: impl Into<String>, item_id: ItemId) -> Self {
        Self {
            ok: true,
            item_id: Some(item_id),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            item_id: None,
            message: message.into(),
        }
    }
}

/// Opens (or creates) the task list database and loads the collection.
///
/// Replaces any previously opened session in this process.
///
/// # FFI contract
/// - Sync call; performs file-system and SQLite work.
/// - Never panics; failures come back as `ok=false` envelopes.
#[flutter_rust_bridge::frb(sync)]
pub fn open_task_list(db_path: String) -> TaskActionResponse {
    let conn = match open_db(&db_path) {
        Ok(conn) => conn,
        Err(err) => return TaskActionResponse::failure(format!("failed to open database: {err}")),
    };

    let store = match SqliteKvStore::try_new(conn) {
        Ok(store) => store,
        Err(err) => return TaskActionResponse::failure(format!("failed to open store: {err}")),
    };

    let mut controller = ListController::new(store);
    controller.initialize();
    let count = controller.full_items().len();

    let Ok(mut guard) = SESSION.lock() else {
        return TaskActionResponse::failure("session lock poisoned");
    };
    *guard = Some(controller);
    info!("event=session_open module=ffi status=ok count={count}");

    TaskActionResponse::success(format!("task list opened with {count} items"))
}

/// Returns the visible collection for display, newest first.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics; an unopened session yields an empty list with a message.
#[flutter_rust_bridge::frb(sync)]
pub fn list_tasks() -> TaskListResponse {
    match with_session(|controller| list_response(controller, "ok")) {
        Ok(response) => response,
        Err(message) => TaskListResponse::empty(message),
    }
}

/// Updates the live search query and returns the re-derived visible list.
///
/// A blank query clears the filter. Searching never persists.
///
/// # FFI contract
/// - Sync call, safe to invoke on every keystroke.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn search_tasks(query: String) -> TaskListResponse {
    match with_session(|controller| {
        controller.set_query(&query);
        list_response(controller, "ok")
    }) {
        Ok(response) => response,
        Err(message) => TaskListResponse::empty(message),
    }
}

/// Adds a new task built from `text`.
///
/// Whitespace-only input is rejected without touching the collection, so the
/// host UI can leave its entry field as-is; on success the UI should clear it.
///
/// # FFI contract
/// - Sync call; issues one store write on success.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn add_task(text: String) -> TaskActionResponse {
    match with_session(|controller| controller.add(&text)) {
        Ok(Some(id)) => TaskActionResponse::created("task added", id),
        Ok(None) => TaskActionResponse::failure("text is empty or whitespace-only; nothing added"),
        Err(message) => TaskActionResponse::failure(message),
    }
}

/// Flips the completion flag of the task with `id`.
///
/// Unknown ids are accepted and leave the collection unchanged.
///
/// # FFI contract
/// - Sync call; issues one store write.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn toggle_task(id: u64) -> TaskActionResponse {
    match with_session(|controller| controller.toggle_done(id)) {
        Ok(()) => TaskActionResponse::success("task toggled"),
        Err(message) => TaskActionResponse::failure(message),
    }
}

/// Deletes the task with `id`.
///
/// Unknown ids are accepted and leave the collection unchanged.
///
/// # FFI contract
/// - Sync call; issues one store write.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_task(id: u64) -> TaskActionResponse {
    match with_session(|controller| controller.delete(id)) {
        Ok(()) => TaskActionResponse::success("task deleted"),
        Err(message) => TaskActionResponse::failure(message),
    }
}

fn with_session<T>(
    operation: impl FnOnce(&mut ListController<SqliteKvStore>) -> T,
) -> Result<T, String> {
    let Ok(mut guard) = SESSION.lock() else {
        return Err("session lock poisoned".to_string());
    };
    match guard.as_mut() {
        Some(controller) => Ok(operation(controller)),
        None => Err("task list not opened; call open_task_list first".to_string()),
    }
}

fn list_response(
    controller: &ListController<SqliteKvStore>,
    message: impl Into<String>,
) -> TaskListResponse {
    TaskListResponse {
        items: controller
            .visible_items_newest_first()
            .iter()
            .map(TaskView::from)
            .collect(),
        query: controller.query().to_string(),
        total_count: controller.full_items().len() as u64,
        message: message.into(),
    }
}
