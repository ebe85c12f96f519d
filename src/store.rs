//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The card
//! collections live here as a single shared structure; readers (lane
//! partition, link derivation) always see the latest optimistic value.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::{apply_transfer, DragKind, DragRef, StatusWrite, TransferError};
use crate::links::{toggle_links, ExplicitLink};
use crate::models::{Project, Section, Task};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All tasks for the active workspace
    pub tasks: Vec<Task>,
    /// All projects
    pub projects: Vec<Project>,
    /// User-created dependency links
    pub explicit_links: Vec<ExplicitLink>,
    /// Which section the kanban boards show
    pub active_section: Section,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the task collection wholesale; last snapshot wins, no merge
pub fn store_load_tasks(store: &AppStore, tasks: Vec<Task>) {
    *store.tasks().write() = tasks;
}

/// Replace the project collection wholesale
pub fn store_load_projects(store: &AppStore, projects: Vec<Project>) {
    *store.projects().write() = projects;
}

/// Apply a drag transfer optimistically and return the remote write to
/// issue. Only the collection the drag touches is locked.
pub fn store_apply_transfer(
    store: &AppStore,
    drag: DragRef,
    target_lane_title: &str,
) -> Result<StatusWrite, TransferError> {
    match drag.kind {
        DragKind::Project => {
            let projects_field = store.projects();
            let mut projects = projects_field.write();
            apply_transfer(&mut [], projects.as_mut_slice(), drag, target_lane_title)
        }
        DragKind::Task | DragKind::SubTask => {
            let tasks_field = store.tasks();
            let mut tasks = tasks_field.write();
            apply_transfer(tasks.as_mut_slice(), &mut [], drag, target_lane_title)
        }
    }
}

/// Toggle explicit links from a source card to a target set
pub fn store_toggle_links(store: &AppStore, source_id: u32, target_ids: &[u32]) {
    toggle_links(&mut store.explicit_links().write(), source_id, target_ids);
}

/// Switch the boards between the Tasks and Projects sections
pub fn store_set_section(store: &AppStore, section: Section) {
    *store.active_section().write() = section;
}
