//! Board Reconciliation
//!
//! Optimistic local mutation of the card collections in response to
//! drag-and-drop transfers. Each transfer changes exactly one item's
//! status and yields the remote write the caller must issue; a failed
//! remote write is rolled back by refetching the whole collection, not
//! by undoing the local change.

use std::fmt;

use crate::models::{Project, Task};
use crate::status::{ProjectStatus, TaskStatus};

/// What kind of card a drag started on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    Task,
    SubTask,
    Project,
}

/// Reference to the dragged card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragRef {
    pub kind: DragKind,
    pub id: u32,
    /// Owning task, required for sub-task drags
    pub from_task_id: Option<u32>,
}

/// Which remote endpoint a status write goes through. Tasks and
/// sub-tasks share the item endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteRoute {
    Item,
    Project,
}

/// Remote write produced by a transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusWrite {
    pub route: WriteRoute,
    pub id: u32,
    pub field: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    UnknownLane(String),
    UnknownItem(u32),
    MissingOwner(u32),
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferError::UnknownLane(title) => write!(f, "no lane named '{}'", title),
            TransferError::UnknownItem(id) => write!(f, "no item with id {}", id),
            TransferError::MissingOwner(id) => {
                write!(f, "sub-task {} dropped without its owning task", id)
            }
        }
    }
}

/// Apply a drop to local state.
///
/// Normalizes the lane title against the vocabulary of the dragged
/// card's section, sets the one affected status field, and returns the
/// write the caller must send to the backend. Any lane to any lane is
/// legal; the boards enforce no workflow ordering.
pub fn apply_transfer(
    tasks: &mut [Task],
    projects: &mut [Project],
    drag: DragRef,
    target_lane_title: &str,
) -> Result<StatusWrite, TransferError> {
    match drag.kind {
        DragKind::Task => {
            let status = TaskStatus::from_lane_title(target_lane_title)
                .ok_or_else(|| TransferError::UnknownLane(target_lane_title.to_string()))?;
            let task = tasks
                .iter_mut()
                .find(|t| t.id == drag.id)
                .ok_or(TransferError::UnknownItem(drag.id))?;
            task.status = status.key().to_string();
            Ok(StatusWrite {
                route: WriteRoute::Item,
                id: drag.id,
                field: "status",
                value: status.key().to_string(),
            })
        }
        DragKind::SubTask => {
            let status = TaskStatus::from_lane_title(target_lane_title)
                .ok_or_else(|| TransferError::UnknownLane(target_lane_title.to_string()))?;
            let owner_id = drag.from_task_id.ok_or(TransferError::MissingOwner(drag.id))?;
            let owner = tasks
                .iter_mut()
                .find(|t| t.id == owner_id)
                .ok_or(TransferError::UnknownItem(owner_id))?;
            let sub = owner
                .sub_tasks
                .iter_mut()
                .find(|s| s.id == drag.id)
                .ok_or(TransferError::UnknownItem(drag.id))?;
            sub.status = status.key().to_string();
            Ok(StatusWrite {
                route: WriteRoute::Item,
                id: drag.id,
                field: "status",
                value: status.key().to_string(),
            })
        }
        DragKind::Project => {
            let status = ProjectStatus::from_lane_title(target_lane_title)
                .ok_or_else(|| TransferError::UnknownLane(target_lane_title.to_string()))?;
            let project = projects
                .iter_mut()
                .find(|p| p.id == drag.id)
                .ok_or(TransferError::UnknownItem(drag.id))?;
            project.status = status.key().to_string();
            Ok(StatusWrite {
                route: WriteRoute::Project,
                id: drag.id,
                field: "status",
                value: status.key().to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubTask;

    fn make_task(id: u32, status: &str) -> Task {
        Task {
            id,
            title: format!("Task {}", id),
            status: status.to_string(),
            predecessor_ids: Vec::new(),
            successor_ids: Vec::new(),
            sub_tasks: Vec::new(),
        }
    }

    fn make_project(id: u32, status: &str) -> Project {
        Project {
            id,
            title: format!("Project {}", id),
            status: status.to_string(),
        }
    }

    #[test]
    fn test_task_transfer_updates_status() {
        let mut tasks = vec![make_task(7, "open")];
        let mut projects = Vec::new();

        let drag = DragRef { kind: DragKind::Task, id: 7, from_task_id: None };
        let write = apply_transfer(&mut tasks, &mut projects, drag, "In Progress").unwrap();

        assert_eq!(tasks[0].status, "in_progress");
        assert_eq!(
            write,
            StatusWrite {
                route: WriteRoute::Item,
                id: 7,
                field: "status",
                value: "in_progress".to_string(),
            }
        );
    }

    #[test]
    fn test_subtask_transfer_touches_only_the_subtask() {
        let mut owner = make_task(42, "in_progress");
        owner.sub_tasks = vec![
            SubTask { id: 3, title: "Sub 3".to_string(), status: "open".to_string() },
            SubTask { id: 4, title: "Sub 4".to_string(), status: "open".to_string() },
        ];
        let mut tasks = vec![make_task(1, "open"), owner];
        let mut projects = Vec::new();
        let before = tasks.clone();

        let drag = DragRef { kind: DragKind::SubTask, id: 3, from_task_id: Some(42) };
        let write = apply_transfer(&mut tasks, &mut projects, drag, "Completed").unwrap();

        assert_eq!(write.route, WriteRoute::Item);
        assert_eq!(write.id, 3);

        // Collection diff: exactly one sub-task status changed
        let mut expected = before.clone();
        expected[1].sub_tasks[0].status = "completed".to_string();
        assert_eq!(tasks, expected);
        // The owner's own status is untouched
        assert_eq!(tasks[1].status, before[1].status);
    }

    #[test]
    fn test_project_transfer_routes_to_project_endpoint() {
        let mut tasks = Vec::new();
        let mut projects = vec![make_project(5, "open")];

        let drag = DragRef { kind: DragKind::Project, id: 5, from_task_id: None };
        let write = apply_transfer(&mut tasks, &mut projects, drag, "On Hold").unwrap();

        assert_eq!(projects[0].status, "on_hold");
        assert_eq!(write.route, WriteRoute::Project);
    }

    #[test]
    fn test_any_lane_to_any_lane_is_legal() {
        let mut tasks = vec![make_task(7, "completed")];
        let mut projects = Vec::new();

        let drag = DragRef { kind: DragKind::Task, id: 7, from_task_id: None };
        apply_transfer(&mut tasks, &mut projects, drag, "Open").unwrap();
        assert_eq!(tasks[0].status, "open");
    }

    #[test]
    fn test_unknown_lane_for_section() {
        let mut tasks = Vec::new();
        let mut projects = vec![make_project(5, "open")];

        // Sprint is a task lane, not a project lane
        let drag = DragRef { kind: DragKind::Project, id: 5, from_task_id: None };
        let err = apply_transfer(&mut tasks, &mut projects, drag, "Sprint").unwrap_err();
        assert_eq!(err, TransferError::UnknownLane("Sprint".to_string()));
        assert_eq!(projects[0].status, "open");
    }

    #[test]
    fn test_subtask_without_owner_is_rejected() {
        let mut tasks = vec![make_task(42, "open")];
        let mut projects = Vec::new();

        let drag = DragRef { kind: DragKind::SubTask, id: 3, from_task_id: None };
        let err = apply_transfer(&mut tasks, &mut projects, drag, "Completed").unwrap_err();
        assert_eq!(err, TransferError::MissingOwner(3));
    }

    #[test]
    fn test_unknown_item() {
        let mut tasks = vec![make_task(1, "open")];
        let mut projects = Vec::new();

        let drag = DragRef { kind: DragKind::Task, id: 99, from_task_id: None };
        let err = apply_transfer(&mut tasks, &mut projects, drag, "Completed").unwrap_err();
        assert_eq!(err, TransferError::UnknownItem(99));
    }
}
