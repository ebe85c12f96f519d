//! Status Vocabularies
//!
//! Each board section has its own fixed set of status keys. Lane titles
//! normalize to keys by lowercasing and replacing whitespace with
//! underscores; the "Active" lane is an alias for `open`.

use std::fmt;

/// Normalize a display string to a status key
pub fn normalize_key(title: &str) -> String {
    title
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Status vocabulary for the Tasks section (tasks and sub-tasks)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    Open,
    InProgress,
    OnHold,
    Completed,
    Overdue,
    Sprint,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 6] = [
        TaskStatus::Open,
        TaskStatus::InProgress,
        TaskStatus::OnHold,
        TaskStatus::Completed,
        TaskStatus::Overdue,
        TaskStatus::Sprint,
    ];

    /// Backend status key
    pub fn key(self) -> &'static str {
        match self {
            TaskStatus::Open => "open",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::OnHold => "on_hold",
            TaskStatus::Completed => "completed",
            TaskStatus::Overdue => "overdue",
            TaskStatus::Sprint => "sprint",
        }
    }

    /// Parse a raw backend status key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.key() == key)
    }

    /// Normalize a lane display title ("Active" is the open lane)
    pub fn from_lane_title(title: &str) -> Option<Self> {
        let key = normalize_key(title);
        if key == "active" {
            return Some(TaskStatus::Open);
        }
        Self::from_key(&key)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Status vocabulary for the Projects section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectStatus {
    Open,
    InProgress,
    OnHold,
    Completed,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::Open,
        ProjectStatus::InProgress,
        ProjectStatus::OnHold,
        ProjectStatus::Completed,
    ];

    /// Backend status key
    pub fn key(self) -> &'static str {
        match self {
            ProjectStatus::Open => "open",
            ProjectStatus::InProgress => "in_progress",
            ProjectStatus::OnHold => "on_hold",
            ProjectStatus::Completed => "completed",
        }
    }

    /// Parse a raw backend status key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.key() == key)
    }

    /// Normalize a lane display title ("Active" is the open lane)
    pub fn from_lane_title(title: &str) -> Option<Self> {
        let key = normalize_key(title);
        if key == "active" {
            return Some(ProjectStatus::Open);
        }
        Self::from_key(&key)
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("In Progress"), "in_progress");
        assert_eq!(normalize_key("  On   Hold "), "on_hold");
        assert_eq!(normalize_key("completed"), "completed");
        assert_eq!(normalize_key("in_progress"), "in_progress");
    }

    #[test]
    fn test_task_status_roundtrip() {
        for status in TaskStatus::ALL {
            assert_eq!(TaskStatus::from_key(status.key()), Some(status));
        }
        assert_eq!(TaskStatus::from_key("nonsense"), None);
    }

    #[test]
    fn test_lane_title_normalization() {
        assert_eq!(TaskStatus::from_lane_title("In Progress"), Some(TaskStatus::InProgress));
        assert_eq!(TaskStatus::from_lane_title("Active"), Some(TaskStatus::Open));
        assert_eq!(TaskStatus::from_lane_title("Backlog"), None);
    }

    #[test]
    fn test_project_vocabulary_is_distinct() {
        // Sprint and Overdue are task-only lanes
        assert_eq!(ProjectStatus::from_lane_title("Sprint"), None);
        assert_eq!(ProjectStatus::from_lane_title("Overdue"), None);
        assert_eq!(ProjectStatus::from_lane_title("Active"), Some(ProjectStatus::Open));
    }
}
