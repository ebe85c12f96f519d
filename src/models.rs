//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// One entry in a predecessor/successor id list. The backend sometimes
/// nests these one level deep, so both shapes deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdGroup {
    One(u32),
    Many(Vec<u32>),
}

/// Flatten raw id groups into a plain id list
pub fn flatten_ids(groups: &[IdGroup]) -> Vec<u32> {
    let mut out = Vec::new();
    for group in groups {
        match group {
            IdGroup::One(id) => out.push(*id),
            IdGroup::Many(ids) => out.extend(ids.iter().copied()),
        }
    }
    out
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub title: String,
    pub status: String,
    #[serde(rename = "predecessorIds", default)]
    pub predecessor_ids: Vec<IdGroup>,
    #[serde(rename = "successorIds", default)]
    pub successor_ids: Vec<IdGroup>,
    #[serde(rename = "subTasks", default)]
    pub sub_tasks: Vec<SubTask>,
}

/// Sub-task data structure. Identity is its own; visibility follows the
/// owning task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubTask {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub title: String,
    pub status: String,
}

/// Project data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub title: String,
    pub status: String,
}

/// Which collection a board shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Tasks,
    Projects,
}

/// Common view of anything that can sit on a board lane
pub trait Card {
    fn id(&self) -> u32;
    fn title(&self) -> &str;
    fn status(&self) -> &str;
}

impl Card for Task {
    fn id(&self) -> u32 {
        self.id
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn status(&self) -> &str {
        &self.status
    }
}

impl Card for SubTask {
    fn id(&self) -> u32 {
        self.id
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn status(&self) -> &str {
        &self.status
    }
}

impl Card for Project {
    fn id(&self) -> u32 {
        self.id
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn status(&self) -> &str {
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_ids() {
        let nested = vec![IdGroup::Many(vec![5]), IdGroup::Many(vec![6])];
        let flat = vec![IdGroup::One(5), IdGroup::One(6)];
        assert_eq!(flatten_ids(&nested), vec![5, 6]);
        assert_eq!(flatten_ids(&nested), flatten_ids(&flat));
        assert_eq!(flatten_ids(&[]), Vec::<u32>::new());
    }

    #[test]
    fn test_task_deserializes_nested_id_lists() {
        let json = r#"{
            "id": 9,
            "title": "Plan sprint",
            "status": "open",
            "predecessorIds": [[5], [6]],
            "successorIds": [7]
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(flatten_ids(&task.predecessor_ids), vec![5, 6]);
        assert_eq!(flatten_ids(&task.successor_ids), vec![7]);
        assert!(task.sub_tasks.is_empty());
    }

    #[test]
    fn test_missing_id_defaults_to_zero() {
        let json = r#"{"title": "no id", "status": "open"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, 0);
    }
}
