//! Lane Partition
//!
//! Pure helpers that split a card collection into board lanes by status.

use std::collections::HashMap;

use crate::models::Card;
use crate::status::normalize_key;

/// A board column definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneDef {
    pub title: &'static str,
}

impl LaneDef {
    /// Status key this lane matches ("Active" is the open lane)
    pub fn key(&self) -> String {
        let key = normalize_key(self.title);
        if key == "active" {
            "open".to_string()
        } else {
            key
        }
    }
}

/// Tasks board columns
pub const TASK_LANES: [LaneDef; 5] = [
    LaneDef { title: "Open" },
    LaneDef { title: "In Progress" },
    LaneDef { title: "On Hold" },
    LaneDef { title: "Completed" },
    LaneDef { title: "Overdue" },
];

/// Sprint board columns
pub const SPRINT_LANES: [LaneDef; 4] = [
    LaneDef { title: "Sprint" },
    LaneDef { title: "Active" },
    LaneDef { title: "In Progress" },
    LaneDef { title: "Completed" },
];

/// Projects board columns
pub const PROJECT_LANES: [LaneDef; 4] = [
    LaneDef { title: "Open" },
    LaneDef { title: "In Progress" },
    LaneDef { title: "On Hold" },
    LaneDef { title: "Completed" },
];

/// Result of partitioning cards into lanes
#[derive(Debug, Clone, PartialEq)]
pub struct Partition<T> {
    /// Lane buckets, same order as the lane definitions
    pub lanes: Vec<(LaneDef, Vec<T>)>,
    /// Ids whose status matched no lane (kept in the source collection)
    pub unmatched: Vec<u32>,
}

/// Partial records (no id or no display text) are skipped at the render
/// boundary rather than failing the whole board.
pub fn is_renderable<T: Card>(card: &T) -> bool {
    card.id() != 0 && !card.title().trim().is_empty()
}

/// Split cards into lanes by normalized status.
///
/// Single pass over the cards with a precomputed status index; stable
/// within each lane. Cards that are not renderable are skipped; cards
/// whose status matches no lane are reported in `unmatched` so the
/// caller can log them.
pub fn partition_by_lane<T: Card + Clone>(cards: &[T], lane_defs: &[LaneDef]) -> Partition<T> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut lanes: Vec<(LaneDef, Vec<T>)> = Vec::with_capacity(lane_defs.len());
    for (i, def) in lane_defs.iter().enumerate() {
        index.insert(def.key(), i);
        lanes.push((*def, Vec::new()));
    }

    let mut unmatched = Vec::new();
    for card in cards.iter().filter(|c| is_renderable(*c)) {
        match index.get(&normalize_key(card.status())) {
            Some(&i) => lanes[i].1.push(card.clone()),
            None => unmatched.push(card.id()),
        }
    }

    Partition { lanes, unmatched }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

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

    fn lane_items<'a>(partition: &'a Partition<Task>, title: &str) -> &'a Vec<Task> {
        &partition
            .lanes
            .iter()
            .find(|(def, _)| def.title == title)
            .unwrap()
            .1
    }

    #[test]
    fn test_partition_is_disjoint() {
        let tasks = vec![
            make_task(1, "open"),
            make_task(2, "in_progress"),
            make_task(3, "completed"),
            make_task(4, "open"),
            make_task(5, "archived"), // not in the vocabulary
        ];

        let partition = partition_by_lane(&tasks, &TASK_LANES);

        // Every recognized task appears in exactly one lane
        for task in &tasks[..4] {
            let appearances: usize = partition
                .lanes
                .iter()
                .map(|(_, items)| items.iter().filter(|t| t.id == task.id).count())
                .sum();
            assert_eq!(appearances, 1, "task {} should be in exactly one lane", task.id);
        }

        // Unrecognized status lands in no lane but is reported
        let total: usize = partition.lanes.iter().map(|(_, items)| items.len()).sum();
        assert_eq!(total, 4);
        assert_eq!(partition.unmatched, vec![5]);
    }

    #[test]
    fn test_active_lane_matches_open() {
        let tasks = vec![make_task(1, "open"), make_task(2, "sprint")];
        let partition = partition_by_lane(&tasks, &SPRINT_LANES);

        assert_eq!(lane_items(&partition, "Active").len(), 1);
        assert_eq!(lane_items(&partition, "Active")[0].id, 1);
        assert_eq!(lane_items(&partition, "Sprint")[0].id, 2);
    }

    #[test]
    fn test_lane_order_is_stable() {
        let tasks = vec![make_task(3, "open"), make_task(1, "open"), make_task(2, "open")];
        let partition = partition_by_lane(&tasks, &TASK_LANES);
        let ids: Vec<u32> = lane_items(&partition, "Open").iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_malformed_cards_are_skipped() {
        let mut blank = make_task(6, "open");
        blank.title = "   ".to_string();
        let tasks = vec![make_task(0, "open"), blank, make_task(7, "open")];

        let partition = partition_by_lane(&tasks, &TASK_LANES);

        let ids: Vec<u32> = lane_items(&partition, "Open").iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![7]);
        // Skipped records are not "unmatched" either; they are simply not renderable
        assert!(partition.unmatched.is_empty());
    }
}
