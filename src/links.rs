//! Dependency Links
//!
//! Explicit links are user-toggled arrows between tasks. Inferred links
//! are recomputed wholesale from predecessor/successor id lists whenever
//! the task set changes; they are never updated incrementally, so they
//! cannot drift from the source data.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::{flatten_ids, Task};

/// A user-created dependency arrow. Storage and rendering are
/// directional; membership checks for toggling are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplicitLink {
    #[serde(rename = "sourceId")]
    pub source_id: u32,
    #[serde(rename = "targetId")]
    pub target_id: u32,
}

impl ExplicitLink {
    /// Composite key, unique in the explicit set
    pub fn key(&self) -> String {
        format!("{}-{}", self.source_id, self.target_id)
    }
}

/// How an inferred link was classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InferredKind {
    Predecessor,
    Successor,
}

/// A dependency arrow derived from the current task set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InferredLink {
    pub source_id: u32,
    pub target_id: u32,
    pub kind: InferredKind,
}

/// Visual parameters for one rendered link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkStyle {
    pub color: &'static str,
    pub width: u32,
    pub dash: Option<&'static str>,
}

/// Explicit links: solid red
pub const EXPLICIT_STYLE: LinkStyle = LinkStyle {
    color: "#dc2626",
    width: 2,
    dash: None,
};

/// Inferred predecessor links: thin solid gray
pub const PREDECESSOR_STYLE: LinkStyle = LinkStyle {
    color: "#9ca3af",
    width: 1,
    dash: None,
};

/// Inferred successor links: dashed red
pub const SUCCESSOR_STYLE: LinkStyle = LinkStyle {
    color: "#dc2626",
    width: 1,
    dash: Some("6 3"),
};

/// A link ready to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedLink {
    pub source_id: u32,
    pub target_id: u32,
    pub style: LinkStyle,
}

fn linked_either_way(links: &[ExplicitLink], a: u32, b: u32) -> bool {
    links
        .iter()
        .any(|l| (l.source_id == a && l.target_id == b) || (l.source_id == b && l.target_id == a))
}

/// Ids linked to `source_id`, in either direction
fn linked_ids(links: &[ExplicitLink], source_id: u32) -> HashSet<u32> {
    links
        .iter()
        .filter_map(|l| {
            if l.source_id == source_id {
                Some(l.target_id)
            } else if l.target_id == source_id {
                Some(l.source_id)
            } else {
                None
            }
        })
        .collect()
}

/// Toggle links from one source card to a set of targets.
///
/// An empty target list is a no-op. When the requested targets cover the
/// source's entire linked set (direction ignored), all of those links
/// are removed. Otherwise only the missing pairs are added and existing
/// pairs stay as they are, so repeated calls with a superset top up
/// missing links and only flip to removal once the set is fully covered.
pub fn toggle_links(links: &mut Vec<ExplicitLink>, source_id: u32, target_ids: &[u32]) {
    if target_ids.is_empty() {
        return;
    }

    let requested: HashSet<u32> = target_ids.iter().copied().collect();
    let linked = linked_ids(links, source_id);

    if !linked.is_empty() && requested == linked {
        links.retain(|l| {
            !(l.source_id == source_id && requested.contains(&l.target_id)
                || l.target_id == source_id && requested.contains(&l.source_id))
        });
    } else {
        for &target_id in target_ids {
            if !linked_either_way(links, source_id, target_id) {
                links.push(ExplicitLink { source_id, target_id });
            }
        }
    }
}

/// Recompute inferred links from the current task set. Arrows only
/// connect ids that are actually on the board.
pub fn derive_inferred(tasks: &[Task]) -> Vec<InferredLink> {
    let known: HashSet<u32> = tasks.iter().map(|t| t.id).collect();
    let mut out = Vec::new();
    for task in tasks {
        for pred in flatten_ids(&task.predecessor_ids) {
            if known.contains(&pred) {
                out.push(InferredLink {
                    source_id: pred,
                    target_id: task.id,
                    kind: InferredKind::Predecessor,
                });
            }
        }
        for succ in flatten_ids(&task.successor_ids) {
            if known.contains(&succ) {
                out.push(InferredLink {
                    source_id: task.id,
                    target_id: succ,
                    kind: InferredKind::Successor,
                });
            }
        }
    }
    out
}

/// Union of explicit and inferred links. Explicit styling wins on a
/// duplicate (source, target) key; each key renders once.
pub fn render_links(explicit: &[ExplicitLink], inferred: &[InferredLink]) -> Vec<RenderedLink> {
    let mut seen: HashSet<(u32, u32)> = HashSet::new();
    let mut out = Vec::new();

    for link in explicit {
        if seen.insert((link.source_id, link.target_id)) {
            out.push(RenderedLink {
                source_id: link.source_id,
                target_id: link.target_id,
                style: EXPLICIT_STYLE,
            });
        }
    }

    for link in inferred {
        if seen.insert((link.source_id, link.target_id)) {
            let style = match link.kind {
                InferredKind::Predecessor => PREDECESSOR_STYLE,
                InferredKind::Successor => SUCCESSOR_STYLE,
            };
            out.push(RenderedLink {
                source_id: link.source_id,
                target_id: link.target_id,
                style,
            });
        }
    }

    out
}

/// Parse the numeric id out of a DOM node key like `task-12`
pub fn parse_node_id(key: &str) -> Option<u32> {
    key.rsplit_once('-').and_then(|(_, n)| n.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IdGroup, Task};

    fn make_task(id: u32) -> Task {
        Task {
            id,
            title: format!("Task {}", id),
            status: "open".to_string(),
            predecessor_ids: Vec::new(),
            successor_ids: Vec::new(),
            sub_tasks: Vec::new(),
        }
    }

    fn pairs(links: &[ExplicitLink]) -> Vec<(u32, u32)> {
        links.iter().map(|l| (l.source_id, l.target_id)).collect()
    }

    #[test]
    fn test_toggle_adds_tops_up_then_removes() {
        let mut links = Vec::new();

        // Empty set: both pairs are added
        toggle_links(&mut links, 1, &[2, 3]);
        assert_eq!(pairs(&links), vec![(1, 2), (1, 3)]);

        // Subset request: 2 is already linked, 3 stays untouched, nothing removed
        toggle_links(&mut links, 1, &[2]);
        assert_eq!(pairs(&links), vec![(1, 2), (1, 3)]);

        // Full cover: everything toggles off
        toggle_links(&mut links, 1, &[2, 3]);
        assert!(links.is_empty());
    }

    #[test]
    fn test_toggle_empty_targets_is_noop() {
        let mut links = vec![ExplicitLink { source_id: 1, target_id: 2 }];
        toggle_links(&mut links, 1, &[]);
        assert_eq!(links.len(), 1);
    }

    #[test]
    fn test_toggle_membership_ignores_direction() {
        // Stored as 2 -> 1; toggling from 1 still sees it as linked
        let mut links = vec![ExplicitLink { source_id: 2, target_id: 1 }];
        toggle_links(&mut links, 1, &[2]);
        assert!(links.is_empty());
    }

    #[test]
    fn test_toggle_tops_up_superset() {
        let mut links = vec![ExplicitLink { source_id: 1, target_id: 2 }];
        toggle_links(&mut links, 1, &[2, 3, 4]);
        assert_eq!(pairs(&links), vec![(1, 2), (1, 3), (1, 4)]);
    }

    #[test]
    fn test_inferred_flattening() {
        let mut a = make_task(9);
        a.predecessor_ids = vec![IdGroup::Many(vec![5]), IdGroup::Many(vec![6])];
        let mut b = make_task(10);
        b.predecessor_ids = vec![IdGroup::One(5), IdGroup::One(6)];
        let tasks = vec![make_task(5), make_task(6), a, b];

        let inferred = derive_inferred(&tasks);

        let into_9: Vec<_> = inferred.iter().filter(|l| l.target_id == 9).collect();
        let into_10: Vec<_> = inferred.iter().filter(|l| l.target_id == 10).collect();
        assert_eq!(into_9.len(), 2);
        assert_eq!(into_10.len(), 2);
        assert!(into_9.iter().all(|l| l.kind == InferredKind::Predecessor));
        assert!(into_9.iter().any(|l| l.source_id == 5));
        assert!(into_9.iter().any(|l| l.source_id == 6));
    }

    #[test]
    fn test_successor_classification() {
        let mut a = make_task(2);
        a.successor_ids = vec![IdGroup::One(3)];
        let tasks = vec![a, make_task(3)];

        let inferred = derive_inferred(&tasks);
        assert_eq!(
            inferred,
            vec![InferredLink { source_id: 2, target_id: 3, kind: InferredKind::Successor }]
        );
    }

    #[test]
    fn test_inferred_skips_ids_off_the_board() {
        let mut a = make_task(2);
        a.predecessor_ids = vec![IdGroup::One(99)];
        let inferred = derive_inferred(&[a]);
        assert!(inferred.is_empty());
    }

    #[test]
    fn test_explicit_precedence_over_inferred() {
        let explicit = vec![ExplicitLink { source_id: 2, target_id: 3 }];
        let inferred = vec![InferredLink { source_id: 2, target_id: 3, kind: InferredKind::Successor }];

        let rendered = render_links(&explicit, &inferred);

        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].style, EXPLICIT_STYLE);
    }

    #[test]
    fn test_three_styles_are_distinct() {
        assert_ne!(EXPLICIT_STYLE, PREDECESSOR_STYLE);
        assert_ne!(EXPLICIT_STYLE, SUCCESSOR_STYLE);
        assert_ne!(PREDECESSOR_STYLE, SUCCESSOR_STYLE);
    }

    #[test]
    fn test_parse_node_id() {
        assert_eq!(parse_node_id("task-12"), Some(12));
        assert_eq!(parse_node_id("task-x"), None);
        assert_eq!(parse_node_id("12"), None);
    }
}
