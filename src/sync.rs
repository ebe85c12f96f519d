//! Debounced Remote Writes
//!
//! Status updates coalesce per (item id, field) inside a trailing
//! window: rapid transfers of the same item produce one remote call
//! carrying the final value, so an earlier value can never clobber a
//! later local state. Writes for different items never coalesce.

use std::collections::HashMap;

/// Trailing debounce window for item field writes, in milliseconds
pub const DEBOUNCE_MS: u32 = 300;

/// Queue key: one pending write per item field
pub type FieldKey = (u32, &'static str);

#[derive(Debug)]
struct PendingWrite {
    value: String,
    generation: u64,
}

/// Coalescing queue for debounced field updates.
///
/// Each `push` supersedes the previous pending write for the same key
/// and returns a generation token. The caller arms one timer per push;
/// when it fires, `flush` yields the value only if no later push took
/// over the window.
#[derive(Debug, Default)]
pub struct UpdateQueue {
    pending: HashMap<FieldKey, PendingWrite>,
    next_generation: u64,
}

impl UpdateQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pending write, superseding any earlier one for this key
    pub fn push(&mut self, key: FieldKey, value: String) -> u64 {
        self.next_generation += 1;
        let generation = self.next_generation;
        self.pending.insert(key, PendingWrite { value, generation });
        generation
    }

    /// Take the value for a key if `generation` is still the latest
    pub fn flush(&mut self, key: FieldKey, generation: u64) -> Option<String> {
        match self.pending.get(&key) {
            Some(p) if p.generation == generation => {
                self.pending.remove(&key).map(|p| p.value)
            }
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_key_coalesces_to_final_value() {
        let mut queue = UpdateQueue::new();
        let key = (7, "status");

        let first = queue.push(key, "open".to_string());
        let second = queue.push(key, "in_progress".to_string());

        // The superseded timer yields nothing; the last one carries the final value
        assert_eq!(queue.flush(key, first), None);
        assert_eq!(queue.flush(key, second), Some("in_progress".to_string()));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_different_keys_never_coalesce() {
        let mut queue = UpdateQueue::new();

        let a = queue.push((7, "status"), "completed".to_string());
        let b = queue.push((8, "status"), "on_hold".to_string());

        assert_eq!(queue.flush((7, "status"), a), Some("completed".to_string()));
        assert_eq!(queue.flush((8, "status"), b), Some("on_hold".to_string()));
    }

    #[test]
    fn test_flush_is_one_shot() {
        let mut queue = UpdateQueue::new();
        let generation = queue.push((7, "status"), "open".to_string());

        assert!(queue.flush((7, "status"), generation).is_some());
        assert_eq!(queue.flush((7, "status"), generation), None);
    }

    #[test]
    fn test_push_after_flush_starts_a_fresh_window() {
        let mut queue = UpdateQueue::new();
        let key = (7, "status");

        let first = queue.push(key, "open".to_string());
        assert!(queue.flush(key, first).is_some());

        let second = queue.push(key, "completed".to_string());
        assert_ne!(first, second);
        assert_eq!(queue.flush(key, second), Some("completed".to_string()));
    }
}
