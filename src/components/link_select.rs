//! Link Selection
//!
//! Click-to-select state for the per-card link affordance: the first
//! click picks the source card, further clicks collect targets, and
//! apply toggles the whole batch against the explicit link set.

use leptos::prelude::*;

use crate::store::{store_toggle_links, AppStore};

#[derive(Clone, Copy)]
pub struct LinkSelection {
    pub source: ReadSignal<Option<u32>>,
    set_source: WriteSignal<Option<u32>>,
    pub targets: ReadSignal<Vec<u32>>,
    set_targets: WriteSignal<Vec<u32>>,
}

impl LinkSelection {
    pub fn new() -> Self {
        let (source, set_source) = signal(None::<u32>);
        let (targets, set_targets) = signal(Vec::<u32>::new());
        Self { source, set_source, targets, set_targets }
    }

    /// Handle a click on a card's link icon
    pub fn pick(&self, id: u32) {
        match self.source.get_untracked() {
            None => self.set_source.set(Some(id)),
            Some(source) if source == id => self.clear(),
            Some(_) => self.set_targets.update(|targets| {
                if let Some(i) = targets.iter().position(|&t| t == id) {
                    targets.remove(i);
                } else {
                    targets.push(id);
                }
            }),
        }
    }

    /// Toggle the collected batch; an empty target list is a no-op
    pub fn apply(&self, store: &AppStore) {
        if let Some(source) = self.source.get_untracked() {
            let targets = self.targets.get_untracked();
            store_toggle_links(store, source, &targets);
        }
        self.clear();
    }

    pub fn clear(&self) {
        self.set_source.set(None);
        self.set_targets.set(Vec::new());
    }

    pub fn is_source(&self, id: u32) -> bool {
        self.source.get() == Some(id)
    }

    pub fn is_target(&self, id: u32) -> bool {
        self.targets.get().contains(&id)
    }
}
