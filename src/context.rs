//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload collections from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload collections from backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Section-level error banner - read
    pub error: ReadSignal<Option<String>>,
    /// Section-level error banner - write
    set_error: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        error: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            error: error.0,
            set_error: error.1,
        }
    }

    /// Trigger a refetch of the board collections
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Show the section-level error banner
    pub fn report_error(&self, message: String) {
        self.set_error.set(Some(message));
    }

    /// Dismiss the banner
    pub fn clear_error(&self) {
        self.set_error.set(None);
    }
}
