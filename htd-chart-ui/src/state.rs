//! Application state managed via Dioxus context.
//!
//! `AppState` is provided once with `use_context_provider`. Child components
//! retrieve it with `use_context::<AppState>()` and go through the
//! `RecordStore` transitions for every change.

use crate::theme;
use dioxus::prelude::*;
use htd_store::RecordStore;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Dataset and view state; the only copy for the session
    pub store: Signal<RecordStore>,
    /// Dark color scheme, restored from the saved preference
    pub dark_mode: Signal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: Signal::new(RecordStore::new()),
            dark_mode: Signal::new(theme::load_dark_mode()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
