//! Resets the dashboard to its initial state.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn ClearButton() -> Element {
    let state = use_context::<AppState>();
    let mut store = state.store;
    let loading = store.read().view().loading;

    rsx! {
        button {
            style: "margin: 8px 0; padding: 4px 12px; cursor: pointer;",
            disabled: loading,
            onclick: move |_| {
                log::info!("[HTD] ui: clearing dashboard");
                store.write().clear();
            },
            "Clear"
        }
    }
}
