//! Light/dark switch.

use crate::state::AppState;
use crate::theme;
use dioxus::prelude::*;

#[component]
pub fn ThemeToggle() -> Element {
    let mut state = use_context::<AppState>();
    let dark = (state.dark_mode)();

    rsx! {
        button {
            style: "padding: 4px 12px; cursor: pointer;",
            onclick: move |_| {
                let next = !(state.dark_mode)();
                state.dark_mode.set(next);
                theme::save_dark_mode(next);
            },
            if dark { "Light mode" } else { "Dark mode" }
        }
    }
}
