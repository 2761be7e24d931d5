//! Monthly/yearly chart switch.

use crate::state::AppState;
use dioxus::prelude::*;
use htd_core::ViewMode;

/// Changing the chart type also clears the year filter.
#[component]
pub fn ModeSelector() -> Element {
    let state = use_context::<AppState>();
    let mut store = state.store;
    let mode = store.read().view().mode;

    let on_change = move |evt: Event<FormData>| {
        let wanted = evt.value().parse::<ViewMode>().unwrap_or_else(|_| mode.toggled());
        if wanted != store.read().view().mode {
            store.write().toggle_mode();
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                style: "font-weight: bold;",
                "Chart: "
                select {
                    onchange: on_change,
                    for option_mode in [ViewMode::Monthly, ViewMode::Yearly] {
                        option {
                            value: "{option_mode}",
                            selected: option_mode == mode,
                            "{option_mode}"
                        }
                    }
                }
            }
        }
    }
}
