//! Year filter dropdown.

use crate::state::AppState;
use dioxus::prelude::*;

/// Picks a single year to chart. Choosing a year switches to the monthly chart.
#[component]
pub fn YearSelector() -> Element {
    let state = use_context::<AppState>();
    let mut store = state.store;
    let (years, selected) = {
        let store = store.read();
        (store.years(), store.view().selected_year)
    };

    let on_change = move |evt: Event<FormData>| {
        let year = evt.value().parse::<i32>().ok();
        store.write().select_year(year);
    };

    let no_years = years.is_empty();

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                style: "font-weight: bold;",
                "Year: "
                select {
                    disabled: no_years,
                    onchange: on_change,
                    option {
                        value: "",
                        selected: selected.is_none(),
                        "All years"
                    }
                    for year in years {
                        option {
                            value: "{year}",
                            selected: selected == Some(year),
                            "{year}"
                        }
                    }
                }
            }
        }
    }
}
