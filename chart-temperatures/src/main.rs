//! Historical Temperature Dashboard
//!
//! Upload a CSV of monthly temperatures per year and chart it either as one
//! line per year across the months, or as the annual mean per year with a
//! one-sigma band.
//!
//! Data flow:
//! 1. A file is picked (or the bundled sample is loaded) and parsed.
//! 2. The parsed rows go through the submission gateway; what comes back
//!    replaces the dataset in the `RecordStore`.
//! 3. Whenever the store or the theme changes, the current projection is
//!    styled and handed to the D3 chart.

use dioxus::prelude::*;
use htd_chart_ui::components::{
    ChartContainer, ChartHeader, ClearButton, ErrorDisplay, FileUpload, LoadingSpinner,
    ModeSelector, ThemeToggle, YearSelector,
};
use htd_chart_ui::js_bridge::{self, JsRandomColors};
use htd_chart_ui::state::AppState;
use htd_chart_ui::{submit, theme};

/// Sample data bundled by `build.rs`.
const SAMPLE_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/temperatures.csv"));
const SAMPLE_NAME: &str = "temperatures.csv";

/// Chart container DOM element ID used by D3.js to render into.
const CHART_ID: &str = "temperature-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("temperatures-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);
    let mut store = state.store;

    use_effect(|| {
        js_bridge::init_charts();
    });

    // Redraw whenever the dataset, the view state or the theme changes
    use_effect(move || {
        let dark = (state.dark_mode)();
        let store = store.read();
        if !store.has_data() {
            js_bridge::destroy_chart(CHART_ID);
            return;
        }
        let chart = store.chart_data(&mut JsRandomColors);
        log::info!(
            "[HTD] app: drawing {} with {} series",
            chart.meta.title,
            chart.datasets.len()
        );
        js_bridge::render_temperature_chart(CHART_ID, &chart, theme::palette(dark));
    });

    let palette = theme::palette((state.dark_mode)());
    let (filename, loading, error, has_data) = {
        let store = store.read();
        let view = store.view();
        (
            view.filename.clone(),
            view.loading,
            view.error.clone(),
            store.has_data(),
        )
    };
    let sample_missing = SAMPLE_CSV.trim().is_empty();

    rsx! {
        div {
            style: "min-height: 100vh; padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: {palette.background}; color: {palette.text};",

            div {
                style: "display: flex; justify-content: space-between; align-items: flex-start;",
                ChartHeader {
                    title: "Historical Temperature Dashboard".to_string(),
                    filename: filename,
                    muted_color: palette.muted.to_string(),
                }
                ThemeToggle {}
            }

            div {
                style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: center; margin-bottom: 8px; padding: 8px 12px; background: {palette.panel}; border: 1px solid {palette.border}; border-radius: 4px;",
                FileUpload {}
                button {
                    style: "padding: 4px 12px; cursor: pointer;",
                    disabled: loading || sample_missing,
                    onclick: move |_| {
                        spawn(submit::upload(store, SAMPLE_NAME.to_string(), SAMPLE_CSV.to_string()));
                    },
                    "Load sample"
                }
                YearSelector {}
                ModeSelector {}
                ClearButton {}
            }

            if !error.is_empty() {
                ErrorDisplay {
                    message: error,
                    on_dismiss: move |_| store.write().clear_error(),
                }
            }

            if loading {
                LoadingSpinner {}
            }

            ChartContainer {
                id: CHART_ID.to_string(),
                empty: !has_data,
                dark: (state.dark_mode)(),
            }
        }
    }
}
