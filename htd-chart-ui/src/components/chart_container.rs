//! Chart container component with placeholder text.

use crate::theme;
use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (D3 will render into this)
    pub id: String,
    /// Show the placeholder instead of a chart
    #[props(default = false)]
    pub empty: bool,
    #[props(default = false)]
    pub dark: bool,
    /// Optional minimum height in pixels
    #[props(default = 420)]
    pub min_height: u32,
}

/// A container div for the D3.js chart.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let palette = theme::palette(props.dark);
    let style = format!(
        "min-height: {}px; position: relative; width: 100%; background: {}; border: 1px solid {}; border-radius: 4px;",
        props.min_height, palette.background, palette.border
    );

    rsx! {
        div {
            style: "{style}",
            if props.empty {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: {palette.muted};",
                    "Upload a CSV file to see the chart"
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
