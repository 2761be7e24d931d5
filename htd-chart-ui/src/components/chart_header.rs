//! Page header with title and the loaded file name.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    /// Name of the committed file, hidden when empty
    #[props(default = String::new())]
    pub filename: String,
    #[props(default = String::from("#666"))]
    pub muted_color: String,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h2 {
                style: "margin: 0 0 4px 0; font-size: 20px;",
                "{props.title}"
            }
            if !props.filename.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: {props.muted_color};",
                    "File: {props.filename}"
                }
            }
        }
    }
}
