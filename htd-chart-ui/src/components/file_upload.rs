//! CSV file picker.

use crate::state::AppState;
use crate::submit;
use dioxus::prelude::*;

/// File input plus a read-only field showing the committed file name.
///
/// Disabled while a submission is loading.
#[component]
pub fn FileUpload() -> Element {
    let state = use_context::<AppState>();
    let store = state.store;
    let (filename, loading) = {
        let store = store.read();
        (store.view().filename.clone(), store.view().loading)
    };

    let on_change = move |evt: Event<FormData>| {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        spawn(async move {
            let name = file.name();
            match file.read_string().await {
                Ok(raw) => submit::upload(store, name, raw).await,
                Err(e) => submit::read_failed(store, format!("{:?}", e)),
            }
        });
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 8px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "CSV file: "
                input {
                    r#type: "file",
                    accept: ".csv,text/csv",
                    disabled: loading,
                    onchange: on_change,
                }
            }
            input {
                r#type: "text",
                readonly: true,
                placeholder: "No file selected",
                value: "{filename}",
                style: "width: 180px;",
            }
        }
    }
}
