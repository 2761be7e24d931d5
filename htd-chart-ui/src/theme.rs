//! Light/dark color scheme.

use serde::Serialize;

const STORAGE_KEY: &str = "darkMode";

/// Colors handed to the chart script alongside the data.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub grid: &'static str,
    pub panel: &'static str,
    pub border: &'static str,
}

pub const LIGHT: Palette = Palette {
    background: "#FFFFFF",
    text: "#212121",
    muted: "#666666",
    grid: "#E0E0E0",
    panel: "#FAFAFA",
    border: "#E0E0E0",
};

pub const DARK: Palette = Palette {
    background: "#121212",
    text: "#E0E0E0",
    muted: "#9E9E9E",
    grid: "#333333",
    panel: "#1E1E1E",
    border: "#424242",
};

pub fn palette(dark: bool) -> &'static Palette {
    if dark {
        &DARK
    } else {
        &LIGHT
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Saved preference, light when nothing was saved or storage is unavailable.
pub fn load_dark_mode() -> bool {
    storage()
        .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
        .map(|v| v == "true")
        .unwrap_or(false)
}

pub fn save_dark_mode(dark: bool) {
    match storage() {
        Some(s) => {
            if s.set_item(STORAGE_KEY, if dark { "true" } else { "false" }).is_err() {
                log::warn!("[HTD] theme: could not save preference");
            }
        }
        None => log::warn!("[HTD] theme: localStorage unavailable"),
    }
}
