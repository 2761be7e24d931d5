//! Shared Dioxus components and D3.js bridge for the temperature dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js chart via `js_sys::eval()`
//! - `state`: Reactive AppState wrapping the `RecordStore` in a Signal
//! - `submit`: the upload flow that parses a file and drives a submission
//! - `theme`: dark mode preference persisted in localStorage
//! - `components`: Reusable RSX components (upload, selectors, containers)

pub mod components;
pub mod js_bridge;
pub mod state;
pub mod submit;
pub mod theme;
