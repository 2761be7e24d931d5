//! Upload flow shared by the file input and the sample button.
//!
//! The store is only borrowed between awaits so the UI can keep reading it
//! while a submission is in flight.

use dioxus::prelude::*;
use htd_core::parser::parse_temperatures;
use htd_core::ParseError;
use htd_store::{EchoGateway, GatewayConfig, HttpGateway, RecordStore, SubmissionGateway};

/// Base URL of the echo server, fixed at build time.
const API_URL: Option<&str> = option_env!("HTD_API_URL");

/// HTTP gateway when `HTD_API_URL` was set for the build, else in-process echo.
pub fn gateway() -> Box<dyn SubmissionGateway> {
    match API_URL {
        Some(url) if !url.trim().is_empty() => {
            log::info!("[HTD] submit: posting to {}", url);
            Box::new(HttpGateway::new(GatewayConfig::new(url)))
        }
        _ => Box::new(EchoGateway),
    }
}

/// Parse `raw` and submit it under `filename`.
///
/// A header without the required columns sets `error` and submits nothing.
/// Ignored while another submission is outstanding.
pub async fn upload(mut store: Signal<RecordStore>, filename: String, raw: String) {
    if store.read().view().loading {
        log::warn!("[HTD] submit: ignoring {} while a submission is loading", filename);
        return;
    }

    let dataset = match parse_temperatures(&raw) {
        Ok(dataset) => dataset,
        Err(e) => {
            log::warn!("[HTD] submit: rejected {}: {}", filename, e);
            store.write().set_error(e.to_string());
            return;
        }
    };

    let pending = store.write().begin_submit(filename);
    let result = gateway().submit(dataset).await;
    store.write().finish_submit(pending, result);
}

/// The file could not be read at all.
pub fn read_failed(mut store: Signal<RecordStore>, detail: String) {
    log::error!("[HTD] submit: file read failed: {}", detail);
    store.write().set_error(ParseError::ReadFailure(detail).to_string());
}
