//! The session's record store.
//!
//! `RecordStore` owns the dataset and the view selection. Every write goes
//! through one `&mut self` method, so observers only ever see whole states.
//! Derived reads are recomputed on each call.
//!
//! Submission is split in two so a UI can release its borrow across the
//! network call:
//!
//! ```rust
//! use htd_store::{EchoGateway, RecordStore, SubmissionGateway};
//! use htd_core::TemperatureRecord;
//!
//! # async fn run() {
//! let mut store = RecordStore::new();
//! let dataset = vec![TemperatureRecord::new(1859, [Some(20.0); 12], Some(21.4))];
//!
//! let pending = store.begin_submit("temperatures.csv");
//! assert!(store.view().loading);
//! let result = EchoGateway.submit(dataset).await;
//! store.finish_submit(pending, result);
//! assert!(store.has_data());
//! # }
//! ```

use crate::gateway::{SubmissionError, SubmissionGateway};
use htd_core::parser::parse_temperatures;
use htd_core::{Dataset, TemperatureRecord, ViewMode};
use htd_data::style::{style, ChartData, ColorSource};
use htd_data::{project, ChartProjection};
use log::{info, warn};

/// Selection and status flags owned by the store.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    /// When set, views are scoped to rows with this year.
    pub selected_year: Option<i32>,
    pub mode: ViewMode,
    /// Name of the last uploaded file (display only).
    pub filename: String,
    /// True while a submission is outstanding.
    pub loading: bool,
    /// Empty when no error is active.
    pub error: String,
}

/// Token for an outstanding submission, consumed by
/// [`RecordStore::finish_submit`].
#[derive(Debug)]
#[must_use = "a pending submission must be finished"]
pub struct PendingSubmission {
    filename: String,
}

impl PendingSubmission {
    pub fn filename(&self) -> &str {
        &self.filename
    }
}

/// Dataset plus view state for one session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordStore {
    dataset: Dataset,
    view: ViewState,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dataset(&self) -> &[TemperatureRecord] {
        &self.dataset
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    // ───────────────────── Transitions ─────────────────────

    /// Scope views to `year`, or remove the filter. Leaves the mode alone.
    pub fn set_year(&mut self, year: Option<i32>) {
        self.view.selected_year = year;
    }

    /// Switch between Monthly and Yearly. Leaves the year filter alone.
    pub fn set_mode(&mut self, mode: ViewMode) {
        self.view.mode = mode;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.view.error = message.into();
    }

    pub fn clear_error(&mut self) {
        self.view.error.clear();
    }

    /// Drop the dataset and reset every flag.
    pub fn clear(&mut self) {
        *self = Self::default();
        info!("[HTD] store: cleared");
    }

    /// Year picker behaviour: filter to `year` and show it month by month.
    pub fn select_year(&mut self, year: Option<i32>) {
        self.set_year(year);
        self.set_mode(ViewMode::Monthly);
    }

    /// Mode toggle behaviour: flip the mode and drop any year filter.
    pub fn toggle_mode(&mut self) {
        self.set_mode(self.view.mode.toggled());
        self.set_year(None);
    }

    /// First half of a submission: mark loading and record the filename.
    ///
    /// Callers must not begin another submission while one is outstanding.
    pub fn begin_submit(&mut self, filename: impl Into<String>) -> PendingSubmission {
        let filename = filename.into();
        if self.view.loading {
            warn!(
                "[HTD] store: submission of {} started while another is outstanding",
                filename
            );
        }
        self.view.loading = true;
        self.view.filename = filename.clone();
        info!("[HTD] store: submitting {}", filename);
        PendingSubmission { filename }
    }

    /// Second half of a submission.
    ///
    /// On success the dataset is replaced wholesale and `error` is left as is.
    /// On failure the filename is rolled back, the message becomes `error`
    /// and the previous dataset stays.
    pub fn finish_submit(
        &mut self,
        pending: PendingSubmission,
        result: Result<Dataset, SubmissionError>,
    ) {
        self.view.loading = false;
        match result {
            Ok(dataset) => {
                info!(
                    "[HTD] store: committed {} records from {}",
                    dataset.len(),
                    pending.filename
                );
                self.dataset = dataset;
            }
            Err(e) => {
                warn!("[HTD] store: submission of {} failed: {}", pending.filename, e);
                self.view.filename.clear();
                self.view.error = e.to_string();
            }
        }
    }

    /// Run a whole submission through `gateway`.
    pub async fn submit<G: SubmissionGateway + ?Sized>(
        &mut self,
        gateway: &G,
        filename: impl Into<String>,
        dataset: Dataset,
    ) -> Result<(), SubmissionError> {
        let pending = self.begin_submit(filename);
        let result = gateway.submit(dataset).await;
        let outcome = result.as_ref().map(|_| ()).map_err(|e| e.clone());
        self.finish_submit(pending, result);
        outcome
    }

    /// Parse an uploaded file and submit it.
    ///
    /// A header without the required columns sets `error` and submits
    /// nothing; the store is otherwise untouched.
    pub async fn upload<G: SubmissionGateway + ?Sized>(
        &mut self,
        gateway: &G,
        filename: impl Into<String>,
        raw: &str,
    ) -> bool {
        match parse_temperatures(raw) {
            Ok(dataset) => self.submit(gateway, filename, dataset).await.is_ok(),
            Err(e) => {
                warn!("[HTD] store: rejected upload: {}", e);
                self.set_error(e.to_string());
                false
            }
        }
    }

    // ───────────────────── Derived reads ─────────────────────

    pub fn has_data(&self) -> bool {
        !self.dataset.is_empty()
    }

    /// Each record's year in dataset order; duplicates kept, missing skipped.
    pub fn years(&self) -> Vec<i32> {
        self.dataset.iter().filter_map(|r| r.year).collect()
    }

    /// Rows matching the selected year, or `None` when no year is selected.
    ///
    /// `Some(vec![])` means a filter is active and nothing matched.
    pub fn records_for_selected_year(&self) -> Option<Vec<TemperatureRecord>> {
        let year = self.view.selected_year?;
        Some(
            self.dataset
                .iter()
                .filter(|r| r.year == Some(year))
                .cloned()
                .collect(),
        )
    }

    /// Chart series for the current state.
    pub fn projection(&self) -> ChartProjection {
        let selected = self.records_for_selected_year();
        project(
            &self.dataset,
            selected.as_deref(),
            &self.years(),
            self.view.mode,
        )
    }

    /// Chart series with colors and captions, ready for rendering.
    pub fn chart_data(&self, colors: &mut impl ColorSource) -> ChartData {
        style(self.projection(), self.view.mode, colors)
    }
}
