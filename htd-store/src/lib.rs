//! Session state for the temperature dashboard.
//!
//! This crate provides:
//! - `store`: `RecordStore`, the single owner of the dataset and view state,
//!   with its transitions and derived reads
//! - `gateway`: the `SubmissionGateway` seam that round-trips a dataset
//!   through an outward "persist and confirm" call

pub mod gateway;
pub mod store;

pub use gateway::{EchoGateway, SubmissionError, SubmissionGateway};
#[cfg(feature = "api")]
pub use gateway::{GatewayConfig, HttpGateway};
pub use store::{PendingSubmission, RecordStore, ViewState};
