use crate::column::Column;
use thiserror::Error;

/// Errors surfaced while turning an uploaded file into a `Dataset`.
///
/// Individual cells that fail numeric coercion are not errors; they become
/// `Reading::Missing`.
#[derive(Debug, Error, PartialEq, Clone)]
pub enum ParseError {
    /// The header does not carry the required column set.
    #[error("File must have at least the columns {}", join_columns(.expected))]
    InvalidColumns { expected: Vec<Column> },
    /// The file content could not be read as text.
    #[error("Error reading file")]
    ReadFailure(String),
}

fn join_columns(columns: &[Column]) -> String {
    columns
        .iter()
        .map(|c| c.name())
        .collect::<Vec<_>>()
        .join(",")
}
