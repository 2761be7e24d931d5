//! CSV text to `Dataset`.
//!
//! The first non-blank line is the header. Header tokens outside the expected
//! column set (e.g. `Product code`, `Station Number` in Bureau of Meteorology
//! exports) are skipped. Every expected column must appear exactly once.
//!
//! # Example CSV
//! ```text
//! Product code,Station Number,Year,Jan,Feb,Mar,Apr,May,Jun,Jul,Aug,Sep,Oct,Nov,Dec,Annual
//! IDCJAC0002,066062,1859,25.7,25.4,24.2,23.1,19.5,15.7,14.7,17.7,18.3,23.9,23.6,25.4,21.4
//! ```

use crate::column::{columns, Column};
use crate::error::ParseError;
use crate::record::{Dataset, TemperatureRecord};
use csv::{ReaderBuilder, StringRecord, Trim};

/// Parse CSV text against the full `Year`, `Jan`..`Dec`, `Annual` column set.
pub fn parse_temperatures(raw: &str) -> Result<Dataset, ParseError> {
    parse(raw, &columns())
}

/// Decode `bytes` as UTF-8 and parse them. Undecodable input is a read failure.
pub fn parse_bytes(bytes: &[u8], expected: &[Column]) -> Result<Dataset, ParseError> {
    let text = std::str::from_utf8(bytes).map_err(|e| ParseError::ReadFailure(e.to_string()))?;
    parse(text, expected)
}

/// Parse CSV text into records, mapping each header token in `expected` to
/// its field.
///
/// Blank lines are ignored and an empty file yields an empty dataset. Every
/// other line is a record, even one made only of commas. Fields are split on
/// `,` with no quoting, so a stray `"` spoils only its own cell. Cells that do
/// not parse as numbers become missing; short rows leave their trailing
/// fields missing.
pub fn parse(raw: &str, expected: &[Column]) -> Result<Dataset, ParseError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(raw.as_bytes());

    let mut rows = rdr
        .records()
        .filter(|r| r.as_ref().map_or(true, |rec| !is_blank_line(rec)));

    let header = match rows.next() {
        Some(h) => h.map_err(|e| ParseError::ReadFailure(e.to_string()))?,
        None => {
            log::debug!("[HTD] parser: empty input");
            return Ok(Vec::new());
        }
    };
    let header_columns = match_header(&header, expected)?;

    let mut dataset = Dataset::new();
    for result in rows {
        let row = result.map_err(|e| ParseError::ReadFailure(e.to_string()))?;
        let mut record = TemperatureRecord::default();
        for (idx, column) in header_columns.iter().enumerate() {
            if let Some(column) = column {
                record.set_cell(*column, row.get(idx).unwrap_or(""));
            }
        }
        if record.year.is_none() {
            log::warn!(
                "[HTD] parser: row {} has no usable Year",
                dataset.len() + 1
            );
        }
        dataset.push(record);
    }
    log::info!("[HTD] parser: parsed {} records", dataset.len());
    Ok(dataset)
}

/// A whitespace-only line reads as a single empty field.
fn is_blank_line(record: &StringRecord) -> bool {
    record.len() == 1 && record.get(0).map_or(true, str::is_empty)
}

/// Resolve each header token to an expected column (or `None` to skip it).
fn match_header(header: &StringRecord, expected: &[Column]) -> Result<Vec<Option<Column>>, ParseError> {
    let header_columns: Vec<Option<Column>> = header
        .iter()
        .map(|token| Column::from_name(token).filter(|c| expected.contains(c)))
        .collect();

    let recognized = header_columns.iter().flatten().count();
    let all_present = expected.iter().all(|c| header_columns.contains(&Some(*c)));
    if recognized != expected.len() || !all_present {
        log::warn!(
            "[HTD] parser: header has {} of {} required columns",
            recognized,
            expected.len()
        );
        return Err(ParseError::InvalidColumns {
            expected: expected.to_vec(),
        });
    }
    Ok(header_columns)
}
