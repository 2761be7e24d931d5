//! Columns a temperature CSV must carry.

use crate::month::{Month, MONTHS};
use std::fmt;

/// One of the fourteen recognized CSV columns.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Column {
    Year,
    Month(Month),
    Annual,
}

impl Column {
    /// Header token for this column (case-sensitive).
    pub fn name(self) -> &'static str {
        match self {
            Column::Year => "Year",
            Column::Month(m) => m.abbrev(),
            Column::Annual => "Annual",
        }
    }

    pub fn from_name(s: &str) -> Option<Column> {
        match s {
            "Year" => Some(Column::Year),
            "Annual" => Some(Column::Annual),
            other => Month::from_abbrev(other).map(Column::Month),
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The full expected column set: `Year`, `Jan`..`Dec`, `Annual`.
pub fn columns() -> Vec<Column> {
    let mut cols = Vec::with_capacity(MONTHS.len() + 2);
    cols.push(Column::Year);
    cols.extend(MONTHS.iter().copied().map(Column::Month));
    cols.push(Column::Annual);
    cols
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_column_set() {
        let cols = columns();
        assert_eq!(cols.len(), 14);
        assert_eq!(cols[0], Column::Year);
        assert_eq!(cols[13], Column::Annual);
    }

    #[test]
    fn names_round_trip() {
        for col in columns() {
            assert_eq!(Column::from_name(col.name()), Some(col));
        }
        assert_eq!(Column::from_name("Station Number"), None);
        assert_eq!(Column::from_name("year"), None);
    }
}
